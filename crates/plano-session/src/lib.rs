//! Interactive plane session: the state object an input layer owns and
//! mutates, and the placements a renderer reads back.

pub mod config;
pub mod helpers;
pub mod session;

pub use config::SessionConfig;
pub use helpers::{Arrow, PlaneHelpers};
pub use session::{PlaneControl, PlaneSession};
