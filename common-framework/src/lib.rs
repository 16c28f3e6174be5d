//! Common Framework
//!
//! Value types shared by the rewrite framework and the applications built on it.

pub mod checkpoint;
pub mod error;
pub mod position;

pub use checkpoint::Checkpoint;
pub use error::{Error, Result};
pub use position::Position;
