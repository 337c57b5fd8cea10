//! Request handlers.

pub mod health;
pub mod related;
pub mod song;

pub use health::*;
pub use related::*;
pub use song::*;
