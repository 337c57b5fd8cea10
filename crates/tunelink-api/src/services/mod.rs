//! Business logic services.

pub mod related;

pub use related::RelatedService;
