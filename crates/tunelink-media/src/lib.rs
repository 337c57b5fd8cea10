//! yt-dlp CLI wrapper.
//!
//! This crate provides:
//! - A narrow `ExtractorRunner` seam over the yt-dlp process, with timeouts
//! - `ExtractorResolver`, the fallback related-song resolver
//! - `AudioLocator`, best-audio direct stream lookup

pub mod audio;
pub mod command;
pub mod error;
pub mod fallback;
pub mod metrics;

#[cfg(test)]
mod test_support;

pub use audio::AudioLocator;
pub use command::{ExtractorConfig, ExtractorOutput, ExtractorRunner, YtDlpRunner};
pub use error::{MediaError, MediaResult};
pub use fallback::{parse_flat_listing, ExtractorResolver, MAX_FALLBACK_SONGS};
