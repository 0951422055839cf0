//! lyricsync-core: Replace ASR transcript text with reference lyrics.
//!
//! Timestamps come from a transcriber; wording comes from the lyrics. The
//! engine decides, segment by segment, which text to keep, then renders the
//! result as SRT and can check an SRT file against the lyrics it was built
//! from.
//!
//! # Architecture
//!
//! - [`traits::Transcriber`]: Source of time-stamped segments (a model, a
//!   service, or a [`transcript::Transcript`] loaded from JSON)
//! - [`align::Aligner`]: Alignment policy (sequential, fuzzy-global,
//!   fuzzy-per-line) picked via [`config::AlignConfig`]
//! - [`subtitle::synthesize`]: Aligned segments to an SRT document
//! - [`verify::compare`]: Structural check of SRT output against lyrics
//!
//! # Quick Start
//!
//! ```ignore
//! use lyricsync_core::config::AlignConfig;
//! use lyricsync_core::lyrics::Lyrics;
//! use lyricsync_core::pipelines::LyricsPipeline;
//! use lyricsync_core::transcript::Transcript;
//!
//! let mut transcript = Transcript::from_json(&std::fs::read_to_string("song.json")?)?;
//! let lyrics = Lyrics::parse(&std::fs::read_to_string("song.txt")?);
//!
//! let pipeline = LyricsPipeline::new(AlignConfig::default())?;
//! let captions = pipeline.run(&mut transcript, &lyrics)?;
//! print!("{}", captions.subtitles);
//! ```

pub mod align;
pub mod concat;
pub mod config;
pub mod error;
pub mod lyrics;
pub mod matcher;
pub mod normalize;
pub mod pipelines;
pub mod subtitle;
pub mod traits;
pub mod transcript;
pub mod types;
pub mod verify;
