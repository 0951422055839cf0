//! Seams to external collaborators.

use crate::error::Result;
use crate::types::Segment;

/// Source of time-stamped ASR segments.
///
/// The engine never runs a speech model itself. Implementations wrap
/// whatever produced the transcript: a live model, a service, or a file
/// from an earlier run.
pub trait Transcriber {
    /// Produce segments in transcript order.
    ///
    /// `language` is an opaque tag forwarded from configuration; the engine
    /// does not interpret it.
    ///
    /// Note: Takes `&mut self` because model-backed implementations usually
    /// need mutable session state.
    fn transcribe(&mut self, language: Option<&str>) -> Result<Vec<Segment>>;
}

impl Transcriber for Vec<Segment> {
    fn transcribe(&mut self, _language: Option<&str>) -> Result<Vec<Segment>> {
        Ok(self.clone())
    }
}
