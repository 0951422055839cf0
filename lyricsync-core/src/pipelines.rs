//! High-level alignment pipeline.

use crate::align::{Aligner, AlignmentSummary};
use crate::config::AlignConfig;
use crate::error::Result;
use crate::lyrics::Lyrics;
use crate::subtitle::{SubtitleDocument, synthesize};
use crate::traits::Transcriber;
use crate::types::{AlignedSegment, Segment, validate_segments};

/// Aligned segments and the subtitles synthesized from them.
#[derive(Clone, Debug)]
pub struct Captions {
    pub aligned: Vec<AlignedSegment>,
    pub subtitles: SubtitleDocument,
}

impl Captions {
    pub fn summary(&self) -> AlignmentSummary {
        AlignmentSummary::from_aligned(&self.aligned)
    }
}

/// Transcript segments + reference lyrics → subtitles, for one configuration.
pub struct LyricsPipeline {
    config: AlignConfig,
    aligner: Box<dyn Aligner>,
}

impl LyricsPipeline {
    /// Validate the configuration and build its aligner.
    pub fn new(config: AlignConfig) -> Result<Self> {
        config.validate()?;
        let aligner = config.aligner();

        Ok(Self { config, aligner })
    }

    pub fn config(&self) -> &AlignConfig {
        &self.config
    }

    /// Pull segments from `transcriber` and align them with `lyrics`.
    pub fn run<T>(&self, transcriber: &mut T, lyrics: &Lyrics) -> Result<Captions>
    where
        T: Transcriber + ?Sized,
    {
        let segments = transcriber.transcribe(self.config.language.as_deref())?;
        self.caption(&segments, lyrics)
    }

    /// Align already transcribed segments with `lyrics`.
    pub fn caption(&self, segments: &[Segment], lyrics: &Lyrics) -> Result<Captions> {
        validate_segments(segments)?;

        tracing::debug!(
            policy = %self.config.policy,
            segments = segments.len(),
            lines = lyrics.len(),
            "aligning transcript"
        );

        let aligned = self.aligner.align(segments, lyrics);
        let subtitles = synthesize(&aligned);

        Ok(Captions { aligned, subtitles })
    }
}
