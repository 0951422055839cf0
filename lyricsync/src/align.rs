//! Align subcommand - correct a JSON transcript with reference lyrics and write SRT.

use crate::io::read_input;
use eyre::{Context, Result};
use lyricsync_core::config::AlignConfig;
use lyricsync_core::lyrics::load_lyrics;
use lyricsync_core::pipelines::{Captions, LyricsPipeline};
use lyricsync_core::transcript::Transcript;
use std::path::{Path, PathBuf};

/// Entries shown before and after the gap in `--preview` output.
const PREVIEW_ENTRIES: usize = 3;

/// CLI arguments for alignment.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Path to the JSON transcript (segment array or object with `segments`)
    pub transcript: PathBuf,

    /// Path to the reference lyrics, one line per row
    pub lyrics: PathBuf,

    /// Output SRT path (default: same as transcript with .srt extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub align_config: AlignConfig,

    /// Print the first and last subtitle entries after writing
    #[arg(long)]
    pub preview: bool,
}

/// Resolved configuration for alignment.
#[derive(Debug)]
pub struct Config {
    pub transcript: PathBuf,
    pub lyrics: PathBuf,
    pub output: PathBuf,
    pub preview: bool,
    pub align_config: AlignConfig,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        args.align_config
            .validate()
            .wrap_err("invalid alignment options")?;

        let output = args
            .output
            .unwrap_or_else(|| args.transcript.with_extension("srt"));

        Ok(Self {
            transcript: args.transcript,
            lyrics: args.lyrics,
            output,
            preview: args.preview,
            align_config: args.align_config,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    tracing::info!(
        transcript = ?config.transcript.display(),
        lyrics = ?config.lyrics.display(),
        output = ?config.output.display(),
        policy = %config.align_config.policy,
        "aligning transcript with lyrics"
    );

    let captions = caption_from_files(&config.transcript, &config.lyrics, config.align_config)?;

    let summary = captions.summary();
    tracing::info!(
        segments = summary.segments,
        reference = summary.reference,
        transcribed = summary.transcribed,
        "alignment completed"
    );

    tracing::info!(path = ?config.output.display(), "write srt file");

    std::fs::write(&config.output, captions.subtitles.to_string())
        .wrap_err_with(|| format!("failed to write srt: {:?}", config.output.display()))?;

    if config.preview {
        print!(
            "{}",
            captions.subtitles.preview(PREVIEW_ENTRIES, PREVIEW_ENTRIES)
        );
    }

    Ok(())
}

/// Load both inputs and run the alignment pipeline.
fn caption_from_files(
    transcript_path: &Path,
    lyrics_path: &Path,
    align_config: AlignConfig,
) -> Result<Captions> {
    let mut transcript = Transcript::from_json(&read_input(transcript_path, "transcript")?)
        .wrap_err_with(|| format!("failed to load transcript: {:?}", transcript_path.display()))?;

    let lyrics = load_lyrics(&read_input(lyrics_path, "lyrics")?);

    tracing::debug!(
        segments = transcript.segments.len(),
        lines = lyrics.len(),
        language = ?transcript.language,
        "inputs loaded"
    );

    let pipeline = LyricsPipeline::new(align_config)?;

    pipeline
        .run(&mut transcript, &lyrics)
        .wrap_err("alignment failed")
}
