//! Check subcommand - verify SRT subtitle text against reference lyrics.

use crate::io::read_input;
use color_eyre::Section;
use eyre::{Result, eyre};
use lyricsync_core::verify::{Strictness, Verdict, compare};
use std::path::PathBuf;

/// CLI arguments for subtitle verification.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Path to the SRT file to check
    pub subtitles: PathBuf,

    /// Path to the reference lyrics
    pub lyrics: PathBuf,

    /// Whether differing line counts fail the check
    #[arg(long, value_enum)]
    pub strictness: Strictness,
}

/// Resolved configuration for subtitle verification.
#[derive(Debug)]
pub struct Config {
    pub subtitles: PathBuf,
    pub lyrics: PathBuf,
    pub strictness: Strictness,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            subtitles: args.subtitles,
            lyrics: args.lyrics,
            strictness: args.strictness,
        }
    }
}

pub fn execute(config: Config) -> Result<()> {
    let subtitles = read_input(&config.subtitles, "subtitles")?;
    let lyrics = read_input(&config.lyrics, "lyrics")?;

    let verdict = compare(&subtitles, &lyrics, config.strictness);

    tracing::info!(
        subtitles = ?config.subtitles.display(),
        lyrics = ?config.lyrics.display(),
        strictness = %config.strictness,
        %verdict,
        "checked subtitles"
    );

    match verdict {
        Verdict::Equivalent { .. } => {
            println!("equivalent");
            Ok(())
        }
        Verdict::LengthMismatch { .. } => {
            Err(eyre!("subtitles do not match lyrics: {verdict}"))
                .suggestion("use --strictness lenient to ignore trailing lines")
        }
        _ => Err(eyre!("subtitles do not match lyrics: {verdict}")).with_note(|| {
            format!(
                "compared {:?} against {:?}",
                config.subtitles.display(),
                config.lyrics.display()
            )
        }),
    }
}
