//! lyricsync: command-line front end for lyricsync-core.

pub mod align;
pub mod check;
pub mod cli;
mod io;
