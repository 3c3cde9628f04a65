use std::{net::SocketAddr, path::PathBuf};

use clap::{Parser, Subcommand};

/// Song identification relay
#[derive(Debug, Parser)]
#[command(name = "songmatch", about = "Relay for Deepgram transcription, Genius lyrics search and Spotify lookup")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "songmatch.toml", env = "SONGMATCH_CONFIG", global = true)]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "SONGMATCH_LISTEN")]
    pub listen: Option<SocketAddr>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,

    /// Look up a song on Genius from a snippet of lyrics
    Lyrics {
        /// Lyrics to search for, prompted on stdin when omitted
        words: Vec<String>,
    },
}
