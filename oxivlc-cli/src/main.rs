//! OxiVLC CLI - pack and unpack text files with a static variable-length code.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{cmd_pack, cmd_unpack};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxivlc")]
#[command(author, version, about = "Simple archiver - Pure Rust variable-length code")]
#[command(long_about = "
OxiVLC packs text made of letters and spaces with a fixed prefix code.
Uppercase letters are stored as '!' followed by the lowercase letter.

Examples:
  oxivlc pack vlc notes.txt
  oxivlc pack vlc notes.txt notes.packed
  oxivlc unpack vlc notes.vlc
  oxivlc unpack vlc notes.vlc restored.txt --json
")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a file
    #[command(alias = "p")]
    Pack {
        #[command(subcommand)]
        method: Method,
    },

    /// Unpack a file
    #[command(alias = "u")]
    Unpack {
        #[command(subcommand)]
        method: Method,
    },
}

#[derive(Subcommand)]
enum Method {
    /// Variable-length code
    Vlc {
        /// Source file
        source: PathBuf,

        /// Destination file (defaults to the source name with a new extension)
        dest: Option<PathBuf>,

        /// Print a JSON summary instead of text
        #[arg(short, long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    utils::init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Pack {
            method: Method::Vlc { source, dest, json },
        } => cmd_pack(&source, dest.as_deref(), json),
        Commands::Unpack {
            method: Method::Vlc { source, dest, json },
        } => cmd_unpack(&source, dest.as_deref(), json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
