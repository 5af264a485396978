use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rust_xdat::cli::{LogLevel, init_logger};
use rust_xdat::{embed_file, extract_file, probe_file};

#[derive(Parser)]
#[command(name = "rust-xdat")]
#[command(about = "Hide files inside PNG images and get them back")]
struct Cli {
    /// Diagnostic verbosity on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print type, length, stored CRC and computed CRC of every chunk
    Probe {
        /// Path to input PNG file
        png: PathBuf,

        /// Fail on the first chunk whose stored CRC is wrong
        #[arg(long)]
        strict: bool,
    },

    /// Write the embedded file out under its embedded name
    Extract {
        /// Path to input PNG file
        png: PathBuf,

        /// Directory to extract into
        #[arg(short = 'C', long, default_value = ".")]
        directory: PathBuf,
    },

    /// Copy a PNG, embedding a data file after the first IDAT chunk
    Embed {
        /// Path to input PNG file
        png: PathBuf,

        /// File to hide
        data: PathBuf,

        /// Path for the output PNG
        output: PathBuf,

        /// Name to store instead of the data file's own name
        #[arg(long)]
        name: Option<OsString>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level)?;

    match cli.command {
        Commands::Probe { png, strict } => {
            let mut stdout = io::stdout().lock();
            probe_file(&png, &mut stdout, strict)
                .with_context(|| format!("cannot probe {}", png.display()))?;
        }

        Commands::Extract { png, directory } => {
            let written = extract_file(&png, &directory)
                .with_context(|| format!("cannot extract from {}", png.display()))?;
            println!("Extracted {}", written.display());
        }

        Commands::Embed { png, data, output, name } => {
            let outcome = embed_file(&png, &data, &output, name.as_deref())
                .with_context(|| format!("cannot embed {} into {}", data.display(), png.display()))?;
            if outcome.injected {
                println!("Embedded {} -> {}", data.display(), output.display());
            } else {
                println!("Copied {} -> {} unchanged", png.display(), output.display());
            }
        }
    }

    Ok(())
}
