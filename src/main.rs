use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(version, about = "Inspect and edit INI configuration files")]
struct Cli {
    /// Path to an `.ini` file
    file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the section names
    Sections,
    /// Print a single value
    Get { section: String, key: String },
    /// Set a value and save the file
    Set {
        section: String,
        key: String,
        value: String,
        /// Write to this file instead of overwriting the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the file in canonical form
    Dump,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut document = ini::fs::load(&cli.file)?;
    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Sections => {
            let mut names = document.section_names();
            names.sort_unstable();

            for name in names {
                writeln!(stdout, "{name}")?;
            }
        }
        Command::Get { section, key } => {
            let value = document
                .get_value(&section, &key)
                .with_context(|| format!("cannot read {key:?} from {}", cli.file.display()))?;
            writeln!(stdout, "{value}")?;
        }
        Command::Set {
            section,
            key,
            value,
            output,
        } => {
            document.set_value(section, key, value)?;

            let output = output.unwrap_or(cli.file);
            ini::fs::save(&document, &output)?;
            log::info!("wrote {}", output.display());
        }
        Command::Dump => write!(stdout, "{document}")?,
    }

    Ok(())
}
