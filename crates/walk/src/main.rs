use anyhow::Result;
use clap::Parser;
use std::fs::Metadata;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walk a directory tree and print the files that pass the filters.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root directory to start from
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Only keep files with this extension (leading dot optional)
    #[arg(short, long, default_value = "")]
    ext: String,

    /// Only keep files of at least this many bytes
    #[arg(short, long, default_value_t = 0)]
    size: u64,
}

/// The single filtering predicate: true means the entry is dropped.
/// Directories never match; files must meet the size floor and, when
/// an extension filter is set, carry that extension.
fn filter_out(path: &Path, ext: &str, min_size: u64, metadata: &Metadata) -> bool {
    if metadata.is_dir() || metadata.len() < min_size {
        return true;
    }

    if ext.is_empty() {
        return false;
    }

    let wanted = ext.trim_start_matches('.');
    path.extension().and_then(|value| value.to_str()) != Some(wanted)
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    for entry in WalkDir::new(&cli.root) {
        let entry = entry?;
        let metadata = entry.metadata()?;

        if filter_out(entry.path(), &cli.ext, cli.size, &metadata) {
            continue;
        }

        writeln!(out, "{}", entry.path().display())?;
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let mut stdout = io::stdout();
    if let Err(err) = run(&cli, &mut stdout) {
        eprintln!("ERROR: {err}");
        std::process::exit(1);
    }
}
