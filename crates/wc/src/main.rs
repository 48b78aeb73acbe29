use anyhow::Result;
use clap::Parser;
use std::io::{self, Read};

/// Count words (or lines) read from standard input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Count lines instead of words
    #[arg(short, long)]
    lines: bool,
}

fn count<R: Read>(mut input: R, count_lines: bool) -> Result<usize> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;

    let total = if count_lines {
        text.lines().count()
    } else {
        text.split_whitespace().count()
    };

    Ok(total)
}

fn main() {
    let cli = Cli::parse();

    let stdin = io::stdin();
    match count(stdin.lock(), cli.lines) {
        Ok(total) => println!("{total}"),
        Err(err) => {
            eprintln!("ERROR: {err}");
            std::process::exit(1);
        }
    }
}
