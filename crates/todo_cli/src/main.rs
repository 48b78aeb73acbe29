use anyhow::{Result, bail};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::Path;
use todo_cli::cli::Cli;
use todo_core::storage::json_store;

fn run<R: BufRead, W: Write>(cli: Cli, path: &Path, input: R, out: &mut W) -> Result<()> {
    // Every invocation starts from the persisted state; nothing is
    // retained in memory between runs.
    let mut list = json_store::load_tasks(path)?;

    if cli.list {
        write!(out, "{}", list.render_compact())?;
    } else if let Some(position) = cli.complete {
        list.complete(position)?;
        json_store::save_tasks(path, &list)?;
    } else if cli.add {
        for description in read_tasks(input, &cli.description)? {
            list.add(description);
        }
        json_store::save_tasks(path, &list)?;
    } else if let Some(position) = cli.delete {
        list.delete(position)?;
        json_store::save_tasks(path, &list)?;
    } else if cli.verbose {
        write!(out, "{}", list.render_verbose())?;
    } else if cli.hide {
        write!(out, "{}", list.render_incomplete())?;
    } else {
        bail!("no operation requested; see --help");
    }

    Ok(())
}

/// One task joined from the remaining arguments, or one task per
/// stdin line when no arguments were given. Blank input is rejected.
fn read_tasks<R: BufRead>(input: R, args: &[String]) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(vec![args.join(" ")]);
    }

    let mut tasks = Vec::new();
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            bail!("task cannot be blank");
        }
        tasks.push(line);
    }

    if tasks.is_empty() {
        bail!("task cannot be blank");
    }

    Ok(tasks)
}

fn main() {
    let cli = Cli::parse();
    let path = todo_core::config::store_path();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(err) = run(cli, &path, stdin.lock(), &mut stdout) {
        eprintln!("ERROR: {err}");
        std::process::exit(1);
    }
}
