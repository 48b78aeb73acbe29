use anyhow::{Context, Result};
use clap::Parser;
use pulldown_cmark::html;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const PAGE_TITLE: &str = "Markdown Preview Tool";
const TEMPLATE_ENV_VAR: &str = "TEMPLATE_FILE";

const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
    <title>{{title}}</title>
  </head>
  <body>
    <h3>Now previewing: {{filename}}</h3>
{{body}}
  </body>
</html>
"#;

/// Render a markdown file to sanitized HTML and open it with the OS
/// default viewer.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Markdown file to preview
    #[arg(short, long)]
    file: PathBuf,

    /// Skip auto-preview; the rendered file is kept on disk
    #[arg(short, long)]
    skip_preview: bool,

    /// Alternate page template (overrides TEMPLATE_FILE)
    #[arg(short, long)]
    template: Option<PathBuf>,
}

fn run<W: Write>(
    file: &Path,
    template: Option<&Path>,
    out: &mut W,
    skip_preview: bool,
) -> Result<()> {
    let input = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let page = parse_content(&input, template, &file.display().to_string())?;

    let temp = tempfile::Builder::new()
        .prefix("mdp")
        .suffix(".html")
        .tempfile()
        .context("creating preview file")?;
    let (_, out_path) = temp.keep().context("keeping preview file")?;

    save_html(&out_path, &page)?;
    writeln!(out, "{}", out_path.display())?;

    if skip_preview {
        return Ok(());
    }

    let result = preview(&out_path);
    std::fs::remove_file(&out_path).ok();
    result
}

/// Markdown in, full HTML page out. The markdown body is converted
/// with pulldown-cmark and sanitized with ammonia before being
/// substituted into the page template.
fn parse_content(input: &str, template: Option<&Path>, filename: &str) -> Result<String> {
    let parser = pulldown_cmark::Parser::new(input);
    let mut body = String::new();
    html::push_html(&mut body, parser);
    let body = ammonia::clean(&body);

    let template = match template {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading template {}", path.display()))?,
        None => DEFAULT_TEMPLATE.to_string(),
    };

    Ok(template
        .replace("{{title}}", PAGE_TITLE)
        .replace("{{filename}}", filename)
        .replace("{{body}}", &body))
}

fn save_html(path: &Path, page: &str) -> Result<()> {
    std::fs::write(path, page).with_context(|| format!("writing {}", path.display()))
}

fn preview(path: &Path) -> Result<()> {
    open::that(path).with_context(|| format!("opening {}", path.display()))?;
    // Give the viewer time to read the file before it is removed.
    std::thread::sleep(std::time::Duration::from_secs(2));
    Ok(())
}

/// Command-line flag wins over the TEMPLATE_FILE environment variable.
fn template_path(flag: Option<PathBuf>) -> Option<PathBuf> {
    if flag.is_some() {
        return flag;
    }

    match std::env::var(TEMPLATE_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => Some(PathBuf::from(value)),
        _ => None,
    }
}

fn main() {
    let cli = Cli::parse();
    let template = template_path(cli.template);

    let mut stdout = io::stdout();
    if let Err(err) = run(&cli.file, template.as_deref(), &mut stdout, cli.skip_preview) {
        eprintln!("ERROR: {err:#}");
        std::process::exit(1);
    }
}
