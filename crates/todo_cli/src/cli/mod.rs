use clap::Parser;

/// Flag-driven front end for the JSON-backed to-do list.
///
/// Exactly one operation runs per invocation. When several flags are
/// set at once the precedence is fixed: list, complete, add, delete,
/// verbose, hide.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Add a task; the description comes from the remaining
    /// arguments, or one task per stdin line when none are given
    #[arg(short, long)]
    pub add: bool,

    /// List all tasks
    #[arg(short, long)]
    pub list: bool,

    /// Mark the task at POSITION as completed
    #[arg(short, long, value_name = "POSITION")]
    pub complete: Option<usize>,

    /// Delete the task at POSITION
    #[arg(short, long, value_name = "POSITION")]
    pub delete: Option<usize>,

    /// Show creation and completion timestamps
    #[arg(short, long)]
    pub verbose: bool,

    /// Hide completed tasks
    #[arg(long)]
    pub hide: bool,

    /// Description words consumed by --add
    #[arg(value_name = "DESCRIPTION")]
    pub description: Vec<String>,
}
