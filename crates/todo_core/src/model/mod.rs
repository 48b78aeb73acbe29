mod task;

pub use task::{Task, format_timestamp};
