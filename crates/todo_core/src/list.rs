use crate::error::StoreError;
use crate::model::{Task, format_timestamp};
use std::fmt::Write;
use time::OffsetDateTime;

/// Ordered in-memory task list. Insertion order is the canonical,
/// user-visible order; all positions taken and reported are 1-based.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Appends a pending task stamped with the current time. Callers
    /// are responsible for rejecting blank descriptions; nothing is
    /// persisted here.
    pub fn add<D: Into<String>>(&mut self, description: D) {
        self.tasks.push(Task::new(description));
    }

    /// Marks the task at `position` as done and stamps its completion
    /// time. Completing an already-done task re-stamps the time.
    pub fn complete(&mut self, position: usize) -> Result<(), StoreError> {
        let task = self.task_at_mut(position)?;
        task.done = true;
        task.completed_at = Some(OffsetDateTime::now_utc());
        Ok(())
    }

    /// Removes the task at `position`. Every entry after it shifts
    /// down by one, so previously resolved positions are stale.
    pub fn delete(&mut self, position: usize) -> Result<(), StoreError> {
        if position == 0 || position > self.tasks.len() {
            return Err(StoreError::position_out_of_range(position));
        }
        self.tasks.remove(position - 1);
        Ok(())
    }

    fn task_at_mut(&mut self, position: usize) -> Result<&mut Task, StoreError> {
        if position == 0 || position > self.tasks.len() {
            return Err(StoreError::position_out_of_range(position));
        }
        Ok(&mut self.tasks[position - 1])
    }

    /// Compact view: `"X 1: desc"` for done entries, `"  2: desc"`
    /// for pending ones, one line per entry.
    pub fn render_compact(&self) -> String {
        let mut out = String::new();
        for (index, task) in self.tasks.iter().enumerate() {
            let marker = if task.done { "X " } else { "  " };
            let _ = writeln!(out, "{}{}: {}", marker, index + 1, task.description);
        }
        out
    }

    /// Compact view plus the creation timestamp, and the completion
    /// timestamp for done entries.
    pub fn render_verbose(&self) -> String {
        let mut out = String::new();
        for (index, task) in self.tasks.iter().enumerate() {
            let marker = if task.done { "X " } else { "  " };
            let completed = match task.completed_at.as_ref() {
                Some(value) if task.done => {
                    format!(", completed: {}", format_timestamp(value))
                }
                _ => String::new(),
            };
            let _ = writeln!(
                out,
                "{}{}: {} (created: {}{})",
                marker,
                index + 1,
                task.description,
                format_timestamp(&task.created_at),
                completed
            );
        }
        out
    }

    /// Compact view with done entries omitted. Positions keep their
    /// underlying list index, so the numbering shows gaps where
    /// completed items were skipped.
    pub fn render_incomplete(&self) -> String {
        let mut out = String::new();
        for (index, task) in self.tasks.iter().enumerate() {
            if task.done {
                continue;
            }
            let _ = writeln!(out, "  {}: {}", index + 1, task.description);
        }
        out
    }
}
