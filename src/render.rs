// Render collaborators notified by the store after each mutation

use crate::task::{DEFAULT_TIMESTAMP_FORMAT, Task};
use colored::Colorize;
use eyre::{Context, Result};
use std::io::Write;

/// Anything that redraws the visible task list from a snapshot
pub trait Render {
    fn render(&mut self, tasks: &[Task]) -> Result<()>;
}

impl<F> Render for F
where
    F: FnMut(&[Task]) -> Result<()>,
{
    fn render(&mut self, tasks: &[Task]) -> Result<()> {
        self(tasks)
    }
}

/// Plain-text renderer that redraws the whole list on every call
///
/// Each line carries a `[id]` tag; quoting it back to `delete` removes the task.
pub struct TextRenderer<W: Write> {
    out: W,
    timestamp_format: String,
    color: bool,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            color: false,
        }
    }

    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Consume the renderer and return the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn format_line(&self, task: &Task) -> String {
        let tag = format!("[{}]", task.id());
        let when = task.created_at_display(&self.timestamp_format);

        if self.color {
            format!("{} {} - {}", tag.yellow().bold(), task.description(), when.dimmed())
        } else {
            format!("{} {} - {}", tag, task.description(), when)
        }
    }
}

impl<W: Write> Render for TextRenderer<W> {
    fn render(&mut self, tasks: &[Task]) -> Result<()> {
        if tasks.is_empty() {
            let placeholder = "No tasks logged";
            if self.color {
                writeln!(self.out, "{}", placeholder.dimmed()).context("Failed to write task list")?;
            } else {
                writeln!(self.out, "{}", placeholder).context("Failed to write task list")?;
            }
        }

        for task in tasks {
            let line = self.format_line(task);
            writeln!(self.out, "{}", line).context("Failed to write task list")?;
        }

        self.out.flush().context("Failed to flush task list")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn sample_tasks() -> Vec<Task> {
        let at = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        vec![
            Task::new(0, "a".to_string(), at),
            Task::new(2, "c".to_string(), at),
        ]
    }

    #[test]
    fn test_text_renderer_lines() {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.render(&sample_tasks()).unwrap();

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(output, "[0] a - 2024-01-02 03:04:05\n[2] c - 2024-01-02 03:04:05\n");
    }

    #[test]
    fn test_text_renderer_empty_placeholder() {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.render(&[]).unwrap();

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(output, "No tasks logged\n");
    }

    #[test]
    fn test_text_renderer_custom_format() {
        let mut renderer = TextRenderer::new(Vec::new()).with_timestamp_format("%H:%M");
        renderer.render(&sample_tasks()[..1]).unwrap();

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(output, "[0] a - 03:04\n");
    }

    #[test]
    fn test_closure_renderer() {
        let mut seen = Vec::new();
        {
            let mut renderer = |tasks: &[Task]| -> Result<()> {
                seen.push(tasks.len());
                Ok(())
            };
            renderer.render(&sample_tasks()).unwrap();
            renderer.render(&[]).unwrap();
        }
        assert_eq!(seen, vec![2, 0]);
    }
}
