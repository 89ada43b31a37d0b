use colored::Colorize;

/// Accumulates build errors across a single generation run.
///
/// Per-item problems (an unresolved workshop dependency, a broken sibling
/// descriptor) are recorded here instead of aborting, so a developer sees
/// every problem in one run. The overall result is a failure as soon as one
/// error has been recorded, but the descriptor file is still written.
#[derive(Debug, Default)]
pub struct BuildReport {
    errors: Vec<String>,
}

impl BuildReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error and print it immediately.
    pub fn error(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        eprintln!("{} {}", "✗".red().bold(), msg);
        self.errors.push(msg);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}
