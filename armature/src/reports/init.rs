//! Init command report data structures.

use armature_core::WriteResult;

use super::output::{Output, Report};

/// Report data from project initialization.
#[derive(Debug, Default)]
pub struct InitReport {
    /// Files created this run.
    pub created: Vec<String>,
    /// Files left alone because they already exist.
    pub skipped: Vec<String>,
}

impl InitReport {
    /// Record the outcome for a single file.
    pub fn record(&mut self, path: &str, result: WriteResult) {
        match result {
            WriteResult::Written => self.created.push(path.to_string()),
            WriteResult::Skipped => self.skipped.push(path.to_string()),
        }
    }
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted("Initializing API project...");

        for path in &self.created {
            out.added_item(path);
        }
        for path in &self.skipped {
            out.list_item(&format!("{} (exists, preserved)", path));
        }

        out.newline();
        if self.created.is_empty() {
            out.preformatted("Project already initialized.");
        } else {
            out.preformatted("Project initialized successfully!");
            out.newline();
            out.preformatted("Next steps:");
            out.preformatted("  arma generate --language csharp");
        }
    }
}
