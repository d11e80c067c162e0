//! Generate command report data structures.

use std::path::{Path, PathBuf};

use armature_codegen::{EndpointSkip, ScaffoldPlan, ScaffoldReport};
use armature_definition::Language;

use super::output::{Output, Report};

/// Report data from a scaffolding run.
pub struct GenerateReport {
    /// API title from the definition.
    pub title: String,

    /// API version from the definition.
    pub version: String,

    /// Target language of the run.
    pub language: Language,

    /// Number of endpoints in the definition.
    pub endpoint_count: usize,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of a scaffolding run.
pub enum GenerationResult {
    /// Files were written to disk.
    Written {
        output_dir: PathBuf,
        report: ScaffoldReport,
    },
    /// Dry-run preview.
    Preview(ScaffoldPlan),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written { output_dir, report } => {
                self.render_written(out, output_dir, report)
            }
            GenerationResult::Preview(plan) => self.render_preview(out, plan),
        }
    }
}

impl GenerateReport {
    fn render_header(&self, out: &mut dyn Output) {
        out.preformatted(&format!("{} v{}", self.title, self.version));
        out.key_value("Language", self.language.as_str());
        out.key_value("Endpoints", &self.endpoint_count.to_string());
        out.newline();
    }

    fn render_skipped_endpoints(out: &mut dyn Output, skipped: &[EndpointSkip]) {
        for skip in skipped {
            out.warning(&format!(
                "skipping endpoint {} ({} '{}'): {}",
                skip.index + 1,
                skip.method,
                skip.path,
                skip.error
            ));
        }
    }

    fn render_written(&self, out: &mut dyn Output, output_dir: &Path, report: &ScaffoldReport) {
        self.render_header(out);
        Self::render_skipped_endpoints(out, &report.skipped_endpoints);

        if !report.created_dirs.is_empty() {
            out.section("Created directories");
            for dir in &report.created_dirs {
                out.added_item(dir);
            }
            out.newline();
        }

        out.section(&format!("Files ({})", report.total_files()));
        for path in &report.written {
            out.added_item(path);
        }
        for path in &report.skipped_files {
            out.list_item(&format!("{} (exists, preserved)", path));
        }
        out.newline();

        out.key_value("Generated into", &output_dir.display().to_string());
    }

    fn render_preview(&self, out: &mut dyn Output, plan: &ScaffoldPlan) {
        self.render_header(out);
        Self::render_skipped_endpoints(out, &plan.skipped_endpoints);

        for file in &plan.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", plan.files.len()));
    }
}

#[cfg(test)]
mod tests {
    use armature_codegen::{GenerationError, ScaffoldFile};
    use armature_core::Overwrite;

    use super::*;

    #[derive(Default)]
    struct RecordingOutput {
        lines: Vec<String>,
    }

    impl Output for RecordingOutput {
        fn section(&mut self, name: &str) {
            self.lines.push(format!("section:{name}"));
        }

        fn key_value(&mut self, key: &str, value: &str) {
            self.lines.push(format!("kv:{key}={value}"));
        }

        fn list_item(&mut self, text: &str) {
            self.lines.push(format!("item:{text}"));
        }

        fn added_item(&mut self, text: &str) {
            self.lines.push(format!("added:{text}"));
        }

        fn warning(&mut self, msg: &str) {
            self.lines.push(format!("warning:{msg}"));
        }

        fn divider(&mut self, label: &str) {
            self.lines.push(format!("divider:{label}"));
        }

        fn preformatted(&mut self, text: &str) {
            self.lines.push(format!("pre:{text}"));
        }

        fn newline(&mut self) {}
    }

    #[test]
    fn test_written_report_lists_every_file_action() {
        let report = GenerateReport {
            title: "Sample API".to_string(),
            version: "1.0".to_string(),
            language: Language::CSharp,
            endpoint_count: 2,
            result: GenerationResult::Written {
                output_dir: PathBuf::from("."),
                report: ScaffoldReport {
                    created_dirs: vec!["src/GeneratedControllers".to_string()],
                    written: vec![
                        "src/GeneratedControllers/UsersIdController.Generated.cs".to_string(),
                    ],
                    skipped_files: vec!["src/Controllers/UsersIdController.cs".to_string()],
                    skipped_endpoints: vec![EndpointSkip {
                        index: 1,
                        path: String::new(),
                        method: "GET".to_string(),
                        error: GenerationError::UnderivableName {
                            path: String::new(),
                            method: "GET".to_string(),
                        },
                    }],
                },
            },
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert!(out.lines.contains(&"pre:Sample API v1.0".to_string()));
        assert!(out.lines.contains(&"kv:Language=csharp".to_string()));
        assert!(
            out.lines
                .contains(&"added:src/GeneratedControllers/UsersIdController.Generated.cs".to_string())
        );
        assert!(
            out.lines
                .contains(&"item:src/Controllers/UsersIdController.cs (exists, preserved)".to_string())
        );
        assert!(out.lines.iter().any(|l| l.starts_with("warning:skipping endpoint 2")));
    }

    #[test]
    fn test_preview_report_shows_contents_and_summary() {
        let report = GenerateReport {
            title: "Sample API".to_string(),
            version: "1.0".to_string(),
            language: Language::JavaScript,
            endpoint_count: 1,
            result: GenerationResult::Preview(ScaffoldPlan {
                files: vec![ScaffoldFile {
                    path: "src/generated/UsersIdController.js".to_string(),
                    content: "// generated".to_string(),
                    overwrite: Overwrite::Always,
                }],
                skipped_endpoints: vec![],
            }),
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert!(
            out.lines
                .contains(&"divider:src/generated/UsersIdController.js".to_string())
        );
        assert!(out.lines.contains(&"pre:// generated".to_string()));
        assert!(out.lines.contains(&"pre:1 files would be generated".to_string()));
    }
}
