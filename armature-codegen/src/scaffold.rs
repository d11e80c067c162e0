//! Scaffold planning and the overwrite-vs-preserve write policy.

use std::path::Path;

use armature_core::{Overwrite, WriteResult, write_file};
use armature_definition::ApiDefinition;
use eyre::{Result, WrapErr};

use crate::{EndpointEmitter, GenerationError, ScaffoldFile};

/// An endpoint that could not be rendered and was skipped.
#[derive(Debug, Clone)]
pub struct EndpointSkip {
    /// Position in the definition's endpoint list (zero-based)
    pub index: usize,
    pub path: String,
    pub method: String,
    pub error: GenerationError,
}

/// The files a generation run would produce, in endpoint order.
#[derive(Debug, Default)]
pub struct ScaffoldPlan {
    pub files: Vec<ScaffoldFile>,
    pub skipped_endpoints: Vec<EndpointSkip>,
}

/// Per-run filesystem outcome, for reporting.
#[derive(Debug, Default)]
pub struct ScaffoldReport {
    /// Directories created this run (already-existing ones are not listed)
    pub created_dirs: Vec<String>,
    /// Files written (generated artifacts, and partner artifacts seen for
    /// the first time)
    pub written: Vec<String>,
    /// Partner files skipped because they already exist
    pub skipped_files: Vec<String>,
    /// Endpoints skipped because they could not be rendered
    pub skipped_endpoints: Vec<EndpointSkip>,
}

/// Orchestrates generation for one definition and one target language.
///
/// Endpoints are processed strictly in definition order so repeated runs
/// produce reviewable, deterministic diffs.
pub struct Scaffold<'a> {
    definition: &'a ApiDefinition,
    emitter: &'a dyn EndpointEmitter,
}

impl<'a> Scaffold<'a> {
    pub fn new(definition: &'a ApiDefinition, emitter: &'a dyn EndpointEmitter) -> Self {
        Self {
            definition,
            emitter,
        }
    }

    /// Plan the run without touching the filesystem.
    ///
    /// An endpoint that cannot be rendered becomes a recorded skip; the
    /// remaining endpoints still generate (skip-and-report, in contrast to
    /// the fail-fast policy for document-level errors).
    pub fn plan(&self) -> ScaffoldPlan {
        let mut plan = ScaffoldPlan::default();

        for (index, endpoint) in self.definition.endpoints.iter().enumerate() {
            match self.emitter.scaffold(endpoint) {
                Ok(files) => {
                    plan.files.push(files.generated);
                    plan.files.push(files.partner);
                }
                Err(error) => plan.skipped_endpoints.push(EndpointSkip {
                    index,
                    path: endpoint.path.clone(),
                    method: endpoint.method.clone(),
                    error,
                }),
            }
        }

        plan
    }

    /// Plan the run for display (dry-run).
    ///
    /// Same result as `plan()`; the name marks the call sites that render
    /// file contents instead of writing them.
    pub fn preview(&self) -> ScaffoldPlan {
        self.plan()
    }

    /// Write the planned files under `output_dir`.
    ///
    /// Output directories are created idempotently. Generated artifacts are
    /// always overwritten; partner artifacts are written only when absent,
    /// which is what preserves hand-written business logic across runs.
    /// There is no rollback on a later failure: artifacts are independent
    /// and idempotently regenerable, so earlier writes stand.
    pub fn write(&self, output_dir: &Path) -> Result<ScaffoldReport> {
        let plan = self.plan();
        let mut report = ScaffoldReport {
            skipped_endpoints: plan.skipped_endpoints,
            ..ScaffoldReport::default()
        };

        let layout = self.emitter.layout();
        for dir in [layout.generated_dir, layout.partner_dir] {
            let full = output_dir.join(dir);
            if !full.exists() {
                std::fs::create_dir_all(&full)
                    .wrap_err_with(|| format!("failed to create directory '{}'", full.display()))?;
                report.created_dirs.push(dir.to_string());
            }
        }

        for file in &plan.files {
            let full = output_dir.join(&file.path);
            match file.overwrite {
                Overwrite::IfMissing if full.exists() => {
                    report.skipped_files.push(file.path.clone());
                    continue;
                }
                _ => {}
            }
            write_file(&full, &file.content)
                .wrap_err_with(|| format!("failed to write '{}'", full.display()))?;
            report.written.push(file.path.clone());
        }

        Ok(report)
    }
}

impl ScaffoldReport {
    /// Total number of files considered this run.
    pub fn total_files(&self) -> usize {
        self.written.len() + self.skipped_files.len()
    }

    /// Result for a single file path, if it was part of this run.
    pub fn result_for(&self, path: &str) -> Option<WriteResult> {
        if self.written.iter().any(|p| p == path) {
            Some(WriteResult::Written)
        } else if self.skipped_files.iter().any(|p| p == path) {
            Some(WriteResult::Skipped)
        } else {
            None
        }
    }
}
