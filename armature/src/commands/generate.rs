use std::path::PathBuf;

use armature_codegen::Scaffold;
use armature_definition::{ApiDocument, Language};
use clap::Args;
use eyre::{Result, WrapErr};

use super::UnwrapOrExit;
use crate::{
    language::LanguageSupport,
    reports::{GenerateReport, GenerationResult, Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the API definition (defaults to ./api/api.yaml)
    #[arg(short, long, default_value = "api/api.yaml")]
    pub definition: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Target language (csharp, ruby, javascript)
    #[arg(short, long, default_value = "csharp")]
    pub language: Language,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        // The language selector is validated by clap before this point, so
        // an unsupported target never reaches the filesystem.
        let document = ApiDocument::open(&self.definition).unwrap_or_exit();
        let definition = document.definition();

        let support = LanguageSupport::get(self.language);
        let emitter = support.emitter();
        let scaffold = Scaffold::new(definition, emitter.as_ref());

        let result = if self.dry_run {
            GenerationResult::Preview(scaffold.preview())
        } else {
            let report = scaffold
                .write(&self.output)
                .wrap_err("Failed to write scaffolding")?;
            GenerationResult::Written {
                output_dir: self.output.clone(),
                report,
            }
        };

        let report = GenerateReport {
            title: definition.title.clone(),
            version: definition.version.clone(),
            language: self.language,
            endpoint_count: definition.endpoints.len(),
            result,
        };
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
