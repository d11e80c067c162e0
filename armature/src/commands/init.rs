use std::path::PathBuf;

use armature_core::File;
use clap::Args;
use eyre::{Result, WrapErr};

use crate::reports::{InitReport, Report, TerminalOutput};

const DEFAULT_API_DEFINITION: &str = r#"title: Sample API
version: '1.0'
endpoints:
  - path: '/users/{id}'
    method: GET
    description: 'Fetch user by ID'
    response:
      200:
        json:
          id: int
          name: string
          email: string
"#;

const DEFAULT_SETTINGS: &str = r#"authentication:
  method: 'JWT'
  secret: 'your-secret-key'
logging:
  enabled: true
  log_level: 'info'
rate_limiting:
  requests_per_minute: 60
"#;

#[derive(Args)]
pub struct InitCommand {
    /// Project directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub output: PathBuf,
}

impl InitCommand {
    /// Run the init command
    pub fn run(&self) -> Result<()> {
        let mut report = InitReport::default();

        let files = [
            ("api/api.yaml", DEFAULT_API_DEFINITION),
            ("config/settings.yaml", DEFAULT_SETTINGS),
        ];

        for (path, content) in files {
            let file = File::new(self.output.join(path), content).if_missing();
            let result = file
                .write()
                .wrap_err_with(|| format!("failed to write '{path}'"))?;
            report.record(path, result);
        }

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
