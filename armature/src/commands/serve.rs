use clap::Args;
use eyre::Result;

#[derive(Args)]
pub struct ServeCommand {}

impl ServeCommand {
    /// Run the serve command.
    ///
    /// The mock server is a stub; the command exists so that definitions can
    /// be exercised by a future server without changing the CLI surface.
    pub fn run(&self) -> Result<()> {
        println!("Starting mock API server...");
        println!("The mock server is not implemented yet.");
        Ok(())
    }
}
