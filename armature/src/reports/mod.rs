mod generate;
mod init;
mod output;

pub use generate::{GenerateReport, GenerationResult};
pub use init::InitReport;
pub use output::{Output, Report, TerminalOutput};
