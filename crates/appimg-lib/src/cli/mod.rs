mod args;
mod params;
mod resolved_command;
mod run;

pub use args::{Args, RunArgs, parse_args};
pub use params::RunParams;
pub use resolved_command::resolve_command;
pub use run::{RunOutcome, run_download};
