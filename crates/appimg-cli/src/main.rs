use appimg_lib::cli::{RunOutcome, parse_args, resolve_command, run_download};
use appimg_lib::error::AppImgError;
use appimg_lib::folders::SystemFolders;
use appimg_lib::prompt::{Prompter, ScriptedPrompter, TerminalPrompter};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), AppImgError> {
    color_eyre::install()?;

    let args = parse_args();
    let mut prompter: Box<dyn Prompter> = if args.command.non_interactive {
        Box::new(ScriptedPrompter::non_interactive())
    } else {
        Box::new(TerminalPrompter)
    };

    let params = resolve_command(args.command, prompter.as_mut(), &SystemFolders)?;

    match run_download(params, prompter.as_mut()).await? {
        RunOutcome::Completed { outcomes, .. } => {
            tracing::info!("Processed {} queue entries", outcomes.len())
        }
        RunOutcome::EmptyProfile => tracing::info!("Nothing to download"),
    }

    Ok(())
}
