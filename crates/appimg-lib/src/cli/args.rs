use clap::{ArgAction, Parser};
use tracing::Level;
use tracing_subscriber;

/// Values supplied on the command line. Anything left unset is taken from
/// the configuration or asked for interactively.
#[derive(Debug, Clone, Default)]
pub struct RunArgs {
    pub config_path: Option<String>,
    pub profile: Option<String>,
    pub image_type: Option<String>,
    pub throttle: Option<bool>,
    pub output_dir: Option<String>,
    pub open_folder: Option<bool>,
    pub non_interactive: bool,
}

pub struct Args {
    pub command: RunArgs,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "appimg",
    version,
    about = "Download the Steam library artwork of every game on a public Steam profile"
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count
    )]
    verbose: u8,

    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Optional config file (YAML or TOML)"
    )]
    config: Option<String>,

    #[arg(
        short = 'p',
        long = "profile",
        value_name = "ID_OR_URL",
        help = "SteamID64, SteamID3 or profile URL"
    )]
    profile: Option<String>,

    #[arg(
        short = 't',
        long = "image-type",
        value_name = "TYPE",
        help = "Image type index, or A for all types"
    )]
    image_type: Option<String>,

    #[arg(
        long = "throttle",
        help = "Wait between downloads",
        overrides_with = "no_throttle"
    )]
    throttle: bool,

    #[arg(
        long = "no-throttle",
        help = "Do not wait between downloads",
        overrides_with = "throttle"
    )]
    no_throttle: bool,

    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        help = "Overrides the download folder (default: <Downloads>/AppImageDownloader)"
    )]
    output_dir: Option<String>,

    #[arg(
        long = "open",
        help = "Open the download folder when finished",
        overrides_with = "no_open"
    )]
    open: bool,

    #[arg(
        long = "no-open",
        help = "Do not open the download folder when finished",
        overrides_with = "open"
    )]
    no_open: bool,

    #[arg(
        long = "non-interactive",
        help = "Never prompt; fail on missing values and take defaults for yes/no questions"
    )]
    non_interactive: bool,
}

fn flag_pair(yes: bool, no: bool) -> Option<bool> {
    match (yes, no) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy(),
        )
        .init();

    let command = RunArgs {
        config_path: cli.config,
        profile: cli.profile,
        image_type: cli.image_type,
        throttle: flag_pair(cli.throttle, cli.no_throttle),
        output_dir: cli.output_dir,
        open_folder: flag_pair(cli.open, cli.no_open),
        non_interactive: cli.non_interactive,
    };

    Args { command, log_level }
}
