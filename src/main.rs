use clap::Parser;
use spindle::config::{DEFAULT_MANIFEST_FILE, DEFAULT_OUTPUT_FILE, DEFAULT_TOKENIZER_MODEL};
use spindle::logger::initialize_logger;
use spindle::utils::expand_home;
use spindle::{run, ClipboardSink, SpindleConfig, SystemClipboard};
use std::process::ExitCode;
use tracing::error;

/// Merge the files listed in a manifest into a single document.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// File listing one glob pattern per line
    #[arg(env = "SPINDLE_MANIFEST", default_value = DEFAULT_MANIFEST_FILE)]
    manifest: String,
    #[arg(short = 'o', long, env = "SPINDLE_OUTPUT", default_value = DEFAULT_OUTPUT_FILE)]
    output: String,
    #[arg(long, help = "Do not copy the merged document to the clipboard")]
    no_clipboard: bool,
    #[arg(short = 's', long, help = "Log token counts per merged file")]
    stats: bool,
    #[arg(short = 'M', long, default_value = DEFAULT_TOKENIZER_MODEL)]
    model: String,
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    quiet: bool,
}

impl From<CliArgs> for SpindleConfig {
    fn from(args: CliArgs) -> Self {
        let mut config = SpindleConfig::new(expand_home(&args.manifest), expand_home(&args.output));
        config.clipboard = !args.no_clipboard;
        config.stats = args.stats;
        config.model = args.model;
        config
    }
}

fn main() -> ExitCode {
    let cli_args = CliArgs::parse();
    initialize_logger(cli_args.verbose, cli_args.quiet);

    let config = SpindleConfig::from(cli_args);
    let mut clipboard = SystemClipboard::new();
    let sink: Option<&mut dyn ClipboardSink> = if config.clipboard {
        Some(&mut clipboard)
    } else {
        None
    };

    match run(&config, sink) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
