use circlepack::config::Config;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file; explicit command-line flags override it
    #[arg(global = true, long = "config")]
    config_file: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Search(cmd::search::SearchArgs),
    Evaluate(cmd::evaluate::EvaluateArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    let result = match &cli.command {
        Commands::Search(args) => {
            let config = match &cli.config_file {
                Some(path) => {
                    info!("📂 Loading Config: {}", path);
                    let mut file_config = Config::load_from_file(path).unwrap_or_else(|e| {
                        error!("{}", e);
                        process::exit(1);
                    });
                    if let Some(sub_matches) = matches.subcommand_matches("search") {
                        file_config.merge_from_cli(&args.config, sub_matches);
                    }
                    file_config
                }
                None => args.config.clone(),
            };
            cmd::search::run(args.clone(), config)
        }
        Commands::Evaluate(args) => cmd::evaluate::run(args.clone()),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
