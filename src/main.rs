use anyhow::Result;
use helptree::cli::{output, Cli, Commands};
use helptree::config::{Config, CONFIG_FILE};
use helptree::DocumentIndex;

use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("helptree=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            std::process::exit(2);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Query {
            keyword,
            file,
            format,
            config,
        } => {
            let cfg = Config::load(config.as_deref(), &std::env::current_dir()?)?;
            let markers = cfg.markers()?;
            let output_format = format.unwrap_or(cfg.format);
            let path = file.unwrap_or(cfg.help_file);

            let result = DocumentIndex::open(&path, markers).and_then(|index| index.query(&keyword));
            output::render_query(&result, &keyword, output_format);
            Ok(result.err().map_or(0, |e| e.exit_code()))
        }
        Commands::Check {
            file,
            format,
            config,
        } => {
            let cfg = Config::load(config.as_deref(), &std::env::current_dir()?)?;
            let markers = cfg.markers()?;
            let output_format = format.unwrap_or(cfg.format);
            let path = file.unwrap_or(cfg.help_file);

            let result = DocumentIndex::open(&path, markers).and_then(|index| index.outline());
            output::render_check(&result, &path.display().to_string(), output_format);
            Ok(result.err().map_or(0, |e| e.exit_code()))
        }
        Commands::Init => {
            let path = std::env::current_dir()?.join(CONFIG_FILE);
            if path.exists() {
                eprintln!("{CONFIG_FILE} already exists");
                return Ok(1);
            }
            std::fs::write(&path, Config::default_toml())?;
            println!("Created {CONFIG_FILE}");
            Ok(0)
        }
    }
}
