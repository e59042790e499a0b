use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use log_registry::Registry;

#[derive(Parser)]
#[command(name = "logcheck")]
#[command(about = "Validate a log-registry configuration file", long_about = None)]
struct Cli {
    /// Path to the logging configuration.
    #[arg(short, long, default_value = "logger.toml")]
    config: PathBuf,

    /// Emit a test record through every channel after validation.
    #[arg(long)]
    emit: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let registry = match Registry::initialize(&cli.config) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut names = registry.channel_names();
    names.sort();

    println!("configuration ok: {} channels", names.len());
    for name in &names {
        if let Ok(channel) = registry.get_channel(name) {
            println!(
                "  {} ({} handlers, {} processors)",
                name,
                channel.handlers().len(),
                channel.processors().len()
            );
        }
    }

    if cli.emit {
        for name in &names {
            if let Ok(channel) = registry.get_channel(name) {
                channel.info("logcheck test record");
            }
        }
        println!("emitted one test record per channel");
    }

    ExitCode::SUCCESS
}
