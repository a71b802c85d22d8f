use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use launchargs::args::{flag_registry, parse_command_line, tokenize, FlagKind};
use launchargs::config::Config;
use launchargs::logging::init_tracing;

/// Parse an editor command line and print the extracted options as JSON.
#[derive(Parser, Debug)]
#[command(name = "launchargs", version)]
struct Cli {
    /// Raw command line to parse, exactly as the process received it
    #[arg(long, value_name = "RAW", allow_hyphen_values = true)]
    line: Option<String>,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the token sequence instead of the parsed options
    #[arg(long)]
    tokens: bool,

    /// List every recognized flag and exit
    #[arg(long)]
    list_flags: bool,

    /// Command line pieces, joined with single spaces when --line is absent
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    rest: Vec<String>,
}

impl Cli {
    fn raw_command_line(&self) -> String {
        match &self.line {
            Some(line) => line.clone(),
            None => self.rest.join(" "),
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if cli.list_flags {
        print_flags();
        return Ok(());
    }

    let raw = cli.raw_command_line();

    if cli.tokens {
        let tokens = tokenize(&raw);
        println!("{}", serde_json::to_string_pretty(&tokens)?);
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let cwd = std::env::current_dir().context("Failed to read the working directory")?;
    let options = parse_command_line(&raw, &config, &cwd);
    println!("{}", serde_json::to_string_pretty(&options)?);
    Ok(())
}

fn print_flags() {
    for def in flag_registry() {
        let name = match def.kind {
            FlagKind::Switch => def.name.to_string(),
            FlagKind::Keyed | FlagKind::Letter => format!("{}<value>", def.name),
        };
        println!("  {:<28} {}", name, def.description);
    }
}
