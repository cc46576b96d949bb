use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use clap::Parser;
use mdtelegram::{Config, SafetyLevel, convert, convert_text};

#[derive(Parser)]
#[command(about = "Convert Markdown to Telegram MarkdownV2")]
struct Cli {
    /// Print the structured JSON envelope instead of flattened text
    #[arg(long)]
    json: bool,
    #[command(flatten)]
    opts: ConvertOpts,
    /// Markdown files to convert; stdin is read when none are given
    files: Vec<PathBuf>,
}

#[derive(clap::Args, Clone, Copy)]
struct ConvertOpts {
    /// Escaping aggressiveness
    #[arg(long, value_enum, default_value_t = Safety::Basic)]
    safety: Safety,
    /// Maximum characters per message part
    #[arg(long = "max-length", default_value_t = mdtelegram::TELEGRAM_MAX_LENGTH)]
    max_length: usize,
    /// Do not pad table cells to column width
    #[arg(long = "no-align")]
    no_align: bool,
    /// Skip parsing alignment hints from table separator rows
    #[arg(long = "ignore-separators")]
    ignore_separators: bool,
    /// Verbose conversion tracing
    #[arg(long)]
    debug: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Safety {
    None,
    Basic,
    Strict,
}

impl From<Safety> for SafetyLevel {
    fn from(safety: Safety) -> Self {
        match safety {
            Safety::None => SafetyLevel::None,
            Safety::Basic => SafetyLevel::Basic,
            Safety::Strict => SafetyLevel::Strict,
        }
    }
}

fn build_config(opts: ConvertOpts) -> Config {
    Config::new()
        .with_safety_level(opts.safety.into())
        .with_table_alignment(!opts.no_align)
        .with_ignore_table_separator(opts.ignore_separators)
        .with_max_message_length(opts.max_length)
        .with_debug_logs(opts.debug)
}

fn emit(input: &str, config: &Config, json: bool) -> anyhow::Result<()> {
    if json {
        let response = convert(input, config)?;
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", convert_text(input, config)?);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.opts.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }
    let config = build_config(cli.opts);

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        emit(&input, &config, cli.json)?;
        return Ok(());
    }

    for path in cli.files {
        let content = fs::read_to_string(&path)?;
        emit(&content, &config, cli.json)?;
    }

    Ok(())
}
