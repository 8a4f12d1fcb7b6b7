use anyhow::{Context, Result, bail};
use clap::{Parser as _, ValueEnum};
use linemark_config::{Config, OutputFormat};
use linemark_engine::{Document, ParseOptions, Parser, UnclosedFence};
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    process,
};

#[derive(clap::Parser)]
#[command(name = "linemark")]
#[command(about = "Parse a constrained Markdown file and print its element tree")]
struct Cli {
    /// Markdown file to parse
    input: PathBuf,

    /// Config file (defaults to ~/.config/linemark/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// What to do when input ends inside a code fence (overrides the config file)
    #[arg(long, value_enum)]
    unclosed_fence: Option<FenceArg>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Tree,
    Text,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FenceArg {
    Close,
    Error,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Tree => OutputFormat::Tree,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}

impl From<FenceArg> for UnclosedFence {
    fn from(arg: FenceArg) -> Self {
        match arg {
            FenceArg::Close => UnclosedFence::Close,
            FenceArg::Error => UnclosedFence::Error,
        }
    }
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;
    log::debug!("effective config: {config:?}");

    let document = parse_file(&cli.input, config.parser)?;
    log::info!(
        "parsed {} blocks from {}",
        document.len(),
        cli.input.display()
    );

    println!("{}", render(&document, config.output.format));
    Ok(())
}

/// Loads the config file, then applies command-line overrides on top.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            let path = Config::expand_path(path).unwrap_or_else(|| path.clone());
            match Config::load_from_path(&path)? {
                Some(config) => config,
                None => bail!("config file not found: {}", path.display()),
            }
        }
        None => {
            log::debug!("Config path: {}", Config::config_path().display());
            Config::load()?.unwrap_or_default()
        }
    };

    if let Some(format) = cli.format {
        config.output.format = format.into();
    }
    if let Some(fence) = cli.unclosed_fence {
        config.parser.unclosed_fence = fence.into();
    }
    Ok(config)
}

fn parse_file(path: &Path, options: ParseOptions) -> Result<Document> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Parser::new(options)
        .parse(BufReader::new(file))
        .with_context(|| format!("Failed to parse {}", path.display()))
}

fn render(document: &Document, format: OutputFormat) -> String {
    match format {
        OutputFormat::Tree => format!("{document:#?}"),
        OutputFormat::Text => document.to_string(),
    }
}
