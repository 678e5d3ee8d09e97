//! taskgraph-view CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::Parser;
use tracing::info;

use taskgraph_view::config::{self, RenderConfig};
use taskgraph_view::logging::{LogLevel, init_logging};
use taskgraph_view::render_response;
use taskgraph_view::renderers::{Renderer, SvgRenderer, TextRenderer};

/// Task analysis response to ranked cards and a dependency diagram.
#[derive(Parser, Debug)]
#[command(
    name = "taskgraph-view",
    version,
    about = "Render a task analysis response as ranked cards and an SVG dependency diagram"
)]
struct Cli {
    /// Analysis response JSON file (reads from stdin if not provided)
    input: Option<String>,

    /// Render config file (TOML)
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: Option<String>,

    /// Viewport width the diagram is fitted to
    #[arg(short = 'w', long = "width")]
    width: Option<f64>,

    /// Write the dependency diagram as SVG to this file
    #[arg(short = 's', long = "svg", value_name = "PATH")]
    svg: Option<String>,

    /// Print the presentation as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Date used as "today" for due-date countdowns (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    today: Option<NaiveDate>,

    /// Logging level (error, warn, info, debug, trace)
    #[arg(long, value_enum, value_name = "LEVEL")]
    log_level: Option<LogLevel>,
}

fn load_config(cli: &Cli) -> Result<RenderConfig> {
    let mut cfg = match &cli.config {
        Some(path) => config::load_from_path(path)
            .with_context(|| format!("cannot load config '{path}'"))?,
        None => RenderConfig::default(),
    };
    if let Some(width) = cli.width {
        cfg = cfg.with_viewport_width(width);
        cfg.validate()?;
    }
    Ok(cfg)
}

fn now(cli: &Cli) -> DateTime<Utc> {
    cli.today
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_else(Utc::now)
}

fn read_input(cli: &Cli) -> Result<String> {
    match &cli.input {
        Some(path) => fs::read_to_string(path).with_context(|| format!("cannot read '{path}'")),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("cannot read stdin")?;
            Ok(buf)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let cfg = load_config(cli)?;
    let text = read_input(cli)?;
    let presentation = render_response(&text, &cfg, now(cli))?;

    if let Some(path) = &cli.svg {
        let svg = SvgRenderer::new().render(&presentation.diagram);
        fs::write(path, svg).with_context(|| format!("cannot write '{path}'"))?;
        info!(path = %path, "wrote dependency diagram");
    }

    let rendered = if cli.json {
        let mut s = serde_json::to_string_pretty(&presentation)?;
        s.push('\n');
        s
    } else {
        TextRenderer::new().render(&presentation)
    };

    let mut stdout = io::stdout();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
