use anyhow::{Context, Result};
use blockmark_config::Config;
use blockmark_engine::{Document, RenderExtensionConfig};
use clap::Parser;
use std::{
    fs,
    io::{self, IsTerminal, Read, Write},
    path::{Path, PathBuf},
};

#[derive(Parser)]
#[command(name = "blockmark")]
#[command(about = "Render Markdown documents as HTML or for the terminal")]
struct Args {
    /// Markdown file to render; reads standard input when absent or `-`
    file: Option<PathBuf>,

    /// Emit a complete HTML page instead of terminal text
    #[arg(long)]
    html: bool,

    /// Wrap terminal output to this many columns (0 disables wrapping)
    #[arg(long)]
    view_width: Option<usize>,

    /// Config file to use instead of ~/.config/blockmark/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read standard input")?;
            Ok(source)
        }
    }
}

/// Picks the wrap width: command line, then config, then the terminal size.
fn resolve_view_width(
    flag: Option<usize>,
    config: Option<usize>,
    terminal: impl FnOnce() -> Option<usize>,
) -> usize {
    flag.or(config).or_else(terminal).unwrap_or(0)
}

fn terminal_width() -> Option<usize> {
    if !io::stdout().is_terminal() {
        return None;
    }
    match crossterm::terminal::size() {
        Ok((columns, _)) => Some(usize::from(columns)),
        Err(e) => {
            log::debug!("Could not query terminal size: {e}");
            None
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config_path = path.map_or_else(Config::config_path, Path::to_path_buf);
    log::debug!("Config path: {}", config_path.display());
    let config = Config::load_from_path(&config_path)?;
    if config.is_none() && path.is_some() {
        log::warn!("Config file {} not found, using defaults", config_path.display());
    }
    Ok(config.unwrap_or_default())
}

fn render(source: &str, args: &Args, config: &Config) -> Result<String> {
    let document = Document::parse(source).context("Failed to parse document")?;

    if args.html {
        let render_config = RenderExtensionConfig {
            fragment_links_in_heading: config.fragment_links_in_heading,
            ..RenderExtensionConfig::default()
        };
        let extra_head = config.extra_head_contents()?;
        return Ok(document.render_to_html(&extra_head, &render_config));
    }

    let view_width = resolve_view_width(args.view_width, config.view_width, terminal_width);
    log::debug!("Rendering for terminal at width {view_width}");
    Ok(document.render_for_terminal(view_width)?)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let source = read_input(args.file.as_deref())?;
    let output = render(&source, &args, &config)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
