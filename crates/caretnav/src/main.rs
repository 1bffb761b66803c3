use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use caretnav_config::NavigationConfig;
use caretnav_core::{
    BufferView, CursorState, Invocation, Navigator, Position, Selection, TextBuffer,
};

/// Replays caret navigation commands over a text file and prints where the
/// cursor ends up.
#[derive(Parser, Debug)]
#[command(name = "caretnav", version, about)]
struct Cli {
    /// File to navigate.
    file: PathBuf,

    /// Commands to apply in order: left, right, up, down, page-up, page-down,
    /// home, end, top, bottom, translate-up, translate-down, select-all.
    /// Prefix with `shift+` to extend the selection; suffix `:N` to repeat
    /// character and line moves (e.g. `shift+down:3`).
    commands: Vec<String>,

    /// Starting line (1-based).
    #[arg(long, default_value_t = 1)]
    line: usize,

    /// Starting column (1-based).
    #[arg(long, default_value_t = 1)]
    column: usize,

    /// Tab width, overriding the config file.
    #[arg(long)]
    tab_size: Option<usize>,

    /// Lines per page, overriding the config file.
    #[arg(long)]
    page_lines: Option<usize>,

    /// Config file to use instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the state after every command, not just the last one.
    #[arg(long)]
    steps: bool,

    /// Print states as JSON lines.
    #[arg(long)]
    json: bool,
}

/// One printed cursor state.
#[derive(Debug, Serialize)]
struct Report {
    command: Option<String>,
    selection: Selection,
    leftover: usize,
    end_sticky: bool,
}

impl Report {
    fn new<B: BufferView + ?Sized>(
        command: Option<&Invocation>,
        state: &CursorState,
        buffer: &B,
    ) -> Self {
        Self {
            command: command.map(ToString::to_string),
            selection: state.selection(buffer),
            leftover: state.leftover(),
            end_sticky: state.is_end_sticky(),
        }
    }

    fn print(&self, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string(self).context("serializing cursor state")?);
            return Ok(());
        }
        let command = self.command.as_deref().unwrap_or("-");
        let anchor = self.selection.anchor.to_string();
        let head = self.selection.head.to_string();
        let mut line = format!("{command:<18} anchor {anchor:<8} head {head:<8}");
        if self.leftover > 0 {
            line.push_str(&format!(" leftover {}", self.leftover));
        }
        if self.end_sticky {
            line.push_str(" end-sticky");
        }
        println!("{}", line.trim_end());
        Ok(())
    }
}

fn load_config(cli: &Cli) -> NavigationConfig {
    let path = cli.config.clone().unwrap_or_else(NavigationConfig::config_path);
    let mut config = NavigationConfig::load_or_create(&path);
    if let Some(tab_size) = cli.tab_size {
        config.tab_size = tab_size;
    }
    if let Some(page_lines) = cli.page_lines {
        config.page_lines = page_lines;
    }
    config.sanitize();
    tracing::debug!(?config, path = %path.display(), "Loaded navigation config");
    config
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting caretnav");

    let config = load_config(&cli);

    let text = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    let buffer = TextBuffer::from(text.as_str());
    tracing::debug!(lines = buffer.len_lines(), file = %cli.file.display(), "Loaded buffer");

    let invocations = cli
        .commands
        .iter()
        .map(|c| c.parse::<Invocation>())
        .collect::<Result<Vec<_>>>()?;

    let mut state = CursorState::caret(Position::new(cli.line, cli.column));
    state
        .validate(&buffer)
        .context("starting position is outside the file")?;

    let navigator = Navigator::new(&config, &buffer);
    if cli.steps {
        Report::new(None, &state, &buffer).print(cli.json)?;
    }
    for invocation in &invocations {
        state = navigator.apply(&state, *invocation);
        if cli.steps {
            Report::new(Some(invocation), &state, &buffer).print(cli.json)?;
        }
    }
    if !cli.steps {
        Report::new(invocations.last(), &state, &buffer).print(cli.json)?;
    }

    Ok(())
}
