use std::{
    io::IsTerminal,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use crossterm::style::{Color, Stylize};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use mazespawn::{Generator, MazeConfig, build_from_config};

/// Generate a perfect maze and print its plan.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file with maze settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// One of: pure-recursive, recursive-tree, random-tree, oldest-tree, recursive-division
    #[arg(short, long)]
    generator: Option<Generator>,

    /// Number of rows
    #[arg(long)]
    rows: Option<u16>,

    /// Number of columns
    #[arg(long)]
    columns: Option<u16>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Ignore the seed and build a different maze every run
    #[arg(long)]
    random: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn to_config(&self) -> anyhow::Result<MazeConfig> {
        let mut config = match &self.config {
            Some(path) => MazeConfig::from_json_file(path)
                .with_context(|| format!("reading config {}", path.display()))?,
            None => MazeConfig::default(),
        };
        if let Some(generator) = self.generator {
            config.generator = generator;
        }
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(columns) = self.columns {
            config.columns = columns;
        }
        if let Some(seed) = self.seed {
            config.random_seed = seed;
            config.deterministic = true;
        }
        if self.random {
            config.deterministic = false;
        }
        Ok(config)
    }
}

/// Installs the fmt subscriber. The returned guard must live until exit so
/// buffered file logs get flushed.
fn init_tracing(log_file: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match log_file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("{} is not a file path", path.display()))?;
            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = init_tracing(args.log_file.as_deref())?;

    let config = args.to_config()?;
    tracing::debug!(?config, "resolved configuration");

    let maze = build_from_config(&config)?;

    println!(
        "{} {}x{} (seed: {})",
        config.generator,
        maze.rows(),
        maze.columns(),
        config
            .seed()
            .map_or_else(|| "random".to_string(), |s| s.to_string())
    );
    let plan = maze.to_string();
    if std::io::stdout().is_terminal() {
        let goal = " G ".with(Color::Red).bold().to_string();
        print!("{}", plan.replace(" G ", &goal));
    } else {
        print!("{plan}");
    }
    Ok(())
}
