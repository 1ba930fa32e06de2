use chrono::Local;
use clap::Parser;
use leaderboard::build;
use leaderboard::conf::default_root;
use leaderboard::conf::Conf;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/*

# Leaderboard

Reads every run record in `runs/`, keeps the fastest run for each `id`, and writes `_site/index.html` from `template.html` with the ranked runs in place of `{{ PLACEHOLDER }}`. With no arguments, all paths are relative to the workspace this program was built from, wherever it is run.

*/

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
  /// Directory that relative paths are resolved against. Defaults to the workspace this program was built from.
  #[arg(long)]
  root: Option<PathBuf>,

  /// Path to a TOML file overriding the runs directory, template, or output location.
  #[arg(long)]
  config: Option<PathBuf>,
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let cli = Cli::parse();

  let conf = match cli.config {
    Some(path) => Conf::load(&path).unwrap_or_else(|err| panic!("{err}")),
    None => Conf::default(),
  };
  let root = cli.root.unwrap_or_else(default_root);

  let summary = build(&conf, &root, Local::now()).unwrap_or_else(|err| panic!("{err}"));
  println!(
    "Generated {} with {} of {} runs",
    summary.output.display(),
    summary.runs_ranked,
    summary.runs_loaded
  );
}
