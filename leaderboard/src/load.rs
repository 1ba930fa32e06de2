use crate::error::BuildError;
use crate::error::BuildResult;
use leaderboard_types::RunRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use tracing::debug;
use tracing::info;

static RUN_FILENAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.json$").unwrap());

fn is_run_filename(filename: &str) -> bool {
  RUN_FILENAME_RE.is_match(filename)
}

fn load_run(path: &Path) -> BuildResult<RunRecord> {
  let content = fs::read_to_string(path).map_err(|source| BuildError::ReadRun {
    path: path.to_path_buf(),
    source,
  })?;
  let run: RunRecord = serde_json::from_str(&content).map_err(|source| BuildError::ParseRun {
    path: path.to_path_buf(),
    source,
  })?;
  debug!(path = %path.display(), id = %run.id, "loaded run");
  Ok(run)
}

/// Reads every `*.json` file directly inside `runs_dir`. Files are read in file name order so repeated builds over the same directory see runs in the same order. Any unreadable or malformed file fails the whole load.
pub fn load_runs(runs_dir: &Path) -> BuildResult<Vec<RunRecord>> {
  let read_dir_err = |source| BuildError::ReadRunsDir {
    path: runs_dir.to_path_buf(),
    source,
  };

  let mut paths: Vec<PathBuf> = Vec::new();
  for entry in fs::read_dir(runs_dir).map_err(read_dir_err)? {
    let entry = entry.map_err(read_dir_err)?;
    let filename = entry.file_name().to_string_lossy().to_string();
    if !is_run_filename(&filename) {
      debug!(filename = %filename, "skipping non-run file");
      continue;
    };
    if entry.file_type().map_err(read_dir_err)?.is_dir() {
      debug!(filename = %filename, "skipping directory");
      continue;
    };
    paths.push(entry.path());
  }
  paths.sort();

  let runs = paths
    .iter()
    .map(|path| load_run(path))
    .collect::<BuildResult<Vec<_>>>()?;
  info!(
    runs_dir = %runs_dir.display(),
    count = runs.len(),
    "loaded runs"
  );
  Ok(runs)
}
