use crate::conf::Conf;
use crate::error::BuildError;
use crate::error::BuildResult;
use crate::load::load_runs;
use crate::rank::rank;
use crate::render::fill_template;
use crate::render::render_runs;
use crate::select::select_best_runs;
use chrono::DateTime;
use chrono::Local;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use tracing::info;

pub mod conf;
pub mod error;
pub mod load;
pub mod rank;
pub mod render;
pub mod select;

#[derive(Debug)]
pub struct BuildSummary {
  pub runs_loaded: usize,
  pub runs_ranked: usize,
  pub output: PathBuf,
}

/// Loads every run, keeps the best per identity, ranks them, and writes the filled template. `now` decides whether the latest run is recent enough to highlight.
///
/// Nothing is written unless every run file and the template were read successfully.
pub fn build(conf: &Conf, root: &Path, now: DateTime<Local>) -> BuildResult<BuildSummary> {
  let runs = load_runs(&conf.runs_dir_in(root))?;
  let runs_loaded = runs.len();

  let ranking = rank(select_best_runs(runs));
  let runs_ranked = ranking.runs.len();
  info!(
    runs_loaded,
    runs_ranked,
    latest = ?ranking.latest,
    "ranked runs"
  );

  let template_path = conf.template_in(root);
  let template =
    fs::read_to_string(&template_path).map_err(|source| BuildError::ReadTemplate {
      path: template_path.clone(),
      source,
    })?;
  let page = fill_template(&template, &render_runs(&ranking, now))
    .ok_or(BuildError::MissingPlaceholder {
      path: template_path,
    })?;

  let out_dir = conf.out_dir_in(root);
  fs::create_dir_all(&out_dir).map_err(|source| BuildError::WriteOutput {
    path: out_dir.clone(),
    source,
  })?;
  let output = conf.out_path_in(root);
  fs::write(&output, page).map_err(|source| BuildError::WriteOutput {
    path: output.clone(),
    source,
  })?;
  info!(output = %output.display(), "wrote leaderboard");

  Ok(BuildSummary {
    runs_loaded,
    runs_ranked,
    output,
  })
}
