use crate::error::BuildError;
use crate::error::BuildResult;
use serde::Deserialize;
use std::fs::read_to_string;
use std::path::Path;
use std::path::PathBuf;

/// Where the build reads from and writes to. Relative paths are resolved against a root directory, [`default_root`] unless overridden.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Conf {
  /// Directory of `*.json` run files. Not searched recursively.
  #[serde(default = "default_runs_dir")]
  pub runs_dir: PathBuf,
  /// Must contain the placeholder exactly once.
  #[serde(default = "default_template")]
  pub template: PathBuf,
  /// Created if it doesn't exist.
  #[serde(default = "default_out_dir")]
  pub out_dir: PathBuf,
  #[serde(default = "default_out_file")]
  pub out_file: PathBuf,
}

/// The workspace directory this program was built from, so a bare invocation finds `runs/` and `template.html` no matter where it is run from.
pub fn default_root() -> PathBuf {
  Path::new(env!("CARGO_MANIFEST_DIR")).join("..")
}

fn default_runs_dir() -> PathBuf {
  PathBuf::from("runs")
}

fn default_template() -> PathBuf {
  PathBuf::from("template.html")
}

fn default_out_dir() -> PathBuf {
  PathBuf::from("_site")
}

fn default_out_file() -> PathBuf {
  PathBuf::from("index.html")
}

impl Default for Conf {
  fn default() -> Self {
    Self {
      runs_dir: default_runs_dir(),
      template: default_template(),
      out_dir: default_out_dir(),
      out_file: default_out_file(),
    }
  }
}

impl Conf {
  pub fn load(path: &Path) -> BuildResult<Conf> {
    let raw = read_to_string(path).map_err(|source| BuildError::ReadConfig {
      path: path.to_path_buf(),
      source,
    })?;
    toml::from_str(&raw).map_err(|source| BuildError::ParseConfig {
      path: path.to_path_buf(),
      source,
    })
  }

  pub fn runs_dir_in(&self, root: &Path) -> PathBuf {
    root.join(&self.runs_dir)
  }

  pub fn template_in(&self, root: &Path) -> PathBuf {
    root.join(&self.template)
  }

  pub fn out_dir_in(&self, root: &Path) -> PathBuf {
    root.join(&self.out_dir)
  }

  pub fn out_path_in(&self, root: &Path) -> PathBuf {
    self.out_dir_in(root).join(&self.out_file)
  }
}
