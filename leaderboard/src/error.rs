use std::error::Error;
use std::fmt::Display;
use std::io;
use std::path::PathBuf;

pub type BuildResult<T> = Result<T, BuildError>;

#[derive(Debug)]
pub enum BuildError {
  ReadConfig {
    path: PathBuf,
    source: io::Error,
  },
  ParseConfig {
    path: PathBuf,
    source: toml::de::Error,
  },
  ReadRunsDir {
    path: PathBuf,
    source: io::Error,
  },
  ReadRun {
    path: PathBuf,
    source: io::Error,
  },
  ParseRun {
    path: PathBuf,
    source: serde_json::Error,
  },
  ReadTemplate {
    path: PathBuf,
    source: io::Error,
  },
  MissingPlaceholder {
    path: PathBuf,
  },
  WriteOutput {
    path: PathBuf,
    source: io::Error,
  },
}

impl Display for BuildError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      BuildError::ReadConfig { path, source } => {
        write!(f, "failed to read config file {}: {source}", path.display())
      }
      BuildError::ParseConfig { path, source } => {
        write!(f, "failed to parse config file {}: {source}", path.display())
      }
      BuildError::ReadRunsDir { path, source } => {
        write!(f, "failed to list runs directory {}: {source}", path.display())
      }
      BuildError::ReadRun { path, source } => {
        write!(f, "failed to read run file {}: {source}", path.display())
      }
      BuildError::ParseRun { path, source } => {
        write!(f, "failed to parse run file {}: {source}", path.display())
      }
      BuildError::ReadTemplate { path, source } => {
        write!(f, "failed to read template {}: {source}", path.display())
      }
      BuildError::MissingPlaceholder { path } => write!(
        f,
        "template {} does not contain {}",
        path.display(),
        crate::render::PLACEHOLDER
      ),
      BuildError::WriteOutput { path, source } => {
        write!(f, "failed to write output {}: {source}", path.display())
      }
    }
  }
}

impl Error for BuildError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      BuildError::ReadConfig { source, .. }
      | BuildError::ReadRunsDir { source, .. }
      | BuildError::ReadRun { source, .. }
      | BuildError::ReadTemplate { source, .. }
      | BuildError::WriteOutput { source, .. } => Some(source),
      BuildError::ParseConfig { source, .. } => Some(source),
      BuildError::ParseRun { source, .. } => Some(source),
      BuildError::MissingPlaceholder { .. } => None,
    }
  }
}
