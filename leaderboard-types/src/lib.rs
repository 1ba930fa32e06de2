use serde::de::IgnoredAny;
use serde::Deserialize;
use serde::Deserializer;
use std::fmt;

pub mod score;
pub mod timestamp;

pub use score::Score;
pub use timestamp::Timestamp;

/// Logical identity of a track of repeated runs. Stored records may be keyed by a JSON string or number; both are normalised to the same textual key, so `1` and `"1"` are the same identity.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct RunId(String);

impl RunId {
  pub fn new(raw: impl Into<String>) -> Self {
    Self(raw.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for RunId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl<'de> Deserialize<'de> for RunId {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
      Text(String),
      Signed(i64),
      Unsigned(u64),
      Float(f64),
    }

    Ok(RunId(match Raw::deserialize(deserializer)? {
      Raw::Text(v) => v,
      Raw::Signed(v) => v.to_string(),
      Raw::Unsigned(v) => v.to_string(),
      Raw::Float(v) => v.to_string(),
    }))
  }
}

fn invalid_time() -> f64 {
  f64::NAN
}

// Anything that isn't a JSON number (null, strings, objects) becomes NaN so the run can never win a comparison.
fn lenient_time<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum Raw {
    Number(f64),
    Other(IgnoredAny),
  }

  Ok(match Raw::deserialize(deserializer)? {
    Raw::Number(v) => v,
    Raw::Other(_) => f64::NAN,
  })
}

/// One recorded benchmark execution, as stored in a run file.
#[derive(Clone, Debug, Deserialize)]
pub struct RunRecord {
  pub id: RunId,
  /// Empty if missing.
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub subtitle: Option<String>,
  /// Seconds. NaN if missing or not a number.
  #[serde(default = "invalid_time", deserialize_with = "lenient_time")]
  pub midmark_time: f64,
  /// Seconds. NaN if missing or not a number.
  #[serde(default = "invalid_time", deserialize_with = "lenient_time")]
  pub sandmark_time: f64,
  /// `YYYYMMDDHHMMSS`, see [`Timestamp::decode`].
  #[serde(default)]
  pub timestamp: String,
  #[serde(default)]
  pub timestamp_override: Option<String>,
}

impl RunRecord {
  pub fn score(&self) -> Score {
    Score::new(self.midmark_time + self.sandmark_time)
  }

  pub fn decoded_timestamp(&self) -> Timestamp {
    Timestamp::decode(&self.timestamp)
  }

  pub fn subtitle(&self) -> Option<&str> {
    self.subtitle.as_deref().filter(|s| !s.is_empty())
  }

  pub fn timestamp_override(&self) -> Option<&str> {
    self.timestamp_override.as_deref().filter(|s| !s.is_empty())
  }

  /// Reference runs are highlighted. This is a plain substring match on the lowercased name, so "Referencer" also counts.
  pub fn is_reference(&self) -> bool {
    self.name.to_lowercase().contains("reference")
  }
}
