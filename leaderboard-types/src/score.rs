use std::cmp::Ordering;
use std::fmt;

/// Sum of a run's two timings. Lower is better.
///
/// A NaN sum is an invalid score. Invalid scores order after every valid score and equal to each other, so an invalid run never displaces a valid one and always ranks last.
#[derive(Clone, Copy, Debug)]
pub struct Score(f64);

impl Score {
  pub fn new(value: f64) -> Self {
    Self(value)
  }

  pub fn value(self) -> f64 {
    self.0
  }

  pub fn is_valid(self) -> bool {
    !self.0.is_nan()
  }

  /// Strictly better. Equal scores are never better than each other.
  pub fn is_better_than(self, other: Score) -> bool {
    self < other
  }
}

impl Ord for Score {
  fn cmp(&self, other: &Self) -> Ordering {
    match (self.is_valid(), other.is_valid()) {
      (true, true) => self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal),
      (true, false) => Ordering::Less,
      (false, true) => Ordering::Greater,
      (false, false) => Ordering::Equal,
    }
  }
}

impl PartialOrd for Score {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl PartialEq for Score {
  fn eq(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Equal
  }
}

impl Eq for Score {}

impl fmt::Display for Score {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}
