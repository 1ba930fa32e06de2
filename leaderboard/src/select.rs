use ahash::HashMap;
use ahash::HashMapExt;
use leaderboard_types::RunId;
use leaderboard_types::RunRecord;
use std::collections::hash_map::Entry;
use tracing::debug;

/// Keeps the best-scoring run for each identity.
///
/// The result has one run per `id`, in the order each `id` was first seen. A later run replaces the kept one only if its score is strictly better, so the earliest of several equally scored runs wins and a run with an invalid score never replaces a valid one.
pub fn select_best_runs(runs: impl IntoIterator<Item = RunRecord>) -> Vec<RunRecord> {
  let mut best: Vec<RunRecord> = Vec::new();
  let mut slot_by_id: HashMap<RunId, usize> = HashMap::new();
  for run in runs {
    match slot_by_id.entry(run.id.clone()) {
      Entry::Vacant(e) => {
        e.insert(best.len());
        best.push(run);
      }
      Entry::Occupied(e) => {
        let current = &mut best[*e.get()];
        if run.score().is_better_than(current.score()) {
          debug!(
            id = %run.id,
            previous_score = %current.score(),
            score = %run.score(),
            "replaced best run"
          );
          *current = run;
        };
      }
    };
  }
  best
}

#[cfg(test)]
mod tests {
  use super::select_best_runs;
  use leaderboard_types::RunId;
  use leaderboard_types::RunRecord;
  use tracing_test::traced_test;

  fn run(id: &str, name: &str, midmark_time: f64, sandmark_time: f64) -> RunRecord {
    RunRecord {
      id: RunId::new(id),
      name: name.to_string(),
      subtitle: None,
      midmark_time,
      sandmark_time,
      timestamp: "20240115123045".to_string(),
      timestamp_override: None,
    }
  }

  fn names(runs: &[RunRecord]) -> Vec<&str> {
    runs.iter().map(|r| r.name.as_str()).collect()
  }

  #[test]
  #[traced_test]
  fn test_keeps_lowest_score_per_id() {
    let best = select_best_runs(vec![run("1", "slow", 1.0, 1.0), run("1", "fast", 0.5, 0.4)]);
    assert_eq!(names(&best), vec!["fast"]);
    assert!(logs_contain("replaced best run"));
  }

  #[test]
  fn test_tie_keeps_first_seen() {
    let best = select_best_runs(vec![
      run("a", "other", 9.0, 9.0),
      run("1", "first", 1.0, 1.0),
      run("1", "second", 1.0, 1.0),
    ]);
    assert_eq!(names(&best), vec!["other", "first"]);
  }

  #[test]
  fn test_invalid_score_never_replaces_valid() {
    let best = select_best_runs(vec![
      run("1", "valid", 3.0, 4.0),
      run("1", "broken", f64::NAN, 0.1),
    ]);
    assert_eq!(names(&best), vec!["valid"]);
  }

  #[test]
  fn test_valid_score_replaces_invalid() {
    let best = select_best_runs(vec![
      run("1", "broken", f64::NAN, 0.1),
      run("1", "valid", 3.0, 4.0),
      run("1", "also broken", 0.1, f64::NAN),
    ]);
    assert_eq!(names(&best), vec!["valid"]);
  }

  #[test]
  fn test_identities_keep_first_seen_position() {
    let best = select_best_runs(vec![
      run("x", "x slow", 5.0, 5.0),
      run("y", "y", 1.0, 1.0),
      run("x", "x fast", 0.1, 0.1),
      run("z", "z", 2.0, 2.0),
    ]);
    assert_eq!(names(&best), vec!["x fast", "y", "z"]);
  }

  #[test]
  fn test_empty_input() {
    assert!(select_best_runs(Vec::new()).is_empty());
  }
}
