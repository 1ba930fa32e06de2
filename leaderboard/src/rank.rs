use chrono::NaiveDateTime;
use leaderboard_types::RunId;
use leaderboard_types::RunRecord;

/// Selected runs in leaderboard order, plus which run was most recently recorded.
pub struct Ranking {
  pub runs: Vec<RunRecord>,
  pub latest: Option<RunId>,
}

impl Ranking {
  pub fn is_latest(&self, run: &RunRecord) -> bool {
    self.latest.as_ref() == Some(&run.id)
  }
}

/// Stable sort by ascending score. Invalid scores go last.
pub fn sort_by_score(mut runs: Vec<RunRecord>) -> Vec<RunRecord> {
  runs.sort_by_key(|r| r.score());
  runs
}

/// The run with the greatest decoded timestamp. Runs whose timestamp doesn't decode are skipped, and the earlier of two equal timestamps wins.
pub fn find_latest(runs: &[RunRecord]) -> Option<&RunRecord> {
  let mut latest: Option<(NaiveDateTime, &RunRecord)> = None;
  for run in runs {
    let Some(ts) = run.decoded_timestamp().naive() else {
      continue;
    };
    if latest.map_or(true, |(latest_ts, _)| ts > latest_ts) {
      latest = Some((ts, run));
    };
  }
  latest.map(|(_, run)| run)
}

pub fn rank(selected: Vec<RunRecord>) -> Ranking {
  let latest = find_latest(&selected).map(|r| r.id.clone());
  Ranking {
    runs: sort_by_score(selected),
    latest,
  }
}

#[cfg(test)]
mod tests {
  use super::find_latest;
  use super::rank;
  use super::sort_by_score;
  use leaderboard_types::RunId;
  use leaderboard_types::RunRecord;

  fn run(id: &str, score: f64, timestamp: &str) -> RunRecord {
    RunRecord {
      id: RunId::new(id),
      name: format!("run {id}"),
      subtitle: None,
      midmark_time: score,
      sandmark_time: 0.0,
      timestamp: timestamp.to_string(),
      timestamp_override: None,
    }
  }

  fn ids(runs: &[RunRecord]) -> Vec<&str> {
    runs.iter().map(|r| r.id.as_str()).collect()
  }

  #[test]
  fn test_sorts_ascending() {
    let sorted = sort_by_score(vec![
      run("c", 3.0, "20240101000000"),
      run("a", 1.0, "20240101000000"),
      run("b", 2.0, "20240101000000"),
    ]);
    let scores = sorted.iter().map(|r| r.score().value()).collect::<Vec<_>>();
    assert_eq!(scores, vec![1.0, 2.0, 3.0]);
  }

  #[test]
  fn test_sort_is_stable_and_invalid_last() {
    let sorted = sort_by_score(vec![
      run("nan", f64::NAN, "20240101000000"),
      run("b1", 2.0, "20240101000000"),
      run("a", 1.0, "20240101000000"),
      run("b2", 2.0, "20240101000000"),
    ]);
    assert_eq!(ids(&sorted), vec!["a", "b1", "b2", "nan"]);
  }

  #[test]
  fn test_latest_is_newest_timestamp() {
    let runs = vec![
      run("old", 1.0, "20230101000000"),
      run("new", 2.0, "20240601120000"),
      run("mid", 3.0, "20240101000000"),
    ];
    assert_eq!(find_latest(&runs).unwrap().id.as_str(), "new");
  }

  #[test]
  fn test_latest_tie_keeps_first_and_skips_invalid() {
    let runs = vec![
      run("bad", 1.0, "2025xx01000000"),
      run("first", 2.0, "20240601120000"),
      run("second", 3.0, "20240601120000"),
    ];
    assert_eq!(find_latest(&runs).unwrap().id.as_str(), "first");
    assert!(find_latest(&runs[..1]).is_none());
    assert!(find_latest(&[]).is_none());
  }

  #[test]
  fn test_rank_tracks_latest_independently_of_order() {
    let ranking = rank(vec![
      run("slow-new", 9.0, "20240601120000"),
      run("fast-old", 1.0, "20230101000000"),
    ]);
    assert_eq!(ids(&ranking.runs), vec!["fast-old", "slow-new"]);
    assert!(ranking.is_latest(&ranking.runs[1]));
    assert!(!ranking.is_latest(&ranking.runs[0]));
  }
}
