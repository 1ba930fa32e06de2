use crate::rank::Ranking;
use chrono::DateTime;
use chrono::Local;
use leaderboard_types::RunRecord;
use maud::html;
use maud::Markup;

pub const PLACEHOLDER: &str = "{{ PLACEHOLDER }}";

/// How recent the latest run must be for it to be highlighted.
pub const LATEST_WINDOW_MS: i64 = 86_400_000;

/// `position` is 1-based.
pub fn rank_label(position: usize) -> String {
  match position {
    1 => "🥇".to_string(),
    2 => "🥈".to_string(),
    3 => "🥉".to_string(),
    n => format!("#{n}"),
  }
}

/// Rounds half away from zero, then prints exactly `places` decimals.
pub fn round_to(num: f64, places: u32) -> String {
  let factor = 10f64.powi(places as i32);
  format!("{:.*}", places as usize, (num * factor).round() / factor)
}

/// A run is flagged latest only if it is the ranking's latest run, shows its real timestamp, and was recorded less than a day before `now`.
pub fn is_flagged_latest(ranking: &Ranking, run: &RunRecord, now: DateTime<Local>) -> bool {
  if run.timestamp_override().is_some() || !ranking.is_latest(run) {
    return false;
  };
  let Some(ts) = run.decoded_timestamp().epoch_millis() else {
    return false;
  };
  now.timestamp_millis() - ts < LATEST_WINDOW_MS
}

pub fn render_run(position: usize, run: &RunRecord, latest: bool) -> Markup {
  // The page formats this client-side; NaN marks an undecodable timestamp.
  let timestamp_ms = run
    .decoded_timestamp()
    .epoch_millis()
    .map(|ms| ms.to_string())
    .unwrap_or_else(|| "NaN".to_string());
  let reference = run.is_reference();
  html! {
    div.run.reference[reference].latest[latest] {
      div.rank { (rank_label(position)) }
      div.details {
        p.name {
          (run.name)
          @if let Some(subtitle) = run.subtitle() {
            " "
            span.subtitle { "(" (subtitle) ")" }
          }
        }
        p.times {
          span.midmark { "Midmark: " (round_to(run.midmark_time, 3)) "s" }
          " "
          span.sandmark { "Sandmark: " (round_to(run.sandmark_time, 3)) "s" }
        }
      }
      p.timestamp {
        @if let Some(text) = run.timestamp_override() {
          (text)
        } @else {
          span data-timestamp=(timestamp_ms) {}
          @if latest {
            " "
            span.latest-badge { "Latest" }
          }
        }
      }
    }
  }
}

/// One fragment per run in ranked order, joined by newlines.
pub fn render_runs(ranking: &Ranking, now: DateTime<Local>) -> String {
  ranking
    .runs
    .iter()
    .enumerate()
    .map(|(i, run)| {
      render_run(i + 1, run, is_flagged_latest(ranking, run, now)).into_string()
    })
    .collect::<Vec<_>>()
    .join("\n")
}

/// Replaces the first placeholder occurrence. Returns `None` if the template has no placeholder.
pub fn fill_template(template: &str, body: &str) -> Option<String> {
  template
    .contains(PLACEHOLDER)
    .then(|| template.replacen(PLACEHOLDER, body, 1))
}
