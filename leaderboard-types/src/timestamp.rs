use chrono::Duration;
use chrono::Local;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::TimeZone;

/*

Run timestamps are 14 decimal digits, `YYYYMMDDHHMMSS`, in an unzoned wall clock. Decoding is purely positional and deliberately permissive, matching the calendar constructor the reports were first generated with:

- Fields are sliced by character position. A short string yields empty fields, and an empty field reads as zero.
- Fields are read as numbers, so `1.5` and `1e3` are accepted and truncated toward zero. A field that isn't a finite number makes the whole instant invalid. No error is raised.
- Out-of-range fields roll over into the next larger unit (month 13 is January of the following year, day 0 is the last day of the previous month).
- Years 0 to 99 are read as 1900 to 1999.

*/

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Fields {
  year: i64,
  month: i64,
  day: i64,
  hour: i64,
  minute: i64,
  second: i64,
}

const MAX_FIELD: f64 = 1e9;

fn field(chars: &[char], start: usize, end: usize) -> Option<i64> {
  let raw: String = chars
    .iter()
    .skip(start)
    .take(end.saturating_sub(start))
    .collect();
  let raw = raw.trim();
  if raw.is_empty() {
    return Some(0);
  };
  if let Ok(v) = raw.parse::<i64>() {
    return Some(v);
  };
  // Anything this large is outside the calendar range anyway.
  let v = raw.parse::<f64>().ok()?.trunc();
  (v.is_finite() && v.abs() < MAX_FIELD).then_some(v as i64)
}

impl Fields {
  fn slice(raw: &str) -> Option<Self> {
    let chars = raw.chars().collect::<Vec<_>>();
    Some(Self {
      year: field(&chars, 0, 4)?,
      month: field(&chars, 4, 6)?,
      day: field(&chars, 6, 8)?,
      hour: field(&chars, 8, 10)?,
      minute: field(&chars, 10, 12)?,
      second: field(&chars, 12, 14)?,
    })
  }

  fn to_naive(self) -> Option<NaiveDateTime> {
    let year = if (0..=99).contains(&self.year) {
      1900 + self.year
    } else {
      self.year
    };
    let months = year * 12 + self.month - 1;
    let first_of_month = NaiveDate::from_ymd_opt(
      i32::try_from(months.div_euclid(12)).ok()?,
      u32::try_from(months.rem_euclid(12) + 1).ok()?,
      1,
    )?
    .and_hms_opt(0, 0, 0)?;
    // Fields are bounded by MAX_FIELD, so this can't overflow.
    let offset_secs =
      (self.day - 1) * 86_400 + self.hour * 3_600 + self.minute * 60 + self.second;
    first_of_month.checked_add_signed(Duration::seconds(offset_secs))
  }
}

/// A decoded run timestamp. Invalid when the raw string had a non-numeric field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timestamp(Option<NaiveDateTime>);

impl Timestamp {
  pub fn decode(raw: &str) -> Self {
    Self(Fields::slice(raw).and_then(Fields::to_naive))
  }

  pub fn is_valid(&self) -> bool {
    self.0.is_some()
  }

  /// The wall-clock value. Use chrono's `Datelike` and `Timelike` to read fields (`month0` for a zero-based month).
  pub fn naive(&self) -> Option<NaiveDateTime> {
    self.0
  }

  /// Milliseconds since the Unix epoch, reading the wall-clock value in the host's local zone.
  pub fn epoch_millis(&self) -> Option<i64> {
    let naive = self.0?;
    let local = Local
      .from_local_datetime(&naive)
      .earliest()
      // The wall-clock time was skipped by a DST transition; move past the gap.
      .or_else(|| {
        Local
          .from_local_datetime(&(naive + Duration::hours(1)))
          .earliest()
      })?;
    Some(local.timestamp_millis())
  }
}
