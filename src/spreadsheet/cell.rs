use calamine::Data;
use calamine::ExcelDateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::NaiveTime;
use iso8601_duration::Duration as IsoDuration;

/// A single decoded spreadsheet cell.
///
/// The variant keeps the native type reported by the workbook. The store only
/// ever sees [`Cell::to_text`], so every variant must have a textual rendering.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Cell {
    /// No value at this position
    #[default]
    Empty,
    /// Inline or shared string
    Text(String),
    /// Whole number
    Integer(i64),
    /// Floating point number
    Number(f64),
    /// Boolean values (true/false)
    Boolean(bool),
    /// Date and time
    DateTime(NaiveDateTime),
    /// Date without time component
    Date(NaiveDate),
    /// Time without date component
    Time(NaiveTime),
    /// Formula error such as `#DIV/0!`
    Error(String),
}

impl Cell {
    /// Returns true if the cell holds no value.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Textual representation stored in the database, `None` for an absent value.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Text(value) => Some(value.to_owned()),
            Cell::Integer(value) => Some(value.to_string()),
            Cell::Number(value) => Some(value.to_string()),
            Cell::Boolean(value) => Some(value.to_string()),
            Cell::DateTime(value) => Some(value.format("%Y-%m-%d %H:%M:%S").to_string()),
            Cell::Date(value) => Some(value.format("%Y-%m-%d").to_string()),
            Cell::Time(value) => Some(value.format("%H:%M:%S").to_string()),
            Cell::Error(value) => Some(value.to_owned()),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_owned())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<&Data> for Cell {
    fn from(value: &Data) -> Self {
        match value {
            Data::Empty => Cell::Empty,
            Data::String(value) => Cell::Text(value.to_owned()),
            Data::Int(value) => Cell::Integer(*value),
            Data::Float(value) => Cell::Number(*value),
            Data::Bool(value) => Cell::Boolean(*value),
            Data::DateTime(value) => from_excel_datetime(value),
            Data::DateTimeIso(value) => Cell::Text(value.replace('T', " ")),
            Data::DurationIso(value) => from_iso_duration(value),
            Data::Error(error) => Cell::Error(error.to_string()),
        }
    }
}

/// Splits an Excel serial date into time-only, date-only or full datetime values.
fn from_excel_datetime(value: &ExcelDateTime) -> Cell {
    let serial = value.as_f64();
    if value.is_duration() {
        return Cell::Text(to_time_string(serial));
    }
    match value.as_datetime() {
        Some(datetime) if serial < 1.0 => Cell::Time(datetime.time()),
        Some(datetime) if serial.fract() == 0.0 => Cell::Date(datetime.date()),
        Some(datetime) => Cell::DateTime(datetime),
        None => Cell::Number(serial),
    }
}

/// Renders an ISO 8601 duration as `HH:MM:SS`. Durations with years or
/// months have no fixed length and keep their original text.
fn from_iso_duration(value: &str) -> Cell {
    match value.parse::<IsoDuration>() {
        Ok(duration) if duration.year == 0.0 && duration.month == 0.0 => {
            let seconds = duration.day as f64 * 86_400f64
                + duration.hour as f64 * 3_600f64
                + duration.minute as f64 * 60f64
                + duration.second as f64;
            Cell::Text(to_time_string(seconds / 86_400f64))
        }
        _ => Cell::Text(value.to_owned()),
    }
}

/// Converts an Excel day fraction to `HH:MM:SS`, hours may exceed 24.
pub(crate) fn to_time_string(factor: f64) -> String {
    let mut seconds = (factor * 86_400f64).round() as i64;
    let sign = if seconds < 0 { "-" } else { "" };
    seconds = seconds.abs();
    let hours = seconds / 3600;
    let minutes = seconds % 3600 / 60;
    let seconds = seconds % 60;
    format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
}
