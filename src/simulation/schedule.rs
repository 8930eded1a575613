use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Frequency;

/// Recurrence definition of a simulation movement. Frequency-specific bounds
/// live in the variant, so a monthly or yearly schedule always carries its
/// end date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "ScheduleRepr", into = "ScheduleRepr")]
pub enum Schedule {
    OneTime {
        start: NaiveDate,
    },
    Monthly {
        start: NaiveDate,
        end: NaiveDate,
    },
    Yearly {
        start: NaiveDate,
        end: NaiveDate,
    },
    /// Explicit occurrence dates picked one by one in the authoring form.
    Custom {
        dates: Vec<NaiveDate>,
    },
}

impl Schedule {
    pub fn frequency(&self) -> Frequency {
        match self {
            Schedule::OneTime { .. } => Frequency::OneTime,
            Schedule::Monthly { .. } => Frequency::Monthly,
            Schedule::Yearly { .. } => Frequency::Yearly,
            Schedule::Custom { .. } => Frequency::Custom,
        }
    }

    /// Expands the schedule into the ascending, deduplicated sequence of
    /// dates the cash event occurs on. Deterministic; an inverted range
    /// (end before start) yields an empty sequence.
    pub fn occurrences(&self) -> Vec<NaiveDate> {
        match self {
            Schedule::OneTime { start } => vec![*start],
            Schedule::Monthly { start, end } => stepped_series(*start, *end, StepUnit::Month),
            Schedule::Yearly { start, end } => stepped_series(*start, *end, StepUnit::Year),
            Schedule::Custom { dates } => {
                let mut sorted = dates.clone();
                sorted.sort();
                sorted.dedup();
                sorted
            }
        }
    }
}

#[derive(Clone, Copy)]
enum StepUnit {
    Month,
    Year,
}

/// Steps from `start` in whole months or years while staying within `end`.
/// Each occurrence is re-anchored on the start date's day-of-month, clamped
/// to the last day of shorter months, so a series starting on the 31st lands
/// on Feb 29/28 and returns to the 31st afterwards.
fn stepped_series(start: NaiveDate, end: NaiveDate, unit: StepUnit) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut step = 0i32;
    loop {
        let current = match unit {
            StepUnit::Month => shift_months(start, step),
            StepUnit::Year => shift_years(start, step),
        };
        if current > end {
            break;
        }
        dates.push(current);
        step += 1;
    }
    dates
}

fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    let day = date.day().min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap_or(date)
}

fn shift_years(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() + years;
    let day = date.day().min(days_in_month(year, date.month()));
    NaiveDate::from_ymd_opt(year, date.month(), day).unwrap_or(date)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    (first_next - Duration::days(1)).day()
}

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("frequency `{0}` requires startDate")]
    MissingStart(&'static str),
    #[error("frequency `{0}` requires endDate")]
    MissingEnd(&'static str),
    #[error("frequency `Dates personnalisées` requires customDates")]
    MissingCustomDates,
}

/// Flat wire shape shared with the snapshot document and the authoring form.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleRepr {
    frequency: Frequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom_dates: Option<Vec<NaiveDate>>,
}

impl TryFrom<ScheduleRepr> for Schedule {
    type Error = ScheduleError;

    fn try_from(repr: ScheduleRepr) -> Result<Self, Self::Error> {
        let label = repr.frequency.label();
        match repr.frequency {
            Frequency::OneTime => {
                let start = repr.start_date.ok_or(ScheduleError::MissingStart(label))?;
                Ok(Schedule::OneTime { start })
            }
            Frequency::Monthly => {
                let start = repr.start_date.ok_or(ScheduleError::MissingStart(label))?;
                let end = repr.end_date.ok_or(ScheduleError::MissingEnd(label))?;
                Ok(Schedule::Monthly { start, end })
            }
            Frequency::Yearly => {
                let start = repr.start_date.ok_or(ScheduleError::MissingStart(label))?;
                let end = repr.end_date.ok_or(ScheduleError::MissingEnd(label))?;
                Ok(Schedule::Yearly { start, end })
            }
            Frequency::Custom => {
                let dates = repr.custom_dates.ok_or(ScheduleError::MissingCustomDates)?;
                Ok(Schedule::Custom { dates })
            }
        }
    }
}

impl From<Schedule> for ScheduleRepr {
    fn from(schedule: Schedule) -> Self {
        match schedule {
            Schedule::OneTime { start } => ScheduleRepr {
                frequency: Frequency::OneTime,
                start_date: Some(start),
                end_date: None,
                custom_dates: None,
            },
            Schedule::Monthly { start, end } => ScheduleRepr {
                frequency: Frequency::Monthly,
                start_date: Some(start),
                end_date: Some(end),
                custom_dates: None,
            },
            Schedule::Yearly { start, end } => ScheduleRepr {
                frequency: Frequency::Yearly,
                start_date: Some(start),
                end_date: Some(end),
                custom_dates: None,
            },
            Schedule::Custom { dates } => ScheduleRepr {
                frequency: Frequency::Custom,
                start_date: dates.first().copied(),
                end_date: None,
                custom_dates: Some(dates),
            },
        }
    }
}
