//! Linear projection of improvement toward a target.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::BenchmarkError;

pub const MILESTONE_INTERVAL_DAYS: u32 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Milestone {
    pub day: u32,
    pub value: f64,
    pub percent_complete: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ImprovementProjection {
    pub current: f64,
    pub target: f64,
    pub days_to_target: u32,
    pub daily_improvement: f64,
    pub milestones: Vec<Milestone>,
}

/// Longest horizon a projection may span, ten years.
pub const MAX_PROJECTION_DAYS: u32 = 3650;

/// Project a straight line from `current` to `target` with a milestone
/// every [`MILESTONE_INTERVAL_DAYS`], the last one landing on the target
/// day. `days_to_target` below 1 is treated as 1; above
/// [`MAX_PROJECTION_DAYS`] is an error.
pub fn project_improvement(
    current: f64,
    target: f64,
    days_to_target: u32,
) -> Result<ImprovementProjection, BenchmarkError> {
    if days_to_target > MAX_PROJECTION_DAYS {
        return Err(BenchmarkError::HorizonTooLong {
            days: days_to_target,
            max: MAX_PROJECTION_DAYS,
        });
    }
    let days_to_target = days_to_target.max(1);
    let daily_improvement = (target - current) / f64::from(days_to_target);

    let intervals = days_to_target.div_ceil(MILESTONE_INTERVAL_DAYS);
    let milestones = (1..=intervals)
        .map(|i| {
            let day = i
                .saturating_mul(MILESTONE_INTERVAL_DAYS)
                .min(days_to_target);
            let value = current + daily_improvement * f64::from(day);
            let percent = (f64::from(day) / f64::from(days_to_target) * 100.0).round();
            Milestone {
                day,
                value: (value * 10.0).round() / 10.0,
                percent_complete: (percent as u32).min(100),
            }
        })
        .collect();

    Ok(ImprovementProjection {
        current,
        target,
        days_to_target,
        daily_improvement,
        milestones,
    })
}

/// Whole days from `today` until `target_date`, never less than 1.
pub fn days_until(
    today: jiff::civil::Date,
    target_date: jiff::civil::Date,
) -> Result<u32, BenchmarkError> {
    let days = today.until(target_date)?.get_days();
    Ok(u32::try_from(days).unwrap_or(0).max(1))
}

pub fn project_to_date(
    current: f64,
    target: f64,
    today: jiff::civil::Date,
    target_date: jiff::civil::Date,
) -> Result<ImprovementProjection, BenchmarkError> {
    let days = days_until(today, target_date)?;
    project_improvement(current, target, days)
}
