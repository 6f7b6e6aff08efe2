use healthiq_core::models::benchmark::{Direction, Trend};

/// Minimum number of points needed before a trend is called.
pub const MIN_TREND_POINTS: usize = 3;

/// Compare the mean of the last two points with the mean of the first two.
/// Fewer than [`MIN_TREND_POINTS`] points is `Steady`.
pub fn classify_trend(values: &[f64], direction: Direction) -> Trend {
    if values.len() < MIN_TREND_POINTS {
        return Trend::Steady;
    }

    let n = values.len();
    let recent = (values[n - 1] + values[n - 2]) / 2.0;
    let earlier = (values[0] + values[1]) / 2.0;

    let (better, worse) = match direction {
        Direction::HigherIsBetter => (recent > earlier, recent < earlier),
        Direction::LowerIsBetter => (recent < earlier, recent > earlier),
    };

    if better {
        Trend::Improving
    } else if worse {
        Trend::Declining
    } else {
        Trend::Steady
    }
}
