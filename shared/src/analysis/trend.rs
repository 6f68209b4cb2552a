//! Half-split trend estimation

use crate::models::Trend;

/// Share of the observed range the half-to-half shift must reach
const TREND_SENSITIVITY: f64 = 0.1;

/// Classify a series by comparing the mean of its second half with its first.
///
/// With an odd length the extra element goes to the second half. The shift
/// counts as a trend once it reaches 10% of the whole series' range.
pub fn compute_trend(values: &[f64]) -> Trend {
    if values.len() < 2 {
        return Trend::Stable;
    }

    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    // Half means of a flat series can differ by rounding error alone
    if max == min {
        return Trend::Stable;
    }

    let (first_half, second_half) = values.split_at(values.len() / 2);
    let difference = mean(second_half) - mean(first_half);
    let threshold = (max - min) * TREND_SENSITIVITY;

    if difference.abs() < threshold {
        Trend::Stable
    } else if difference > 0.0 {
        Trend::Increasing
    } else {
        Trend::Decreasing
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
