//! Descriptive statistics over a sample of floating point values
//!
//! Every function works on the full sample and rejects an empty one with
//! [`ToolError::EmptySample`]. Variance and standard deviation are
//! population measures (divide by N).

use crate::error::{Result, ToolError};
use crate::input::{strip_digit_separators, Rejection};

/// Parse one input line as a finite number
///
/// `inf` and `NaN` parse as floats but have no place in a sorted sample, so
/// they are rejected like any other bad line. So is anything that overflows
/// to infinity (`1e400`). `_` is accepted between two digits.
pub fn parse_number(text: &str) -> std::result::Result<f64, Rejection> {
    let Some(digits) = strip_digit_separators(text) else {
        return Err(Rejection::new("number"));
    };
    match digits.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Rejection::new("number")),
    }
}

/// A sorted copy of the sample, ascending
pub fn sorted_ascending(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(ToolError::EmptySample);
    }
    let sum: f64 = values.iter().sum();
    Ok(sum / values.len() as f64)
}

/// Middle value, or the average of the two middle values for even counts
pub fn median(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(ToolError::EmptySample);
    }
    let sorted = sorted_ascending(values);
    let middle = sorted.len() / 2;

    if sorted.len() % 2 == 1 {
        Ok(sorted[middle])
    } else {
        Ok((sorted[middle - 1] + sorted[middle]) / 2.0)
    }
}

/// Most frequent value
///
/// `Ok(None)` when nothing repeats. When several values share the highest
/// frequency, the smallest of them wins.
pub fn mode(values: &[f64]) -> Result<Option<f64>> {
    if values.is_empty() {
        return Err(ToolError::EmptySample);
    }
    let sorted = sorted_ascending(values);

    let mut best: Option<(f64, usize)> = None;
    let mut run_start = 0;
    while run_start < sorted.len() {
        let value = sorted[run_start];
        // == rather than total_cmp so -0.0 and 0.0 count together
        let run_len = sorted[run_start..]
            .iter()
            .take_while(|&&other| other == value)
            .count();

        // Ascending scan: only a strictly higher count may replace the best
        if best.map_or(true, |(_, count)| run_len > count) {
            best = Some((value, run_len));
        }
        run_start += run_len;
    }

    // + 0.0 turns a winning -0.0 into 0.0
    Ok(best
        .filter(|&(_, count)| count > 1)
        .map(|(value, _)| value + 0.0))
}

/// Mean of squared deviations from the mean
pub fn population_variance(values: &[f64]) -> Result<f64> {
    let center = mean(values)?;
    let squared_sum: f64 = values
        .iter()
        .map(|value| {
            let delta = value - center;
            delta * delta
        })
        .sum();
    Ok(squared_sum / values.len() as f64)
}

pub fn population_std_dev(values: &[f64]) -> Result<f64> {
    population_variance(values).map(f64::sqrt)
}

/// All statistics of one sample
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: Option<f64>,
    pub variance: f64,
    pub std_dev: f64,
}

impl Summary {
    pub fn from_values(values: &[f64]) -> Result<Self> {
        let variance = population_variance(values)?;
        Ok(Self {
            count: values.len(),
            mean: mean(values)?,
            median: median(values)?,
            mode: mode(values)?,
            variance,
            std_dev: variance.sqrt(),
        })
    }
}
