//! Rounding and reductions over optional measurements.

/// Round to `decimals` places, ties to even.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

pub fn round_opt(value: Option<f64>, decimals: i32) -> Option<f64> {
    value.map(|v| round_to(v, decimals))
}

/// Minimum of the present values.
pub fn min_present<I: IntoIterator<Item = Option<f64>>>(values: I) -> Option<f64> {
    values.into_iter().flatten().reduce(f64::min)
}

/// Maximum of the present values.
pub fn max_present<I: IntoIterator<Item = Option<f64>>>(values: I) -> Option<f64> {
    values.into_iter().flatten().reduce(f64::max)
}

/// Arithmetic mean of the present values.
pub fn mean_present<I: IntoIterator<Item = Option<f64>>>(values: I) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_ties_even() {
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(3.5, 0), 4.0);
        assert_eq!(round_to(-1.26, 1), -1.3);
        assert_eq!(round_to(33.333333, 2), 33.33);
    }

    #[test]
    fn test_present_reductions() {
        let values = [Some(1.5), None, Some(-2.0), Some(4.0)];
        assert_eq!(min_present(values), Some(-2.0));
        assert_eq!(max_present(values), Some(4.0));
        assert_eq!(mean_present(values), Some(3.5 / 3.0));
        assert_eq!(mean_present([None, None]), None);
    }
}
