//! Summary statistics over raw sample values.
//!
//! Non-finite inputs are not filtered: a `-inf` log sample drives the mean
//! to `-inf` and the standard deviation to NaN.

/// Natural logarithm, with `-inf` for non-positive inputs
pub fn log_or_neg_inf(value: f64) -> f64 {
    if value > 0.0 {
        value.ln()
    } else {
        f64::NEG_INFINITY
    }
}

/// Arithmetic mean. `None` for an empty slice.
///
/// Finite inputs whose sum overflows fall back to a running mean.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let plain = values.iter().sum::<f64>() / values.len() as f64;
    if plain.is_finite() || !values.iter().all(|v| v.is_finite()) {
        return Some(plain);
    }

    Some(running_mean(values))
}

fn running_mean(values: &[f64]) -> f64 {
    let mut mean = 0.0;
    for (i, v) in values.iter().enumerate() {
        let k = (i + 1) as f64;
        mean += v / k - mean / k;
    }
    mean
}

/// Sample standard deviation (n - 1 denominator). `None` below two values.
///
/// Finite inputs whose squared deviations overflow are rescaled by the
/// largest magnitude first.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let plain = std_dev_unscaled(values)?;
    if plain.is_finite() || !values.iter().all(|v| v.is_finite()) {
        return Some(plain);
    }

    let scale = values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let scaled: Vec<f64> = values.iter().map(|v| v / scale).collect();

    Some(scale * std_dev_unscaled(&scaled)?)
}

fn std_dev_unscaled(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();

    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_or_neg_inf() {
        assert_eq!(log_or_neg_inf(1.0), 0.0);
        assert!((log_or_neg_inf(std::f64::consts::E) - 1.0).abs() < 1e-12);
        assert_eq!(log_or_neg_inf(0.0), f64::NEG_INFINITY);
        assert_eq!(log_or_neg_inf(-5.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[4.0]), Some(4.0));
        assert_eq!(mean(&[100.0, 200.0]), Some(150.0));
    }

    #[test]
    fn test_sample_std_dev() {
        assert_eq!(sample_std_dev(&[3.0]), None);

        let std = sample_std_dev(&[100.0, 200.0]).unwrap();
        assert!((std - 70.710_678_118_654_76).abs() < 1e-9);

        let std = sample_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((std - 2.138_089_935_299_395).abs() < 1e-12);
    }

    #[test]
    fn test_neg_inf_propagates() {
        assert_eq!(mean(&[f64::NEG_INFINITY]), Some(f64::NEG_INFINITY));
        assert_eq!(mean(&[f64::NEG_INFINITY, 1.0]), Some(f64::NEG_INFINITY));
        assert!(sample_std_dev(&[f64::NEG_INFINITY, 1.0]).unwrap().is_nan());
    }

    #[test]
    fn test_large_values_do_not_overflow() {
        assert_eq!(mean(&[1e308, 1e308]), Some(1e308));
        assert_eq!(mean(&[1.7e308, -1.7e308]), Some(0.0));
        assert_eq!(sample_std_dev(&[1e308, 1e308]), Some(0.0));

        let std = sample_std_dev(&[1e308, -1e308]).unwrap();
        assert!(std.is_finite());
        assert!((std / 1.414_213_562_373_095_1e308 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_overflow_fallback_keeps_sentinel() {
        assert_eq!(mean(&[f64::NEG_INFINITY, 1e308, 1e308]), Some(f64::NEG_INFINITY));
        assert!(sample_std_dev(&[f64::NEG_INFINITY, 1e308]).unwrap().is_nan());
    }
}
