// src/math_utils.rs
use statrs::function::erf;
use statrs::statistics::Statistics;
use std::f64::consts::SQRT_2;

/// Two-sided 95% normal quantile used for every confidence interval
pub const Z_95: f64 = 1.96;

pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf::erf(x / SQRT_2))
}

/// Sample mean; NaN for an empty slice
pub fn mean(data: &[f64]) -> f64 {
    data.mean()
}

/// Unbiased sample variance (divisor n-1); NaN for fewer than two points
pub fn sample_variance(data: &[f64]) -> f64 {
    data.variance()
}

/// Unbiased sample covariance (divisor n-1)
pub fn sample_covariance(x: &[f64], y: &[f64]) -> f64 {
    x.covariance(y)
}

/// Pearson correlation coefficient; NaN when either series is constant
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> f64 {
    sample_covariance(x, y) / (sample_variance(x) * sample_variance(y)).sqrt()
}

/// Round to 6 decimal places for display. NaN and infinities pass through.
pub fn round6(x: f64) -> f64 {
    if x.is_finite() {
        (x * 1e6).round() / 1e6
    } else {
        x
    }
}

pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = std::time::Instant::now();
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_secs() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_norm_cdf_reference_points() {
        assert_relative_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
        assert_relative_eq!(norm_cdf(1.96), 0.975002104851780, epsilon = 1e-9);
        assert_relative_eq!(norm_cdf(-1.0), 0.158655253931457, epsilon = 1e-9);
    }

    #[test]
    fn test_sample_statistics() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 4.0, 6.0, 8.0];

        assert_relative_eq!(mean(&x), 2.5, epsilon = 1e-12);
        // sum of squared deviations = 5, divisor 3
        assert_relative_eq!(sample_variance(&x), 5.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(sample_covariance(&x, &y), 10.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(pearson_correlation(&x, &y), 1.0, epsilon = 1e-12);

        let neg: Vec<f64> = y.iter().map(|v| -v).collect();
        assert_relative_eq!(pearson_correlation(&x, &neg), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_samples_are_nan() {
        assert!(mean(&[]).is_nan());
        assert!(sample_variance(&[1.0]).is_nan());
        assert!(pearson_correlation(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).is_nan());
    }

    #[test]
    fn test_round6() {
        assert_eq!(round6(2.477_901_874), 2.477902);
        assert_eq!(round6(-0.000_000_4), -0.0);
        assert!(round6(f64::NAN).is_nan());
        assert_eq!(round6(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_timer_is_monotonic() {
        let mut timer = Timer::new();
        timer.start();
        let first = timer.elapsed_secs();
        let second = timer.elapsed_secs();
        assert!(first >= 0.0);
        assert!(second >= first);
    }
}
