//! Normally distributed synthetic samples.

use std::f64::consts::TAU;

use rand::Rng;

/// Draws one value from Normal(`mean`, `std_dev`) with the Box–Muller transform.
pub fn gaussian<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    let u = nonzero_unit(rng);
    let v = nonzero_unit(rng);
    let z = (-2.0 * u.ln()).sqrt() * (TAU * v).cos();
    mean + std_dev * z
}

/// Uniform draw from `(0, 1)`.
fn nonzero_unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    loop {
        let x = rng.random::<f64>();
        if x > 0.0 {
            return x;
        }
    }
}

/// `count` independent draws from Normal(`mean`, `std_dev`) using the
/// thread-local generator. Results differ on every call.
///
/// ```
/// use statmaster_data::generator::generate_gaussian_sample;
///
/// let sample = generate_gaussian_sample(50.0, 10.0, 200);
/// assert_eq!(sample.len(), 200);
/// assert!(sample.iter().all(|v| v.is_finite()));
/// ```
#[must_use]
pub fn generate_gaussian_sample(mean: f64, std_dev: f64, count: usize) -> Vec<f64> {
    generate_gaussian_sample_with(&mut rand::rng(), mean, std_dev, count)
}

/// Like [`generate_gaussian_sample`], drawing from `rng`.
pub fn generate_gaussian_sample_with<R: Rng + ?Sized>(
    rng: &mut R,
    mean: f64,
    std_dev: f64,
    count: usize,
) -> Vec<f64> {
    tracing::debug!(mean, std_dev, count, "generating gaussian sample");
    (0..count).map(|_| gaussian(rng, mean, std_dev)).collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;
    use statmaster_stats::descriptive::DescriptiveStats;

    use super::*;

    #[test]
    fn test_seeded_runs_repeat() {
        let a = generate_gaussian_sample_with(&mut Pcg32::seed_from_u64(7), 0.0, 1.0, 20);
        let b = generate_gaussian_sample_with(&mut Pcg32::seed_from_u64(7), 0.0, 1.0, 20);
        assert_eq!(a, b);
    }

    #[test]
    fn test_moments_approach_parameters() {
        let mut rng = Pcg32::seed_from_u64(2024);
        let sample = generate_gaussian_sample_with(&mut rng, 50.0, 10.0, 20_000);
        let stats = DescriptiveStats::from_raw(&sample, None).unwrap();
        assert!((stats.mean.value - 50.0).abs() < 0.5, "mean {}", stats.mean.value);
        assert!(
            (stats.std_dev.value - 10.0).abs() < 0.5,
            "std dev {}",
            stats.std_dev.value
        );
    }

    #[test]
    fn test_zero_std_dev_is_constant() {
        let mut rng = Pcg32::seed_from_u64(1);
        let sample = generate_gaussian_sample_with(&mut rng, 3.0, 0.0, 5);
        assert_eq!(sample, vec![3.0; 5]);
    }

    #[test]
    fn test_empty() {
        assert!(generate_gaussian_sample(0.0, 1.0, 0).is_empty());
    }
}
