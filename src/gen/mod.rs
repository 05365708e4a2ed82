//! Uniform random synthesis of point datasets and circular queries.
//!
//! Everything here is deliberately simple: the generators exist only to
//! feed the oracle and the engine under test with workloads in the
//! declared file formats.

use crate::config::GeneratorConfig;
use crate::geom::{Circle, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// RNG for a generator run: seeded when the config asks for
/// reproducibility, OS entropy otherwise.
pub fn make_rng(config: &GeneratorConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Generate `n` points with integer coordinates uniform over the
/// configured ranges. IDs are assigned `1..=n` in generation order.
pub fn generate_points(n: usize, config: &GeneratorConfig, rng: &mut impl Rng) -> Vec<Point> {
    let (x_lo, x_hi) = config.x_range;
    let (y_lo, y_hi) = config.y_range;
    (1..=n as u64)
        .map(|id| Point {
            id,
            x: rng.random_range(x_lo..=x_hi),
            y: rng.random_range(y_lo..=y_hi),
        })
        .collect()
}

/// Generate `n` circles with integer centers over the coordinate ranges
/// and integer radii over the radius range.
pub fn generate_circles(n: usize, config: &GeneratorConfig, rng: &mut impl Rng) -> Vec<Circle> {
    let (x_lo, x_hi) = config.x_range;
    let (y_lo, y_hi) = config.y_range;
    let (r_lo, r_hi) = config.radius_range;
    (0..n)
        .map(|_| {
            Circle::new(
                rng.random_range(x_lo..=x_hi) as f64,
                rng.random_range(y_lo..=y_hi) as f64,
                rng.random_range(r_lo..=r_hi) as f64,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;

    fn seeded_config() -> GeneratorConfig {
        GeneratorConfig {
            seed: Some(42),
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn test_points_respect_ranges_and_ids() {
        let config = GeneratorConfig {
            x_range: (-10, 10),
            y_range: (0, 5),
            ..seeded_config()
        };
        let mut rng = make_rng(&config);
        let points = generate_points(500, &config, &mut rng);

        assert_eq!(points.len(), 500);
        for (i, p) in points.iter().enumerate() {
            assert_eq!(p.id, i as u64 + 1);
            assert!((-10..=10).contains(&p.x));
            assert!((0..=5).contains(&p.y));
        }
    }

    #[test]
    fn test_circles_respect_ranges() {
        let config = seeded_config();
        let mut rng = make_rng(&config);
        let circles = generate_circles(200, &config, &mut rng);

        assert_eq!(circles.len(), 200);
        for c in &circles {
            assert!((-100.0..=100.0).contains(&c.cx));
            assert!((-100.0..=100.0).contains(&c.cy));
            assert!((10.0..=50.0).contains(&c.radius));
            assert_eq!(c.radius.fract(), 0.0);
        }
    }

    #[test]
    fn test_seeded_runs_are_deterministic() {
        let config = seeded_config();
        let a = generate_points(50, &config, &mut make_rng(&config));
        let b = generate_points(50, &config, &mut make_rng(&config));
        assert_eq!(a, b);
    }
}
