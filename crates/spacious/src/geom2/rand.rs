//! Random simple polygons (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic sampler for star-shaped, generally non-convex, simple
//!   polygons. Used by tests and benches to exercise area, centroid and
//!   rotation beyond hand-written shapes.
//!
//! Model
//! - `n` equally spaced angles on [0, 2π) with bounded angular jitter, each
//!   with a jittered radius around a center. The angular jitter is clamped
//!   below Δ/2, so the angles stay strictly increasing and the outline stays
//!   simple without sorting.
//! - The outline is then translated so its first vertex sits at the origin and
//!   that vertex is dropped: the result is a caller point list, ready for
//!   `Polygon::new`, whose origin-prefixed vertex list is the sampled outline.

use crate::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Vertex count distribution (counts include the origin vertex).
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(4),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(4);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii are `base_radius * (1 + u)` with `u ∈ [-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Center of the outline before it is anchored at the origin.
    pub center: Point,
    pub random_phase: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.6,
            base_radius: 10.0,
            center: Point::new(20.0, -5.0),
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw caller points for a random simple polygon, counter-clockwise.
pub fn draw_radial(cfg: RadialCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = cfg.base_radius.max(1e-6);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let outline: Vec<Point> = (0..n)
        .map(|k| {
            let th = phase + (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let r = (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj) * r0;
            Point::new(cfg.center.x + r * th.cos(), cfg.center.y + r * th.sin())
        })
        .collect();
    let anchor = outline[0];
    outline[1..]
        .iter()
        .map(|p| Point::from(p - anchor))
        .collect()
}
