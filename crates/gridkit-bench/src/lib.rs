//! Benchmark profiles and utilities for the gridkit primitives.
//!
//! - [`reference_config`]: the default 30x30 domain
//! - [`stress_config`]: 316x316 (~100K cells) for stress testing
//! - [`random_walk`]: deterministic in-bounds agent walk via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridkit_space::{Coord, Dir, GridConfig};

/// The default 30x30 domain.
pub fn reference_config() -> GridConfig {
    GridConfig::default()
}

/// A 316x316 domain (~100K cells).
pub fn stress_config() -> GridConfig {
    GridConfig::new(316, 316)
}

/// Generate a deterministic walk of `steps` moves starting at the centre
/// of `config`.
///
/// Each move picks a direction from a simple hash of the seed and step
/// index; moves that would leave the domain are replaced by their
/// inverse. Returns every visited coordinate, starting position included,
/// so consecutive entries are always adjacent.
pub fn random_walk(config: &GridConfig, steps: usize, seed: u64) -> Vec<Coord> {
    let mut path = Vec::with_capacity(steps + 1);
    let mut here = Coord::new((config.width / 2) as i32, (config.height / 2) as i32);
    path.push(here);

    for i in 0..steps as u64 {
        let hash = seed
            .wrapping_add(i)
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let mut dir = Dir::ALL[(hash >> 62) as usize];
        if !config.contains(here + dir) {
            dir = -dir;
        }
        let next = here + dir;
        if !config.contains(next) {
            // 1-wide axis: neither way along it stays inside.
            continue;
        }
        here = next;
        path.push(here);
    }
    path
}
