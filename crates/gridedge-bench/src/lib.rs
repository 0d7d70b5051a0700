//! Benchmark profiles for gridedge.
//!
//! - [`reference_grid`]: 100x100 raster (10K cells, 80K records)
//! - [`stress_grid`]: 1000x1000 raster (1M cells, 8M records)
//! - [`terrain`]: deterministic pseudo-random raster of any shape

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridedge_core::Grid;

/// 100x100 terrain raster.
pub fn reference_grid() -> Grid {
    terrain(100, 100, 42)
}

/// 1000x1000 terrain raster.
pub fn stress_grid() -> Grid {
    terrain(1000, 1000, 42)
}

/// Deterministic pseudo-random raster with values in `[0, 1000)`.
///
/// # Panics
///
/// Panics if either dimension is zero.
pub fn terrain(rows: usize, cols: usize, seed: u64) -> Grid {
    let values = (0..(rows * cols) as u64)
        .map(|i| {
            let h = (i ^ seed)
                .wrapping_mul(6364136223846793007)
                .wrapping_add(1442695040888963407);
            (h >> 33) as f64 % 1000.0
        })
        .collect();
    Grid::new(rows, cols, values).expect("terrain dimensions must be non-zero")
}
