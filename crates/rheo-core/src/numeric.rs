/// Floating point type used throughout the workspace.
///
/// Shear rates are in 1/s and stresses in Pa; both are plain `f64` values
/// with no unit wrapper.
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Geometrically spaced shear-rate grid from `lo` to `hi` (inclusive).
///
/// Flow curves are conventionally sampled per decade of shear rate, so a
/// log-spaced grid is the natural input for `stress_profile`. Returns an
/// empty vec when `n == 0`; both endpoints must be positive for the spacing
/// to be meaningful (a non-positive endpoint yields NaNs per float
/// semantics, not an error).
pub fn geomspace(lo: Real, hi: Real, n: usize) -> Vec<Real> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![lo];
    }
    let log_lo = lo.ln();
    let log_hi = hi.ln();
    let step = (log_hi - log_lo) / (n - 1) as Real;
    (0..n).map(|i| (log_lo + step * i as Real).exp()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn geomspace_endpoints_and_length() {
        let grid = geomspace(0.01, 100.0, 5);
        assert_eq!(grid.len(), 5);
        let tol = Tolerances::default();
        assert!(nearly_equal(grid[0], 0.01, tol));
        assert!(nearly_equal(grid[4], 100.0, tol));
        // midpoint of four decades is 1.0
        assert!(nearly_equal(grid[2], 1.0, tol));
    }

    #[test]
    fn geomspace_degenerate_sizes() {
        assert!(geomspace(1.0, 10.0, 0).is_empty());
        assert_eq!(geomspace(3.0, 10.0, 1), vec![3.0]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn geomspace_is_monotonic(lo in 1e-3_f64..1.0, span in 1.1_f64..1e4, n in 2_usize..50) {
            let hi = lo * span;
            let grid = geomspace(lo, hi, n);
            prop_assert_eq!(grid.len(), n);
            for pair in grid.windows(2) {
                prop_assert!(pair[1] > pair[0]);
            }
        }
    }
}
