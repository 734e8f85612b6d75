//! Test data generators for synthetic influence-function fields.
//!
//! These generators create predictable, verifiable value patterns that can
//! be used across the test suite. Grids are row-major with latitude as the
//! outer axis.

/// Evenly spaced coordinate values: `start, start + step, ...`.
///
/// # Example
///
/// ```
/// use test_utils::regular_axis;
///
/// assert_eq!(regular_axis(0.0, 10.0, 3), vec![0.0, 10.0, 20.0]);
/// ```
pub fn regular_axis(start: f64, step: f64, count: usize) -> Vec<f64> {
    (0..count).map(|i| start + step * i as f64).collect()
}

/// Creates a field with predictable values.
///
/// Each cell value is calculated as: `lat_index * 1000 + lon_index`
///
/// This makes it easy to verify that a sampled or exported value came from
/// the expected cell.
///
/// # Example
///
/// ```
/// use test_utils::create_indexed_grid;
///
/// let grid = create_indexed_grid(2, 3);
/// assert_eq!(grid.len(), 6);
/// assert_eq!(grid[1], 1.0);    // lat=0, lon=1
/// assert_eq!(grid[3], 1000.0); // lat=1, lon=0
/// ```
pub fn create_indexed_grid(nlat: usize, nlon: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(nlat * nlon);
    for lat in 0..nlat {
        for lon in 0..nlon {
            data.push((lat * 1000 + lon) as f64);
        }
    }
    data
}

/// Creates a plume-like field peaking at one cell.
///
/// Values decay with grid distance from `(peak_lat, peak_lon)`:
/// `1 / (1 + d²)`, so the peak cell is exactly 1.0.
pub fn create_plume_grid(nlat: usize, nlon: usize, peak_lat: usize, peak_lon: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(nlat * nlon);
    for lat in 0..nlat {
        for lon in 0..nlon {
            let dy = lat as f64 - peak_lat as f64;
            let dx = lon as f64 - peak_lon as f64;
            data.push(1.0 / (1.0 + dx * dx + dy * dy));
        }
    }
    data
}

/// Creates a field with the same value everywhere.
pub fn create_constant_grid(nlat: usize, nlon: usize, value: f64) -> Vec<f64> {
    vec![value; nlat * nlon]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_axis() {
        assert_eq!(regular_axis(-10.0, 5.0, 5), vec![-10.0, -5.0, 0.0, 5.0, 10.0]);
        assert!(regular_axis(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_create_indexed_grid() {
        let grid = create_indexed_grid(3, 4);
        assert_eq!(grid.len(), 12);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[5], 1001.0); // lat=1, lon=1
        assert_eq!(grid[11], 2003.0);
    }

    #[test]
    fn test_create_plume_grid() {
        let grid = create_plume_grid(5, 5, 2, 3);
        assert_eq!(grid[2 * 5 + 3], 1.0);
        for val in &grid {
            assert!(*val > 0.0 && *val <= 1.0, "Plume value out of range: {}", val);
        }
    }

    #[test]
    fn test_create_constant_grid() {
        let grid = create_constant_grid(2, 2, 3.5);
        assert_eq!(grid, vec![3.5; 4]);
    }
}
