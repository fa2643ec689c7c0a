use crate::grid::error::GridError;
use crate::grid::mask::PointFilter;
use crate::types::coordinate::{BoundingRegion, Coordinate};
use log::debug;

/// Kilometers per degree of latitude (and of longitude at the equator).
pub const KM_PER_DEGREE: f64 = 111.32;

pub fn km_to_deg_lat(km: f64) -> f64 {
    km / KM_PER_DEGREE
}

/// Longitude degrees spanning `km` at `latitude`. Fails near the poles where
/// the meridians converge and the step would blow up.
pub fn km_to_deg_lon(km: f64, latitude: f64) -> Result<f64, GridError> {
    let convergence = latitude.to_radians().cos();
    if convergence <= f64::EPSILON {
        return Err(GridError::PolarLatitude(latitude));
    }
    Ok(km / (KM_PER_DEGREE * convergence))
}

/// Most steps allowed along one axis, leaving room for the extra index.
const MAX_STEPS: u32 = u32::MAX - 2;

/// Number of whole `step`s that fit in `span`.
fn step_count(span: f64, step: f64, spacing_km: f64) -> Result<u32, GridError> {
    let steps = (span / step).floor();
    if steps > f64::from(MAX_STEPS) {
        return Err(GridError::SpacingTooSmall {
            spacing_km,
            limit: MAX_STEPS,
        });
    }
    Ok(steps as u32)
}

fn validate(region: &BoundingRegion, spacing_km: f64) -> Result<(), GridError> {
    if !(spacing_km.is_finite() && spacing_km > 0.0) {
        return Err(GridError::InvalidSpacing(spacing_km));
    }
    for latitude in [region.north, region.south] {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GridError::LatitudeOutOfRange(latitude));
        }
    }
    for longitude in [region.east, region.west] {
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GridError::LongitudeOutOfRange(longitude));
        }
    }
    if region.north <= region.south {
        return Err(GridError::InvertedLatitudes {
            north: region.north,
            south: region.south,
        });
    }
    if region.east <= region.west {
        return Err(GridError::InvertedLongitudes {
            east: region.east,
            west: region.west,
        });
    }
    Ok(())
}

/// Lays a grid of roughly `spacing_km` over `region` and keeps the points
/// accepted by `filter`.
///
/// Rows run south to north and each row runs west to east, both edges
/// inclusive. The longitude step is widened with latitude so neighbouring
/// points stay about `spacing_km` apart on the ground. Points are computed
/// from their row/column index, so the output is identical for identical
/// inputs.
///
/// # Errors
///
/// Returns a [`GridError`] if the region is inverted or out of range, if the
/// spacing is not a positive finite number or so small that an axis would
/// need more steps than can be counted, or if a row falls so close to a pole
/// that the longitude step is undefined.
///
/// # Examples
///
/// ```
/// use ocean_wind::grid::{generate, AllPoints};
/// use ocean_wind::BoundingRegion;
///
/// let region = BoundingRegion::new(36.0, 35.0, -74.0, -75.0);
/// let points = generate(&region, 50.0, &AllPoints)?;
/// assert!(points.iter().all(|p| region.contains(*p)));
/// # Ok::<(), ocean_wind::grid::GridError>(())
/// ```
pub fn generate<F>(
    region: &BoundingRegion,
    spacing_km: f64,
    filter: &F,
) -> Result<Vec<Coordinate>, GridError>
where
    F: PointFilter + ?Sized,
{
    validate(region, spacing_km)?;

    let lat_step = km_to_deg_lat(spacing_km);
    let rows = step_count(region.north - region.south, lat_step, spacing_km)?;
    let mut points = Vec::new();
    let mut candidates = 0usize;

    // One extra index absorbs rounding in the count; the bound check decides.
    for row in 0..=rows + 1 {
        let latitude = region.south + f64::from(row) * lat_step;
        if latitude > region.north {
            break;
        }
        let lon_step = km_to_deg_lon(spacing_km, latitude)?;
        let columns = step_count(region.east - region.west, lon_step, spacing_km)?;

        for column in 0..=columns + 1 {
            let longitude = region.west + f64::from(column) * lon_step;
            if longitude > region.east {
                break;
            }
            candidates += 1;
            let coordinate = Coordinate::new(latitude, longitude);
            if filter.includes(coordinate) {
                points.push(coordinate);
            }
        }
    }

    debug!(
        "Generated {} grid points ({} before filtering) at {} km spacing",
        points.len(),
        candidates,
        spacing_km
    );
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::mask::{AllPoints, CoastlineMask};

    #[test]
    fn test_points_stay_inside_region() -> Result<(), GridError> {
        let region = BoundingRegion::EAST_COAST;
        let points = generate(&region, 25.0, &AllPoints)?;

        assert!(!points.is_empty());
        for point in &points {
            assert!(region.contains(*point), "{point} escaped {region:?}");
        }
        Ok(())
    }

    #[test]
    fn test_deterministic_and_unique() -> Result<(), GridError> {
        let region = BoundingRegion::EAST_COAST;
        let first = generate(&region, 40.0, &CoastlineMask::default())?;
        let second = generate(&region, 40.0, &CoastlineMask::default())?;
        assert_eq!(first, second);

        let mut keys: Vec<(u64, u64)> = first
            .iter()
            .map(|p| (p.latitude.to_bits(), p.longitude.to_bits()))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), first.len(), "duplicate grid points");
        Ok(())
    }

    #[test]
    fn test_rows_south_to_north_and_west_to_east() -> Result<(), GridError> {
        let region = BoundingRegion::new(36.0, 35.0, -74.0, -75.0);
        let points = generate(&region, 20.0, &AllPoints)?;

        assert_eq!(points[0], Coordinate::new(35.0, -75.0));
        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a.latitude == b.latitude {
                assert!(b.longitude > a.longitude);
            } else {
                assert!(b.latitude > a.latitude);
            }
        }
        Ok(())
    }

    #[test]
    fn test_longitude_step_widens_with_latitude() -> Result<(), GridError> {
        let equator = km_to_deg_lon(10.0, 0.0)?;
        let north = km_to_deg_lon(10.0, 60.0)?;
        assert!((equator - km_to_deg_lat(10.0)).abs() < 1e-12);
        assert!((north - 2.0 * equator).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_large_spacing_yields_single_point() -> Result<(), GridError> {
        let region = BoundingRegion::new(35.5, 35.0, -74.5, -75.0);
        let points = generate(&region, 200.0, &AllPoints)?;
        assert_eq!(points, vec![Coordinate::new(35.0, -75.0)]);
        Ok(())
    }

    #[test]
    fn test_filter_applied() -> Result<(), GridError> {
        let region = BoundingRegion::new(36.0, 35.0, -74.0, -75.0);
        let all = generate(&region, 10.0, &AllPoints)?;
        let west_half = generate(&region, 10.0, &|c: Coordinate| c.longitude < -74.5)?;

        assert!(west_half.len() < all.len());
        assert!(west_half.iter().all(|c| c.longitude < -74.5));
        Ok(())
    }

    #[test]
    fn test_rejects_bad_configuration() {
        let inverted = BoundingRegion::new(30.0, 35.0, -70.0, -75.0);
        assert_eq!(
            generate(&inverted, 10.0, &AllPoints),
            Err(GridError::InvertedLatitudes {
                north: 30.0,
                south: 35.0
            })
        );

        let flat = BoundingRegion::new(35.0, 35.0, -70.0, -75.0);
        assert!(matches!(
            generate(&flat, 10.0, &AllPoints),
            Err(GridError::InvertedLatitudes { .. })
        ));

        let backwards = BoundingRegion::new(36.0, 35.0, -75.0, -70.0);
        assert!(matches!(
            generate(&backwards, 10.0, &AllPoints),
            Err(GridError::InvertedLongitudes { .. })
        ));

        let region = BoundingRegion::new(36.0, 35.0, -74.0, -75.0);
        for spacing in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                generate(&region, spacing, &AllPoints),
                Err(GridError::InvalidSpacing(_))
            ));
        }

        let off_globe = BoundingRegion::new(95.0, 80.0, 10.0, 0.0);
        assert_eq!(
            generate(&off_globe, 10.0, &AllPoints),
            Err(GridError::LatitudeOutOfRange(95.0))
        );
    }

    #[test]
    fn test_tiny_spacing_rejected_up_front() {
        // About 2.3e10 rows over the East Coast box.
        assert_eq!(
            generate(&BoundingRegion::EAST_COAST, 1e-7, &AllPoints),
            Err(GridError::SpacingTooSmall {
                spacing_km: 1e-7,
                limit: MAX_STEPS,
            })
        );

        // Few rows but too many columns in a wide, thin strip.
        let strip = BoundingRegion::new(0.0001, 0.0, 180.0, -180.0);
        assert!(matches!(
            generate(&strip, 1e-6, &AllPoints),
            Err(GridError::SpacingTooSmall { .. })
        ));
    }

    #[test]
    fn test_polar_row_fails_fast() {
        let polar = BoundingRegion::new(90.0, 89.0, 10.0, 0.0);
        // 111.32 km spacing puts the second row exactly on the pole.
        assert_eq!(
            generate(&polar, KM_PER_DEGREE, &AllPoints),
            Err(GridError::PolarLatitude(90.0))
        );
    }
}
