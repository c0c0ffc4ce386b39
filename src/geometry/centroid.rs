use crate::domain::Vertex;

use super::Bounds;

/// Vertex centroid of a polygon: the mean latitude and mean longitude.
///
/// This is not the area-weighted centroid. For concave outlines the result
/// may fall outside the polygon, which is acceptable for marker placement.
///
/// # Returns
/// * `Some(vertex)` inside the per-axis bounding box of `vertices`
/// * `None` if `vertices` is empty
pub fn centroid(vertices: &[Vertex]) -> Option<Vertex> {
    let bounds = Bounds::from_vertices(vertices)?;
    let count = vertices.len() as f64;

    let (lat_sum, lon_sum) = vertices
        .iter()
        .fold((0.0, 0.0), |(lat, lon), v| (lat + v.latitude, lon + v.longitude));

    // Summation rounding can land one ulp past the extremes; NaN is left as is
    Some(bounds.clamp(Vertex::new(lat_sum / count, lon_sum / count)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertices(points: &[(f64, f64)]) -> Vec<Vertex> {
        points.iter().copied().map(Vertex::from).collect()
    }

    #[test]
    fn test_centroid_single_vertex() {
        assert_eq!(centroid(&vertices(&[(0.0, 0.0)])), Some(Vertex::new(0.0, 0.0)));
    }

    #[test]
    fn test_centroid_two_vertices() {
        assert_eq!(
            centroid(&vertices(&[(0.0, 0.0), (0.0, 2.0)])),
            Some(Vertex::new(0.0, 1.0))
        );
    }

    #[test]
    fn test_centroid_square() {
        let square = vertices(&[(-10.0, -10.0), (10.0, -10.0), (10.0, 10.0), (-10.0, 10.0)]);
        assert_eq!(centroid(&square), Some(Vertex::new(0.0, 0.0)));
    }

    #[test]
    fn test_centroid_empty_is_none() {
        assert_eq!(centroid(&[]), None);
    }

    #[test]
    fn test_centroid_repeated_value_stays_in_bounds() {
        // 0.1 * 3 / 3 overshoots 0.1 without the clamp
        let points = vertices(&[(0.1, 0.1), (0.1, 0.1), (0.1, 0.1)]);
        assert_eq!(centroid(&points), Some(Vertex::new(0.1, 0.1)));
    }

    #[test]
    fn test_centroid_within_bounding_box() {
        // Deterministic spread of irregular inputs, including a concave outline
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        for len in 1..40 {
            let points: Vec<Vertex> = (0..len)
                .map(|_| {
                    seed ^= seed << 13;
                    seed ^= seed >> 7;
                    seed ^= seed << 17;
                    let lat = (seed % 18_000) as f64 / 100.0 - 90.0;
                    let lon = ((seed >> 20) % 36_000) as f64 / 100.0 - 180.0;
                    Vertex::new(lat, lon)
                })
                .collect();

            let bounds = Bounds::from_vertices(&points).unwrap();
            let c = centroid(&points).unwrap();
            assert!(bounds.contains(&c), "{c:?} outside {bounds:?}");
        }
    }

    #[test]
    fn test_centroid_nan_vertex_does_not_panic() {
        let c = centroid(&vertices(&[(f64::NAN, 0.0)])).unwrap();
        assert!(c.latitude.is_nan());
        assert_eq!(c.longitude, 0.0);

        let c = centroid(&vertices(&[(1.0, 2.0), (f64::NAN, 4.0)])).unwrap();
        assert!(c.latitude.is_nan());
        assert_eq!(c.longitude, 3.0);
    }

    #[test]
    fn test_centroid_preserves_sign() {
        let c = centroid(&vertices(&[(-30.0, -60.0), (-10.0, -20.0)])).unwrap();
        assert_eq!(c, Vertex::new(-20.0, -40.0));
    }
}
