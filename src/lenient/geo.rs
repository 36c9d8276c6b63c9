use serde::Serialize;

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Returns `None` for non-finite or out-of-range coordinates.
    pub fn new(lat: f64, lon: f64) -> Option<Self> {
        let valid = lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon);
        valid.then_some(Self { lat, lon })
    }
}

/// A bounding box given by its lower-left and upper-right corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoBox {
    pub lower: GeoPoint,
    pub upper: GeoPoint,
}

/// Parses a GeoRSS `point`: exactly two whitespace-separated numbers.
///
/// # Examples
///
/// ```
/// use podfeed::lenient::parse_point;
///
/// let point = parse_point("45.256 -71.92").unwrap();
/// assert_eq!((point.lat, point.lon), (45.256, -71.92));
/// assert!(parse_point("45.256").is_none());
/// ```
pub fn parse_point(raw: &str) -> Option<GeoPoint> {
    match coordinates(raw)?.as_slice() {
        [lat, lon] => GeoPoint::new(*lat, *lon),
        _ => None,
    }
}

/// Parses a GeoRSS `box`: exactly four numbers, lower corner first.
pub fn parse_box(raw: &str) -> Option<GeoBox> {
    match coordinates(raw)?.as_slice() {
        [lower_lat, lower_lon, upper_lat, upper_lon] => Some(GeoBox {
            lower: GeoPoint::new(*lower_lat, *lower_lon)?,
            upper: GeoPoint::new(*upper_lat, *upper_lon)?,
        }),
        _ => None,
    }
}

/// All-or-nothing: a single non-numeric token rejects the whole value.
fn coordinates(raw: &str) -> Option<Vec<f64>> {
    raw.split_whitespace()
        .map(|token| token.parse::<f64>().ok())
        .collect()
}
