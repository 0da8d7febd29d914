// ============================================================================
// GEO - Parseo de puntos WKT
// ============================================================================

use serde::Serialize;

/// Coordenada WGS84.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Parsea `POINT(lon lat)`. Total: una entrada ausente, malformada o
/// fuera de rango da `None`.
///
/// Acepta prefijo SRID opcional (`SRID=4326;POINT(..)`), la palabra clave
/// en cualquier caso y espacios libres alrededor de los números.
pub fn parse_wkt_point(wkt: Option<&str>) -> Option<GeoPoint> {
    let text = wkt?.trim();
    let text = match text.split_once(';') {
        Some((srid, rest)) if srid.trim().to_ascii_uppercase().starts_with("SRID=") => rest.trim(),
        _ => text,
    };

    let keyword = text.get(..5)?;
    if !keyword.eq_ignore_ascii_case("POINT") {
        return None;
    }
    let body = text[5..].trim_start();
    let inner = body.strip_prefix('(')?.strip_suffix(')')?;

    let mut parts = inner.split_whitespace();
    let longitude: f64 = parts.next()?.parse().ok()?;
    let latitude: f64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    if !latitude.is_finite() || !longitude.is_finite() {
        return None;
    }
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return None;
    }

    Some(GeoPoint::new(latitude, longitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lon_lat_order() {
        let point = parse_wkt_point(Some("POINT(37.61 55.75)")).unwrap();
        assert_eq!(point, GeoPoint::new(55.75, 37.61));
    }

    #[test]
    fn absent_input_is_no_point() {
        assert_eq!(parse_wkt_point(None), None);
        assert_eq!(parse_wkt_point(Some("")), None);
    }

    #[test]
    fn non_matching_strings_are_no_point() {
        for input in [
            "LINESTRING(1 2, 3 4)",
            "POINT(37.61)",
            "POINT(abc 55.75)",
            "POINT 37.61 55.75",
            "POINT(1 2 3)",
            "POINT(200 10)",
            "POINT(NaN 1)",
        ] {
            assert_eq!(parse_wkt_point(Some(input)), None, "{input}");
        }
    }

    #[test]
    fn tolerates_srid_case_and_spacing() {
        let point = parse_wkt_point(Some("SRID=4326;point ( -3.7  40.4 )")).unwrap();
        assert_eq!(point, GeoPoint::new(40.4, -3.7));
    }
}
