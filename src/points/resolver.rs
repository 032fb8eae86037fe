//! Location query resolution
//!
//! The app only needs "text in, coordinate or nothing out". The built-in
//! [`GazetteerResolver`] answers from a fixed table of major cities and also
//! accepts literal `"lat, lng"` pairs.

use bevy::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

pub trait LocationResolver: Send + Sync {
    /// `None` means "no point to add"; callers do not retry.
    fn resolve(&self, query: &str) -> Option<ResolvedLocation>;
}

/// Active resolver used by the point systems
#[derive(Resource)]
pub struct Resolver(pub Box<dyn LocationResolver>);

impl Default for Resolver {
    fn default() -> Self {
        Self(Box::new(GazetteerResolver::default()))
    }
}

impl Resolver {
    pub fn resolve(&self, query: &str) -> Option<ResolvedLocation> {
        self.0.resolve(query)
    }
}

pub struct GazetteerResolver {
    entries: Vec<(String, f64, f64)>,
}

impl Default for GazetteerResolver {
    fn default() -> Self {
        Self::new(major_cities_data())
    }
}

impl GazetteerResolver {
    pub fn new(entries: Vec<(String, f64, f64)>) -> Self {
        Self { entries }
    }
}

impl LocationResolver for GazetteerResolver {
    fn resolve(&self, query: &str) -> Option<ResolvedLocation> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        if let Some((latitude, longitude)) = parse_lat_lng(query) {
            return Some(ResolvedLocation {
                name: format!("{latitude:.4}, {longitude:.4}"),
                latitude,
                longitude,
            });
        }
        self.entries
            .iter()
            .find(|(name, _, _)| name.eq_ignore_ascii_case(query))
            .map(|(name, latitude, longitude)| ResolvedLocation {
                name: name.clone(),
                latitude: *latitude,
                longitude: *longitude,
            })
    }
}

// "lat, lng" or "lat lng"; out-of-range values are left to the store to reject
fn parse_lat_lng(query: &str) -> Option<(f64, f64)> {
    let mut parts = query
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty());
    let latitude = parts.next()?.parse::<f64>().ok()?;
    let longitude = parts.next()?.parse::<f64>().ok()?;
    if parts.next().is_some() || !latitude.is_finite() || !longitude.is_finite() {
        return None;
    }
    Some((latitude, longitude))
}

pub fn major_cities_data() -> Vec<(String, f64, f64)> {
    vec![
        (String::from("Tokyo"), 35.6762, 139.6503),
        (String::from("Delhi"), 28.6139, 77.2090),
        (String::from("Shanghai"), 31.2304, 121.4737),
        (String::from("São Paulo"), -23.5505, -46.6333),
        (String::from("Mexico City"), 19.4326, -99.1332),
        (String::from("Cairo"), 30.0444, 31.2357),
        (String::from("Mumbai"), 19.0760, 72.8777),
        (String::from("Beijing"), 39.9042, 116.4074),
        (String::from("Dhaka"), 23.8103, 90.4125),
        (String::from("Osaka"), 34.6937, 135.5023),
        (String::from("New York"), 40.7128, -74.0060),
        (String::from("Karachi"), 24.8607, 67.0011),
        (String::from("Buenos Aires"), -34.6037, -58.3816),
        (String::from("Istanbul"), 41.0082, 28.9784),
        (String::from("Lagos"), 6.5244, 3.3792),
        (String::from("London"), 51.5074, -0.1278),
        (String::from("Los Angeles"), 34.0522, -118.2437),
        (String::from("Manila"), 14.5995, 120.9842),
        (String::from("Rio de Janeiro"), -22.9068, -43.1729),
        (String::from("Kinshasa"), -4.4419, 15.2663),
        (String::from("Paris"), 48.8566, 2.3522),
        (String::from("Jakarta"), -6.2088, 106.8456),
        (String::from("Moscow"), 55.7558, 37.6173),
        (String::from("Lima"), -12.0464, -77.0428),
        (String::from("Bangkok"), 13.7563, 100.5018),
        (String::from("Seoul"), 37.5665, 126.978),
        (String::from("Singapore"), 1.3521, 103.8198),
        (String::from("Toronto"), 43.6532, -79.3832),
        (String::from("Sydney"), -33.8688, 151.2093),
        (String::from("Johannesburg"), -26.2041, 28.0473),
        (String::from("Chicago"), 41.8781, -87.6298),
        (String::from("Reykjavik"), 64.1466, -21.9426),
        (String::from("Anchorage"), 61.2181, -149.9003),
        (String::from("Auckland"), -36.8485, 174.7633),
        (String::from("Honolulu"), 21.3069, -157.8583),
        (String::from("Nairobi"), -1.2921, 36.8219),
    ]
}
