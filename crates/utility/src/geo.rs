pub const EARTH_RADIUS_KM: f64 = 6371.0;

fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

/// An axis aligned latitude/longitude rectangle, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub min_longitude: f64,
    pub max_latitude: f64,
    pub max_longitude: f64,
}

impl BoundingBox {
    /// Smallest box containing the circle of `radius_km` around the center.
    ///
    /// The box is only an approximation near the poles, callers are expected
    /// to filter the candidates inside the box by their exact distance.
    pub fn around(latitude: f64, longitude: f64, radius_km: f64) -> Self {
        let lat_rad = to_radians(latitude);
        let lon_rad = to_radians(longitude);

        let lat_delta = radius_km / EARTH_RADIUS_KM;
        // longitude degrees shrink towards the poles
        let lon_delta = radius_km / (EARTH_RADIUS_KM * lat_rad.cos().abs().max(1e-9));

        Self {
            min_latitude: to_degrees(lat_rad - lat_delta).max(-90.0),
            min_longitude: to_degrees(lon_rad - lon_delta),
            max_latitude: to_degrees(lat_rad + lat_delta).min(90.0),
            max_longitude: to_degrees(lon_rad + lon_delta),
        }
    }

    /// The longitude interval of the box folded into [-180, 180].
    ///
    /// A box crossing the antimeridian is split into an eastern and a western
    /// part. Otherwise both parts are the same interval. A box reaching a pole
    /// covers every longitude.
    pub fn longitude_ranges(&self) -> [(f64, f64); 2] {
        let full = (-180.0, 180.0);
        if self.min_latitude <= -90.0
            || self.max_latitude >= 90.0
            || self.max_longitude - self.min_longitude >= 360.0
        {
            [full, full]
        } else if self.min_longitude < -180.0 {
            [(self.min_longitude + 360.0, 180.0), (-180.0, self.max_longitude)]
        } else if self.max_longitude > 180.0 {
            [(self.min_longitude, 180.0), (-180.0, self.max_longitude - 360.0)]
        } else {
            let range = (self.min_longitude, self.max_longitude);
            [range, range]
        }
    }

    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.min_latitude..=self.max_latitude).contains(&latitude)
            && self
                .longitude_ranges()
                .iter()
                .any(|(min, max)| (*min..=*max).contains(&longitude))
    }
}

/// Great circle distance between two points in kilometers.
pub fn haversine_distance(
    latitude_1: f64,
    longitude_1: f64,
    latitude_2: f64,
    longitude_2: f64,
) -> f64 {
    let lat1_rad = to_radians(latitude_1);
    let lon1_rad = to_radians(longitude_1);
    let lat2_rad = to_radians(latitude_2);
    let lon2_rad = to_radians(longitude_2);

    let dlat = lat2_rad - lat1_rad;
    let dlon = lon2_rad - lon1_rad;

    let a = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

pub fn is_valid_latitude(latitude: f64) -> bool {
    latitude.is_finite() && (-90.0..=90.0).contains(&latitude)
}

pub fn is_valid_longitude(longitude: f64) -> bool {
    longitude.is_finite() && (-180.0..=180.0).contains(&longitude)
}
