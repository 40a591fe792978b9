/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Clone, Copy, Debug)]
pub struct LatLon(f64, f64);

impl LatLon {
    pub const fn new(lat: f64, lon: f64) -> Self {
        LatLon(lat, lon)
    }

    /// Great-circle distance to `other` in kilometers (haversine).
    pub fn distance_km(self, other: LatLon) -> f64 {
        let d_lat = (other.0 - self.0).to_radians();
        let d_lon = (other.1 - self.1).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + self.0.to_radians().cos() * other.0.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }

    //Ex: N037.37.16.680 W122.22.44.400
    pub fn to_dms(self) -> String {
        fn dms(dd: f64) -> (i32, i32, f64) {
            let d = dd.trunc() as i32;
            let m = (dd.abs() * 60.0).trunc() as i32 % 60;
            let s = (dd.abs() * 3600.0) % 60.0;
            (d, m, s)
        }

        let mut tmp = String::new();
        tmp += if self.0.is_sign_positive() { "N" } else { "S" };
        let (d, m, s) = dms(self.0);
        tmp += &format!("{:03}.{:02}.{:06.03}", d.abs(), m, s);

        tmp += " ";

        tmp += if self.1.is_sign_positive() { "E" } else { "W" };
        let (d, m, s) = dms(self.1);
        tmp += &format!("{:03}.{:02}.{:06.03}", d.abs(), m, s);
        tmp
    }
}
