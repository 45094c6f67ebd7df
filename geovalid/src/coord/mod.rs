//! Geographic coordinate value type.
//!
//! A [`Coordinate`] is an immutable (latitude, longitude) pair in decimal
//! degrees. Equality and hashing operate on the raw f64 bit patterns, so
//! two coordinates are equal only when both fields are bit-identical.
//! There is no epsilon tolerance, and `-0.0` is distinct from `0.0`.
//!
//! Values outside the conventional [-90, 90] / [-180, 180] degree ranges
//! are accepted as-is; range checking is the caller's concern.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A geographic point in decimal degrees.
#[derive(Debug, Clone, Copy)]
pub struct Coordinate {
    /// Latitude in degrees (north positive).
    latitude: f64,
    /// Longitude in degrees (east positive).
    longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude in decimal degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the latitude in degrees.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in degrees.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.latitude.to_bits() == other.latitude.to_bits()
            && self.longitude.to_bits() == other.longitude.to_bits()
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.latitude.to_bits().hash(state);
        self.longitude.to_bits().hash(state);
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(c: &Coordinate) -> u64 {
        let mut hasher = DefaultHasher::new();
        c.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_accessors() {
        let c = Coordinate::new(38.866694, -77.128092);
        assert_eq!(c.latitude(), 38.866694);
        assert_eq!(c.longitude(), -77.128092);
    }

    #[test]
    fn test_equality_is_bitwise() {
        let a = Coordinate::new(38.866694, -77.128092);
        let b = Coordinate::new(38.866694, -77.128092);
        assert_eq!(a, b);

        let c = Coordinate::new(38.866695, -77.128092);
        assert_ne!(a, c, "A 1e-6 degree difference must not compare equal");
    }

    #[test]
    fn test_negative_zero_is_distinct() {
        let pos = Coordinate::new(0.0, 0.0);
        let neg = Coordinate::new(-0.0, 0.0);
        assert_ne!(pos, neg, "-0.0 and 0.0 have different bit patterns");
    }

    #[test]
    fn test_equal_coordinates_hash_equal() {
        let a = Coordinate::new(51.5074, -0.1278);
        let b = Coordinate::new(51.5074, -0.1278);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_out_of_range_values_accepted() {
        // No range validation: callers own any degree clamping
        let c = Coordinate::new(123.0, -500.0);
        assert_eq!(c.latitude(), 123.0);
        assert_eq!(c.longitude(), -500.0);
    }

    #[test]
    fn test_display_format() {
        let c = Coordinate::new(5.0, -1.5);
        assert_eq!(c.to_string(), "(5, -1.5)");
    }
}
