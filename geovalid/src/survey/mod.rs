//! Survey entities: areas, sectors and input records.
//!
//! An [`Area`] is a named axis-aligned rectangle built from two diagonal
//! corners; a [`Sector`] is a named arbitrary quadrilateral. Both wrap a
//! [`Region`] value rather than extending it - neither changes any
//! geometric behavior, they only attach an identifier used in reporting.
//!
//! A [`SurveyRecord`] is one already-typed input row as handed over by the
//! record source; field parsing lives in [`crate::record`].

use crate::coord::Coordinate;
use crate::region::Region;
use thiserror::Error;

/// Errors from area construction.
#[derive(Debug, Error, PartialEq)]
pub enum AreaError {
    /// The two diagonal corners share a latitude or a longitude, which
    /// would produce a zero-height or zero-width rectangle.
    #[error("Degenerate area diagonal for '{id}': corners {c1} and {c2} must differ in both latitude and longitude")]
    DegenerateDiagonal {
        id: String,
        c1: Coordinate,
        c2: Coordinate,
    },
}

/// A named rectangular survey area.
#[derive(Debug, Clone)]
pub struct Area {
    id: String,
    region: Region,
}

impl Area {
    /// Creates an area from two diagonal corners of an axis-aligned
    /// rectangle.
    ///
    /// The two missing corners are derived by combining the latitude of one
    /// corner with the longitude of the other. Corners sharing a latitude
    /// or a longitude are rejected.
    pub fn from_diagonal(
        id: impl Into<String>,
        c1: Coordinate,
        c2: Coordinate,
    ) -> Result<Self, AreaError> {
        let id = id.into();

        if c1.latitude() == c2.latitude() || c1.longitude() == c2.longitude() {
            return Err(AreaError::DegenerateDiagonal { id, c1, c2 });
        }

        let c3 = Coordinate::new(c1.latitude(), c2.longitude());
        let c4 = Coordinate::new(c2.latitude(), c1.longitude());

        Ok(Self {
            id,
            region: Region::new(c1, c2, c3, c4),
        })
    }

    /// Returns the area identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the underlying rectangular region.
    #[inline]
    pub fn region(&self) -> &Region {
        &self.region
    }
}

/// A named quadrilateral sector within an area.
#[derive(Debug, Clone)]
pub struct Sector {
    id: String,
    region: Region,
}

impl Sector {
    /// Creates a sector from 4 corner coordinates supplied in any order.
    pub fn new(
        id: impl Into<String>,
        c1: Coordinate,
        c2: Coordinate,
        c3: Coordinate,
        c4: Coordinate,
    ) -> Self {
        Self {
            id: id.into(),
            region: Region::new(c1, c2, c3, c4),
        }
    }

    /// Returns the sector identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the underlying quadrilateral region.
    #[inline]
    pub fn region(&self) -> &Region {
        &self.region
    }
}

/// One input row: an area definition plus one of its sectors.
///
/// Records for the same area are expected to be contiguous in the input;
/// the batch validator detects group boundaries by comparing `area_id`
/// against the previous record.
#[derive(Debug, Clone)]
pub struct SurveyRecord {
    /// Identifier of the area this row belongs to.
    pub area_id: String,
    /// Two diagonal corners of the area rectangle.
    pub area_corners: [Coordinate; 2],
    /// Identifier of the sector defined by this row.
    pub sector_id: String,
    /// Four corners of the sector quadrilateral.
    pub sector_corners: [Coordinate; 4],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon)
    }

    #[test]
    fn test_area_from_diagonal_orders_corners() {
        let area = Area::from_diagonal("Area 1", coord(5.0, 1.0), coord(1.0, 4.0))
            .expect("Non-degenerate diagonal should build an area");

        let coordinates = area.region().coordinates();
        assert_eq!(coordinates[0], coord(1.0, 1.0));
        assert_eq!(coordinates[1], coord(5.0, 1.0));
        assert_eq!(coordinates[2], coord(5.0, 4.0));
        assert_eq!(coordinates[3], coord(1.0, 4.0));
    }

    #[test]
    fn test_area_from_diagonal_negative_degrees() {
        let area = Area::from_diagonal("Area 2", coord(5.0, -1.0), coord(-1.0, 4.0))
            .expect("Non-degenerate diagonal should build an area");

        let coordinates = area.region().coordinates();
        assert_eq!(coordinates[0], coord(-1.0, -1.0));
        assert_eq!(coordinates[1], coord(5.0, -1.0));
        assert_eq!(coordinates[2], coord(5.0, 4.0));
        assert_eq!(coordinates[3], coord(-1.0, 4.0));
    }

    #[test]
    fn test_area_rejects_shared_latitude() {
        let result = Area::from_diagonal("flat", coord(3.0, 1.0), coord(3.0, 4.0));
        assert!(matches!(result, Err(AreaError::DegenerateDiagonal { .. })));
    }

    #[test]
    fn test_area_rejects_shared_longitude() {
        let result = Area::from_diagonal("thin", coord(1.0, 2.0), coord(4.0, 2.0));
        assert!(matches!(result, Err(AreaError::DegenerateDiagonal { .. })));
    }

    #[test]
    fn test_area_id_is_reported() {
        let area = Area::from_diagonal("A-17", coord(0.0, 0.0), coord(1.0, 1.0)).unwrap();
        assert_eq!(area.id(), "A-17");

        let err = Area::from_diagonal("A-18", coord(0.0, 0.0), coord(0.0, 1.0)).unwrap_err();
        assert!(err.to_string().contains("A-18"));
    }

    #[test]
    fn test_sector_keeps_id_and_region() {
        let sector = Sector::new(
            "S-1",
            coord(2.0, 0.0),
            coord(1.0, 1.0),
            coord(4.0, 2.0),
            coord(3.0, 3.0),
        );

        assert_eq!(sector.id(), "S-1");
        assert_eq!(sector.region().coordinates()[0], coord(2.0, 0.0));
    }
}
