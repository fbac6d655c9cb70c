// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Geographic bounding boxes for state-vector queries.

use thiserror::Error;

/// Errors from bounding box construction.
#[derive(Debug, Error, PartialEq)]
pub enum BoundsError {
    #[error("south edge ({south}) must be below north edge ({north})")]
    InvertedLatitudeSpan { south: f64, north: f64 },

    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// A rectangular geographic region in decimal degrees.
///
/// The four edges are passed through to the API query parameters unchanged;
/// no reprojection or clamping happens after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    south: f64,
    west: f64,
    north: f64,
    east: f64,
}

impl BoundingBox {
    /// Create a bounding box, validating that latitudes and longitudes are in
    /// range and that the south edge lies below the north edge.
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Result<Self, BoundsError> {
        for lat in [south, north] {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(BoundsError::LatitudeOutOfRange(lat));
            }
        }
        for lon in [west, east] {
            if !(-180.0..=180.0).contains(&lon) {
                return Err(BoundsError::LongitudeOutOfRange(lon));
            }
        }
        if south >= north {
            return Err(BoundsError::InvertedLatitudeSpan { south, north });
        }

        Ok(Self {
            south,
            west,
            north,
            east,
        })
    }

    #[must_use]
    pub fn south(&self) -> f64 {
        self.south
    }

    #[must_use]
    pub fn west(&self) -> f64 {
        self.west
    }

    #[must_use]
    pub fn north(&self) -> f64 {
        self.north
    }

    #[must_use]
    pub fn east(&self) -> f64 {
        self.east
    }

    /// Query parameters for the `states/all` endpoint, edges unchanged.
    #[must_use]
    pub fn query_params(&self) -> [(&'static str, String); 4] {
        [
            ("lamin", self.south.to_string()),
            ("lomin", self.west.to_string()),
            ("lamax", self.north.to_string()),
            ("lomax", self.east.to_string()),
        ]
    }

    /// Whether two boxes coincide within `epsilon` degrees on every edge.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.south - other.south).abs() < epsilon
            && (self.west - other.west).abs() < epsilon
            && (self.north - other.north).abs() < epsilon
            && (self.east - other.east).abs() < epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params_pass_edges_through() {
        let bounds = BoundingBox::new(45.8389, 5.9962, 47.8229, 10.5226).unwrap();
        let params = bounds.query_params();

        assert_eq!(params[0], ("lamin", "45.8389".to_string()));
        assert_eq!(params[1], ("lomin", "5.9962".to_string()));
        assert_eq!(params[2], ("lamax", "47.8229".to_string()));
        assert_eq!(params[3], ("lomax", "10.5226".to_string()));
    }

    #[test]
    fn test_rejects_inverted_latitude_span() {
        let err = BoundingBox::new(50.0, 0.0, 40.0, 10.0).unwrap_err();
        assert_eq!(
            err,
            BoundsError::InvertedLatitudeSpan {
                south: 50.0,
                north: 40.0
            }
        );
    }

    #[test]
    fn test_rejects_out_of_range_edges() {
        assert!(matches!(
            BoundingBox::new(-95.0, 0.0, 40.0, 10.0),
            Err(BoundsError::LatitudeOutOfRange(_))
        ));
        assert!(matches!(
            BoundingBox::new(40.0, -181.0, 50.0, 10.0),
            Err(BoundsError::LongitudeOutOfRange(_))
        ));
    }

    #[test]
    fn test_approx_eq() {
        let a = BoundingBox::new(40.0, -10.0, 50.0, 10.0).unwrap();
        let b = BoundingBox::new(40.0000001, -10.0, 50.0, 10.0).unwrap();
        let c = BoundingBox::new(41.0, -10.0, 50.0, 10.0).unwrap();

        assert!(a.approx_eq(&b, 1e-6));
        assert!(!a.approx_eq(&c, 1e-6));
    }
}
