// Copyright 2020 Zachary Stewart
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
//! Ships: validated straight runs of cells.
use std::{collections::HashSet, mem};

#[cfg(feature = "rng_gen")]
use rand::Rng;
use thiserror::Error;

#[cfg(feature = "rng_gen")]
use crate::board::Dimensions;
use crate::board::Coordinate;

/// Error returned when a list of points does not describe a valid ship.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ShipError {
    /// The same point was listed more than once.
    #[error("bad ship: point {0} appears more than once")]
    DuplicatePoint(Coordinate),
    /// The points are not a straight, gap-free line.
    #[error("broken ship: {points:?}")]
    Malformed {
        /// The points that were rejected.
        points: Vec<Coordinate>,
    },
    /// A 1-based point had a zero component.
    #[error("bad ship: ({x}, {y}) is not a 1-based coordinate")]
    OutOfRange {
        /// 1-based column as given.
        x: usize,
        /// 1-based row as given.
        y: usize,
    },
}

/// Direction a ship runs in.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Orientation {
    /// All cells share the same row.
    Horizontal,
    /// All cells share the same column.
    Vertical,
    /// A ship of length 1 has no direction.
    Single,
}

/// An immutable vessel: a straight, contiguous run of unique cells.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Ship {
    points: Vec<Coordinate>,
}

impl Ship {
    /// Build a ship from 0-based points, given in any order.
    pub fn new<P: IntoIterator<Item = Coordinate>>(points: P) -> Result<Self, ShipError> {
        let points: Vec<_> = points.into_iter().collect();

        let mut seen = HashSet::with_capacity(points.len());
        for &point in &points {
            if !seen.insert(point) {
                return Err(ShipError::DuplicatePoint(point));
            }
        }

        let (min, max) = match bounding_box(&points) {
            Some(bounds) => bounds,
            None => return Err(ShipError::Malformed { points }),
        };
        let mut width = max.x - min.x + 1;
        let mut height = max.y - min.y + 1;
        if width != 1 {
            mem::swap(&mut width, &mut height);
        }
        // With no duplicates, a one-wide box exactly as long as the point count can only
        // be filled by a contiguous run.
        if width != 1 || height != points.len() {
            return Err(ShipError::Malformed { points });
        }
        Ok(Self { points })
    }

    /// Build a ship from 1-based `(column, row)` points, the form fleet layouts are
    /// written in.
    pub fn from_one_based(points: &[(usize, usize)]) -> Result<Self, ShipError> {
        let points = points
            .iter()
            .map(|&(x, y)| Coordinate::from_one_based(x, y).ok_or(ShipError::OutOfRange { x, y }))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(points)
    }

    /// Generate a random straight ship of the given length that fits within `dim`.
    ///
    /// A random boolean decides whether the run is vertical; when only one direction
    /// fits the board, that direction is used. The anchor is uniform over every
    /// position where the run fits.
    ///
    /// Panics if `length` is 0 or longer than both the width and the height.
    #[cfg(feature = "rng_gen")]
    pub fn random(rng: &mut impl Rng, length: usize, dim: &Dimensions) -> Self {
        assert!(length > 0, "ships must have at least one cell");
        let fits_horizontal = length <= dim.width();
        let fits_vertical = length <= dim.height();
        assert!(
            fits_horizontal || fits_vertical,
            "ship of length {} does not fit on {:?}",
            length,
            dim
        );

        let transpose: bool = rng.gen();
        let transpose = if fits_horizontal && fits_vertical {
            transpose
        } else {
            fits_vertical
        };

        // A vertical run is a horizontal run on the transposed board.
        let space = if transpose { dim.transposed() } else { *dim };
        let x = rng.gen_range(0, space.width() - length + 1);
        let y = rng.gen_range(0, space.height());
        let points = (x..x + length)
            .map(|x| {
                let coord = Coordinate::new(x, y);
                if transpose {
                    coord.transpose()
                } else {
                    coord
                }
            })
            .collect();
        Self { points }
    }

    /// Number of cells this ship covers.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Ships always cover at least one cell.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The cells of this ship, in the order they were given.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Returns true if this ship covers the given cell.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.points.contains(&coord)
    }

    /// The direction this ship runs in.
    pub fn orientation(&self) -> Orientation {
        match self.points.as_slice() {
            [_] => Orientation::Single,
            [first, second, ..] if first.y == second.y => Orientation::Horizontal,
            _ => Orientation::Vertical,
        }
    }
}

/// Smallest and largest corner of the box around the points, or `None` when there are
/// no points.
fn bounding_box(points: &[Coordinate]) -> Option<(Coordinate, Coordinate)> {
    let first = *points.first()?;
    Some(points.iter().fold((first, first), |(min, max), p| {
        (
            Coordinate::new(min.x.min(p.x), min.y.min(p.y)),
            Coordinate::new(max.x.max(p.x), max.y.max(p.y)),
        )
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(points: &[(usize, usize)]) -> Vec<Coordinate> {
        points.iter().copied().map(Coordinate::from).collect()
    }

    #[test]
    fn straight_lines_in_any_order() {
        let ship = Ship::new(coords(&[(3, 0), (5, 0), (4, 0)])).unwrap();
        assert_eq!(ship.len(), 3);
        assert_eq!(ship.orientation(), Orientation::Horizontal);

        let ship = Ship::new(coords(&[(1, 4), (1, 5)])).unwrap();
        assert_eq!(ship.orientation(), Orientation::Vertical);

        let ship = Ship::new(coords(&[(2, 2)])).unwrap();
        assert_eq!(ship.orientation(), Orientation::Single);
    }

    #[test]
    fn rejects_duplicates() {
        assert_eq!(
            Ship::new(coords(&[(1, 1), (1, 2), (1, 1)])),
            Err(ShipError::DuplicatePoint(Coordinate::new(1, 1)))
        );
    }

    #[test]
    fn rejects_l_shapes_and_gaps() {
        assert!(matches!(
            Ship::new(coords(&[(0, 0), (1, 0), (1, 1)])),
            Err(ShipError::Malformed { .. })
        ));
        assert!(matches!(
            Ship::new(coords(&[(0, 0), (2, 0)])),
            Err(ShipError::Malformed { .. })
        ));
        assert!(matches!(
            Ship::new(coords(&[(0, 0), (1, 1)])),
            Err(ShipError::Malformed { .. })
        ));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(
            Ship::new(Vec::new()),
            Err(ShipError::Malformed { points: Vec::new() })
        );
    }

    #[test]
    fn one_based_points_are_shifted() {
        let ship = Ship::from_one_based(&[(4, 1), (6, 1), (5, 1)]).unwrap();
        assert!(ship.contains(Coordinate::new(3, 0)));
        assert!(ship.contains(Coordinate::new(5, 0)));
        assert!(!ship.contains(Coordinate::new(6, 0)));
        assert_eq!(
            Ship::from_one_based(&[(0, 1)]),
            Err(ShipError::OutOfRange { x: 0, y: 1 })
        );
    }

    #[cfg(feature = "rng_gen")]
    #[test]
    fn random_ships_are_valid_and_in_bounds() {
        use rand::{rngs::StdRng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(7);
        let dim = Dimensions::new(6, 6);
        for length in 1..=6 {
            for _ in 0..50 {
                let ship = Ship::random(&mut rng, length, &dim);
                assert_eq!(ship.len(), length);
                assert!(ship.points().iter().all(|&p| dim.contains(p)));
                assert_eq!(Ship::new(ship.points().to_vec()).as_ref(), Ok(&ship));
            }
        }
    }

    #[cfg(feature = "rng_gen")]
    #[test]
    fn random_ship_follows_the_only_fitting_direction() {
        use rand::{rngs::StdRng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(11);
        let dim = Dimensions::new(2, 5);
        for _ in 0..20 {
            let ship = Ship::random(&mut rng, 4, &dim);
            assert_eq!(ship.orientation(), Orientation::Vertical);
        }
    }
}
