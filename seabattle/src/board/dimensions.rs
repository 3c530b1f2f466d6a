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
use crate::board::Coordinate;

/// Which cells around a ship must stay free of other ships.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Adjacency {
    /// A ship may not share a cell with, or sit directly above, below, left or right
    /// of, another ship. Diagonal contact is allowed.
    Orthogonal,
    /// Like [`Adjacency::Orthogonal`], but diagonal contact is blocked too, leaving a
    /// full one-cell buffer around every ship.
    Full,
}

impl Default for Adjacency {
    fn default() -> Self {
        Adjacency::Orthogonal
    }
}

/// Rectangular dimensions of a board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    /// Width of the board. This cooresponds to the `x` [`Coordinate`].
    width: usize,
    /// Height of the board. This cooresponds to the `y` [`Coordinate`].
    height: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the specified width and height.
    /// Panics if `width * height` exceeds `usize::max_value()` or if `width` or `height` is 0.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Some(dim) => dim,
            None => {
                if width == 0 || height == 0 {
                    panic!("Dimensions must be nonzero, got {}x{}", width, height);
                } else {
                    panic!(
                        "Dimensions too large: {} * {} > {}",
                        width,
                        height,
                        usize::max_value()
                    );
                }
            }
        }
    }

    /// Create new [`Dimensions`] with the specified width and height.
    /// Returns `None` if `width * height` exceeds `usize::max_value()` or if `width` or
    /// `height` is 0.
    pub fn try_new(width: usize, height: usize) -> Option<Self> {
        if width == 0 || height == 0 {
            None
        } else {
            width
                .checked_mul(height)
                .map(|_| Self { width, height })
        }
    }

    /// Get the width of these [`Dimensions`].
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of these [`Dimensions`].
    pub fn height(&self) -> usize {
        self.height
    }

    /// Compute the number of cells covered by these dimensions.
    pub fn total_size(&self) -> usize {
        self.width * self.height
    }

    /// The same dimensions with width and height swapped.
    pub fn transposed(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Returns true if the coordinate lies on the board.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.check_bounds(coord).is_some()
    }

    /// Convert a coordinate to a row-major index. Returns `None` if the coordinate is
    /// out of bounds.
    pub fn try_linearize(&self, coord: Coordinate) -> Option<usize> {
        self.check_bounds(coord)
            .map(|coord| coord.y * self.width + coord.x)
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the coordinates of
    /// that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let width = self.width;
        (0..self.height).map(move |y| (0..width).map(move |x| Coordinate { x, y }))
    }

    /// Iterate the in-bounds neighbors of the given coordinate under the given
    /// adjacency rule. The coordinate itself is not included.
    pub fn neighbors(&self, coord: Coordinate, adjacency: Adjacency) -> Neighbors<'_> {
        Neighbors {
            dim: self,
            coord,
            adjacency,
            // If the coordinate is out of bounds, skip directly to the End state so we
            // don't yield neighbors of a cell that isn't on the board.
            step: self
                .check_bounds(coord)
                .map_or(NeighborStep::End, |_| NeighborStep::Up),
        }
    }

    /// Check if the given [`Coordinate`] is in bounds for these [`Dimensions`]. If so,
    /// return it, otherwise return `None`.
    #[inline]
    fn check_bounds(&self, coord: Coordinate) -> Option<Coordinate> {
        if coord.x < self.width && coord.y < self.height {
            Some(coord)
        } else {
            None
        }
    }

    /// Move the coordinate by one step along each axis, returning `None` if that leaves
    /// the board.
    fn offset(&self, coord: Coordinate, dx: isize, dy: isize) -> Option<Coordinate> {
        let x = shift(coord.x, dx)?;
        let y = shift(coord.y, dy)?;
        self.check_bounds(Coordinate::new(x, y))
    }
}

fn shift(value: usize, delta: isize) -> Option<usize> {
    if delta < 0 {
        value.checked_sub(delta.unsigned_abs())
    } else {
        value.checked_add(delta as usize)
    }
}

/// Iterator over the neighbors of a coordinate.
pub struct Neighbors<'a> {
    dim: &'a Dimensions,
    coord: Coordinate,
    adjacency: Adjacency,
    step: NeighborStep,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum NeighborStep {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
    End,
}

impl NeighborStep {
    /// The step that follows this one for the given adjacency rule.
    fn after(self, adjacency: Adjacency) -> Self {
        match self {
            NeighborStep::Up => NeighborStep::Down,
            NeighborStep::Down => NeighborStep::Left,
            NeighborStep::Left => NeighborStep::Right,
            NeighborStep::Right => match adjacency {
                Adjacency::Orthogonal => NeighborStep::End,
                Adjacency::Full => NeighborStep::UpLeft,
            },
            NeighborStep::UpLeft => NeighborStep::UpRight,
            NeighborStep::UpRight => NeighborStep::DownLeft,
            NeighborStep::DownLeft => NeighborStep::DownRight,
            NeighborStep::DownRight | NeighborStep::End => NeighborStep::End,
        }
    }

    /// Offset of this step as `(dx, dy)`. `y` grows downwards.
    fn delta(self) -> Option<(isize, isize)> {
        match self {
            NeighborStep::Up => Some((0, -1)),
            NeighborStep::Down => Some((0, 1)),
            NeighborStep::Left => Some((-1, 0)),
            NeighborStep::Right => Some((1, 0)),
            NeighborStep::UpLeft => Some((-1, -1)),
            NeighborStep::UpRight => Some((1, -1)),
            NeighborStep::DownLeft => Some((-1, 1)),
            NeighborStep::DownRight => Some((1, 1)),
            NeighborStep::End => None,
        }
    }
}

impl Iterator for Neighbors<'_> {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        loop {
            let (dx, dy) = self.step.delta()?;
            self.step = self.step.after(self.adjacency);
            if let Some(coord) = self.dim.offset(self.coord, dx, dy) {
                return Some(coord);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linearize_is_row_major() {
        let dim = Dimensions::new(6, 4);
        assert_eq!(dim.try_linearize(Coordinate::new(2, 1)), Some(8));
        assert_eq!(dim.try_linearize(Coordinate::new(6, 0)), None);
        assert_eq!(dim.try_linearize(Coordinate::new(0, 4)), None);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(Dimensions::try_new(0, 6), None);
        assert_eq!(Dimensions::try_new(6, 0), None);
        assert_eq!(Dimensions::try_new(usize::max_value(), 2), None);
    }

    #[test]
    fn corner_has_two_orthogonal_neighbors() {
        let dim = Dimensions::new(6, 6);
        let neighbors: Vec<_> = dim
            .neighbors(Coordinate::new(0, 0), Adjacency::Orthogonal)
            .collect();
        assert_eq!(neighbors, vec![Coordinate::new(0, 1), Coordinate::new(1, 0)]);
    }

    #[test]
    fn full_adjacency_adds_diagonals() {
        let dim = Dimensions::new(6, 6);
        assert_eq!(
            dim.neighbors(Coordinate::new(2, 2), Adjacency::Orthogonal)
                .count(),
            4
        );
        let full: Vec<_> = dim
            .neighbors(Coordinate::new(2, 2), Adjacency::Full)
            .collect();
        assert_eq!(full.len(), 8);
        assert!(full.contains(&Coordinate::new(1, 1)));
        assert!(full.contains(&Coordinate::new(3, 3)));
        assert_eq!(
            dim.neighbors(Coordinate::new(5, 5), Adjacency::Full)
                .count(),
            3
        );
    }

    #[test]
    fn out_of_bounds_has_no_neighbors() {
        let dim = Dimensions::new(6, 6);
        assert_eq!(
            dim.neighbors(Coordinate::new(6, 2), Adjacency::Full)
                .count(),
            0
        );
    }
}
