//! Point-in-polygon partitioning.

use crate::C;
use geo::{
    coordinate_position::{CoordPos, CoordinatePosition},
    geometry::{Coord, Polygon},
};

/// Returns the indices of `points` inside `polygon`.
///
/// When `closed` is true, points on the boundary count as inside.
pub fn inside_indices(points: &[Coord<C>], polygon: &Polygon<C>, closed: bool) -> Vec<usize> {
    partition(points, polygon, closed, true)
}

/// Returns the indices of `points` outside `polygon`; the exact
/// complement of [inside_indices] for the same `closed` flag.
pub fn outside_indices(points: &[Coord<C>], polygon: &Polygon<C>, closed: bool) -> Vec<usize> {
    partition(points, polygon, closed, false)
}

fn partition(points: &[Coord<C>], polygon: &Polygon<C>, closed: bool, inside: bool) -> Vec<usize> {
    points
        .iter()
        .enumerate()
        .filter(|(_, point)| is_inside(polygon, point, closed) == inside)
        .map(|(idx, _)| idx)
        .collect()
}

fn is_inside(polygon: &Polygon<C>, point: &Coord<C>, closed: bool) -> bool {
    match polygon.coordinate_position(point) {
        CoordPos::Inside => true,
        CoordPos::OnBoundary => closed,
        CoordPos::Outside => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{inside_indices, outside_indices};
    use geo::{geometry::Coord, polygon};

    #[test]
    fn test_unit_square() {
        let square = polygon![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 0.0),
            (x: 1.0, y: 1.0),
            (x: 0.0, y: 1.0),
        ];
        let points = [
            Coord { x: 0.5, y: 0.5 },
            Coord { x: 1.5, y: 0.5 },
            Coord { x: 1.0, y: 0.5 },
            Coord { x: -0.1, y: -0.1 },
            Coord { x: 0.0, y: 0.0 },
        ];

        assert_eq!(inside_indices(&points, &square, true), [0, 2, 4]);
        assert_eq!(outside_indices(&points, &square, true), [1, 3]);

        assert_eq!(inside_indices(&points, &square, false), [0]);
        assert_eq!(outside_indices(&points, &square, false), [1, 2, 3, 4]);
    }
}
