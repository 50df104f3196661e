use crate::{Cost, Point};

/// The straight-line (Euclidean) Distance between two Points.
///
/// Since no Road can be shorter than the straight line between its two ends, this never
/// overestimates the remaining length of a Route, which makes it an admissible and consistent
/// Heuristic for the A* search.
///
/// ## Examples
/// ```
/// # use euclidean_pathfinding::distance;
/// assert_eq!(distance((0.0, 0.0), (3.0, 4.0)), 5.0);
/// assert_eq!(distance((1.5, -2.0), (1.5, -2.0)), 0.0);
/// ```
pub fn distance(a: Point, b: Point) -> Cost {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}
