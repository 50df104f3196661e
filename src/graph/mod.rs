//! The Input side of the search: anything that knows where its Intersections are and how they
//! are connected.

use crate::{NodeID, Point};

mod road_map;
pub use road_map::RoadMap;

/// Defines the Road Network that a [`PathFinder`](crate::PathFinder) searches.
///
/// Only two questions have to be answered: where an Intersection lies, and which Intersections
/// can be reached from it by driving along a single Road. The length of a Road is never stored,
/// it is always the straight-line [`distance`](crate::distance) between its two ends.
///
/// Roads are usually symmetric (if `b` is in the Roads of `a`, then `a` is in the Roads of `b`),
/// but the search does not rely on that, so one-way Roads work as expected.
///
/// The provided implementation of this Trait is [`RoadMap`], but it is straightforward to
/// implement it for any existing representation of a Map:
/// ```
/// use euclidean_pathfinding::{prelude::*, NodeID};
///
/// // Intersections are the indices of `points`
/// struct Network {
///     points: Vec<Point>,
///     roads: Vec<Vec<NodeID>>,
/// }
///
/// impl Graph for Network {
///     fn position(&self, id: NodeID) -> Option<Point> {
///         self.points.get(id as usize).copied()
///     }
///     fn roads(&self, id: NodeID) -> &[NodeID] {
///         self.roads.get(id as usize).map(Vec::as_slice).unwrap_or(&[])
///     }
/// }
///
/// let network = Network {
///     points: vec![(0.0, 0.0), (3.0, 4.0)],
///     roads: vec![vec![1], vec![0]],
/// };
/// assert_eq!(shortest_path(&network, 1, 0), Some(vec![1, 0]));
/// ```
pub trait Graph {
    /// The position of an Intersection, or `None` if there is no Intersection with that id.
    fn position(&self, id: NodeID) -> Option<Point>;
    /// The Intersections directly reachable from `id`, in the order they should be explored.
    ///
    /// An Intersection without any Roads may return an empty slice.
    fn roads(&self, id: NodeID) -> &[NodeID];
}

impl<G: Graph + ?Sized> Graph for &G {
    fn position(&self, id: NodeID) -> Option<Point> {
        (**self).position(id)
    }
    fn roads(&self, id: NodeID) -> &[NodeID] {
        (**self).roads(id)
    }
}
