use super::Graph;
use crate::{node_id::*, Point};

/// A Road Network stored as two maps: Intersections to their positions, and Intersections to
/// the Intersections reachable from them.
///
/// ## Examples
/// ```
/// use euclidean_pathfinding::RoadMap;
///
/// let mut map = RoadMap::new();
/// map.add_intersection(0, (0.0, 0.0));
/// map.add_intersection(1, (0.0, 1.0));
/// map.add_road(0, 1);
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.roads_of(0), &[1]);
/// assert_eq!(map.roads_of(1), &[0]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadMap {
    intersections: NodeIDMap<Point>,
    roads: NodeIDMap<Vec<NodeID>>,
}

impl RoadMap {
    /// Creates an empty RoadMap
    pub fn new() -> RoadMap {
        RoadMap::default()
    }

    /// Creates an empty RoadMap with room for `capacity` Intersections
    pub fn with_capacity(capacity: usize) -> RoadMap {
        RoadMap {
            intersections: node_id_map_with_cap(capacity),
            roads: node_id_map_with_cap(capacity),
        }
    }

    /// Creates a RoadMap from existing Intersections and Roads.
    ///
    /// The Roads are taken as they are, so one-way Roads stay one-way. Every id used in `roads`
    /// should also be one of the `intersections`.
    ///
    /// ## Examples
    /// ```
    /// # use euclidean_pathfinding::RoadMap;
    /// let map = RoadMap::from_parts(
    ///     [(0, (0.0, 0.0)), (1, (0.0, 1.0)), (2, (1.0, 1.0))],
    ///     [(0, vec![1]), (1, vec![0, 2]), (2, vec![1])],
    /// );
    ///
    /// assert_eq!(map.roads_of(1), &[0, 2]);
    /// ```
    pub fn from_parts(
        intersections: impl IntoIterator<Item = (NodeID, Point)>,
        roads: impl IntoIterator<Item = (NodeID, Vec<NodeID>)>,
    ) -> RoadMap {
        let mut map = RoadMap::new();
        map.intersections.extend(intersections);
        map.roads.extend(roads);
        map
    }

    /// Adds an Intersection, or moves it if it already exists.
    ///
    /// Returns the previous position of the Intersection.
    pub fn add_intersection(&mut self, id: NodeID, pos: Point) -> Option<Point> {
        self.intersections.insert(id, pos)
    }

    /// Connects `a` and `b` in both directions.
    ///
    /// Connections that already exist are not added a second time.
    pub fn add_road(&mut self, a: NodeID, b: NodeID) {
        self.add_one_way(a, b);
        self.add_one_way(b, a);
    }

    /// Connects `from` to `to`, but not the other way around.
    pub fn add_one_way(&mut self, from: NodeID, to: NodeID) {
        let roads = self.roads.entry(from).or_default();
        if !roads.contains(&to) {
            roads.push(to);
        }
    }

    /// Replaces all Roads leaving `id`, returning the old ones.
    pub fn set_roads(&mut self, id: NodeID, roads: Vec<NodeID>) -> Vec<NodeID> {
        self.roads.insert(id, roads).unwrap_or_default()
    }

    /// The Roads leaving `id`. Empty if there are none.
    pub fn roads_of(&self, id: NodeID) -> &[NodeID] {
        self.roads.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The position of `id`, if it exists.
    pub fn position_of(&self, id: NodeID) -> Option<Point> {
        self.intersections.get(&id).copied()
    }

    /// Returns `true` if the Map has an Intersection `id`.
    pub fn contains(&self, id: NodeID) -> bool {
        self.intersections.contains_key(&id)
    }

    /// An Iterator over all Intersections and their positions, in no particular order.
    pub fn intersections(&self) -> impl Iterator<Item = (NodeID, Point)> + '_ {
        self.intersections.iter().map(|(&id, &pos)| (id, pos))
    }

    /// The number of Intersections
    pub fn len(&self) -> usize {
        self.intersections.len()
    }

    /// Returns `true` if the Map has no Intersections
    pub fn is_empty(&self) -> bool {
        self.intersections.is_empty()
    }
}

impl Graph for RoadMap {
    fn position(&self, id: NodeID) -> Option<Point> {
        self.position_of(id)
    }
    fn roads(&self, id: NodeID) -> &[NodeID] {
        self.roads_of(id)
    }
}
