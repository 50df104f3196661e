use crate::graph::Graph;
use crate::utils::{re_trace, SearchStats};
use crate::{distance, node_id::*, Cost, Path, Point, SearchError};

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

/// Options for configuring a [`PathFinder`]
///
/// Default options:
/// ```
/// # use euclidean_pathfinding::PathFinderConfig;
/// assert_eq!(
///     PathFinderConfig {
///         size_hint: 64,
///         check_coordinates: false,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathFinderConfig {
    /// The number of Intersections a search is expected to visit (defaults to `64`).
    ///
    /// All internal collections of a search are allocated with this capacity up front. It is
    /// only a hint, searches visiting more Intersections simply grow their collections.
    pub size_hint: usize,
    /// `true`: every position read from the Graph is checked to be finite. Intersections at NaN
    /// or infinite coordinates are reported as [`SearchError::InvalidCoordinates`].
    ///
    /// `false` (default): positions are used as they are. Non-finite coordinates lead to
    /// meaningless Routes, but not to a panic.
    pub check_coordinates: bool,
}

impl PathFinderConfig {
    /// a PathFinderConfig that validates every position used in the search
    ///
    /// Values:
    /// ```
    /// # use euclidean_pathfinding::PathFinderConfig;
    /// assert_eq!(
    ///     PathFinderConfig {
    ///         size_hint: 64,
    ///         check_coordinates: true,
    ///     },
    ///     PathFinderConfig::STRICT
    /// );
    /// ```
    pub const STRICT: PathFinderConfig = PathFinderConfig {
        size_hint: 64,
        check_coordinates: true,
    };

    /// a PathFinderConfig that allocates nothing before the search needs it
    ///
    /// Values:
    /// ```
    /// # use euclidean_pathfinding::PathFinderConfig;
    /// assert_eq!(
    ///     PathFinderConfig {
    ///         size_hint: 0,
    ///         check_coordinates: false,
    ///     },
    ///     PathFinderConfig::LOW_MEM
    /// );
    /// ```
    pub const LOW_MEM: PathFinderConfig = PathFinderConfig {
        size_hint: 0,
        check_coordinates: false,
    };

    /// Returns a PathFinderConfig with the given `size_hint` and otherwise default values.
    pub fn with_size_hint(size_hint: usize) -> PathFinderConfig {
        PathFinderConfig {
            size_hint,
            ..Default::default()
        }
    }
}

impl Default for PathFinderConfig {
    fn default() -> PathFinderConfig {
        PathFinderConfig {
            size_hint: 64,
            check_coordinates: false,
        }
    }
}

/// An entry of the open set.
///
/// Entries are ordered by `estimate`, then `cost`, then `node`, then `predecessor`, with the
/// smallest entry being the greatest so that [`BinaryHeap`] pops it first.
#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    estimate: Cost,
    cost: Cost,
    node: NodeID,
    predecessor: Option<NodeID>,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}
impl Eq for FrontierEntry {}
impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for FrontierEntry {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.estimate
            .total_cmp(&self.estimate)
            .then_with(|| rhs.cost.total_cmp(&self.cost))
            .then_with(|| rhs.node.cmp(&self.node))
            .then_with(|| rhs.predecessor.cmp(&self.predecessor))
    }
}

/// Searches a [`Graph`] for the shortest Routes between its Intersections using the
/// [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// The length of a Road is the straight-line [`distance`] between its ends, and the same
/// distance to the Goal is used as the Heuristic.
///
/// A PathFinder only borrows the Graph. Every query creates and drops its own frontier, explored
/// set and predecessors, so nothing carries over from one query to the next.
pub struct PathFinder<'a, G: ?Sized> {
    graph: &'a G,
    config: PathFinderConfig,
}

impl<G: ?Sized> Clone for PathFinder<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<G: ?Sized> Copy for PathFinder<'_, G> {}

impl<G: ?Sized> fmt::Debug for PathFinder<'_, G> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("PathFinder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<'a, G: Graph + ?Sized> PathFinder<'a, G> {
    /// Creates a new PathFinder on `graph`
    pub fn new(graph: &'a G, config: PathFinderConfig) -> PathFinder<'a, G> {
        PathFinder { graph, config }
    }

    /// Returns the config of this PathFinder
    pub fn config(&self) -> &PathFinderConfig {
        &self.config
    }

    /// Finds the shortest Route from `start` to `goal`.
    ///
    /// ## Examples
    /// ```
    /// use euclidean_pathfinding::prelude::*;
    ///
    /// // 0 --- 1
    /// //  \    |
    /// //   \   |
    /// //    \  |
    /// //     \ |
    /// //       2
    /// let map = RoadMap::from_parts(
    ///     [(0, (0.0, 0.0)), (1, (3.0, 0.0)), (2, (3.0, 4.0))],
    ///     [(0, vec![1, 2]), (1, vec![0, 2]), (2, vec![0, 1])],
    /// );
    /// let finder = PathFinder::new(&map, PathFinderConfig::default());
    ///
    /// let path = finder.shortest_path(0, 2).unwrap();
    /// assert_eq!(&path[..], &[0, 2]);
    /// assert_eq!(path.cost(), 5.0);
    ///
    /// // the Start is also a valid Goal
    /// assert_eq!(finder.shortest_path(1, 1).unwrap().into_nodes(), vec![1]);
    /// ```
    ///
    /// ## Returns
    /// the Path, if one was found, or `None` if the `goal` cannot be reached from `start`.
    /// The first Node in the Path is always the `start` and the last is the `goal`
    ///
    /// ## Panics
    /// If `start`, `goal` or any Intersection reached during the search does not exist in the
    /// Graph, or if [`check_coordinates`](PathFinderConfig::check_coordinates) is set and one of
    /// them has a non-finite position. Use [`try_shortest_path`](Self::try_shortest_path) to
    /// handle those cases.
    #[track_caller]
    pub fn shortest_path(&self, start: NodeID, goal: NodeID) -> Option<Path<NodeID>> {
        match self.try_shortest_path(start, goal) {
            Ok(path) => path,
            Err(err) => panic!("Invalid Graph: {}", err),
        }
    }

    /// Finds the shortest Route from `start` to `goal`, reporting invalid Input instead of
    /// panicking.
    ///
    /// Returns `Ok(None)` if the `goal` cannot be reached, which is not an Error.
    ///
    /// ## Examples
    /// ```
    /// # use euclidean_pathfinding::prelude::*;
    /// let mut map = RoadMap::new();
    /// map.add_intersection(0, (0.0, 0.0));
    /// map.add_intersection(1, (f64::NAN, 1.0));
    /// map.add_road(0, 1);
    ///
    /// let finder = PathFinder::new(&map, PathFinderConfig::STRICT);
    ///
    /// assert_eq!(finder.try_shortest_path(0, 2), Err(SearchError::UnknownNode(2)));
    /// assert!(matches!(
    ///     finder.try_shortest_path(0, 1),
    ///     Err(SearchError::InvalidCoordinates { id: 1, .. })
    /// ));
    /// ```
    pub fn try_shortest_path(
        &self,
        start: NodeID,
        goal: NodeID,
    ) -> Result<Option<Path<NodeID>>, SearchError> {
        let start_pos = self.locate(start)?;
        let goal_pos = self.locate(goal)?;

        let size_hint = self.config.size_hint;
        let mut explored = node_id_set_with_cap(size_hint);
        let mut predecessors: NodeIDMap<Option<NodeID>> = node_id_map_with_cap(size_hint);
        let mut frontier = BinaryHeap::with_capacity(size_hint);
        let mut stats = SearchStats::start();

        frontier.push(FrontierEntry {
            estimate: distance(start_pos, goal_pos),
            cost: 0.0,
            node: start,
            predecessor: None,
        });

        let mut goal_cost = None;

        while let Some(FrontierEntry {
            cost: current_cost,
            node: current,
            predecessor,
            ..
        }) = frontier.pop()
        {
            // stale entry of an already finalized Intersection
            if !explored.insert(current) {
                continue;
            }
            predecessors.insert(current, predecessor);
            stats.expanded += 1;
            re_trace!("expanding {} at cost {}", current, current_cost);

            if current == goal {
                goal_cost = Some(current_cost);
                break;
            }

            let current_pos = self.locate(current)?;
            for &other in self
                .graph
                .roads(current)
                .iter()
                .filter(|other| !explored.contains(*other))
            {
                let other_pos = self.locate(other)?;
                let other_cost = current_cost + distance(current_pos, other_pos);
                frontier.push(FrontierEntry {
                    estimate: other_cost + distance(other_pos, goal_pos),
                    cost: other_cost,
                    node: other,
                    predecessor: Some(current),
                });
                stats.pushed += 1;
            }
        }

        stats.finish(start, goal, goal_cost.is_some());

        let cost = match goal_cost {
            Some(cost) => cost,
            None => return Ok(None),
        };

        let steps = {
            let mut steps = vec![];
            let mut current = Some(goal);

            while let Some(id) = current {
                steps.push(id);
                current = predecessors[&id];
            }
            steps.reverse();
            steps
        };

        Ok(Some(Path::new(steps, cost)))
    }

    fn locate(&self, id: NodeID) -> Result<Point, SearchError> {
        let point = self
            .graph
            .position(id)
            .ok_or(SearchError::UnknownNode(id))?;
        if self.config.check_coordinates && !(point.0.is_finite() && point.1.is_finite()) {
            return Err(SearchError::InvalidCoordinates { id, point });
        }
        Ok(point)
    }
}

/// Finds the shortest Route from `start` to `goal` in `graph`.
///
/// Shorthand for a [`PathFinder`] with the default [`PathFinderConfig`], returning only the
/// sequence of Intersections. See [`PathFinder::shortest_path`] for details.
///
/// ## Examples
/// ```
/// # use euclidean_pathfinding::prelude::*;
/// let map = RoadMap::from_parts(
///     [(0, (0.0, 0.0)), (1, (0.0, 1.0)), (2, (1.0, 1.0))],
///     [(0, vec![1]), (1, vec![0, 2]), (2, vec![1])],
/// );
///
/// assert_eq!(shortest_path(&map, 0, 2), Some(vec![0, 1, 2]));
/// assert_eq!(shortest_path(&map, 0, 0), Some(vec![0]));
/// ```
///
/// ## Panics
/// If `start`, `goal` or any Intersection reached during the search does not exist in `graph`.
#[track_caller]
pub fn shortest_path<G: Graph + ?Sized>(
    graph: &G,
    start: NodeID,
    goal: NodeID,
) -> Option<Vec<NodeID>> {
    PathFinder::new(graph, PathFinderConfig::default())
        .shortest_path(start, goal)
        .map(Path::into_nodes)
}
