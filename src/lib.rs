#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find the shortest Route between two Intersections of a Road Network.
//!
//! ## Introduction
//! A Road Network is a Graph whose Nodes (Intersections) have a position on a 2D plane and whose
//! Edges (Roads) connect two Intersections in a straight line. The Cost of driving along a Road is
//! simply its length, which means that the straight-line Distance between any Intersection and the
//! Goal can never overestimate the remaining Cost. That makes it a perfect Heuristic for the
//! [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm), which is what this crate
//! implements.
//!
//! The Graph itself is never owned by the search. Anything that can answer "where is this
//! Intersection?" and "which Intersections can I reach from here?" can be searched by implementing
//! the [`Graph`] Trait. A ready-made container is provided as [`RoadMap`].
//!
//! ## Examples
//! Building a Map and finding a Route:
//! ```
//! use euclidean_pathfinding::prelude::*;
//!
//! // 0 --- 1
//! //       |
//! //       2
//! let mut map = RoadMap::new();
//! map.add_intersection(0, (0.0, 0.0));
//! map.add_intersection(1, (0.0, 1.0));
//! map.add_intersection(2, (1.0, 1.0));
//! map.add_road(0, 1);
//! map.add_road(1, 2);
//!
//! let route = shortest_path(&map, 0, 2);
//!
//! assert_eq!(route, Some(vec![0, 1, 2]));
//! ```
//!
//! If the Goal cannot be reached from the Start, `None` is returned:
//! ```
//! # use euclidean_pathfinding::prelude::*;
//! let mut map = RoadMap::new();
//! map.add_intersection(0, (0.0, 0.0));
//! map.add_intersection(1, (5.0, 5.0));
//!
//! assert_eq!(shortest_path(&map, 0, 1), None);
//! ```
//!
//! ### Costs and Configuration
//! [`shortest_path`] only returns the Intersections along the Route. To also get the total Length
//! of the Route, use a [`PathFinder`]:
//! ```
//! # use euclidean_pathfinding::prelude::*;
//! # let mut map = RoadMap::new();
//! # map.add_intersection(0, (0.0, 0.0));
//! # map.add_intersection(1, (0.0, 1.0));
//! # map.add_intersection(2, (1.0, 1.0));
//! # map.add_road(0, 1);
//! # map.add_road(1, 2);
//! let finder = PathFinder::new(&map, PathFinderConfig::default());
//!
//! let path = finder.shortest_path(0, 2).unwrap();
//!
//! assert_eq!(path.cost(), 2.0);
//! assert_eq!(&format!("{}", path), "Path[Cost = 2]: 0 -> 1 -> 2");
//! ```
//!
//! ### Invalid Input
//! Asking for a Route from or to an Intersection that does not exist is a mistake on the side of
//! the caller, and [`PathFinder::shortest_path`] panics in that case. If the Map comes from an
//! untrusted source, [`PathFinder::try_shortest_path`] reports those problems as a [`SearchError`]
//! instead:
//! ```
//! # use euclidean_pathfinding::prelude::*;
//! # let mut map = RoadMap::new();
//! # map.add_intersection(0, (0.0, 0.0));
//! let finder = PathFinder::new(&map, PathFinderConfig::STRICT);
//!
//! assert_eq!(finder.try_shortest_path(0, 7), Err(SearchError::UnknownNode(7)));
//! ```
//!
//! ## Crate Features
//! - `log`: trace every expansion of the search and log a summary of each query.
//! - `serde`: `Serialize` and `Deserialize` implementations for [`RoadMap`].

/// A shorthand for Points on the plane
pub type Point = (f64, f64);

/// a Type to represent the Cost (or Length) of a Route
pub type Cost = f64;

mod node_id;
pub use self::node_id::*;

mod heuristic;
pub use self::heuristic::distance;

mod error;
pub use self::error::SearchError;

pub mod graph;
pub use self::graph::{Graph, RoadMap};

mod path;
pub use self::path::Path;

mod path_finder;
pub use self::path_finder::{shortest_path, PathFinder, PathFinderConfig};

mod utils;

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        distance, shortest_path, Cost, Graph, NodeID, Path, PathFinder, PathFinderConfig, Point,
        RoadMap, SearchError,
    };
}
