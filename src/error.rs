use crate::{NodeID, Point};

/// Reasons why [`PathFinder::try_shortest_path`](crate::PathFinder::try_shortest_path) could not
/// search a Graph.
///
/// Note that an unreachable Goal is not an Error. That case is reported as `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// The Graph has no position for this NodeID, but it was used as the Start, the Goal or
    /// appeared in the Roads of an Intersection
    #[error("Intersection {0} does not exist in the Graph")]
    UnknownNode(NodeID),
    /// The position of an Intersection is NaN or infinite
    #[error("Intersection {id} has invalid coordinates {point:?}")]
    InvalidCoordinates {
        /// the offending Intersection
        id: NodeID,
        /// its position
        point: Point,
    },
}
