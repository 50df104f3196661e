use crate::Cost;

/// A Route through a Graph
///
/// Stores the sequence of visited Nodes, including the Start and the Goal, and the total length
/// of driving along it.
///
/// ## Examples
/// ```
/// # use euclidean_pathfinding::Path;
/// let path = Path::new(vec![3, 1, 4], 2.5);
///
/// assert_eq!(path.len(), 3);
/// assert_eq!(path[0], 3);
/// assert_eq!(path.cost(), 2.5);
/// assert_eq!(path.into_nodes(), vec![3, 1, 4]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Path<P> {
    nodes: Vec<P>,
    cost: Cost,
}

impl<P> Path<P> {
    /// creates a new Path with the given sequence of Nodes and total Cost
    pub fn new(nodes: Vec<P>, cost: Cost) -> Path<P> {
        Path { nodes, cost }
    }

    /// The total length of the Route
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The first Node of the Path
    pub fn start(&self) -> Option<&P> {
        self.nodes.first()
    }

    /// The last Node of the Path
    pub fn goal(&self) -> Option<&P> {
        self.nodes.last()
    }

    /// Consumes the Path, leaving only the sequence of Nodes
    pub fn into_nodes(self) -> Vec<P> {
        self.nodes
    }
}

use std::ops::{Deref, Index};
use std::slice::SliceIndex;

impl<P, I: SliceIndex<[P]>> Index<I> for Path<P> {
    type Output = I::Output;
    fn index(&self, index: I) -> &I::Output {
        &self.nodes[index]
    }
}

impl<P> Deref for Path<P> {
    type Target = [P];
    fn deref(&self) -> &[P] {
        &self.nodes
    }
}

impl<P> IntoIterator for Path<P> {
    type Item = P;
    type IntoIter = std::vec::IntoIter<P>;
    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<P> From<Path<P>> for Vec<P> {
    fn from(path: Path<P>) -> Vec<P> {
        path.nodes
    }
}

use std::cmp::Ordering;

impl<P: PartialEq> PartialOrd for Path<P> {
    fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
        self.cost.partial_cmp(&other.cost)
    }
}

use std::fmt;
impl<P: fmt::Display> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        match self.nodes.split_first() {
            None => write!(fmt, "<empty>"),
            Some((first, rest)) => {
                write!(fmt, "{}", first)?;
                for p in rest {
                    write!(fmt, " -> {}", p)?;
                }
                Ok(())
            }
        }
    }
}
