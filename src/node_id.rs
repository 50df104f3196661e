//! Utilities for working with NodeIDs

/// The Type used to reference an Intersection in a [`Graph`](crate::Graph)
pub type NodeID = u32;

/// A specialized [`HashMap`](hashbrown::HashMap) for NodeIDs with a faster Hasher
pub type NodeIDMap<V> = hashbrown::HashMap<NodeID, V, BuildNodeIDHasher>;
/// A specialized [`HashSet`](hashbrown::HashSet) for NodeIDs with a faster Hasher
pub type NodeIDSet = hashbrown::HashSet<NodeID, BuildNodeIDHasher>;

/// A [`BuildHasher`](std::hash::BuildHasher) specialized on NodeIDs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildNodeIDHasher;

/// A [`Hasher`](std::hash::Hasher) specialized on NodeIDs
///
/// The id is spread over all 64 bits with a single multiplication, since hashbrown
/// uses the topmost bits of a hash to group its entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeIDHasher(u64);

const SPREAD: u64 = 0x9E37_79B9_7F4A_7C15;

impl std::hash::BuildHasher for BuildNodeIDHasher {
    type Hasher = NodeIDHasher;
    fn build_hasher(&self) -> NodeIDHasher {
        NodeIDHasher(0)
    }
}
impl std::hash::Hasher for NodeIDHasher {
    /// panics, since only NodeIDs are supposed to be used
    fn write(&mut self, _: &[u8]) {
        unreachable!("This Hasher only works with NodeIDs")
    }
    /// Writes a single NodeID into this hasher.
    fn write_u32(&mut self, id: NodeID) {
        self.0 = u64::from(id).wrapping_mul(SPREAD);
    }
    fn finish(&self) -> u64 {
        self.0
    }
}

/// create a new [`NodeIDMap`] with room for at least `capacity` entries
pub fn node_id_map_with_cap<V>(capacity: usize) -> NodeIDMap<V> {
    NodeIDMap::with_capacity_and_hasher(capacity, BuildNodeIDHasher)
}
/// create a new [`NodeIDSet`] with room for at least `capacity` entries
pub fn node_id_set_with_cap(capacity: usize) -> NodeIDSet {
    NodeIDSet::with_capacity_and_hasher(capacity, BuildNodeIDHasher)
}
