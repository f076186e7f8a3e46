//! Region bookkeeping: id allocation while carving, merging while connecting

#[cfg(not(feature = "std"))]
use crate::compat::*;

use super::cell::RegionId;

/// Hands out region ids in increasing order, starting at 0.
///
/// One allocator is threaded through room placement and maze carving so
/// every room and maze run gets a distinct id.
#[derive(Debug, Clone, Default)]
pub struct RegionAllocator {
    next: u32,
}

impl RegionAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new region and return its id
    pub fn start_region(&mut self) -> RegionId {
        let id = RegionId(self.next);
        self.next += 1;
        id
    }

    /// Number of regions handed out so far
    pub fn count(&self) -> usize {
        self.next as usize
    }
}

/// Disjoint sets of regions (union-find with path compression)
#[derive(Debug, Clone)]
pub struct RegionSets {
    parent: Vec<u32>,
}

impl RegionSets {
    /// Create `count` singleton sets, one per region id
    pub fn new(count: usize) -> Self {
        Self {
            parent: (0..count as u32).collect(),
        }
    }

    /// Representative region of the set containing `region`
    pub fn find(&mut self, region: RegionId) -> RegionId {
        let mut root = region.0;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        // Point every node on the path straight at the root
        let mut node = region.0;
        while self.parent[node as usize] != root {
            let next = self.parent[node as usize];
            self.parent[node as usize] = root;
            node = next;
        }
        RegionId(root)
    }

    /// Merge the set containing `source` into the set containing `dest`.
    ///
    /// The representative of `dest` stays the representative of the merged
    /// set. Returns false if both were already in the same set.
    pub fn union(&mut self, dest: RegionId, source: RegionId) -> bool {
        let dest_root = self.find(dest);
        let source_root = self.find(source);
        if dest_root == source_root {
            return false;
        }
        self.parent[source_root.index()] = dest_root.0;
        true
    }

    /// Resolve each region to its representative, sorted and deduplicated
    pub fn resolve(&mut self, regions: &[RegionId]) -> Vec<RegionId> {
        let mut roots: Vec<RegionId> = regions.iter().map(|&r| self.find(r)).collect();
        roots.sort_unstable();
        roots.dedup();
        roots
    }
}
