//! Per-call search storage: a node arena with parent links, and flat
//! per-cell maps.

use gridsearch_core::{Bounds, Cell, Move, Path};

/// Parent index of a root node.
pub(crate) const ROOT: usize = usize::MAX;

/// One frontier entry: the cell it reached, how, and from where.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Node {
    pub(crate) cell: Cell,
    pub(crate) parent: usize,
    pub(crate) via: Option<Move>,
    pub(crate) depth: usize,
}

/// Append-only node storage for one search call.
///
/// Frontiers hold indices into the arena; the path to any node is rebuilt by
/// following parent links back to the root.
#[derive(Debug, Default)]
pub(crate) struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(n),
        }
    }

    /// Push the root node for `cell` and return its index.
    pub(crate) fn root(&mut self, cell: Cell) -> usize {
        self.nodes.push(Node {
            cell,
            parent: ROOT,
            via: None,
            depth: 0,
        });
        self.nodes.len() - 1
    }

    /// Push a node reached from `parent` with `mv`, landing on `cell`.
    pub(crate) fn child(&mut self, parent: usize, mv: Move, cell: Cell) -> usize {
        let depth = self.nodes[parent].depth + 1;
        self.nodes.push(Node {
            cell,
            parent,
            via: Some(mv),
            depth,
        });
        self.nodes.len() - 1
    }

    #[inline]
    pub(crate) fn get(&self, idx: usize) -> Node {
        self.nodes[idx]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Moves leading from the root to node `idx`.
    pub(crate) fn path(&self, mut idx: usize) -> Path {
        let mut moves = Vec::with_capacity(self.nodes[idx].depth);
        while idx != ROOT {
            let node = self.nodes[idx];
            if let Some(mv) = node.via {
                moves.push(mv);
            }
            idx = node.parent;
        }
        moves.reverse();
        Path::from(moves)
    }
}

/// A value per grid cell, stored row-major.
#[derive(Debug, Clone)]
pub(crate) struct CellMap<T> {
    bounds: Bounds,
    data: Vec<T>,
}

impl<T: Clone> CellMap<T> {
    pub(crate) fn new(bounds: Bounds, fill: T) -> Self {
        Self {
            bounds,
            data: vec![fill; bounds.len()],
        }
    }
}

impl<T> CellMap<T> {
    #[inline]
    pub(crate) fn get(&self, c: Cell) -> Option<&T> {
        let i = self.bounds.index(c)?;
        Some(&self.data[i])
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, c: Cell) -> Option<&mut T> {
        let i = self.bounds.index(c)?;
        Some(&mut self.data[i])
    }
}

impl CellMap<bool> {
    /// Mark `c`, returning whether it was already marked. Out-of-bounds
    /// cells count as marked.
    #[inline]
    pub(crate) fn mark(&mut self, c: Cell) -> bool {
        match self.get_mut(c) {
            Some(v) => std::mem::replace(v, true),
            None => true,
        }
    }

    #[inline]
    pub(crate) fn is_marked(&self, c: Cell) -> bool {
        self.get(c).copied().unwrap_or(true)
    }
}
