use std::ops::{Index, IndexMut};

/// The cheapest known path to a cell: its cumulative energy and the
/// position it came from in the previous layer.
#[derive(Default, Debug, Copy, Clone)]
pub(crate) struct Node {
    pub energy: f64,
    pub parent: u32,
}

/// Scratch space for one seam search: a `Node` for every
/// `(position, layer)`, laid out one layer after another.  It is
/// dropped as soon as the seam has been traced.
#[derive(Debug)]
pub(crate) struct SearchTable {
    positions: u32,
    layers: u32,
    nodes: Vec<Node>,
}

impl SearchTable {
    pub fn new(positions: u32, layers: u32) -> Self {
        SearchTable {
            positions,
            layers,
            nodes: vec![Node::default(); positions as usize * layers as usize],
        }
    }

    // Keep the index math in this one place.
    fn offset(&self, position: u32, layer: u32) -> usize {
        debug_assert!(position < self.positions && layer < self.layers);
        (layer as usize) * (self.positions as usize) + (position as usize)
    }
}

impl Index<(u32, u32)> for SearchTable {
    type Output = Node;

    fn index(&self, (position, layer): (u32, u32)) -> &Node {
        &self.nodes[self.offset(position, layer)]
    }
}

impl IndexMut<(u32, u32)> for SearchTable {
    fn index_mut(&mut self, (position, layer): (u32, u32)) -> &mut Node {
        let offset = self.offset(position, layer);
        &mut self.nodes[offset]
    }
}
