use crate::graph::node::NodeIndex;

/// Edge weights are 32-bit so that summed path costs fit in `Cost`.
pub type Weight = i32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

pub struct Edge {
    from: NodeIndex,
    to: NodeIndex,
    weight: Weight,
}

impl Edge {
    pub fn new(from: NodeIndex, to: NodeIndex, weight: Weight) -> Self {
        Self {
            from,
            to,
            weight,
        }
    }

    pub fn from(&self) -> NodeIndex {
        self.from
    }

    pub fn to(&self) -> NodeIndex {
        self.to
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub(crate) fn set_weight(&mut self, weight: Weight) {
        self.weight = weight;
    }
}
