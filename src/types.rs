use serde::Serialize;

/// Shape of a well-formed help document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Outline {
    pub nodes: usize,
    pub max_depth: usize,
    /// Number of nodes at each depth, indexed by depth.
    pub per_depth: Vec<usize>,
}

impl Outline {
    pub(crate) fn record(&mut self, depth: usize) {
        if self.per_depth.len() <= depth {
            self.per_depth.resize(depth + 1, 0);
        }
        self.per_depth[depth] += 1;
        self.nodes += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    pub fn deepest_level_count(&self) -> usize {
        self.per_depth.last().copied().unwrap_or(0)
    }
}
