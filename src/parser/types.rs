/// Characters that give a help document its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    /// Counted anywhere in a node's text to get its depth.
    pub level: char,
    /// Prefix that opens a new node. `None` makes every line its own node.
    pub start: Option<char>,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            level: '\t',
            start: None,
        }
    }
}

impl Markers {
    pub fn depth_of(&self, text: &str) -> usize {
        text.chars().filter(|&c| c == self.level).count()
    }
}

/// One section of the help tree, borrowed from the document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node<'a> {
    pub text: &'a str,
    pub depth: usize,
    /// 1-based line of the node's first line.
    pub line: usize,
}
