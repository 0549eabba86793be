pub mod types;

use types::{Markers, Node};

/// Split `text` into help nodes without copying or modifying it.
pub fn nodes<'a>(text: &'a str, markers: &Markers) -> Nodes<'a> {
    Nodes {
        text,
        pos: 0,
        line: 1,
        markers: *markers,
    }
}

/// Iterator over the nodes of a document. Each node is a slice of the
/// original text, so lines merged into one node keep their separators.
#[derive(Debug, Clone)]
pub struct Nodes<'a> {
    text: &'a str,
    /// Byte offset of the next unread line.
    pos: usize,
    /// Line number of the next unread line.
    line: usize,
    markers: Markers,
}

impl Nodes<'_> {
    /// Returns `(line_end, next_line_start)` for the line starting at `pos`.
    fn line_bounds(&self, pos: usize) -> (usize, usize) {
        match self.text[pos..].find('\n') {
            Some(i) => (pos + i, pos + i + 1),
            None => (self.text.len(), self.text.len()),
        }
    }

    fn opens_node(&self, line: &str) -> bool {
        match self.markers.start {
            Some(marker) => line.starts_with(marker),
            None => true,
        }
    }

    /// Extend the open node with following lines that do not start a node.
    /// Blank lines in between are kept; blank lines after the last
    /// continuation line are left for the next call to skip.
    fn absorb_continuation(&mut self, mut end: usize) -> usize {
        let mut probe = self.pos;
        let mut probe_line = self.line;
        while probe < self.text.len() {
            let (line_end, next) = self.line_bounds(probe);
            let line = &self.text[probe..line_end];
            if line.is_empty() {
                probe = next;
                probe_line += 1;
                continue;
            }
            if self.opens_node(line) {
                break;
            }
            end = line_end;
            probe = next;
            probe_line += 1;
            self.pos = probe;
            self.line = probe_line;
        }
        end
    }
}

impl<'a> Iterator for Nodes<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Node<'a>> {
        // Empty lines never open a node.
        let (mut start, line_end) = loop {
            if self.pos >= self.text.len() {
                return None;
            }
            let (line_end, next) = self.line_bounds(self.pos);
            if line_end > self.pos {
                break (self.pos, line_end);
            }
            self.pos = next;
            self.line += 1;
        };

        let first_line = self.line;
        let (_, next) = self.line_bounds(start);
        self.pos = next;
        self.line += 1;

        let mut end = line_end;
        if let Some(marker) = self.markers.start {
            if self.text[start..line_end].starts_with(marker) {
                start += marker.len_utf8();
            }
            end = self.absorb_continuation(end);
        }

        let text = &self.text[start..end];
        Some(Node {
            text,
            depth: self.markers.depth_of(text),
            line: first_line,
        })
    }
}
