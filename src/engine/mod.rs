mod ancestors;
mod buffer;

use tracing::{debug, warn};

use crate::error::{HelpError, Result};
use crate::parser::{self, types::Markers};
use crate::types::Outline;
use ancestors::AncestorStack;
use buffer::OutputBuffer;

/// Deepest nesting a help document may use is `MAX_DEPTH - 1`.
pub const MAX_DEPTH: usize = 16;

/// Return the part of `text` relevant to `keyword`: every node containing
/// it, all of that node's ancestors (each printed once), and everything
/// nested beneath it. An empty keyword returns the whole document.
pub fn filter_by_keyword(text: &str, keyword: &str, markers: &Markers) -> Result<String> {
    if keyword.is_empty() {
        let mut out = OutputBuffer::new();
        out.append(text)?;
        return Ok(out.into_string());
    }

    let mut stack = AncestorStack::new();
    let mut out = OutputBuffer::new();
    // Depth of the latest match while its descendants are still streaming by.
    let mut forced_above: Option<usize> = None;

    for node in parser::nodes(text, markers) {
        stack.open(&node).inspect_err(|e| warn!("{e}"))?;

        if forced_above.is_some_and(|d| d < node.depth) {
            debug!(line = node.line, depth = node.depth, "descendant of match");
            out.append_line(node.text)?;
            stack.mark_included(node.depth);
            continue;
        }

        forced_above = None;
        if !node.text.contains(keyword) {
            continue;
        }

        debug!(line = node.line, depth = node.depth, "keyword match");
        for slot in stack.chain_mut(node.depth) {
            if !slot.included {
                out.append_line(slot.text)?;
                slot.included = true;
            }
        }
        forced_above = Some(node.depth);
    }

    if out.is_empty() {
        return Err(HelpError::KeywordNotFound);
    }
    Ok(out.into_string())
}

/// Validate the nesting of every node in `text` and summarise its shape.
pub fn outline(text: &str, markers: &Markers) -> Result<Outline> {
    let mut stack = AncestorStack::new();
    let mut shape = Outline::default();

    for node in parser::nodes(text, markers) {
        stack.open(&node).inspect_err(|e| warn!("{e}"))?;
        shape.record(node.depth);
    }

    if shape.nodes == 0 {
        return Err(HelpError::Uninitialized);
    }
    Ok(shape)
}
