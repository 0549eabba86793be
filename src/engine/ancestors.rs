use super::MAX_DEPTH;
use crate::error::{HelpError, Result};
use crate::parser::types::Node;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Slot<'a> {
    pub text: &'a str,
    pub included: bool,
}

/// The chain of open nodes, one per depth. Depth `d` is only ever occupied
/// while every depth below it is.
#[derive(Debug)]
pub(crate) struct AncestorStack<'a> {
    slots: [Option<Slot<'a>>; MAX_DEPTH],
}

impl<'a> AncestorStack<'a> {
    pub fn new() -> Self {
        Self {
            slots: [None; MAX_DEPTH],
        }
    }

    /// Make `node` the open node at its depth, closing any deeper subtree.
    pub fn open(&mut self, node: &Node<'a>) -> Result<()> {
        if node.depth >= MAX_DEPTH {
            return Err(HelpError::DepthExceeded {
                line: node.line,
                depth: node.depth,
            });
        }
        if let Some(missing) = (0..node.depth).find(|&d| self.slots[d].is_none()) {
            return Err(HelpError::Format {
                line: node.line,
                depth: node.depth,
                missing,
            });
        }

        self.slots[node.depth] = Some(Slot {
            text: node.text,
            included: false,
        });
        for slot in &mut self.slots[node.depth + 1..] {
            if slot.is_none() {
                break;
            }
            *slot = None;
        }
        Ok(())
    }

    /// Open nodes from the root down to `depth`, inclusive.
    pub fn chain_mut(&mut self, depth: usize) -> impl Iterator<Item = &mut Slot<'a>> {
        self.slots[..=depth].iter_mut().flatten()
    }

    pub fn mark_included(&mut self, depth: usize) {
        if let Some(slot) = self.slots[depth].as_mut() {
            slot.included = true;
        }
    }

    #[cfg(test)]
    fn occupied(&self) -> usize {
        self.slots.iter().take_while(|s| s.is_some()).count()
    }
}
