use crate::error::Result;

/// Growable output that reserves before it writes, so a failed append
/// leaves the buffer as it was.
#[derive(Debug, Default)]
pub(crate) struct OutputBuffer {
    text: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, text: &str) -> Result<()> {
        self.text.try_reserve(text.len())?;
        self.text.push_str(text);
        Ok(())
    }

    /// Append a node's text followed by a newline.
    pub fn append_line(&mut self, text: &str) -> Result<()> {
        self.text.try_reserve(text.len() + 1)?;
        self.text.push_str(text);
        self.text.push('\n');
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}
