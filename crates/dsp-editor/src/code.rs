//! Code panel buffer.
//!
//! A plain text buffer next to the canvas. It is never parsed or executed.

pub const DEFAULT_TEMPLATE: &str = "// Write your code here
// Example:
let arr = [1, 2, 3];
arr.push(4);
console.log(arr);";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBuffer {
    text: String,
    /// The panel starts collapsed.
    expanded: bool,
}

impl Default for CodeBuffer {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEMPLATE.to_string(),
            expanded: false,
        }
    }
}

impl CodeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Restore the template.
    pub fn reset(&mut self) {
        self.text = DEFAULT_TEMPLATE.to_string();
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle_expanded(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }
}
