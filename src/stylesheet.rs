use crate::context::SelectorSpec;
use crate::decl::{Decl, RuleBody};
use crate::error::Result;
use crate::props::Export;

/// A single-root convenience wrapper around [`Decl`].
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    root: Decl,
}

impl StyleSheet {
    pub fn new() -> Self {
        StyleSheet::default()
    }

    /// Adds a top-level rule.
    pub fn add_rule(mut self, selector: impl Into<SelectorSpec>, body: impl Into<RuleBody>) -> Self {
        self.root = self.root.nest(selector, body);
        self
    }

    /// Exports every added rule in authored order.
    pub fn export(&self) -> Result<Export> {
        self.root.export()
    }
}
