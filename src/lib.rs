//! Rule trees for generating CSS at authoring time.
//!
//! A [`Decl`] holds a bag of properties plus mixins, nested rules and
//! media rules. Exporting a tree against a selector context flattens it
//! into an ordered mapping from selectors (and `@media` queries) to
//! property bags, with rule order merged topologically so that every
//! contributor keeps its authored ordering.
//!
//! ```
//! use styletree::{props, selector, Decl};
//!
//! let button = Decl::with_props(props! {
//!     "color" => "white",
//!     "padding" => "8px 16px",
//! })
//! .nest(selector::this::append(selector::HOVER), props! {
//!     "color" => "silver",
//! });
//!
//! let export = button.export_at([".button"])?;
//! let keys: Vec<_> = export.keys().map(String::as_str).collect();
//! assert_eq!(keys, [".button", ".button:hover"]);
//! # Ok::<(), styletree::Error>(())
//! ```
//!
//! The flattened export is an [`indexmap::IndexMap`], so iteration order
//! is the output order. [`StyleSheet`] wraps a root [`Decl`] for the
//! common top-level case, [`selector`] builds selector fragments and
//! parent-mapping specs, and [`prop`] helps with dimension arithmetic and
//! shorthand values.

pub mod context;
pub mod decl;
pub mod error;
pub mod media;
pub mod merge;
pub mod prop;
pub mod props;
pub mod selector;
pub mod stylesheet;

pub use context::{resolve, Context, SelectorList, SelectorSpec};
pub use decl::{Decl, RuleBody};
pub use error::{Error, Result};
pub use media::{FeatureValue, Media, Modifier};
pub use merge::merge;
pub use props::{Export, ExportEntry, PropValue, Props, RuleSet};
pub use stylesheet::StyleSheet;
