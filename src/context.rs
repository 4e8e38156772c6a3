//! Selector specs and the selector contexts they resolve into.
//!
//! A nested rule names its selectors either literally, in which case they
//! nest beneath every parent selector as descendants, or through a mapping
//! function that rewrites each parent selector (for pseudo-classes,
//! sibling variants and the like). Resolution is eager: a [`Context`]
//! always carries the final selector strings.

use std::fmt;
use std::sync::Arc;

/// Parent-mapping selector function. Receives one resolved parent selector
/// and returns any number of selectors derived from it.
pub type SelectorFn = dyn Fn(&str) -> Vec<String> + Send + Sync;

/// A normalized list of selector strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorList(pub Vec<String>);

/// The selector specification attached to a nested rule.
#[derive(Clone)]
pub enum SelectorSpec {
    /// Literal selectors, combined with the parent as descendants.
    Items(Vec<String>),
    /// A function applied to each parent selector in turn.
    Map(Arc<SelectorFn>),
}

impl SelectorSpec {
    /// Wraps a parent-mapping function. The function may return a single
    /// selector or a whole list.
    pub fn map<F, S>(f: F) -> Self
    where
        F: Fn(&str) -> S + Send + Sync + 'static,
        S: Into<SelectorList>,
    {
        SelectorSpec::Map(Arc::new(move |parent: &str| f(parent).into().0))
    }
}

impl fmt::Debug for SelectorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorSpec::Items(items) => f.debug_tuple("Items").field(items).finish(),
            SelectorSpec::Map(_) => f.write_str("Map(..)"),
        }
    }
}

/// Resolves a selector spec against an optional list of parent selectors.
///
/// With no parent, literal items resolve to themselves and a mapping spec
/// resolves to nothing, there is no selector to map over. With parents,
/// a mapping spec flat-maps over them in order while literal items produce
/// the full cross product in parent-major order. Duplicates are kept.
pub fn resolve(spec: &SelectorSpec, parents: Option<&[String]>) -> Vec<String> {
    let Some(parents) = parents else {
        return match spec {
            SelectorSpec::Items(items) => items.clone(),
            SelectorSpec::Map(_) => Vec::new(),
        };
    };

    match spec {
        SelectorSpec::Map(map) => {
            let map = &**map;
            parents
                .iter()
                .flat_map(|parent| map(parent.as_str()))
                .collect()
        }
        SelectorSpec::Items(items) => parents
            .iter()
            .flat_map(|parent| items.iter().map(move |item| format!("{parent} {item}")))
            .collect(),
    }
}

/// A fully resolved selector context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    selectors: Vec<String>,
}

impl Context {
    /// Root context from explicit selectors.
    pub fn root(selectors: impl Into<SelectorList>) -> Self {
        Context {
            selectors: selectors.into().0,
        }
    }

    /// Context of a spec resolved against an optional parent context.
    pub fn of(spec: &SelectorSpec, parent: Option<&Context>) -> Self {
        Context {
            selectors: resolve(spec, parent.map(|context| context.selectors.as_slice())),
        }
    }

    /// Child context of `self` for a nested selector spec.
    pub fn derive(&self, spec: &SelectorSpec) -> Self {
        Context::of(spec, Some(self))
    }

    /// The resolved selector strings in order.
    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    /// The rule key this context claims in the export mapping.
    pub fn key(&self) -> String {
        self.selectors.join(",")
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl From<&str> for SelectorList {
    fn from(selector: &str) -> Self {
        SelectorList(vec![selector.to_owned()])
    }
}

impl From<String> for SelectorList {
    fn from(selector: String) -> Self {
        SelectorList(vec![selector])
    }
}

impl From<Vec<String>> for SelectorList {
    fn from(selectors: Vec<String>) -> Self {
        SelectorList(selectors)
    }
}

impl From<Vec<&str>> for SelectorList {
    fn from(selectors: Vec<&str>) -> Self {
        SelectorList(selectors.into_iter().map(str::to_owned).collect())
    }
}

impl<const N: usize> From<[&str; N]> for SelectorList {
    fn from(selectors: [&str; N]) -> Self {
        SelectorList(selectors.into_iter().map(str::to_owned).collect())
    }
}

impl<const N: usize> From<[String; N]> for SelectorList {
    fn from(selectors: [String; N]) -> Self {
        SelectorList(selectors.into())
    }
}

impl From<&str> for SelectorSpec {
    fn from(selector: &str) -> Self {
        SelectorSpec::Items(vec![selector.to_owned()])
    }
}

impl From<String> for SelectorSpec {
    fn from(selector: String) -> Self {
        SelectorSpec::Items(vec![selector])
    }
}

impl From<Vec<String>> for SelectorSpec {
    fn from(selectors: Vec<String>) -> Self {
        SelectorSpec::Items(selectors)
    }
}

impl From<Vec<&str>> for SelectorSpec {
    fn from(selectors: Vec<&str>) -> Self {
        SelectorSpec::Items(selectors.into_iter().map(str::to_owned).collect())
    }
}

impl<const N: usize> From<[&str; N]> for SelectorSpec {
    fn from(selectors: [&str; N]) -> Self {
        SelectorSpec::Items(selectors.into_iter().map(str::to_owned).collect())
    }
}

impl From<SelectorList> for SelectorSpec {
    fn from(selectors: SelectorList) -> Self {
        SelectorSpec::Items(selectors.0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn test_resolves_single_selector_without_parent() {
        let spec = SelectorSpec::from(".foo");
        assert_eq!(resolve(&spec, None), strings(&[".foo"]));
    }

    #[test]
    fn test_resolves_all_selectors_without_parent() {
        let spec = SelectorSpec::from(vec![".a", ".b > .c", ".d .e"]);
        assert_eq!(resolve(&spec, None), strings(&[".a", ".b > .c", ".d .e"]));
    }

    #[test]
    fn test_mapping_spec_without_parent_resolves_to_nothing() {
        let spec = SelectorSpec::map(|parent: &str| format!("{parent}:hover"));
        assert_eq!(resolve(&spec, None), Vec::<String>::new());
    }

    #[test]
    fn test_concatenates_selector_with_parent() {
        let parents = strings(&[".a"]);
        let spec = SelectorSpec::from(".x");
        assert_eq!(resolve(&spec, Some(&parents)), strings(&[".a .x"]));
    }

    #[test]
    fn test_concatenates_each_selector_with_parent() {
        let parents = strings(&[".a"]);
        let spec = SelectorSpec::from(vec![".x", ".y"]);
        assert_eq!(resolve(&spec, Some(&parents)), strings(&[".a .x", ".a .y"]));
    }

    #[test]
    fn test_concatenates_selector_with_each_parent() {
        let parents = strings(&[".a", ".b"]);
        let spec = SelectorSpec::from(".x");
        assert_eq!(resolve(&spec, Some(&parents)), strings(&[".a .x", ".b .x"]));
    }

    #[test]
    fn test_cross_product_is_parent_major() {
        let parents = strings(&[".a", ".b"]);
        let spec = SelectorSpec::from(vec![".x", ".y"]);
        assert_eq!(
            resolve(&spec, Some(&parents)),
            strings(&[".a .x", ".a .y", ".b .x", ".b .y"]),
        );
    }

    #[test]
    fn test_mapping_spec_rewrites_each_parent() {
        let parents = strings(&[".a", ".b > .c", ".d .e"]);
        let spec = SelectorSpec::map(|parent: &str| format!("{parent}-x"));
        assert_eq!(
            resolve(&spec, Some(&parents)),
            strings(&[".a-x", ".b > .c-x", ".d .e-x"]),
        );
    }

    #[test]
    fn test_mapping_spec_may_return_several_selectors() {
        let parents = strings(&[".a", ".b > .c", ".d .e"]);
        let spec =
            SelectorSpec::map(|parent: &str| vec![format!("{parent}-x"), format!("{parent}-y")]);
        assert_eq!(
            resolve(&spec, Some(&parents)),
            strings(&[".a-x", ".a-y", ".b > .c-x", ".b > .c-y", ".d .e-x", ".d .e-y"]),
        );
    }

    #[test]
    fn test_contexts_compose_through_levels() {
        let root = Context::root([".a", ".b", ".c"]);
        let mapped = root.derive(&SelectorSpec::map(|parent: &str| format!("{parent}-d")));
        let leaf = mapped.derive(&SelectorSpec::from(vec![".e", ".f"]));
        assert_eq!(
            leaf.selectors(),
            strings(&[".a-d .e", ".a-d .f", ".b-d .e", ".b-d .f", ".c-d .e", ".c-d .f"]),
        );
    }

    #[test]
    fn test_key_joins_selectors_with_comma() {
        let context = Context::root(["*", "*::before", "*::after"]);
        assert_eq!(context.key(), "*,*::before,*::after");
        assert_eq!(context.to_string(), "*,*::before,*::after");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let parents = strings(&[".a", ".a"]);
        let spec = SelectorSpec::from(".x");
        assert_eq!(resolve(&spec, Some(&parents)), strings(&[".a .x", ".a .x"]));
    }
}
