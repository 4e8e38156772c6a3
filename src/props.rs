//! Core value types of the export mapping.

use std::fmt;

use indexmap::IndexMap;

/// A single property value. Values are opaque to the engine: they are
/// stored, compared and rendered, never interpreted.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Number(f64),
    Text(String),
}

/// One bag of CSS properties in authored order.
pub type Props = IndexMap<String, PropValue>;

/// Selector key to property bag, in cascade order.
pub type RuleSet = IndexMap<String, Props>;

/// The final export mapping. Default-bucket selectors come first, then one
/// `@media` entry per surviving media bucket.
pub type Export = IndexMap<String, ExportEntry>;

/// One value of the export mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportEntry {
    Rule(Props),
    Media(RuleSet),
}

impl ExportEntry {
    /// Property bag of a plain rule entry.
    pub fn props(&self) -> Option<&Props> {
        match self {
            ExportEntry::Rule(props) => Some(props),
            ExportEntry::Media(_) => None,
        }
    }

    /// Rule set of a media entry.
    pub fn rules(&self) -> Option<&RuleSet> {
        match self {
            ExportEntry::Rule(_) => None,
            ExportEntry::Media(rules) => Some(rules),
        }
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Number(n) => write!(f, "{n}"),
            PropValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}

impl From<i32> for PropValue {
    fn from(n: i32) -> Self {
        PropValue::Number(n.into())
    }
}

impl From<u32> for PropValue {
    fn from(n: u32) -> Self {
        PropValue::Number(n.into())
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Text(s.to_owned())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Text(s)
    }
}

/// Builds an ordered property bag.
///
/// ```
/// use styletree::props;
///
/// let bag = props! {
///     "font-size" => 16,
///     "line-height" => 1.5,
/// };
/// assert_eq!(bag.len(), 2);
/// ```
#[macro_export]
macro_rules! props {
    () => { $crate::props::Props::new() };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut bag = $crate::props::Props::new();
        $(
            bag.insert(
                ::std::string::String::from($name),
                $crate::props::PropValue::from($value),
            );
        )+
        bag
    }};
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_props_macro_keeps_authored_order() {
        let bag = crate::props! {
            "color" => "#333",
            "font-size" => 16,
            "line-height" => 1.5,
        };

        let keys: Vec<_> = bag.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["color", "font-size", "line-height"]);
        assert_eq!(bag["font-size"], PropValue::Number(16.0));
    }

    #[test]
    fn test_empty_props_macro() {
        assert!(crate::props! {}.is_empty());
    }

    #[test]
    fn test_prop_value_renders_like_authored() {
        assert_eq!(PropValue::Number(16.0).to_string(), "16");
        assert_eq!(PropValue::Number(1.5).to_string(), "1.5");
        assert_eq!(PropValue::Number(-15.0).to_string(), "-15");
        assert_eq!(PropValue::Text("border-box".into()).to_string(), "border-box");
    }
}
