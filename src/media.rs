//! Media query descriptors.
//!
//! [`Media`] builds the query string used as a media bucket key. The
//! rendered form never carries the `@media ` prefix, the export step adds
//! it when the bucket surfaces in the final mapping.

use std::fmt;

use indexmap::IndexMap;

/// Feature names that take a default unit when given a bare nonzero
/// number. Device variants are deprecated in CSS4 but still authored.
const DEFAULT_FEATURE_UNITS: &[(&str, &str)] = &[
    ("width", "px"),
    ("min-width", "px"),
    ("max-width", "px"),
    ("height", "px"),
    ("min-height", "px"),
    ("max-height", "px"),
    ("device-width", "px"),
    ("min-device-width", "px"),
    ("max-device-width", "px"),
    ("device-height", "px"),
    ("min-device-height", "px"),
    ("max-device-height", "px"),
];

fn default_unit(name: &str) -> Option<&'static str> {
    DEFAULT_FEATURE_UNITS
        .iter()
        .find(|(feature, _)| *feature == name)
        .map(|(_, unit)| *unit)
}

/// `not` / `only` media query modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Not,
    Only,
}

impl Modifier {
    fn as_str(self) -> &'static str {
        match self {
            Modifier::Not => "not",
            Modifier::Only => "only",
        }
    }
}

/// A media feature value.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    /// `true` renders the bare `(name)` form, `false` drops the feature.
    Bool(bool),
    Number(f64),
    Text(String),
}

/// Builder for a media query.
///
/// ```
/// use styletree::Media;
///
/// let media = Media::new().media_type("screen").feature("minWidth", "800px");
/// assert_eq!(media.to_string(), "screen and (min-width: 800px)");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Media {
    modifier: Option<Modifier>,
    media_type: Option<String>,
    features: IndexMap<String, FeatureValue>,
}

impl Media {
    pub fn new() -> Self {
        Media::default()
    }

    /// Negates the query (`not <type>`).
    pub fn not(mut self) -> Self {
        self.modifier = Some(Modifier::Not);
        self
    }

    /// Restricts the query to media-query-aware user agents (`only <type>`).
    pub fn only(mut self) -> Self {
        self.modifier = Some(Modifier::Only);
        self
    }

    /// Sets the media type. Without a modifier the default type `all` is
    /// left out of the rendered query.
    pub fn media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// Adds a feature term. camelCase names render in kebab-case, and bare
    /// nonzero numbers of dimension features pick up their default unit.
    pub fn feature(mut self, name: impl Into<String>, value: impl Into<FeatureValue>) -> Self {
        self.features.insert(name.into(), value.into());
        self
    }
}

impl fmt::Display for Media {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms: Vec<String> = Vec::new();

        let media_type = self.media_type.as_deref().unwrap_or("all");
        if let Some(modifier) = self.modifier {
            terms.push(format!("{} {}", modifier.as_str(), media_type));
        } else if media_type != "all" {
            terms.push(media_type.to_owned());
        }

        for (name, value) in &self.features {
            let name = kebab_case(name);
            match value {
                FeatureValue::Bool(true) => terms.push(format!("({name})")),
                FeatureValue::Bool(false) => {}
                FeatureValue::Number(n) => {
                    let unit = if *n == 0.0 {
                        ""
                    } else {
                        default_unit(&name).unwrap_or("")
                    };
                    terms.push(format!("({name}: {n}{unit})"));
                }
                FeatureValue::Text(text) => terms.push(format!("({name}: {text})")),
            }
        }

        f.write_str(&terms.join(" and "))
    }
}

impl From<Media> for String {
    fn from(media: Media) -> Self {
        media.to_string()
    }
}

fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

impl From<bool> for FeatureValue {
    fn from(value: bool) -> Self {
        FeatureValue::Bool(value)
    }
}

impl From<f64> for FeatureValue {
    fn from(value: f64) -> Self {
        FeatureValue::Number(value)
    }
}

impl From<i32> for FeatureValue {
    fn from(value: i32) -> Self {
        FeatureValue::Number(value.into())
    }
}

impl From<&str> for FeatureValue {
    fn from(value: &str) -> Self {
        FeatureValue::Text(value.to_owned())
    }
}

impl From<String> for FeatureValue {
    fn from(value: String) -> Self {
        FeatureValue::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_media_renders_empty_string() {
        assert_eq!(Media::new().to_string(), "");
    }

    #[test]
    fn test_renders_media_type() {
        assert_eq!(Media::new().media_type("screen").to_string(), "screen");
    }

    #[test]
    fn test_leaves_out_media_type_all() {
        assert_eq!(Media::new().media_type("all").to_string(), "");
    }

    #[test]
    fn test_renders_features() {
        let media = Media::new().feature("orientation", "landscape");
        assert_eq!(media.to_string(), "(orientation: landscape)");
    }

    #[test]
    fn test_renders_camel_case_features_in_kebab_case() {
        let media = Media::new().feature("minWidth", "800px");
        assert_eq!(media.to_string(), "(min-width: 800px)");
    }

    #[test]
    fn test_adds_default_unit_to_bare_numbers() {
        let media = Media::new().feature("height", 600);
        assert_eq!(media.to_string(), "(height: 600px)");
    }

    #[test]
    fn test_zero_never_takes_a_unit() {
        let media = Media::new().feature("height", 0);
        assert_eq!(media.to_string(), "(height: 0)");
    }

    #[test]
    fn test_text_values_never_take_a_unit() {
        let media = Media::new().feature("width", "50em");
        assert_eq!(media.to_string(), "(width: 50em)");
    }

    #[test]
    fn test_boolean_features() {
        let media = Media::new().feature("color", true).feature("grid", false);
        assert_eq!(media.to_string(), "(color)");
    }

    #[test]
    fn test_modifier_forces_media_type() {
        let media = Media::new().not().media_type("screen");
        assert_eq!(media.to_string(), "not screen");
    }

    #[test]
    fn test_modifier_without_media_type_renders_all() {
        assert_eq!(Media::new().only().to_string(), "only all");
    }

    #[test]
    fn test_terms_join_with_and() {
        let media = Media::new()
            .media_type("screen")
            .feature("minWidth", 320)
            .feature("orientation", "portrait");
        assert_eq!(
            media.to_string(),
            "screen and (min-width: 320px) and (orientation: portrait)",
        );
    }

    #[test]
    fn test_converts_into_bucket_key() {
        let key: String = Media::new().media_type("print").into();
        assert_eq!(key, "print");
    }
}
