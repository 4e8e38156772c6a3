use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

fn unit_label(unit: &Option<String>) -> String {
    match unit {
        Some(unit) => format!("\"{unit}\""),
        None => "no unit".to_owned(),
    }
}

/// Failures raised while exporting a rule tree or evaluating property
/// helpers. Every failure is terminal, the first one aborts the export.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A declaration carrying props or mixins was exported with no selector
    /// context to attach them to.
    #[error("declaration with {0} cannot be exported without a selector context")]
    MissingContext(&'static str),

    /// A media rule whose body is a plain property bag needs a selector
    /// context to attach the bag to.
    #[error("media rule with plain props cannot be exported without a selector context")]
    MissingContextForMedia,

    /// The same selector was produced twice within one rule group.
    #[error("rule already defined: {selector:?}")]
    DuplicateRule { selector: String },

    /// The same selector was produced twice within one media bucket of a
    /// rule group.
    #[error("rule already defined: {selector:?} [@media {media}]")]
    DuplicateMediaRule { selector: String, media: String },

    /// Media rules may not appear inside another media rule.
    #[error("media rules cannot be nested inside media rules")]
    UnsupportedMediaNesting,

    /// The collected rule order constraints contradict each other.
    #[error("rule order constraints cannot be satisfied")]
    UnsatisfiableOrder,

    /// A shorthand slot ended up with no value after fallback resolution.
    #[error("shorthand for {target} is missing a value for {slot:?}")]
    InvalidShorthandInput {
        slot: &'static str,
        target: &'static str,
    },

    /// Additive arithmetic over dimensions with differing units.
    #[error("incompatible units: {} and {}", unit_label(.left), unit_label(.right))]
    IncompatibleUnits {
        left: Option<String>,
        right: Option<String>,
    },

    /// A value that cannot be read as a dimension.
    #[error("{value:?} is not a valid value")]
    InvalidValue { value: String },
}
