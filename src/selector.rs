//! Selector fragment builders.
//!
//! Plain string builders for combinators, attribute selectors and
//! pseudo-classes, meant to be composed into the literal selectors of
//! nested rules. The [`this`] submodule builds parent-mapping specs
//! instead: fragments attached to the parent selector itself rather than
//! nested beneath it. Nothing here validates CSS, fragments are assembled
//! by plain concatenation.

use std::fmt::Display;

use crate::context::SelectorSpec;

// combinators
pub fn descendant(selector: &str) -> String {
    format!(">>{selector}")
}

pub fn child(selector: &str) -> String {
    format!(">{selector}")
}

pub fn next_sibling(selector: &str) -> String {
    format!("+{selector}")
}

pub fn following_sibling(selector: &str) -> String {
    format!("~{selector}")
}

// grid-structural selectors
pub fn column(selector: &str) -> String {
    format!("||{selector}")
}

pub fn nth_column(n: impl Display) -> String {
    format!(":nth-column({n})")
}

pub fn nth_last_column(n: impl Display) -> String {
    format!(":nth-last-column({n})")
}

// attribute selectors
pub fn attr(name: &str) -> String {
    format!("[{name}]")
}

/// Attribute selector with an explicit operator. The value is quoted and
/// escaped; `ignore_case` appends the `i` flag.
pub fn attr_op(name: &str, op: &str, value: &str, ignore_case: bool) -> String {
    let flag = if ignore_case { " i" } else { "" };
    format!("[{name}{op}{value:?}{flag}]")
}

pub fn attr_equals(name: &str, value: &str) -> String {
    attr_op(name, "=", value, false)
}

pub fn attr_contains(name: &str, value: &str) -> String {
    attr_op(name, "*=", value, false)
}

pub fn attr_contains_word(name: &str, value: &str) -> String {
    attr_op(name, "~=", value, false)
}

pub fn attr_contains_prefix(name: &str, value: &str) -> String {
    attr_op(name, "|=", value, false)
}

pub fn attr_starts_with(name: &str, value: &str) -> String {
    attr_op(name, "^=", value, false)
}

pub fn attr_ends_with(name: &str, value: &str) -> String {
    attr_op(name, "$=", value, false)
}

// pseudo-elements
pub const BEFORE: &str = "::before";
pub const AFTER: &str = "::after";
pub const FIRST_LINE: &str = "::first-line";
pub const FIRST_LETTER: &str = "::first-letter";

// logical combinations
pub fn not(selectors: &str) -> String {
    format!(":not({selectors})")
}

pub fn matches(selectors: &str) -> String {
    format!(":matches({selectors})")
}

pub fn has(selectors: &str) -> String {
    format!(":has({selectors})")
}

// location pseudo-classes
pub const ANY_LINK: &str = ":any-link";
pub const LINK: &str = ":link";
pub const VISITED: &str = ":visited";
pub const LOCAL_LINK: &str = ":local-link";
pub const TARGET: &str = ":target";
pub const SCOPE: &str = ":scope";

// user action pseudo-classes
pub const HOVER: &str = ":hover";
pub const ACTIVE: &str = ":active";
pub const FOCUS: &str = ":focus";

pub fn drop(filters: &[&str]) -> String {
    format!(":drop({})", filters.join(" "))
}

// time-dimensional pseudo-classes
pub const CURRENT: &str = ":current";
pub const PAST: &str = ":past";
pub const FUTURE: &str = ":future";

pub fn current_matches(selectors: &str) -> String {
    format!(":current({selectors})")
}

// linguistic pseudo-classes
pub fn dir(direction: &str) -> String {
    format!(":dir({direction})")
}

pub fn lang(ranges: &[&str]) -> String {
    format!(":lang({})", ranges.join(","))
}

// input pseudo-classes
pub const ENABLED: &str = ":enabled";
pub const DISABLED: &str = ":disabled";
pub const READ_WRITE: &str = ":read-write";
pub const READ_ONLY: &str = ":read-only";
pub const PLACEHOLDER_SHOWN: &str = ":placeholder-shown";
pub const DEFAULT_OPTION: &str = ":default";
pub const CHECKED: &str = ":checked";
pub const INDETERMINATE: &str = ":indeterminate";
pub const VALID: &str = ":valid";
pub const INVALID: &str = ":invalid";
pub const IN_RANGE: &str = ":in-range";
pub const OUT_OF_RANGE: &str = ":out-of-range";
pub const REQUIRED: &str = ":required";
pub const OPTIONAL: &str = ":optional";
pub const USER_ERROR: &str = ":user-error";

// tree-structural pseudo-classes
pub const EMPTY: &str = ":empty";
pub const BLANK: &str = ":blank";
pub const FIRST_CHILD: &str = ":first-child";
pub const LAST_CHILD: &str = ":last-child";
pub const ONLY_CHILD: &str = ":only-child";
pub const FIRST_OF_TYPE: &str = ":first-of-type";
pub const LAST_OF_TYPE: &str = ":last-of-type";
pub const ONLY_OF_TYPE: &str = ":only-of-type";

pub fn nth_child(n: impl Display) -> String {
    format!(":nth-child({n})")
}

/// `:nth-child(n of selectors)`.
pub fn nth_child_of(n: impl Display, selectors: &str) -> String {
    format!(":nth-child({n} of {selectors})")
}

pub fn nth_last_child(n: impl Display) -> String {
    format!(":nth-last-child({n})")
}

pub fn nth_last_child_of(n: impl Display, selectors: &str) -> String {
    format!(":nth-last-child({n} of {selectors})")
}

pub fn nth_of_type(n: impl Display) -> String {
    format!(":nth-of-type({n})")
}

pub fn nth_last_of_type(n: impl Display) -> String {
    format!(":nth-last-of-type({n})")
}

pub fn nth_match(n: impl Display, selectors: &str) -> String {
    format!(":nth-match({n} of {selectors})")
}

pub fn nth_last_match(n: impl Display, selectors: &str) -> String {
    format!(":nth-last-match({n} of {selectors})")
}

/// Parent-mapping selector specs.
///
/// Where the fragment builders above produce strings for literal nesting,
/// these return specs for [`crate::Decl::nest`] that rewrite the parent
/// selector itself: `this::append(selector::HOVER)` turns `.foo` into
/// `.foo:hover` instead of nesting a descendant.
pub mod this {
    use super::*;

    /// `{parent}{fragment}`
    pub fn append(fragment: impl Into<String>) -> SelectorSpec {
        let fragment = fragment.into();
        SelectorSpec::map(move |parent: &str| format!("{parent}{fragment}"))
    }

    /// `{fragment}{parent}`
    pub fn prepend(fragment: impl Into<String>) -> SelectorSpec {
        let fragment = fragment.into();
        SelectorSpec::map(move |parent: &str| format!("{fragment}{parent}"))
    }

    /// `{before}{parent}{after}`
    pub fn surround(before: impl Into<String>, after: impl Into<String>) -> SelectorSpec {
        let before = before.into();
        let after = after.into();
        SelectorSpec::map(move |parent: &str| format!("{before}{parent}{after}"))
    }

    /// `:not({parent})`
    pub fn not_self() -> SelectorSpec {
        SelectorSpec::map(|parent: &str| not(parent))
    }

    /// `:matches({parent})`
    pub fn matches_self() -> SelectorSpec {
        SelectorSpec::map(|parent: &str| matches(parent))
    }

    /// `:has({parent})`
    pub fn has_self() -> SelectorSpec {
        SelectorSpec::map(|parent: &str| has(parent))
    }

    /// `:current({parent})`
    pub fn current_of_self() -> SelectorSpec {
        SelectorSpec::map(|parent: &str| current_matches(parent))
    }

    /// `:nth-child(n of {parent})`
    pub fn nth_child_of_self(n: impl Display) -> SelectorSpec {
        let n = n.to_string();
        SelectorSpec::map(move |parent: &str| format!(":nth-child({n} of {parent})"))
    }

    /// `:nth-last-child(n of {parent})`
    pub fn nth_last_child_of_self(n: impl Display) -> SelectorSpec {
        let n = n.to_string();
        SelectorSpec::map(move |parent: &str| format!(":nth-last-child({n} of {parent})"))
    }

    /// `:nth-match(n of {parent})`
    pub fn nth_match_of_self(n: impl Display) -> SelectorSpec {
        let n = n.to_string();
        SelectorSpec::map(move |parent: &str| format!(":nth-match({n} of {parent})"))
    }

    /// `:nth-last-match(n of {parent})`
    pub fn nth_last_match_of_self(n: impl Display) -> SelectorSpec {
        let n = n.to_string();
        SelectorSpec::map(move |parent: &str| format!(":nth-last-match({n} of {parent})"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::context::resolve;

    #[test]
    fn test_combinator_fragments() {
        assert_eq!(child(".item"), ">.item");
        assert_eq!(next_sibling("li"), "+li");
        assert_eq!(following_sibling("p"), "~p");
        assert_eq!(descendant(".deep"), ">>.deep");
        assert_eq!(column(".col"), "||.col");
    }

    #[test]
    fn test_attribute_fragments() {
        assert_eq!(attr("disabled"), "[disabled]");
        assert_eq!(attr_equals("type", "text"), "[type=\"text\"]");
        assert_eq!(attr_contains("href", "example"), "[href*=\"example\"]");
        assert_eq!(attr_starts_with("href", "https:"), "[href^=\"https:\"]");
        assert_eq!(attr_ends_with("src", ".png"), "[src$=\".png\"]");
        assert_eq!(
            attr_op("lang", "|=", "en", true),
            "[lang|=\"en\" i]",
        );
    }

    #[test]
    fn test_functional_pseudo_classes() {
        assert_eq!(not(".foo,.bar"), ":not(.foo,.bar)");
        assert_eq!(nth_child(3), ":nth-child(3)");
        assert_eq!(nth_child("2n+1"), ":nth-child(2n+1)");
        assert_eq!(nth_child_of("2n", ".item"), ":nth-child(2n of .item)");
        assert_eq!(lang(&["en", "de"]), ":lang(en,de)");
        assert_eq!(dir("rtl"), ":dir(rtl)");
        assert_eq!(drop(&["active", "valid"]), ":drop(active valid)");
    }

    #[test]
    fn test_this_specs_rewrite_the_parent() {
        let parents = vec![".foo".to_string(), ".bar".to_string()];

        assert_eq!(
            resolve(&this::append(HOVER), Some(&parents)),
            vec![".foo:hover", ".bar:hover"],
        );
        assert_eq!(
            resolve(&this::prepend("body "), Some(&parents)),
            vec!["body .foo", "body .bar"],
        );
        assert_eq!(
            resolve(&this::not_self(), Some(&parents)),
            vec![":not(.foo)", ":not(.bar)"],
        );
        assert_eq!(
            resolve(&this::nth_child_of_self("2n"), Some(&parents)),
            vec![":nth-child(2n of .foo)", ":nth-child(2n of .bar)"],
        );
        assert_eq!(
            resolve(&this::surround(":is(", ")"), Some(&parents)),
            vec![":is(.foo)", ":is(.bar)"],
        );
    }
}
