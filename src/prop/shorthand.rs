//! Four-slot shorthand values.
//!
//! Box sides (margin, padding, border widths) and border radius corners
//! share the same collapsing rules: trailing slots that repeat an earlier
//! slot are dropped, so `1 2 1 2` renders as `1 2` and `1 1 1 1` as `1`.
//! [`Sides`] and [`Corners`] build the four slots from coarser groups
//! with per-slot overrides.
//!
//! ```
//! use styletree::prop::shorthand::Sides;
//!
//! let margin = Sides::new().vertical(0).horizontal("auto").shorthand()?;
//! assert_eq!(margin, "0 auto");
//! # Ok::<(), styletree::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::props::PropValue;

const SIDE_SLOTS: [&str; 4] = ["top", "right", "bottom", "left"];
const CORNER_SLOTS: [&str; 4] = ["top-left", "top-right", "bottom-right", "bottom-left"];

/// Drops trailing slots already implied by the CSS repetition rules.
fn normalize(values: &[PropValue]) -> &[PropValue] {
    if values.len() > 3 && values[3] != values[1] {
        &values[..4]
    } else if values.len() > 2 && values[2] != values[0] {
        &values[..3]
    } else if values.len() > 1 && values[1] != values[0] {
        &values[..2]
    } else {
        &values[..values.len().min(1)]
    }
}

fn join(values: &[PropValue]) -> String {
    values
        .iter()
        .map(PropValue::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn pair(x: String, y: String, separator: &str) -> String {
    if y.is_empty() || y == x {
        x
    } else {
        format!("{x}{separator}{y}")
    }
}

fn shorthand_list(
    target: &'static str,
    slot_names: [&'static str; 4],
    values: &[PropValue],
) -> Result<String> {
    if values.is_empty() {
        return Err(Error::InvalidShorthandInput {
            slot: slot_names[0],
            target,
        });
    }
    Ok(join(normalize(values)))
}

fn resolve_quad(
    target: &'static str,
    slot_names: [&'static str; 4],
    all: &Option<PropValue>,
    pairs: [&Option<PropValue>; 2],
    slots: [&Option<PropValue>; 4],
) -> Result<[PropValue; 4]> {
    // Opposite slots share a pair: index 0 and 2 the first, 1 and 3 the
    // second.
    let resolve_slot = |i: usize| -> Result<PropValue> {
        slots[i]
            .as_ref()
            .or(pairs[i % 2].as_ref())
            .or(all.as_ref())
            .cloned()
            .ok_or(Error::InvalidShorthandInput {
                slot: slot_names[i],
                target,
            })
    };
    Ok([
        resolve_slot(0)?,
        resolve_slot(1)?,
        resolve_slot(2)?,
        resolve_slot(3)?,
    ])
}

/// Collapses an ordered `top right bottom left` list into its shortest
/// shorthand form.
pub fn sides(values: &[PropValue]) -> Result<String> {
    shorthand_list("sides", SIDE_SLOTS, values)
}

/// Collapses an ordered `top-left top-right bottom-right bottom-left` list
/// into its shortest shorthand form.
pub fn corners(values: &[PropValue]) -> Result<String> {
    shorthand_list("corners", CORNER_SLOTS, values)
}

/// Joins horizontal and vertical radii with ` / `, collapsing when the
/// vertical radii repeat the horizontal ones.
pub fn corners_elliptical(horizontal: &[PropValue], vertical: &[PropValue]) -> Result<String> {
    Ok(pair(corners(horizontal)?, corners(vertical)?, " / "))
}

/// Two-part value such as a background position. The second part is
/// dropped when empty or equal to the first.
pub fn xy(x: impl Into<PropValue>, y: impl Into<PropValue>) -> String {
    pair(x.into().to_string(), y.into().to_string(), " ")
}

/// Builds a box-side shorthand from groups of sides.
///
/// `top`/`right`/`bottom`/`left` override `vertical`/`horizontal`, which
/// override `all`. Every slot must be covered by the time [`shorthand`]
/// is called.
///
/// [`shorthand`]: Sides::shorthand
#[derive(Debug, Clone, Default)]
pub struct Sides {
    all: Option<PropValue>,
    vertical: Option<PropValue>,
    horizontal: Option<PropValue>,
    top: Option<PropValue>,
    right: Option<PropValue>,
    bottom: Option<PropValue>,
    left: Option<PropValue>,
}

impl Sides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(mut self, value: impl Into<PropValue>) -> Self {
        self.all = Some(value.into());
        self
    }

    pub fn vertical(mut self, value: impl Into<PropValue>) -> Self {
        self.vertical = Some(value.into());
        self
    }

    pub fn horizontal(mut self, value: impl Into<PropValue>) -> Self {
        self.horizontal = Some(value.into());
        self
    }

    pub fn top(mut self, value: impl Into<PropValue>) -> Self {
        self.top = Some(value.into());
        self
    }

    pub fn right(mut self, value: impl Into<PropValue>) -> Self {
        self.right = Some(value.into());
        self
    }

    pub fn bottom(mut self, value: impl Into<PropValue>) -> Self {
        self.bottom = Some(value.into());
        self
    }

    pub fn left(mut self, value: impl Into<PropValue>) -> Self {
        self.left = Some(value.into());
        self
    }

    pub fn shorthand(&self) -> Result<String> {
        let resolved = resolve_quad(
            "sides",
            SIDE_SLOTS,
            &self.all,
            [&self.vertical, &self.horizontal],
            [&self.top, &self.right, &self.bottom, &self.left],
        )?;
        Ok(join(normalize(&resolved)))
    }
}

/// Builds a border-radius shorthand from groups of corners.
///
/// Diagonally opposite corners pair up, so `top_left_and_bottom_right`
/// covers two slots the way `vertical` does for [`Sides`].
#[derive(Debug, Clone, Default)]
pub struct Corners {
    all: Option<PropValue>,
    top_left_and_bottom_right: Option<PropValue>,
    top_right_and_bottom_left: Option<PropValue>,
    top_left: Option<PropValue>,
    top_right: Option<PropValue>,
    bottom_right: Option<PropValue>,
    bottom_left: Option<PropValue>,
}

impl Corners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(mut self, value: impl Into<PropValue>) -> Self {
        self.all = Some(value.into());
        self
    }

    pub fn top_left_and_bottom_right(mut self, value: impl Into<PropValue>) -> Self {
        self.top_left_and_bottom_right = Some(value.into());
        self
    }

    pub fn top_right_and_bottom_left(mut self, value: impl Into<PropValue>) -> Self {
        self.top_right_and_bottom_left = Some(value.into());
        self
    }

    pub fn top_left(mut self, value: impl Into<PropValue>) -> Self {
        self.top_left = Some(value.into());
        self
    }

    pub fn top_right(mut self, value: impl Into<PropValue>) -> Self {
        self.top_right = Some(value.into());
        self
    }

    pub fn bottom_right(mut self, value: impl Into<PropValue>) -> Self {
        self.bottom_right = Some(value.into());
        self
    }

    pub fn bottom_left(mut self, value: impl Into<PropValue>) -> Self {
        self.bottom_left = Some(value.into());
        self
    }

    pub fn shorthand(&self) -> Result<String> {
        let resolved = resolve_quad(
            "corners",
            CORNER_SLOTS,
            &self.all,
            [
                &self.top_left_and_bottom_right,
                &self.top_right_and_bottom_left,
            ],
            [
                &self.top_left,
                &self.top_right,
                &self.bottom_right,
                &self.bottom_left,
            ],
        )?;
        Ok(join(normalize(&resolved)))
    }

    /// Renders `horizontal / vertical` radii, collapsing when both sets
    /// match.
    pub fn elliptical(&self, vertical: &Corners) -> Result<String> {
        Ok(pair(self.shorthand()?, vertical.shorthand()?, " / "))
    }
}
