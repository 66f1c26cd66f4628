//! Numeric values with a unit.

use std::str::FromStr;

use super::parse::{parse_all, parse_unit};
use super::{SlotValue, ToCss, ValueKind};
use crate::Error;

/// A number tagged with its CSS unit, or one of the keywords that may stand
/// in for a number.
///
/// The zero value of the type is the unitless number `0`. A unit slot holding
/// it counts as unset and is never emitted, so a literal unitless `0` cannot
/// be written through the typed schema (for `z-index: 0` and friends, use a
/// custom property). Zero *lengths* such as `Unit::Px(0.0)` are distinct
/// values and render as `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Unit {
    /// Unitless number (`line-height`, `flex-grow`, `opacity`, `z-index`).
    Number(f32),
    Px(f32),
    Em(f32),
    Rem(f32),
    Percent(f32),
    /// Percent of the viewport width.
    Vw(f32),
    /// Percent of the viewport height.
    Vh(f32),
    /// Width of the `0` glyph.
    Ch(f32),
    Deg(f32),
    Auto,
    None,
}

impl Default for Unit {
    fn default() -> Self {
        Unit::UNSET
    }
}

impl Unit {
    /// The unset value (unitless zero).
    pub const UNSET: Unit = Unit::Number(0.0);

    /// Check if this is the unset value.
    #[inline]
    pub fn is_unset(&self) -> bool {
        matches!(self, Unit::Number(v) if *v == 0.0)
    }

    /// The numeric part, if this is not a keyword.
    pub fn value(&self) -> Option<f32> {
        match *self {
            Unit::Number(v)
            | Unit::Px(v)
            | Unit::Em(v)
            | Unit::Rem(v)
            | Unit::Percent(v)
            | Unit::Vw(v)
            | Unit::Vh(v)
            | Unit::Ch(v)
            | Unit::Deg(v) => Some(v),
            Unit::Auto | Unit::None => None,
        }
    }

    /// The suffix written after the number.
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Px(_) => "px",
            Unit::Em(_) => "em",
            Unit::Rem(_) => "rem",
            Unit::Percent(_) => "%",
            Unit::Vw(_) => "vw",
            Unit::Vh(_) => "vh",
            Unit::Ch(_) => "ch",
            Unit::Deg(_) => "deg",
            Unit::Number(_) | Unit::Auto | Unit::None => "",
        }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.value().is_none_or(f32::is_finite)
    }
}

/// Write a number in its shortest decimal form (`16`, `1.5`, `0.25`).
pub(crate) fn write_number(buf: &mut String, value: f32) {
    if value == 0.0 {
        // Covers -0.0 as well
        buf.push('0');
    } else {
        buf.push_str(&value.to_string());
    }
}

impl ToCss for Unit {
    fn to_css(&self, buf: &mut String) {
        match *self {
            Unit::Auto => buf.push_str("auto"),
            Unit::None => buf.push_str("none"),
            // Percentages and angles keep their suffix at zero
            Unit::Number(v) | Unit::Percent(v) | Unit::Deg(v) => {
                write_number(buf, v);
                buf.push_str(self.suffix());
            }
            Unit::Px(v) | Unit::Em(v) | Unit::Rem(v) | Unit::Vw(v) | Unit::Vh(v) | Unit::Ch(v) => {
                write_number(buf, v);
                if v != 0.0 {
                    buf.push_str(self.suffix());
                }
            }
        }
    }
}

impl SlotValue for Unit {
    const KIND: ValueKind = ValueKind::Unit;

    fn as_set(&self) -> Option<&dyn ToCss> {
        if self.is_unset() || !self.is_finite() {
            None
        } else {
            Some(self as &dyn ToCss)
        }
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        parse_all("Unit", s, parse_unit)
    }
}
