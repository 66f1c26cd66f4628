//! `Deserialize` impls for the value types.
//!
//! Values arrive as CSS text and go through the same `FromStr` parsers as
//! code does, so `"1px solid #000"` means the same thing in a JSON document
//! as in `"1px solid #000".parse::<Border>()`.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer, Visitor};

use super::{BackgroundImage, Border, Color, Unit};
use crate::Error;

/// Deserialize a string and parse it with `T::from_str`.
pub(crate) fn from_css_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = Error>,
{
    let text = String::deserialize(deserializer)?;
    text.parse().map_err(de::Error::custom)
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        from_css_str(deserializer)
    }
}

impl<'de> Deserialize<'de> for Border {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        from_css_str(deserializer)
    }
}

impl<'de> Deserialize<'de> for BackgroundImage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        from_css_str(deserializer)
    }
}

/// Accepts CSS text (`"12px"`) or a bare number, which is unitless.
struct UnitVisitor;

impl UnitVisitor {
    fn number<E: de::Error>(value: f64) -> Result<Unit, E> {
        let value = value as f32;
        if value.is_finite() {
            Ok(Unit::Number(value))
        } else {
            Err(E::custom(Error::invalid("Unit", &value.to_string())))
        }
    }
}

impl Visitor<'_> for UnitVisitor {
    type Value = Unit;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a CSS length, percentage, number or `auto`/`none`")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Unit, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Unit, E> {
        Self::number(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Unit, E> {
        Self::number(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Unit, E> {
        Self::number(v as f64)
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(UnitVisitor)
    }
}
