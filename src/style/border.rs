//! The `border` composite value.

use std::str::FromStr;

use super::parse::{parse_all, parse_border};
use super::properties::BorderStyle;
use super::{Color, CssValue, ToCss, Unit, ValueKind};
use crate::Error;

/// Width, style and color written together as `<width> <style> <color>`.
///
/// A border has no unset form of its own: the slot holding it is an
/// `Option<Border>`, and `None` is what gets omitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub width: Unit,
    pub style: BorderStyle,
    pub color: Color,
}

impl Border {
    pub const fn new(width: Unit, style: BorderStyle, color: Color) -> Self {
        Self {
            width,
            style,
            color,
        }
    }

    /// A solid border, the most common case.
    pub const fn solid(width: Unit, color: Color) -> Self {
        Self::new(width, BorderStyle::Solid, color)
    }
}

impl ToCss for Border {
    fn to_css(&self, buf: &mut String) {
        self.width.to_css(buf);
        buf.push(' ');
        self.style.to_css(buf);
        buf.push(' ');
        self.color.to_css(buf);
    }
}

impl CssValue for Border {
    const KIND: ValueKind = ValueKind::Border;

    fn is_finite(&self) -> bool {
        self.width.is_finite() && self.color.is_finite()
    }
}

impl FromStr for Border {
    type Err = Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        parse_all("Border", s, parse_border)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_to_css() {
        let border = Border::new(Unit::Px(1.0), BorderStyle::Solid, Color::BLACK);
        assert_eq!(border.to_css_string(), "1px solid #000");

        let dashed = Border::new(Unit::Rem(0.125), BorderStyle::Dashed, Color::Transparent);
        assert_eq!(dashed.to_css_string(), "0.125rem dashed transparent");
    }

    #[test]
    fn test_border_solid() {
        assert_eq!(
            Border::solid(Unit::Px(2.0), Color::hex(0xe2e8f0)),
            Border::new(Unit::Px(2.0), BorderStyle::Solid, Color::hex(0xe2e8f0))
        );
    }

    #[test]
    fn test_border_non_finite() {
        assert!(!Border::solid(Unit::Px(f32::NAN), Color::BLACK).is_finite());
        assert!(!Border::solid(Unit::Px(1.0), Color::Hsl(f32::INFINITY, 0.0, 0.0)).is_finite());
        assert!(Border::solid(Unit::Px(1.0), Color::BLACK).is_finite());
    }

    #[test]
    fn test_border_from_str() {
        assert_eq!(
            "1px solid #000".parse::<Border>().unwrap(),
            Border::solid(Unit::Px(1.0), Color::BLACK)
        );
        assert_eq!(
            "0 none currentColor".parse::<Border>().unwrap(),
            Border::new(Unit::Number(0.0), BorderStyle::None, Color::CurrentColor)
        );
    }

    #[test]
    fn test_border_from_str_rejects() {
        for input in ["1px solid", "solid 1px #000", "1px wavy #000", "1px solid #000 red"] {
            match input.parse::<Border>() {
                Err(Error::InvalidValue { property, .. }) => assert_eq!(property, "Border"),
                other => panic!("{input:?} should be rejected, got {other:?}"),
            }
        }
    }
}
