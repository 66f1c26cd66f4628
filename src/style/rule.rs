//! Style rules: a selector, its typed properties and any custom ones.

use std::io;

use super::{Props, ToCss};
use crate::Result;

/// A property outside the typed schema, written verbatim as `attr:value;`.
///
/// Neither the name nor the value is validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct CustomProp {
    pub attr: String,
    pub value: String,
}

impl CustomProp {
    pub fn new(attr: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            attr: attr.into(),
            value: value.into(),
        }
    }
}

impl ToCss for CustomProp {
    fn to_css(&self, buf: &mut String) {
        buf.push_str(&self.attr);
        buf.push(':');
        buf.push_str(&self.value);
        buf.push(';');
    }
}

/// A CSS rule: the unit of rendering.
///
/// Renders as `selector{...}` with the set schema slots first (in schema
/// order) and the custom properties after them (in insertion order). A rule
/// with nothing to emit renders as nothing at all, not as `selector{}`.
///
/// # Example
///
/// ```
/// use stylekit::{Display, Props, Style, ToCss, Unit};
///
/// let style = Style::new(".stack", Props {
///     display: Some(Display::Flex),
///     gap: Unit::Rem(1.0),
///     ..Default::default()
/// });
/// assert_eq!(style.to_css_string(), ".stack{display:flex;gap:1rem;}");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "kebab-case", deny_unknown_fields)
)]
pub struct Style {
    /// Emitted verbatim; not validated.
    pub selector: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub props: Props,
    #[cfg_attr(feature = "serde", serde(default))]
    pub custom_props: Vec<CustomProp>,
}

impl Style {
    pub fn new(selector: impl Into<String>, props: Props) -> Self {
        Self {
            selector: selector.into(),
            props,
            custom_props: Vec::new(),
        }
    }

    /// Append a custom property.
    pub fn with_custom(mut self, attr: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_props.push(CustomProp::new(attr, value));
        self
    }

    /// Check if the rule renders to nothing.
    pub fn is_empty(&self) -> bool {
        self.props.is_empty() && self.custom_props.is_empty()
    }

    /// Render the rule and write it to `w` in one piece.
    ///
    /// Nothing is written for an empty rule. Errors from the sink are
    /// returned as `Error::Io`.
    pub fn write_css<W: io::Write>(&self, w: &mut W) -> Result<()> {
        let css = self.to_css_string();
        if !css.is_empty() {
            w.write_all(css.as_bytes())?;
        }
        Ok(())
    }
}

impl ToCss for Style {
    fn to_css(&self, buf: &mut String) {
        let start = buf.len();
        buf.push_str(&self.selector);
        buf.push('{');
        let body = buf.len();

        self.props.to_css(buf);
        for prop in &self.custom_props {
            prop.to_css(buf);
        }

        if buf.len() == body {
            buf.truncate(start);
        } else {
            buf.push('}');
        }
    }
}

#[cfg(test)]
#[allow(clippy::field_reassign_with_default)]
mod tests {
    use super::*;
    use crate::style::{AlignItems, Border, Color, Display, FontWeight, NamedColor, Unit};
    use proptest::prelude::*;

    fn badge() -> Style {
        let mut props = Props::default();
        props.padding_right = Unit::Px(12.0);
        props.padding_top = Unit::Px(4.0);
        props.font_weight = Some(FontWeight::SemiBold);
        props.border_radius = Unit::Px(9999.0);
        props.display = Some(Display::InlineFlex);
        Style::new(".badge", props)
    }

    #[test]
    fn test_empty_rule_emits_nothing() {
        let style = Style::new(".empty", Props::default());
        assert!(style.is_empty());
        assert_eq!(style.to_css_string(), "");

        // The buffer is left exactly as it was
        let mut buf = String::from("a{color:red;}");
        style.to_css(&mut buf);
        assert_eq!(buf, "a{color:red;}");
    }

    #[test]
    fn test_badge_rule() {
        assert_eq!(
            badge().to_css_string(),
            ".badge{display:inline-flex;border-radius:9999px;font-weight:600;padding-top:4px;padding-right:12px;}"
        );
    }

    #[test]
    fn test_border_rule() {
        let style = Style::new(
            "hr",
            Props {
                border: Some(Border::solid(Unit::Px(1.0), Color::BLACK)),
                ..Default::default()
            },
        );
        assert_eq!(style.to_css_string(), "hr{border:1px solid #000;}");
    }

    #[test]
    fn test_custom_props_only() {
        let style = Style::new("selector", Props::default()).with_custom("color", "red");
        assert!(!style.is_empty());
        assert_eq!(style.to_css_string(), "selector{color:red;}");
    }

    #[test]
    fn test_custom_props_follow_schema_props() {
        let style = Style::new(
            "a",
            Props {
                color: Some(Color::Named(NamedColor::Navy)),
                ..Default::default()
            },
        )
        .with_custom("-webkit-tap-highlight-color", "transparent")
        .with_custom("color", "red");
        assert_eq!(
            style.to_css_string(),
            "a{color:navy;-webkit-tap-highlight-color:transparent;color:red;}"
        );
    }

    #[test]
    fn test_non_finite_values_are_omitted() {
        let style = Style::new(
            ".x",
            Props {
                width: Unit::Px(f32::NAN),
                opacity: Unit::Number(f32::INFINITY),
                color: Some(Color::Hsl(f32::NAN, 0.0, 0.0)),
                border: Some(Border::solid(Unit::Px(f32::NEG_INFINITY), Color::BLACK)),
                ..Default::default()
            },
        );
        assert!(style.props.is_empty());
        assert_eq!(style.to_css_string(), "");

        let style = Style::new(
            ".x",
            Props {
                width: Unit::Px(f32::NAN),
                height: Unit::Px(10.0),
                ..Default::default()
            },
        );
        assert_eq!(style.to_css_string(), ".x{height:10px;}");
    }

    #[test]
    fn test_write_css() {
        let mut out = Vec::new();
        badge().write_css(&mut out).unwrap();
        Style::default().write_css(&mut out).unwrap();
        assert_eq!(out, badge().to_css_string().into_bytes());
    }

    #[test]
    fn test_write_css_propagates_sink_errors() {
        struct Broken;
        impl io::Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        match badge().write_css(&mut Broken) {
            Err(crate::Error::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected an I/O error, got {other:?}"),
        }
        // Empty rules never touch the sink
        assert!(Style::default().write_css(&mut Broken).is_ok());
    }

    fn arb_unit() -> impl Strategy<Value = Unit> {
        prop_oneof![
            Just(Unit::UNSET),
            Just(Unit::Auto),
            (1u16..2000).prop_map(|v| Unit::Px(v as f32)),
            (1u16..100).prop_map(|v| Unit::Rem(v as f32 / 4.0)),
            (0u8..=100).prop_map(|v| Unit::Percent(v as f32)),
        ]
    }

    fn arb_props() -> impl Strategy<Value = Props> {
        (
            arb_unit(),
            arb_unit(),
            arb_unit(),
            prop::option::of(prop::sample::select(Display::ALL)),
            prop::option::of(prop::sample::select(AlignItems::ALL)),
            prop::option::of(any::<[u8; 3]>().prop_map(|[r, g, b]| Color::rgb(r, g, b))),
        )
            .prop_map(|(width, margin_top, padding, display, align_items, color)| Props {
                width,
                margin_top,
                padding,
                display,
                align_items,
                color,
                ..Default::default()
            })
    }

    proptest! {
        #[test]
        fn prop_render_is_idempotent(props in arb_props()) {
            let style = Style::new(".x", props);
            prop_assert_eq!(style.to_css_string(), style.to_css_string());
        }

        #[test]
        fn prop_render_shape(props in arb_props()) {
            let style = Style::new(".x", props.clone());
            let css = style.to_css_string();
            if props.is_empty() {
                prop_assert_eq!(css, "");
            } else {
                prop_assert_eq!(css, format!(".x{{{}}}", props.to_css_string()));
            }
        }

        #[test]
        fn prop_assignment_order_is_irrelevant(props in arb_props()) {
            let mut reversed = Props::default();
            reversed.color = props.color;
            reversed.align_items = props.align_items;
            reversed.display = props.display;
            reversed.padding = props.padding;
            reversed.margin_top = props.margin_top;
            reversed.width = props.width;
            prop_assert_eq!(
                Style::new(".x", reversed).to_css_string(),
                Style::new(".x", props).to_css_string()
            );
        }

        #[test]
        fn prop_custom_props_keep_insertion_order(
            attrs in prop::collection::vec("[a-z]{1,8}", 1..6)
        ) {
            let mut style = Style::new("p", Props::default());
            let mut expected = String::from("p{");
            for attr in &attrs {
                style = style.with_custom(attr.as_str(), "1");
                expected.push_str(attr);
                expected.push_str(":1;");
            }
            expected.push('}');
            prop_assert_eq!(style.to_css_string(), expected);
        }
    }
}
