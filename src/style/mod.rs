//! Typed CSS values, the property schema and style rules.
//!
//! This module contains:
//! - CSS value types (Unit, Color, Border, keyword enums)
//! - Props, the fixed property schema, and PropertyId, its static index
//! - Style, a selector with its properties, and its serialization

mod border;
mod color;
mod image;
pub(crate) mod parse;
mod properties;
mod props;
mod rule;
#[cfg(feature = "serde")]
pub(crate) mod serde_impls;
mod unit;

/// Serialization to CSS text.
pub trait ToCss {
    /// Write this value as CSS to the buffer.
    fn to_css(&self, buf: &mut String);

    /// Convert to a CSS string (convenience method).
    fn to_css_string(&self) -> String {
        let mut buf = String::new();
        self.to_css(&mut buf);
        buf
    }
}

/// The kind of value a schema slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Unit,
    Color,
    Keyword,
    Border,
    Image,
}

/// A value type that can be stored in a schema slot.
pub trait CssValue: ToCss {
    const KIND: ValueKind;

    /// Check that every number in the value is finite.
    ///
    /// A value holding NaN or an infinity has no CSS spelling and is never
    /// emitted.
    fn is_finite(&self) -> bool {
        true
    }
}

/// Storage for one schema slot: knows its kind and whether it is set.
pub trait SlotValue {
    const KIND: ValueKind;

    /// The value to emit, or `None` when the slot holds its unset value or
    /// a value with a non-finite number.
    fn as_set(&self) -> Option<&dyn ToCss>;

    fn is_unset(&self) -> bool {
        self.as_set().is_none()
    }
}

impl<T: CssValue> SlotValue for Option<T> {
    const KIND: ValueKind = T::KIND;

    fn as_set(&self) -> Option<&dyn ToCss> {
        self.as_ref()
            .filter(|value| value.is_finite())
            .map(|value| value as &dyn ToCss)
    }
}

// Re-export value types
pub use border::Border;
pub use color::{Color, NamedColor};
pub use image::BackgroundImage;
pub use properties::{
    AlignContent, AlignItems, AlignSelf, Appearance, BackgroundPosition, BackgroundRepeat,
    BackgroundSize, BorderCollapse, BorderStyle, BoxSizing, CaptionSide, Cursor, Display,
    FlexDirection, FlexWrap, Float, FontFamily, FontStyle, FontWeight, JustifyContent,
    JustifyItems, JustifySelf, ListStylePosition, ListStyleType, Overflow, Position,
    PrintColorAdjust, TextAlign, TextDecorationLine, TextDecorationStyle, TextOverflow,
    TextTransform, TextWrap, VerticalAlign, Visibility, WhiteSpace,
};
pub use unit::Unit;

// Re-export the schema and rule types
pub use props::{PropertyId, Props};
pub use rule::{CustomProp, Style};
