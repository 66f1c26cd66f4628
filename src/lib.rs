//! # stylekit
//!
//! Typed CSS style rules with a deterministic serializer.
//!
//! ## Features
//!
//! - A fixed schema of standard CSS properties, each slot strongly typed
//! - Units, colors, borders and closed keyword enums for values
//! - Compact, byte-stable output with unset properties omitted
//! - Custom properties as an unvalidated escape hatch
//! - Optional JSON loading (`json` feature) and a command-line renderer
//!
//! ## Quick Start
//!
//! ```
//! use stylekit::{AlignItems, Display, FontWeight, Props, Style, ToCss, Unit};
//!
//! let badge = Style::new(".badge", Props {
//!     display: Some(Display::InlineFlex),
//!     align_items: Some(AlignItems::Center),
//!     font_weight: Some(FontWeight::SemiBold),
//!     padding_top: Unit::Px(4.0),
//!     ..Default::default()
//! })
//! .with_custom("user-select", "none");
//!
//! assert_eq!(
//!     badge.to_css_string(),
//!     ".badge{display:inline-flex;align-items:center;font-weight:600;padding-top:4px;user-select:none;}"
//! );
//! ```
//!
//! ## Unset Properties
//!
//! Every slot of [`Props`] starts unset and unset slots are never written.
//! Keyword, color, border and image slots are `Option`s. Unit slots hold a
//! [`Unit`] and count as unset while they hold the unitless zero, so
//! `Unit::Px(0.0)` is written (as `0`) but `Unit::Number(0.0)` is not.
//!
//! ## Parsing Values
//!
//! Every value type implements `FromStr`:
//!
//! ```
//! use stylekit::{Border, Color, ToCss};
//!
//! let border: Border = "1px solid #000000".parse().unwrap();
//! assert_eq!(border.to_css_string(), "1px solid #000");
//! assert!("rgb(0, 0, 0)".parse::<Color>().is_err());
//! ```

mod error;
pub mod style;
pub mod stylesheet;

pub use error::{Error, Result};
pub use style::{
    AlignContent, AlignItems, AlignSelf, Appearance, BackgroundImage, BackgroundPosition,
    BackgroundRepeat, BackgroundSize, Border, BorderCollapse, BorderStyle, BoxSizing, CaptionSide,
    Color, Cursor, CustomProp, Display, FlexDirection, FlexWrap, Float, FontFamily, FontStyle,
    FontWeight, JustifyContent, JustifyItems, JustifySelf, ListStylePosition, ListStyleType,
    NamedColor, Overflow, Position, PrintColorAdjust, PropertyId, Props, Style, TextAlign,
    TextDecorationLine, TextDecorationStyle, TextOverflow, TextTransform, TextWrap, ToCss, Unit,
    ValueKind, VerticalAlign, Visibility, WhiteSpace,
};
pub use stylesheet::Stylesheet;
