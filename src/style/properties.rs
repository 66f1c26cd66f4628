//! CSS keyword property types and the enum_property! macro.
//!
//! Every keyword family gets its own closed enum, so a keyword that does not
//! belong to a property cannot be stored in that property's slot.

/// Macro for defining CSS keyword enums with automatic ToCss implementation.
///
/// A variant may list extra spellings after its keyword
/// (`Bold => "bold" | "700"`); they parse to the variant but it always
/// renders as the first one.
///
/// Besides the enum itself this generates `as_str`/`from_css`, a
/// case-insensitive `FromStr` that reports the family name on failure, and
/// (with the `serde` feature) a `Deserialize` impl that goes through `FromStr`.
///
/// # Example
///
/// ```ignore
/// enum_property! {
///     /// Font style (normal, italic, oblique).
///     pub enum FontStyle {
///         Normal => "normal",
///         Italic => "italic",
///         Oblique => "oblique",
///     }
/// }
/// ```
macro_rules! enum_property {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $css:literal $(| $alias:literal)*
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Every member of this family, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// Returns the CSS keyword for this value.
            #[inline]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $css,)*
                }
            }

            /// Parse a CSS keyword into this enum.
            #[inline]
            pub fn from_css(s: &str) -> Option<Self> {
                match s {
                    $($css $(| $alias)* => Some($name::$variant),)*
                    _ => None,
                }
            }
        }

        impl $crate::style::ToCss for $name {
            fn to_css(&self, buf: &mut String) {
                buf.push_str(self.as_str());
            }
        }

        impl $crate::style::CssValue for $name {
            const KIND: $crate::style::ValueKind = $crate::style::ValueKind::Keyword;
        }

        impl std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> $crate::Result<Self> {
                let normalized = s
                    .split_ascii_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ")
                    .to_ascii_lowercase();
                Self::from_css(&normalized)
                    .ok_or_else(|| $crate::Error::invalid(stringify!($name), s))
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                $crate::style::serde_impls::from_css_str(deserializer)
            }
        }
    };
}

pub(crate) use enum_property;

enum_property! {
    /// Distribution of lines in a multi-line flex or grid container.
    pub enum AlignContent {
        Normal => "normal",
        Start => "start",
        End => "end",
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
        SpaceEvenly => "space-evenly",
        Stretch => "stretch",
        Baseline => "baseline",
    }
}

enum_property! {
    /// Cross-axis alignment of items in a flex or grid container.
    pub enum AlignItems {
        Normal => "normal",
        Stretch => "stretch",
        Start => "start",
        End => "end",
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        Baseline => "baseline",
    }
}

enum_property! {
    /// Cross-axis alignment override for a single item.
    pub enum AlignSelf {
        Auto => "auto",
        Normal => "normal",
        Stretch => "stretch",
        Start => "start",
        End => "end",
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        Baseline => "baseline",
    }
}

enum_property! {
    /// Native widget appearance.
    pub enum Appearance {
        None => "none",
        Auto => "auto",
        MenulistButton => "menulist-button",
        Textfield => "textfield",
    }
}

enum_property! {
    pub enum BackgroundPosition {
        Bottom => "bottom",
        Center => "center",
        Left => "left",
        LeftBottom => "left bottom",
        LeftTop => "left top",
        Right => "right",
        RightBottom => "right bottom",
        RightTop => "right top",
        Top => "top",
    }
}

enum_property! {
    pub enum BackgroundRepeat {
        Repeat => "repeat",
        NoRepeat => "no-repeat",
        RepeatX => "repeat-x",
        RepeatY => "repeat-y",
        Round => "round",
        Space => "space",
    }
}

enum_property! {
    pub enum BackgroundSize {
        Auto => "auto",
        Cover => "cover",
        Contain => "contain",
    }
}

enum_property! {
    /// CSS border-collapse values for tables.
    pub enum BorderCollapse {
        /// Borders are separated (CSS default for tables).
        Separate => "separate",
        /// Adjacent borders are collapsed into a single border.
        Collapse => "collapse",
    }
}

enum_property! {
    /// Border style values.
    pub enum BorderStyle {
        None => "none",
        Hidden => "hidden",
        Dotted => "dotted",
        Dashed => "dashed",
        Solid => "solid",
        Double => "double",
        Groove => "groove",
        Ridge => "ridge",
        Inset => "inset",
        Outset => "outset",
    }
}

enum_property! {
    /// CSS box-sizing values.
    pub enum BoxSizing {
        /// Width/height include only content (CSS default)
        ContentBox => "content-box",
        /// Width/height include padding and border
        BorderBox => "border-box",
    }
}

enum_property! {
    /// Placement of a table caption.
    pub enum CaptionSide {
        Top => "top",
        Bottom => "bottom",
    }
}

enum_property! {
    /// Mouse cursor shown over an element.
    pub enum Cursor {
        Auto => "auto",
        Default => "default",
        None => "none",
        Pointer => "pointer",
        Progress => "progress",
        Wait => "wait",
        Text => "text",
        Move => "move",
        Help => "help",
        Crosshair => "crosshair",
        NotAllowed => "not-allowed",
        Grab => "grab",
        Grabbing => "grabbing",
        ColResize => "col-resize",
        RowResize => "row-resize",
        ZoomIn => "zoom-in",
        ZoomOut => "zoom-out",
    }
}

enum_property! {
    /// Display mode.
    pub enum Display {
        Block => "block",
        Inline => "inline",
        InlineBlock => "inline-block",
        Flex => "flex",
        InlineFlex => "inline-flex",
        Grid => "grid",
        InlineGrid => "inline-grid",
        FlowRoot => "flow-root",
        Contents => "contents",
        ListItem => "list-item",
        Table => "table",
        TableRow => "table-row",
        TableCell => "table-cell",
        None => "none",
    }
}

enum_property! {
    pub enum FlexDirection {
        Row => "row",
        RowReverse => "row-reverse",
        Column => "column",
        ColumnReverse => "column-reverse",
    }
}

enum_property! {
    pub enum FlexWrap {
        Nowrap => "nowrap",
        Wrap => "wrap",
        WrapReverse => "wrap-reverse",
    }
}

enum_property! {
    /// Float positioning.
    pub enum Float {
        None => "none",
        Left => "left",
        Right => "right",
        InlineStart => "inline-start",
        InlineEnd => "inline-end",
    }
}

enum_property! {
    /// Generic font families.
    ///
    /// Named font stacks go through a custom property.
    pub enum FontFamily {
        Serif => "serif",
        SansSerif => "sans-serif",
        Monospace => "monospace",
        Cursive => "cursive",
        Fantasy => "fantasy",
        SystemUi => "system-ui",
        UiSerif => "ui-serif",
        UiSansSerif => "ui-sans-serif",
        UiMonospace => "ui-monospace",
        UiRounded => "ui-rounded",
        Math => "math",
        Emoji => "emoji",
    }
}

enum_property! {
    /// Font style (normal, italic, oblique).
    pub enum FontStyle {
        Normal => "normal",
        Italic => "italic",
        Oblique => "oblique",
    }
}

enum_property! {
    /// Font weight.
    ///
    /// `normal` and `bold` keep their keyword form and also parse from `400`
    /// and `700`; the other steps of the weight scale render as numbers.
    /// Numeric weights are written as strings in JSON (`"600"`).
    pub enum FontWeight {
        Thin => "100",
        ExtraLight => "200",
        Light => "300",
        Normal => "normal" | "400",
        Medium => "500",
        SemiBold => "600",
        Bold => "bold" | "700",
        ExtraBold => "800",
        Black => "900",
        Lighter => "lighter",
        Bolder => "bolder",
    }
}

enum_property! {
    /// Main-axis distribution of items in a flex or grid container.
    pub enum JustifyContent {
        Normal => "normal",
        Start => "start",
        End => "end",
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        Left => "left",
        Right => "right",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
        SpaceEvenly => "space-evenly",
        Stretch => "stretch",
    }
}

enum_property! {
    pub enum JustifyItems {
        Normal => "normal",
        Stretch => "stretch",
        Start => "start",
        End => "end",
        Center => "center",
        Left => "left",
        Right => "right",
        Baseline => "baseline",
    }
}

enum_property! {
    pub enum JustifySelf {
        Auto => "auto",
        Normal => "normal",
        Stretch => "stretch",
        Start => "start",
        End => "end",
        Center => "center",
        Left => "left",
        Right => "right",
        Baseline => "baseline",
    }
}

enum_property! {
    /// List style position.
    pub enum ListStylePosition {
        Inside => "inside",
        Outside => "outside",
    }
}

enum_property! {
    /// CSS list-style-type values.
    pub enum ListStyleType {
        /// No marker
        None => "none",
        /// Disc bullet
        Disc => "disc",
        /// Circle bullet
        Circle => "circle",
        /// Square bullet
        Square => "square",
        /// Decimal numbers
        Decimal => "decimal",
        /// Decimal numbers padded with a leading zero
        DecimalLeadingZero => "decimal-leading-zero",
        /// Lowercase letters
        LowerAlpha => "lower-alpha",
        /// Uppercase letters
        UpperAlpha => "upper-alpha",
        /// Lowercase roman numerals
        LowerRoman => "lower-roman",
        /// Uppercase roman numerals
        UpperRoman => "upper-roman",
    }
}

enum_property! {
    /// Handling of content that overflows its box.
    pub enum Overflow {
        Visible => "visible",
        Hidden => "hidden",
        Clip => "clip",
        Scroll => "scroll",
        Auto => "auto",
    }
}

enum_property! {
    /// Positioning scheme.
    pub enum Position {
        Static => "static",
        Relative => "relative",
        Absolute => "absolute",
        Fixed => "fixed",
        Sticky => "sticky",
    }
}

enum_property! {
    pub enum PrintColorAdjust {
        Economy => "economy",
        Exact => "exact",
    }
}

enum_property! {
    /// Text alignment.
    pub enum TextAlign {
        Start => "start",
        End => "end",
        Left => "left",
        Right => "right",
        Center => "center",
        Justify => "justify",
    }
}

enum_property! {
    pub enum TextDecorationLine {
        None => "none",
        Underline => "underline",
        Overline => "overline",
        LineThrough => "line-through",
    }
}

enum_property! {
    /// Text decoration line style.
    pub enum TextDecorationStyle {
        Solid => "solid",
        Double => "double",
        Dotted => "dotted",
        Dashed => "dashed",
        Wavy => "wavy",
    }
}

enum_property! {
    pub enum TextOverflow {
        Clip => "clip",
        Ellipsis => "ellipsis",
    }
}

enum_property! {
    /// Text transform values.
    pub enum TextTransform {
        None => "none",
        Capitalize => "capitalize",
        Uppercase => "uppercase",
        Lowercase => "lowercase",
        FullWidth => "full-width",
    }
}

enum_property! {
    /// CSS text-wrap values.
    pub enum TextWrap {
        Wrap => "wrap",
        Nowrap => "nowrap",
        Balance => "balance",
        Pretty => "pretty",
        Stable => "stable",
    }
}

enum_property! {
    /// CSS vertical-align values for inline and table-cell elements.
    pub enum VerticalAlign {
        Baseline => "baseline",
        Sub => "sub",
        Super => "super",
        TextTop => "text-top",
        TextBottom => "text-bottom",
        Middle => "middle",
        Top => "top",
        Bottom => "bottom",
    }
}

enum_property! {
    /// CSS visibility values.
    pub enum Visibility {
        Visible => "visible",
        Hidden => "hidden",
        Collapse => "collapse",
    }
}

enum_property! {
    /// CSS white-space values.
    pub enum WhiteSpace {
        /// Normal whitespace handling: collapse whitespace, wrap lines.
        Normal => "normal",
        /// Collapse whitespace but don't wrap lines.
        Nowrap => "nowrap",
        /// Preserve whitespace and newlines, don't wrap lines.
        Pre => "pre",
        /// Preserve whitespace and newlines, wrap lines.
        PreWrap => "pre-wrap",
        /// Collapse whitespace except newlines, wrap lines.
        PreLine => "pre-line",
        /// Like pre-wrap, but preserved spaces take up space at line ends.
        BreakSpaces => "break-spaces",
    }
}
