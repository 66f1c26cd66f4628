//! The property schema: one typed slot per supported CSS property.
//!
//! The schema is declared once, below, and that declaration order is the
//! order properties are serialized in:
//!
//! 1. box and positioning
//! 2. flex and grid
//! 3. sizing
//! 4. borders
//! 5. typography and lists
//! 6. margin and padding
//! 7. background
//! 8. everything else
//!
//! Reordering entries changes rendered output, so new properties go at the
//! end of their group.

use super::{
    AlignContent, AlignItems, AlignSelf, Appearance, BackgroundImage, BackgroundPosition,
    BackgroundRepeat, BackgroundSize, Border, BorderCollapse, BorderStyle, BoxSizing, CaptionSide,
    Color, Cursor, Display, FlexDirection, FlexWrap, Float, FontFamily, FontStyle, FontWeight,
    JustifyContent, JustifyItems, JustifySelf, ListStylePosition, ListStyleType, Overflow,
    Position, PrintColorAdjust, SlotValue, TextAlign, TextDecorationLine, TextDecorationStyle,
    TextOverflow, TextTransform, TextWrap, ToCss, Unit, ValueKind, VerticalAlign, Visibility,
    WhiteSpace,
};

/// Declare the schema.
///
/// Each entry is `Variant / field: Type => "css-name"`. This generates
/// `PropertyId` (the static, ordered index of slots), the `Props` struct
/// and `Props::get`, which reads one slot through its `SlotValue` impl.
macro_rules! property_schema {
    (
        $(
            $variant:ident / $field:ident : $ty:ty => $css:literal
        ),* $(,)?
    ) => {
        /// Identifies one slot of the schema.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum PropertyId {
            $($variant,)*
        }

        impl PropertyId {
            /// Every slot, in serialization order.
            pub const ALL: &'static [PropertyId] = &[$(PropertyId::$variant,)*];

            /// The CSS property name (`border-top-left-radius`).
            pub fn css_name(self) -> &'static str {
                match self {
                    $(PropertyId::$variant => $css,)*
                }
            }

            /// The name of the `Props` field backing this slot.
            pub fn field_name(self) -> &'static str {
                match self {
                    $(PropertyId::$variant => stringify!($field),)*
                }
            }

            pub fn kind(self) -> ValueKind {
                match self {
                    $(PropertyId::$variant => <$ty as SlotValue>::KIND,)*
                }
            }

            /// Look a slot up by its CSS property name.
            pub fn from_css_name(name: &str) -> Option<Self> {
                match name {
                    $($css => Some(PropertyId::$variant),)*
                    _ => None,
                }
            }
        }

        /// The standard CSS properties of a rule.
        ///
        /// Unit slots are unset while they hold the unitless zero
        /// ([`Unit::UNSET`]); every other slot is unset while it is `None`.
        /// `Props::default()` has every slot unset.
        #[derive(Debug, Clone, Default, PartialEq)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Deserialize),
            serde(default, deny_unknown_fields)
        )]
        pub struct Props {
            $(
                #[cfg_attr(feature = "serde", serde(rename = $css))]
                pub $field: $ty,
            )*
        }

        impl Props {
            /// The value of a slot, or `None` if the slot is unset.
            pub fn get(&self, id: PropertyId) -> Option<&dyn ToCss> {
                match id {
                    $(PropertyId::$variant => self.$field.as_set(),)*
                }
            }
        }
    };
}

property_schema! {
    // Box and positioning
    Display / display: Option<Display> => "display",
    Position / position: Option<Position> => "position",
    Top / top: Unit => "top",
    Right / right: Unit => "right",
    Bottom / bottom: Unit => "bottom",
    Left / left: Unit => "left",
    ZIndex / z_index: Unit => "z-index",
    Float / float: Option<Float> => "float",
    BoxSizing / box_sizing: Option<BoxSizing> => "box-sizing",
    Visibility / visibility: Option<Visibility> => "visibility",
    Overflow / overflow: Option<Overflow> => "overflow",
    OverflowX / overflow_x: Option<Overflow> => "overflow-x",
    OverflowY / overflow_y: Option<Overflow> => "overflow-y",

    // Flex and grid
    FlexDirection / flex_direction: Option<FlexDirection> => "flex-direction",
    FlexWrap / flex_wrap: Option<FlexWrap> => "flex-wrap",
    FlexBasis / flex_basis: Unit => "flex-basis",
    FlexGrow / flex_grow: Unit => "flex-grow",
    FlexShrink / flex_shrink: Unit => "flex-shrink",
    AlignContent / align_content: Option<AlignContent> => "align-content",
    AlignItems / align_items: Option<AlignItems> => "align-items",
    AlignSelf / align_self: Option<AlignSelf> => "align-self",
    JustifyContent / justify_content: Option<JustifyContent> => "justify-content",
    JustifyItems / justify_items: Option<JustifyItems> => "justify-items",
    JustifySelf / justify_self: Option<JustifySelf> => "justify-self",
    Gap / gap: Unit => "gap",
    RowGap / row_gap: Unit => "row-gap",
    ColumnGap / column_gap: Unit => "column-gap",

    // Sizing
    Width / width: Unit => "width",
    Height / height: Unit => "height",
    MinWidth / min_width: Unit => "min-width",
    MinHeight / min_height: Unit => "min-height",
    MaxWidth / max_width: Unit => "max-width",
    MaxHeight / max_height: Unit => "max-height",

    // Borders
    Border / border: Option<Border> => "border",
    BorderTop / border_top: Option<Border> => "border-top",
    BorderRight / border_right: Option<Border> => "border-right",
    BorderBottom / border_bottom: Option<Border> => "border-bottom",
    BorderLeft / border_left: Option<Border> => "border-left",
    BorderWidth / border_width: Unit => "border-width",
    BorderStyle / border_style: Option<BorderStyle> => "border-style",
    BorderColor / border_color: Option<Color> => "border-color",
    BorderRadius / border_radius: Unit => "border-radius",
    BorderTopLeftRadius / border_top_left_radius: Unit => "border-top-left-radius",
    BorderTopRightRadius / border_top_right_radius: Unit => "border-top-right-radius",
    BorderBottomRightRadius / border_bottom_right_radius: Unit => "border-bottom-right-radius",
    BorderBottomLeftRadius / border_bottom_left_radius: Unit => "border-bottom-left-radius",
    BorderCollapse / border_collapse: Option<BorderCollapse> => "border-collapse",

    // Typography and lists
    FontFamily / font_family: Option<FontFamily> => "font-family",
    FontSize / font_size: Unit => "font-size",
    FontStyle / font_style: Option<FontStyle> => "font-style",
    FontWeight / font_weight: Option<FontWeight> => "font-weight",
    LineHeight / line_height: Unit => "line-height",
    Color / color: Option<Color> => "color",
    TextAlign / text_align: Option<TextAlign> => "text-align",
    TextDecorationLine / text_decoration_line: Option<TextDecorationLine> => "text-decoration-line",
    TextDecorationStyle / text_decoration_style: Option<TextDecorationStyle> => "text-decoration-style",
    TextDecorationColor / text_decoration_color: Option<Color> => "text-decoration-color",
    TextDecorationThickness / text_decoration_thickness: Unit => "text-decoration-thickness",
    TextUnderlineOffset / text_underline_offset: Unit => "text-underline-offset",
    TextIndent / text_indent: Unit => "text-indent",
    TextOverflow / text_overflow: Option<TextOverflow> => "text-overflow",
    TextTransform / text_transform: Option<TextTransform> => "text-transform",
    TextWrap / text_wrap: Option<TextWrap> => "text-wrap",
    VerticalAlign / vertical_align: Option<VerticalAlign> => "vertical-align",
    WhiteSpace / white_space: Option<WhiteSpace> => "white-space",
    ListStylePosition / list_style_position: Option<ListStylePosition> => "list-style-position",
    ListStyleType / list_style_type: Option<ListStyleType> => "list-style-type",

    // Margin and padding
    Margin / margin: Unit => "margin",
    MarginTop / margin_top: Unit => "margin-top",
    MarginRight / margin_right: Unit => "margin-right",
    MarginBottom / margin_bottom: Unit => "margin-bottom",
    MarginLeft / margin_left: Unit => "margin-left",
    Padding / padding: Unit => "padding",
    PaddingTop / padding_top: Unit => "padding-top",
    PaddingRight / padding_right: Unit => "padding-right",
    PaddingBottom / padding_bottom: Unit => "padding-bottom",
    PaddingLeft / padding_left: Unit => "padding-left",

    // Background
    BackgroundColor / background_color: Option<Color> => "background-color",
    BackgroundImage / background_image: Option<BackgroundImage> => "background-image",
    BackgroundPosition / background_position: Option<BackgroundPosition> => "background-position",
    BackgroundRepeat / background_repeat: Option<BackgroundRepeat> => "background-repeat",
    BackgroundSize / background_size: Option<BackgroundSize> => "background-size",

    // Everything else
    Appearance / appearance: Option<Appearance> => "appearance",
    Cursor / cursor: Option<Cursor> => "cursor",
    Opacity / opacity: Unit => "opacity",
    CaptionSide / caption_side: Option<CaptionSide> => "caption-side",
    PrintColorAdjust / print_color_adjust: Option<PrintColorAdjust> => "print-color-adjust",
}

impl Props {
    /// Iterate over the set slots in serialization order.
    pub fn iter(&self) -> impl Iterator<Item = (PropertyId, &dyn ToCss)> {
        PropertyId::ALL
            .iter()
            .filter_map(move |&id| self.get(id).map(|value| (id, value)))
    }

    /// Check if every slot is unset.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Number of set slots.
    pub fn len(&self) -> usize {
        self.iter().count()
    }
}

impl ToCss for Props {
    /// Write `name:value;` for every set slot, in schema order.
    fn to_css(&self, buf: &mut String) {
        for (id, value) in self.iter() {
            buf.push_str(id.css_name());
            buf.push(':');
            value.to_css(buf);
            buf.push(';');
        }
    }
}

#[cfg(test)]
#[allow(clippy::field_reassign_with_default)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_schema_names_are_unique() {
        let css: HashSet<_> = PropertyId::ALL.iter().map(|id| id.css_name()).collect();
        let fields: HashSet<_> = PropertyId::ALL.iter().map(|id| id.field_name()).collect();
        assert_eq!(css.len(), PropertyId::ALL.len());
        assert_eq!(fields.len(), PropertyId::ALL.len());
        assert_eq!(PropertyId::ALL.len(), 87);
    }

    #[test]
    fn test_schema_lookup() {
        assert_eq!(PropertyId::from_css_name("z-index"), Some(PropertyId::ZIndex));
        assert_eq!(
            PropertyId::from_css_name("border-bottom-left-radius"),
            Some(PropertyId::BorderBottomLeftRadius)
        );
        assert_eq!(PropertyId::from_css_name("grid-template-columns"), None);
        for id in PropertyId::ALL {
            assert_eq!(PropertyId::from_css_name(id.css_name()), Some(*id));
        }
    }

    #[test]
    fn test_schema_kinds() {
        assert_eq!(PropertyId::Display.kind(), ValueKind::Keyword);
        assert_eq!(PropertyId::PaddingTop.kind(), ValueKind::Unit);
        assert_eq!(PropertyId::BackgroundColor.kind(), ValueKind::Color);
        assert_eq!(PropertyId::BorderTop.kind(), ValueKind::Border);
        assert_eq!(PropertyId::BackgroundImage.kind(), ValueKind::Image);
        assert_eq!(PropertyId::FontWeight.kind(), ValueKind::Keyword);
    }

    #[test]
    fn test_schema_field_names_follow_css_names() {
        for id in PropertyId::ALL {
            assert_eq!(id.field_name().replace('_', "-"), id.css_name());
        }
    }

    #[test]
    fn test_default_props_are_empty() {
        let props = Props::default();
        assert!(props.is_empty());
        assert_eq!(props.len(), 0);
        assert_eq!(props.to_css_string(), "");
    }

    #[test]
    fn test_props_to_css_follows_schema_order() {
        let mut props = Props::default();
        props.padding_right = Unit::Px(12.0);
        props.font_weight = Some(FontWeight::SemiBold);
        props.display = Some(Display::InlineFlex);

        assert_eq!(
            props.to_css_string(),
            "display:inline-flex;font-weight:600;padding-right:12px;"
        );
        let ids: Vec<_> = props.iter().map(|(id, _)| id).collect();
        assert_eq!(
            ids,
            vec![PropertyId::Display, PropertyId::FontWeight, PropertyId::PaddingRight]
        );
    }

    #[test]
    fn test_props_unitless_zero_is_omitted() {
        let mut props = Props::default();
        props.z_index = Unit::Number(0.0);
        props.margin = Unit::Px(0.0);
        assert_eq!(props.to_css_string(), "margin:0;");
    }

    #[test]
    fn test_props_border_value() {
        let props = Props {
            border: Some(Border::new(Unit::Px(1.0), BorderStyle::Solid, Color::BLACK)),
            ..Default::default()
        };
        assert_eq!(props.to_css_string(), "border:1px solid #000;");
    }

    #[test]
    fn test_props_get() {
        let props = Props {
            color: Some(Color::Transparent),
            ..Default::default()
        };
        assert_eq!(
            props.get(PropertyId::Color).map(|v| v.to_css_string()),
            Some("transparent".to_string())
        );
        assert!(props.get(PropertyId::BackgroundColor).is_none());
    }
}
