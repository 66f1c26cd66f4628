//! CSS color values.

use std::str::FromStr;

use super::parse::{parse_all, parse_color};
use super::properties::enum_property;
use super::unit::write_number;
use super::{CssValue, ToCss, ValueKind};
use crate::Error;

/// A CSS color.
///
/// Exactly one representation is active; rendering writes that
/// representation's own token without converting between forms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// A named color keyword (`rebeccapurple`).
    Named(NamedColor),
    /// Opaque color written as `#rgb` or `#rrggbb`.
    Rgb(u8, u8, u8),
    /// Color with alpha written as `#rgba` or `#rrggbbaa`.
    Rgba(u8, u8, u8, u8),
    /// `hsl(h,s%,l%)` with hue in degrees, saturation and lightness in percent.
    Hsl(f32, f32, f32),
    /// `hsla(h,s%,l%,a)` with alpha in `0..=1`.
    Hsla(f32, f32, f32, f32),
    Transparent,
    CurrentColor,
}

impl Color {
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);

    /// Create a new opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }

    /// Create a new color with alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color::Rgba(r, g, b, a)
    }

    /// Create an opaque color from a `0xRRGGBB` literal.
    pub const fn hex(value: u32) -> Self {
        Color::Rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        Color::Named(named)
    }
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Write `#` followed by the channels, using one digit per channel when
/// every channel is a doubled nibble.
fn write_hex(buf: &mut String, channels: &[u8]) {
    let short = channels.iter().all(|c| c >> 4 == c & 0x0f);
    buf.push('#');
    for &c in channels {
        if !short {
            buf.push(HEX_DIGITS[(c >> 4) as usize] as char);
        }
        buf.push(HEX_DIGITS[(c & 0x0f) as usize] as char);
    }
}

fn write_hsl(buf: &mut String, h: f32, s: f32, l: f32, alpha: Option<f32>) {
    buf.push_str(if alpha.is_some() { "hsla(" } else { "hsl(" });
    write_number(buf, h);
    buf.push(',');
    write_number(buf, s);
    buf.push_str("%,");
    write_number(buf, l);
    buf.push('%');
    if let Some(a) = alpha {
        buf.push(',');
        write_number(buf, a);
    }
    buf.push(')');
}

impl ToCss for Color {
    fn to_css(&self, buf: &mut String) {
        match *self {
            Color::Named(named) => buf.push_str(named.as_str()),
            Color::Rgb(r, g, b) => write_hex(buf, &[r, g, b]),
            Color::Rgba(r, g, b, a) => write_hex(buf, &[r, g, b, a]),
            Color::Hsl(h, s, l) => write_hsl(buf, h, s, l, None),
            Color::Hsla(h, s, l, a) => write_hsl(buf, h, s, l, Some(a)),
            Color::Transparent => buf.push_str("transparent"),
            Color::CurrentColor => buf.push_str("currentColor"),
        }
    }
}

impl CssValue for Color {
    const KIND: ValueKind = ValueKind::Color;

    fn is_finite(&self) -> bool {
        match *self {
            Color::Hsl(h, s, l) => [h, s, l].iter().all(|v| v.is_finite()),
            Color::Hsla(h, s, l, a) => [h, s, l, a].iter().all(|v| v.is_finite()),
            _ => true,
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        parse_all("Color", s, parse_color)
    }
}

enum_property! {
    /// CSS named color keywords.
    pub enum NamedColor {
        AliceBlue => "aliceblue",
        AntiqueWhite => "antiquewhite",
        Aqua => "aqua",
        Aquamarine => "aquamarine",
        Azure => "azure",
        Beige => "beige",
        Bisque => "bisque",
        Black => "black",
        BlanchedAlmond => "blanchedalmond",
        Blue => "blue",
        BlueViolet => "blueviolet",
        Brown => "brown",
        BurlyWood => "burlywood",
        CadetBlue => "cadetblue",
        Chartreuse => "chartreuse",
        Chocolate => "chocolate",
        Coral => "coral",
        CornflowerBlue => "cornflowerblue",
        Cornsilk => "cornsilk",
        Crimson => "crimson",
        Cyan => "cyan",
        DarkBlue => "darkblue",
        DarkCyan => "darkcyan",
        DarkGoldenRod => "darkgoldenrod",
        DarkGray => "darkgray",
        DarkGreen => "darkgreen",
        DarkGrey => "darkgrey",
        DarkKhaki => "darkkhaki",
        DarkMagenta => "darkmagenta",
        DarkOliveGreen => "darkolivegreen",
        DarkOrange => "darkorange",
        DarkOrchid => "darkorchid",
        DarkRed => "darkred",
        DarkSalmon => "darksalmon",
        DarkSeaGreen => "darkseagreen",
        DarkSlateBlue => "darkslateblue",
        DarkSlateGray => "darkslategray",
        DarkSlateGrey => "darkslategrey",
        DarkTurquoise => "darkturquoise",
        DarkViolet => "darkviolet",
        DeepPink => "deeppink",
        DeepSkyBlue => "deepskyblue",
        DimGray => "dimgray",
        DimGrey => "dimgrey",
        DodgerBlue => "dodgerblue",
        FireBrick => "firebrick",
        FloralWhite => "floralwhite",
        ForestGreen => "forestgreen",
        Fuchsia => "fuchsia",
        Gainsboro => "gainsboro",
        GhostWhite => "ghostwhite",
        Gold => "gold",
        GoldenRod => "goldenrod",
        Gray => "gray",
        Green => "green",
        GreenYellow => "greenyellow",
        Grey => "grey",
        HoneyDew => "honeydew",
        HotPink => "hotpink",
        IndianRed => "indianred",
        Indigo => "indigo",
        Ivory => "ivory",
        Khaki => "khaki",
        Lavender => "lavender",
        LavenderBlush => "lavenderblush",
        LawnGreen => "lawngreen",
        LemonChiffon => "lemonchiffon",
        LightBlue => "lightblue",
        LightCoral => "lightcoral",
        LightCyan => "lightcyan",
        LightGoldenRodYellow => "lightgoldenrodyellow",
        LightGray => "lightgray",
        LightGreen => "lightgreen",
        LightGrey => "lightgrey",
        LightPink => "lightpink",
        LightSalmon => "lightsalmon",
        LightSeaGreen => "lightseagreen",
        LightSkyBlue => "lightskyblue",
        LightSlateGray => "lightslategray",
        LightSlateGrey => "lightslategrey",
        LightSteelBlue => "lightsteelblue",
        LightYellow => "lightyellow",
        Lime => "lime",
        LimeGreen => "limegreen",
        Linen => "linen",
        Magenta => "magenta",
        Maroon => "maroon",
        MediumAquamarine => "mediumaquamarine",
        MediumBlue => "mediumblue",
        MediumOrchid => "mediumorchid",
        MediumPurple => "mediumpurple",
        MediumSeaGreen => "mediumseagreen",
        MediumSlateBlue => "mediumslateblue",
        MediumSpringGreen => "mediumspringgreen",
        MediumTurquoise => "mediumturquoise",
        MediumVioletRed => "mediumvioletred",
        MidnightBlue => "midnightblue",
        MintCream => "mintcream",
        MistyRose => "mistyrose",
        Moccasin => "moccasin",
        NavajoWhite => "navajowhite",
        Navy => "navy",
        OldLace => "oldlace",
        Olive => "olive",
        OliveDrab => "olivedrab",
        Orange => "orange",
        OrangeRed => "orangered",
        Orchid => "orchid",
        PaleGoldenRod => "palegoldenrod",
        PaleGreen => "palegreen",
        PaleTurquoise => "paleturquoise",
        PaleVioletRed => "palevioletred",
        PapayaWhip => "papayawhip",
        PeachPuff => "peachpuff",
        Peru => "peru",
        Pink => "pink",
        Plum => "plum",
        PowderBlue => "powderblue",
        Purple => "purple",
        RebeccaPurple => "rebeccapurple",
        Red => "red",
        RosyBrown => "rosybrown",
        RoyalBlue => "royalblue",
        SaddleBrown => "saddlebrown",
        Salmon => "salmon",
        SandyBrown => "sandybrown",
        SeaGreen => "seagreen",
        SeaShell => "seashell",
        Sienna => "sienna",
        Silver => "silver",
        SkyBlue => "skyblue",
        SlateBlue => "slateblue",
        SlateGray => "slategray",
        SlateGrey => "slategrey",
        Snow => "snow",
        SpringGreen => "springgreen",
        SteelBlue => "steelblue",
        Tan => "tan",
        Teal => "teal",
        Thistle => "thistle",
        Tomato => "tomato",
        Turquoise => "turquoise",
        Violet => "violet",
        Wheat => "wheat",
        White => "white",
        WhiteSmoke => "whitesmoke",
        Yellow => "yellow",
        YellowGreen => "yellowgreen",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_css_hex() {
        assert_eq!(Color::BLACK.to_css_string(), "#000");
        assert_eq!(Color::WHITE.to_css_string(), "#fff");
        assert_eq!(Color::rgb(255, 0, 0).to_css_string(), "#f00");
        assert_eq!(Color::rgb(0, 128, 255).to_css_string(), "#0080ff");
        assert_eq!(Color::hex(0x0f172a).to_css_string(), "#0f172a");
    }

    #[test]
    fn test_color_to_css_alpha() {
        assert_eq!(Color::rgba(0, 0, 0, 0x80).to_css_string(), "#00000080");
        assert_eq!(Color::rgba(255, 255, 255, 0).to_css_string(), "#fff0");
    }

    #[test]
    fn test_color_to_css_keywords() {
        assert_eq!(Color::Transparent.to_css_string(), "transparent");
        assert_eq!(Color::CurrentColor.to_css_string(), "currentColor");
        assert_eq!(
            Color::Named(NamedColor::RebeccaPurple).to_css_string(),
            "rebeccapurple"
        );
    }

    #[test]
    fn test_color_to_css_hsl() {
        assert_eq!(Color::Hsl(210.0, 40.0, 96.1).to_css_string(), "hsl(210,40%,96.1%)");
        assert_eq!(
            Color::Hsla(0.0, 84.2, 60.2, 0.5).to_css_string(),
            "hsla(0,84.2%,60.2%,0.5)"
        );
    }

    #[test]
    fn test_color_non_finite() {
        use crate::style::SlotValue;

        assert!(!Color::Hsl(f32::NAN, 0.0, 0.0).is_finite());
        assert!(!Color::Hsla(0.0, 0.0, 0.0, f32::INFINITY).is_finite());
        assert!(Color::Hsl(210.0, 40.0, 96.1).is_finite());
        assert!(Color::BLACK.is_finite());

        assert!(Some(Color::Hsl(f32::NAN, 0.0, 0.0)).as_set().is_none());
        assert!(Some(Color::Hsl(0.0, 0.0, 0.0)).as_set().is_some());
    }

    #[test]
    fn test_color_from_str() {
        assert_eq!("#000".parse::<Color>().unwrap(), Color::BLACK);
        assert_eq!("#0F172A".parse::<Color>().unwrap(), Color::hex(0x0f172a));
        assert_eq!("#ff000080".parse::<Color>().unwrap(), Color::rgba(255, 0, 0, 0x80));
        assert_eq!("#f008".parse::<Color>().unwrap(), Color::rgba(255, 0, 0, 0x88));
        assert_eq!("Transparent".parse::<Color>().unwrap(), Color::Transparent);
        assert_eq!("currentcolor".parse::<Color>().unwrap(), Color::CurrentColor);
        assert_eq!(
            "SlateGray".parse::<Color>().unwrap(),
            Color::Named(NamedColor::SlateGray)
        );
        assert_eq!(
            "hsl(222.5, 47%, 11%)".parse::<Color>().unwrap(),
            Color::Hsl(222.5, 47.0, 11.0)
        );
        assert_eq!(
            "hsla(0,0%,100%,0.5)".parse::<Color>().unwrap(),
            Color::Hsla(0.0, 0.0, 100.0, 0.5)
        );
    }

    #[test]
    fn test_color_from_str_rejects() {
        for input in [
            "",
            "#12",
            "#12345",
            "#ggg",
            "bluish",
            "rgb(0,0,0)",
            "hsl(0,120%,50%)",
            "hsla(0,0%,0%,2)",
            "red blue",
        ] {
            match input.parse::<Color>() {
                Err(Error::InvalidValue { property, .. }) => assert_eq!(property, "Color"),
                other => panic!("{input:?} should be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_named_colors_are_lowercase_keywords() {
        assert_eq!(NamedColor::ALL.len(), 148);
        for named in NamedColor::ALL {
            let css = named.as_str();
            assert_eq!(css, css.to_ascii_lowercase());
            assert_eq!(css.parse::<Color>().unwrap(), Color::Named(*named));
        }
    }
}
