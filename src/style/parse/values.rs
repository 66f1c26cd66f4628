//! CSS value parsing functions.
//!
//! This module contains parsers for single values like units, colors and
//! borders. They back the `FromStr` impls of the value types.

use cssparser::{ParseError, Parser, ParserInput, Token};

use crate::style::properties::BorderStyle;
use crate::style::{BackgroundImage, Border, Color, NamedColor, Unit};
use crate::{Error, Result};

/// Run `parse` over the whole of `input`.
///
/// Fails with `InvalidValue` naming `property` unless the parser produced a
/// value and every token was consumed.
pub(crate) fn parse_all<T>(
    property: &'static str,
    input: &str,
    parse: impl for<'i, 't> FnOnce(&mut Parser<'i, 't>) -> Option<T>,
) -> Result<T> {
    let mut parser_input = ParserInput::new(input);
    let mut parser = Parser::new(&mut parser_input);
    match parse(&mut parser) {
        Some(value) if parser.is_exhausted() => Ok(value),
        _ => Err(Error::invalid(property, input)),
    }
}

/// Percentages keep their integer spelling when they have one, so `33%`
/// stays exactly 33 instead of going through `0.33 * 100`.
fn percent_value(unit_value: f32, int_value: Option<i32>) -> f32 {
    match int_value {
        Some(v) => v as f32,
        None => unit_value * 100.0,
    }
}

pub(crate) fn parse_unit(input: &mut Parser<'_, '_>) -> Option<Unit> {
    let unit = match input.next().ok()? {
        Token::Number { value, .. } => Unit::Number(*value),
        Token::Percentage {
            unit_value,
            int_value,
            ..
        } => Unit::Percent(percent_value(*unit_value, *int_value)),
        Token::Dimension { value, unit, .. } => {
            let value = *value;
            match unit.to_ascii_lowercase().as_str() {
                "px" => Unit::Px(value),
                "em" => Unit::Em(value),
                "rem" => Unit::Rem(value),
                "vw" => Unit::Vw(value),
                "vh" => Unit::Vh(value),
                "ch" => Unit::Ch(value),
                "deg" => Unit::Deg(value),
                _ => return None,
            }
        }
        Token::Ident(ident) => match ident.to_ascii_lowercase().as_str() {
            "auto" => Unit::Auto,
            "none" => Unit::None,
            _ => return None,
        },
        _ => return None,
    };
    unit.is_finite().then_some(unit)
}

pub(crate) fn parse_color(input: &mut Parser<'_, '_>) -> Option<Color> {
    // Keywords first: transparent, currentColor, then the named colors
    if let Ok(ident) = input.try_parse(|i| i.expect_ident_cloned()) {
        return match ident.to_ascii_lowercase().as_str() {
            "transparent" => Some(Color::Transparent),
            "currentcolor" => Some(Color::CurrentColor),
            name => NamedColor::from_css(name).map(Color::Named),
        };
    }

    // cssparser yields IDHash for `#abc` and Hash for digit-led `#123`.
    // The token type is checked inside try_parse so the position is reset
    // on a mismatch.
    if let Ok(hash) = input.try_parse(|i| -> std::result::Result<_, ParseError<'_, ()>> {
        match i.next()? {
            Token::IDHash(h) | Token::Hash(h) => Ok(h.clone()),
            _ => Err(i.new_custom_error(())),
        }
    }) {
        return parse_hex_color(hash.as_ref());
    }

    input.try_parse(parse_hsl_function).ok()
}

fn parse_hex_color(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => Some(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Color::rgba(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
        6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

fn parse_hsl_function<'i>(input: &mut Parser<'i, '_>) -> std::result::Result<Color, ParseError<'i, ()>> {
    let name = input.expect_function()?.clone();
    let with_alpha = match name.to_ascii_lowercase().as_str() {
        "hsl" => false,
        "hsla" => true,
        _ => return Err(input.new_custom_error(())),
    };
    input.parse_nested_block(|input| {
        let h = input.expect_number()?;
        input.expect_comma()?;
        let s = parse_percentage_component(input)?;
        input.expect_comma()?;
        let l = parse_percentage_component(input)?;
        if !with_alpha {
            return Ok(Color::Hsl(h, s, l));
        }
        input.expect_comma()?;
        let location = input.current_source_location();
        let a = input.expect_number()?;
        if !(0.0..=1.0).contains(&a) {
            return Err(location.new_custom_error(()));
        }
        Ok(Color::Hsla(h, s, l, a))
    })
}

/// A saturation or lightness percentage, rejected outside `0%..=100%`.
fn parse_percentage_component<'i>(
    input: &mut Parser<'i, '_>,
) -> std::result::Result<f32, ParseError<'i, ()>> {
    let location = input.current_source_location();
    match input.next()? {
        Token::Percentage {
            unit_value,
            int_value,
            ..
        } => {
            let value = percent_value(*unit_value, *int_value);
            if (0.0..=100.0).contains(&value) {
                Ok(value)
            } else {
                Err(location.new_custom_error(()))
            }
        }
        _ => Err(location.new_custom_error(())),
    }
}

pub(crate) fn parse_border(input: &mut Parser<'_, '_>) -> Option<Border> {
    let width = parse_unit(input)?;
    let style = input.expect_ident_cloned().ok()?;
    let style = BorderStyle::from_css(&style.to_ascii_lowercase())?;
    let color = parse_color(input)?;
    Some(Border::new(width, style, color))
}

pub(crate) fn parse_background_image(input: &mut Parser<'_, '_>) -> Option<BackgroundImage> {
    if input
        .try_parse(|i| i.expect_ident_matching("none"))
        .is_ok()
    {
        return Some(BackgroundImage::None);
    }
    let href = input.expect_url().ok()?;
    Some(BackgroundImage::Url(href.as_ref().to_string()))
}
