//! `background-image` values.

use std::fmt::Write;
use std::str::FromStr;

use super::parse::{parse_all, parse_background_image};
use super::{CssValue, ToCss, ValueKind};
use crate::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BackgroundImage {
    None,
    /// An image reference, written as a quoted `url("...")`.
    Url(String),
}

impl BackgroundImage {
    pub fn url(href: impl Into<String>) -> Self {
        BackgroundImage::Url(href.into())
    }
}

impl ToCss for BackgroundImage {
    fn to_css(&self, buf: &mut String) {
        match self {
            BackgroundImage::None => buf.push_str("none"),
            BackgroundImage::Url(href) => {
                buf.push_str("url(\"");
                for c in href.chars() {
                    match c {
                        '"' | '\\' => {
                            buf.push('\\');
                            buf.push(c);
                        }
                        // Newlines end a string token; write every control
                        // character as a hex escape
                        c if c.is_control() => {
                            let _ = write!(buf, "\\{:x} ", c as u32);
                        }
                        _ => buf.push(c),
                    }
                }
                buf.push_str("\")");
            }
        }
    }
}

impl CssValue for BackgroundImage {
    const KIND: ValueKind = ValueKind::Image;
}

impl FromStr for BackgroundImage {
    type Err = Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        parse_all("BackgroundImage", s, parse_background_image)
    }
}
