//! Stylesheets: ordered lists of style rules rendered into one CSS text.
//!
//! Rules are rendered in insertion order. Rules with nothing to emit are
//! dropped from the output, so a separator never appears twice in a row or
//! at either end.
//!
//! # Example
//!
//! ```
//! use stylekit::{Color, Props, Style, Stylesheet, ToCss, Unit};
//!
//! let sheet: Stylesheet = vec![
//!     Style::new("body", Props { margin: Unit::Px(0.0), ..Default::default() }),
//!     Style::new(".unused", Props::default()),
//!     Style::new("a", Props { color: Some(Color::hex(0x2563eb)), ..Default::default() }),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(sheet.to_css_string(), "body{margin:0;}a{color:#2563eb;}");
//! assert_eq!(sheet.to_css_with_separator("\n"), "body{margin:0;}\na{color:#2563eb;}");
//! ```

use std::io;

use crate::Result;
use crate::style::{Style, ToCss};

/// An ordered collection of style rules.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(transparent))]
pub struct Stylesheet {
    pub rules: Vec<Style>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule.
    pub fn push(&mut self, rule: Style) {
        self.rules.push(rule);
    }

    /// Number of rules, including ones that render to nothing.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Style> {
        self.rules.iter()
    }

    /// Render every non-empty rule, putting `separator` between them.
    pub fn to_css_with_separator(&self, separator: &str) -> String {
        let mut buf = String::new();
        self.render(&mut buf, separator);
        buf
    }

    /// Render the stylesheet and write it to `w`.
    pub fn write_css<W: io::Write>(&self, w: &mut W, separator: &str) -> Result<()> {
        let css = self.to_css_with_separator(separator);
        log::debug!("writing {} bytes of CSS", css.len());
        w.write_all(css.as_bytes())?;
        Ok(())
    }

    fn render(&self, buf: &mut String, separator: &str) {
        let mut emitted = 0usize;
        for rule in &self.rules {
            let before = buf.len();
            if emitted > 0 {
                buf.push_str(separator);
            }
            let body = buf.len();
            rule.to_css(buf);

            if buf.len() == body {
                log::trace!("skipping empty rule {:?}", rule.selector);
                buf.truncate(before);
            } else {
                emitted += 1;
            }
        }
        log::debug!("rendered {emitted} of {} rules", self.rules.len());
    }
}

#[cfg(feature = "json")]
impl Stylesheet {
    /// Load a stylesheet from a JSON document.
    ///
    /// The document is an array of rules:
    ///
    /// ```json
    /// [
    ///   {
    ///     "selector": ".badge",
    ///     "props": { "display": "inline-flex", "padding-top": "4px" },
    ///     "custom-props": [{ "attr": "user-select", "value": "none" }]
    ///   }
    /// ]
    /// ```
    ///
    /// Property values are CSS text and are parsed with the value types'
    /// `FromStr` impls. Unit properties also take bare numbers. Unknown
    /// property names are an error.
    pub fn from_json(json: &str) -> Result<Self> {
        let sheet: Stylesheet = serde_json::from_str(json)?;
        log::debug!("loaded {} rules", sheet.len());
        Ok(sheet)
    }

    /// Load a stylesheet from a JSON reader.
    pub fn from_json_reader<R: io::Read>(reader: R) -> Result<Self> {
        let sheet: Stylesheet = serde_json::from_reader(io::BufReader::new(reader))?;
        log::debug!("loaded {} rules", sheet.len());
        Ok(sheet)
    }
}

impl ToCss for Stylesheet {
    fn to_css(&self, buf: &mut String) {
        self.render(buf, "");
    }
}

impl From<Vec<Style>> for Stylesheet {
    fn from(rules: Vec<Style>) -> Self {
        Self { rules }
    }
}

impl FromIterator<Style> for Stylesheet {
    fn from_iter<I: IntoIterator<Item = Style>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl Extend<Style> for Stylesheet {
    fn extend<I: IntoIterator<Item = Style>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}

impl IntoIterator for Stylesheet {
    type Item = Style;
    type IntoIter = std::vec::IntoIter<Style>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

impl<'a> IntoIterator for &'a Stylesheet {
    type Item = &'a Style;
    type IntoIter = std::slice::Iter<'a, Style>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
