//! CSS value parsing.
//!
//! Single values only: stylesheets are built in code, never parsed.

mod values;

pub(crate) use values::{
    parse_all, parse_background_image, parse_border, parse_color, parse_unit,
};
