use std::collections::BTreeSet;
use std::path::Path;

use crate::error::Rm4Error;
use crate::render::{RenderConfig, layout, rasterize};

/// Uppercase and strip all whitespace from user-typed text.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Parse a list of bar positions such as `"3,7, 12"`.
///
/// Tokens that are not non-negative integers are ignored.
pub fn parse_positions(list: &str) -> BTreeSet<usize> {
    list.split([',', ' '])
        .filter_map(|tok| tok.trim().parse::<usize>().ok())
        .collect()
}

/// Render a bar-state string and write it as an image (format from the extension).
pub fn save_png<P: AsRef<Path>>(
    path: P,
    barcode: &str,
    flagged: &BTreeSet<usize>,
    config: &RenderConfig,
) -> Result<(), Rm4Error> {
    let img = rasterize(&layout(barcode, flagged), config)?;
    img.save(path)?;
    Ok(())
}
