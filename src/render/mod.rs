//! Barcode rendering
//!
//! Lays a bar-state string out on a fixed 42-slot track and draws it either
//! as text or as an RGB image. Slots between the end of the barcode and the
//! 34-bar minimum use a darker filler than the slots up to the 42-bar maximum,
//! so a short barcode is visibly incomplete.

use std::collections::BTreeSet;

use image::{Rgb, RgbImage};
use rayon::prelude::*;

use crate::decoder::{MAX_LENGTH, MIN_LENGTH};
use crate::error::Rm4Error;
use crate::models::Bar;

/// Number of slots on the display track
pub const TRACK_SLOTS: usize = MAX_LENGTH;
/// Slot index where the guard filler begins
pub const GUARD_SLOT: usize = MIN_LENGTH;
/// Largest RGB buffer `rasterize` will allocate, in bytes
pub const MAX_CANVAS_BYTES: usize = 1 << 28;

/// Colour class of one cell of a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Nothing drawn
    Blank,
    /// Part of a bar
    Ink,
    /// Part of a bar implicated in an error, or an unknown symbol
    Flagged,
    /// Empty tracker position below the minimum length
    Filler,
    /// Empty tracker position between the minimum and maximum length
    GuardFiller,
}

impl Cell {
    fn rgb(self) -> Rgb<u8> {
        match self {
            Cell::Blank => Rgb([0xFF, 0xFF, 0xFF]),
            Cell::Ink => Rgb([0x00, 0x00, 0x00]),
            Cell::Flagged => Rgb([0xFF, 0x00, 0x00]),
            Cell::Filler => Rgb([0xCC, 0xCC, 0xCC]),
            Cell::GuardFiller => Rgb([0xEE, 0xEE, 0xEE]),
        }
    }

    fn glyph(self) -> char {
        match self {
            Cell::Blank => ' ',
            Cell::Ink => '|',
            Cell::Flagged => '!',
            Cell::Filler => '.',
            Cell::GuardFiller => ':',
        }
    }
}

/// One bar position: ascender, tracker and descender cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Ascender cell
    pub top: Cell,
    /// Tracker cell
    pub mid: Cell,
    /// Descender cell
    pub bottom: Cell,
}

impl Slot {
    fn cells(&self) -> [Cell; 3] {
        [self.top, self.mid, self.bottom]
    }

    fn empty(fill: Cell) -> Self {
        Self {
            top: Cell::Blank,
            mid: fill,
            bottom: Cell::Blank,
        }
    }
}

/// Geometry of a rasterized barcode, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Width of one bar
    pub bar_width: u32,
    /// Space between adjacent bars
    pub bar_gap: u32,
    /// Height of each of the three rows
    pub row_height: u32,
    /// Blank margin on every side
    pub quiet_zone: u32,
}

impl RenderConfig {
    /// Geometry from `RM4_BAR_WIDTH`, `RM4_BAR_GAP`, `RM4_ROW_HEIGHT`, `RM4_QUIET_ZONE`
    pub fn from_env() -> Self {
        Self {
            bar_width: crate::config::bar_width(),
            bar_gap: crate::config::bar_gap(),
            row_height: crate::config::row_height(),
            quiet_zone: crate::config::quiet_zone(),
        }
    }

    /// Image width for a full track, `None` if it does not fit in a `u32`
    pub fn width(&self) -> Option<u32> {
        let slots = TRACK_SLOTS as u32;
        let margins = self.quiet_zone.checked_mul(2)?;
        let bars = self.bar_width.checked_mul(slots)?;
        let gaps = self.bar_gap.checked_mul(slots - 1)?;
        margins.checked_add(bars)?.checked_add(gaps)
    }

    /// Image height, `None` if it does not fit in a `u32`
    pub fn height(&self) -> Option<u32> {
        let margins = self.quiet_zone.checked_mul(2)?;
        margins.checked_add(self.row_height.checked_mul(3)?)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            bar_width: 4,
            bar_gap: 3,
            row_height: 8,
            quiet_zone: 8,
        }
    }
}

/// Lay out a bar-state string on the 42-slot track
///
/// Symbols past the last slot are not drawn.
pub fn layout(barcode: &str, flagged: &BTreeSet<usize>) -> Vec<Slot> {
    let mut slots: Vec<Slot> = barcode
        .chars()
        .take(TRACK_SLOTS)
        .enumerate()
        .map(|(i, c)| {
            let ink = if flagged.contains(&i) {
                Cell::Flagged
            } else {
                Cell::Ink
            };
            match Bar::from_char(c) {
                Some(bar) => Slot {
                    top: if bar.has_top() { ink } else { Cell::Blank },
                    mid: ink,
                    bottom: if bar.has_bottom() { ink } else { Cell::Blank },
                },
                None => Slot {
                    top: Cell::Flagged,
                    mid: Cell::Flagged,
                    bottom: Cell::Flagged,
                },
            }
        })
        .collect();

    while slots.len() < TRACK_SLOTS {
        let fill = if slots.len() < GUARD_SLOT {
            Cell::Filler
        } else {
            Cell::GuardFiller
        };
        slots.push(Slot::empty(fill));
    }
    slots
}

/// Three lines of text, one per row
pub fn to_ascii(slots: &[Slot]) -> String {
    let mut out = String::with_capacity(3 * (slots.len() + 1));
    for row in 0..3 {
        out.extend(slots.iter().map(|slot| slot.cells()[row].glyph()));
        out.push('\n');
    }
    out
}

/// Draw the slots into an RGB image
pub fn rasterize(slots: &[Slot], config: &RenderConfig) -> Result<RgbImage, Rm4Error> {
    let (Some(width), Some(height)) = (config.width(), config.height()) else {
        return Err(Rm4Error::CanvasTooLarge);
    };
    if width == 0 || height == 0 {
        return Err(Rm4Error::EmptyCanvas);
    }

    let stride = (width as usize)
        .checked_mul(3)
        .ok_or(Rm4Error::CanvasTooLarge)?;
    let total = stride
        .checked_mul(height as usize)
        .filter(|&bytes| bytes <= MAX_CANVAS_BYTES)
        .ok_or(Rm4Error::CanvasTooLarge)?;
    let quiet = config.quiet_zone as usize;
    let row_height = config.row_height as usize;
    let pitch = config.bar_width as usize + config.bar_gap as usize;
    let bar_width = config.bar_width as usize;

    let mut buffer = vec![0xFFu8; total];
    buffer
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, line)| {
            if y < quiet || y >= quiet + 3 * row_height {
                return;
            }
            let row = (y - quiet) / row_height;
            for (i, slot) in slots.iter().take(TRACK_SLOTS).enumerate() {
                let Rgb(color) = slot.cells()[row].rgb();
                let x0 = quiet + i * pitch;
                for x in x0..x0 + bar_width {
                    line[x * 3..x * 3 + 3].copy_from_slice(&color);
                }
            }
        });

    RgbImage::from_raw(width, height, buffer).ok_or(Rm4Error::EmptyCanvas)
}
