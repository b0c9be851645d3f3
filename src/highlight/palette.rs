//! @acp:module "Palette"
//! @acp:summary "Category colours and terminal rendering of tagged text"
//! @acp:domain highlight
//! @acp:layer presentation
//!
//! Rendering is a consumer of tags, not part of tagging. Tags are painted in
//! generation order so a later category overwrites an earlier one on the
//! characters they share.

use std::collections::HashMap;

use console::Style;
use serde::{Deserialize, Serialize};

use super::{Category, Tag};
use crate::error::DoxError;

/// @acp:summary "An RGB colour written as #RRGGBB"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Nearest entry of the 6x6x6 cube in the 256-colour terminal palette.
    pub fn ansi256(&self) -> u8 {
        let level = |c: u8| ((c as u16 * 5 + 127) / 255) as u8;
        16 + 36 * level(self.r) + 6 * level(self.g) + level(self.b)
    }
}

impl std::str::FromStr for Colour {
    type Err = DoxError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || DoxError::InvalidColour(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Colour::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Colour {
    type Error = DoxError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Colour> for String {
    fn from(colour: Colour) -> Self {
        colour.to_string()
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// @acp:summary "Colour assigned to each highlight category"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colours: HashMap<Category, Colour>,
}

impl Default for Palette {
    fn default() -> Self {
        let colours = [
            (Category::Keyword, Colour::rgb(0x92, 0x00, 0x5E)),
            (Category::Type, Colour::rgb(0x34, 0x85, 0x96)),
            (Category::String, Colour::rgb(0x01, 0x06, 0xC7)),
            (Category::Number, Colour::rgb(0x85, 0x1D, 0xC5)),
            (Category::Comment, Colour::rgb(0x56, 0x7F, 0x62)),
            (Category::Macro, Colour::rgb(0x99, 0x00, 0x00)),
        ]
        .into_iter()
        .collect();
        Self { colours }
    }
}

impl Palette {
    pub fn colour(&self, category: Category) -> Option<Colour> {
        self.colours.get(&category).copied()
    }

    pub fn set(&mut self, category: Category, colour: Colour) {
        self.colours.insert(category, colour);
    }

    /// Overlay `other` on top of this palette.
    pub fn merged(mut self, other: &Palette) -> Self {
        self.colours
            .extend(other.colours.iter().map(|(c, col)| (*c, *col)));
        self
    }
}

/// @acp:summary "Resolve the winning category for every character"
/// Later tags overwrite earlier ones; out-of-range ends are clamped.
pub fn paint(len: usize, tags: &[Tag]) -> Vec<Option<Category>> {
    let mut cells = vec![None; len];
    for tag in tags {
        let end = tag.end.min(len);
        if tag.start < end {
            cells[tag.start..end].fill(Some(tag.category));
        }
    }
    cells
}

/// @acp:summary "Render text with 256-colour ANSI styling for each tag"
pub fn render_ansi(text: &str, tags: &[Tag], palette: &Palette) -> String {
    let chars: Vec<char> = text.chars().collect();
    let cells = paint(chars.len(), tags);

    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let category = cells[i];
        let run_end = (i..chars.len())
            .find(|&j| cells[j] != category)
            .unwrap_or(chars.len());
        let run: String = chars[i..run_end].iter().collect();

        match category.and_then(|c| palette.colour(c)) {
            Some(colour) => {
                let style = Style::new().color256(colour.ansi256()).force_styling(true);
                out.push_str(&style.apply_to(run).to_string());
            }
            None => out.push_str(&run),
        }
        i = run_end;
    }
    out
}
