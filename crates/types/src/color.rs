//! RGB565 color packing and the sprite palette.

use thiserror::Error;

const RED_MASK: u16 = 0xF800;
const GREEN_MASK: u16 = 0x07E0;
const BLUE_MASK: u16 = 0x001F;

/// A 16-bit RGB565 pixel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PackedColor(u16);

impl PackedColor {
    pub const BLACK: PackedColor = PackedColor(0);

    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    pub const fn red(self) -> u8 {
        ((self.0 & RED_MASK) >> 11) as u8
    }

    pub const fn green(self) -> u8 {
        ((self.0 & GREEN_MASK) >> 5) as u8
    }

    pub const fn blue(self) -> u8 {
        (self.0 & BLUE_MASK) as u8
    }

    /// Bytes as they are laid out in a surface.
    pub const fn to_ne_bytes(self) -> [u8; 2] {
        self.0.to_ne_bytes()
    }
}

/// Pack pre-scaled channel intensities into RGB565.
///
/// Red and blue are 5-bit (0-31), green is 6-bit (0-63). Bits beyond each
/// channel width are masked off, never validated.
pub const fn make_color(r: u32, g: u32, b: u32) -> PackedColor {
    PackedColor(
        (((r << 11) as u16) & RED_MASK) | (((g << 5) as u16) & GREEN_MASK) | ((b as u16) & BLUE_MASK),
    )
}

/// Returned when a palette id has no color bound to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown color id {0} (expected 0..=3)")]
pub struct UnknownColorId(pub u8);

/// The four colors the sprite is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Palette {
    Black,
    White,
    Red,
    Purple,
}

impl Palette {
    pub const ALL: [Palette; 4] = [Palette::Black, Palette::White, Palette::Red, Palette::Purple];

    pub const fn color(self) -> PackedColor {
        match self {
            Palette::Black => make_color(0, 0, 0),
            Palette::White => make_color(31, 63, 31),
            Palette::Red => make_color(31, 0, 10),
            Palette::Purple => make_color(15, 0, 15),
        }
    }

    pub const fn id(self) -> u8 {
        match self {
            Palette::Black => 0,
            Palette::White => 1,
            Palette::Red => 2,
            Palette::Purple => 3,
        }
    }
}

impl TryFrom<u8> for Palette {
    type Error = UnknownColorId;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Palette::Black),
            1 => Ok(Palette::White),
            2 => Ok(Palette::Red),
            3 => Ok(Palette::Purple),
            other => Err(UnknownColorId(other)),
        }
    }
}

impl From<Palette> for PackedColor {
    fn from(value: Palette) -> Self {
        value.color()
    }
}
