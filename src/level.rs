/// Alpha values decoded for each level. Not the inverse of [`classify`].
const LEVEL_ALPHA: [u8; 4] = [0, 64, 128, 255];

/// A 2-bit quantized alpha value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AlphaLevel(u8);

impl AlphaLevel {
    pub const TRANSPARENT: AlphaLevel = AlphaLevel(0);
    pub const OPAQUE: AlphaLevel = AlphaLevel(3);

    pub const fn new(level: u8) -> Self {
        assert!(level < 4, "AlphaLevel must be less than 4");

        AlphaLevel(level)
    }

    /// Take the low two bits of `bits`, ignoring the rest.
    pub const fn from_bits(bits: u8) -> Self {
        AlphaLevel(bits & 0b11)
    }

    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// The 8-bit alpha this level decodes to.
    pub const fn alpha(&self) -> u8 {
        LEVEL_ALPHA[self.0 as usize]
    }
}

/// Quantize an 8-bit alpha value into one of four levels.
///
/// Only an alpha of exactly 0 maps to level 0.
pub const fn classify(alpha: u8) -> AlphaLevel {
    match alpha {
        0 => AlphaLevel(0),
        1..85 => AlphaLevel(1),
        85..170 => AlphaLevel(2),
        170..=255 => AlphaLevel(3),
    }
}

/// Expand a raw 2-bit level into its 8-bit alpha value.
pub const fn decode_level(level: u8) -> u8 {
    AlphaLevel::from_bits(level).alpha()
}
