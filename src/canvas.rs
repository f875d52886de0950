use std::fmt;

/// Number of pixels packed into a single byte.
pub const PIXELS_PER_BYTE: u32 = 4;

/// The pixel grid a packed stream is defined over.
///
/// The format is headerless, so both sides of the codec have to agree on the
/// canvas out of band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
}

impl Canvas {
    /// The 320x240 LCD of the calculator.
    pub const SCREEN: Canvas = Canvas::new(320, 240);

    pub const fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Canvas must not be empty");

        Canvas { width, height }
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Bytes per row. A trailing group of fewer than 4 pixels still takes a full byte.
    pub const fn row_bytes(&self) -> usize {
        self.width.div_ceil(PIXELS_PER_BYTE) as usize
    }

    /// Total length of a packed stream for this canvas.
    pub const fn packed_len(&self) -> usize {
        self.row_bytes() * self.height as usize
    }

    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Index of the byte holding pixel (x, y).
    pub const fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.row_bytes() + (x / PIXELS_PER_BYTE) as usize
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Canvas::SCREEN
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
