mod canvas;
pub use canvas::Canvas;

mod level;
pub use level::{classify, decode_level, AlphaLevel};

pub mod codec;
pub use codec::{decode, encode, LengthError, PackedAlpha, ShapeError};

pub mod export;

mod load;
pub use load::{fit_to_canvas, load_raster};

mod palette;
pub use palette::{rgb332_to_rgba, DisplayPalette, PaletteError};
