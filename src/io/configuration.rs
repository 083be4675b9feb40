//! Pipeline constants and runtime configuration defaults

/// Largest tile edge a block may be rendered at, in pixels
pub const MAX_TILE_SIZE: u32 = 72;

/// Number of nearest tiles each block chooses from
pub const DEFAULT_JITTER: usize = 3;

/// Default block edge in output pixels
pub const DEFAULT_BLOCK_SIZE: u32 = 8;

/// Default output scale relative to the source image
pub const DEFAULT_SCALE: f64 = 1.0;

/// Default number of animation frames
pub const DEFAULT_FRAME_COUNT: usize = 1;

/// Delay between GIF animation frames in centiseconds
pub const DEFAULT_FRAME_DELAY_CS: u32 = 20;

/// Directory searched for tile images when none is given
pub const DEFAULT_TILE_DIRECTORY: &str = "emojis";

// GIF stores logical screen dimensions as u16
/// Largest output edge the animation container can describe
pub const MAX_OUTPUT_DIMENSION: u32 = u16::MAX as u32;

/// Number of color channels indexed per tile (R, G, B, A)
pub const COLOR_DIMENSIONS: usize = 4;

// Pixels below this alpha are emitted as the GIF transparent index
/// Alpha threshold separating transparent from opaque output pixels
pub const TRANSPARENCY_THRESHOLD: u8 = 128;

/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
