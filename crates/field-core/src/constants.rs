// Shared tuning constants for the dot grid and text pressure effects.

// Pointer
pub const POINTER_SENTINEL: f32 = -100_000.0; // parked pointer position, far outside any radius
pub const DEFAULT_SMOOTHING: f32 = 0.1; // fraction of remaining pointer distance closed per tick
pub const GRID_SMOOTHING: f32 = 1.0; // grid follows the raw pointer; its points ease instead

// Dot grid
pub const DEFAULT_GAP: f32 = 20.0; // px between lattice cells
pub const DEFAULT_DOT_SIZE: f32 = 2.0; // dot diameter in px
pub const DEFAULT_DOT_COLOR: &str = "#000000";
pub const GRID_RADIUS: f32 = 150.0; // px beyond which a dot is unaffected
pub const GRID_STRENGTH: f32 = 20.0; // max dot displacement in px
pub const GRID_EASING: f32 = 0.1; // fraction of remaining dot distance closed per tick

// Text pressure
pub const GLYPH_RADIUS: f32 = 500.0; // px beyond which a glyph stays at rest
pub const GLYPH_COMPRESSION: f32 = 0.2; // horizontal squeeze at full intensity
pub const GLYPH_STRETCH: f32 = 0.5; // vertical stretch at full intensity
pub const MIN_WEIGHT: u16 = 100;
pub const MAX_WEIGHT: u16 = 900;

// Validation floors/ceilings
pub const MIN_SPACING: f32 = 1.0;
pub const MIN_RADIUS: f32 = 1.0;
pub const MIN_FACTOR: f32 = 0.001; // smallest accepted easing/smoothing factor
pub const MAX_COMPRESSION: f32 = 0.95; // keeps scale_x strictly positive
pub const MAX_FONT_WEIGHT: u16 = 1000; // CSS font-weight upper bound
