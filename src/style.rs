// Link glyphs and sizing constants for the pagination controls

// --- Link glyphs ---
pub const FIRST_GLYPH: &str = "«";
pub const PREV_GLYPH: &str = "‹";
pub const NEXT_GLYPH: &str = "›";
pub const LAST_GLYPH: &str = "»";
pub const ELLIPSIS_GLYPH: &str = "...";

// --- Controls sizing ---
pub const LINK_SPACING: f32 = 4.0;
pub const LINK_MIN_WIDTH: f32 = 24.0;
