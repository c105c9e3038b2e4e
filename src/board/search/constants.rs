//! Search score constants.

/// Score of a checkmated side to move, negated. Exceeds any material sum.
pub const CHECKMATE: i32 = 100_000;

/// Score of a stalemate, for either side
pub const STALEMATE: i32 = 0;

/// Half-width of the root alpha-beta window
pub(crate) const ROOT_WINDOW: i32 = 2 * CHECKMATE;

/// Deepest fixed depth a caller may request
pub const MAX_SEARCH_DEPTH: u32 = 5;

/// Depth used when the caller does not choose one
pub const DEFAULT_SEARCH_DEPTH: u32 = 2;
