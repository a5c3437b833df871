//! Sizing and copy constants for the assistant panel.

pub const PANEL_WIDTH: f64 = 320.0;
pub const PANEL_MAX_HEIGHT: f64 = 420.0;
pub const PANEL_CORNER_RADIUS: f64 = 10.0;
pub const SUGGESTION_ROW_HEIGHT: f64 = 28.0;

pub const PANEL_TITLE: &str = "Writing Suggestions";
pub const EMPTY_PANEL_NOTICE: &str = "No issues found";

/// Suggestion rows shown per issue before the list is capped.
pub const MAX_VISIBLE_SUGGESTIONS: usize = 5;

/// Display limits for single-line surfaces, in user-visible characters.
pub const TOOLTIP_MAX_CHARS: usize = 120;
pub const STATUS_PREVIEW_CHARS: usize = 60;
