//! Colors - Converse Theme Colors

use gpui::{rgb, rgba, Rgba};

/// Converse color palette - All colors are accessed via associated functions
pub struct ConverseColors;

impl ConverseColors {
    // Background colors
    /// Main window background
    pub fn background() -> Rgba { rgb(0x343541) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Sidebar background - near-black
    pub fn sidebar_bg() -> Rgba { rgb(0x202123) }
    /// Modal backdrop - translucent black
    pub fn backdrop() -> Rgba { rgba(0x00000080) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }
    /// Sidebar text
    pub fn text_sidebar() -> Rgba { rgb(0xd1d5db) }

    // Status colors
    /// Success - Green
    pub fn success() -> Rgba { rgb(0x22c55e) }
    /// Error/Danger - Red
    pub fn danger() -> Rgba { rgb(0xef4444) }
    /// Info - Blue
    pub fn info() -> Rgba { rgb(0x3b82f6) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }
    /// Border on dark surfaces
    pub fn border_dark() -> Rgba { rgb(0x4b5563) }

    // Interactive colors
    /// Sidebar row hover
    pub fn sidebar_row_hover() -> Rgba { rgba(0xffffff1a) }
    /// Modal entry hover
    pub fn entry_hover() -> Rgba { rgb(0xf3f4f6) }
    /// Toast background - dark card
    pub fn toast_bg() -> Rgba { rgb(0x1f2937) }
}
