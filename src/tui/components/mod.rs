// Components module - reusable UI building blocks
//
// - Card: one idea, sized to its wrapped content
// - Title bar: app name, idea count, mode indicator
// - Status bar: sort order and key hints
// - Help / Logs: centered modal overlays
// - Toast: auto-dismissing notification
//
// Each component is a focused, single-responsibility module.

pub mod card;
pub mod help;
pub mod logs;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use card::CardContext;
pub use toast::Toast;

use ratatui::layout::Rect;

/// Calculate centered rect for modal overlays
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
