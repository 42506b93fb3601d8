//! Theme and Colors
//!
//! The bill-splitter palette. Balances read at a glance: red when the user
//! owes, green when the friend owes, plain when even.

use ratatui::style::{Color, Modifier, Style};

use ledger_core::BalanceStatus;

// ============================================================================
// Balance Colors
// ============================================================================

/// User owes the friend
pub const OWE_RED: Color = Color::Rgb(230, 80, 80);

/// Friend owes the user
pub const OWED_GREEN: Color = Color::Rgb(120, 210, 120);

/// Even balance
pub const EVEN_GRAY: Color = Color::Rgb(170, 170, 170);

// ============================================================================
// UI Colors
// ============================================================================

/// Titles, the selected row, and buttons
pub const ACCENT_ORANGE: Color = Color::Rgb(255, 169, 77);

/// Row background when selected
pub const SELECTED_BG: Color = Color::Rgb(255, 244, 230);

/// Avatar URLs, hints, disabled fields
pub const DIM_GRAY: Color = Color::Rgb(100, 100, 100);

/// Field being edited
pub const FOCUS_YELLOW: Color = Color::Yellow;

/// Style for a balance status line
#[must_use]
pub fn status_style(status: &BalanceStatus) -> Style {
    let color = match status {
        BalanceStatus::YouOwe(_) => OWE_RED,
        BalanceStatus::OwesYou(_) => OWED_GREEN,
        BalanceStatus::Even => EVEN_GRAY,
    };
    Style::default().fg(color)
}

/// Style for a button label
#[must_use]
pub fn button_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(ACCENT_ORANGE)
        .add_modifier(Modifier::BOLD)
}

/// Style for a heading
#[must_use]
pub fn title_style() -> Style {
    Style::default()
        .fg(ACCENT_ORANGE)
        .add_modifier(Modifier::BOLD)
}
