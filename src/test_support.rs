//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::buffer::Buffer;

use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Section};
use crate::tui::TuiState;

/// Creates a test App on the Guides section with the bundled fixtures.
pub fn test_app() -> App {
    App::new(Section::Guides)
}

/// Presentation state with the entrance animation off, so every card is
/// drawn on the first frame.
pub fn test_tui(app: &App) -> TuiState {
    let config = ResolvedConfig {
        animations: false,
        ..Default::default()
    };
    TuiState::new(app, &config)
}

/// All cell symbols of a rendered buffer, row after row.
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer.content().iter().map(|cell| cell.symbol()).collect()
}
