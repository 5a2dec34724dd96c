//! Guide library exports for testing

pub mod core;
pub mod fixtures;
pub mod tui;

#[cfg(test)]
pub mod test_support;
