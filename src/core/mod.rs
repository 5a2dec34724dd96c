//! # Core Application Logic
//!
//! This module contains the guide's navigation logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Model (records)      │
//!                    │  • State (view state)   │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`model`]: Record types for destinations, transport, resources, hero images
//! - [`state`]: The `App` struct: section, drill-down selection, country filters
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Layered settings (file, env, CLI)

pub mod action;
pub mod config;
pub mod model;
pub mod state;
