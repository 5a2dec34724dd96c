//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `Hero`: Home page headline, tags and image slots
//! - `Footer`: Copyright row and status line
//! - `Header`: Logo, nav targets and account buttons (records hitboxes)
//! - `CountrySelector`: Country buttons (records hitboxes)
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep state in `TuiState` and emit events:
//! - `CardGrid`: Responsive card grid with cursor and staggered entrance
//! - `SectionView`: Page title + country selector + card grid
//! - `DetailPane`: Scrollable record view with a back button
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields), not by
//! reaching into `App`. `ui.rs` does the wiring.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! Footer::new(year, &app.status_message, hints).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! Footer::render(frame, area); // reads from global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs               (this file)
//! ├── header.rs            (Logo + nav targets)
//! ├── footer.rs            (Copyright + status line)
//! ├── hero.rs              (Home page)
//! ├── country_selector.rs  (Country buttons)
//! ├── cards.rs             (Card grid + entrance timing)
//! ├── section.rs           (Browsable section view)
//! └── detail.rs            (City / transportation detail)
//! ```

pub mod cards;
pub mod country_selector;
pub mod detail;
pub mod footer;
pub mod header;
pub mod hero;
pub mod section;

pub use cards::{Card, Reveal};
pub use detail::{DetailContent, DetailEvent, DetailPane, DetailPaneState};
pub use footer::Footer;
pub use header::{Header, HeaderTarget};
pub use hero::Hero;
pub use section::{CountryRow, SectionEvent, SectionState, SectionView};
