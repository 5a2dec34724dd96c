//! # Actions
//!
//! Everything that can happen in the guide becomes an `Action`.
//! User clicks "Explore"? That's `Action::Navigate(Section::Explore)`.
//! User picks a city card? That's `Action::SelectDestination(city)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` for the adapter to carry out.
//! No I/O here. Opening a browser happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```

use log::{debug, info};

use crate::core::model::{Destination, ExternalResource, TransportOption};
use crate::core::state::{App, Section, Selection};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A header navigation target was clicked.
    Navigate(Section),
    /// The logo was clicked. Same as navigating home.
    LogoClicked,
    /// Pick a country in the active section view.
    SelectCountry(String),
    NextCountry,
    PrevCountry,
    SelectDestination(&'static Destination),
    SelectTransport(&'static TransportOption),
    /// The detail pane's back button.
    Back,
    /// Follow a resource's outbound link.
    OpenResource(&'static ExternalResource),
    Quit,
}

/// Side effects requested by `update()`, carried out by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Open a URL in a new browsing context. Never navigates within the app.
    OpenLink(&'static str),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Navigate(target) => {
            navigate(app, target);
            Effect::None
        }
        Action::LogoClicked => {
            navigate(app, Section::Home);
            Effect::None
        }
        Action::SelectCountry(country) => {
            if let Some(section) = active_filter_section(app) {
                match section {
                    Section::Guides => app.guides.select(&country),
                    _ => app.explore.select(&country),
                }
                debug!("{} filter -> {}", section.tag(), country);
            }
            Effect::None
        }
        Action::NextCountry | Action::PrevCountry => {
            let forward = action == Action::NextCountry;
            match active_filter_section(app) {
                Some(Section::Guides) if forward => app.guides.select_next(),
                Some(Section::Guides) => app.guides.select_prev(),
                Some(_) if forward => app.explore.select_next(),
                Some(_) => app.explore.select_prev(),
                None => {}
            }
            Effect::None
        }
        Action::SelectDestination(destination) => {
            info!("Opening city guide: {}", destination.name);
            app.selection = Selection::Destination(destination);
            Effect::None
        }
        Action::SelectTransport(option) => {
            info!("Opening transportation guide: {}", option.name);
            app.selection = Selection::Transport(option);
            Effect::None
        }
        Action::Back => {
            app.selection = Selection::None;
            Effect::None
        }
        Action::OpenResource(resource) => {
            info!("Opening external link: {}", resource.url);
            app.status_message = format!("Opening {} in your browser", resource.name);
            Effect::OpenLink(resource.url)
        }
        Action::Quit => Effect::Quit,
    }
}

/// Clear any drill-down first, then switch sections, so no frame ever pairs
/// a stale detail pane with the new section.
fn navigate(app: &mut App, target: Section) {
    app.selection = Selection::None;
    if app.section != target {
        info!("Section: {} -> {}", app.section.tag(), target.tag());
    }
    app.section = target;
    app.status_message.clear();
}

/// The section whose country filter is on screen, if any.
fn active_filter_section(app: &App) -> Option<Section> {
    if app.is_detail_active() {
        return None;
    }
    match app.section {
        Section::Guides | Section::Explore => Some(app.section),
        Section::Home | Section::Discover => None,
    }
}
