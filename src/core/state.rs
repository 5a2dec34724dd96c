//! # Application State
//!
//! The navigation shell's view-state, with no terminal types in sight.
//! Presentation-only state (cursors, scroll offsets, hitboxes) lives in the
//! `tui` module.
//!
//! ```text
//! App
//! ├── section: Section                          // home | guides | explore | discover
//! ├── selection: Selection                      // drill-down, at most one record
//! ├── guides: CountryFilter<Destination>        // Guides section view filter
//! ├── explore: CountryFilter<TransportOption>   // Explore section view filter
//! ├── resources: &[ExternalResource]            // Discover, unfiltered
//! ├── hero_images: &[HeroImage]                 // Home
//! └── status_message: String                    // status line text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! The filters are never reset by navigation, so returning from a detail
//! pane lands on the same country that was showing before the drill-down.

use clap::ValueEnum;

use crate::core::model::{Collection, Destination, ExternalResource, HeroImage, TransportOption};
use crate::fixtures::Fixtures;

/// A top-level navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Section {
    Home,
    #[default]
    Guides,
    Explore,
    Discover,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Guides,
        Section::Explore,
        Section::Discover,
    ];

    /// Parse a section tag. Anything unrecognized falls back to `Home`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "guides" | "guide" => Section::Guides,
            "explore" => Section::Explore,
            "discover" => Section::Discover,
            _ => Section::Home,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Guides => "guides",
            Section::Explore => "explore",
            Section::Discover => "discover",
        }
    }

    /// Page heading shown above the section's content.
    pub fn page_title(self) -> &'static str {
        match self {
            Section::Home => "Explore The World",
            Section::Guides => "City Guides",
            Section::Explore => "Transportation Guides",
            Section::Discover => "Useful Websites & Apps",
        }
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The drill-down selection. A single variant instead of two nullable
/// fields, so "destination and transport both selected" cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Destination(&'static Destination),
    Transport(&'static TransportOption),
}

impl Selection {
    pub fn is_active(&self) -> bool {
        !matches!(self, Selection::None)
    }
}

/// What the main area shows, resolved from the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    DestinationDetail(&'static Destination),
    TransportDetail(&'static TransportOption),
    Hero,
    Guides,
    Explore,
    Discover,
}

/// "Which country is showing" for one section view.
#[derive(Debug)]
pub struct CountryFilter<T: 'static> {
    collection: Collection<T>,
    selected: Option<String>,
}

impl<T: 'static> CountryFilter<T> {
    /// Starts on the first country of the collection.
    pub fn new(collection: Collection<T>) -> Self {
        Self {
            collection,
            selected: collection.first_country().map(str::to_string),
        }
    }

    pub fn countries(&self) -> Vec<&'static str> {
        self.collection.countries()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Select a country by name. Names without records are accepted and
    /// simply produce an empty result.
    pub fn select(&mut self, country: &str) {
        self.selected = Some(country.to_string());
    }

    /// Records for the selected country, in fixture order.
    pub fn visible(&self) -> &'static [T] {
        match &self.selected {
            Some(country) => self.collection.entries_for(country),
            None => &[],
        }
    }

    pub fn select_next(&mut self) {
        self.step(1);
    }

    pub fn select_prev(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, delta: isize) {
        let countries = self.collection.countries();
        if countries.is_empty() {
            return;
        }
        let len = countries.len() as isize;
        let current = self
            .selected
            .as_deref()
            .and_then(|c| countries.iter().position(|name| *name == c));
        let next = match current {
            Some(i) => (i as isize + delta).rem_euclid(len) as usize,
            None => 0,
        };
        self.selected = Some(countries[next].to_string());
    }
}

pub struct App {
    pub section: Section,
    pub selection: Selection,
    pub guides: CountryFilter<Destination>,
    pub explore: CountryFilter<TransportOption>,
    pub resources: &'static [ExternalResource],
    pub hero_images: &'static [HeroImage],
    pub status_message: String,
}

impl App {
    pub fn new(initial: Section) -> Self {
        Self::with_fixtures(Fixtures::default(), initial)
    }

    pub fn with_fixtures(fixtures: Fixtures, initial: Section) -> Self {
        Self {
            section: initial,
            selection: Selection::None,
            guides: CountryFilter::new(fixtures.destinations),
            explore: CountryFilter::new(fixtures.transportation),
            resources: fixtures.resources,
            hero_images: fixtures.hero_images,
            status_message: String::new(),
        }
    }

    /// Resolve what to display: a selected record wins over the section.
    pub fn screen(&self) -> Screen {
        match self.selection {
            Selection::Destination(d) => Screen::DestinationDetail(d),
            Selection::Transport(t) => Screen::TransportDetail(t),
            Selection::None => match self.section {
                Section::Home => Screen::Hero,
                Section::Guides => Screen::Guides,
                Section::Explore => Screen::Explore,
                Section::Discover => Screen::Discover,
            },
        }
    }

    pub fn is_detail_active(&self) -> bool {
        self.selection.is_active()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Section::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::CountryGroup;
    use crate::test_support::test_app;

    static LETTERS: Collection<char> = Collection::new(&[
        CountryGroup { country: "A", entries: &['a'] },
        CountryGroup { country: "B", entries: &['b', 'β'] },
        CountryGroup { country: "C", entries: &[] },
    ]);

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.section, Section::Guides);
        assert_eq!(app.selection, Selection::None);
        assert_eq!(app.screen(), Screen::Guides);
        assert_eq!(app.guides.selected(), Some("China"));
        assert_eq!(app.explore.selected(), Some("China"));
    }

    #[test]
    fn from_tag_defaults_to_home() {
        assert_eq!(Section::from_tag("explore"), Section::Explore);
        assert_eq!(Section::from_tag(" Discover "), Section::Discover);
        assert_eq!(Section::from_tag("guide"), Section::Guides);
        assert_eq!(Section::from_tag("contact"), Section::Home);
        assert_eq!(Section::from_tag(""), Section::Home);
    }

    #[test]
    fn section_cycle_wraps() {
        assert_eq!(Section::Discover.next(), Section::Home);
        assert_eq!(Section::Home.prev(), Section::Discover);
        assert_eq!(Section::Guides.next(), Section::Explore);
    }

    #[test]
    fn filter_starts_on_first_country() {
        let filter = CountryFilter::new(LETTERS);
        assert_eq!(filter.selected(), Some("A"));
        assert_eq!(filter.visible(), &['a']);
    }

    #[test]
    fn filter_cycles_and_wraps() {
        let mut filter = CountryFilter::new(LETTERS);
        filter.select_next();
        assert_eq!(filter.visible(), &['b', 'β']);
        filter.select_next();
        assert_eq!(filter.selected(), Some("C"));
        assert!(filter.visible().is_empty());
        filter.select_next();
        assert_eq!(filter.selected(), Some("A"));
        filter.select_prev();
        assert_eq!(filter.selected(), Some("C"));
    }

    #[test]
    fn filter_accepts_unknown_country() {
        let mut filter = CountryFilter::new(LETTERS);
        filter.select("Z");
        assert!(filter.visible().is_empty());
        // Stepping from an unknown country restarts at the first one.
        filter.select_next();
        assert_eq!(filter.selected(), Some("A"));
    }

    #[test]
    fn empty_collection_filter_is_empty() {
        let mut filter: CountryFilter<char> = CountryFilter::new(Collection::new(&[]));
        assert_eq!(filter.selected(), None);
        assert!(filter.visible().is_empty());
        filter.select_next();
        assert_eq!(filter.selected(), None);
    }

    #[test]
    fn selection_wins_over_section() {
        let mut app = test_app();
        app.section = Section::Discover;
        let cities = app.guides.visible();
        let beijing = &cities[0];
        app.selection = Selection::Destination(beijing);
        assert_eq!(app.screen(), Screen::DestinationDetail(beijing));
        assert!(app.is_detail_active());
    }
}
