//! # Fixture Store
//!
//! Compile-time data for every view. Nothing here is mutated at runtime.
//!
//! - [`destinations`]: city guides keyed by country
//! - [`transportation`]: transport options keyed by country
//! - [`resources`]: useful websites/apps and the home-page hero imagery
//!
//! The two keyed collections use independent country sets; a country may
//! appear in one and not the other.

pub mod destinations;
pub mod resources;
pub mod transportation;

pub use destinations::DESTINATIONS;
pub use resources::{HERO_IMAGES, RESOURCES};
pub use transportation::TRANSPORTATION;

use crate::core::model::{Collection, Destination, ExternalResource, HeroImage, TransportOption};

/// The full set of collections a shell renders from.
///
/// `Default` is the built-in data; tests swap in smaller collections.
#[derive(Debug, Clone, Copy)]
pub struct Fixtures {
    pub destinations: Collection<Destination>,
    pub transportation: Collection<TransportOption>,
    pub resources: &'static [ExternalResource],
    pub hero_images: &'static [HeroImage],
}

impl Default for Fixtures {
    fn default() -> Self {
        Self {
            destinations: DESTINATIONS,
            transportation: TRANSPORTATION,
            resources: RESOURCES,
            hero_images: HERO_IMAGES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique<'a>(ids: impl Iterator<Item = &'a str>, what: &str) {
        let mut seen = HashSet::new();
        for id in ids {
            assert!(seen.insert(id), "duplicate {what} id: {id}");
        }
    }

    #[test]
    fn ids_are_unique_within_each_collection() {
        assert_unique(DESTINATIONS.iter().map(|d| d.id), "destination");
        assert_unique(TRANSPORTATION.iter().map(|t| t.id), "transportation");
        assert_unique(RESOURCES.iter().map(|r| r.id), "resource");
        assert_unique(HERO_IMAGES.iter().map(|h| h.slot), "hero slot");
    }

    #[test]
    fn country_order_matches_authoring_order() {
        assert_eq!(
            DESTINATIONS.countries(),
            vec!["China", "Japan", "Italy", "USA", "France"]
        );
        assert_eq!(
            TRANSPORTATION.countries(),
            vec!["China", "Japan", "USA", "Italy", "France"]
        );
    }

    #[test]
    fn tokyo_has_three_highlights_and_one_food() {
        let tokyo = DESTINATIONS
            .entries_for("Japan")
            .iter()
            .find(|d| d.name == "Tokyo")
            .unwrap();
        assert_eq!(tokyo.highlights.len(), 3);
        assert_eq!(tokyo.foods.len(), 1);
        assert_eq!(tokyo.foods[0].dish, "Sushi");
    }

    #[test]
    fn collection_sizes() {
        assert_eq!(DESTINATIONS.len(), 12);
        assert_eq!(TRANSPORTATION.entries_for("China").len(), 10);
        assert_eq!(TRANSPORTATION.entries_for("Japan").len(), 12);
        assert_eq!(RESOURCES.len(), 5);
        assert_eq!(HERO_IMAGES.len(), 7);
    }

    #[test]
    fn detail_groups_keep_insertion_order() {
        let shinkansen = &TRANSPORTATION.entries_for("Japan")[0];
        let titles: Vec<&str> = shinkansen.details.iter().map(|g| g.title).collect();
        assert_eq!(titles, vec!["Booking & Price", "How it Works", "On Board"]);
    }

    #[test]
    fn every_record_has_content() {
        for d in DESTINATIONS.iter() {
            assert!(!d.highlights.is_empty(), "{} has no highlights", d.name);
            assert!(!d.foods.is_empty(), "{} has no foods", d.name);
        }
        for t in TRANSPORTATION.iter() {
            assert!(!t.details.is_empty(), "{} has no details", t.name);
            assert!(t.details.iter().all(|g| !g.points.is_empty()));
        }
        for r in RESOURCES {
            assert!(r.url.starts_with("https://"), "{} url", r.name);
        }
    }
}
