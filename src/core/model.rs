//! # Domain Records
//!
//! Plain, immutable record types for everything the guide displays.
//! Every value lives in `'static` memory (see the `fixtures` module) and is
//! never mutated at runtime; views only hold references to it.
//!
//! ```text
//! Collection<T>
//! └── [CountryGroup<T>]        // ordered by authoring order
//!     ├── country: &str
//!     └── entries: [T]         // ordered, display order
//! ```

/// A city guide: highlights, how to get around, and what to eat.
#[derive(Debug, PartialEq, Eq)]
pub struct Destination {
    pub id: &'static str,
    pub name: &'static str,
    pub image: &'static str,
    pub highlights: &'static [&'static str],
    pub transportation: TransitSummary,
    pub foods: &'static [FoodEntry],
}

#[derive(Debug, PartialEq, Eq)]
pub struct TransitSummary {
    pub from_airport: &'static str,
    pub within_city: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct FoodEntry {
    pub dish: &'static str,
    pub description: &'static str,
    pub recommended_venue: &'static str,
}

/// One way of getting around a country, with titled groups of tips.
#[derive(Debug, PartialEq, Eq)]
pub struct TransportOption {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: TransportIcon,
    pub description: &'static str,
    /// Insertion order is display order.
    pub details: &'static [DetailGroup],
}

#[derive(Debug, PartialEq, Eq)]
pub struct DetailGroup {
    pub title: &'static str,
    pub points: &'static [&'static str],
}

/// A website or app worth installing before a trip.
#[derive(Debug, PartialEq, Eq)]
pub struct ExternalResource {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: ResourceIcon,
    pub description: &'static str,
    pub url: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct HeroImage {
    pub src: &'static str,
    pub alt: &'static str,
    pub slot: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportIcon {
    Train,
    Car,
    Plane,
    Bus,
    Boat,
    Bike,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceIcon {
    Message,
    Wallet,
    Plane,
    Book,
    Globe,
}

/// Union of both icon enumerations; the key space of the icon registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconTag {
    Train,
    Car,
    Plane,
    Bus,
    Boat,
    Bike,
    Message,
    Wallet,
    Book,
    Globe,
}

impl From<TransportIcon> for IconTag {
    fn from(icon: TransportIcon) -> Self {
        match icon {
            TransportIcon::Train => IconTag::Train,
            TransportIcon::Car => IconTag::Car,
            TransportIcon::Plane => IconTag::Plane,
            TransportIcon::Bus => IconTag::Bus,
            TransportIcon::Boat => IconTag::Boat,
            TransportIcon::Bike => IconTag::Bike,
        }
    }
}

impl From<ResourceIcon> for IconTag {
    fn from(icon: ResourceIcon) -> Self {
        match icon {
            ResourceIcon::Message => IconTag::Message,
            ResourceIcon::Wallet => IconTag::Wallet,
            ResourceIcon::Plane => IconTag::Plane,
            ResourceIcon::Book => IconTag::Book,
            ResourceIcon::Globe => IconTag::Globe,
        }
    }
}

/// Records authored for one country.
#[derive(Debug)]
pub struct CountryGroup<T: 'static> {
    pub country: &'static str,
    pub entries: &'static [T],
}

/// An ordered, country-keyed fixture collection.
///
/// Lookups for a country that has no group resolve to an empty slice, so a
/// filter can never fail, only come back empty.
#[derive(Debug)]
pub struct Collection<T: 'static> {
    groups: &'static [CountryGroup<T>],
}

// Manual impls: derive would demand `T: Clone`/`T: Copy`.
impl<T: 'static> Clone for Collection<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Collection<T> {}

impl<T: 'static> Collection<T> {
    pub const fn new(groups: &'static [CountryGroup<T>]) -> Self {
        Self { groups }
    }

    /// Country names in authoring order.
    pub fn countries(&self) -> Vec<&'static str> {
        self.groups.iter().map(|g| g.country).collect()
    }

    pub fn first_country(&self) -> Option<&'static str> {
        self.groups.first().map(|g| g.country)
    }

    /// Entries for `country`, in authoring order. Empty if the country is unknown.
    pub fn entries_for(&self, country: &str) -> &'static [T] {
        self.groups
            .iter()
            .find(|g| g.country == country)
            .map(|g| g.entries)
            .unwrap_or(&[])
    }

    /// Every entry across all countries.
    pub fn iter(&self) -> impl Iterator<Item = &'static T> {
        let groups = self.groups;
        groups.iter().flat_map(|g| g.entries.iter())
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static NUMBERS: Collection<u32> = Collection::new(&[
        CountryGroup { country: "Alpha", entries: &[1, 2, 3] },
        CountryGroup { country: "Beta", entries: &[] },
        CountryGroup { country: "Gamma", entries: &[4] },
    ]);

    #[test]
    fn countries_keep_authoring_order() {
        assert_eq!(NUMBERS.countries(), vec!["Alpha", "Beta", "Gamma"]);
        assert_eq!(NUMBERS.first_country(), Some("Alpha"));
    }

    #[test]
    fn entries_for_known_country() {
        assert_eq!(NUMBERS.entries_for("Alpha"), &[1, 2, 3]);
        assert_eq!(NUMBERS.entries_for("Gamma"), &[4]);
    }

    #[test]
    fn empty_and_unknown_countries_yield_empty_slices() {
        assert!(NUMBERS.entries_for("Beta").is_empty());
        assert!(NUMBERS.entries_for("Atlantis").is_empty());
    }

    #[test]
    fn iter_flattens_in_order() {
        let all: Vec<u32> = NUMBERS.iter().copied().collect();
        assert_eq!(all, vec![1, 2, 3, 4]);
        assert_eq!(NUMBERS.len(), 4);
    }

    #[test]
    fn empty_collection_has_no_first_country() {
        let empty: Collection<u32> = Collection::new(&[]);
        assert_eq!(empty.first_country(), None);
        assert!(empty.is_empty());
    }

    #[test]
    fn icon_tags_cover_both_enumerations() {
        assert_eq!(IconTag::from(TransportIcon::Plane), IconTag::Plane);
        assert_eq!(IconTag::from(ResourceIcon::Plane), IconTag::Plane);
        assert_eq!(IconTag::from(ResourceIcon::Globe), IconTag::Globe);
        assert_eq!(IconTag::from(TransportIcon::Boat), IconTag::Boat);
    }
}
