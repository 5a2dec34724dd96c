use crate::core::model::{ExternalResource, HeroImage, ResourceIcon};

pub static RESOURCES: &[ExternalResource] = &[
    ExternalResource {
        id: "r1",
        name: "Google Maps",
        icon: ResourceIcon::Message,
        description: "Essential for navigation, finding public transit routes, and discovering local businesses. Download offline maps.",
        url: "https://www.google.com/maps",
    },
    ExternalResource {
        id: "r2",
        name: "Google Translate",
        icon: ResourceIcon::Wallet,
        description: "Break down language barriers with text, voice, and camera translation. Download languages for offline use.",
        url: "https://translate.google.com/",
    },
    ExternalResource {
        id: "r3",
        name: "Trip.com / Expedia",
        icon: ResourceIcon::Plane,
        description: "Go-to platforms for booking flights, trains, and hotels worldwide. Compare prices for the best deals.",
        url: "https://www.trip.com/",
    },
    ExternalResource {
        id: "r4",
        name: "XE Currency",
        icon: ResourceIcon::Book,
        description: "A powerful currency converter to check live exchange rates on the go. Avoids confusion when shopping.",
        url: "https://www.xe.com/",
    },
    ExternalResource {
        id: "r5",
        name: "A Good VPN",
        icon: ResourceIcon::Globe,
        description: "Crucial for accessing blocked international websites and apps in certain countries. Install before you go.",
        url: "https://www.expressvpn.com/",
    },
];

pub static HERO_IMAGES: &[HeroImage] = &[
    HeroImage {
        src: "https://images.unsplash.com/photo-1503220317375-aaad61436b1b?q=80&w=400",
        alt: "Man walking in a desert canyon",
        slot: "hero-img-1",
    },
    HeroImage {
        src: "https://images.unsplash.com/photo-1523906834658-6e24ef2386f9?q=80&w=400",
        alt: "Longtail boat in a Thai lagoon",
        slot: "hero-img-2",
    },
    HeroImage {
        src: "https://images.unsplash.com/photo-1532974297617-c0f05fe48bff?q=80&w=400",
        alt: "Hiker looking over a cliff",
        slot: "hero-img-3",
    },
    HeroImage {
        src: "https://images.unsplash.com/photo-1526772662000-3f88f10405ff?q=80&w=400",
        alt: "Person walking on a snowy mountain",
        slot: "hero-img-4",
    },
    HeroImage {
        src: "https://images.unsplash.com/photo-1542051841857-5f90071e7989?q=80&w=400",
        alt: "Person walking on a boat in a Vietnamese river",
        slot: "hero-img-5",
    },
    HeroImage {
        src: "https://images.unsplash.com/photo-1500835556837-99ac94a94552?q=80&w=400",
        alt: "Suitcase covered in travel stickers",
        slot: "hero-img-6",
    },
    HeroImage {
        src: "https://images.unsplash.com/photo-1501785888041-af3ef285b470?q=80&w=400",
        alt: "Colorful Italian coastal village",
        slot: "hero-img-7",
    },
];
