//! City guides, grouped by country.

use crate::core::model::{Collection, CountryGroup, Destination, FoodEntry, TransitSummary};

pub static DESTINATIONS: Collection<Destination> = Collection::new(&[
    CountryGroup {
        country: "China",
        entries: &[
            Destination {
                id: "c1",
                name: "Beijing",
                image: "https://images.unsplash.com/photo-1547981609-4b6b73a5e984?q=80&w=800",
                highlights: &["The Great Wall", "The Forbidden City", "The Summer Palace"],
                transportation: TransitSummary {
                    from_airport: "The Airport Express train is recommended, costing 25元.",
                    within_city: "The metro system is the most efficient way to travel.",
                },
                foods: &[FoodEntry {
                    dish: "Peking Duck",
                    description: "Crispy roasted duck served with thin pancakes.",
                    recommended_venue: "Da Dong",
                }],
            },
            Destination {
                id: "c2",
                name: "Shanghai",
                image: "https://images.unsplash.com/photo-1538428322894-25d2b7d41f89?q=80&w=800",
                highlights: &["The Bund", "Yu Garden", "Shanghai Tower"],
                transportation: TransitSummary {
                    from_airport: "The Maglev train offers a futuristic, high-speed journey to the city center.",
                    within_city: "The extensive metro system covers nearly all attractions.",
                },
                foods: &[FoodEntry {
                    dish: "Xiao Long Bao",
                    description: "Delicate steamed soup dumplings.",
                    recommended_venue: "Din Tai Fung",
                }],
            },
            Destination {
                id: "c3",
                name: "Xi'an",
                image: "https://images.unsplash.com/photo-1596321251978-a8d9a48f296c?q=80&w=800",
                highlights: &["Terracotta Army", "Ancient City Wall", "Muslim Quarter"],
                transportation: TransitSummary {
                    from_airport: "Airport shuttle buses are an economical option to reach the city.",
                    within_city: "Cycling on the Ancient City Wall is a unique experience.",
                },
                foods: &[FoodEntry {
                    dish: "Biangbiang Noodles",
                    description: "Thick, belt-like noodles often served with a savory, spicy sauce.",
                    recommended_venue: "Muslim Quarter stalls",
                }],
            },
            Destination {
                id: "c4",
                name: "Chengdu",
                image: "https://images.unsplash.com/photo-1519399479359-56c81a205d15?q=80&w=800",
                highlights: &["Giant Panda Breeding Base", "Jinli Street", "Wenshu Monastery"],
                transportation: TransitSummary {
                    from_airport: "A direct metro line connects the airport to the city center.",
                    within_city: "The metro is convenient, but taxis are also affordable.",
                },
                foods: &[FoodEntry {
                    dish: "Sichuan Hotpot",
                    description: "A spicy, flavorful broth where you cook your own ingredients.",
                    recommended_venue: "Shu Jiuxiang Hotpot",
                }],
            },
            Destination {
                id: "c5",
                name: "Guilin",
                image: "https://images.unsplash.com/photo-1562613529-5f2ba012a64c?q=80&w=800",
                highlights: &["Li River Cruise", "Elephant Trunk Hill", "Reed Flute Cave"],
                transportation: TransitSummary {
                    from_airport: "Airport buses are available to major points in the city.",
                    within_city: "Local buses and sightseeing boats are the primary modes of transport.",
                },
                foods: &[FoodEntry {
                    dish: "Guilin Rice Noodles",
                    description: "A local breakfast staple served with various toppings.",
                    recommended_venue: "Small local eateries",
                }],
            },
        ],
    },
    CountryGroup {
        country: "Japan",
        entries: &[
            Destination {
                id: "j1",
                name: "Tokyo",
                image: "https://images.unsplash.com/photo-1542051841857-5f90071e7989?q=80&w=800",
                highlights: &["Shibuya Crossing", "Tokyo Skytree", "Senso-ji Temple"],
                transportation: TransitSummary {
                    from_airport: "Narita Express or Limousine Bus are convenient options.",
                    within_city: "The JR Yamanote Line and Tokyo Metro are incredibly efficient.",
                },
                foods: &[FoodEntry {
                    dish: "Sushi",
                    description: "Fresh seafood over vinegared rice.",
                    recommended_venue: "Tsukiji Outer Market",
                }],
            },
            Destination {
                id: "j2",
                name: "Kyoto",
                image: "https://images.unsplash.com/photo-1524413840807-0c3cb6fa808d?q=80&w=800",
                highlights: &["Fushimi Inari Shrine", "Kinkaku-ji (Golden Pavilion)", "Arashiyama Bamboo Grove"],
                transportation: TransitSummary {
                    from_airport: "Haruka Express from Kansai International Airport (KIX).",
                    within_city: "Buses are the best way to get around Kyoto's main sights.",
                },
                foods: &[FoodEntry {
                    dish: "Kaiseki",
                    description: "A traditional multi-course Japanese dinner.",
                    recommended_venue: "Gion Karyo",
                }],
            },
        ],
    },
    CountryGroup {
        country: "Italy",
        entries: &[
            Destination {
                id: "i1",
                name: "Rome",
                image: "https://images.unsplash.com/photo-1552832230-c0197dd311b5?q=80&w=800",
                highlights: &["Colosseum", "Vatican City", "Trevi Fountain"],
                transportation: TransitSummary {
                    from_airport: "Leonardo Express train is the fastest way to Termini Station.",
                    within_city: "Walkable city center, supplemented by a good metro system.",
                },
                foods: &[FoodEntry {
                    dish: "Cacio e Pepe",
                    description: "A simple, delicious pasta with cheese and black pepper.",
                    recommended_venue: "Trastevere trattorias",
                }],
            },
            Destination {
                id: "i2",
                name: "Florence",
                image: "https://images.unsplash.com/photo-1528159339935-d5257a731174?q=80&w=800",
                highlights: &["Florence Cathedral (Duomo)", "Uffizi Gallery", "Ponte Vecchio"],
                transportation: TransitSummary {
                    from_airport: "Tram or bus from Florence Airport.",
                    within_city: "Extremely walkable; most major attractions are close together.",
                },
                foods: &[FoodEntry {
                    dish: "Bistecca alla Fiorentina",
                    description: "A thick-cut T-bone steak, grilled rare.",
                    recommended_venue: "Trattoria Mario",
                }],
            },
        ],
    },
    CountryGroup {
        country: "USA",
        entries: &[
            Destination {
                id: "us1",
                name: "New York",
                image: "https://images.unsplash.com/photo-1546436836-07a91091f160?q=80&w=800",
                highlights: &["Times Square", "Statue of Liberty", "Central Park"],
                transportation: TransitSummary {
                    from_airport: "AirTrain JFK and subway or Long Island Rail Road.",
                    within_city: "The subway is the most comprehensive way to travel.",
                },
                foods: &[FoodEntry {
                    dish: "New York-Style Pizza",
                    description: "Large, foldable slices with a thin crust.",
                    recommended_venue: "Joe's Pizza",
                }],
            },
            Destination {
                id: "us2",
                name: "Los Angeles",
                image: "https://images.unsplash.com/photo-1542065355-46762a635833?q=80&w=800",
                highlights: &["Hollywood Sign", "Santa Monica Pier", "Griffith Observatory"],
                transportation: TransitSummary {
                    from_airport: "FlyAway buses or ride-sharing from LAX.",
                    within_city: "A car is highly recommended as the city is very spread out.",
                },
                foods: &[FoodEntry {
                    dish: "Tacos",
                    description: "Diverse and authentic Mexican street food.",
                    recommended_venue: "Leo's Tacos Truck",
                }],
            },
        ],
    },
    CountryGroup {
        country: "France",
        entries: &[
            Destination {
                id: "f1",
                name: "Paris",
                image: "https://images.unsplash.com/photo-1502602898657-3e91760c0337?q=80&w=800",
                highlights: &["Eiffel Tower", "Louvre Museum", "Notre-Dame Cathedral"],
                transportation: TransitSummary {
                    from_airport: "RER B train from Charles de Gaulle (CDG) is efficient.",
                    within_city: "The Métro is fast and covers the entire city.",
                },
                foods: &[FoodEntry {
                    dish: "Croissant",
                    description: "A buttery, flaky viennoisie pastry.",
                    recommended_venue: "Any local boulangerie",
                }],
            },
        ],
    },
]);
