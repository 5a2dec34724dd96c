//! Transportation guides, grouped by country.
//!
//! Detail groups are listed in the order they should be shown.

use crate::core::model::{Collection, CountryGroup, DetailGroup, TransportIcon, TransportOption};

pub static TRANSPORTATION: Collection<TransportOption> = Collection::new(&[
    CountryGroup {
        country: "China",
        entries: &[
            TransportOption {
                id: "t1-cn",
                name: "High-Speed Rail (Gāotiě)",
                icon: TransportIcon::Train,
                description: "Booking, boarding, and riding China's world-leading bullet trains.",
                details: &[
                    DetailGroup {
                        title: "Booking & Price",
                        points: &[
                            "App: Trip.com is the easiest for foreigners. Prices range from ¥200-¥600+ for typical routes (e.g., Beijing-Shanghai).",
                            "Book tickets at least a few days in advance, especially around holidays.",
                            "Classes: Second Class (most common), First Class (more legroom), Business Class (premium).",
                        ],
                    },
                    DetailGroup {
                        title: "Boarding",
                        points: &[
                            "Arrive at the station at least 60-90 minutes early for security and ID checks.",
                            "You need your passport to enter the station and board.",
                            "Large screens show train numbers and boarding gates (检票口).",
                        ],
                    },
                    DetailGroup {
                        title: "Pro Tips",
                        points: &[
                            "Pack snacks and drinks, or buy them on board.",
                            "Hot water dispensers are available in every car.",
                            "Keep your ticket to exit the destination station.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t2-cn",
                name: "Ride-Sharing & Taxis",
                icon: TransportIcon::Car,
                description: "Using Didi (the \"Uber\" of China) and hailing official city cabs.",
                details: &[
                    DetailGroup {
                        title: "Apps & Payment",
                        points: &[
                            "App: Didi is essential. Link an international credit card before you go. You will need Alipay or WeChat Pay for most regular taxis.",
                            "Price: Didi is often cheaper than taxis. A typical 30-min ride costs ¥30-¥60.",
                        ],
                    },
                    DetailGroup {
                        title: "How it Works",
                        points: &[
                            "For Didi, enter your destination in the app. It’s best to have the address in Chinese characters.",
                            "For taxis, use official, marked cabs. Insist on using the meter (打表, dǎbiǎo). Avoid unofficial \"black cabs\".",
                        ],
                    },
                    DetailGroup {
                        title: "Traveler Info",
                        points: &[
                            "Have your destination address saved as a screenshot in Chinese.",
                            "Ride-sharing is often more convenient than taxis due to the language barrier and payment methods.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t3-cn",
                name: "Metro Systems (Dìtiě)",
                icon: TransportIcon::Train,
                description: "Navigating the vast, modern, and efficient subway systems in major cities.",
                details: &[
                    DetailGroup {
                        title: "Key Cities",
                        points: &[
                            "Beijing, Shanghai, Guangzhou, Chengdu, Xi'an, etc., all have excellent metro networks.",
                            "App: Apple/Google Maps work well for routing. Metroman China is also great.",
                        ],
                    },
                    DetailGroup {
                        title: "Tickets & Price",
                        points: &[
                            "Price: Extremely cheap, typically ¥3-¥8 per ride depending on distance.",
                            "How to Buy: Use automated kiosks (switch to English) that accept small cash bills, coins, or mobile payments.",
                            "For convenience, get a local transit card or use the QR code function in Alipay/WeChat.",
                        ],
                    },
                    DetailGroup {
                        title: "Riding",
                        points: &[
                            "Stations and signs are in both Chinese and English.",
                            "Follow the signs for your line number and the final destination to find the right platform.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t4-cn",
                name: "Public Buses (Gōnggòng Qìchē)",
                icon: TransportIcon::Bus,
                description: "Affordable and extensive bus networks covering cities and rural areas.",
                details: &[
                    DetailGroup {
                        title: "Payment & Price",
                        points: &[
                            "Fares are very cheap, typically ¥1-¥2 in cities. Exact change is often required if paying cash.",
                            "Use the same mobile payment QR codes (Alipay/WeChat) as the metro for convenience.",
                        ],
                    },
                    DetailGroup {
                        title: "Navigation",
                        points: &[
                            "Apps like Baidu Maps or Amap (高德地图) are best for bus routes, as Google Maps is unreliable.",
                            "Stops are announced in Mandarin; knowing your stop's name is helpful.",
                        ],
                    },
                    DetailGroup {
                        title: "Tips",
                        points: &[
                            "Buses can be very crowded, especially during rush hour.",
                            "A great way to see the city from a local's perspective.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t5-cn",
                name: "Bicycle-Sharing (Dānchē Gòngxiǎng)",
                icon: TransportIcon::Bike,
                description: "Convenient short trips using apps like Meituan or HelloBike.",
                details: &[
                    DetailGroup {
                        title: "Apps & Setup",
                        points: &[
                            "Main providers are Meituan (yellow bikes) and HelloBike (blue bikes), usually integrated within Alipay or WeChat.",
                            "Setup requires a Chinese phone number and linking to a mobile payment app.",
                        ],
                    },
                    DetailGroup {
                        title: "How it Works",
                        points: &[
                            "Scan the QR code on the bike to unlock it. The ride starts immediately.",
                            "To end the trip, manually lock the bike in a designated public parking area (look for white painted lines on the sidewalk).",
                        ],
                    },
                    DetailGroup {
                        title: "Price",
                        points: &[
                            "Extremely cheap, usually around ¥1.5 for the first 15-30 minutes.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t6-cn",
                name: "Long-Distance Buses (Kèyùn)",
                icon: TransportIcon::Bus,
                description: "Budget-friendly intercity travel with sleeper options for overnight routes.",
                details: &[
                    DetailGroup {
                        title: "Booking",
                        points: &[
                            "Purchase tickets at the corresponding bus station (客运站, kèyùnzhàn). Your passport is required.",
                            "Trip.com may offer booking for some popular routes.",
                        ],
                    },
                    DetailGroup {
                        title: "Experience",
                        points: &[
                            "Less comfortable than trains but connects to more remote towns and regions.",
                            "Sleeper buses have bunk beds instead of seats for overnight journeys.",
                        ],
                    },
                    DetailGroup {
                        title: "Traveler Info",
                        points: &[
                            "Arrive at least 30-45 minutes before departure. Bring your own water and snacks.",
                            "Onboard toilets are very basic or non-existent.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t7-cn",
                name: "Domestic Flights (Guónèi Hángbān)",
                icon: TransportIcon::Plane,
                description: "Fast connections between major cities with airlines like China Eastern or Air China.",
                details: &[
                    DetailGroup {
                        title: "Airlines & Booking",
                        points: &[
                            "Major airlines include Air China, China Southern, and China Eastern.",
                            "Book through Trip.com for the best English-language experience. Prices can be competitive with high-speed rail if booked in advance.",
                        ],
                    },
                    DetailGroup {
                        title: "Airport Info",
                        points: &[
                            "Arrive 2 hours before your flight. Security is thorough.",
                            "CRITICAL: Power banks must be in carry-on luggage and have their capacity clearly marked. Over 20,000mAh is generally not allowed.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t8-cn",
                name: "Traditional Rickshaws (Lāchē)",
                icon: TransportIcon::Car,
                description: "Short-distance rides in tourist areas or older neighborhoods.",
                details: &[
                    DetailGroup {
                        title: "Where to Find",
                        points: &[
                            "Common in tourist areas like Beijing's hutongs, Shanghai's old town, or near major sights in Xi'an.",
                            "This is purely a tourist experience, not a practical form of transport.",
                        ],
                    },
                    DetailGroup {
                        title: "**CRITICAL TIP**",
                        points: &[
                            "**ALWAYS** negotiate and agree on the price *before* you get in. Be very clear if the price is per person or for the entire ride.",
                            "Be prepared to walk away if the price seems too high.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t9-cn",
                name: "Ferries & Water Buses (Dùlún)",
                icon: TransportIcon::Boat,
                description: "Scenic river or coastal transport in cities like Shanghai or Hong Kong.",
                details: &[
                    DetailGroup {
                        title: "Key Cities",
                        points: &[
                            "Shanghai: Huangpu River cruises offer spectacular skyline views.",
                            "Hong Kong: The Star Ferry is an iconic, cheap way to cross Victoria Harbour.",
                            "Guilin: The Li River cruise is a world-famous scenic journey.",
                        ],
                    },
                    DetailGroup {
                        title: "Tickets",
                        points: &[
                            "Purchase tickets at the pier. Prices range from very cheap for commuter ferries to expensive for tourist cruises.",
                        ],
                    },
                    DetailGroup {
                        title: "Tips",
                        points: &[
                            "An excellent way to get a different perspective of a city and great for photography, especially at night.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t10-cn",
                name: "Private Car Rentals (Zūchē)",
                icon: TransportIcon::Car,
                description: "Self-drive options, though less common due to traffic and license restrictions.",
                details: &[
                    DetailGroup {
                        title: "**IMPORTANT RESTRICTION**",
                        points: &[
                            "An International Driving Permit (IDP) is **NOT** recognized in China. To rent and drive a car, you must have a valid Chinese driver's license.",
                        ],
                    },
                    DetailGroup {
                        title: "Alternative",
                        points: &[
                            "Hiring a car with a private driver is a much more common and recommended option for visitors. This can be arranged through your hotel or services like Didi Luxe.",
                        ],
                    },
                    DetailGroup {
                        title: "When to Use",
                        points: &[
                            "Best for business travel or exploring rural regions not well-served by public transport.",
                        ],
                    },
                ],
            },
        ],
    },
    CountryGroup {
        country: "Japan",
        entries: &[
            TransportOption {
                id: "t1-jp",
                name: "Shinkansen (新幹線)",
                icon: TransportIcon::Train,
                description: "Experience Japan's world-famous, punctual, and high-speed bullet trains.",
                details: &[
                    DetailGroup {
                        title: "Booking & Price",
                        points: &[
                            "Japan Rail Pass: A cost-effective option for multiple long journeys (more details in its own section).",
                            "Individual tickets can be bought at any major JR station or online. A Tokyo-Kyoto one-way is ~¥14,000.",
                            "Apps: Navitime or Google Maps for schedules.",
                        ],
                    },
                    DetailGroup {
                        title: "How it Works",
                        points: &[
                            "Reserve seats in advance (指定席, shiteiseki) or use non-reserved cars (自由席, jiyūseki).",
                            "Trains are extremely punctual; arrive on the platform a few minutes early.",
                            "Follow platform markings to line up for your car number.",
                        ],
                    },
                    DetailGroup {
                        title: "On Board",
                        points: &[
                            "Etiquette is key: keep calls quiet, phone on silent.",
                            "Enjoy a bento box (駅弁, ekiben) purchased at the station for a classic experience.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t2-jp",
                name: "IC Cards (Suica/Pasmo)",
                icon: TransportIcon::Car,
                description: "The single most essential item: a rechargeable card for nearly all transport and many purchases.",
                details: &[
                    DetailGroup {
                        title: "Getting a Card",
                        points: &[
                            "Purchase a physical card at ticket machines in major train stations for a ¥500 refundable deposit.",
                            "Digital versions (Suica/Pasmo) can be added to iPhone wallets for easy recharging.",
                        ],
                    },
                    DetailGroup {
                        title: "How They Work",
                        points: &[
                            "Simply tap your card on the reader when entering and exiting transport gates. The fare is automatically deducted.",
                            "If you have insufficient funds, use the \"Fare Adjustment\" machines (精算機, seisanki) near the exit gates.",
                        ],
                    },
                    DetailGroup {
                        title: "Where to Use",
                        points: &[
                            "Virtually all trains, subways, and buses.",
                            "Also accepted at convenience stores (konbini), vending machines, station lockers, and many restaurants.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t3-jp",
                name: "Japan Rail Pass (JR Pass)",
                icon: TransportIcon::Train,
                description: "An all-inclusive pass for tourists offering unlimited travel on most JR trains.",
                details: &[
                    DetailGroup {
                        title: "Who is it for?",
                        points: &[
                            "Only for foreign tourists visiting Japan on a \"Temporary Visitor\" visa.",
                            "Cost-effective if you plan at least one long-distance round trip (e.g., Tokyo-Kyoto-Tokyo).",
                        ],
                    },
                    DetailGroup {
                        title: "How to Get It",
                        points: &[
                            "**CRITICAL:** Purchase an \"Exchange Order\" from an authorized seller *outside* of Japan before your trip. You then exchange this for the actual pass at a JR office in Japan.",
                            "Some passes are now sold within Japan, but at a significantly higher price.",
                        ],
                    },
                    DetailGroup {
                        title: "What it Covers",
                        points: &[
                            "Most Shinkansen (except \"Nozomi\" and \"Mizuho\" services), all JR-operated limited express, express, rapid, and local trains.",
                            "Also covers the JR Miyajima Ferry, some JR buses, and the Tokyo Monorail.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t4-jp",
                name: "Metro & Subway (地下鉄)",
                icon: TransportIcon::Train,
                description: "Efficient urban transit in major cities like Tokyo (Tokyo Metro) and Osaka (Osaka Metro).",
                details: &[
                    DetailGroup {
                        title: "Key Systems",
                        points: &[
                            "Tokyo Metro & Toei Subway (Tokyo), Osaka Metro, Kyoto Municipal Subway.",
                            "Lines are color-coded and numbered, making navigation straightforward.",
                        ],
                    },
                    DetailGroup {
                        title: "Navigation & Fares",
                        points: &[
                            "App: Google Maps is extremely accurate for routes, times, platform numbers, and fare costs.",
                            "Pay per ride using your IC Card (Suica/Pasmo). Single tickets are available but less convenient.",
                            "Some cities offer 24/48/72-hour tourist subway passes for unlimited travel.",
                        ],
                    },
                    DetailGroup {
                        title: "Tips",
                        points: &[
                            "Avoid rush hour (7:30-9:30 AM & 5-7 PM) in major cities.",
                            "Look for signs indicating the correct exit for your destination, as large stations can have dozens of exits.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t5-jp",
                name: "Local Trains (JR & Private)",
                icon: TransportIcon::Train,
                description: "The backbone of city and regional transport, including Tokyo's famous Yamanote Line.",
                details: &[
                    DetailGroup {
                        title: "JR vs. Private Lines",
                        points: &[
                            "JR (Japan Railways) operates a massive nationwide network.",
                            "Private companies (e.g., Keio, Odakyu, Kintetsu) operate competing lines, often connecting city centers to suburbs or tourist areas (like Hakone).",
                        ],
                    },
                    DetailGroup {
                        title: "How to Use",
                        points: &[
                            "Use an IC Card for seamless travel across most lines.",
                            "Transfers between different companies may require exiting one set of ticket gates and entering another.",
                        ],
                    },
                    DetailGroup {
                        title: "Famous Examples",
                        points: &[
                            "JR Yamanote Line: Tokyo's crucial loop line connecting major hubs like Shinjuku, Shibuya, and Tokyo Station.",
                            "Hankyu Railway: Connects Osaka, Kobe, and Kyoto.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t6-jp",
                name: "Buses (バス)",
                icon: TransportIcon::Bus,
                description: "City buses (essential in Kyoto) and long-distance highway buses for budget travel.",
                details: &[
                    DetailGroup {
                        title: "City Buses",
                        points: &[
                            "How to Ride: In Kyoto and most cities, enter from the back door and take a numbered ticket (or tap IC card). The fare is displayed on a screen at the front. Pay in the machine next to the driver when you exit from the front door (or tap again).",
                            "Tokyo buses (Toei) have a flat fare and are entered from the front.",
                        ],
                    },
                    DetailGroup {
                        title: "Highway Buses",
                        points: &[
                            "Companies like Willer Express offer a budget-friendly alternative to trains for intercity travel.",
                            "Overnight buses can save you a night's accommodation cost. Options range from basic seats to luxurious pods.",
                        ],
                    },
                    DetailGroup {
                        title: "Booking",
                        points: &[
                            "City buses do not require booking. Highway bus tickets should be booked in advance online or at bus terminals.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t7-jp",
                name: "Taxis (タクシー)",
                icon: TransportIcon::Car,
                description: "Reliable, clean, and professional, but one of the more expensive transport options.",
                details: &[
                    DetailGroup {
                        title: "How to Use",
                        points: &[
                            "Hailed on the street (a red light means available), found at taxi stands, or booked via apps (Go, Uber).",
                            "Doors open and close automatically—do not operate them yourself!",
                            "Drivers are professional and do not expect tips.",
                        ],
                    },
                    DetailGroup {
                        title: "Price & Payment",
                        points: &[
                            "Fares start at a flag-fall rate (e.g., ~¥500) and increase with distance and time. Fares are higher late at night.",
                            "Most taxis accept credit cards and IC cards, but it's wise to confirm or have cash available.",
                        ],
                    },
                    DetailGroup {
                        title: "Tips",
                        points: &[
                            "Have your destination address written in Japanese. A business card or screenshot from a map is perfect.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t8-jp",
                name: "Bicycle Rentals (レンタサイクル)",
                icon: TransportIcon::Bike,
                description: "An excellent and enjoyable way to explore cities like Kyoto, Nara, or scenic rural areas.",
                details: &[
                    DetailGroup {
                        title: "Where to Rent",
                        points: &[
                            "Many rental shops are located near major train stations.",
                            "Some cities have bike-sharing systems, though they can be tricky for tourists to register for.",
                        ],
                    },
                    DetailGroup {
                        title: "Rules & Etiquette",
                        points: &[
                            "In principle, you must cycle on the road (left side), not the sidewalk, unless signs permit it.",
                            "Parking is strict. Use designated bicycle parking areas to avoid having your bike impounded.",
                        ],
                    },
                    DetailGroup {
                        title: "Price",
                        points: &[
                            "Typically costs ¥1,000 - ¥2,000 for a full day rental.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t9-jp",
                name: "Ferries (フェリー)",
                icon: TransportIcon::Boat,
                description: "Essential for reaching islands and for scenic or long-distance travel between regions.",
                details: &[
                    DetailGroup {
                        title: "Famous Scenic Routes",
                        points: &[
                            "Hiroshima (Miyajimaguchi) to Miyajima Island: The iconic route to see the floating torii gate. The JR Ferry is covered by the Japan Rail Pass.",
                            "Lake Ashi in Hakone: Pirate-themed sightseeing ships with views of Mt. Fuji.",
                        ],
                    },
                    DetailGroup {
                        title: "Long-Distance & Overnight",
                        points: &[
                            "Connect the main islands, e.g., from Tokyo to Hokkaido or across the Seto Inland Sea.",
                            "A comfortable and relaxing alternative to flying or trains, offering private cabins and public baths.",
                        ],
                    },
                    DetailGroup {
                        title: "Tickets",
                        points: &[
                            "Purchase at the ferry terminal. For long-distance routes, booking in advance is recommended.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t10-jp",
                name: "Tramways (路面電車)",
                icon: TransportIcon::Bus,
                description: "Charming and historic streetcars operating in several Japanese cities.",
                details: &[
                    DetailGroup {
                        title: "Where to Ride",
                        points: &[
                            "Hiroshima (Hiroden): One of Japan's most extensive tram networks, great for sightseeing.",
                            "Nagasaki: The primary mode of public transport for tourists visiting the city's main sights.",
                            "Hakodate & Kagoshima also have notable tram systems.",
                        ],
                    },
                    DetailGroup {
                        title: "How to Use",
                        points: &[
                            "Similar to city buses. You typically enter from the middle or rear door and exit from the front, paying a flat fare as you get off.",
                            "IC cards are accepted.",
                        ],
                    },
                    DetailGroup {
                        title: "Tips",
                        points: &[
                            "Trams offer a unique, ground-level view of the city at a leisurely pace.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t11-jp",
                name: "Domestic Flights (国内線)",
                icon: TransportIcon::Plane,
                description: "The fastest way to travel long distances, such as to Hokkaido or Okinawa.",
                details: &[
                    DetailGroup {
                        title: "Airlines",
                        points: &[
                            "Full-service carriers: JAL (Japan Airlines) and ANA (All Nippon Airways).",
                            "Budget airlines (LCCs): Peach, Jetstar Japan, and Spring Airlines Japan offer competitive fares but with stricter baggage rules.",
                        ],
                    },
                    DetailGroup {
                        title: "When to Use",
                        points: &[
                            "Best for routes where the Shinkansen is slow or non-existent (e.g., Tokyo to Sapporo, or to any destination in Okinawa).",
                            "Can sometimes be cheaper than the Shinkansen if booked far in advance.",
                        ],
                    },
                    DetailGroup {
                        title: "Booking",
                        points: &[
                            "Book directly on airline websites or use search engines like Google Flights or Skyscanner.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t12-jp",
                name: "Unique Transport",
                icon: TransportIcon::Car,
                description: "Experience unique modes of travel from traditional rickshaws to scenic mountain railways.",
                details: &[
                    DetailGroup {
                        title: "Rickshaws (人力車, Jinrikisha)",
                        points: &[
                            "Found in tourist districts like Asakusa (Tokyo) and Arashiyama (Kyoto).",
                            "A guided tour rather than a mode of transport. The puller acts as a guide. Agree on the price and route beforehand.",
                        ],
                    },
                    DetailGroup {
                        title: "Cable Cars & Ropeways",
                        points: &[
                            "Common in mountainous areas like Hakone, Mt. Rokko (Kobe), and for accessing temples.",
                            "Offer stunning panoramic views.",
                        ],
                    },
                    DetailGroup {
                        title: "Sleeper Trains",
                        points: &[
                            "A rare luxury now. The \"Sunrise Izumo/Seto\" is the last remaining regular overnight train.",
                            "Offers a nostalgic and comfortable way to travel from Tokyo. Tickets sell out extremely fast.",
                        ],
                    },
                ],
            },
        ],
    },
    CountryGroup {
        country: "USA",
        entries: &[
            TransportOption {
                id: "t1-us",
                name: "Rental Cars",
                icon: TransportIcon::Car,
                description: "Essential for road trips and exploring areas outside of major cities.",
                details: &[
                    DetailGroup {
                        title: "Booking & Price",
                        points: &[
                            "Companies: Hertz, Avis, Enterprise are major players. Use sites like Kayak to compare.",
                            "Price: Varies by location/season, from $50-$100+ per day. Under-25s pay a high fee.",
                            "Requirements: Valid driver's license. An International Driving Permit (IDP) is recommended.",
                        ],
                    },
                    DetailGroup {
                        title: "On the Road",
                        points: &[
                            "Insurance is crucial. Check your credit card benefits or purchase from the rental company.",
                            "Gas is sold by the gallon. Drive on the right-hand side of the road.",
                            "Be aware of tolls, which may require an electronic pass from the rental agency.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t2-us",
                name: "Ride-Hailing (Uber/Lyft)",
                icon: TransportIcon::Car,
                description: "The most common way to get around cities and suburbs if you don't have a car.",
                details: &[
                    DetailGroup {
                        title: "Apps & Price",
                        points: &[
                            "Apps: Uber and Lyft are dominant. Download and set up your account before you travel.",
                            "Price: A 15-20 minute ride can cost $15-$30. Prices surge with high demand.",
                        ],
                    },
                    DetailGroup {
                        title: "How it Works",
                        points: &[
                            "Enter your destination, choose your ride type, and a driver will be dispatched to you. Payment is handled through the app.",
                        ],
                    },
                    DetailGroup {
                        title: "Tips",
                        points: &[
                            "Essential for airport transfers and navigating cities with limited public transport.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t3-us",
                name: "Domestic Flights",
                icon: TransportIcon::Plane,
                description: "The most efficient way to travel long distances between states and regions.",
                details: &[
                    DetailGroup {
                        title: "Airlines & Booking",
                        points: &[
                            "Major carriers: Delta, American, United. Budget options: Southwest, JetBlue.",
                            "Book 1-3 months in advance using Google Flights or Skyscanner for best prices.",
                            "Baggage fees are common, especially on budget airlines. Southwest includes free checked bags.",
                        ],
                    },
                    DetailGroup {
                        title: "Airport Info",
                        points: &[
                            "Arrive at the airport at least 2 hours before your domestic flight for TSA security screening.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t4-us",
                name: "Amtrak Trains",
                icon: TransportIcon::Train,
                description: "Scenic long-distance routes that offer a unique, relaxed view of the country.",
                details: &[
                    DetailGroup {
                        title: "Routes & Experience",
                        points: &[
                            "Famous scenic routes include the California Zephyr (Chicago-San Francisco) and the Empire Builder (Chicago-Seattle).",
                            "It is significantly slower but more relaxing than flying. Good for regional travel, especially in the Northeast Corridor (Boston-NYC-DC).",
                        ],
                    },
                    DetailGroup {
                        title: "Booking & Price",
                        points: &[
                            "Book tickets in advance on the Amtrak website for better prices. Prices can be high compared to flying if booked last minute.",
                        ],
                    },
                    DetailGroup {
                        title: "On Board",
                        points: &[
                            "Trains offer more legroom than planes, and many long-distance routes have dining cars and observation lounges.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t5-us",
                name: "Subway/Metro",
                icon: TransportIcon::Train,
                description: "Efficient and affordable public transit systems in major metropolitan areas.",
                details: &[
                    DetailGroup {
                        title: "Key Systems",
                        points: &[
                            "New York City (MTA): The most extensive system, runs 24/7.",
                            "Washington, D.C. (Metro): Clean and efficient, connecting the city with Virginia and Maryland suburbs.",
                            "Chicago (The \"L\"): Iconic elevated and subway trains.",
                            "Other notable systems in Boston (The \"T\"), San Francisco (BART/Muni), and Philadelphia (SEPTA).",
                        ],
                    },
                    DetailGroup {
                        title: "Tickets & Payment",
                        points: &[
                            "Most systems use a rechargeable card (NYC's OMNY/MetroCard, DC's SmarTrip). Many now support contactless credit/debit card taps.",
                        ],
                    },
                    DetailGroup {
                        title: "Tips",
                        points: &[
                            "The absolute best way to navigate dense city centers and avoid traffic jams.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t6-us",
                name: "Buses (Intercity)",
                icon: TransportIcon::Bus,
                description: "Budget-friendly intercity travel connecting thousands of large and small towns.",
                details: &[
                    DetailGroup {
                        title: "Companies",
                        points: &[
                            "Greyhound: The most extensive network, serving the entire country.",
                            "Megabus & FlixBus: Offer cheaper, modern service on popular routes, often with Wi-Fi.",
                        ],
                    },
                    DetailGroup {
                        title: "Experience",
                        points: &[
                            "The most affordable but also the slowest mode of long-distance transport.",
                            "Comfort levels can vary, but it's a great option for travelers on a tight budget.",
                        ],
                    },
                    DetailGroup {
                        title: "Booking",
                        points: &[
                            "Book tickets online in advance for the lowest fares.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t7-us",
                name: "Taxis",
                icon: TransportIcon::Car,
                description: "Traditional cabs, still common in major cities but often more expensive than ride-hailing.",
                details: &[
                    DetailGroup {
                        title: "How to Use",
                        points: &[
                            "Hailed on the street in cities like NYC, or found at designated taxi stands at airports, train stations, and hotels.",
                            "Look for the official medallion or markings of the city.",
                        ],
                    },
                    DetailGroup {
                        title: "Price & Payment",
                        points: &[
                            "Fares are calculated by a meter. Generally more expensive than Uber/Lyft, except during peak surge pricing.",
                            "Most now accept credit cards, but it's wise to confirm.",
                        ],
                    },
                    DetailGroup {
                        title: "Tips",
                        points: &[
                            "Can be a more straightforward option at busy airports where ride-share pickups can be confusing.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t8-us",
                name: "Bike-Sharing",
                icon: TransportIcon::Bike,
                description: "A convenient and enjoyable way to make short trips in many urban areas.",
                details: &[
                    DetailGroup {
                        title: "Key Systems",
                        points: &[
                            "Citi Bike (New York City), Divvy (Chicago), and Bluebikes (Boston) are large, station-based systems.",
                            "App-based, dockless bikes and scooters (Lime, Bird) are common in many other cities.",
                        ],
                    },
                    DetailGroup {
                        title: "How it Works",
                        points: &[
                            "Use the respective app to find a bike/station and unlock it. You can buy single rides or day passes.",
                            "Return station-based bikes to any empty dock. Park dockless bikes responsibly.",
                        ],
                    },
                    DetailGroup {
                        title: "Tips",
                        points: &[
                            "An excellent way to explore parks, waterfronts, and neighborhoods. Always be aware of local traffic and bike lane rules.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t9-us",
                name: "Ferries",
                icon: TransportIcon::Boat,
                description: "Provide essential commuter links and scenic sightseeing in coastal and lakeside cities.",
                details: &[
                    DetailGroup {
                        title: "Famous Routes",
                        points: &[
                            "NYC: The Staten Island Ferry is free and offers fantastic views of the Statue of Liberty and Manhattan skyline. NYC Ferry connects the boroughs.",
                            "Seattle: Washington State Ferries are a key part of regional transport, with the Seattle-Bainbridge Island route being very popular.",
                            "San Francisco: Ferries connect the city to Sausalito, Alcatraz, and Oakland.",
                        ],
                    },
                    DetailGroup {
                        title: "Tickets",
                        points: &[
                            "Purchase tickets at the ferry terminal before boarding.",
                        ],
                    },
                    DetailGroup {
                        title: "Tips",
                        points: &[
                            "Often provides the best photo opportunities of a city's skyline from the water.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t10-us",
                name: "Walking",
                icon: TransportIcon::Bike,
                description: "The best way to experience dense, historic, and vibrant city centers.",
                details: &[
                    DetailGroup {
                        title: "Best Cities for Walking",
                        points: &[
                            "New York City (especially Manhattan), Boston, San Francisco, Chicago (Downtown/Loop), and the French Quarter in New Orleans are highly walkable.",
                            "Most other US cities are very spread out and designed for cars.",
                        ],
                    },
                    DetailGroup {
                        title: "Tips",
                        points: &[
                            "Walking is ideal for exploring specific neighborhoods in-depth.",
                            "Use marked crosswalks (\"zebra crossings\") to cross streets; cars are legally required to stop for pedestrians in them.",
                        ],
                    },
                    DetailGroup {
                        title: "Safety",
                        points: &[
                            "As in any large city, be aware of your surroundings, especially at night.",
                        ],
                    },
                ],
            },
        ],
    },
    CountryGroup {
        country: "Italy",
        entries: &[
            TransportOption {
                id: "t1-it",
                name: "Trains (Trenitalia/Italo)",
                icon: TransportIcon::Train,
                description: "An extensive and efficient network connecting major cities and small towns.",
                details: &[
                    DetailGroup {
                        title: "Types & Price",
                        points: &[
                            "High-Speed (Frecciarossa, Italo): Fast, modern, connect major cities. Book in advance for big discounts (e.g., Rome-Florence from €20-€70+).",
                            "Regional (Regionale): Slower, cheaper, serve smaller towns. Fixed price, can buy on the day.",
                        ],
                    },
                    DetailGroup {
                        title: "Booking & Apps",
                        points: &[
                            "Apps: Trenitalia and Italo Treno have official apps. Omio is a good third-party comparison tool.",
                            "Booking high-speed trains weeks or months ahead saves a lot of money.",
                        ],
                    },
                    DetailGroup {
                        title: "**VALIDATION IS CRITICAL**",
                        points: &[
                            "If you have a paper ticket for a Regionale train, you MUST validate it in a small green/white machine on the platform before boarding, or risk a hefty fine. High-speed e-tickets do not need validation.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t2-it",
                name: "Public Transport (Cities)",
                icon: TransportIcon::Bus,
                description: "Using buses, trams, and metros in cities like Rome, Milan, and Florence.",
                details: &[
                    DetailGroup {
                        title: "Tickets & Price",
                        points: &[
                            "Tickets (Biglietto) must be bought *before* boarding from tobacco shops (Tabacchi, marked with a \"T\"), newsstands, or metro stations.",
                            "A standard ticket (BIT) in Rome costs €1.50 and is valid for 100 minutes on buses/trams or one metro ride.",
                        ],
                    },
                    DetailGroup {
                        title: "How it Works",
                        points: &[
                            "Once on the bus or tram, you MUST validate your ticket in the small machine on board.",
                            "Failure to buy or validate a ticket will result in a fine, and ignorance is not an accepted excuse.",
                        ],
                    },
                    DetailGroup {
                        title: "Tips",
                        points: &[
                            "Google Maps is reliable for bus and metro routing in major cities.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t3-it",
                name: "Vaporetto (Venice)",
                icon: TransportIcon::Boat,
                description: "The water bus system that serves as Venice's primary mode of public transport.",
                details: &[
                    DetailGroup {
                        title: "Tickets & Price",
                        points: &[
                            "A single ride is expensive (€9.50). It's much more economical to buy a timed pass (e.g., 24h for €25, 48h for €35).",
                            "Buy passes from ticket booths at major stops (e.g., Ferrovia, Piazzale Roma, San Marco) or automated machines.",
                        ],
                    },
                    DetailGroup {
                        title: "How it Works",
                        points: &[
                            "Tap your pass on the validator before entering the floating platform area.",
                            "Check the line number and destination on the signs at the stop. Lines 1 and 2 run along the Grand Canal.",
                        ],
                    },
                    DetailGroup {
                        title: "Tips",
                        points: &[
                            "Stand in the outdoor areas at the front or back for the best views.",
                            "These boats can get very crowded. Be prepared to stand.",
                        ],
                    },
                ],
            },
        ],
    },
    CountryGroup {
        country: "France",
        entries: &[
            TransportOption {
                id: "t1-fr",
                name: "TGV & Intercités Trains",
                icon: TransportIcon::Train,
                description: "Travel quickly between French cities on the high-speed TGV and other national trains.",
                details: &[
                    DetailGroup {
                        title: "Booking & Price",
                        points: &[
                            "App: SNCF Connect is the official app. Book TGV tickets as early as possible (up to 3 months ahead) for the lowest fares (from €25).",
                            "OUIGO is the low-cost TGV service—cheaper but with stricter luggage rules and often from secondary stations.",
                        ],
                    },
                    DetailGroup {
                        title: "How it Works",
                        points: &[
                            "Seat reservations are mandatory on TGVs. Your ticket will show your car (voiture) and seat (place).",
                            "Before boarding, you may need to validate (composter) paper tickets at a yellow machine on the platform. E-tickets on your phone do not need this.",
                        ],
                    },
                    DetailGroup {
                        title: "On Board",
                        points: &[
                            "Trains are comfortable and offer café-bar services.",
                            "Store large luggage in racks at the end of each car.",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t2-fr",
                name: "Paris Métro & RER",
                icon: TransportIcon::Train,
                description: "Navigating the dense and efficient public transport network of Paris.",
                details: &[
                    DetailGroup {
                        title: "Tickets & Price",
                        points: &[
                            "A single ticket \"t+\" costs ~€2.15. A carnet of 10 is cheaper.",
                            "For longer stays, consider a Navigo Découverte pass (weekly/monthly, runs Mon-Sun) or a day pass (Mobilis).",
                            "Apps: Citymapper and Bonjour RATP are excellent for navigation.",
                        ],
                    },
                    DetailGroup {
                        title: "How it Works",
                        points: &[
                            "The Métro uses numbered lines for travel within Paris. The RER (letters A, B, C, etc.) is a regional express network that goes to suburbs and airports (Versailles, CDG, Disneyland).",
                            "Keep your ticket until you exit the station, as checks are common.",
                        ],
                    },
                    DetailGroup {
                        title: "Tips",
                        points: &[
                            "Beware of pickpockets, especially in crowded stations and trains.",
                            "The network is old; many stations are not accessible (lack elevators/escalators).",
                        ],
                    },
                ],
            },
            TransportOption {
                id: "t3-fr",
                name: "Ride-Sharing & Taxis",
                icon: TransportIcon::Car,
                description: "Options for getting around cities when public transport is less convenient.",
                details: &[
                    DetailGroup {
                        title: "Apps & Price",
                        points: &[
                            "Apps: Uber is widely available. Bolt and FreeNow are common alternatives and can sometimes be cheaper.",
                            "Prices are comparable to other Western European cities.",
                        ],
                    },
                    DetailGroup {
                        title: "Taxis",
                        points: &[
                            "Official taxis (e.g., Taxis G7 in Paris) can be hailed, found at taxi stands, or booked via app/phone.",
                            "Taxis are generally more expensive than ride-sharing apps, especially for airport runs where ride-sharing apps often have flat rates.",
                        ],
                    },
                    DetailGroup {
                        title: "Tips",
                        points: &[
                            "Ride-sharing is often easier for non-French speakers due to in-app translation and payment.",
                            "For airport transfers, booking a taxi or ride-share in advance can provide peace of mind and a fixed price.",
                        ],
                    },
                ],
            },
        ],
    },
]);
