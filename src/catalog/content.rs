//! Hard-coded catalog content, one table per locale.
//!
//! Both tables list the same slugs in the same order.

use super::models::ServiceOffering;

pub(crate) const CZECH: &[ServiceOffering] = &[
    ServiceOffering {
        id: "carpet",
        title: "Pokládka koberců",
        description: "Měkké, teplé a odolné koberce pro domovy i kanceláře.",
        features: &[
            "Pokládka od stěny ke stěně",
            "Možnosti pro zátěžové a skvrnám odolné materiály",
            "Demontáž a odvoz starého koberce",
            "Podložka a lišty včetně montáže",
        ],
        image: Some("/images/carpet.jpg"),
    },
    ServiceOffering {
        id: "wood",
        title: "Dřevěné podlahy",
        description: "Prémiové dřevěné podlahy – nadčasový vzhled s profesionální pokládkou.",
        features: &[
            "Masiv i vícevrstvé dřevo",
            "Broušení, moření a renovace",
            "Vlastní vzory (rybí kost, chevron)",
            "Parozábrana a vyrovnání podkladu",
        ],
        image: Some("/images/wood.jpg"),
    },
    ServiceOffering {
        id: "laminate",
        title: "Laminát a vinyl",
        description: "Cenově dostupné, odolné a voděodolné varianty laminátu a LVT/LVP.",
        features: &[
            "Plovoucí podlahy s click systémem",
            "Voděodolné vinylové dílce",
            "Podložky a dokončovací lišty",
            "Rychlé termíny realizace",
        ],
        image: Some("/images/laminate.jpg"),
    },
    ServiceOffering {
        id: "tile",
        title: "Dlažba a kámen",
        description: "Porcelán, keramika a přírodní kámen do kuchyní, koupelen a dalších prostor.",
        features: &[
            "Podkladové desky a hydroizolace",
            "Vlastní vzory a mozaiky",
            "Impregnace spár",
            "Možnost podlahového vytápění",
        ],
        image: Some("/images/tile.jpg"),
    },
];

pub(crate) const ENGLISH: &[ServiceOffering] = &[
    ServiceOffering {
        id: "carpet",
        title: "Carpet Installation",
        description: "Soft, warm and durable carpeting for homes and offices.",
        features: &[
            "Wall-to-wall installation",
            "Heavy-traffic and stain-resistant options",
            "Old carpet removal and disposal",
            "Padding and trims installed",
        ],
        image: Some("/images/carpet.jpg"),
    },
    ServiceOffering {
        id: "wood",
        title: "Hardwood Flooring",
        description: "Premium hardwood floors with a timeless look and professional installation.",
        features: &[
            "Solid and engineered wood",
            "Sanding, staining and refinishing",
            "Custom patterns (herringbone, chevron)",
            "Moisture barrier and subfloor leveling",
        ],
        image: Some("/images/wood.jpg"),
    },
    ServiceOffering {
        id: "laminate",
        title: "Laminate & Vinyl",
        description: "Affordable, durable and waterproof laminate and LVT/LVP options.",
        features: &[
            "Floating click-lock floors",
            "Waterproof vinyl planks",
            "Underlayment and finishing trims",
            "Fast turnaround times",
        ],
        image: Some("/images/laminate.jpg"),
    },
    ServiceOffering {
        id: "tile",
        title: "Tile & Stone",
        description: "Porcelain, ceramic and natural stone for kitchens, bathrooms and beyond.",
        features: &[
            "Backer board and waterproofing",
            "Custom patterns and mosaics",
            "Grout sealing",
            "Underfloor heating ready",
        ],
        image: Some("/images/tile.jpg"),
    },
];
