//! Built-in catalog served whenever live ingestion fails.

use luxwatch_core::{Product, WatchType};
use rust_decimal::Decimal;

struct Entry {
    id: &'static str,
    name: &'static str,
    brand: &'static str,
    model_number: &'static str,
    watch_type: WatchType,
    case_material: &'static str,
    strap_material: &'static str,
    dial_color: &'static str,
    strap_color: &'static str,
    price: i64,
    discount: i64,
    /// In paise, so fractional rupee prices stay exact.
    final_price_paise: i64,
    warranty: &'static str,
    stock_quantity: u32,
    description: &'static str,
    image: &'static str,
}

const ENTRIES: [Entry; 6] = [
    Entry {
        id: "rolex-submariner-001",
        name: "Submariner Date",
        brand: "Rolex",
        model_number: "126610LN",
        watch_type: WatchType::Diving,
        case_material: "Oystersteel",
        strap_material: "Oystersteel",
        dial_color: "Black",
        strap_color: "Steel",
        price: 9550,
        discount: 0,
        final_price_paise: 955_000,
        warranty: "5 years",
        stock_quantity: 3,
        description: "The Submariner Date is a legendary diving watch with a unidirectional rotatable bezel and Chromalight display for enhanced legibility underwater.",
        image: "/black-diving-watch.png",
    },
    Entry {
        id: "omega-speedmaster-002",
        name: "Speedmaster Professional",
        brand: "Omega",
        model_number: "310.30.42.50.01.001",
        watch_type: WatchType::Chronograph,
        case_material: "Stainless Steel",
        strap_material: "Stainless Steel",
        dial_color: "Black",
        strap_color: "Steel",
        price: 6350,
        discount: 5,
        final_price_paise: 603_250,
        warranty: "5 years",
        stock_quantity: 7,
        description: "The legendary Moonwatch worn by astronauts. Features a manual-winding chronograph movement and hesalite crystal.",
        image: "/placeholder-ngk5u.png",
    },
    Entry {
        id: "patek-philippe-003",
        name: "Calatrava",
        brand: "Patek Philippe",
        model_number: "5227G-001",
        watch_type: WatchType::Dress,
        case_material: "White Gold",
        strap_material: "Leather",
        dial_color: "Silver",
        strap_color: "Black",
        price: 32400,
        discount: 0,
        final_price_paise: 3_240_000,
        warranty: "2 years",
        stock_quantity: 1,
        description: "The epitome of elegance and sophistication. This dress watch features a clean, minimalist design with exceptional craftsmanship.",
        image: "/patek-philippe-calatrava-white-gold.png",
    },
    Entry {
        id: "audemars-piguet-004",
        name: "Royal Oak",
        brand: "Audemars Piguet",
        model_number: "15500ST.OO.1220ST.01",
        watch_type: WatchType::Sport,
        case_material: "Stainless Steel",
        strap_material: "Stainless Steel",
        dial_color: "Blue",
        strap_color: "Steel",
        price: 27800,
        discount: 0,
        final_price_paise: 2_780_000,
        warranty: "2 years",
        stock_quantity: 2,
        description: "Iconic octagonal bezel design with 'Grande Tapisserie' pattern dial. A masterpiece of luxury sports watch design.",
        image: "/audemars-piguet-royal-oak-blue-steel.png",
    },
    Entry {
        id: "cartier-santos-005",
        name: "Santos de Cartier",
        brand: "Cartier",
        model_number: "WSSA0029",
        watch_type: WatchType::Dress,
        case_material: "Stainless Steel",
        strap_material: "Leather",
        dial_color: "Silver",
        strap_color: "Black",
        price: 4050,
        discount: 10,
        final_price_paise: 364_500,
        warranty: "2 years",
        stock_quantity: 5,
        description: "Inspired by aviation pioneer Alberto Santos-Dumont. Features the signature square case and Roman numeral dial.",
        image: "/placeholder-o7nbf.png",
    },
    Entry {
        id: "tag-heuer-monaco-006",
        name: "Monaco",
        brand: "TAG Heuer",
        model_number: "CAW2111.FC6183",
        watch_type: WatchType::Chronograph,
        case_material: "Stainless Steel",
        strap_material: "Leather",
        dial_color: "Blue",
        strap_color: "Blue",
        price: 5900,
        discount: 8,
        final_price_paise: 542_800,
        warranty: "2 years",
        stock_quantity: 4,
        description: "The iconic square chronograph made famous by Steve McQueen. Features automatic chronograph movement.",
        image: "/tag-heuer-monaco-blue.png",
    },
];

/// Number of products in the fallback catalog.
pub const FALLBACK_LEN: usize = ENTRIES.len();

/// The fixed product list used when the sheet cannot be ingested.
#[must_use]
pub fn fallback_catalog() -> Vec<Product> {
    ENTRIES
        .iter()
        .map(|e| Product {
            id: e.id.to_owned(),
            name: e.name.to_owned(),
            brand: e.brand.to_owned(),
            model_number: e.model_number.to_owned(),
            watch_type: e.watch_type,
            case_material: e.case_material.to_owned(),
            strap_material: e.strap_material.to_owned(),
            dial_color: e.dial_color.to_owned(),
            strap_color: e.strap_color.to_owned(),
            price: Decimal::from(e.price),
            discount: Decimal::from(e.discount),
            final_price: Decimal::new(e.final_price_paise, 2).normalize(),
            warranty: e.warranty.to_owned(),
            stock_quantity: e.stock_quantity,
            description: e.description.to_owned(),
            images: vec![e.image.to_owned()],
        })
        .collect()
}
