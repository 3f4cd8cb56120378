//! The built-in data set served when no data file is configured.

use time::{Date, macros::date};

use crate::record::Record;

/// (price, category, date, title, description, sold)
type SampleRow = (f64, &'static str, Date, &'static str, &'static str, bool);

const SAMPLE_ROWS: [SampleRow; 36] = [
    (50.0, "A", date!(2024 - 01 - 15), "Desk Lamp", "Adjustable LED desk lamp", true),
    (150.0, "B", date!(2024 - 01 - 18), "Rain Jacket", "Waterproof hooded jacket", false),
    (250.0, "A", date!(2024 - 02 - 10), "Monitor Arm", "Dual monitor mounting arm", true),
    (350.0, "C", date!(2024 - 03 - 12), "Silver Ring", "Sterling silver band", false),
    (550.0, "B", date!(2024 - 03 - 15), "Wool Coat", "Long winter coat in charcoal", true),
    (750.0, "A", date!(2024 - 04 - 20), "Tablet", "10 inch tablet with stylus", true),
    (950.0, "C", date!(2024 - 04 - 25), "Gold Necklace", "18k gold chain necklace", false),
    (12.5, "B", date!(2024 - 01 - 03), "Cotton Socks", "Pack of five pairs", true),
    (100.0, "A", date!(2024 - 02 - 01), "Keyboard", "Mechanical keyboard, brown switches", false),
    (101.0, "C", date!(2024 - 02 - 22), "Pearl Earrings", "Freshwater pearl studs", true),
    (899.99, "A", date!(2024 - 03 - 02), "Laptop", "13 inch ultraportable laptop", true),
    (45.0, "B", date!(2024 - 03 - 28), "Linen Shirt", "Short sleeve linen shirt", false),
    (199.0, "C", date!(2024 - 04 - 04), "Charm Bracelet", "Bracelet with three charms", true),
    (300.0, "B", date!(2024 - 05 - 06), "Leather Boots", "Ankle boots in tan leather", true),
    (64.0, "A", date!(2024 - 05 - 13), "Webcam", "1080p webcam with microphone", false),
    (1200.0, "A", date!(2024 - 05 - 27), "Camera", "Mirrorless camera body", false),
    (420.0, "C", date!(2024 - 06 - 08), "Watch", "Automatic dress watch", true),
    (85.0, "B", date!(2024 - 06 - 19), "Denim Jeans", "Slim fit selvedge denim", true),
    (610.0, "A", date!(2024 - 06 - 30), "Smartphone", "Unlocked 128GB smartphone", false),
    (33.0, "B", date!(2024 - 07 - 04), "Sun Hat", "Wide brim straw hat", true),
    (480.0, "A", date!(2024 - 07 - 16), "Headphones", "Noise cancelling headphones", true),
    (700.0, "C", date!(2024 - 07 - 29), "Diamond Pendant", "Solitaire diamond pendant", false),
    (220.0, "B", date!(2024 - 08 - 02), "Hiking Pack", "40 litre hiking backpack", false),
    (15.0, "A", date!(2024 - 08 - 14), "USB Cable", "Braided USB-C cable, 2 metres", true),
    (505.0, "C", date!(2024 - 08 - 21), "Cufflinks", "Platinum cufflinks", true),
    (900.0, "A", date!(2024 - 09 - 09), "Projector", "Short throw home projector", false),
    (901.0, "C", date!(2024 - 09 - 17), "Sapphire Ring", "Sapphire ring with halo setting", true),
    (72.0, "B", date!(2024 - 09 - 25), "Knit Sweater", "Merino wool sweater", true),
    (130.0, "B", date!(2024 - 10 - 05), "Running Shoes", "Lightweight road shoes", false),
    (260.0, "A", date!(2024 - 10 - 18), "Smart Speaker", "Speaker with voice assistant", true),
    (0.0, "C", date!(2024 - 10 - 31), "Gift Box", "Complimentary jewellery box", false),
    (375.0, "A", date!(2024 - 11 - 11), "Graphics Card", "Mid-range graphics card", true),
    (95.0, "B", date!(2024 - 11 - 22), "Scarf", "Cashmere blend scarf", true),
    (820.0, "C", date!(2024 - 11 - 29), "Emerald Brooch", "Vintage emerald brooch", false),
    (640.0, "A", date!(2024 - 12 - 03), "Game Console", "Console with two controllers", true),
    (180.0, "B", date!(2024 - 12 - 20), "Gloves", "Leather touchscreen gloves", false),
];

/// Get the sample records, numbered from 1 in the order listed.
pub fn sample_records() -> Vec<Record> {
    SAMPLE_ROWS
        .iter()
        .zip(1..)
        .map(|(&(price, category, date, title, description, sold), id)| {
            Record::build(price, category, date)
                .title(title)
                .description(description)
                .sold(sold)
                .finalize(id)
        })
        .collect()
}
