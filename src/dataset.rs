//! The coffee dataset.
//!
//! Annual production and domestic consumption, in thousands of 60 kg bags,
//! for eight producing countries. The sequence order is the on-screen order.

use crate::color::Rgba;

/// One country's figures and its bar color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountryRecord {
    /// Country name, used as the bar label.
    pub name: &'static str,
    /// Production volume (thousand 60 kg bags per year).
    pub production: u32,
    /// Consumption volume (thousand 60 kg bags per year).
    pub consumption: u32,
    /// Production bar color.
    pub color: Rgba,
}

impl CountryRecord {
    const fn new(name: &'static str, production: u32, consumption: u32, color: u32) -> Self {
        Self { name, production, consumption, color: Rgba::from_hex_u32(color) }
    }
}

/// The fixed dataset, in display order.
pub const COFFEE_DATA: [CountryRecord; 8] = [
    CountryRecord::new("Brazil", 3558, 1281, 0xe8b44c),
    CountryRecord::new("Vietnam", 1542, 328, 0xd4a569),
    CountryRecord::new("Colombia", 858, 122, 0xc98d4f),
    CountryRecord::new("Indonesia", 774, 276, 0xb87941),
    CountryRecord::new("Ethiopia", 469, 387, 0xa86832),
    CountryRecord::new("Honduras", 475, 48, 0x8b5a2b),
    CountryRecord::new("India", 348, 128, 0xcd853f),
    CountryRecord::new("Uganda", 285, 48, 0xdaa520),
];

/// The dataset as a slice.
#[must_use]
pub fn coffee_data() -> &'static [CountryRecord] {
    &COFFEE_DATA
}

/// Largest production volume in `records`, or 0 for an empty slice.
#[must_use]
pub fn max_production(records: &[CountryRecord]) -> u32 {
    records.iter().map(|r| r.production).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_order_and_size() {
        let names: Vec<_> = coffee_data().iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            ["Brazil", "Vietnam", "Colombia", "Indonesia", "Ethiopia", "Honduras", "India", "Uganda"]
        );
    }

    #[test]
    fn test_max_production_is_brazil() {
        assert_eq!(max_production(coffee_data()), 3558);
    }

    #[test]
    fn test_max_production_empty() {
        assert_eq!(max_production(&[]), 0);
    }

    #[test]
    fn test_colors_parsed() {
        assert_eq!(COFFEE_DATA[0].color, Rgba::rgb(0xe8, 0xb4, 0x4c));
        assert_eq!(COFFEE_DATA[7].color, Rgba::rgb(218, 165, 32));
    }
}
