//! Property tests for location resolution and display

use emoweather::location::{format_display, resolve, AddressFields, Coordinates, LocationData};
use proptest::prelude::*;

const FIELD_NAMES: &[&str] = &[
    "neighbourhood",
    "suburb",
    "residential",
    "quarter",
    "hamlet",
    "amenity",
    "building",
    "house_name",
    "city_district",
    "district",
    "subdistrict",
    "town",
    "village",
    "municipality",
    "road",
    "pedestrian",
    "footway",
    "city",
    "county",
    "state_district",
    "state",
    "province",
    "region",
    "country",
];

fn location(city: String, country: String, neighborhood: Option<String>) -> LocationData {
    LocationData {
        city,
        region: String::new(),
        country,
        district: None,
        neighborhood,
        coordinates: Coordinates::new(0.0, 0.0),
    }
}

proptest! {
    #[test]
    fn singapore_neighborhood_always_wins(
        neighborhood in "[A-Za-z][A-Za-z ]{0,20}",
        district in proptest::option::of("[A-Za-z]{1,10}"),
        prefix in "[a-z ]{0,5}",
    ) {
        let mut data = location("Singapore".to_string(), format!("{}SINGAPORE", prefix), Some(neighborhood.clone()));
        data.district = district;
        prop_assert_eq!(format_display(&data), format!("{}, Singapore", neighborhood));
    }

    #[test]
    fn other_countries_use_city_and_country(
        city in ".{0,20}",
        country in "[A-Za-z ]{0,20}",
        neighborhood in proptest::option::of(".{1,10}"),
    ) {
        prop_assume!(!country.to_lowercase().contains("singapore"));
        let data = location(city.clone(), country.clone(), neighborhood);
        prop_assert_eq!(format_display(&data), format!("{}, {}", city, country));
    }

    #[test]
    fn resolve_is_total(
        entries in proptest::collection::vec((0..FIELD_NAMES.len(), ".{0,24}"), 0..12),
        lat in -90.0f64..90.0,
        lng in -180.0f64..180.0,
    ) {
        let fields: AddressFields = entries
            .into_iter()
            .map(|(i, value)| (FIELD_NAMES[i], value))
            .collect();
        let location = resolve(Ok(fields), Coordinates::new(lat, lng));

        prop_assert!(!location.city.is_empty());
        prop_assert!(!location.country.is_empty());
        prop_assert!(location.neighborhood.as_deref().map_or(true, |n| !n.is_empty()));
        prop_assert!(location.district.as_deref().map_or(true, |d| !d.is_empty()));
        prop_assert!(!format_display(&location).is_empty());
    }
}
