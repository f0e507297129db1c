//! Cities with named sub-areas
//!
//! Keys are canonical city names (each word capitalised). Sub-areas are
//! queried in the order listed here.

use crate::text::title_case;

pub const CITY_AREAS: &[(&str, &[&str])] = &[
    (
        "London",
        &["Westminster", "Camden", "Greenwich", "Brixton", "Chelsea", "Stratford"],
    ),
    (
        "Manchester",
        &["Salford", "Trafford", "Didsbury", "Cheetham Hill", "Old Trafford"],
    ),
    (
        "Birmingham",
        &["Edgbaston", "Solihull", "Sutton Coldfield", "Digbeth"],
    ),
    ("Leeds", &["Headingley", "Horsforth", "Roundhay", "Chapel Allerton"]),
    ("Glasgow", &["West End", "Govan", "Partick", "Hillhead"]),
    ("Liverpool", &["Everton", "Toxteth", "Aigburth", "Anfield"]),
];

/// Canonical form of a user-supplied city name
pub fn canonical_city_name(city: &str) -> String {
    title_case(city.trim())
}

/// Sub-areas for a city, matched on its canonical name
pub fn areas_for(city: &str) -> Option<&'static [&'static str]> {
    let key = canonical_city_name(city);
    CITY_AREAS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, areas)| *areas)
}

pub fn has_areas(city: &str) -> bool {
    areas_for(city).is_some()
}

/// Upstream query for one sub-area, e.g. "Westminster,London"
pub fn area_query(area: &str, city: &str) -> String {
    format!("{area},{city}")
}
