//! Static ISO 3166 lookups for the country map.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;

mod countries;
mod regions;

use countries::COUNTRIES;
use regions::REGIONS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Country {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Region {
    #[serde(rename = "isoCode")]
    pub iso_code: &'static str,
    pub name: &'static str,
}

fn country_index() -> &'static HashMap<&'static str, Country> {
    static INDEX: OnceLock<HashMap<&'static str, Country>> = OnceLock::new();
    INDEX.get_or_init(|| {
        COUNTRIES
            .iter()
            .map(|&(alpha2, alpha3, name)| {
                (
                    alpha2,
                    Country {
                        alpha2,
                        alpha3,
                        name,
                    },
                )
            })
            .collect()
    })
}

fn region_index() -> &'static HashMap<&'static str, Region> {
    static INDEX: OnceLock<HashMap<&'static str, Region>> = OnceLock::new();
    INDEX.get_or_init(|| {
        REGIONS
            .iter()
            .map(|&(iso_code, name)| (iso_code, Region { iso_code, name }))
            .collect()
    })
}

/// Look up an ISO 3166-1 alpha-2 code. Case-insensitive; anything that is not
/// a known two-letter code (including `""` and `"_"`) yields `None`.
pub fn country(alpha2: &str) -> Option<Country> {
    let code = alpha2.trim();
    if code.len() != 2 {
        return None;
    }
    country_index()
        .get(code.to_ascii_uppercase().as_str())
        .copied()
}

/// Look up an ISO 3166-2 subdivision code such as `DE-BB`.
pub fn region(iso_code: &str) -> Option<Region> {
    let code = iso_code.trim();
    if !code.contains('-') {
        return None;
    }
    region_index()
        .get(code.to_ascii_uppercase().as_str())
        .copied()
}
