//! Static marina and bridge/lock catalogs.
//!
//! Both tables are loaded once at process start and are read-only for the
//! lifetime of the process.

use crate::models::{Crossing, CrossingType, Marina};

fn marina(
    name: &str,
    city: &str,
    lat: f64,
    lon: f64,
    vhf: &str,
    phone: &str,
    fuel: &str,
    notes: &str,
    amenities: &[&str],
) -> Marina {
    Marina {
        name: name.to_string(),
        city: city.to_string(),
        lat,
        lon,
        vhf: vhf.to_string(),
        phone: phone.to_string(),
        fuel: fuel.to_string(),
        notes: notes.to_string(),
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
    }
}

/// Marinas along the Chesapeake Bay and ICW Mile 0 area.
pub fn chesapeake_marinas() -> Vec<Marina> {
    vec![
        marina(
            "Annapolis Yacht Basin",
            "Annapolis, MD",
            38.972,
            -76.485,
            "VHF 17",
            "410-267-9146",
            "Diesel, Gas",
            "Transient slips; depth ~10 ft at MLW",
            &["Fuel", "Pump-out", "Showers", "WiFi"],
        ),
        marina(
            "Zahniser's Yachting Center",
            "Solomons, MD",
            38.330,
            -76.459,
            "VHF 9/16",
            "410-326-2161",
            "Diesel, Gas",
            "Full-service yard; popular fuel stop",
            &["Fuel", "Repairs", "Pump-out", "Restaurant"],
        ),
        marina(
            "Tidewater Yacht Marina",
            "Portsmouth, VA",
            36.835,
            -76.298,
            "VHF 16",
            "757-393-2525",
            "Diesel, Gas",
            "ICW Mile 0; easy in/out",
            &["Fuel", "Pump-out", "Showers", "Laundry"],
        ),
        marina(
            "Herrington Harbour North",
            "Tracys Landing, MD",
            38.7526,
            -76.5819,
            "VHF 16",
            "410-741-5100",
            "Diesel, Gas",
            "Well-protected harbor; excellent facilities",
            &["Fuel", "Pool", "Showers", "Restaurant", "WiFi"],
        ),
        marina(
            "Deltaville Yachting Center",
            "Deltaville, VA",
            37.5492,
            -76.3272,
            "VHF 16",
            "804-776-9898",
            "Diesel, Gas",
            "Full-service marina; protected basin",
            &["Fuel", "Repairs", "Pump-out", "Ship Store"],
        ),
    ]
}

/// Bridges and locks on the southern Chesapeake / ICW approach.
pub fn chesapeake_crossings() -> Vec<Crossing> {
    vec![
        Crossing {
            crossing_type: CrossingType::Bridge,
            name: "Great Bridge Bascule Bridge".to_string(),
            location: "Great Bridge, VA (ICW MM 12)".to_string(),
            lat: Some(36.7450),
            lon: Some(-76.2342),
            closed_clearance_ft: Some(8),
            contact: "757-547-4470".to_string(),
            schedule: "Opens on the hour, 6 AM\u{2013}7 PM (seasonal variability)".to_string(),
            notes: "Pairs with Great Bridge Lock immediately south; monitor VHF 13".to_string(),
        },
        Crossing {
            crossing_type: CrossingType::Lock,
            name: "Great Bridge Lock".to_string(),
            location: "ICW Albemarle & Chesapeake Canal".to_string(),
            lat: Some(36.7425),
            lon: Some(-76.2350),
            closed_clearance_ft: None,
            contact: "USACE 757-547-3311".to_string(),
            schedule: "On demand, typically on the hour; monitor VHF 13".to_string(),
            notes: "Check USACE + USCG BNM day-of for maintenance windows".to_string(),
        },
        Crossing {
            crossing_type: CrossingType::Bridge,
            name: "Centerville Turnpike Bridge".to_string(),
            location: "Chesapeake, VA (ICW MM 15.8)".to_string(),
            lat: Some(36.7100),
            lon: Some(-76.2147),
            closed_clearance_ft: Some(12),
            contact: "757-547-4470".to_string(),
            schedule: "Opens on signal except rush hours (7-9 AM, 4-6 PM weekdays)".to_string(),
            notes: "Plan passage outside restricted hours".to_string(),
        },
    ]
}
