//! Advisory generation from vessel thresholds and route distance.

use crate::models::Vessel;

/// Draft deeper than this triggers a depth-verification advisory (feet).
pub const DEEP_DRAFT_FT: f64 = 7.0;
/// Air clearance below this triggers a bridge-clearance advisory (feet).
pub const MIN_AIR_CLEARANCE_FT: f64 = 65.0;
/// LOA above this triggers a call-ahead advisory (feet).
pub const LARGE_VESSEL_LOA_FT: f64 = 60.0;
/// Assumed fuel range for a typical yacht (nautical miles).
pub const ASSUMED_FUEL_RANGE_NM: f64 = 300.0;
/// Fraction of fuel range beyond which a fuel stop is advised.
pub const FUEL_STOP_RATIO: f64 = 0.7;

/// Build the advisory list for a vessel over a route of the given total
/// distance. Deterministic and order-preserving: threshold advisories
/// first, then the two fixed weather and VHF advisories.
pub fn generate_advisories(vessel: &Vessel, total_distance_nm: f64) -> Vec<String> {
    let mut advisories = Vec::new();

    if let Some(draft) = vessel.draft_ft {
        if draft > DEEP_DRAFT_FT {
            advisories.push(format!(
                "Deep draft ({draft} ft): Verify depths at all marinas and approach channels. \
                 Recommend checking NOAA charts for controlling depths."
            ));
        }
    }

    if let Some(clearance) = vessel.air_clearance_ft {
        if clearance < MIN_AIR_CLEARANCE_FT {
            advisories.push(format!(
                "Air draft ({clearance} ft): Verify all fixed bridge clearances. \
                 Some Chesapeake Bay bridges have minimum clearances of 50 ft at MHW."
            ));
        }
    }

    if let Some(loa) = vessel.loa_ft {
        if loa > LARGE_VESSEL_LOA_FT {
            advisories.push(format!(
                "Large vessel ({loa} ft LOA): Call ahead to reserve transient slips. \
                 Some marinas have length restrictions."
            ));
        }
    }

    if total_distance_nm > ASSUMED_FUEL_RANGE_NM * FUEL_STOP_RATIO {
        advisories.push(format!(
            "Route distance ({total_distance_nm:.0} nm) requires fuel stop. \
             Plan refueling at marinas with diesel/gas."
        ));
    }

    advisories.push(
        "Check NOAA weather forecast 24-48 hours before departure. \
         Avoid Chesapeake Bay in winds >20 knots."
            .to_string(),
    );
    advisories.push(
        "Monitor VHF 16 for weather updates and bridge/lock coordination.".to_string(),
    );

    advisories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vessel_with_draft(draft_ft: f64) -> Vessel {
        Vessel {
            make: Some("Sabre".to_string()),
            model: Some("426".to_string()),
            year: Some(2004),
            loa_ft: Some(42.0),
            beam_ft: Some(13.5),
            draft_ft: Some(draft_ft),
            air_clearance_ft: Some(70.0),
            power_plants: None,
            last_survey_date: None,
        }
    }

    #[test]
    fn fixed_advisories_always_present() {
        let advisories = generate_advisories(&vessel_with_draft(4.0), 10.0);
        assert!(advisories.iter().any(|a| a.contains("NOAA weather")));
        assert!(advisories.iter().any(|a| a.contains("VHF 16")));
    }

    #[test]
    fn deep_draft_triggers_advisory() {
        let advisories = generate_advisories(&vessel_with_draft(8.0), 10.0);
        assert!(advisories.iter().any(|a| a.contains("Deep draft")));
    }

    #[test]
    fn shallow_draft_has_no_depth_advisory() {
        let advisories = generate_advisories(&vessel_with_draft(6.0), 10.0);
        assert!(!advisories.iter().any(|a| a.contains("Deep draft")));
    }

    #[test]
    fn long_route_requires_fuel_stop() {
        let advisories = generate_advisories(&vessel_with_draft(4.0), 250.0);
        assert!(advisories.iter().any(|a| a.contains("fuel stop")));

        let advisories = generate_advisories(&vessel_with_draft(4.0), 100.0);
        assert!(!advisories.iter().any(|a| a.contains("fuel stop")));
    }

    #[test]
    fn missing_dimensions_skip_threshold_checks() {
        let vessel = Vessel {
            make: None,
            model: None,
            year: None,
            loa_ft: None,
            beam_ft: None,
            draft_ft: None,
            air_clearance_ft: None,
            power_plants: None,
            last_survey_date: None,
        };
        let advisories = generate_advisories(&vessel, 10.0);
        // Only the two fixed advisories remain
        assert_eq!(advisories.len(), 2);
    }
}
