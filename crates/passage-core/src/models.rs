//! Core data models for the passage planning service.
//!
//! Vessel fields are snake_case on the wire; derived route fields are
//! camelCase (`distNm`, `etaHrs`, `generatedAt`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named port with coordinates (WGS84 decimal degrees, assumed not enforced).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Place {
    pub fn new(name: &str, lat: f64, lon: f64) -> Self {
        Self {
            name: name.to_string(),
            lat,
            lon,
        }
    }
}

/// Vessel specs submitted by the caller. Used only for threshold checks,
/// so every dimension is optional at the wire level and no physical
/// plausibility is validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vessel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loa_ft: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beam_ft: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft_ft: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air_clearance_ft: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_plants: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_survey_date: Option<String>,
}

impl Vessel {
    /// One-line summary for the response header, e.g. "2004 Sabre 426".
    pub fn summary(&self) -> String {
        let year = self
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "Unknown".to_string());
        format!(
            "{} {} {}",
            year,
            self.make.as_deref().unwrap_or("Unknown"),
            self.model.as_deref().unwrap_or("")
        )
        .trim_end()
        .to_string()
    }
}

/// Requested route endpoints as free text, e.g. "Annapolis, MD".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteEndpoints {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

/// Body of a plan request. Presence of `vessel` and both endpoints is
/// validated by the planner, not by deserialization, so a missing field
/// surfaces as a client input error rather than a decode failure.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteRequest {
    #[serde(default)]
    pub vessel: Option<Vessel>,
    #[serde(default)]
    pub route: Option<RouteEndpoints>,
}

/// One leg of the itinerary. Distance and ETA are pre-formatted to one
/// decimal place; ETA assumes the fixed cruise speed.
#[derive(Debug, Clone, Serialize)]
pub struct Leg {
    pub from: String,
    pub to: String,
    #[serde(rename = "distNm")]
    pub dist_nm: String,
    #[serde(rename = "etaHrs")]
    pub eta_hrs: String,
}

/// A navigation waypoint. Corridor waypoints carry canned hazard notes;
/// the generic route degenerates to departure/arrival markers.
#[derive(Debug, Clone, Serialize)]
pub struct RouteWaypoint {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    pub notes: String,
}

/// Static marina catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct Marina {
    pub name: String,
    pub city: String,
    pub lat: f64,
    pub lon: f64,
    pub vhf: String,
    pub phone: String,
    pub fuel: String,
    pub notes: String,
    pub amenities: Vec<String>,
}

/// A marina admitted to a route, annotated with its distance from the
/// route start (one decimal, nautical miles).
#[derive(Debug, Clone, Serialize)]
pub struct MarinaAlongRoute {
    #[serde(flatten)]
    pub marina: Marina,
    #[serde(rename = "distanceFromStart")]
    pub distance_from_start: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CrossingType {
    Bridge,
    Lock,
}

/// Static bridge/lock catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct Crossing {
    #[serde(rename = "type")]
    pub crossing_type: CrossingType,
    pub name: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(rename = "closedClearanceFt", skip_serializing_if = "Option::is_none")]
    pub closed_clearance_ft: Option<u32>,
    pub contact: String,
    pub schedule: String,
    pub notes: String,
}

/// Vessel block of the response: the caller's specs plus a summary line.
#[derive(Debug, Clone, Serialize)]
pub struct VesselSummary {
    #[serde(flatten)]
    pub vessel: Vessel,
    pub summary: String,
}

/// Resolved route block of the response.
#[derive(Debug, Clone, Serialize)]
pub struct RouteSummary {
    pub from: String,
    pub to: String,
    #[serde(rename = "totalDistanceNm")]
    pub total_distance_nm: String,
    #[serde(rename = "estimatedTimeHrs")]
    pub estimated_time_hrs: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanMetadata {
    #[serde(rename = "generatedAt")]
    pub generated_at: DateTime<Utc>,
    pub disclaimer: String,
}

/// Complete route plan returned to the caller. Built and dropped within a
/// single request; nothing is shared across requests.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub vessel: VesselSummary,
    pub route: RouteSummary,
    pub legs: Vec<Leg>,
    pub waypoints: Vec<RouteWaypoint>,
    pub marinas: Vec<MarinaAlongRoute>,
    pub crossings: Vec<Crossing>,
    pub advisories: Vec<String>,
    pub metadata: PlanMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vessel_summary_includes_year_make_model() {
        let vessel = Vessel {
            make: Some("Sabre".to_string()),
            model: Some("426".to_string()),
            year: Some(2004),
            loa_ft: Some(42.0),
            beam_ft: Some(13.5),
            draft_ft: Some(4.9),
            air_clearance_ft: Some(61.0),
            power_plants: Some("Twin Yanmar 315s".to_string()),
            last_survey_date: None,
        };
        assert_eq!(vessel.summary(), "2004 Sabre 426");
    }

    #[test]
    fn vessel_deserializes_with_missing_dimensions() {
        let vessel: Vessel = serde_json::from_str(r#"{"make": "Sabre"}"#).unwrap();
        assert_eq!(vessel.make.as_deref(), Some("Sabre"));
        assert!(vessel.draft_ft.is_none());
    }

    #[test]
    fn vessel_omits_absent_fields_when_serialized() {
        let vessel: Vessel = serde_json::from_str(r#"{"make": "Sabre"}"#).unwrap();
        let json = serde_json::to_value(&vessel).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["make"]);
    }

    #[test]
    fn leg_serializes_camel_case() {
        let leg = Leg {
            from: "Annapolis, MD".to_string(),
            to: "Solomons, MD".to_string(),
            dist_nm: "39.7".to_string(),
            eta_hrs: "5.7".to_string(),
        };
        let json = serde_json::to_value(&leg).unwrap();
        assert_eq!(json["distNm"], "39.7");
        assert_eq!(json["etaHrs"], "5.7");
    }
}
