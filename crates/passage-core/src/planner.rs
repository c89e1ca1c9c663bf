//! Route plan orchestration: validation, geocoding, legs, filters,
//! advisories, and response assembly.

use chrono::Utc;
use thiserror::Error;

use crate::advisories::generate_advisories;
use crate::corridor::find_corridor;
use crate::gazetteer::Gazetteer;
use crate::models::{
    Crossing, Leg, Marina, MarinaAlongRoute, Place, PlanMetadata, RoutePlan, RouteRequest,
    RouteSummary, RouteWaypoint, VesselSummary,
};
use crate::spatial::haversine_nm;

/// Assumed average cruising speed in knots, constant across the system.
pub const CRUISE_SPEED_KTS: f64 = 7.0;
/// Default admission margin for marinas off the route (nautical miles).
pub const MARINA_MAX_OFF_ROUTE_NM: f64 = 10.0;
/// Fixed admission margin for bridges and locks (nautical miles).
pub const CROSSING_TOLERANCE_NM: f64 = 20.0;

const DISCLAIMER: &str = "This route plan is for general reference only. Always verify with \
current charts, NOTAMs, Local Notices to Mariners, and weather forecasts before departure.";

/// Read-only planning data, loaded once at process start.
#[derive(Debug, Clone)]
pub struct PlanningCatalog {
    pub gazetteer: Gazetteer,
    pub marinas: Vec<Marina>,
    pub crossings: Vec<Crossing>,
}

impl PlanningCatalog {
    pub fn chesapeake() -> Self {
        Self {
            gazetteer: Gazetteer::chesapeake(),
            marinas: crate::catalog::chesapeake_marinas(),
            crossings: crate::catalog::chesapeake_crossings(),
        }
    }
}

/// Failure modes of plan generation. `MissingField` and `UnknownPlace`
/// are client input errors; `Internal` is a broken invariant in the
/// static data.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Missing required fields: vessel and route with from/to locations")]
    MissingField,
    #[error(
        "Could not geocode start or end location. Please use known ports like \
         Annapolis, Norfolk, Baltimore, etc."
    )]
    UnknownPlace,
    #[error("internal error: {0}")]
    Internal(String),
}

impl PlanError {
    pub fn is_client_error(&self) -> bool {
        matches!(self, PlanError::MissingField | PlanError::UnknownPlace)
    }
}

fn format_nm(value: f64) -> String {
    format!("{value:.1}")
}

fn leg_between(from: &Place, to: &Place) -> Leg {
    let dist = haversine_nm(from.lat, from.lon, to.lat, to.lon);
    Leg {
        from: from.name.clone(),
        to: to.name.clone(),
        dist_nm: format_nm(dist),
        eta_hrs: format_nm(dist / CRUISE_SPEED_KTS),
    }
}

/// Filter the marina catalog to entries "along" the route.
///
/// Admission is a distance-sum heuristic, not a geometric corridor test:
/// a marina is admitted when both its distance from the start and its
/// distance from the end are under the total route distance plus the
/// margin. The threshold grows with route length, so long routes can
/// admit marinas well off the direct line. Output is sorted ascending by
/// distance from start.
pub fn find_marinas_along_route(
    marinas: &[Marina],
    from: &Place,
    to: &Place,
    max_distance_nm: f64,
) -> Vec<MarinaAlongRoute> {
    let total = haversine_nm(from.lat, from.lon, to.lat, to.lon);
    let mut along: Vec<(f64, MarinaAlongRoute)> = marinas
        .iter()
        .filter_map(|marina| {
            let dist_from_start = haversine_nm(from.lat, from.lon, marina.lat, marina.lon);
            let dist_from_end = haversine_nm(marina.lat, marina.lon, to.lat, to.lon);
            if dist_from_start < total + max_distance_nm && dist_from_end < total + max_distance_nm
            {
                Some((
                    dist_from_start,
                    MarinaAlongRoute {
                        marina: marina.clone(),
                        distance_from_start: format_nm(dist_from_start),
                    },
                ))
            } else {
                None
            }
        })
        .collect();

    along.sort_by(|a, b| a.0.total_cmp(&b.0));
    along.into_iter().map(|(_, marina)| marina).collect()
}

/// Filter the bridge/lock catalog to crossings near the route. Entries
/// without coordinates are always excluded.
pub fn crossings_near_route(crossings: &[Crossing], from: &Place, to: &Place) -> Vec<Crossing> {
    let total = haversine_nm(from.lat, from.lon, to.lat, to.lon);
    crossings
        .iter()
        .filter(|crossing| {
            let (Some(lat), Some(lon)) = (crossing.lat, crossing.lon) else {
                return false;
            };
            let dist_from_route = haversine_nm(from.lat, from.lon, lat, lon)
                .min(haversine_nm(lat, lon, to.lat, to.lon));
            dist_from_route < total + CROSSING_TOLERANCE_NM
        })
        .cloned()
        .collect()
}

/// Generate a complete route plan for the request.
///
/// Validates field presence, geocodes both endpoints, builds corridor or
/// direct legs, filters marinas and crossings, and assembles advisories
/// and metadata. Pure request-scoped computation; no state survives the
/// call.
pub fn plan(catalog: &PlanningCatalog, request: &RouteRequest) -> Result<RoutePlan, PlanError> {
    let vessel = request.vessel.as_ref().ok_or(PlanError::MissingField)?;
    let route = request.route.as_ref().ok_or(PlanError::MissingField)?;
    let from_query = route.from.as_deref().ok_or(PlanError::MissingField)?;
    let to_query = route.to.as_deref().ok_or(PlanError::MissingField)?;
    if from_query.trim().is_empty() || to_query.trim().is_empty() {
        return Err(PlanError::MissingField);
    }

    let from = catalog
        .gazetteer
        .resolve(from_query)
        .ok_or(PlanError::UnknownPlace)?;
    let to = catalog
        .gazetteer
        .resolve(to_query)
        .ok_or(PlanError::UnknownPlace)?;

    let total_distance = haversine_nm(from.lat, from.lon, to.lat, to.lon);

    let mut legs = Vec::new();
    let mut waypoints = Vec::new();

    if let Some(corridor) = find_corridor(from_query, to_query) {
        let mut stops: Vec<&Place> = vec![from];
        for key in corridor.via {
            let via = catalog.gazetteer.get(key).ok_or_else(|| {
                PlanError::Internal(format!("corridor via point '{key}' not in gazetteer"))
            })?;
            stops.push(via);
        }
        stops.push(to);

        for pair in stops.windows(2) {
            legs.push(leg_between(pair[0], pair[1]));
        }

        waypoints.extend(corridor.waypoints.iter().map(|wp| RouteWaypoint {
            name: wp.name.to_string(),
            lat: Some(wp.lat),
            lon: Some(wp.lon),
            notes: wp.notes.to_string(),
        }));
    } else {
        legs.push(leg_between(from, to));
        waypoints.push(RouteWaypoint {
            name: "Waypoint 1".to_string(),
            lat: Some(from.lat),
            lon: Some(from.lon),
            notes: "Departure point".to_string(),
        });
        waypoints.push(RouteWaypoint {
            name: "Waypoint 2".to_string(),
            lat: Some(to.lat),
            lon: Some(to.lon),
            notes: "Arrival point".to_string(),
        });
    }

    let marinas = find_marinas_along_route(&catalog.marinas, from, to, MARINA_MAX_OFF_ROUTE_NM);
    let crossings = crossings_near_route(&catalog.crossings, from, to);
    let advisories = generate_advisories(vessel, total_distance);

    Ok(RoutePlan {
        vessel: VesselSummary {
            vessel: vessel.clone(),
            summary: vessel.summary(),
        },
        route: RouteSummary {
            from: from.name.clone(),
            to: to.name.clone(),
            total_distance_nm: format_nm(total_distance),
            estimated_time_hrs: format_nm(total_distance / CRUISE_SPEED_KTS),
        },
        legs,
        waypoints,
        marinas,
        crossings,
        advisories,
        metadata: PlanMetadata {
            generated_at: Utc::now(),
            disclaimer: DISCLAIMER.to_string(),
        },
    })
}
