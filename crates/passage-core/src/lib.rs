pub mod advisories;
pub mod catalog;
pub mod corridor;
pub mod gazetteer;
pub mod models;
pub mod planner;
pub mod spatial;

pub use advisories::generate_advisories;
pub use corridor::{chesapeake_corridors, find_corridor, Corridor, CorridorWaypoint};
pub use gazetteer::Gazetteer;
pub use models::{
    Crossing, CrossingType, Leg, Marina, MarinaAlongRoute, Place, PlanMetadata, RouteEndpoints,
    RoutePlan, RouteRequest, RouteSummary, RouteWaypoint, Vessel, VesselSummary,
};
pub use planner::{plan, PlanError, PlanningCatalog};
pub use spatial::haversine_nm;
