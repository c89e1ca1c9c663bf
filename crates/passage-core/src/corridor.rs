//! Named corridors: predefined multi-leg paths between well-known ports.
//!
//! A corridor is a data record, not a code branch; adding a corridor means
//! appending to the table returned by [`chesapeake_corridors`].

/// A canned waypoint along a corridor.
#[derive(Debug, Clone)]
pub struct CorridorWaypoint {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub notes: &'static str,
}

/// A predefined multi-leg path between two well-known endpoints.
///
/// `endpoints` are lowercase tokens matched by case-insensitive substring
/// containment against the raw from/to strings of a request, in either
/// direction. `via` lists gazetteer keys for intermediate stops in
/// travel order from the first endpoint.
#[derive(Debug, Clone)]
pub struct Corridor {
    pub endpoints: (&'static str, &'static str),
    pub via: &'static [&'static str],
    pub waypoints: &'static [CorridorWaypoint],
}

impl Corridor {
    /// Whether this corridor covers the given raw from/to strings.
    pub fn matches(&self, from: &str, to: &str) -> bool {
        let from = from.to_lowercase();
        let to = to.to_lowercase();
        let (a, b) = self.endpoints;
        (from.contains(a) && to.contains(b)) || (from.contains(b) && to.contains(a))
    }
}

const ANNAPOLIS_NORFOLK_WAYPOINTS: &[CorridorWaypoint] = &[
    CorridorWaypoint {
        name: "Thomas Point Light",
        lat: 38.8978,
        lon: -76.4382,
        notes: "Keep clear of shoals east of the light",
    },
    CorridorWaypoint {
        name: "Drum Point",
        lat: 38.3208,
        lon: -76.4158,
        notes: "Mind traffic in Patuxent River entrance",
    },
    CorridorWaypoint {
        name: "Point Lookout",
        lat: 38.0333,
        lon: -76.3167,
        notes: "Enter Potomac River; strong currents possible",
    },
    CorridorWaypoint {
        name: "Thimble Shoal Channel",
        lat: 37.0000,
        lon: -76.1833,
        notes: "Follow marks; commercial traffic heavy",
    },
];

/// Corridor table, evaluated in order. Currently a single entry: the
/// Annapolis-Norfolk run down the Bay with a Solomons stopover.
pub fn chesapeake_corridors() -> &'static [Corridor] {
    const CORRIDORS: &[Corridor] = &[Corridor {
        endpoints: ("annapolis", "norfolk"),
        via: &["solomons"],
        waypoints: ANNAPOLIS_NORFOLK_WAYPOINTS,
    }];
    CORRIDORS
}

/// First corridor covering the given endpoints, if any.
pub fn find_corridor(from: &str, to: &str) -> Option<&'static Corridor> {
    chesapeake_corridors()
        .iter()
        .find(|corridor| corridor.matches(from, to))
}
