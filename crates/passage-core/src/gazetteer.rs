//! Name-to-coordinate lookup for known Chesapeake Bay ports.

use crate::models::Place;

/// Static gazetteer mapping lowercase keys to ports. Loaded once at
/// startup and never mutated; keys are unique.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    entries: Vec<(&'static str, Place)>,
}

impl Gazetteer {
    /// The Chesapeake Bay port table used by the planning service.
    pub fn chesapeake() -> Self {
        Self {
            entries: vec![
                ("annapolis", Place::new("Annapolis, MD", 38.9784, -76.4922)),
                ("solomons", Place::new("Solomons, MD", 38.318, -76.454)),
                ("norfolk", Place::new("Norfolk, VA", 36.8508, -76.2859)),
                ("portsmouth", Place::new("Portsmouth, VA", 36.835, -76.298)),
                ("baltimore", Place::new("Baltimore, MD", 39.285, -76.613)),
                ("hampton", Place::new("Hampton, VA", 37.0299, -76.3453)),
                ("cambridge", Place::new("Cambridge, MD", 38.5631, -76.0788)),
                ("st. michaels", Place::new("St. Michaels, MD", 38.7851, -76.2244)),
                ("oxford", Place::new("Oxford, MD", 38.6851, -76.1727)),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All ports in table order.
    pub fn places(&self) -> Vec<Place> {
        self.entries.iter().map(|(_, place)| place.clone()).collect()
    }

    /// Look up a port by its exact lowercase key.
    pub fn get(&self, key: &str) -> Option<&Place> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, place)| place)
    }

    /// Resolve a free-text place string to a known port.
    ///
    /// Matching order: exact key match after lowercasing and trimming,
    /// then a substring fallback that succeeds when the query contains a
    /// key, or a key contains the head of the query (text before the
    /// first comma). When several keys match the fallback, the longest
    /// key wins, so "annapolis" cannot be shadowed by a shorter entry.
    pub fn resolve(&self, query: &str) -> Option<&Place> {
        let query = query.to_lowercase();
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        if let Some(place) = self.get(query) {
            return Some(place);
        }

        let head = query.split(',').next().unwrap_or(query).trim();
        let mut best: Option<(&'static str, &Place)> = None;
        for (key, place) in &self.entries {
            if query.contains(key) || (!head.is_empty() && key.contains(head)) {
                let longer = best.map_or(true, |(best_key, _)| key.len() > best_key.len());
                if longer {
                    best = Some((key, place));
                }
            }
        }
        best.map(|(_, place)| place)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_and_qualified_queries_resolve_to_same_port() {
        let gazetteer = Gazetteer::chesapeake();
        let exact = gazetteer.resolve("Annapolis").expect("exact match");
        let qualified = gazetteer.resolve("annapolis, md").expect("fallback match");
        assert_eq!(exact.name, "Annapolis, MD");
        assert_eq!(exact.name, qualified.name);
    }

    #[test]
    fn unknown_place_returns_none() {
        let gazetteer = Gazetteer::chesapeake();
        assert!(gazetteer.resolve("Atlantis").is_none());
        assert!(gazetteer.resolve("").is_none());
        assert!(gazetteer.resolve("   ").is_none());
    }

    #[test]
    fn query_head_matches_key_prefix() {
        let gazetteer = Gazetteer::chesapeake();
        // "st. michaels" contains the head "st. mich"
        let place = gazetteer.resolve("St. Mich, MD").expect("prefix match");
        assert_eq!(place.name, "St. Michaels, MD");
    }

    #[test]
    fn longest_key_wins_when_several_match() {
        let gazetteer = Gazetteer::chesapeake();
        // Both "norfolk" (7) and "annapolis" (9) appear in the query;
        // the longer key must win regardless of table order.
        let place = gazetteer.resolve("norfolk or annapolis").expect("match");
        assert_eq!(place.name, "Annapolis, MD");
        let place = gazetteer.resolve("annapolis or norfolk").expect("match");
        assert_eq!(place.name, "Annapolis, MD");
    }

    #[test]
    fn keys_are_lowercase_and_unique() {
        let gazetteer = Gazetteer::chesapeake();
        let mut keys: Vec<&str> = gazetteer.entries.iter().map(|(k, _)| *k).collect();
        assert!(keys.iter().all(|k| *k == k.to_lowercase()));
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), gazetteer.len());
    }

    #[test]
    fn display_names_are_unique() {
        let gazetteer = Gazetteer::chesapeake();
        let mut names: Vec<String> = gazetteer.places().into_iter().map(|p| p.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), gazetteer.len());
    }
}
