use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::ingest::{BorderTable, CapitalDistances};
use crate::names::NameResolver;
use crate::patches::EdgePatch;

/// Neighbour name to capital-to-capital distance in kilometres.
pub type Neighbours = HashMap<String, u32>;

/// Weighted border graph used by the shortest path engine.
///
/// Every country from the border list is a node, even when none of its
/// borders could be weighted. Edges are directed; each declared border is
/// added once from each side, so the two directions normally carry the same
/// distance record.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Arc<HashMap<String, Neighbours>>,
}

impl Graph {
    /// Wrap a prepared adjacency map.
    pub fn from_adjacency(adjacency: HashMap<String, Neighbours>) -> Self {
        Self {
            adjacency: Arc::new(adjacency),
        }
    }

    /// Weighted neighbours of `country`, or `None` when it is not a node.
    pub fn neighbours(&self, country: &str) -> Option<&Neighbours> {
        self.adjacency.get(country)
    }

    /// Weight of the directed edge `from -> to`.
    pub fn edge(&self, from: &str, to: &str) -> Option<u32> {
        self.neighbours(from).and_then(|edges| edges.get(to)).copied()
    }

    pub fn contains(&self, country: &str) -> bool {
        self.adjacency.contains_key(country)
    }

    /// A node without any edge leading to another country.
    ///
    /// Self-loops are ignored; countries that are not nodes are not islands.
    pub fn is_island(&self, country: &str) -> bool {
        self.neighbours(country)
            .is_some_and(|edges| edges.keys().all(|target| target == country))
    }

    /// Iterate over every node name.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges, self-loops included.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(HashMap::len).sum()
    }
}

/// Build the border graph and apply the manual edge corrections.
///
/// For every declared border both names are resolved to state identifiers
/// and the capital distance is looked up in either ordering. Borders whose
/// names or distance cannot be resolved are left out; `patches` is the
/// place to fill those gaps. Patches overwrite existing weights.
pub fn build_graph(
    borders: &BorderTable,
    distances: &CapitalDistances,
    names: &NameResolver,
    patches: &[EdgePatch],
) -> Graph {
    let mut adjacency = build_border_adjacency(borders, distances, names);
    apply_patches(&mut adjacency, patches);

    let graph = Graph::from_adjacency(adjacency);
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built border graph"
    );
    graph
}

fn build_border_adjacency(
    borders: &BorderTable,
    distances: &CapitalDistances,
    names: &NameResolver,
) -> HashMap<String, Neighbours> {
    let mut adjacency: HashMap<String, Neighbours> = HashMap::with_capacity(borders.len());

    for (country, declared) in borders.iter() {
        let edges = adjacency.entry(country.to_string()).or_default();
        let Some(source_id) = names.resolve(country) else {
            debug!(country, "no state identifier; borders left unweighted");
            continue;
        };

        for neighbour in declared {
            let weight = names
                .resolve(neighbour)
                .and_then(|target_id| distances.lookup(source_id, target_id));

            match weight {
                Some(km) => {
                    edges.insert(neighbour.clone(), km);
                }
                None => debug!(country, neighbour = %neighbour, "border has no capital distance"),
            }
        }
    }

    adjacency
}

fn apply_patches(adjacency: &mut HashMap<String, Neighbours>, patches: &[EdgePatch]) {
    let mut applied = 0usize;
    for patch in patches {
        if !adjacency.contains_key(&patch.target) {
            warn!(
                source = %patch.source,
                target = %patch.target,
                "skipping edge patch: target is not in the border list"
            );
            continue;
        }
        let Some(edges) = adjacency.get_mut(&patch.source) else {
            warn!(
                source = %patch.source,
                target = %patch.target,
                "skipping edge patch: source is not in the border list"
            );
            continue;
        };
        edges.insert(patch.target.clone(), patch.km);
        applied += 1;
    }
    debug!(applied, total = patches.len(), "applied edge patches");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::{CapitalDistanceRecord, StateRecord, StateTable, SNAPSHOT_END_DATE};

    fn state(number: u32, identifier: &str, name: &str) -> StateRecord {
        StateRecord {
            number,
            identifier: identifier.to_string(),
            name: name.to_string(),
            start: "1816-01-01".to_string(),
            end: SNAPSHOT_END_DATE.to_string(),
        }
    }

    fn distance(a: &str, b: &str, km: u32) -> CapitalDistanceRecord {
        CapitalDistanceRecord {
            state_a: 0,
            code_a: a.to_string(),
            state_b: 0,
            code_b: b.to_string(),
            km,
        }
    }

    fn fixture() -> (BorderTable, CapitalDistances, NameResolver) {
        let borders = BorderTable::from_entries([
            ("Xland", vec!["Yland"]),
            ("Yland", vec!["Xland", "Zland", "Nowhere"]),
            ("Zland", vec!["Yland"]),
            ("Isle", Vec::new()),
        ]);
        let distances =
            CapitalDistances::from_records([distance("XXX", "YYY", 100), distance("ZZZ", "YYY", 150)]);
        let states = StateTable::from_records(
            vec![
                state(1, "XXX", "Xland"),
                state(2, "YYY", "Yland"),
                state(3, "ZZZ", "Zland"),
                state(4, "III", "Isle"),
            ],
            SNAPSHOT_END_DATE,
        );
        (borders, distances, NameResolver::from_states(&states))
    }

    #[test]
    fn adds_both_directions_from_one_distance_record() {
        let (borders, distances, names) = fixture();
        let graph = build_graph(&borders, &distances, &names, &[]);

        assert_eq!(graph.edge("Xland", "Yland"), Some(100));
        assert_eq!(graph.edge("Yland", "Xland"), Some(100));
        assert_eq!(graph.edge("Yland", "Zland"), Some(150));
        assert_eq!(graph.edge("Zland", "Yland"), Some(150));
    }

    #[test]
    fn unresolvable_neighbours_are_omitted_and_islands_kept() {
        let (borders, distances, names) = fixture();
        let graph = build_graph(&borders, &distances, &names, &[]);

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge("Yland", "Nowhere"), None);
        assert!(!graph.contains("Nowhere"));
        assert!(graph.neighbours("Isle").unwrap().is_empty());
        assert!(graph.is_island("Isle"));
    }

    #[test]
    fn patches_overwrite_and_repeat_idempotently() {
        let (borders, distances, names) = fixture();
        let patches = [
            EdgePatch::new("Xland", "Yland", 90),
            EdgePatch::new("Xland", "Yland", 90),
            EdgePatch::new("Isle", "Xland", 40),
        ];
        let graph = build_graph(&borders, &distances, &names, &patches);

        assert_eq!(graph.edge("Xland", "Yland"), Some(90));
        assert_eq!(graph.edge("Yland", "Xland"), Some(100));
        assert_eq!(graph.edge("Isle", "Xland"), Some(40));
        assert!(!graph.is_island("Isle"));
    }

    #[test]
    fn patches_naming_unknown_countries_are_skipped() {
        let (borders, distances, names) = fixture();
        let patches = [
            EdgePatch::new("Atlantis", "Xland", 10),
            EdgePatch::new("Xland", "Atlantis", 10),
        ];
        let graph = build_graph(&borders, &distances, &names, &patches);

        assert!(!graph.contains("Atlantis"));
        assert_eq!(graph.edge("Xland", "Atlantis"), None);
    }

    #[test]
    fn self_loop_only_node_is_an_island() {
        let (borders, distances, names) = fixture();
        let graph = build_graph(&borders, &distances, &names, &[EdgePatch::new("Isle", "Isle", 0)]);

        assert_eq!(graph.edge("Isle", "Isle"), Some(0));
        assert!(graph.is_island("Isle"));
    }
}
