use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;

use crate::graph::Graph;

/// Minimum-distance path between two countries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath {
    /// Total kilometres from the first to the last step.
    pub distance: u64,
    /// Countries from source to target, both included.
    pub steps: Vec<String>,
    /// Best-known distance from the source at each step.
    pub cumulative: Vec<u64>,
}

/// One border crossing of a [`ShortestPath`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathLeg {
    pub from: String,
    pub to: String,
    pub distance: u64,
}

impl ShortestPath {
    /// Number of border crossings.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Legs with distances taken as the difference of cumulative distances
    /// between consecutive steps.
    pub fn legs(&self) -> Vec<PathLeg> {
        self.steps
            .windows(2)
            .zip(self.cumulative.windows(2))
            .map(|(names, totals)| PathLeg {
                from: names[0].clone(),
                to: names[1].clone(),
                distance: totals[1] - totals[0],
            })
            .collect()
    }
}

/// Run Dijkstra's algorithm from `start` and stop once `goal` is settled.
///
/// Returns `None` when either endpoint is not a graph node, when either
/// endpoint is an island, or when `goal` is unreachable. A query from a
/// country to itself yields a zero-length path.
pub fn shortest_path(graph: &Graph, start: &str, goal: &str) -> Option<ShortestPath> {
    if !graph.contains(start) || !graph.contains(goal) {
        return None;
    }

    if start == goal {
        return Some(ShortestPath {
            distance: 0,
            steps: vec![start.to_string()],
            cumulative: vec![0],
        });
    }

    if graph.is_island(start) || graph.is_island(goal) {
        return None;
    }

    let search = run_dijkstra(graph, start, Some(goal));
    if !search.distances.contains_key(goal) {
        return None;
    }
    Some(reconstruct_path(&search, start, goal))
}

/// Shortest distance from `start` to every reachable country, `start` included.
pub fn shortest_distances(graph: &Graph, start: &str) -> HashMap<String, u64> {
    if !graph.contains(start) {
        return HashMap::new();
    }

    run_dijkstra(graph, start, None)
        .distances
        .into_iter()
        .map(|(country, distance)| (country.to_string(), distance))
        .collect()
}

struct Search<'g> {
    distances: HashMap<&'g str, u64>,
    parents: HashMap<&'g str, &'g str>,
}

fn run_dijkstra<'g>(graph: &'g Graph, start: &'g str, goal: Option<&str>) -> Search<'g> {
    let mut distances: HashMap<&'g str, u64> = HashMap::new();
    let mut parents: HashMap<&'g str, &'g str> = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start, 0);
    queue.push(QueueEntry { node: start, cost: 0 });

    while let Some(entry) = queue.pop() {
        match distances.get(entry.node) {
            Some(best) if *best < entry.cost => continue,
            _ => {}
        }

        if Some(entry.node) == goal {
            break;
        }

        let Some(edges) = graph.neighbours(entry.node) else {
            continue;
        };

        for (next, weight) in edges {
            let next = next.as_str();
            // Self-loops never shorten a path.
            if next == entry.node {
                continue;
            }

            let next_cost = entry.cost + u64::from(*weight);
            if next_cost < distances.get(next).copied().unwrap_or(u64::MAX) {
                distances.insert(next, next_cost);
                parents.insert(next, entry.node);
                queue.push(QueueEntry {
                    node: next,
                    cost: next_cost,
                });
            }
        }
    }

    Search { distances, parents }
}

fn reconstruct_path(search: &Search<'_>, start: &str, goal: &str) -> ShortestPath {
    let mut steps = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        steps.push(node);
        if node == start {
            break;
        }
        current = search.parents.get(node).copied();
    }
    steps.reverse();

    let cumulative = steps
        .iter()
        .map(|node| search.distances.get(node).copied().unwrap_or_default())
        .collect();

    ShortestPath {
        distance: search.distances.get(goal).copied().unwrap_or_default(),
        steps: steps.into_iter().map(str::to_string).collect(),
        cumulative,
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'g> {
    node: &'g str,
    cost: u64,
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
