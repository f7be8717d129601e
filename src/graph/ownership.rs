// src/graph/ownership.rs
//! Builds the collaboration graph from per-file ownership records.
//!
//! Two contributors are connected when they are both significant owners of
//! the same file; the edge weight is the number of files they share.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::Result;
use crate::types::{Edge, Graph, Node, OwnershipRecord};

/// Minimum per-file DOA for a contributor to count as significant.
pub const DEFAULT_DOA_THRESHOLD: f64 = 0.5;
/// Minimum shared-file count for a pair to become an edge.
pub const DEFAULT_MIN_SHARED_FILES: usize = 1;

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("invalid slug regex"));

/// Counts describing one ownership build. All zero for degenerate input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OwnershipStats {
    /// Files that contributed at least one record after module filtering.
    pub files: usize,
    /// Distinct significant contributors.
    pub developers: usize,
    /// Contributor pairs sharing at least one file (before `min_shared_files`).
    pub pairs: usize,
}

/// A built graph plus its build statistics.
#[derive(Debug, Clone, Default)]
pub struct OwnershipBuild {
    pub graph: Graph,
    pub stats: OwnershipStats,
}

/// Ownership artifacts arrive either as a bare record array or wrapped in
/// a `records` field.
#[derive(Deserialize)]
#[serde(untagged)]
enum OwnershipArtifact {
    Wrapped { records: Vec<OwnershipRecord> },
    Bare(Vec<OwnershipRecord>),
}

/// Parses an ownership-analysis JSON artifact into records.
pub fn records_from_json(json: &str) -> Result<Vec<OwnershipRecord>> {
    let artifact: OwnershipArtifact = serde_json::from_str(json)?;
    Ok(match artifact {
        OwnershipArtifact::Wrapped { records } | OwnershipArtifact::Bare(records) => records,
    })
}

/// Normalizes a developer identity: lowercase, whitespace runs to hyphens.
///
/// "Jane  Doe" and "jane doe" collapse to the same node.
#[must_use]
pub fn slug(developer: &str) -> String {
    WHITESPACE_RE
        .replace_all(developer.trim(), "-")
        .to_lowercase()
}

/// Builds the collaboration graph from ownership records.
///
/// Zero qualifying records produce an empty graph with zeroed stats; this
/// never fails.
#[must_use]
pub fn build(
    records: &[OwnershipRecord],
    module: Option<&str>,
    doa_threshold: f64,
    min_shared_files: usize,
) -> OwnershipBuild {
    let groups = group_by_file(records, module);

    let mut labels: HashMap<String, String> = HashMap::new();
    let mut doa_sums: HashMap<String, f64> = HashMap::new();
    let mut shared: HashMap<(String, String), usize> = HashMap::new();

    for (_, file_records) in &groups {
        let significant = significant_contributors(file_records, doa_threshold);

        for (id, label, doa) in &significant {
            labels
                .entry(id.clone())
                .or_insert_with(|| label.to_string());
            *doa_sums.entry(id.clone()).or_insert(0.0) += doa;
        }

        count_pairs(&significant, &mut shared);
    }

    let nodes = collect_nodes(&labels, &doa_sums);
    let edges = collect_edges(&shared, min_shared_files);

    OwnershipBuild {
        stats: OwnershipStats {
            files: groups.len(),
            developers: nodes.len(),
            pairs: shared.len(),
        },
        graph: Graph { nodes, edges },
    }
}

/// Groups records by file path in first-appearance order, applying the
/// optional module filter as a path substring match.
fn group_by_file<'a>(
    records: &'a [OwnershipRecord],
    module: Option<&str>,
) -> Vec<(&'a str, Vec<&'a OwnershipRecord>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&OwnershipRecord>)> = Vec::new();

    for record in records {
        if let Some(needle) = module {
            if !record.file_path.contains(needle) {
                continue;
            }
        }
        let slot = *index.entry(record.file_path.as_str()).or_insert_with(|| {
            groups.push((record.file_path.as_str(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(record);
    }

    groups
}

/// Contributors on one file clearing the DOA threshold, deduplicated by
/// slug (first spelling wins), in record order.
fn significant_contributors<'a>(
    file_records: &[&'a OwnershipRecord],
    doa_threshold: f64,
) -> Vec<(String, &'a str, f64)> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut result = Vec::new();

    for record in file_records {
        if record.normalized_doa < doa_threshold {
            continue;
        }
        let id = slug(&record.developer);
        if seen.insert(id.clone()) {
            result.push((id, record.developer.as_str(), record.normalized_doa));
        }
    }

    result
}

/// Increments the shared-file counter for every unordered significant pair.
fn count_pairs(
    significant: &[(String, &str, f64)],
    shared: &mut HashMap<(String, String), usize>,
) {
    for i in 0..significant.len() {
        for j in (i + 1)..significant.len() {
            let (a, b) = (&significant[i].0, &significant[j].0);
            let key = if a <= b {
                (a.clone(), b.clone())
            } else {
                (b.clone(), a.clone())
            };
            *shared.entry(key).or_insert(0) += 1;
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn collect_nodes(labels: &HashMap<String, String>, doa_sums: &HashMap<String, f64>) -> Vec<Node> {
    let max_sum = doa_sums.values().copied().fold(0.0_f64, f64::max);
    let divisor = if max_sum > 0.0 { max_sum } else { 1.0 };

    let mut nodes: Vec<Node> = doa_sums
        .iter()
        .map(|(id, sum)| Node {
            id: id.clone(),
            label: labels.get(id).cloned().unwrap_or_else(|| id.clone()),
            doa_normalized: round2(sum / divisor),
        })
        .collect();

    nodes.sort_by(|a, b| a.id.cmp(&b.id));
    nodes
}

#[allow(clippy::cast_precision_loss)]
fn collect_edges(shared: &HashMap<(String, String), usize>, min_shared_files: usize) -> Vec<Edge> {
    let max_count = shared
        .iter()
        .filter(|(_, &count)| count >= min_shared_files)
        .map(|(_, &count)| count)
        .max()
        .unwrap_or(0);
    let divisor = if max_count > 0 { max_count as f64 } else { 1.0 };

    let mut edges: Vec<Edge> = shared
        .iter()
        .filter(|(_, &count)| count >= min_shared_files)
        .map(|((source, target), &count)| {
            let normalized = count as f64 / divisor;
            Edge {
                source: source.clone(),
                target: target.clone(),
                weight: count as f64,
                normalized_weight: normalized,
                spof_score: normalized,
                collaboration_strength: normalized,
            }
        })
        .collect();

    // Weight descending, endpoint ids as a deterministic tie-break.
    edges.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| (&a.source, &a.target).cmp(&(&b.source, &b.target)))
    });
    edges
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
