// File: src/core/algebra/engine.rs
use super::types::*;
use std::collections::HashMap;
use chrono::Utc;

const HISTORY_LIMIT: usize = 1000;

/// A weighted Leavitt path algebra: a directed graph of weighted arcs plus
/// a weight per vertex. Vertex weights follow the max-plus recurrence
/// (maximum over predecessors of predecessor weight + arc weight), with
/// source vertices holding caller-seeded base values.
#[derive(Debug)]
pub struct PathAlgebra {
    graph: AlgebraGraph,
    path_weights: HashMap<String, f64>,
    propagation_history: Vec<PropagationEvent>,
}

impl PathAlgebra {
    pub fn new() -> Self {
        Self {
            graph: AlgebraGraph::new(),
            path_weights: HashMap::new(),
            propagation_history: Vec::new(),
        }
    }

    /// Inserts/overwrites the arc source -> target. The endpoints become
    /// known vertices of the graph but get no weight-map entry until they
    /// are seeded or propagated.
    pub fn add_edge(&mut self, source: &str, target: &str, weight: f64) {
        self.graph.add_edge(source, target, weight);
    }

    /// Seeds/overwrites the vertex's weight. Pass 0.0 for a neutral base.
    /// Touches only the weight map, not the graph structure.
    pub fn add_vertex(&mut self, vertex: &str, weight: f64) {
        self.path_weights.insert(vertex.to_string(), weight);
    }

    pub fn weight(&self, vertex: &str) -> Result<f64, AlgebraError> {
        self.path_weights.get(vertex)
            .copied()
            .ok_or_else(|| AlgebraError::MissingVertex(vertex.to_string()))
    }

    /// One step of the recurrence. Sources return their stored base value;
    /// everything else takes the maximum over incoming arcs of
    /// (predecessor's stored weight + arc weight). Predecessor weights are
    /// read as currently stored, so the result is only final once every
    /// predecessor already is - `propagate_all` guarantees that by visiting
    /// vertices in topological order.
    pub fn path_weight(&self, vertex: &str) -> Result<f64, AlgebraError> {
        let predecessors = self.graph.predecessors(vertex);

        if predecessors.is_empty() {
            return self.path_weights.get(vertex)
                .copied()
                .ok_or_else(|| AlgebraError::MissingBaseWeight(vertex.to_string()));
        }

        let mut best = f64::NEG_INFINITY;
        for pred in &predecessors {
            let pred_weight = self.path_weights.get(pred)
                .copied()
                .ok_or_else(|| AlgebraError::MissingVertex(pred.clone()))?;
            let candidate = pred_weight + self.graph.edge_weight(pred, vertex)?;
            best = best.max(candidate);
        }

        Ok(best)
    }

    /// Recomputes every vertex known to the graph, in topological order so
    /// each vertex is finalized after all of its predecessors. Fails up
    /// front with `CircularDependency` when the graph has a cycle, and with
    /// `MissingBaseWeight` when an unseeded source is reached.
    pub fn propagate_all(&mut self) -> Result<PropagationReport, AlgebraError> {
        let start_time = std::time::Instant::now();

        let order = self.graph.topological_order()?;
        let mut changed = Vec::new();

        for vertex in &order {
            let new_weight = self.path_weight(vertex)?;
            let old_weight = self.path_weights.insert(vertex.clone(), new_weight);

            if old_weight != Some(new_weight) {
                changed.push(vertex.clone());
                self.propagation_history.push(PropagationEvent {
                    timestamp: Utc::now(),
                    vertex: vertex.clone(),
                    old_weight,
                    new_weight,
                });
            }
        }

        if self.propagation_history.len() > HISTORY_LIMIT {
            let excess = self.propagation_history.len() - HISTORY_LIMIT;
            self.propagation_history.drain(0..excess);
        }

        Ok(PropagationReport {
            changed_vertices: changed,
            vertices_visited: order.len(),
            time_taken: start_time.elapsed(),
        })
    }

    /// Product of two vertex weights. No traversal; both vertices must
    /// already have weight-map entries.
    pub fn multiply(&self, a: &str, b: &str) -> Result<f64, AlgebraError> {
        Ok(self.weight(a)? * self.weight(b)?)
    }

    pub fn has_vertex(&self, name: &str) -> bool {
        self.graph.has_vertex(name)
    }

    pub fn vertex_names(&self) -> Vec<String> {
        self.graph.vertex_names()
    }

    pub fn graph(&self) -> &AlgebraGraph {
        &self.graph
    }

    pub fn get_history(&self, limit: usize) -> Vec<&PropagationEvent> {
        let start = if self.propagation_history.len() > limit {
            self.propagation_history.len() - limit
        } else {
            0
        };

        self.propagation_history[start..].iter().collect()
    }

    pub fn to_dot(&self) -> String {
        self.graph.to_dot(&self.path_weights)
    }

    /// The annotated graph as plain data, for callers that serialize it
    /// instead of rendering the DOT output.
    pub fn snapshot(&self) -> GraphSnapshot {
        let mut vertices: Vec<VertexSnapshot> = self.graph.vertex_names()
            .into_iter()
            .map(|name| {
                let weight = self.path_weights.get(&name).copied();
                VertexSnapshot { name, weight }
            })
            .collect();
        vertices.sort_by(|a, b| a.name.cmp(&b.name));

        let mut edges: Vec<EdgeSnapshot> = self.graph.edge_indices.keys()
            .map(|(source, target)| EdgeSnapshot {
                source: source.clone(),
                target: target.clone(),
                // Lookups over edge_indices keys cannot miss.
                weight: self.graph.edge_weight(source, target).unwrap_or(0.0),
            })
            .collect();
        edges.sort_by(|a, b| (&a.source, &a.target).cmp(&(&b.source, &b.target)));

        GraphSnapshot { vertices, edges }
    }

    pub fn clear(&mut self) {
        self.graph = AlgebraGraph::new();
        self.path_weights.clear();
        self.propagation_history.clear();
    }
}
