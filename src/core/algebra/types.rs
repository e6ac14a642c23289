// File: src/core/algebra/types.rs
use std::collections::HashMap;
use chrono::{DateTime, Utc};
use petgraph::graph::{DiGraph, NodeIndex, EdgeIndex};
use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VertexNode {
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub source: String,
    pub target: String,
    pub weight: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct AlgebraGraph {
    pub graph: DiGraph<VertexNode, WeightedEdge>,
    pub node_indices: HashMap<String, NodeIndex>,
    pub edge_indices: HashMap<(String, String), EdgeIndex>,
}

/// Outcome of one full propagation pass.
#[derive(Debug, Clone)]
pub struct PropagationReport {
    pub changed_vertices: Vec<String>,
    pub vertices_visited: usize,
    pub time_taken: std::time::Duration,
}

#[derive(Debug, Clone)]
pub struct PropagationEvent {
    pub timestamp: DateTime<Utc>,
    pub vertex: String,
    pub old_weight: Option<f64>,
    pub new_weight: f64,
}

impl PropagationEvent {
    pub fn vertex(&self) -> &str {
        &self.vertex
    }

    pub fn new_weight(&self) -> f64 {
        self.new_weight
    }
}

#[derive(Debug)]
pub enum AlgebraError {
    MissingBaseWeight(String),
    MissingVertex(String),
    MissingEdge(String, String),
    CircularDependency(Vec<String>),
}

impl std::fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlgebraError::MissingBaseWeight(vertex) =>
                write!(f, "Source vertex '{}' has no base weight", vertex),
            AlgebraError::MissingVertex(vertex) =>
                write!(f, "Vertex not found in weight map: {}", vertex),
            AlgebraError::MissingEdge(source, target) =>
                write!(f, "No edge {} -> {}", source, target),
            AlgebraError::CircularDependency(path) =>
                write!(f, "Circular dependency: {}", path.join(" -> ")),
        }
    }
}

impl std::error::Error for AlgebraError {}

/// Serializable view of the annotated graph, for callers that want the
/// structure instead of a rendered diagram.
#[derive(Debug, Clone, Serialize)]
pub struct GraphSnapshot {
    pub vertices: Vec<VertexSnapshot>,
    pub edges: Vec<EdgeSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VertexSnapshot {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EdgeSnapshot {
    pub source: String,
    pub target: String,
    pub weight: f64,
}
