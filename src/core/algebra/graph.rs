// File: src/core/algebra/graph.rs
use super::types::*;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::algo::toposort;
use petgraph::visit::EdgeRef;
use chrono::Utc;
use std::collections::HashMap;

impl AlgebraGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_indices: HashMap::new(),
            edge_indices: HashMap::new(),
        }
    }

    fn ensure_vertex(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(name) {
            return idx;
        }

        let node = VertexNode {
            name: name.to_string(),
            created_at: Utc::now(),
        };

        let node_idx = self.graph.add_node(node);
        self.node_indices.insert(name.to_string(), node_idx);
        node_idx
    }

    /// Inserts the arc source -> target. Both endpoints become known
    /// vertices; a repeated (source, target) pair overwrites the stored
    /// weight in place.
    pub fn add_edge(&mut self, source: &str, target: &str, weight: f64) {
        let source_idx = self.ensure_vertex(source);
        let target_idx = self.ensure_vertex(target);

        let key = (source.to_string(), target.to_string());
        if let Some(&edge_idx) = self.edge_indices.get(&key) {
            if let Some(edge) = self.graph.edge_weight_mut(edge_idx) {
                edge.weight = weight;
            }
            return;
        }

        let edge = WeightedEdge {
            source: source.to_string(),
            target: target.to_string(),
            weight,
            created_at: Utc::now(),
        };

        let edge_idx = self.graph.add_edge(source_idx, target_idx, edge);
        self.edge_indices.insert(key, edge_idx);
    }

    pub fn has_vertex(&self, name: &str) -> bool {
        self.node_indices.contains_key(name)
    }

    pub fn vertex_names(&self) -> Vec<String> {
        self.node_indices.keys().cloned().collect()
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Vertices with an arc directed into `name`. Empty for sources and
    /// for names the graph has never seen.
    pub fn predecessors(&self, name: &str) -> Vec<String> {
        let mut predecessors = Vec::new();

        if let Some(&node_idx) = self.node_indices.get(name) {
            for edge in self.graph.edges_directed(node_idx, petgraph::Direction::Incoming) {
                let source_idx = edge.source();
                let source_name = &self.graph[source_idx].name;
                predecessors.push(source_name.clone());
            }
        }

        predecessors
    }

    pub fn edge_weight(&self, source: &str, target: &str) -> Result<f64, AlgebraError> {
        let key = (source.to_string(), target.to_string());
        let edge_idx = self.edge_indices.get(&key)
            .ok_or_else(|| AlgebraError::MissingEdge(source.to_string(), target.to_string()))?;

        self.graph.edge_weight(*edge_idx)
            .map(|edge| edge.weight)
            .ok_or_else(|| AlgebraError::MissingEdge(source.to_string(), target.to_string()))
    }

    pub fn topological_order(&self) -> Result<Vec<String>, AlgebraError> {
        match toposort(&self.graph, None) {
            Ok(order) => {
                Ok(order.into_iter()
                    .map(|idx| self.graph[idx].name.clone())
                    .collect())
            }
            Err(cycle) => {
                let cycle_node = self.graph[cycle.node_id()].name.clone();
                Err(AlgebraError::CircularDependency(vec![cycle_node]))
            }
        }
    }

    /// Graphviz rendering of the annotated graph. Vertices carry their
    /// current weight when the caller has one; edges always carry theirs.
    pub fn to_dot(&self, weights: &HashMap<String, f64>) -> String {
        let mut dot = String::from("digraph WeightedLeavittPathAlgebra {\n");
        dot.push_str("  rankdir=LR;\n  node [shape=box];\n\n");

        let mut names: Vec<&String> = self.node_indices.keys().collect();
        names.sort();

        for name in names {
            let label = match weights.get(name.as_str()) {
                Some(w) => format!("{} = {:.2}", name, w),
                None => name.to_string(),
            };
            dot.push_str(&format!("  \"{}\" [label=\"{}\"];\n", name, label));
        }

        dot.push_str("\n");

        for edge in self.graph.edge_references() {
            let source = &self.graph[edge.source()].name;
            let target = &self.graph[edge.target()].name;
            let weight = edge.weight().weight;

            dot.push_str(&format!(
                "  \"{}\" -> \"{}\" [label=\"{:.2}\"];\n",
                source, target, weight
            ));
        }

        dot.push_str("}\n");
        dot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_registers_both_endpoints() {
        let mut graph = AlgebraGraph::new();
        graph.add_edge("a", "b", 1.0);

        assert!(graph.has_vertex("a"));
        assert!(graph.has_vertex("b"));
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_duplicate_edge_overwrites_weight() {
        let mut graph = AlgebraGraph::new();
        graph.add_edge("a", "b", 1.0);
        graph.add_edge("a", "b", 7.5);

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_weight("a", "b").unwrap(), 7.5);
    }

    #[test]
    fn test_predecessors_of_unknown_vertex_is_empty() {
        let graph = AlgebraGraph::new();
        assert!(graph.predecessors("ghost").is_empty());
    }

    #[test]
    fn test_predecessors_collects_incoming_arcs() {
        let mut graph = AlgebraGraph::new();
        graph.add_edge("a", "c", 1.0);
        graph.add_edge("b", "c", 2.0);
        graph.add_edge("c", "d", 3.0);

        let mut preds = graph.predecessors("c");
        preds.sort();
        assert_eq!(preds, vec!["a".to_string(), "b".to_string()]);
        assert!(graph.predecessors("a").is_empty());
    }

    #[test]
    fn test_edge_weight_missing_arc() {
        let mut graph = AlgebraGraph::new();
        graph.add_edge("a", "b", 1.0);

        assert!(matches!(
            graph.edge_weight("b", "a"),
            Err(AlgebraError::MissingEdge(_, _))
        ));
    }

    #[test]
    fn test_topological_order_respects_arcs() {
        let mut graph = AlgebraGraph::new();
        graph.add_edge("a", "b", 1.0);
        graph.add_edge("b", "c", 1.0);

        let order = graph.topological_order().unwrap();
        let pos = |name: &str| order.iter().position(|v| v == name).unwrap();
        assert!(pos("a") < pos("b"));
        assert!(pos("b") < pos("c"));
    }

    #[test]
    fn test_topological_order_rejects_cycle() {
        let mut graph = AlgebraGraph::new();
        graph.add_edge("a", "b", 1.0);
        graph.add_edge("b", "a", 1.0);

        assert!(matches!(
            graph.topological_order(),
            Err(AlgebraError::CircularDependency(_))
        ));
    }

    #[test]
    fn test_to_dot_labels_vertices_and_edges() {
        let mut graph = AlgebraGraph::new();
        graph.add_edge("v1", "v2", 2.5);

        let mut weights = HashMap::new();
        weights.insert("v1".to_string(), 0.0);

        let dot = graph.to_dot(&weights);
        assert!(dot.contains("\"v1\" [label=\"v1 = 0.00\"]"));
        assert!(dot.contains("\"v2\" [label=\"v2\"]"));
        assert!(dot.contains("\"v1\" -> \"v2\" [label=\"2.50\"]"));
    }
}
