//! Interaction network built from match rows.
//!
//! The graph is data only: nodes are drugs, edges are interactions coloured
//! by severity. Renderers (a browser force layout, Graphviz) consume it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::MatchResult;
use crate::matcher::title_case;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub color: String,
    /// Hover text: title-cased severity, a line break, then the risk.
    pub title: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InteractionGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl InteractionGraph {
    /// One node per distinct drug (first-seen order), one edge per row.
    #[must_use]
    pub fn from_results(results: &[MatchResult]) -> Self {
        let mut graph = Self::default();
        for result in results {
            graph.add_node(&result.drug_1);
            graph.add_node(&result.drug_2);
            graph.edges.push(GraphEdge {
                from: result.drug_1.clone(),
                to: result.drug_2.clone(),
                color: result.severity.color().to_string(),
                title: format!("{}\n{}", title_case(result.severity.as_str()), result.risk),
            });
        }
        graph
    }

    fn add_node(&mut self, name: &str) {
        if self.nodes.iter().any(|node| node.id == name) {
            return;
        }
        self.nodes.push(GraphNode {
            id: name.to_string(),
            label: name.to_string(),
        });
    }

    /// Render as an undirected Graphviz graph.
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut out = String::from("graph interactions {\n");
        for node in &self.nodes {
            out.push_str(&format!(
                "  {} [label={}];\n",
                dot_quote(&node.id),
                dot_quote(&node.label)
            ));
        }
        for edge in &self.edges {
            out.push_str(&format!(
                "  {} -- {} [color={}, tooltip={}];\n",
                dot_quote(&edge.from),
                dot_quote(&edge.to),
                edge.color,
                dot_quote(&edge.title)
            ));
        }
        out.push('}');
        out.push('\n');
        out
    }
}

fn dot_quote(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    format!("\"{escaped}\"")
}
