//! Diagram sketch store: positioned, colored, labeled nodes and the
//! edges between them. Canvas rendering and interactive connection are
//! owned by the view; this store only supplies node/edge data and the
//! label+color edit surface.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

use deskpad_core::{DeskError, DeskResult};

pub type NodeId = Uuid;

/// Node fill palette, gray first as the default.
pub const NODE_PALETTE: [SketchColor; 10] = [
    SketchColor::Gray,
    SketchColor::Yellow,
    SketchColor::Green,
    SketchColor::Blue,
    SketchColor::Red,
    SketchColor::Purple,
    SketchColor::Amber,
    SketchColor::Orange,
    SketchColor::Mint,
    SketchColor::Pink,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SketchColor {
    Gray,
    Yellow,
    Green,
    Blue,
    Red,
    Purple,
    Amber,
    Orange,
    Mint,
    Pink,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SketchNode {
    pub id: NodeId,
    pub x: i32,
    pub y: i32,
    pub label: String,
    pub color: SketchColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SketchEdge {
    pub source: NodeId,
    pub target: NodeId,
}

// Placement window for new nodes, in cells.
const PLACE_X: i32 = 8;
const PLACE_Y: i32 = 3;
const PLACE_SPREAD_X: i32 = 16;
const PLACE_SPREAD_Y: i32 = 8;

#[derive(Debug)]
pub struct SketchPad {
    pub nodes: Vec<SketchNode>,
    pub edges: Vec<SketchEdge>,
}

impl SketchPad {
    /// A pad seeded with the single "Start" node.
    pub fn new() -> Self {
        Self {
            nodes: vec![SketchNode {
                id: Uuid::new_v4(),
                x: PLACE_X,
                y: PLACE_Y,
                label: "Start".to_string(),
                color: SketchColor::Gray,
            }],
            edges: Vec::new(),
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&SketchNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Add a default-colored "Node" at a randomized offset and return its id.
    pub fn add_node(&mut self, rng: &mut impl Rng) -> NodeId {
        let node = SketchNode {
            id: Uuid::new_v4(),
            x: PLACE_X + rng.gen_range(0..PLACE_SPREAD_X),
            y: PLACE_Y + rng.gen_range(0..PLACE_SPREAD_Y),
            label: "Node".to_string(),
            color: SketchColor::Gray,
        };
        let id = node.id;
        self.nodes.push(node);
        id
    }

    /// Apply a label+color edit coming back from the node editor.
    pub fn update_node(&mut self, id: NodeId, label: &str, color: SketchColor) {
        if let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) {
            node.label = label.to_string();
            node.color = color;
        }
    }

    pub fn move_node(&mut self, id: NodeId, x: i32, y: i32) {
        if let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) {
            node.x = x;
            node.y = y;
        }
    }

    /// Connect two nodes. Self-loops, unknown endpoints, and duplicate
    /// edges are all silently ignored.
    pub fn connect(&mut self, source: NodeId, target: NodeId) {
        if source == target || self.node(source).is_none() || self.node(target).is_none() {
            return;
        }
        let edge = SketchEdge { source, target };
        if !self.edges.contains(&edge) {
            self.edges.push(edge);
        }
    }

    pub fn delete_node(&mut self, id: NodeId) {
        self.nodes.retain(|n| n.id != id);
        self.edges.retain(|e| e.source != id && e.target != id);
    }

    /// Export the diagram as pretty JSON: nodes with positions and
    /// colors, plus the edge list.
    pub fn export_json(&self, path: &Path) -> DeskResult<()> {
        #[derive(Serialize)]
        struct SketchExport<'a> {
            nodes: &'a [SketchNode],
            edges: &'a [SketchEdge],
        }
        let json = serde_json::to_string_pretty(&SketchExport {
            nodes: &self.nodes,
            edges: &self.edges,
        })
        .map_err(|e| DeskError::Serialization(e.to_string()))?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl Default for SketchPad {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    #[test]
    fn test_new_pad_has_start_node() {
        let pad = SketchPad::new();
        assert_eq!(pad.nodes.len(), 1);
        assert_eq!(pad.nodes[0].label, "Start");
        assert!(pad.edges.is_empty());
    }

    #[test]
    fn test_add_node_places_in_window() {
        let mut rng = rng();
        let mut pad = SketchPad::new();
        let id = pad.add_node(&mut rng);
        let node = pad.node(id).unwrap();
        assert_eq!(node.label, "Node");
        assert!((PLACE_X..PLACE_X + PLACE_SPREAD_X).contains(&node.x));
        assert!((PLACE_Y..PLACE_Y + PLACE_SPREAD_Y).contains(&node.y));
    }

    #[test]
    fn test_update_node_label_and_color() {
        let mut pad = SketchPad::new();
        let id = pad.nodes[0].id;
        pad.update_node(id, "Begin", SketchColor::Blue);
        let node = pad.node(id).unwrap();
        assert_eq!(node.label, "Begin");
        assert_eq!(node.color, SketchColor::Blue);
        // Unknown id is a no-op
        pad.update_node(Uuid::new_v4(), "Ghost", SketchColor::Red);
        assert_eq!(pad.nodes.len(), 1);
    }

    #[test]
    fn test_connect_rules() {
        let mut rng = rng();
        let mut pad = SketchPad::new();
        let start = pad.nodes[0].id;
        let other = pad.add_node(&mut rng);
        pad.connect(start, start); // self-loop ignored
        pad.connect(start, Uuid::new_v4()); // unknown endpoint ignored
        pad.connect(start, other);
        pad.connect(start, other); // duplicate ignored
        assert_eq!(pad.edges.len(), 1);
        assert_eq!(
            pad.edges[0],
            SketchEdge {
                source: start,
                target: other
            }
        );
    }

    #[test]
    fn test_delete_node_removes_incident_edges() {
        let mut rng = rng();
        let mut pad = SketchPad::new();
        let start = pad.nodes[0].id;
        let other = pad.add_node(&mut rng);
        pad.connect(start, other);
        pad.delete_node(other);
        assert!(pad.edges.is_empty());
        assert_eq!(pad.nodes.len(), 1);
    }

    #[test]
    fn test_export_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diagram.json");
        let pad = SketchPad::new();
        pad.export_json(&path).unwrap();
        let json = std::fs::read_to_string(path).unwrap();
        assert!(json.contains("Start"));
        assert!(json.contains("edges"));
    }
}
