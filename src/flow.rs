//! The fixed CrewAI workflow scene: six boxes, nine arrows, all positions
//! hand-authored. No layout engine runs; the coordinates are the layout.

use crate::config::DiagramConfig;
use crate::diagram::{Diagram, LineStyle, NodeStyle};

/// Assembles the workflow diagram. The call order guarantees every edge
/// endpoint is an anchor returned by an earlier `add_node` call.
pub fn crew_flow(config: &DiagramConfig) -> Diagram {
    let mut diagram = Diagram::new(config.canvas.bounds());
    let size = (config.box_width, config.box_height);

    let coordinator = diagram.add_node(
        (0.0, 13.5),
        "Agent Coordinator",
        Some("(Plans & orchestrates tasks)"),
        size,
        NodeStyle::default(),
    );
    let retrieval = diagram.add_node(
        (-11.0, 9.4),
        "Knowledge Retrieval",
        Some("(Finds sources \u{2022} expands queries \u{2022} ranks & cites)"),
        size,
        NodeStyle::default(),
    );
    let synthesis = diagram.add_node(
        (0.0, 9.4),
        "Synthesis & Analysis",
        Some("(Combines evidence \u{2022} derives steps \u{2022} resolves conflicts)"),
        size,
        NodeStyle::default(),
    );
    let validation = diagram.add_node(
        (11.0, 9.4),
        "Quality Validation",
        Some("(Checks accuracy \u{2022} completeness \u{2022} standards compliance)"),
        size,
        NodeStyle::default(),
    );
    let bluetooth = diagram.add_node(
        (-4.5, 4.8),
        "Bluetooth Specialist",
        Some("(Protocol expertise \u{2022} compatibility \u{2022} performance tuning)"),
        size,
        NodeStyle::default(),
    );
    let devices = diagram.add_node(
        (4.5, 4.8),
        "Device Interaction",
        Some("(Device registry \u{2022} context \u{2022} troubleshooting)"),
        size,
        NodeStyle::default(),
    );

    diagram.add_edge(coordinator, retrieval, Some("delegate: retrieval"), LineStyle::Solid, false);
    diagram.add_edge(coordinator, synthesis, Some("delegate: synthesis"), LineStyle::Solid, false);
    diagram.add_edge(coordinator, validation, Some("delegate: QA"), LineStyle::Solid, false);

    diagram.add_edge(retrieval, synthesis, Some("share: passages & gaps"), LineStyle::Solid, true);
    diagram.add_edge(synthesis, validation, Some("review: logic & citations"), LineStyle::Solid, true);

    diagram.add_edge(synthesis, bluetooth, Some("escalate: protocol deep-dive"), LineStyle::Solid, false);
    diagram.add_edge(synthesis, devices, Some("request: device context & logs"), LineStyle::Solid, false);
    diagram.add_edge(bluetooth, devices, Some("interop checks & fixes"), LineStyle::Solid, true);

    diagram.add_edge(validation, retrieval, Some("feedback: refine search / cites"), LineStyle::Dotted, false);

    diagram
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembles_six_boxes_and_nine_connectors() {
        let diagram = crew_flow(&DiagramConfig::default());
        assert_eq!(diagram.nodes.len(), 6);
        assert_eq!(diagram.edges.len(), 9);
    }

    #[test]
    fn three_edges_are_bidirectional() {
        let diagram = crew_flow(&DiagramConfig::default());
        let both = diagram.edges.iter().filter(|edge| edge.bidirectional).count();
        assert_eq!(both, 3);
        assert_eq!(diagram.arrow_paths(), 12);
    }

    #[test]
    fn every_edge_endpoint_is_a_node_anchor() {
        let diagram = crew_flow(&DiagramConfig::default());
        let anchors: Vec<_> = diagram.nodes.iter().map(|node| node.center).collect();
        for edge in &diagram.edges {
            assert!(anchors.contains(&edge.from), "dangling from-anchor");
            assert!(anchors.contains(&edge.to), "dangling to-anchor");
        }
    }

    #[test]
    fn only_the_feedback_edge_is_dotted() {
        let diagram = crew_flow(&DiagramConfig::default());
        let dotted: Vec<_> = diagram
            .edges
            .iter()
            .filter(|edge| edge.style == LineStyle::Dotted)
            .collect();
        assert_eq!(dotted.len(), 1);
        assert_eq!(dotted[0].label.as_deref(), Some("feedback: refine search / cites"));
    }

    #[test]
    fn every_node_fits_inside_the_canvas() {
        let config = DiagramConfig::default();
        let diagram = crew_flow(&config);
        let bounds = diagram.bounds;
        for node in &diagram.nodes {
            assert!(node.center.x - node.width / 2.0 >= bounds.x_min);
            assert!(node.center.x + node.width / 2.0 <= bounds.x_max);
            assert!(node.center.y - node.height / 2.0 >= bounds.y_min);
            assert!(node.center.y + node.height / 2.0 <= bounds.y_max);
        }
    }
}
