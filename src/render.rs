use crate::config::DiagramConfig;
use crate::diagram::{Bounds, Diagram, Edge, Node, Point};
use crate::text_metrics::measure_text_width;
use crate::theme::Theme;

/// Maps data-space coordinates (y-up) onto SVG pixel space (y-down).
#[derive(Debug, Clone, Copy)]
pub struct Mapper {
    x_min: f32,
    y_max: f32,
    scale: f32,
}

impl Mapper {
    pub fn new(bounds: &Bounds, px_per_unit: f32) -> Self {
        Self {
            x_min: bounds.x_min,
            y_max: bounds.y_max,
            scale: px_per_unit,
        }
    }

    pub fn map(&self, point: Point) -> (f32, f32) {
        (
            (point.x - self.x_min) * self.scale,
            (self.y_max - point.y) * self.scale,
        )
    }

    /// Converts a data-space length to pixels.
    pub fn length(&self, units: f32) -> f32 {
        units * self.scale
    }
}

pub fn render_svg(diagram: &Diagram, theme: &Theme, config: &DiagramConfig) -> String {
    let mapper = Mapper::new(&diagram.bounds, config.canvas.px_per_unit);
    let width = mapper.length(diagram.bounds.width());
    let height = mapper.length(diagram.bounds.height());

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.0}\" height=\"{height:.0}\" viewBox=\"0 0 {width:.0} {height:.0}\">",
    ));

    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        theme.background
    ));

    svg.push_str("<defs>");
    svg.push_str(&format!(
        "<marker id=\"arrow\" viewBox=\"0 0 10 10\" refX=\"10\" refY=\"5\" markerWidth=\"{:.1}\" markerHeight=\"{:.1}\" orient=\"auto-start-reverse\"><path d=\"M 0 0 L 10 5 L 0 10 z\" fill=\"{}\"/></marker>",
        config.arrow.head_length,
        config.arrow.head_width,
        theme.line_color
    ));
    svg.push_str("</defs>");

    // Arrows sit under the boxes, matching the original z-order.
    for edge in &diagram.edges {
        render_edge_arrows(&mut svg, edge, &mapper, theme, config);
    }

    for node in &diagram.nodes {
        render_node(&mut svg, node, &mapper, theme, config);
    }

    // Labels go last so they stay legible over arrows and boxes.
    for edge in &diagram.edges {
        render_edge_label(&mut svg, edge, &mapper, theme, config);
    }

    svg.push_str("</svg>");
    svg
}

fn render_node(svg: &mut String, node: &Node, mapper: &Mapper, theme: &Theme, config: &DiagramConfig) {
    let (cx, cy) = mapper.map(node.center);
    let w = mapper.length(node.width);
    let h = mapper.length(node.height);

    svg.push_str(&format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{w:.2}\" height=\"{h:.2}\" rx=\"{:.1}\" ry=\"{:.1}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{:.1}\"/>",
        cx - w / 2.0,
        cy - h / 2.0,
        config.corner_radius,
        config.corner_radius,
        node.style.fill,
        node.style.edge,
        config.box_stroke_width
    ));

    // Title above center, subtitle below, both in box-height fractions.
    let title_y = cy - config.title_offset * h;
    svg.push_str(&centered_text(
        cx,
        title_y,
        &node.title,
        node.style.title_font_size,
        &theme.font_family,
        &theme.title_color,
        true,
    ));

    if let Some(subtitle) = &node.subtitle {
        let subtitle_y = cy + config.subtitle_offset * h;
        svg.push_str(&centered_text(
            cx,
            subtitle_y,
            subtitle,
            node.style.subtitle_font_size,
            &theme.font_family,
            &theme.subtitle_color,
            false,
        ));
    }
}

fn render_edge_arrows(
    svg: &mut String,
    edge: &Edge,
    mapper: &Mapper,
    theme: &Theme,
    config: &DiagramConfig,
) {
    let from = mapper.map(edge.from);
    let to = mapper.map(edge.to);
    let dash = edge
        .style
        .dash_array()
        .map(|pattern| format!(" stroke-dasharray=\"{pattern}\""))
        .unwrap_or_default();

    let forward = arrow_path(from, to, config.arrow.shrink, config.arrow.curvature);
    svg.push_str(&format!(
        "<path d=\"{forward}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{:.1}\"{dash} marker-end=\"url(#arrow)\"/>",
        theme.line_color, config.arrow.stroke_width
    ));

    if edge.bidirectional {
        let reverse = arrow_path(to, from, config.arrow.shrink, config.arrow.curvature);
        svg.push_str(&format!(
            "<path d=\"{reverse}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{:.1}\"{dash} marker-end=\"url(#arrow)\"/>",
            theme.line_color, config.arrow.stroke_width
        ));
    }
}

fn render_edge_label(
    svg: &mut String,
    edge: &Edge,
    mapper: &Mapper,
    theme: &Theme,
    config: &DiagramConfig,
) {
    let Some(label) = &edge.label else {
        return;
    };
    if label.is_empty() {
        return;
    }

    let mid = edge.from.midpoint(edge.to);
    let (x, y) = mapper.map(Point::new(mid.x, mid.y + config.label_offset));

    let text_width = measure_text_width(label, config.label_font_size, &theme.font_family);
    let rect_w = text_width + 2.0 * config.label_padding_x;
    let rect_h = config.label_font_size + 2.0 * config.label_padding_y;
    svg.push_str(&format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{rect_w:.2}\" height=\"{rect_h:.2}\" rx=\"{:.1}\" ry=\"{:.1}\" fill=\"{}\" fill-opacity=\"{:.2}\"/>",
        x - rect_w / 2.0,
        y - rect_h / 2.0,
        config.corner_radius / 2.0,
        config.corner_radius / 2.0,
        theme.edge_label_background,
        config.label_background_opacity
    ));
    svg.push_str(&centered_text(
        x,
        y,
        label,
        config.label_font_size,
        &theme.font_family,
        &theme.edge_label_color,
        false,
    ));
}

/// A quadratic path between two pixel anchors, pulled back from both ends by
/// `shrink` and bowed sideways by `curvature` (fraction of the chord).
fn arrow_path(from: (f32, f32), to: (f32, f32), shrink: f32, curvature: f32) -> String {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let chord = (dx * dx + dy * dy).sqrt();
    if chord <= 2.0 * shrink {
        // Anchors too close to shrink; draw the raw chord.
        return format!("M {:.2} {:.2} L {:.2} {:.2}", from.0, from.1, to.0, to.1);
    }

    let ux = dx / chord;
    let uy = dy / chord;
    let start = (from.0 + ux * shrink, from.1 + uy * shrink);
    let end = (to.0 - ux * shrink, to.1 - uy * shrink);
    let mid = ((start.0 + end.0) / 2.0, (start.1 + end.1) / 2.0);
    let control = (mid.0 - uy * curvature * chord, mid.1 + ux * curvature * chord);

    format!(
        "M {:.2} {:.2} Q {:.2} {:.2} {:.2} {:.2}",
        start.0, start.1, control.0, control.1, end.0, end.1
    )
}

fn centered_text(
    x: f32,
    y: f32,
    text: &str,
    font_size: f32,
    font_family: &str,
    fill: &str,
    bold: bool,
) -> String {
    // Baseline nudge approximating vertical centering of a single line.
    let baseline_y = y + font_size * 0.35;
    let weight = if bold { " font-weight=\"bold\"" } else { "" };
    format!(
        "<text x=\"{x:.2}\" y=\"{baseline_y:.2}\" text-anchor=\"middle\" font-family=\"{font_family}\" font-size=\"{font_size}\" fill=\"{fill}\"{weight}>{}</text>",
        escape_xml(text)
    )
}

pub(crate) fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::{Bounds, LineStyle, NodeStyle};

    fn scene() -> (Diagram, Theme, DiagramConfig) {
        let config = DiagramConfig::default();
        let mut diagram = Diagram::new(Bounds {
            x_min: -10.0,
            x_max: 10.0,
            y_min: 0.0,
            y_max: 10.0,
        });
        let a = diagram.add_node((-5.0, 5.0), "Alpha", Some("(first)"), (6.2, 2.1), NodeStyle::default());
        let b = diagram.add_node((5.0, 5.0), "Beta", None, (6.2, 2.1), NodeStyle::default());
        diagram.add_edge(a, b, Some("go"), LineStyle::Solid, false);
        (diagram, Theme::refined(), config)
    }

    #[test]
    fn render_svg_basic() {
        let (diagram, theme, config) = scene();
        let svg = render_svg(&diagram, &theme, &config);
        assert!(svg.contains("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("Alpha"));
        assert!(svg.contains("(first)"));
        assert!(svg.contains("go"));
    }

    #[test]
    fn bidirectional_edge_emits_two_arrow_paths() {
        let (mut diagram, theme, config) = scene();
        let from = diagram.nodes[0].center;
        let to = diagram.nodes[1].center;
        diagram.add_edge(from, to, None, LineStyle::Solid, true);
        let svg = render_svg(&diagram, &theme, &config);
        let arrows = svg.matches("marker-end=\"url(#arrow)\"").count();
        assert_eq!(arrows, 3);
    }

    #[test]
    fn dotted_edge_carries_a_dash_array() {
        let (mut diagram, theme, config) = scene();
        let from = diagram.nodes[0].center;
        let to = diagram.nodes[1].center;
        diagram.add_edge(from, to, None, LineStyle::Dotted, false);
        let svg = render_svg(&diagram, &theme, &config);
        assert!(svg.contains("stroke-dasharray=\"2,4\""));
    }

    #[test]
    fn empty_labels_draw_no_backing_patch() {
        let config = DiagramConfig::default();
        let mut diagram = Diagram::new(Bounds {
            x_min: 0.0,
            x_max: 10.0,
            y_min: 0.0,
            y_max: 10.0,
        });
        let a = diagram.add_node((2.0, 5.0), "A", None, (2.0, 1.0), NodeStyle::default());
        let b = diagram.add_node((8.0, 5.0), "B", None, (2.0, 1.0), NodeStyle::default());
        diagram.add_edge(a, b, None, LineStyle::Solid, false);
        let svg = render_svg(&diagram, &Theme::refined(), &config);
        assert!(!svg.contains("fill-opacity"));
    }

    #[test]
    fn arrow_path_shrinks_both_endpoints() {
        let path = arrow_path((0.0, 0.0), (100.0, 0.0), 18.0, 0.0);
        assert!(path.starts_with("M 18.00 0.00"));
        assert!(path.ends_with("82.00 0.00"));
    }

    #[test]
    fn arrow_path_falls_back_to_chord_when_too_short() {
        let path = arrow_path((0.0, 0.0), (10.0, 0.0), 18.0, 0.0);
        assert_eq!(path, "M 0.00 0.00 L 10.00 0.00");
    }

    #[test]
    fn mapper_flips_the_y_axis() {
        let bounds = Bounds {
            x_min: -15.0,
            x_max: 15.0,
            y_min: 3.2,
            y_max: 14.8,
        };
        let mapper = Mapper::new(&bounds, 40.0);
        let (x, y) = mapper.map(Point::new(-15.0, 14.8));
        assert_eq!((x, y), (0.0, 0.0));
        let (_, y_low) = mapper.map(Point::new(0.0, 3.2));
        assert!(y_low > y);
    }

    #[test]
    fn escapes_markup_in_titles() {
        let config = DiagramConfig::default();
        let mut diagram = Diagram::new(Bounds {
            x_min: 0.0,
            x_max: 10.0,
            y_min: 0.0,
            y_max: 10.0,
        });
        diagram.add_node((5.0, 5.0), "a<b & c>", None, (4.0, 2.0), NodeStyle::default());
        let svg = render_svg(&diagram, &Theme::refined(), &config);
        assert!(svg.contains("a&lt;b &amp; c&gt;"));
        assert!(!svg.contains("a<b"));
    }
}
