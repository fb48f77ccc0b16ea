//! The scene model: boxes and arrows accumulated by the assembly routine,
//! rendered once and then exported.

/// A coordinate in the diagram's data space (y grows upward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Point::new(x, y)
    }
}

/// Data-space extent of the drawing surface.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl Bounds {
    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }
}

/// Per-box styling; the assembly passes one shared style today, but every
/// field stays per-node so a caller can tint a single box.
#[derive(Debug, Clone)]
pub struct NodeStyle {
    pub fill: String,
    pub edge: String,
    pub title_font_size: f32,
    pub subtitle_font_size: f32,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            fill: "#FFFFFF".to_string(),
            edge: "#222222".to_string(),
            title_font_size: 14.0,
            subtitle_font_size: 11.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub center: Point,
    pub title: String,
    pub subtitle: Option<String>,
    pub width: f32,
    pub height: f32,
    pub style: NodeStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
}

impl LineStyle {
    /// SVG dash pattern, `None` for a solid stroke.
    pub fn dash_array(self) -> Option<&'static str> {
        match self {
            LineStyle::Solid => None,
            LineStyle::Dashed => Some("8,5"),
            LineStyle::Dotted => Some("2,4"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Edge {
    pub from: Point,
    pub to: Point,
    pub label: Option<String>,
    pub style: LineStyle,
    pub bidirectional: bool,
}

impl Edge {
    /// Number of arrow paths this edge contributes to the rendered scene.
    pub fn arrow_count(&self) -> usize {
        if self.bidirectional { 2 } else { 1 }
    }
}

/// The canvas: a fixed-bounds surface collecting nodes and edges until the
/// single rendering pass. Exclusively owned by the assembly thread.
#[derive(Debug, Clone)]
pub struct Diagram {
    pub bounds: Bounds,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Diagram {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Records a rounded box with a centered title and optional subtitle.
    /// Returns the center point unchanged so callers can use it as a stable
    /// connection anchor.
    pub fn add_node(
        &mut self,
        center: impl Into<Point>,
        title: &str,
        subtitle: Option<&str>,
        size: (f32, f32),
        style: NodeStyle,
    ) -> Point {
        let center = center.into();
        self.nodes.push(Node {
            center,
            title: title.to_string(),
            subtitle: subtitle.map(str::to_string),
            width: size.0,
            height: size.1,
            style,
        });
        center
    }

    /// Records a curved arrow between two anchors, a second reverse arrow
    /// when `bidirectional`, and an optional midpoint label.
    pub fn add_edge(
        &mut self,
        from: Point,
        to: Point,
        label: Option<&str>,
        style: LineStyle,
        bidirectional: bool,
    ) {
        self.edges.push(Edge {
            from,
            to,
            label: label.map(str::to_string),
            style,
            bidirectional,
        });
    }

    /// Total arrow paths across all edges (two per bidirectional edge).
    pub fn arrow_paths(&self) -> usize {
        self.edges.iter().map(Edge::arrow_count).sum()
    }
}
