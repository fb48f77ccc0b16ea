use crate::diagram::Bounds;
use serde::{Deserialize, Serialize};

/// Output file names. Fixed by design: nothing configures them at run time.
pub const OUT_PNG: &str = "crew_flow_refined.png";
pub const OUT_PDF: &str = "crew_flow_refined.pdf";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramConfig {
    /// Box size in data units.
    pub box_width: f32,
    pub box_height: f32,
    pub box_stroke_width: f32,
    /// Corner rounding of boxes and label backings, px.
    pub corner_radius: f32,
    /// Title offset above the box center, as a fraction of box height.
    pub title_offset: f32,
    /// Subtitle offset below the box center, as a fraction of box height.
    pub subtitle_offset: f32,
    pub label_font_size: f32,
    /// Edge labels sit this far above the anchor midpoint, data units.
    pub label_offset: f32,
    pub label_padding_x: f32,
    pub label_padding_y: f32,
    pub label_background_opacity: f32,
    pub arrow: ArrowConfig,
    pub canvas: CanvasConfig,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            box_width: 6.2,
            box_height: 2.1,
            box_stroke_width: 1.8,
            corner_radius: 10.0,
            title_offset: 0.26,
            subtitle_offset: 0.12,
            label_font_size: 11.0,
            label_offset: 0.5,
            label_padding_x: 6.0,
            label_padding_y: 3.0,
            label_background_opacity: 0.95,
            arrow: ArrowConfig::default(),
            canvas: CanvasConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrowConfig {
    /// Gap between each anchor and the arrow path endpoint, px, keeping the
    /// arrow clear of the box it connects.
    pub shrink: f32,
    pub stroke_width: f32,
    pub head_width: f32,
    pub head_length: f32,
    /// arc3-style bow of the connector as a fraction of the chord length;
    /// 0.0 keeps the chord straight.
    pub curvature: f32,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            shrink: 18.0,
            stroke_width: 1.8,
            head_width: 6.0,
            head_length: 8.0,
            curvature: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
    /// Data-unit to pixel scale of the SVG scene.
    pub px_per_unit: f32,
    /// Extra raster scale applied on PNG export.
    pub png_zoom: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            x_min: -15.0,
            x_max: 15.0,
            y_min: 3.2,
            y_max: 14.8,
            px_per_unit: 40.0,
            png_zoom: 2.0,
        }
    }
}

impl CanvasConfig {
    pub fn bounds(&self) -> Bounds {
        Bounds {
            x_min: self.x_min,
            x_max: self.x_max,
            y_min: self.y_min,
            y_max: self.y_max,
        }
    }
}
