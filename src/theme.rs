use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub title_color: String,
    pub subtitle_color: String,
    pub line_color: String,
    pub edge_label_color: String,
    pub edge_label_background: String,
    pub background: String,
}

impl Theme {
    /// The hand-tuned palette of the original figure.
    pub fn refined() -> Self {
        Self {
            font_family: "DejaVu Sans, Verdana, sans-serif".to_string(),
            title_color: "#000000".to_string(),
            subtitle_color: "#333333".to_string(),
            line_color: "#222222".to_string(),
            edge_label_color: "#000000".to_string(),
            edge_label_background: "#FFFFFF".to_string(),
            background: "#FFFFFF".to_string(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::refined()
    }
}
