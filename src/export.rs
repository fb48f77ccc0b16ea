//! Exporters: the rendered SVG string becomes a raster PNG and a print-ready
//! PDF. Both go through the same usvg scene tree.

use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[cfg(any(feature = "png", feature = "pdf"))]
    #[error("invalid SVG scene: {0}")]
    Svg(#[from] usvg::Error),
    #[cfg(feature = "png")]
    #[error("failed to allocate a {width}x{height} pixmap")]
    Pixmap { width: u32, height: u32 },
    #[cfg(feature = "png")]
    #[error("failed to encode PNG: {0}")]
    Png(String),
    #[cfg(feature = "pdf")]
    #[error("failed to convert to PDF: {0}")]
    Pdf(String),
}

pub fn write_svg(svg: &str, path: &Path) -> Result<(), ExportError> {
    std::fs::write(path, svg).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(any(feature = "png", feature = "pdf"))]
fn svg_tree(svg: &str, font_family: &str) -> Result<usvg::Tree, ExportError> {
    let mut opt = usvg::Options::default();
    opt.font_family = font_family.to_string();
    opt.fontdb_mut().load_system_fonts();
    Ok(usvg::Tree::from_str(svg, &opt)?)
}

#[cfg(feature = "png")]
pub fn write_png(svg: &str, path: &Path, zoom: f32, font_family: &str) -> Result<(), ExportError> {
    let tree = svg_tree(svg, font_family)?;
    let size = tree.size();
    let width = (size.width() * zoom).round().max(1.0) as u32;
    let height = (size.height() * zoom).round().max(1.0) as u32;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or(ExportError::Pixmap { width, height })?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(zoom, zoom),
        &mut pixmap.as_mut(),
    );
    pixmap
        .save_png(path)
        .map_err(|err| ExportError::Png(err.to_string()))
}

#[cfg(feature = "pdf")]
pub fn write_pdf(svg: &str, path: &Path, font_family: &str) -> Result<(), ExportError> {
    let tree = svg_tree(svg, font_family)?;
    let pdf = svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|err| ExportError::Pdf(err.to_string()))?;
    std::fs::write(path, pdf).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_SVG: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"40\" height=\"40\" viewBox=\"0 0 40 40\"><rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/></svg>";

    #[test]
    fn write_svg_creates_a_non_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.svg");
        write_svg(MINIMAL_SVG, &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn write_svg_reports_the_failing_path() {
        let err = write_svg(MINIMAL_SVG, Path::new("/nonexistent-dir/scene.svg")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent-dir/scene.svg"));
    }

    #[cfg(feature = "png")]
    #[test]
    fn png_export_is_non_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.png");
        write_png(MINIMAL_SVG, &path, 2.0, "sans-serif").unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[cfg(feature = "pdf")]
    #[test]
    fn pdf_export_starts_with_the_pdf_magic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.pdf");
        write_pdf(MINIMAL_SVG, &path, "sans-serif").unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
