use crate::config::{DiagramConfig, OUT_PDF, OUT_PNG};
use crate::export::{write_pdf, write_png};
use crate::flow::crew_flow;
use crate::notebook;
use crate::render::render_svg;
use crate::theme::Theme;
use anyhow::Result;
use clap::Parser;
use std::path::Path;

/// The diagram content and the output names are fixed constants; the command
/// takes nothing beyond the usual --help and --version.
#[derive(Parser, Debug)]
#[command(
    name = "crewflow",
    version,
    about = "Renders the CrewAI agent workflow diagram to PNG and PDF"
)]
pub struct Args {}

pub fn run() -> Result<()> {
    let _args = Args::parse();
    let config = DiagramConfig::default();
    let theme = Theme::refined();

    let diagram = crew_flow(&config);
    let svg = render_svg(&diagram, &theme, &config);

    let png = Path::new(OUT_PNG);
    let pdf = Path::new(OUT_PDF);
    write_png(&svg, png, config.canvas.png_zoom, &theme.font_family)?;
    write_pdf(&svg, pdf, &theme.font_family)?;

    println!("Saved: {}", png.canonicalize()?.display());
    println!("Saved: {}", pdf.canonicalize()?.display());

    notebook::display_file_links(&[png, pdf]);
    Ok(())
}
