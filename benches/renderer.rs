use crewflow_diagram::config::DiagramConfig;
use crewflow_diagram::flow::crew_flow;
use crewflow_diagram::render::render_svg;
use crewflow_diagram::theme::Theme;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_assembly(c: &mut Criterion) {
    let config = DiagramConfig::default();
    c.bench_function("crew_flow_assembly", |b| {
        b.iter(|| black_box(crew_flow(black_box(&config))))
    });
}

fn bench_render_svg(c: &mut Criterion) {
    let config = DiagramConfig::default();
    let theme = Theme::refined();
    let diagram = crew_flow(&config);
    c.bench_function("render_svg", |b| {
        b.iter(|| black_box(render_svg(black_box(&diagram), &theme, &config)))
    });
}

criterion_group!(benches, bench_assembly, bench_render_svg);
criterion_main!(benches);
