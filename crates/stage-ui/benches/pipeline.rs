use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stage_layout::{place_list, Axis, ChildFrame, ListSpec};
use stage_ui::prelude::*;
use stage_ui::{HeadlessRenderer, Size, Stage};

const SECTION_COUNT: usize = 4;
const ROWS_PER_SECTION: usize = 32;
const ROWS_PER_SECTION_SAMPLES: &[usize] = &[8, 16, 32, 64];

fn pipeline_content(sections: usize, rows_per_section: usize) -> Descriptor {
    Column(
        Props::new().with("spacing", 4),
        (0..sections).map(|section| {
            Column(
                Props::new(),
                std::iter::once(Text(
                    Props::new()
                        .with("text", format!("Section {section}"))
                        .with("variant", "heading"),
                ))
                .chain((0..rows_per_section).map(move |row| {
                    Row(
                        Props::new().with("align", "center"),
                        [
                            Text(Props::new().with("text", format!("Item {section}-{row} title"))),
                            Button(Props::new().with("text", "Open")),
                        ],
                    )
                })),
            )
        }),
    )
}

fn ui_object_count(sections: usize, rows_per_section: usize) -> usize {
    1 + sections * (2 + rows_per_section * 3)
}

fn compose_fresh(sections: usize, rows_per_section: usize) -> Stage {
    let mut stage = Stage::new();
    compose(
        || pipeline_content(sections, rows_per_section),
        &mut stage,
        &UiConfig::default(),
    )
    .expect("composition");
    stage
}

fn bench_composition(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_composition");
    for &rows_per_section in ROWS_PER_SECTION_SAMPLES {
        group.bench_with_input(
            BenchmarkId::new("ui_objects", ui_object_count(SECTION_COUNT, rows_per_section)),
            &rows_per_section,
            |b, &rows_per_section| {
                b.iter(|| black_box(compose_fresh(SECTION_COUNT, rows_per_section)));
            },
        );
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let stage = compose_fresh(SECTION_COUNT, ROWS_PER_SECTION);

    c.bench_function("pipeline_render", |b| {
        b.iter(|| {
            let scene = HeadlessRenderer::new(&stage).render().expect("render");
            black_box(scene);
        });
    });
}

fn bench_place_list(c: &mut Criterion) {
    let frames: Vec<ChildFrame> = (0..512)
        .map(|index| ChildFrame::new(Size::new(40.0 + (index % 7) as f32, 20.0)))
        .collect();
    let spec = ListSpec::default().align(stage_layout::CrossAlignment::Center);

    c.bench_function("place_list_512", |b| {
        b.iter(|| black_box(place_list(Axis::Vertical, &spec, black_box(&frames))));
    });
}

criterion_group!(benches, bench_composition, bench_render, bench_place_list);
criterion_main!(benches);
