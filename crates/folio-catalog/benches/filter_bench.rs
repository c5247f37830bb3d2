use criterion::{Criterion, black_box, criterion_group, criterion_main};
use folio_catalog::{CategorySelection, filter_projects};
use folio_model::ProjectRecord;

fn sample_catalog(size: usize) -> Vec<ProjectRecord> {
    let categories = ["Web", "Mobile", "Data", "Design"];
    (0..size)
        .map(|i| {
            ProjectRecord::new(
                format!("Project {i} Storefront"),
                categories[i % categories.len()],
            )
            .with_description(format!("An online storefront with feature set {i}"))
            .with_tags(&["react", "typescript", "stripe"])
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let records = sample_catalog(512);
    let unrestricted = CategorySelection::new();
    let restricted = CategorySelection::from_labels(["Web", "Data"]);

    c.bench_function("filter/empty_query", |b| {
        b.iter(|| filter_projects(black_box(&records), black_box(""), &unrestricted));
    });

    c.bench_function("filter/text_query", |b| {
        b.iter(|| filter_projects(black_box(&records), black_box("storefront"), &unrestricted));
    });

    c.bench_function("filter/text_and_categories", |b| {
        b.iter(|| filter_projects(black_box(&records), black_box("feature"), &restricted));
    });

    c.bench_function("filter/no_match", |b| {
        b.iter(|| filter_projects(black_box(&records), black_box("zzzzzz"), &restricted));
    });
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
