use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use tui_tree_list::{Enumerator, List, Tree};

fn example_tree() -> Tree {
    Tree::new()
        .child("Alfa")
        .child(
            Tree::new()
                .root("Bravo")
                .child("Charlie")
                .child(Tree::new().root("Delta").child("Echo").child("Foxtrot"))
                .child("Golf"),
        )
        .child("Hotel")
        .child(
            Tree::new()
                .root("India")
                .items(["Juliett", "Kilo", "Lima", "Mike", "November"]),
        )
        .child("Oscar")
        .child(
            Tree::new()
                .root("Papa")
                .items(["Quebec", "Romeo", "Sierra", "Tango", "Uniform"])
                .child(
                    Tree::new()
                        .root("Victor")
                        .items(["Whiskey", "Xray", "Yankee"]),
                ),
        )
        .child("Zulu")
}

fn example_list() -> List {
    List::from_items((0..1000).map(|index| format!("Item {index}\nsecond line")))
}

fn metadata() -> serde_json::Value {
    let output = std::process::Command::new("cargo")
        .arg("metadata")
        .arg("--format-version=1")
        .arg("--all-features")
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "cargo metadata should be executed successfully"
    );
    let stdout = String::from_utf8(output.stdout).expect("Should be able to parse metadata");
    let metadata: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    metadata
}

fn init(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("init");
    group.throughput(Throughput::Elements(1));

    group.bench_function("example-tree", |bencher| {
        bencher.iter(|| black_box(example_tree()));
    });

    let metadata = metadata();
    group.bench_function("metadata", |bencher| {
        bencher.iter(|| black_box(tui_tree_list::json::tree(black_box(&metadata))));
    });

    group.finish();
}

fn to_string(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("to_string");
    group.throughput(Throughput::Elements(1));

    let tree = example_tree();
    group.bench_function("example-tree", |bencher| {
        bencher.iter(|| black_box(black_box(&tree).to_string()));
    });

    let tree = tui_tree_list::json::tree(&metadata());
    group.bench_function("metadata", |bencher| {
        bencher.iter(|| black_box(black_box(&tree).to_string()));
    });

    for enumerator in [Enumerator::Arabic, Enumerator::Roman, Enumerator::Alphabet] {
        let list = example_list().enumerator(enumerator.clone());
        group.bench_function(format!("list-{enumerator:?}"), |bencher| {
            bencher.iter(|| black_box(black_box(&list).to_string()));
        });
    }

    let list = example_list().offset(500).height(20);
    group.bench_function("list-window", |bencher| {
        bencher.iter(|| black_box(black_box(&list).to_string()));
    });

    group.finish();
}

fn renders(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("render");
    group.throughput(Throughput::Elements(1)); // Frames per second

    let buffer_size = Rect::new(0, 0, 100, 100);

    let tree = Tree::new();
    group.bench_function("empty", |bencher| {
        bencher.iter_batched(
            || Buffer::empty(buffer_size),
            |mut buffer| black_box(&tree).render(buffer_size, black_box(&mut buffer)),
            BatchSize::SmallInput,
        );
    });

    let tree = example_tree();
    group.bench_function("example-tree", |bencher| {
        bencher.iter_batched(
            || Buffer::empty(buffer_size),
            |mut buffer| black_box(&tree).render(buffer_size, black_box(&mut buffer)),
            BatchSize::SmallInput,
        );
    });

    let list = example_list().enumerator(Enumerator::Roman);
    group.bench_function("list", |bencher| {
        bencher.iter_batched(
            || Buffer::empty(buffer_size),
            |mut buffer| black_box(&list).render(buffer_size, black_box(&mut buffer)),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

/// Create flamegraphs with `cargo bench --bench bench -- --profile-time=5`
#[cfg(unix)]
fn profiled() -> Criterion {
    use pprof::criterion::{Output, PProfProfiler};
    Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
}
#[cfg(not(unix))]
fn profiled() -> Criterion {
    Criterion::default()
}

criterion_group! {
    name = benches;
    config = profiled();
    targets = init, to_string, renders
}
criterion_main!(benches);
