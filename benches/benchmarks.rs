//! Performance benchmarks for trimnames

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use std::ffi::OsStr;
use std::path::Path;
use trimnames::test_utils::TestTree;
use trimnames::{RenameEvent, Renamer, RenamerConfig, SegmentedPath, trim_name};

const NAMES: &[&str] = &[
    "main.rs",
    "  leading.txt",
    "trailing.txt   ",
    "\u{00A0}nbsp both\u{00A0}",
    "interior  spaces  only",
    "\t\ttabbed\n",
];

/// Tree with `dirs` directories of `files_per_dir` files, half of them untrimmed.
fn create_tree(dirs: usize, files_per_dir: usize) -> TestTree {
    let tree = TestTree::new();
    for d in 0..dirs {
        let dir = if d % 2 == 0 {
            format!(" dir_{} ", d)
        } else {
            format!("dir_{}", d)
        };
        for f in 0..files_per_dir {
            let file = if f % 2 == 0 {
                format!("file_{}.txt ", f)
            } else {
                format!("file_{}.txt", f)
            };
            tree.add_file(&format!("{}/{}", dir, file), "x");
        }
    }
    tree.add_file("node_modules/pkg/ index.js ", "x");
    tree
}

fn bench_trim_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("trim_name");

    group.bench_function("mixed_names", |b| {
        b.iter(|| {
            for name in NAMES {
                black_box(trim_name(OsStr::new(black_box(name))));
            }
        })
    });

    group.bench_function("segmented_path", |b| {
        let path = Path::new("./ projects / client work /2024/ reports / q3 ");
        b.iter(|| SegmentedPath::parse(black_box(path)).trimmed().to_path_buf())
    });

    group.finish();
}

fn bench_dry_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("dry_run");

    for (dirs, files) in [(10, 10), (50, 20)] {
        let tree = create_tree(dirs, files);
        let renamer = Renamer::new(RenamerConfig::default());

        group.bench_function(format!("{}x{}", dirs, files), |b| {
            b.iter(|| {
                let mut events: Vec<RenameEvent> = Vec::new();
                renamer
                    .process(black_box(tree.path()), &mut events)
                    .unwrap()
            })
        });
    }

    group.finish();
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");
    group.sample_size(20);

    group.bench_function("20x10", |b| {
        b.iter_batched(
            || create_tree(20, 10),
            |tree| {
                let mut events: Vec<RenameEvent> = Vec::new();
                Renamer::new(RenamerConfig::apply())
                    .process(tree.path(), &mut events)
                    .unwrap();
                tree
            },
            BatchSize::PerIteration,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_trim_name, bench_dry_run, bench_apply);
criterion_main!(benches);
