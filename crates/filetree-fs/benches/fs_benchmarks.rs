use criterion::{Criterion, black_box, criterion_group, criterion_main};
use filetree_fs::{DeletePolicy, FileTree, MemoryFs, to_legal_name};
use std::fs;
use tempfile::tempdir;

fn list_all_files_benchmark(c: &mut Criterion) {
    c.bench_function("walk::list_all_files (local, 10x10)", |b| {
        let dir = tempdir().unwrap();
        for i in 0..10 {
            let sub = dir.path().join(format!("d{i}"));
            fs::create_dir_all(&sub).unwrap();
            for j in 0..10 {
                fs::write(sub.join(format!("f{j}.txt")), "x").unwrap();
            }
        }
        let tree = FileTree::local();

        b.iter(|| {
            let files = tree.list_all_files(black_box(dir.path()));
            assert_eq!(files.len(), 100);
        })
    });

    c.bench_function("filetype::files_by_type (memory)", |b| {
        let mut mem = MemoryFs::new();
        for i in 0..200 {
            let ext = if i % 2 == 0 { "rs" } else { "toml" };
            mem = mem.with_file(format!("/src/m{}/f{i}.{ext}", i % 8), 1);
        }
        let tree = FileTree::new(mem);

        b.iter(|| tree.files_by_type(black_box("RS"), "/src"))
    });
}

fn delete_plan_benchmark(c: &mut Criterion) {
    c.bench_function("delete::plan (memory, dir)", |b| {
        let mut mem = MemoryFs::new();
        for i in 0..200 {
            mem = mem.with_file(format!("/t/a{}/b{}/f{i}", i % 5, i % 3), 0);
        }
        let tree = FileTree::new(mem);

        b.iter(|| tree.plan(black_box("/t"), DeletePolicy::Dir))
    });
}

fn sanitize_benchmark(c: &mut Criterion) {
    c.bench_function("sanitize::to_legal_name", |b| {
        let name = "quarterly: report <draft> *final*? {v2}|copy.docx";
        b.iter(|| to_legal_name(black_box(name)))
    });
}

criterion_group!(
    benches,
    list_all_files_benchmark,
    delete_plan_benchmark,
    sanitize_benchmark
);
criterion_main!(benches);
