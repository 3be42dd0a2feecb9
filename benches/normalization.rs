use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gitpal::git::parser::extract_branch_names;
use gitpal::llm::translator::normalize_reply;

fn bench_normalize_reply(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_reply");

    group.bench_function("plain", |b| {
        b.iter(|| normalize_reply(black_box("git status")))
    });

    group.bench_function("fenced", |b| {
        b.iter(|| normalize_reply(black_box("```bash\ngit reset --soft HEAD~1\n```")))
    });

    group.bench_function("semicolon_chain", |b| {
        b.iter(|| {
            normalize_reply(black_box(
                "git add .;git commit -m 'x';git push origin main",
            ))
        })
    });

    group.finish();
}

fn bench_extract_branch_names(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_branch_names");

    group.bench_function("decorated", |b| {
        b.iter(|| {
            extract_branch_names(
                black_box(" (HEAD -> main, origin/main, origin/feature/login, tag: v1.0)"),
                "main",
            )
        })
    });

    group.bench_function("undecorated", |b| {
        b.iter(|| extract_branch_names(black_box(""), "main"))
    });

    group.finish();
}

criterion_group!(benches, bench_normalize_reply, bench_extract_branch_names);
criterion_main!(benches);
