use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nanoc_lex::Lexer;

fn generate_source(statements: usize) -> String {
    let mut source = String::new();
    for i in 0..statements {
        source.push_str(&format!(
            "x{i} = (a{i} + b{i} * 2) << 1;\nif (x{i} < 100) {{ y{i} = x{i} - 1; }}\n"
        ));
    }
    source
}

fn bench_lexer(c: &mut Criterion) {
    let small = generate_source(10);
    let large = generate_source(1_000);

    c.bench_function("lex_small_program", |b| {
        b.iter(|| Lexer::new(black_box(&small)).tokenize_all())
    });

    c.bench_function("lex_large_program", |b| {
        b.iter(|| Lexer::new(black_box(&large)).tokenize_all())
    });
}

criterion_group!(benches, bench_lexer);
criterion_main!(benches);
