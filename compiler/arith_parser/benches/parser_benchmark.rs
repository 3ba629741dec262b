use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use arith_lexer::{tokenize, Token};
use arith_parser::{parse_tokens, OperatorPrecedence};

/// A flat chain `1 + 2 * 3 - 4 / 5 ^ 6 + ...` with `terms` values.
fn flat_expression(terms: usize) -> String {
    let operators = ["+", "*", "-", "/", "^"];
    let mut source = String::from("1");
    for i in 1..terms {
        source.push_str(&format!(" {} {}", operators[i % operators.len()], i + 1));
    }
    source
}

/// `( ( ... ( x + 1 ) ... ) * 2 )` nested `depth` groups deep.
fn nested_expression(depth: usize) -> String {
    let mut source = String::from("x");
    for level in 0..depth {
        source = if level % 2 == 0 {
            format!("( {source} + {level} )")
        } else {
            format!("2 ( {source} )")
        };
    }
    source
}

fn bench_parse(c: &mut Criterion, group_name: &str, sources: &[(usize, String)]) {
    let mut group = c.benchmark_group(group_name);
    for (size, source) in sources {
        let tokens: Vec<Token> = tokenize(source);
        group.throughput(Throughput::Elements(tokens.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &tokens, |b, tokens| {
            b.iter(|| {
                let node = parse_tokens(tokens.clone(), &OperatorPrecedence::BIDMAS);
                std::hint::black_box(node)
            })
        });
    }
    group.finish();
}

fn bench_flat(c: &mut Criterion) {
    let sources: Vec<(usize, String)> = [8, 64, 256]
        .into_iter()
        .map(|terms| (terms, flat_expression(terms)))
        .collect();
    bench_parse(c, "parser_flat", &sources);
}

fn bench_nested(c: &mut Criterion) {
    let sources: Vec<(usize, String)> = [4, 32, 128]
        .into_iter()
        .map(|depth| (depth, nested_expression(depth)))
        .collect();
    bench_parse(c, "parser_nested", &sources);
}

fn bench_tokenize(c: &mut Criterion) {
    let source = flat_expression(256);
    c.benchmark_group("lexer")
        .throughput(Throughput::Bytes(source.len() as u64))
        .bench_function("tokenize", |b| b.iter(|| std::hint::black_box(tokenize(&source))));
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(20)
        .measurement_time(std::time::Duration::from_secs(2));
    targets = bench_flat, bench_nested, bench_tokenize
}

criterion_main!(benches);
