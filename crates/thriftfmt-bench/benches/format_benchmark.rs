//! Formatter Performance Benchmarks
//!
//! Documents are generated through the tree builder: `structs` structs with
//! `fields` commented, partly initialized fields each.
//!
//! Run with: `cargo bench --package thriftfmt-bench format_benchmark`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use thriftfmt_core::{ParserResult, SyntaxKind, TreeBuilder};
use thriftfmt_formatter::{FormatOptions, ThriftFormatter, format_batch};

fn field(b: &mut TreeBuilder, id: usize) {
    b.node(SyntaxKind::Field, |b| {
        b.node(SyntaxKind::FieldId, |b| {
            b.node(SyntaxKind::Integer, |b| b.token(&id.to_string()));
            b.token(":");
        });
        b.node(SyntaxKind::FieldType, |b| {
            b.node(SyntaxKind::BaseType, |b| {
                b.node(SyntaxKind::RealBaseType, |b| b.token("i64"));
            });
        });
        b.token(&format!("field_{id}"));
        if id % 3 == 0 {
            b.token("=");
            b.node(SyntaxKind::ConstValue, |b| {
                b.node(SyntaxKind::Integer, |b| b.token(&(id * 7).to_string()));
            });
        }
    });
    if id % 2 == 0 {
        b.comment(&format!("// note {id}"));
    }
    b.newline();
}

fn document(structs: usize, fields: usize) -> ParserResult {
    let mut builder = TreeBuilder::new();
    builder.node(SyntaxKind::Document, |b| {
        b.node(SyntaxKind::Header, |b| {
            b.node(SyntaxKind::Include, |b| {
                b.token("include");
                b.token("\"shared.thrift\"");
            });
        });
        b.newlines(2);
        for s in 0..structs {
            b.comment(&format!("/* struct {s} */"));
            b.newline();
            b.node(SyntaxKind::Definition, |b| {
                b.node(SyntaxKind::Struct, |b| {
                    b.token("struct");
                    b.token(&format!("Record{s}"));
                    b.token("{");
                    b.newline();
                    for id in 1..=fields {
                        field(b, id);
                    }
                    b.token("}");
                });
            });
            b.newlines(2);
        }
        b.eof();
    });
    builder.finish().unwrap()
}

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    for structs in [1, 10, 100] {
        let data = document(structs, 20);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{structs}_structs")),
            &data,
            |b, data| {
                b.iter(|| {
                    let mut formatter = ThriftFormatter::new(data.clone());
                    black_box(formatter.format().unwrap())
                });
            },
        );
    }

    group.finish();
}

fn bench_alignment_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("alignment");
    let data = document(10, 50);

    let modes = [
        ("assign", FormatOptions::default()),
        ("field", FormatOptions::new(4, true, true, true, false, true)),
        ("none", FormatOptions::new(4, true, true, true, false, false)),
    ];
    for (name, options) in modes {
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| {
                let mut formatter = ThriftFormatter::with_options(data.clone(), options.clone());
                black_box(formatter.format().unwrap())
            });
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let batch: Vec<ParserResult> = (0..32).map(|_| document(10, 20)).collect();
    let options = FormatOptions::default();

    c.bench_function("format_batch_32_documents", |b| {
        b.iter(|| black_box(format_batch(batch.clone(), &options)));
    });
}

criterion_group!(benches, bench_format, bench_alignment_modes, bench_batch);
criterion_main!(benches);
