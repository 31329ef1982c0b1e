//! Benchmarks for the formatting engine.
//!
//! Run with: cargo bench
//!
//! These benchmarks measure the single-pass engine over synthetic
//! manuscripts, without touching the filesystem.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use abntfmt::{format_document, Document, Paragraph};

/// Build a synthetic manuscript with the given number of body paragraphs.
fn create_test_manuscript(paragraph_count: usize) -> Document {
    let mut doc = Document::new();
    doc.add_paragraph(Paragraph::with_text("Título do trabalho"));
    doc.add_paragraph(Paragraph::with_text("ABSTRACT"));
    doc.add_paragraph(Paragraph::with_text("This work presents a benchmark."));
    doc.add_paragraph(Paragraph::with_text("1 INTRODUÇÃO"));

    for i in 0..paragraph_count {
        match i % 10 {
            0 => doc.add_paragraph(Paragraph::with_text(format!("{} SEÇÃO", i / 10 + 2))),
            1 => doc.add_paragraph(Paragraph::with_text(format!("{}.1 Subseção", i / 10 + 2))),
            2 => doc.add_paragraph(Paragraph::with_text(
                "[CITAÇÃO] uma citação longa com mais de três linhas, recuada e em corpo menor.",
            )),
            _ => doc.add_paragraph(Paragraph::with_text(
                "Texto corrido do trabalho acadêmico, justificado com recuo de primeira linha.",
            )),
        }
    }

    doc.add_paragraph(Paragraph::with_text("REFERÊNCIAS"));
    for i in 0..20 {
        doc.add_paragraph(Paragraph::with_text(format!(
            "AUTOR, A. Obra número {i}. Editora, 2024."
        )));
    }
    doc
}

fn bench_format_document(c: &mut Criterion) {
    for size in [50, 500] {
        let doc = create_test_manuscript(size);
        c.bench_function(&format!("format_document_{size}_paragraphs"), |b| {
            b.iter(|| {
                let doc = black_box(doc.clone());
                format_document(doc).unwrap()
            })
        });
    }
}

fn bench_serialize(c: &mut Criterion) {
    let doc = format_document(create_test_manuscript(500)).unwrap();
    c.bench_function("serialize_500_paragraphs", |b| {
        b.iter(|| black_box(&doc).to_bytes().unwrap())
    });
}

fn bench_full_cycle(c: &mut Criterion) {
    let bytes = create_test_manuscript(200).to_bytes().unwrap();
    c.bench_function("format_bytes_200_paragraphs", |b| {
        b.iter(|| abntfmt::format_bytes(black_box(&bytes)).unwrap())
    });
}

criterion_group!(benches, bench_format_document, bench_serialize, bench_full_cycle);
criterion_main!(benches);
