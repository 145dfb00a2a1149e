//! Benchmarks for string-table layout.
//!
//! Measures the two computation paths of the layout engine:
//! - Section-name table packing over a realistic section list
//! - Symbol-name table packing over symbol sets with heavy suffix overlap

extern crate elfscope;

use criterion::{criterion_group, criterion_main, Criterion};
use elfscope::prelude::*;
use std::hint::black_box;

fn object_with_many_symbols(count: usize) -> Binary {
    let mut binary = Binary::new(Header::new(Class::Elf64, Encoding::Little));
    for name in [
        "", ".text", ".data", ".bss", ".rodata", ".comment", ".note.GNU-stack",
    ] {
        binary.add_section(Section::new(
            name,
            if name.is_empty() {
                SectionType::Null
            } else {
                SectionType::ProgBits
            },
        ));
    }
    // mangled-looking names with shared suffixes, the shape linkers actually see
    for i in 0..count {
        binary.add_symtab_symbol(Symbol::new(format!("_ZN7elfwork{}4pass17h{}E", i % 97, i)));
        binary.add_symtab_symbol(Symbol::new(format!("pass17h{}E", i)));
    }
    binary
}

fn bench_strtab_layout(c: &mut Criterion) {
    let binary = object_with_many_symbols(1_000);

    c.bench_function("strtab_2000_symbols", |b| {
        b.iter(|| {
            let mut layout = Layout::new(black_box(&binary));
            black_box(layout.strtab_size())
        });
    });
}

fn bench_shstrtab_layout(c: &mut Criterion) {
    let binary = object_with_many_symbols(16);

    c.bench_function("shstrtab_section_names", |b| {
        b.iter(|| {
            let mut layout = Layout::new(black_box(&binary));
            black_box(layout.shstrtab_size())
        });
    });
}

criterion_group!(benches, bench_strtab_layout, bench_shstrtab_layout);
criterion_main!(benches);
