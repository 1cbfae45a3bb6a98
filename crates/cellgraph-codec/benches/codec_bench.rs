//! Benchmarks for element encode/decode.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use cellgraph_codec::options::OperationOptions;
use cellgraph_codec::ElementCodec;
use cellgraph_core::schema::{ElementDef, Schema, TypeDef};
use cellgraph_core::serialise::{CompactIntSerialiser, RawStringSerialiser};
use cellgraph_core::{Edge, Element, Entity};

fn bench_schema() -> Schema {
    Schema::new(RawStringSerialiser)
        .with_element(
            "person",
            ElementDef::new()
                .with_property("name", TypeDef::new(RawStringSerialiser))
                .with_property("age", TypeDef::new(CompactIntSerialiser))
                .with_property("score", TypeDef::new(CompactIntSerialiser)),
        )
        .with_element(
            "follows",
            ElementDef::new()
                .with_property("since", TypeDef::new(CompactIntSerialiser))
                .with_property("bucket", TypeDef::new(CompactIntSerialiser))
                .with_group_by("bucket"),
        )
}

fn sample_entity() -> Element {
    Entity::new("person", "alice")
        .with_property("name", "Alice")
        .with_property("age", 30i64)
        .with_property("score", 12_345i64)
        .into()
}

fn sample_edge() -> Element {
    Edge::new("follows", "alice", "bob", true)
        .with_property("since", 1_700_000_000_000i64)
        .with_property("bucket", 7i64)
        .into()
}

fn bench_encode(c: &mut Criterion) {
    let schema = bench_schema();
    let codec = ElementCodec::new(&schema);
    let entity = sample_entity();
    let edge = sample_edge();

    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Elements(1));
    group.bench_function("entity", |b| b.iter(|| codec.encode(black_box(&entity)).unwrap()));
    group.bench_function("edge", |b| b.iter(|| codec.encode(black_box(&edge)).unwrap()));
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let schema = bench_schema();
    let codec = ElementCodec::new(&schema);
    let options = OperationOptions::new();
    let entity_cell = codec.encode(&sample_entity()).unwrap().cells().remove(0);
    let edge_cells = codec.encode(&sample_edge()).unwrap().cells();

    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Elements(1));
    group.bench_function("entity", |b| {
        b.iter(|| codec.decode_cell(black_box(&entity_cell), &options).unwrap());
    });
    group.bench_function("edge_stored_order", |b| {
        b.iter(|| codec.decode_cell(black_box(&edge_cells[0]), &options).unwrap());
    });
    group.bench_function("edge_reversed_row", |b| {
        b.iter(|| codec.decode_cell(black_box(&edge_cells[1]), &options).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
