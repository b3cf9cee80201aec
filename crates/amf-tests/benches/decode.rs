use amf_decoder::{AmfParser, PacketDecoder};
use amf_tests::{Fixture, echo_packet, nested_refs};
use amf_wire::marker;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

fn bench_decode_small(c: &mut Criterion) {
    let payload = nested_refs();

    c.bench_function("decode_nested_refs", |b| {
        b.iter(|| AmfParser::parse_slice(&payload).unwrap());
    });
}

fn bench_decode_strict_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_strict_array");

    for count in [16u32, 256, 4096] {
        let mut fixture = Fixture::new();
        fixture.strict_array_start(count, marker::NUMBER);
        for i in 0..count {
            fixture.f64(f64::from(i));
        }
        let payload = fixture.build();

        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &payload, |b, payload| {
            b.iter(|| AmfParser::parse_slice(payload).unwrap());
        });
    }
    group.finish();
}

fn bench_decode_wide_object(c: &mut Criterion) {
    let mut fixture = Fixture::new();
    fixture.object_start();
    for i in 0..500 {
        fixture.key(&format!("field_{i}")).string("value");
    }
    fixture.object_end();
    let payload = fixture.build();

    c.bench_function("decode_wide_object", |b| {
        b.iter(|| AmfParser::parse_slice(&payload).unwrap());
    });
}

fn bench_decode_packet(c: &mut Criterion) {
    let payload = echo_packet();

    c.bench_function("decode_packet", |b| {
        b.iter(|| PacketDecoder::decode(payload.as_slice()).unwrap());
    });
}

criterion_group!(
    benches,
    bench_decode_small,
    bench_decode_strict_array,
    bench_decode_wide_object,
    bench_decode_packet
);
criterion_main!(benches);
