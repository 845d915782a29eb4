use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use serde_logfmt::{
    decode, decode_with_options, encode, from_str, to_string, to_value, DecodeOptions,
};

#[derive(Serialize, Deserialize, Clone)]
struct Request {
    level: String,
    msg: String,
    method: String,
    path: String,
    status: u16,
    duration_ms: f64,
}

#[derive(Serialize, Deserialize, Clone)]
struct Span {
    trace_id: String,
    service: Service,
    events: Vec<Event>,
}

#[derive(Serialize, Deserialize, Clone)]
struct Service {
    name: String,
    version: String,
    region: String,
}

#[derive(Serialize, Deserialize, Clone)]
struct Event {
    name: String,
    offset_us: u64,
}

const ACCESS_LINE: &str = r#"level=info msg="request done" method=GET path=/api/v1/users status=200 duration_ms=12.5"#;

fn request() -> Request {
    Request {
        level: "info".to_string(),
        msg: "request done".to_string(),
        method: "GET".to_string(),
        path: "/api/v1/users".to_string(),
        status: 200,
        duration_ms: 12.5,
    }
}

fn span(events: u64) -> Span {
    Span {
        trace_id: "4bf92f3577b34da6a3ce929d0e0e4736".to_string(),
        service: Service {
            name: "checkout".to_string(),
            version: "1.4.2".to_string(),
            region: "eu-west-1".to_string(),
        },
        events: (0..events)
            .map(|i| Event {
                name: format!("step {}", i),
                offset_us: i * 150,
            })
            .collect(),
    }
}

fn benchmark_decode_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_flat");

    group.bench_function("strings", |b| b.iter(|| decode(black_box(ACCESS_LINE))));

    let typed = DecodeOptions::typed();
    group.bench_function("typed", |b| {
        b.iter(|| decode_with_options(black_box(ACCESS_LINE), &typed))
    });

    group.finish();
}

fn benchmark_encode_flat(c: &mut Criterion) {
    let value = decode(ACCESS_LINE);

    c.bench_function("encode_flat", |b| b.iter(|| encode(black_box(&value))));
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let req = request();

    c.bench_function("serialize_simple_struct", |b| {
        b.iter(|| to_string(black_box(&req)))
    });
}

fn benchmark_deserialize_simple(c: &mut Criterion) {
    c.bench_function("deserialize_simple_struct", |b| {
        b.iter(|| from_str::<Request>(black_box(ACCESS_LINE)))
    });
}

fn benchmark_nested_lists(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested_lists");

    for size in [10, 50, 100, 500].iter() {
        let data = span(*size);
        let line = to_string(&data).unwrap();

        group.bench_with_input(BenchmarkId::new("serialize", size), &data, |b, data| {
            b.iter(|| to_string(black_box(data)))
        });

        group.bench_with_input(BenchmarkId::new("decode", size), &line, |b, line| {
            b.iter(|| decode(black_box(line)))
        });

        group.bench_with_input(BenchmarkId::new("deserialize", size), &line, |b, line| {
            b.iter(|| from_str::<Span>(black_box(line)))
        });
    }
    group.finish();
}

fn benchmark_quoted_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("quoted_strings");

    let plain = to_value(&request()).unwrap();
    let spaced = decode(r#"msg="This is a medium length message with some content""#);
    let escaped = decode(r#"msg="path \"C:\\Program Files\" not found\nretrying" attempt=3"#);

    group.bench_function("plain", |b| b.iter(|| encode(black_box(&plain))));
    group.bench_function("spaced", |b| b.iter(|| encode(black_box(&spaced))));
    group.bench_function("escaped", |b| b.iter(|| encode(black_box(&escaped))));

    group.finish();
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let req = request();

    let mut group = c.benchmark_group("comparison");

    group.bench_function("logfmt_serialize", |b| {
        b.iter(|| serde_logfmt::to_string(black_box(&req)))
    });

    group.bench_function("json_serialize", |b| {
        b.iter(|| serde_json::to_string(black_box(&req)))
    });

    let logfmt_str = serde_logfmt::to_string(&req).unwrap();
    let json_str = serde_json::to_string(&req).unwrap();

    group.bench_function("logfmt_deserialize", |b| {
        b.iter(|| serde_logfmt::from_str::<Request>(black_box(&logfmt_str)))
    });

    group.bench_function("json_deserialize", |b| {
        b.iter(|| serde_json::from_str::<Request>(black_box(&json_str)))
    });

    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let data = span(5);

    c.bench_function("roundtrip_nested", |b| {
        b.iter(|| {
            let serialized = to_string(black_box(&data)).unwrap();
            let _deserialized: Span = from_str(black_box(&serialized)).unwrap();
        })
    });
}

criterion_group!(
    benches,
    benchmark_decode_flat,
    benchmark_encode_flat,
    benchmark_serialize_simple,
    benchmark_deserialize_simple,
    benchmark_nested_lists,
    benchmark_quoted_strings,
    benchmark_comparison_with_json,
    benchmark_roundtrip
);
criterion_main!(benches);
