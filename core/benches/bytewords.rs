use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use bytewords_core::bytewords::{decode, encode, Style};
use bytewords_core::pipeline::{decode_root, encode_root, DecodeConfig, EncodeConfig};
use bytewords_core::records::{Account, Root, WalletInfo};

fn bench_codec(c: &mut Criterion) {
    let body: Vec<u8> = (0..4096u32).map(|i| (i * 31 % 251) as u8).collect();
    let mut group = c.benchmark_group("bytewords");
    group.throughput(Throughput::Bytes(body.len() as u64));

    for style in [Style::Minimal, Style::Standard] {
        let text = encode(&body, style);
        group.bench_with_input(BenchmarkId::new("encode", format!("{:?}", style)), &body, |b, body| {
            b.iter(|| encode(black_box(body), style))
        });
        group.bench_with_input(BenchmarkId::new("decode", format!("{:?}", style)), &text, |b, text| {
            b.iter(|| decode(black_box(text), style))
        });
    }
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let root = Root {
        version: 1,
        accounts: (0..32)
            .map(|i| Account {
                id: i,
                index: i,
                kind: "p2wpkh".into(),
                block: 800_000 + i,
                wallet: WalletInfo {
                    derivation_path: format!("m/84'/0'/{}'", i),
                    chain_code: "q83vEjw=".into(),
                    name: format!("wallet {}", i),
                    flag_a: true,
                    flag_b: false,
                    opaque: vec![0xAB; 32],
                    xpub: "xpub6CUGRUonZSQ4TWtTMmzXdrXDtypWKiKrhko4egpiMZbpiaQL2jkwSB1icqYh2cfDfVxdx4df189oLKnC5fSwqPfgyP3hooxujYzAu3fDVmz".into(),
                },
            })
            .collect(),
    };
    let text = encode_root(&root, &EncodeConfig::default()).expect("encode");
    let config = DecodeConfig::default();

    c.bench_function("decode_root/32_accounts", |b| {
        b.iter(|| decode_root(black_box(&text), &config))
    });
}

criterion_group!(benches, bench_codec, bench_pipeline);
criterion_main!(benches);
