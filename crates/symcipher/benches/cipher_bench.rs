use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aes_core::{encrypt_block, expand_key, Aes128Key};
use symcipher::{CipherKind, KeyGenerator, SuiteConfig};

fn bench_core(c: &mut Criterion) {
    let key = Aes128Key::from([0u8; 16]);
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);

    let mut group = c.benchmark_group("aes_core");
    group.bench_function("expand_key", |b| {
        b.iter(|| expand_key(&key));
    });
    let round_keys = expand_key(&key);
    group.bench_function("encrypt_block", |b| {
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        b.iter(|| encrypt_block(&block, &round_keys));
    });
    group.finish();
}

fn bench_suite(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    let mut message = vec![0u8; 4096];
    rng.fill_bytes(&mut message);

    let mut group = c.benchmark_group("suite_encrypt");
    group.throughput(Throughput::Bytes(message.len() as u64));
    for kind in CipherKind::ALL {
        let mut gen = KeyGenerator::with_config(
            ChaCha20Rng::from_seed([1u8; 32]),
            SuiteConfig::new(kind),
        );
        let generated = gen
            .generate_cipher()
            .expect("generated key has the right length");
        group.bench_with_input(BenchmarkId::from_parameter(kind), &message, |b, msg| {
            b.iter(|| generated.cipher.encrypt(msg));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_core, bench_suite);
criterion_main!(benches);
