use criterion::{criterion_group, criterion_main, Criterion};
use fips205::traits::{KeyGen, Signer, Verifier};
use fips205::{slh_dsa_shake_128f, slh_dsa_shake_128s, slh_dsa_shake_256f};

pub fn criterion_benchmark(c: &mut Criterion) {
    let message = [0u8, 1, 2, 3, 4, 5, 6, 7];

    // Fixed seeds keep the benchmark deterministic across runs
    let (pk128s, sk128s) =
        slh_dsa_shake_128s::KG::keygen_from_seed(&[1u8; 16], &[2u8; 16], &[3u8; 16]);
    let sig128s = sk128s.try_sign_deterministic(&message, &[]).unwrap();

    let (pk128f, sk128f) =
        slh_dsa_shake_128f::KG::keygen_from_seed(&[1u8; 16], &[2u8; 16], &[3u8; 16]);
    let sig128f = sk128f.try_sign_deterministic(&message, &[]).unwrap();

    let (pk256f, sk256f) =
        slh_dsa_shake_256f::KG::keygen_from_seed(&[1u8; 32], &[2u8; 32], &[3u8; 32]);
    let sig256f = sk256f.try_sign_deterministic(&message, &[]).unwrap();


    c.bench_function("slh_dsa_shake_128s keygen", |b| {
        b.iter(|| slh_dsa_shake_128s::KG::keygen_from_seed(&[1u8; 16], &[2u8; 16], &[3u8; 16]))
    });
    c.bench_function("slh_dsa_shake_128s sign", |b| {
        b.iter(|| sk128s.try_sign_deterministic(&message, &[]))
    });
    c.bench_function("slh_dsa_shake_128s verify", |b| {
        b.iter(|| pk128s.verify(&message, &sig128s, &[]))
    });

    c.bench_function("slh_dsa_shake_128f keygen", |b| {
        b.iter(|| slh_dsa_shake_128f::KG::keygen_from_seed(&[1u8; 16], &[2u8; 16], &[3u8; 16]))
    });
    c.bench_function("slh_dsa_shake_128f sign", |b| {
        b.iter(|| sk128f.try_sign_deterministic(&message, &[]))
    });
    c.bench_function("slh_dsa_shake_128f verify", |b| {
        b.iter(|| pk128f.verify(&message, &sig128f, &[]))
    });

    c.bench_function("slh_dsa_shake_256f keygen", |b| {
        b.iter(|| slh_dsa_shake_256f::KG::keygen_from_seed(&[1u8; 32], &[2u8; 32], &[3u8; 32]))
    });
    c.bench_function("slh_dsa_shake_256f sign", |b| {
        b.iter(|| sk256f.try_sign_deterministic(&message, &[]))
    });
    c.bench_function("slh_dsa_shake_256f verify", |b| {
        b.iter(|| pk256f.verify(&message, &sig256f, &[]))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

// cargo bench
// The 's' parameter sets pay for their short signatures in signing time; the
// keygen of the 's' sets is also dominated by a single 2^9-leaf treehash.
