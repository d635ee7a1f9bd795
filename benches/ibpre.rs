use criterion::{criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use ibpre::encoding::MessageEncoding;
use ibpre::pre::{CollusionResistant, ProxyReEncryption};

const ALICE: &str = "alice@example.com";
const BOB: &str = "bob@example.com";
const MESSAGE: &[u8] = b"thirty-two bytes of benchmarking";

fn rng() -> ChaChaRng {
    ChaChaRng::from_seed([0; 32])
}

fn scheme() -> CollusionResistant {
    CollusionResistant::new(MessageEncoding::VariableLength)
}

fn setup(c: &mut Criterion) {
    let mut rng = rng();
    let scheme = scheme();
    c.bench_function("CollusionResistant::setup", |b| {
        b.iter(|| scheme.setup(&mut rng).unwrap());
    });
}

fn generate_key(c: &mut Criterion) {
    let mut rng = rng();
    let scheme = scheme();
    let (master_secret, _) = scheme.setup(&mut rng).unwrap();
    c.bench_function("CollusionResistant::generate_key", |b| {
        b.iter(|| scheme.generate_key(&master_secret, ALICE).unwrap());
    });
}

fn generate_reencryption_key(c: &mut Criterion) {
    let mut rng = rng();
    let scheme = scheme();
    let (master_secret, params) = scheme.setup(&mut rng).unwrap();
    let key = scheme.generate_key(&master_secret, ALICE).unwrap();
    c.bench_function("CollusionResistant::generate_reencryption_key", |b| {
        b.iter(|| {
            scheme
                .generate_reencryption_key(&mut rng, &params, &key, ALICE, BOB)
                .unwrap()
        });
    });
}

fn encrypt_decrypt(c: &mut Criterion) {
    let mut rng = rng();
    let scheme = scheme();
    let (master_secret, params) = scheme.setup(&mut rng).unwrap();
    let key = scheme.generate_key(&master_secret, ALICE).unwrap();
    let ciphertext = scheme.encrypt(&mut rng, &params, ALICE, MESSAGE).unwrap();
    c.bench_function("CollusionResistant::encrypt", |b| {
        b.iter(|| scheme.encrypt(&mut rng, &params, ALICE, MESSAGE).unwrap());
    });
    c.bench_function("CollusionResistant::decrypt", |b| {
        b.iter(|| scheme.decrypt(&params, &key, ALICE, &ciphertext).unwrap());
    });
}

fn reencrypt_redecrypt(c: &mut Criterion) {
    let mut rng = rng();
    let scheme = scheme();
    let (master_secret, params) = scheme.setup(&mut rng).unwrap();
    let alice = scheme.generate_key(&master_secret, ALICE).unwrap();
    let bob = scheme.generate_key(&master_secret, BOB).unwrap();
    let rekey = scheme
        .generate_reencryption_key(&mut rng, &params, &alice, ALICE, BOB)
        .unwrap();
    let ciphertext = scheme.encrypt(&mut rng, &params, ALICE, MESSAGE).unwrap();
    let transformed = scheme.reencrypt(&params, &rekey, ALICE, &ciphertext).unwrap();
    c.bench_function("CollusionResistant::reencrypt", |b| {
        b.iter(|| scheme.reencrypt(&params, &rekey, ALICE, &ciphertext).unwrap());
    });
    c.bench_function("CollusionResistant::redecrypt", |b| {
        b.iter(|| {
            scheme
                .redecrypt(&params, &bob, ALICE, BOB, &transformed)
                .unwrap()
        });
    });
}

criterion_group!(
    benches,
    setup,
    generate_key,
    generate_reencryption_key,
    encrypt_decrypt,
    reencrypt_redecrypt
);
criterion_main!(benches);
