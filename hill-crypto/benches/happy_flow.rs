use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hill_crypto::preset::alphabets::LATIN_UPPERCASE;
use hill_crypto::{Cipher, HillCipher};

fn bench_happy_flow(c: &mut Criterion) {
    // 1) one‐time setup
    let hill = HillCipher::try_with(LATIN_UPPERCASE.clone(), 9, Some("GYBNQKURP"))
        .expect("build hill cipher");

    // the same message every iteration
    let original = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG";

    c.bench_function("happy_flow", |b| {
        b.iter(|| {
            let ciphered = hill.cipher(black_box(original)).expect("cipher");
            let deciphered = hill.decipher(&ciphered).expect("decipher");
            black_box(deciphered);
        })
    });

    c.bench_function("key_generation_4x4", |b| {
        b.iter(|| {
            let hill = HillCipher::try_with(LATIN_UPPERCASE.clone(), 16, None).expect("generate key");
            black_box(hill.key().to_string());
        })
    });
}

criterion_group!(benches, bench_happy_flow);
criterion_main!(benches);
