use criterion::{Criterion, criterion_group, criterion_main};
use hmac::{Hmac, Mac};
use sha1::Sha1;
use std::hint::black_box;

pub fn bench_hmac_ref(c: &mut Criterion) {
    let mac = <Hmac<Sha1> as Mac>::new_from_slice(&[0x0b; 20]).unwrap();

    c.bench_function("hmac crate sha1", |b| {
        b.iter(|| {
            let mut m = mac.clone();
            m.update(black_box(&[0u8; 64]));
            let _ = m.finalize();
        })
    });
}

criterion_group!(benches, bench_hmac_ref);
criterion_main!(benches);
