use sshmac::Mac;
use sshmac::hash::Sha1;
use sshmac::hmac::Hmac;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_hmac_sha1(c: &mut Criterion) {
    let mut hmac = Hmac::with_full_output(Sha1::new(), &[0x0b; 20]);
    let mut out = [0u8; 20];

    c.bench_function("hmac-sha1 64 bytes", |b| {
        b.iter(|| {
            hmac.update(black_box(&[0u8; 64]));
            hmac.digest_into(&mut out).unwrap();
        })
    });
}

pub fn bench_packet_mac(c: &mut Criterion) {
    let mut mac = Mac::new("hmac-sha1-96", &[0x0b; 20]).unwrap();
    let packet = [0u8; 1500];
    let mut out = [0u8; 12];
    let mut seq = 0u32;

    c.bench_function("hmac-sha1-96 1500 byte packet", |b| {
        b.iter(|| {
            mac.init_mac(seq);
            mac.update(black_box(&packet));
            mac.get_mac(&mut out).unwrap();
            seq = seq.wrapping_add(1);
        })
    });
}

criterion_group!(benches, bench_hmac_sha1, bench_packet_mac);
criterion_main!(benches);
