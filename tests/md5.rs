use sshmac::hash::{Digest, Md5, md5};

fn expect_md5_eq(input: &[u8], expected: &str) {
    let got = md5(input);

    assert_eq!(
        hex::encode(got),
        expected,
        "Digest mismatch for input {:?}",
        String::from_utf8_lossy(input),
    );
}

// -------------------------------------------------------
// 1. RFC 1321 TEST SUITE
// -------------------------------------------------------

#[test]
fn md5_rfc1321_suite() {
    expect_md5_eq(b"", "d41d8cd98f00b204e9800998ecf8427e");
    expect_md5_eq(b"a", "0cc175b9c0f1b6a831c399e269772661");
    expect_md5_eq(b"abc", "900150983cd24fb0d6963f7d28e17f72");
    expect_md5_eq(b"message digest", "f96b697d7cb7938d525a2f31aaf161d0");
    expect_md5_eq(
        b"abcdefghijklmnopqrstuvwxyz",
        "c3fcd3d76192e4007dfb496cca67e13b",
    );
    expect_md5_eq(
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
        "d174ab98d277d9f5a5611c2c9f419d9f",
    );
    expect_md5_eq(
        b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
        "57edf4a22be3c955ac49da2e2107b67a",
    );
}

#[test]
fn md5_known_phrase() {
    expect_md5_eq(
        b"The quick brown fox jumps over the lazy dog",
        "9e107d9d372bb6826bd81d3542a419d6",
    );
}

// -------------------------------------------------------
// 2. INCREMENTAL USE
// -------------------------------------------------------

#[test]
fn md5_chunked_updates_match_one_shot() {
    let data: Vec<u8> = (0..300u32).map(|i| (i * 7 % 256) as u8).collect();
    let expected = md5(&data);

    for chunk in [1, 3, 55, 56, 63, 64, 65, 128] {
        let mut hasher = Md5::new();
        for piece in data.chunks(chunk) {
            hasher.update(piece);
        }
        let mut out = [0u8; 16];
        hasher.finalize_into(&mut out);
        assert_eq!(out, expected, "chunk size {chunk}");
    }
}

#[test]
fn md5_finalize_resets_state() {
    let mut hasher = Md5::new();
    let mut first = [0u8; 16];
    let mut second = [0u8; 16];

    hasher.update(b"abc");
    hasher.finalize_into(&mut first);
    hasher.update(b"abc");
    hasher.finalize_into(&mut second);

    assert_eq!(first, second);
    assert_eq!(first, md5(b"abc"));
}

#[test]
fn md5_single_byte_updates() {
    let mut hasher = Md5::new();
    for b in b"message digest" {
        hasher.update_byte(*b);
    }
    let mut out = [0u8; 16];
    hasher.finalize_into(&mut out);
    assert_eq!(out, md5(b"message digest"));
}

#[test]
#[should_panic]
fn md5_short_output_buffer_panics() {
    let mut hasher = Md5::new();
    let mut out = [0u8; 8];
    hasher.finalize_into(&mut out);
}
