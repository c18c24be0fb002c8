use sshmac::hash::{Digest, Sha1, sha1};

fn expect_sha1_eq(input: &[u8], expected: &str) {
    assert_eq!(hex::encode(sha1(input)), expected);
}

// -------------------------------------------------------
// 1. OFFICIAL VECTOR TESTS
// -------------------------------------------------------

#[test]
fn sha1_empty_vector() {
    expect_sha1_eq(b"", "da39a3ee5e6b4b0d3255bfef95601890afd80709");
}

#[test]
fn sha1_abc_vector() {
    expect_sha1_eq(b"abc", "a9993e364706816aba3e25717850c26c9cd0d89d");
}

#[test]
fn sha1_two_block_vector() {
    expect_sha1_eq(
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "84983e441c3bd26ebaae4aa1f95129e5e54670f1",
    );
}

#[test]
fn sha1_known_phrase() {
    expect_sha1_eq(
        b"The quick brown fox jumps over the lazy dog",
        "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12",
    );
}

#[test]
fn sha1_million_a() {
    let buf = vec![b'a'; 1_000_000];
    expect_sha1_eq(&buf, "34aa973cd4c4daa4f61eeb2bdbad27316534016f");
}

// -------------------------------------------------------
// 2. PADDING BOUNDARIES AND STREAMING
// -------------------------------------------------------

#[test]
fn sha1_streaming_matches_one_shot_across_boundaries() {
    for len in [0usize, 1, 55, 56, 57, 63, 64, 65, 119, 120, 127, 128, 129, 1000] {
        let data: Vec<u8> = (0..len).map(|i| i as u8).collect();
        let expected = sha1(&data);

        let mut hasher = Sha1::new();
        let (a, b) = data.split_at(len / 3);
        hasher.update(a);
        hasher.update(b);

        let mut out = [0u8; 20];
        hasher.finalize_into(&mut out);
        assert_eq!(out, expected, "length {len}");
    }
}

#[test]
fn sha1_reset_discards_input() {
    let mut hasher = Sha1::new();
    hasher.update(b"garbage that must not count");
    hasher.reset();
    hasher.update(b"abc");

    let mut out = [0u8; 20];
    hasher.finalize_into(&mut out);
    assert_eq!(out, sha1(b"abc"));
}

#[test]
fn sha1_writes_only_output_size_bytes() {
    let mut hasher = Sha1::new();
    let mut out = [0xAAu8; 32];
    hasher.update(b"abc");
    hasher.finalize_into(&mut out);

    assert_eq!(&out[..20], &sha1(b"abc"));
    assert!(out[20..].iter().all(|&b| b == 0xAA));
}
