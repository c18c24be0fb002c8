use super::{H160_INIT, K160};
use crate::hash::Digest;
use crate::hash::block::{BLOCK_LEN, BlockBuffer, LengthOrder};

/// Compresses a single 512-bit message block into `state`.
pub fn compress(block: &[u8; 64], state: &mut [u32; 5]) {
    let mut w = [0u32; 80];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes(chunk.try_into().unwrap());
    }

    for i in 16..80 {
        w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
    }

    let [mut a, mut b, mut c, mut d, mut e] = *state;

    for (i, wi) in w.iter().enumerate() {
        let (f, k) = match i {
            0..20 => ((b & c) | (!b & d), K160[0]),
            20..40 => (b ^ c ^ d, K160[1]),
            40..60 => ((b & c) | (b & d) | (c & d), K160[2]),
            _ => (b ^ c ^ d, K160[3]),
        };

        let t = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(*wi);

        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = t;
    }

    for (s, v) in state.iter_mut().zip([a, b, c, d, e]) {
        *s = s.wrapping_add(v);
    }
}

/// Incremental SHA-1 state.
#[derive(Clone)]
pub struct Sha1 {
    state: [u32; 5],
    buffer: BlockBuffer,
}

impl Sha1 {
    pub const fn new() -> Self {
        Self {
            state: H160_INIT,
            buffer: BlockBuffer::new(),
        }
    }
}

impl Default for Sha1 {
    fn default() -> Self {
        Self::new()
    }
}

impl Digest for Sha1 {
    const BLOCK_SIZE: usize = BLOCK_LEN;
    const OUTPUT_SIZE: usize = 20;

    fn reset(&mut self) {
        self.state = H160_INIT;
        self.buffer.reset();
    }

    fn update(&mut self, data: &[u8]) {
        self.buffer
            .absorb(data, |block| compress(block, &mut self.state));
    }

    fn finalize_into(&mut self, out: &mut [u8]) {
        let out = &mut out[..Self::OUTPUT_SIZE];

        self.buffer
            .finish(LengthOrder::BigEndian, |block| compress(block, &mut self.state));

        for (chunk, word) in out.chunks_exact_mut(4).zip(self.state) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        self.state = H160_INIT;
    }
}

/// Computes the SHA-1 hash of `input`.
pub fn sha1(input: &[u8]) -> [u8; 20] {
    let mut hasher = Sha1::new();
    hasher.update(input);

    let mut out = [0u8; 20];
    hasher.finalize_into(&mut out);
    out
}
