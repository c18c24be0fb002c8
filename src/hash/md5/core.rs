//! MD5 compression function and incremental state.
//!
//! MD5 differs from the SHA family in byte order only: message words and the
//! trailing length are little-endian, and so is the serialized output.

use super::{H128_INIT, K128, S128};
use crate::hash::Digest;
use crate::hash::block::{BLOCK_LEN, BlockBuffer, LengthOrder};

/// Compresses a single 512-bit message block into `state`.
///
/// # Parameters
/// - `block`: A 512-bit (64-byte) message block
/// - `state`: The chaining values A, B, C, D
pub fn compress(block: &[u8; 64], state: &mut [u32; 4]) {
    let mut m = [0u32; 16];

    for (slot, chunk) in m.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_le_bytes(chunk.try_into().unwrap());
    }

    let [mut a, mut b, mut c, mut d] = *state;

    for i in 0..64 {
        let (f, g) = match i {
            0..16 => ((b & c) | (!b & d), i),
            16..32 => ((d & b) | (!d & c), (5 * i + 1) % 16),
            32..48 => (b ^ c ^ d, (3 * i + 5) % 16),
            _ => (c ^ (b | !d), (7 * i) % 16),
        };

        let f = f.wrapping_add(a).wrapping_add(K128[i]).wrapping_add(m[g]);
        a = d;
        d = c;
        c = b;
        b = b.wrapping_add(f.rotate_left(S128[i]));
    }

    for (s, v) in state.iter_mut().zip([a, b, c, d]) {
        *s = s.wrapping_add(v);
    }
}

/// Incremental MD5 state.
#[derive(Clone)]
pub struct Md5 {
    state: [u32; 4],
    buffer: BlockBuffer,
}

impl Md5 {
    pub const fn new() -> Self {
        Self {
            state: H128_INIT,
            buffer: BlockBuffer::new(),
        }
    }
}

impl Default for Md5 {
    fn default() -> Self {
        Self::new()
    }
}

impl Digest for Md5 {
    const BLOCK_SIZE: usize = BLOCK_LEN;
    const OUTPUT_SIZE: usize = 16;

    fn reset(&mut self) {
        self.state = H128_INIT;
        self.buffer.reset();
    }

    fn update(&mut self, data: &[u8]) {
        self.buffer
            .absorb(data, |block| compress(block, &mut self.state));
    }

    fn finalize_into(&mut self, out: &mut [u8]) {
        let out = &mut out[..Self::OUTPUT_SIZE];

        self.buffer
            .finish(LengthOrder::LittleEndian, |block| compress(block, &mut self.state));

        for (chunk, word) in out.chunks_exact_mut(4).zip(self.state) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }

        self.state = H128_INIT;
    }
}

/// Computes the MD5 hash of `input`.
///
/// # Notes
/// - MD5 is broken for collision resistance; use it only where a protocol
///   requires it, such as `hmac-md5`.
pub fn md5(input: &[u8]) -> [u8; 16] {
    let mut hasher = Md5::new();
    hasher.update(input);

    let mut out = [0u8; 16];
    hasher.finalize_into(&mut out);
    out
}
