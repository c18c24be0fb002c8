use super::H256_INIT;
use super::computations::all_rounds;
use crate::hash::Digest;
use crate::hash::block::{BLOCK_LEN, BlockBuffer, LengthOrder};

#[inline(always)]
pub fn compress(block: &[u8; 64], state: &mut [u32; 8]) {
    let mut w = [0u32; 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes(chunk.try_into().unwrap());
    }

    all_rounds(state, w);
}

/// Incremental SHA-256 state.
#[derive(Clone)]
pub struct Sha256 {
    state: [u32; 8],
    buffer: BlockBuffer,
}

impl Sha256 {
    pub const fn new() -> Self {
        Self {
            state: H256_INIT,
            buffer: BlockBuffer::new(),
        }
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl Digest for Sha256 {
    const BLOCK_SIZE: usize = BLOCK_LEN;
    const OUTPUT_SIZE: usize = 32;

    fn reset(&mut self) {
        self.state = H256_INIT;
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

        self.state = H256_INIT;
    }
}

pub fn sha256(input: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(input);

    let mut out = [0u8; 32];
    hasher.finalize_into(&mut out);
    out
}
