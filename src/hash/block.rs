//! Streaming block buffer shared by the 64-byte-block digests.
//!
//! The buffer collects input until a full block is available, hands full
//! blocks to the caller's compression function, and applies the standard
//! `0x80 || zeros || bit length` padding at the end of a message.

pub(crate) const BLOCK_LEN: usize = 64;

/// Byte order of the trailing 64-bit message length.
#[derive(Clone, Copy)]
pub(crate) enum LengthOrder {
    /// SHA-1, SHA-256
    BigEndian,
    /// MD5
    LittleEndian,
}

#[derive(Clone)]
pub(crate) struct BlockBuffer {
    block: [u8; BLOCK_LEN],
    filled: usize,
    total: u64,
}

impl BlockBuffer {
    pub(crate) const fn new() -> Self {
        Self {
            block: [0; BLOCK_LEN],
            filled: 0,
            total: 0,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.block = [0; BLOCK_LEN];
        self.filled = 0;
        self.total = 0;
    }

    /// Absorbs `data`, calling `compress` once per completed block.
    pub(crate) fn absorb(&mut self, mut data: &[u8], mut compress: impl FnMut(&[u8; BLOCK_LEN])) {
        self.total = self.total.wrapping_add(data.len() as u64);

        if self.filled > 0 {
            let take = (BLOCK_LEN - self.filled).min(data.len());
            self.block[self.filled..self.filled + take].copy_from_slice(&data[..take]);
            self.filled += take;
            data = &data[take..];

            if self.filled < BLOCK_LEN {
                return;
            }

            compress(&self.block);
            self.filled = 0;
        }

        let mut blocks = data.chunks_exact(BLOCK_LEN);
        for block in &mut blocks {
            compress(block.try_into().unwrap());
        }

        let rest = blocks.remainder();
        self.block[..rest.len()].copy_from_slice(rest);
        self.filled = rest.len();
    }

    /// Pads the pending message, compresses the final block(s) and resets.
    pub(crate) fn finish(&mut self, order: LengthOrder, mut compress: impl FnMut(&[u8; BLOCK_LEN])) {
        let bit_len = self.total.wrapping_mul(8);
        let rem = self.filled;

        self.block[rem] = 0x80;
        self.block[rem + 1..].fill(0);

        // No room left for the 64-bit length field.
        if rem >= BLOCK_LEN - 8 {
            compress(&self.block);
            self.block = [0; BLOCK_LEN];
        }

        let len_bytes = match order {
            LengthOrder::BigEndian => bit_len.to_be_bytes(),
            LengthOrder::LittleEndian => bit_len.to_le_bytes(),
        };
        self.block[BLOCK_LEN - 8..].copy_from_slice(&len_bytes);
        compress(&self.block);

        self.reset();
    }
}
