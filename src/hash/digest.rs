/// Incremental, keyless hash primitive.
///
/// An implementation is constructed once and reused: [`update`] may be
/// called any number of times, and [`finalize_into`] writes the hash and
/// returns the instance to its initial state, ready for the next message.
///
/// [`update`]: Digest::update
/// [`finalize_into`]: Digest::finalize_into
pub trait Digest {
    /// Size of one compression block in bytes.
    const BLOCK_SIZE: usize;

    /// Length of the hash value in bytes.
    const OUTPUT_SIZE: usize;

    /// Discards any absorbed input.
    fn reset(&mut self);

    /// Absorbs `data`.
    fn update(&mut self, data: &[u8]);

    /// Absorbs a single byte.
    fn update_byte(&mut self, byte: u8) {
        self.update(&[byte]);
    }

    /// Writes the hash of everything absorbed since the last reset into the
    /// first [`OUTPUT_SIZE`](Digest::OUTPUT_SIZE) bytes of `out`, then resets.
    ///
    /// # Panics
    ///
    /// Panics if `out` is shorter than `OUTPUT_SIZE`.
    fn finalize_into(&mut self, out: &mut [u8]);
}
