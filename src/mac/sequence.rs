/// Implicit SSH packet sequence number.
///
/// Starts at zero for the first packet after the connection opens, is
/// incremented once per packet, and wraps around at 2^32 (RFC 4253 §6.4).
/// The counter is never reset, not even on re-keying.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PacketSequence(u32);

impl PacketSequence {
    /// Starts counting at `start`.
    pub const fn new(start: u32) -> Self {
        Self(start)
    }

    /// Sequence number of the next packet.
    pub const fn current(&self) -> u32 {
        self.0
    }

    /// Returns the current number and moves on to the next packet.
    pub fn advance(&mut self) -> u32 {
        let seq = self.0;
        self.0 = self.0.wrapping_add(1);
        seq
    }
}

impl From<u32> for PacketSequence {
    fn from(start: u32) -> Self {
        Self(start)
    }
}
