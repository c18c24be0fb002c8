/// Constant-time equality for byte slices.
///
/// Lengths are treated as public: slices of different length compare
/// unequal immediately. For equal lengths every byte pair is XORed and
/// accumulated, so the running time does not depend on where the first
/// difference occurs.
#[inline(never)]
pub(crate) fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let diff = a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y));

    core::hint::black_box(diff) == 0
}
