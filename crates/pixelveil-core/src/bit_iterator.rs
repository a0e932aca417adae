/// Iterates the bits of a byte slice, most significant bit first within
/// each byte, bytes in sequence.
///
/// ```rust
/// use pixelveil_core::BitIterator;
///
/// let bits: Vec<bool> = BitIterator::new(&[0b0100_0001]).collect();
/// assert_eq!(
///     bits,
///     vec![false, true, false, false, false, false, false, true]
/// );
/// ```
pub struct BitIterator<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> BitIterator<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }
}

impl Iterator for BitIterator<'_> {
    type Item = bool;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let byte = self.bytes.get(self.pos >> 3)?;
        let shift = 7 - (self.pos & 7);
        self.pos += 1;
        Some((byte >> shift) & 1 == 1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bytes.len() * 8 - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitIterator<'_> {}

#[cfg(test)]
mod bit_iterator_tests {
    use super::*;

    #[test]
    fn should_emit_bits_msb_first() {
        let bits: Vec<u8> = BitIterator::new(&[0b1000_0000]).map(u8::from).collect();
        assert_eq!(bits, vec![1, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn should_keep_byte_order() {
        let bits: Vec<u8> = BitIterator::new(&[0x01, 0x80]).map(u8::from).collect();
        assert_eq!(bits, vec![0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn should_be_empty_for_empty_slice() {
        assert_eq!(BitIterator::new(&[]).count(), 0);
    }

    #[test]
    fn should_report_exact_length() {
        let mut iter = BitIterator::new(&[0xff, 0x00, 0xab]);
        assert_eq!(iter.len(), 24);
        iter.next();
        assert_eq!(iter.len(), 23);
    }
}
