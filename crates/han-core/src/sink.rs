//! Bounded, NUL-terminated output into a caller-owned buffer.

/// Result of a [`BoundedSink`] write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkWrite {
    /// Units copied, excluding the terminator.
    pub written: usize,
    /// Length of the full source before truncation.
    pub logical: usize,
}

impl SinkWrite {
    pub fn truncated(&self) -> bool {
        self.written < self.logical
    }
}

/// Writes a prefix of a unit slice plus a zero terminator, never touching
/// memory past the end of the wrapped buffer. A zero-length buffer receives
/// nothing, not even the terminator.
pub struct BoundedSink<'a, T> {
    buf: &'a mut [T],
}

impl<'a, T: Copy + Default> BoundedSink<'a, T> {
    pub fn new(buf: &'a mut [T]) -> Self {
        Self { buf }
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Units available for content once the terminator slot is reserved.
    pub fn content_capacity(&self) -> usize {
        self.buf.len().saturating_sub(1)
    }

    /// Copy as much of `src` as fits, then terminate.
    pub fn write_terminated(self, src: &[T]) -> SinkWrite {
        let len = src.len();
        self.write_terminated_at(src, len)
    }

    /// Copy at most `len` units of `src`, then terminate. `len` is clamped
    /// to both the source length and [`Self::content_capacity`].
    pub fn write_terminated_at(self, src: &[T], len: usize) -> SinkWrite {
        let logical = src.len();
        if self.buf.is_empty() {
            return SinkWrite {
                written: 0,
                logical,
            };
        }
        let written = len.min(logical).min(self.content_capacity());
        self.buf[..written].copy_from_slice(&src[..written]);
        self.buf[written] = T::default();
        SinkWrite { written, logical }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fits_with_terminator() {
        let mut buf = [0xAAu8; 6];
        let w = BoundedSink::new(&mut buf).write_terminated(b"Hello");
        assert_eq!(w, SinkWrite { written: 5, logical: 5 });
        assert!(!w.truncated());
        assert_eq!(&buf, b"Hello\0");
    }

    #[test]
    fn test_truncates_and_terminates() {
        let mut buf = [0xAAu8; 4];
        let w = BoundedSink::new(&mut buf).write_terminated(b"Hello");
        assert_eq!(w, SinkWrite { written: 3, logical: 5 });
        assert!(w.truncated());
        assert_eq!(&buf, b"Hel\0");
    }

    #[test]
    fn test_empty_buffer_untouched() {
        let mut buf: [u16; 0] = [];
        let w = BoundedSink::new(&mut buf).write_terminated(&[1, 2, 3]);
        assert_eq!(w, SinkWrite { written: 0, logical: 3 });
    }

    #[test]
    fn test_single_slot_gets_terminator_only() {
        let mut buf = [7u16; 1];
        let w = BoundedSink::new(&mut buf).write_terminated(&[1, 2]);
        assert_eq!(w.written, 0);
        assert_eq!(buf, [0]);
    }

    #[test]
    fn test_write_at_shorter_cut() {
        let mut buf = [0xAAu8; 8];
        let w = BoundedSink::new(&mut buf).write_terminated_at(b"abcdef", 2);
        assert_eq!(w, SinkWrite { written: 2, logical: 6 });
        assert_eq!(&buf[..3], b"ab\0");
        assert_eq!(buf[3], 0xAA);
    }

    proptest! {
        #[test]
        fn never_writes_past_capacity(
            src in prop::collection::vec(1u8..=255, 0..40),
            cap in 0usize..48,
        ) {
            // Guard bytes after the sink's window must survive.
            let mut backing = vec![0xEEu8; cap + 4];
            let w = BoundedSink::new(&mut backing[..cap]).write_terminated(&src);
            prop_assert!(backing[cap..].iter().all(|&b| b == 0xEE));
            prop_assert_eq!(w.logical, src.len());
            if cap > 0 {
                prop_assert!(w.written < cap);
                prop_assert_eq!(backing[w.written], 0);
                prop_assert_eq!(&backing[..w.written], &src[..w.written]);
            } else {
                prop_assert_eq!(w.written, 0);
            }
        }
    }
}
