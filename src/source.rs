use std::convert::TryFrom;
use std::io::Cursor;

/// A forward-only supply of bytes for a `BitReader`.
pub trait ByteSource {
    /// Takes the next byte, or `None` once the source is exhausted.
    fn next_byte(&mut self) -> Option<u8>;

    /// Number of bytes not yet taken.
    fn remaining(&self) -> usize;
}

impl<'a> ByteSource for &'a [u8] {
    fn next_byte(&mut self) -> Option<u8> {
        let (&first, rest) = self.split_first()?;
        *self = rest;
        Some(first)
    }

    fn remaining(&self) -> usize {
        self.len()
    }
}

impl<T: AsRef<[u8]>> ByteSource for Cursor<T> {
    fn next_byte(&mut self) -> Option<u8> {
        let pos = usize::try_from(self.position()).ok()?;
        let byte = *self.get_ref().as_ref().get(pos)?;
        self.set_position(self.position() + 1);
        Some(byte)
    }

    fn remaining(&self) -> usize {
        let len = self.get_ref().as_ref().len();
        match usize::try_from(self.position()) {
            Ok(pos) => len.saturating_sub(pos),
            Err(_) => 0,
        }
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;
    use super::*;

    #[test]
    pub fn slice() {
        let data = [0x55u8, 0xaa];
        let mut src = &data[..];

        assert_eq!(src.remaining(), 2);
        assert_eq!(src.next_byte(), Some(0x55));
        assert_eq!(src.remaining(), 1);
        assert_eq!(src.next_byte(), Some(0xaa));
        assert_eq!(src.remaining(), 0);
        assert_eq!(src.next_byte(), None);
        assert_eq!(src.next_byte(), None);
    }

    #[test]
    pub fn cursor() {
        let mut src = Cursor::new(vec![0x55u8, 0xaa]);

        assert_eq!(src.remaining(), 2);
        assert_eq!(src.next_byte(), Some(0x55));
        assert_eq!(src.remaining(), 1);
        assert_eq!(src.next_byte(), Some(0xaa));
        assert_eq!(src.next_byte(), None);
        assert_eq!(src.remaining(), 0);

        // a cursor positioned past the end has nothing left
        src.set_position(10);
        assert_eq!(src.remaining(), 0);
        assert_eq!(src.next_byte(), None);
    }
}
