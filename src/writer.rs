use std::convert::TryFrom;
use std::io::Cursor;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::reader::BitReader;

/// A `BitWriter` accumulates bits into a growable byte buffer, most
/// significant bit first.
///
/// The last byte of the buffer may be partial; its unused low bits are always
/// zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitWriter {
    store:     Vec<u8>,
    bit_count: u8,
}

impl Default for BitWriter {
    fn default() -> Self {
        BitWriter::new()
    }
}

impl BitWriter {
    /// Constructs a new, empty `BitWriter`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitbuf::BitWriter;
    ///
    /// let mut bw = BitWriter::new();
    /// bw.insert_bit(1).unwrap();
    /// assert_eq!(bw.bit_length(), 1);
    /// ```
    pub fn new() -> BitWriter {
        BitWriter {
            store:     vec![0],
            bit_count: 0,
        }
    }

    fn grow(&mut self) {
        self.store.push(0);
        self.bit_count = 0;
        trace!("grew store to {} bytes", self.store.len());
    }

    // Index of the byte currently being filled. The store is never empty.
    fn tail(&self) -> usize {
        self.store.len() - 1
    }

    /// Appends a single bit.
    ///
    /// # Arguments
    ///
    /// * bit - 0 or 1; anything else is rejected with `InvalidArgument`.
    pub fn insert_bit(&mut self, bit: u8) -> Result<()> {
        if bit > 1 {
            return Err(Error::InvalidArgument("Expecting bit: 0 or 1"));
        }
        if self.bit_count == 8 {
            self.grow();
        }
        let tail = self.tail();
        self.store[tail] |= bit << (7 - self.bit_count);
        self.bit_count += 1;
        Ok(())
    }

    /// Appends a whole byte at the current bit alignment.
    ///
    /// With `k` bits already in the last byte, the top `8 - k` bits of `byte`
    /// complete it and the low `k` bits start a new one, so the alignment is
    /// unchanged afterwards.
    pub fn insert_byte(&mut self, byte: u8) {
        if self.bit_count == 8 {
            self.grow();
        }
        let k = self.bit_count;
        let tail = self.tail();

        if k == 0 {
            self.store[tail] = byte;
            self.bit_count = 8;
            return;
        }

        self.store[tail] |= byte >> k;
        self.store.push(byte << (8 - k));
        trace!("grew store to {} bytes", self.store.len());
    }

    /// Appends every byte of `bytes` but the last in full, then the top
    /// `trailing_bits` bits of the last byte.
    ///
    /// A `trailing_bits` of 0 means the last byte adds no bits at all; pass 8
    /// to write it in full.
    ///
    /// Fails with `InvalidArgument`, leaving the buffer untouched, if
    /// `trailing_bits > 8` or `bytes` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitbuf::BitWriter;
    ///
    /// let mut bw = BitWriter::new();
    /// bw.insert(&[192, 39, 156], 4).unwrap();
    /// assert_eq!(bw.length(), (2, 4));
    /// assert_eq!(bw.as_bytes(), &[192, 39, 144]);
    /// ```
    pub fn insert(&mut self, bytes: &[u8], trailing_bits: u8) -> Result<()> {
        if trailing_bits > 8 {
            return Err(Error::InvalidArgument("Invalid number of bits"));
        }
        let (&last, full) = bytes
            .split_last()
            .ok_or(Error::InvalidArgument("Empty data to insert"))?;

        for &byte in full {
            self.insert_byte(byte);
        }
        if trailing_bits == 8 {
            self.insert_byte(last);
            return Ok(());
        }
        for i in 0..trailing_bits {
            self.insert_bit((last >> (7 - i)) & 1)?;
        }
        Ok(())
    }

    /// Returns the bit at `position`, counting from the most significant bit
    /// of the first byte. Does not modify the buffer.
    pub fn read(&self, position: u64) -> Result<u8> {
        let bit_pos = position % 8;
        let byte = usize::try_from(position / 8)
            .ok()
            .and_then(|i| self.store.get(i));

        match byte {
            Some(&byte) => Ok((byte >> (7 - bit_pos)) & 1),
            None => Err(Error::OutOfRange {
                position,
                len: self.store.len(),
            }),
        }
    }

    /// Returns the number of full bytes and the number of bits in the
    /// trailing partial byte.
    pub fn length(&self) -> (usize, u8) {
        if self.bit_count == 8 {
            return (self.store.len(), 0);
        }
        (self.tail(), self.bit_count)
    }

    /// Total number of bits written.
    pub fn bit_length(&self) -> u64 {
        self.tail() as u64 * 8 + u64::from(self.bit_count)
    }

    /// Discards everything written, returning to the empty state.
    pub fn flush(&mut self) {
        debug!("flushing {} bits", self.bit_length());
        self.store.clear();
        self.store.push(0);
        self.bit_count = 0;
    }

    /// Gets the packed bytes, including the zero padding of a partial last
    /// byte.
    pub fn as_bytes(&self) -> &[u8] {
        &self.store
    }

    /// Returns a `BitReader` over a copy of the buffer, along with the number
    /// of valid bits in it. Later writes do not affect the reader.
    pub fn to_reader(&self) -> (BitReader<Cursor<Vec<u8>>>, u64) {
        let bits = self.bit_length();
        debug!("snapshot reader over {} bits", bits);
        (BitReader::new(Cursor::new(self.store.clone())), bits)
    }
}
