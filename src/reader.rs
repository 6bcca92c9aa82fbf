use log::debug;

use crate::error::{Error, PartialRead, Result};
use crate::source::ByteSource;

/// A `BitReader` streams bits and bytes off a `ByteSource`, most significant
/// bit first, without requiring byte alignment.
#[derive(Debug)]
pub struct BitReader<S: ByteSource> {
    byte:  u8,
    count: u8,
    src:   S,
}

impl<S: ByteSource> BitReader<S> {
    /// Constructs a new `BitReader<S>`.
    ///
    /// # Arguments
    ///
    /// * src - the byte source to read from, e.g. a `&[u8]` or `Cursor`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitbuf::BitReader;
    ///
    /// let data = [0xc0u8];
    /// let mut br = BitReader::new(&data[..]);
    /// assert_eq!(br.read_bit().unwrap(), 1);
    /// ```
    pub fn new(src: S) -> BitReader<S> {
        BitReader {
            src,
            byte:  0,
            count: 0,
        }
    }

    // Replaces the lookahead with the next source byte. Leaves state alone
    // when the source is exhausted.
    fn load_byte(&mut self) -> bool {
        match self.src.next_byte() {
            Some(byte) => {
                self.byte = byte;
                self.count = 8;
                true
            }
            None => false,
        }
    }

    /// Reads a single bit, returning 0 or 1.
    ///
    /// Fails with `EndOfData { bit_count: 0 }` once the source is drained.
    pub fn read_bit(&mut self) -> Result<u8> {
        if self.count == 0 && !self.load_byte() {
            debug!("end of data reading bit");
            return Err(Error::EndOfData { bit_count: 0 });
        }
        let bit = (self.byte & 0x80) >> 7;
        self.byte <<= 1;
        self.count -= 1;
        Ok(bit)
    }

    /// Reads the next 8 bits as a single byte, whatever the current alignment.
    ///
    /// On failure the error carries the number of lookahead bits that were
    /// available, and those bits remain readable.
    pub fn read_byte(&mut self) -> Result<u8> {
        let count = self.count;
        if count == 8 {
            self.count = 0;
            return Ok(std::mem::replace(&mut self.byte, 0));
        }

        // unread bits are left aligned, everything below them is zero
        let high = self.byte;
        let next = match self.src.next_byte() {
            Some(next) => next,
            None => {
                debug!("end of data reading byte with {} bits buffered", count);
                return Err(Error::EndOfData { bit_count: count });
            }
        };

        self.byte = next.checked_shl(8 - u32::from(count)).unwrap_or(0);
        Ok(high | (next >> count))
    }

    /// Reads `m` bits, packed from the most significant bit of the first
    /// returned byte. The unused low bits of the final byte are zero.
    ///
    /// On exhaustion the bytes assembled so far are returned inside the
    /// `PartialRead`. Every bit counted in `bits_read` is consumed, including
    /// buffered bits salvaged from a short final byte, so a later read picks
    /// up where `data` ends.
    pub fn read_bits(&mut self, m: usize) -> std::result::Result<Vec<u8>, PartialRead> {
        if m == 0 {
            return Ok(Vec::new());
        }
        let mut data = vec![0u8; (m + 7) / 8];

        for i in 0..m / 8 {
            match self.read_byte() {
                Ok(byte) => data[i] = byte,
                Err(source) => {
                    // a failed load leaves the salvaged high bits in place
                    data[i] = self.byte;
                    self.byte = 0;
                    self.count = 0;
                    return Err(PartialRead {
                        data,
                        bits_read: i * 8 + usize::from(source.bit_count()),
                        source,
                    });
                }
            }
        }

        let last = data.len() - 1;
        for i in 0..m % 8 {
            match self.read_bit() {
                Ok(bit) => data[last] |= bit << (7 - i),
                Err(source) => {
                    return Err(PartialRead {
                        data,
                        bits_read: (m / 8) * 8 + i,
                        source,
                    });
                }
            }
        }
        Ok(data)
    }

    /// Returns the number of whole bytes left in the source and the number of
    /// buffered bits not yet read.
    pub fn length(&self) -> (usize, u8) {
        (self.src.remaining(), self.count)
    }

    /// Total number of bits left to read.
    pub fn bit_length(&self) -> u64 {
        self.src.remaining() as u64 * 8 + u64::from(self.count)
    }

    /// Gets a reference to the underlying source.
    pub fn get_ref(&self) -> &S {
        &self.src
    }
}
