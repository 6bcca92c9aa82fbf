//! bitbuf packs bits into a growable byte buffer and streams them back out,
//! most significant bit first, with no byte alignment required.
//!
//! # Writing
//!
//! ```rust
//! use bitbuf::BitWriter;
//!
//! let mut bw = BitWriter::new();
//!
//! bw.insert_bit(1).unwrap();
//! bw.insert_byte(192);
//! bw.insert(&[39, 156], 4).unwrap();
//!
//! assert_eq!(bw.bit_length(), 21);
//! ```
//!
//! # Reading
//!
//! ```rust
//! use bitbuf::{BitReader, BitWriter};
//!
//! let mut bw = BitWriter::new();
//! bw.insert(&[192, 39, 156], 8).unwrap();
//!
//! let (mut br, bits) = bw.to_reader();
//! assert_eq!(bits, 24);
//! assert_eq!(br.read_bit().unwrap(), 1);
//! assert_eq!(br.read_bits(23).unwrap(), vec![128, 79, 56]);
//!
//! // any byte slice works as a source
//! let data = [0x55u8];
//! let mut br = BitReader::new(&data[..]);
//! assert_eq!(br.read_byte().unwrap(), 0x55);
//! ```
//!
//! The packed bytes carry no length of their own: whoever stores or sends
//! them must keep the bit count alongside.

pub mod error;
pub use error::{Error, PartialRead, Result};

pub mod source;
pub use source::ByteSource;

pub mod reader;
pub use reader::BitReader;

pub mod writer;
pub use writer::BitWriter;
