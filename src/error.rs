/// Errors returned by `BitWriter` and `BitReader`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("Bit position {position} exceeds buffer length of {len} bytes")]
    OutOfRange { position: u64, len: usize },

    #[error("Unexpected end of data ({bit_count} bits available)")]
    EndOfData { bit_count: u8 },
}

impl Error {
    /// Number of valid bits obtained before the failure. Only `EndOfData`
    /// carries one; everything else reports 0.
    pub fn bit_count(&self) -> u8 {
        match self {
            Error::EndOfData { bit_count } => *bit_count,
            _ => 0,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Returned by `BitReader::read_bits` when the source runs dry part way.
///
/// `data` holds everything assembled before the failure, with the first
/// `bits_read` bits meaningful.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{source} after reading {bits_read} bits")]
pub struct PartialRead {
    pub data: Vec<u8>,
    pub bits_read: usize,
    #[source]
    pub source: Error,
}

impl From<PartialRead> for Error {
    fn from(partial: PartialRead) -> Self {
        partial.source
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    pub fn bit_count() {
        assert_eq!(Error::EndOfData { bit_count: 5 }.bit_count(), 5);
        assert_eq!(Error::InvalidArgument("nope").bit_count(), 0);
        assert_eq!(Error::OutOfRange { position: 9, len: 1 }.bit_count(), 0);
    }

    #[test]
    pub fn partial_into_error() {
        let partial = PartialRead {
            data: vec![0x80],
            bits_read: 1,
            source: Error::EndOfData { bit_count: 0 },
        };
        let err: Error = partial.into();
        assert_eq!(err, Error::EndOfData { bit_count: 0 });
    }

    #[test]
    pub fn messages() {
        assert_eq!(
            Error::OutOfRange { position: 17, len: 2 }.to_string(),
            "Bit position 17 exceeds buffer length of 2 bytes"
        );
        let partial = PartialRead {
            data: vec![],
            bits_read: 3,
            source: Error::EndOfData { bit_count: 3 },
        };
        assert_eq!(
            partial.to_string(),
            "Unexpected end of data (3 bits available) after reading 3 bits"
        );
    }
}
