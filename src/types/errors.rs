use core::error::Error;
use core::fmt;

/// This enum lets one figure out what kind of error occurred during
/// a `GrowArr` operation.
///
/// Each kind has a fixed `u8` code so callers that record or transport
/// errors numerically can map a code back to a kind and a description.
/// Code `0` is reserved for "no error" and has no variant; a successful
/// operation is just `Ok`.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A requested initial capacity of zero was rejected.
    ZeroCapacity = 1,
    /// The capacity type would overflow (e.g. doubling past `L::MAX`).
    CapacityOverflow = 2,
    /// A count could not be represented as a `usize`.
    UsizeOverflow = 3,
    /// The byte size of the buffer could not form a valid layout.
    LayoutFailure = 4,
    /// The allocator reported a failure.
    AllocFailure = 5,
}

impl ErrorKind {
    /// The stable numeric code for this kind.
    pub const fn code(self) -> u8 {
        return self as u8;
    }

    /// Maps a numeric code back to its kind. Returns `None` for `0`
    /// (no error) and for out-of-range codes.
    pub const fn from_code(code: u8) -> Option<Self> {
        return match code {
            1 => Some(Self::ZeroCapacity),
            2 => Some(Self::CapacityOverflow),
            3 => Some(Self::UsizeOverflow),
            4 => Some(Self::LayoutFailure),
            5 => Some(Self::AllocFailure),
            _ => None,
        };
    }

    /// A fixed human-readable description of this kind.
    pub const fn description(self) -> &'static str {
        return match self {
            Self::ZeroCapacity => "Requested capacity was zero.",
            Self::CapacityOverflow => "Capacity type overflowed.",
            Self::UsizeOverflow => "usize overflowed.",
            Self::LayoutFailure => "Failed to create layout.",
            Self::AllocFailure => "An allocation failure occurred.",
        };
    }
}

/// Describes a numeric error code, including codes that do not map to
/// any [`ErrorKind`]: `0` describes as no error, and anything out of
/// range describes as an invalid code rather than failing.
pub const fn describe_code(code: u8) -> &'static str {
    if code == 0 {
        return "No error.";
    }
    return match ErrorKind::from_code(code) {
        Some(kind) => kind.description(),
        None => "Invalid error code.",
    };
}

/// A type alias for `Result<T, GrowArrErr>`
pub type GrowArrResult<T> = Result<T, GrowArrErr>;

/// This is used to indicate an error during a `GrowArr` operation.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GrowArrErr(ErrorKind);

impl GrowArrErr {
    pub(crate) const fn new(kind: ErrorKind) -> Self {
        return Self(kind);
    }

    pub const fn kind(self) -> ErrorKind {
        return self.0;
    }
}

impl Error for GrowArrErr {}

impl fmt::Display for GrowArrErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.description())
    }
}
