/// The shape of one side of a call
///
/// Every call passes values through the caller's [Frame](crate::Frame) in
/// one of two shapes: a literal run of slots, or a single table in slot 0
/// that carries however many values the call involves. The shape is encoded
/// as a 4-bit code on the wire, with `15` reserved as the variadic sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    /// A literal slot count: slots `0..count` hold the values
    ///
    /// The count can be at most [Arity::MAX_COUNT].
    Count(u8),
    /// The variadic sentinel: slot 0 holds one table containing the values
    Row,
}

impl Arity {
    /// The largest literal slot count that can be encoded in a shape nibble
    pub const MAX_COUNT: u8 = 14;

    const ROW_NIBBLE: u8 = 0xf;

    /// Decodes a shape from the low 4 bits of `nibble`
    pub fn from_nibble(nibble: u8) -> Self {
        match nibble & 0xf {
            Self::ROW_NIBBLE => Self::Row,
            count => Self::Count(count),
        }
    }

    /// Encodes the shape as a 4-bit code
    pub fn as_nibble(self) -> u8 {
        match self {
            Self::Row => Self::ROW_NIBBLE,
            Self::Count(count) => {
                debug_assert!(count <= Self::MAX_COUNT);
                count
            }
        }
    }

    /// Asserts that a literal count fits in a shape nibble
    ///
    /// The constructors that accept shapes from callers enforce the 0-14
    /// range here, so an out-of-range count can never reach the wire
    /// encoding or the frame.
    pub(crate) fn validate(self) -> Self {
        if let Self::Count(count) = self {
            assert!(
                count <= Self::MAX_COUNT,
                "a literal slot count can be at most {}, got {count}",
                Self::MAX_COUNT
            );
        }
        self
    }

    /// Returns the number of frame slots described by the shape
    ///
    /// A variadic row occupies a single slot (the table).
    pub fn slot_count(self) -> usize {
        match self {
            Self::Row => 1,
            Self::Count(count) => count as usize,
        }
    }
}

/// The packed argument/return shapes for one call
///
/// On the wire this is a single byte: the high nibble describes what the
/// caller supplied, the low nibble what the caller wants back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallShape {
    /// The shape of the arguments the caller placed in the frame
    pub args: Arity,
    /// The shape the caller wants the results conformed to
    pub rets: Arity,
}

impl CallShape {
    /// Full pass-through in both directions (the `0xff` arity byte)
    pub const PASS_THROUGH: Self = Self {
        args: Arity::Row,
        rets: Arity::Row,
    };

    /// Makes a call shape from the given argument and return shapes
    ///
    /// Panics if either shape's literal count exceeds [Arity::MAX_COUNT].
    pub fn new(args: Arity, rets: Arity) -> Self {
        Self {
            args: args.validate(),
            rets: rets.validate(),
        }
    }

    /// Decodes a packed arity byte
    pub fn from_byte(byte: u8) -> Self {
        Self {
            args: Arity::from_nibble(byte >> 4),
            rets: Arity::from_nibble(byte),
        }
    }

    /// Encodes the shapes as a packed arity byte
    pub fn as_byte(self) -> u8 {
        (self.args.as_nibble() << 4) | self.rets.as_nibble()
    }
}
