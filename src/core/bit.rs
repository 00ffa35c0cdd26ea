use crate::core::errors::ArgumentError;
use std::fmt;
use std::ops::BitXor;

/// A classical bit as carried by a polarized signal.
///
/// The textual form is canonical everywhere in the crate: `Zero` is `"0"`
/// and `One` is `"1"`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    /// `Zero` when both bits agree, `One` otherwise.
    pub fn xor(self, other: Bit) -> Bit {
        if self == other { Bit::Zero } else { Bit::One }
    }

    pub fn as_bool(self) -> bool {
        match self {
            Bit::Zero => false,
            Bit::One => true,
        }
    }

    /// Canonical character, the inverse of `TryFrom<char>`.
    pub fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }
}

impl BitXor for Bit {
    type Output = Bit;

    fn bitxor(self, rhs: Bit) -> Bit {
        self.xor(rhs)
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value { Bit::One } else { Bit::Zero }
    }
}

impl From<Bit> for bool {
    fn from(bit: Bit) -> Self {
        bit.as_bool()
    }
}

impl TryFrom<char> for Bit {
    type Error = ArgumentError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0' => Ok(Bit::Zero),
            '1' => Ok(Bit::One),
            other => Err(ArgumentError::BitSymbol(other)),
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
