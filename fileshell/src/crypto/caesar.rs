use super::{Algorithm, Cipher, KeyError, parse_integer_key};

/// Shift substitution over ASCII letters. Other bytes pass through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caesar {
    shift: u8,
}

impl Caesar {
    /// Any integer is accepted; it is reduced with the Euclidean remainder,
    /// so `-1` behaves like `25` and `29` like `3`.
    pub fn new(shift: i64) -> Self {
        Self {
            shift: shift.rem_euclid(26) as u8,
        }
    }

    pub fn from_key(raw_key: &str) -> Result<Self, KeyError> {
        parse_integer_key(raw_key, Algorithm::Caesar).map(Self::new)
    }

    /// The normalized shift in `0..26`.
    pub fn shift(&self) -> u8 {
        self.shift
    }
}

pub(super) fn shift_letter(byte: u8, shift: u8) -> u8 {
    let base = if byte.is_ascii_lowercase() {
        b'a'
    } else if byte.is_ascii_uppercase() {
        b'A'
    } else {
        return byte;
    };
    (byte - base + shift) % 26 + base
}

impl Cipher for Caesar {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Caesar
    }

    fn encrypt(&self, data: &[u8]) -> Vec<u8> {
        data.iter().map(|&b| shift_letter(b, self.shift)).collect()
    }

    fn decrypt(&self, data: &[u8]) -> Vec<u8> {
        let inverse = (26 - self.shift) % 26;
        data.iter().map(|&b| shift_letter(b, inverse)).collect()
    }
}
