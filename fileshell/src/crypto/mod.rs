//! Four pedagogical ciphers behind one dispatch point.
//!
//! An [`Algorithm`] is resolved once from user input, then combined with a raw
//! key string into a boxed [`Cipher`] that already holds the validated key.
//! None of these ciphers provide any real security.

mod caesar;
mod rail_fence;
mod vigenere;
mod xor;

use std::fmt;
use std::str::FromStr;

pub use caesar::Caesar;
pub use rail_fence::RailFence;
pub use vigenere::Vigenere;
pub use xor::Xor;

/// A validated, ready-to-use cipher.
pub trait Cipher: fmt::Debug {
    /// The algorithm this cipher implements.
    fn algorithm(&self) -> Algorithm;

    /// Transforms plaintext into ciphertext.
    fn encrypt(&self, data: &[u8]) -> Vec<u8>;

    /// Reverses [`Cipher::encrypt`] for the same key.
    fn decrypt(&self, data: &[u8]) -> Vec<u8>;
}

/// Key validation failures.
//
// // 密钥校验失败的原因。
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum KeyError {
    /// The key of an integer-keyed cipher is not an integer.
    #[error("Invalid key format for {algorithm} cipher. Key must be an integer.")]
    NotAnInteger { algorithm: Algorithm },

    /// The key is an integer but does not fit the supported range.
    #[error("Key value out of range for {algorithm} cipher.")]
    OutOfRange { algorithm: Algorithm },

    /// The key is empty.
    #[error("Key cannot be empty for {algorithm} cipher.")]
    Empty { algorithm: Algorithm },

    /// The Vigenère key has no letter to derive shifts from.
    #[error("Key for vigenere cipher must contain at least one alphabetic character.")]
    NoAlphabetic,

    /// Rail fence needs at least two rails.
    #[error("Invalid key for railfence cipher. Number of rails must be greater than 1, got {0}.")]
    TooFewRails(i64),
}

/// An algorithm name that matches none of the supported ciphers.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown algorithm '{0}'. Use 1:caesar, 2:xor, 3:vigenere or 4:railfence.")]
pub struct AlgorithmParseError(pub String);

/// The supported ciphers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Caesar,
    Xor,
    Vigenere,
    RailFence,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Caesar,
        Algorithm::Xor,
        Algorithm::Vigenere,
        Algorithm::RailFence,
    ];

    /// Lowercase name, as used in encrypted file names (`_<name>.enc`).
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Caesar => "caesar",
            Algorithm::Xor => "xor",
            Algorithm::Vigenere => "vigenere",
            Algorithm::RailFence => "railfence",
        }
    }

    /// Menu number of the algorithm in the interactive shell.
    pub fn number(&self) -> u8 {
        match self {
            Algorithm::Caesar => 1,
            Algorithm::Xor => 2,
            Algorithm::Vigenere => 3,
            Algorithm::RailFence => 4,
        }
    }

    /// Validates `raw_key` for this algorithm and returns the matching cipher.
    ///
    /// This is pure: it never touches the filesystem, so a malformed key is
    /// reported even when the target file is missing or unreadable.
    pub fn cipher(&self, raw_key: &str) -> Result<Box<dyn Cipher>, KeyError> {
        Ok(match self {
            Algorithm::Caesar => Box::new(Caesar::from_key(raw_key)?),
            Algorithm::Xor => Box::new(Xor::from_key(raw_key)?),
            Algorithm::Vigenere => Box::new(Vigenere::from_key(raw_key)?),
            Algorithm::RailFence => Box::new(RailFence::from_key(raw_key)?),
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the algorithm name (case-insensitive) or its menu number.
impl FromStr for Algorithm {
    type Err = AlgorithmParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == lowered || a.number().to_string() == lowered)
            .ok_or_else(|| AlgorithmParseError(s.to_string()))
    }
}

/// Parses an integer key the whole way through.
fn parse_integer_key(raw_key: &str, algorithm: Algorithm) -> Result<i64, KeyError> {
    use std::num::IntErrorKind;

    raw_key.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            KeyError::OutOfRange { algorithm }
        }
        _ => KeyError::NotAnInteger { algorithm },
    })
}
