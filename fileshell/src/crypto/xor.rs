use super::{Algorithm, Cipher, KeyError};

/// Byte-wise XOR with a repeating key. Encryption and decryption are the
/// same operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xor {
    key: Vec<u8>,
}

impl Xor {
    pub fn from_key(raw_key: &str) -> Result<Self, KeyError> {
        if raw_key.is_empty() {
            return Err(KeyError::Empty {
                algorithm: Algorithm::Xor,
            });
        }
        Ok(Self {
            key: raw_key.as_bytes().to_vec(),
        })
    }

    fn apply(&self, data: &[u8]) -> Vec<u8> {
        data.iter()
            .zip(self.key.iter().cycle())
            .map(|(b, k)| b ^ k)
            .collect()
    }
}

impl Cipher for Xor {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Xor
    }

    fn encrypt(&self, data: &[u8]) -> Vec<u8> {
        self.apply(data)
    }

    fn decrypt(&self, data: &[u8]) -> Vec<u8> {
        self.apply(data)
    }
}
