use super::caesar::shift_letter;
use super::{Algorithm, Cipher, KeyError};

/// Repeating-key polyalphabetic substitution over ASCII letters.
///
/// The key index only advances on letters of the text; everything else is
/// copied through and does not consume a key letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vigenere {
    /// Shift for each alphabetic key character, in key order.
    shifts: Vec<u8>,
}

impl Vigenere {
    /// Non-letters in the key are dropped; at least one letter must remain.
    pub fn from_key(raw_key: &str) -> Result<Self, KeyError> {
        let shifts: Vec<u8> = raw_key
            .bytes()
            .filter(u8::is_ascii_alphabetic)
            .map(|b| b.to_ascii_lowercase() - b'a')
            .collect();
        if shifts.is_empty() {
            return Err(KeyError::NoAlphabetic);
        }
        Ok(Self { shifts })
    }

    fn apply(&self, data: &[u8], decrypt: bool) -> Vec<u8> {
        let mut key_index = 0;
        data.iter()
            .map(|&b| {
                if !b.is_ascii_alphabetic() {
                    return b;
                }
                let shift = self.shifts[key_index % self.shifts.len()];
                key_index += 1;
                let shift = if decrypt { (26 - shift) % 26 } else { shift };
                shift_letter(b, shift)
            })
            .collect()
    }
}

impl Cipher for Vigenere {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Vigenere
    }

    fn encrypt(&self, data: &[u8]) -> Vec<u8> {
        self.apply(data, false)
    }

    fn decrypt(&self, data: &[u8]) -> Vec<u8> {
        self.apply(data, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_example() {
        let cipher = Vigenere::from_key("LEMON").unwrap();
        assert_eq!(cipher.encrypt(b"ATTACKATDAWN"), b"LXFOPVEFRNHR");
        assert_eq!(cipher.decrypt(b"LXFOPVEFRNHR"), b"ATTACKATDAWN");
    }

    #[test]
    fn test_preserves_case() {
        let cipher = Vigenere::from_key("lemon").unwrap();
        assert_eq!(cipher.encrypt(b"attackAtDawn"), b"lxfopvEfRnhr");
    }

    #[test]
    fn test_non_letters_do_not_advance_key() {
        let cipher = Vigenere::from_key("ab").unwrap();
        // a+0, b+1 ; 空格和标点不消耗密钥
        assert_eq!(cipher.encrypt(b"a a, a"), b"a b, a");
    }

    #[test]
    fn test_key_non_letters_stripped() {
        let plain = Vigenere::from_key("lemon").unwrap();
        let noisy = Vigenere::from_key("l-e 1m#o!N").unwrap();
        assert_eq!(plain, noisy);
    }

    #[test]
    fn test_key_without_letters_rejected() {
        assert_eq!(Vigenere::from_key("1234"), Err(KeyError::NoAlphabetic));
        assert_eq!(Vigenere::from_key(""), Err(KeyError::NoAlphabetic));
    }
}
