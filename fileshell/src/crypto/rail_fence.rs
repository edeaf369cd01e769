use super::{Algorithm, Cipher, KeyError, parse_integer_key};

/// Zig-zag transposition across a fixed number of rails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailFence {
    rails: usize,
}

impl RailFence {
    /// Builds a fence with any rail count. One rail or fewer is the identity.
    pub fn new(rails: usize) -> Self {
        Self { rails }
    }

    /// The key must be an integer greater than 1.
    pub fn from_key(raw_key: &str) -> Result<Self, KeyError> {
        let rails = parse_integer_key(raw_key, Algorithm::RailFence)?;
        if rails <= 1 {
            return Err(KeyError::TooFewRails(rails));
        }
        let rails = usize::try_from(rails).map_err(|_| KeyError::OutOfRange {
            algorithm: Algorithm::RailFence,
        })?;
        Ok(Self::new(rails))
    }

    pub fn rails(&self) -> usize {
        self.rails
    }

    /// Rail visited by each position of a text of `len` bytes.
    ///
    /// More rails than bytes never bounce, so the count is clamped to `len`.
    fn zigzag(&self, len: usize) -> Vec<usize> {
        let rails = self.rails.min(len);
        let mut rail = 0usize;
        let mut down = true;
        let mut sequence = Vec::with_capacity(len);
        for _ in 0..len {
            sequence.push(rail);
            if rail == 0 {
                down = true;
            } else if rail == rails - 1 {
                down = false;
            }
            if down {
                rail += 1;
            } else {
                rail -= 1;
            }
        }
        sequence
    }

    fn is_identity(&self, data: &[u8]) -> bool {
        self.rails <= 1 || data.is_empty()
    }
}

impl Cipher for RailFence {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RailFence
    }

    fn encrypt(&self, data: &[u8]) -> Vec<u8> {
        if self.is_identity(data) {
            return data.to_vec();
        }
        let sequence = self.zigzag(data.len());
        let rails = self.rails.min(data.len());
        let mut fence: Vec<Vec<u8>> = vec![Vec::new(); rails];
        for (&byte, &rail) in data.iter().zip(&sequence) {
            fence[rail].push(byte);
        }
        fence.concat()
    }

    fn decrypt(&self, data: &[u8]) -> Vec<u8> {
        if self.is_identity(data) {
            return data.to_vec();
        }
        let sequence = self.zigzag(data.len());
        let rails = self.rails.min(data.len());

        // 1. 重放之字形路径，得到每条轨道的长度
        let mut lengths = vec![0usize; rails];
        for &rail in &sequence {
            lengths[rail] += 1;
        }

        // 2. 按长度将密文切分为各条轨道
        let mut rows: Vec<&[u8]> = Vec::with_capacity(rails);
        let mut start = 0;
        for len in lengths {
            rows.push(&data[start..start + len]);
            start += len;
        }

        // 3. 再次沿之字形读取
        let mut cursors = vec![0usize; rails];
        sequence
            .iter()
            .map(|&rail| {
                let byte = rows[rail][cursors[rail]];
                cursors[rail] += 1;
                byte
            })
            .collect()
    }
}
