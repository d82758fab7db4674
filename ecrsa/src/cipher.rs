//! Permutation cipher.

use crate::{Error, KeyPair, Result, SYMBOLS, SymbolEncoder};
use modfield::Word;

/// Which exponent of a [`KeyPair`] to apply.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Multiply by the public exponent `e`.
    Encrypt,
    /// Multiply by the private exponent `d`.
    Decrypt,
}

/// Byte substitution cipher keyed by a curve-group exponent.
///
/// A byte is encoded as a point, multiplied by the key exponent and decoded
/// back. When the group has more points than the encoding table, the product
/// can land on a point with no byte assigned; the multiplication is then
/// repeated until it lands back in the table. Scalar multiplication by an
/// exponent coprime to the group order permutes the group, so this walk
/// terminates and decryption retraces it in reverse.
#[derive(Clone, Debug)]
pub struct Cipher {
    encoder: SymbolEncoder,
}

impl Cipher {
    /// Cipher over the given encoding table.
    pub fn new(encoder: SymbolEncoder) -> Self {
        Self { encoder }
    }

    /// Encoding table.
    pub fn encoder(&self) -> &SymbolEncoder {
        &self.encoder
    }

    /// Encrypt a single byte.
    pub fn encrypt(&self, key: &KeyPair, byte: u8) -> Result<u8> {
        self.apply(key, Direction::Encrypt, byte)
    }

    /// Decrypt a single byte.
    pub fn decrypt(&self, key: &KeyPair, byte: u8) -> Result<u8> {
        self.apply(key, Direction::Decrypt, byte)
    }

    /// Encrypt or decrypt a single byte.
    pub fn apply(&self, key: &KeyPair, direction: Direction, byte: u8) -> Result<u8> {
        let exponent = self.exponent(key, direction)?;
        self.permute(exponent, byte)
    }

    /// The full byte permutation for `key` in the given direction.
    ///
    /// `table[x]` is the image of byte `x`.
    pub fn substitution_table(
        &self,
        key: &KeyPair,
        direction: Direction,
    ) -> Result<[u8; SYMBOLS]> {
        let exponent = self.exponent(key, direction)?;
        let mut table = [0u8; SYMBOLS];
        for (byte, entry) in (0..=u8::MAX).zip(table.iter_mut()) {
            *entry = self.permute(exponent, byte)?;
        }
        Ok(table)
    }

    /// Encrypt every byte of `buffer` in place.
    pub fn encrypt_in_place(&self, key: &KeyPair, buffer: &mut [u8]) -> Result<()> {
        self.substitute(key, Direction::Encrypt, buffer)
    }

    /// Decrypt every byte of `buffer` in place.
    pub fn decrypt_in_place(&self, key: &KeyPair, buffer: &mut [u8]) -> Result<()> {
        self.substitute(key, Direction::Decrypt, buffer)
    }

    fn substitute(&self, key: &KeyPair, direction: Direction, buffer: &mut [u8]) -> Result<()> {
        let table = self.substitution_table(key, direction)?;
        for byte in buffer {
            *byte = table[usize::from(*byte)];
        }
        Ok(())
    }

    fn exponent(&self, key: &KeyPair, direction: Direction) -> Result<Word> {
        if key.order() != self.encoder.group_order() {
            return Err(Error::KeyMismatch);
        }

        Ok(match direction {
            Direction::Encrypt => key.public_exponent(),
            Direction::Decrypt => key.private_exponent(),
        })
    }

    fn permute(&self, exponent: Word, byte: u8) -> Result<u8> {
        let mut point = self.encoder.encode(byte);

        // The orbit of `point` has at most `group_order` elements.
        for _ in 0..self.encoder.group_order() {
            point *= exponent;
            if let Some(image) = self.encoder.decode(&point) {
                return Ok(image);
            }
        }

        Err(Error::EncodingNotFound)
    }
}
