//! Signing and signed artifact layout.

use crate::{Error, Result, SigningKey};
use alloc::vec::Vec;
use modfield::Word;

/// Separator between content and signature in a signed artifact.
pub const MARKER: &[u8] = b"SSSSSIIIIIGGGGGNNNNN*****";

impl SigningKey {
    /// Sign `content`, producing `content || MARKER || signature`.
    ///
    /// Signature byte `i` is `content[i]^a mod p`. Content that already
    /// contains [`MARKER`] is refused with [`Error::AlreadySigned`].
    pub fn sign(&self, content: &[u8]) -> Result<Vec<u8>> {
        if find_marker(content).is_some() {
            return Err(Error::AlreadySigned);
        }

        let mut signed = Vec::with_capacity(2 * content.len() + MARKER.len());
        signed.extend_from_slice(content);
        signed.extend_from_slice(MARKER);
        signed.extend(content.iter().map(|&m| self.sign_byte(m)));
        Ok(signed)
    }

    fn sign_byte(&self, m: u8) -> u8 {
        // p < 256
        self.exponentiate(Word::from(m)) as u8
    }
}

/// A signed artifact split into its content and signature.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SignedArtifact<'a> {
    content: &'a [u8],
    signature: &'a [u8],
}

impl<'a> SignedArtifact<'a> {
    /// Split `signed` at the first [`MARKER`].
    ///
    /// Fails with [`Error::MalformedSignature`] if there is no marker or the
    /// signature is not exactly as long as the content.
    pub fn parse(signed: &'a [u8]) -> Result<Self> {
        let start = find_marker(signed).ok_or(Error::MalformedSignature)?;
        let content = &signed[..start];
        let signature = &signed[start + MARKER.len()..];

        if content.len() != signature.len() {
            return Err(Error::MalformedSignature);
        }

        Ok(Self { content, signature })
    }

    /// Signed content.
    pub fn content(&self) -> &'a [u8] {
        self.content
    }

    /// Signature, one byte per content byte.
    pub fn signature(&self) -> &'a [u8] {
        self.signature
    }
}

fn find_marker(haystack: &[u8]) -> Option<usize> {
    haystack
        .windows(MARKER.len())
        .position(|window| window == MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PublicKey;
    use hex_literal::hex;

    fn key() -> SigningKey {
        SigningKey::new(7, PublicKey::new(167, 5, 136).unwrap()).unwrap()
    }

    #[test]
    fn known_signature() {
        let signed = key().sign(b"hello").unwrap();
        let artifact = SignedArtifact::parse(&signed).unwrap();
        assert_eq!(artifact.content(), b"hello");
        assert_eq!(artifact.signature(), hex!("8a5b515149"));
        assert_eq!(signed.len(), 2 * 5 + MARKER.len());
    }

    #[test]
    fn empty_content() {
        let signed = key().sign(b"").unwrap();
        assert_eq!(signed, MARKER);
        let artifact = SignedArtifact::parse(&signed).unwrap();
        assert!(artifact.content().is_empty());
        assert!(artifact.signature().is_empty());
    }

    #[test]
    fn refuses_to_sign_twice() {
        let signed = key().sign(b"hello").unwrap();
        assert_eq!(key().sign(&signed), Err(Error::AlreadySigned));
    }

    #[test]
    fn malformed_artifacts() {
        assert_eq!(
            SignedArtifact::parse(b"hello"),
            Err(Error::MalformedSignature)
        );
        assert_eq!(
            SignedArtifact::parse(b"SSSSSIIIIIGGGGGNNNNN****"),
            Err(Error::MalformedSignature)
        );

        let mut signed = key().sign(b"hello").unwrap();
        signed.pop();
        assert_eq!(
            SignedArtifact::parse(&signed),
            Err(Error::MalformedSignature)
        );
    }
}
