//! Three-message verification protocol.
//!
//! 1. The verifier blinds the signature with secret exponents `γ, δ` and
//!    sends the [`Challenge`] `z_i = s_i^γ · y^δ mod p`.
//! 2. The signer answers with the [`Response`] `w_i = z_i^(a⁻¹) mod p`.
//! 3. The verifier accepts iff `w_i = m_i^γ · α^δ mod p` for every `i`.
//!
//! The verifier's secrets live in [`PendingVerification`], which is consumed
//! by [`PendingVerification::finish`], so the messages can only be processed
//! in order and each challenge is answered at most once.

use crate::{Error, PublicKey, Result, SignedArtifact, SigningKey};
use alloc::vec::Vec;
use modfield::{Word, mod_mul, random_range};
use rand_core::CryptoRng;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// Blinded signature sent by the verifier to the signer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Challenge {
    values: Vec<u8>,
}

impl Challenge {
    /// Blinded signature values `z_i`.
    pub fn values(&self) -> &[u8] {
        &self.values
    }
}

/// Signer's answer to a [`Challenge`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Response {
    values: Vec<u8>,
}

impl Response {
    /// Wrap the values `w_i` returned by a signer.
    pub fn new(values: Vec<u8>) -> Self {
        Self { values }
    }

    /// Unblinded values `w_i`.
    pub fn values(&self) -> &[u8] {
        &self.values
    }
}

/// The signer's side of the protocol.
pub trait Confirm {
    /// Answer a verifier's challenge.
    fn respond(&self, challenge: &Challenge) -> Response;
}

impl Confirm for SigningKey {
    fn respond(&self, challenge: &Challenge) -> Response {
        let values = challenge
            .values
            .iter()
            .map(|&z| self.unblind(Word::from(z)) as u8)
            .collect();
        Response { values }
    }
}

/// Verifier state between sending a challenge and receiving the response.
pub struct PendingVerification<'a> {
    public: PublicKey,
    content: &'a [u8],
    gamma: Word,
    delta: Word,
}

impl<'a> PendingVerification<'a> {
    /// Draw the blinding exponents and build the challenge for `artifact`.
    pub fn new<R: CryptoRng + ?Sized>(
        public: &PublicKey,
        artifact: SignedArtifact<'a>,
        rng: &mut R,
    ) -> (Self, Challenge) {
        let q = public.q();
        // q >= 3 for every valid public key
        let gamma = random_range(rng, 1..q).unwrap_or(1);
        let delta = random_range(rng, 1..q).unwrap_or(1);

        let y_delta = public.pow(public.y(), delta);
        let values = artifact
            .signature()
            .iter()
            .map(|&s| blind(public, s, gamma, y_delta))
            .collect();

        let pending = Self {
            public: *public,
            content: artifact.content(),
            gamma,
            delta,
        };
        (pending, Challenge { values })
    }

    /// Check the signer's response.
    ///
    /// Returns the verified content, or [`Error::Rejected`].
    pub fn finish(self, response: &Response) -> Result<VerifiedArtifact<'a>> {
        let alpha_delta = self.public.pow(self.public.alpha(), self.delta);
        let expected: Vec<u8> = self
            .content
            .iter()
            .map(|&m| blind(&self.public, m, self.gamma, alpha_delta))
            .collect();

        if bool::from(expected.as_slice().ct_eq(response.values())) {
            Ok(VerifiedArtifact {
                content: self.content,
            })
        } else {
            Err(Error::Rejected)
        }
    }
}

impl Drop for PendingVerification<'_> {
    fn drop(&mut self) {
        self.gamma.zeroize();
        self.delta.zeroize();
    }
}

/// Computes `base^exp · factor mod p`.
fn blind(public: &PublicKey, base: u8, exp: Word, factor: Word) -> u8 {
    // p < 256
    mod_mul(public.pow(Word::from(base), exp), factor, public.p()) as u8
}

/// Content whose signature the signer has confirmed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VerifiedArtifact<'a> {
    content: &'a [u8],
}

impl<'a> VerifiedArtifact<'a> {
    /// The confirmed content, without marker or signature.
    pub fn content(&self) -> &'a [u8] {
        self.content
    }
}

/// Run the whole protocol against `signer`.
pub fn verify<'a, S, R>(
    signed: &'a [u8],
    public: &PublicKey,
    signer: &S,
    rng: &mut R,
) -> Result<VerifiedArtifact<'a>>
where
    S: Confirm + ?Sized,
    R: CryptoRng + ?Sized,
{
    let artifact = SignedArtifact::parse(signed)?;
    let (pending, challenge) = PendingVerification::new(public, artifact, rng);
    let response = signer.respond(&challenge);
    pending.finish(&response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    fn key() -> SigningKey {
        SigningKey::new(7, PublicKey::new(167, 5, 136).unwrap()).unwrap()
    }

    #[test]
    fn honest_round_trip() {
        let key = key();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let signed = key.sign(b"hello").unwrap();
        let artifact = SignedArtifact::parse(&signed).unwrap();

        let (pending, challenge) = PendingVerification::new(key.public_key(), artifact, &mut rng);
        assert_eq!(challenge.values().len(), 5);
        let response = key.respond(&challenge);
        let verified = pending.finish(&response).unwrap();
        assert_eq!(verified.content(), b"hello");
    }

    #[test]
    fn short_response_rejected() {
        let key = key();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let signed = key.sign(b"hello").unwrap();
        let artifact = SignedArtifact::parse(&signed).unwrap();

        let (pending, challenge) = PendingVerification::new(key.public_key(), artifact, &mut rng);
        let mut values = key.respond(&challenge).values().to_vec();
        values.pop();
        assert_eq!(pending.finish(&Response::new(values)), Err(Error::Rejected));
    }
}
