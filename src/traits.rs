use rand_core::CryptoRngCore;
#[cfg(feature = "default-rng")]
use rand_core::OsRng;


/// The `KeyGen` trait is defined to allow trait objects.
pub trait KeyGen {
    /// A public key specific to the chosen security parameter set, e.g.,
    /// `slh-dsa-shake-128s` or `slh-dsa-shake-256f`
    type PublicKey;
    /// A private (secret) key specific to the chosen security parameter set,
    /// e.g., `slh-dsa-shake-128s` or `slh-dsa-shake-256f`
    type PrivateKey;
    /// An n-byte seed array sized for the chosen security parameter set
    type Seed;

    /// Generates a public and private key pair specific to this security parameter set. <br>
    /// This function utilizes the **OS default** random number generator. It draws the three
    /// n-byte seeds and derives the hypertree root, so its runtime is that of one full
    /// subtree computation.
    /// # Errors
    /// Returns an error when the random number generator fails.
    /// # Examples
    /// ```rust
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// # #[cfg(all(feature = "slh-dsa-shake-128f", feature = "default-rng"))] {
    /// use fips205::slh_dsa_shake_128f; // Could also be slh_dsa_shake_256s, etc.
    /// use fips205::traits::{KeyGen, SerDes, Signer, Verifier};
    ///
    /// let message = [0u8, 1, 2, 3, 4, 5, 6, 7];
    ///
    /// // Generate key pair and signature
    /// let (pk, sk) = slh_dsa_shake_128f::KG::try_keygen()?; // Generate both public and secret keys
    /// let sig = sk.try_sign(&message, &[])?; // Use the secret key to generate a message signature
    /// # }
    /// # Ok(())}
    /// ```
    #[cfg(feature = "default-rng")]
    fn try_keygen() -> Result<(Self::PublicKey, Self::PrivateKey), &'static str> {
        Self::try_keygen_with_rng(&mut OsRng)
    }

    /// Generates a public and private key pair specific to this security parameter set. <br>
    /// This function utilizes the **provided** random number generator.
    /// # Errors
    /// Returns an error when the random number generator fails.
    /// # Examples
    /// ```rust
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// # #[cfg(feature = "slh-dsa-shake-128f")] {
    /// use fips205::slh_dsa_shake_128f; // Could also be slh_dsa_shake_256s, etc.
    /// use fips205::traits::{KeyGen, SerDes, Signer, Verifier};
    /// use rand_chacha::rand_core::SeedableRng;
    ///
    /// let message = [0u8, 1, 2, 3, 4, 5, 6, 7];
    /// let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(123);
    ///
    /// // Generate key pair and signature
    /// let (pk, sk) = slh_dsa_shake_128f::KG::try_keygen_with_rng(&mut rng)?;
    /// let sig = sk.try_sign_with_rng(&mut rng, &message, &[])?;
    /// # }
    /// # Ok(())}
    /// ```
    fn try_keygen_with_rng(
        rng: &mut impl CryptoRngCore,
    ) -> Result<(Self::PublicKey, Self::PrivateKey), &'static str>;

    /// Generates a key pair deterministically from the three n-byte seeds
    /// `(SK.seed, SK.prf, PK.seed)`; the `slh_keygen_internal` entry of FIPS 205
    /// Algorithm 18. Intended for reproducible keys and test vectors; normal
    /// callers should prefer `try_keygen()`.
    fn keygen_from_seed(
        sk_seed: &Self::Seed, sk_prf: &Self::Seed, pk_seed: &Self::Seed,
    ) -> (Self::PublicKey, Self::PrivateKey);
}


/// The Signer trait is implemented for the `PrivateKey` struct on each of the security parameter sets.
pub trait Signer {
    /// The signature byte array is specific to the chosen security parameter set,
    /// e.g., `slh-dsa-shake-128s` or `slh-dsa-shake-256f`
    type Signature;
    /// A public key specific to the chosen security parameter set
    type PublicKey;

    /// Attempt to sign the given message, returning a digital signature on success, or an
    /// error if something went wrong. This is the hedged variant: it draws fresh `addrnd`
    /// randomness from the **OS default** random number generator per FIPS 205 Algorithm 22.
    ///
    /// # Errors
    /// Returns an error when the random number generator fails or the context exceeds 255 bytes.
    /// # Examples
    /// ```rust
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// # #[cfg(all(feature = "slh-dsa-shake-128f", feature = "default-rng"))] {
    /// use fips205::slh_dsa_shake_128f; // Could also be slh_dsa_shake_256s, etc.
    /// use fips205::traits::{KeyGen, SerDes, Signer, Verifier};
    ///
    /// let message = [0u8, 1, 2, 3, 4, 5, 6, 7];
    ///
    /// // Generate key pair and signature
    /// let (pk, sk) = slh_dsa_shake_128f::try_keygen()?; // Generate both public and secret keys
    /// let sig = sk.try_sign(&message, &[])?; // Use the secret key to generate a message signature
    /// let verified = pk.verify(&message, &sig, &[]);
    /// assert!(verified);
    /// # }
    /// # Ok(())}
    /// ```
    #[cfg(feature = "default-rng")]
    fn try_sign(&self, message: &[u8], ctx: &[u8]) -> Result<Self::Signature, &'static str> {
        self.try_sign_with_rng(&mut OsRng, message, ctx)
    }

    /// Attempt to sign the given message, returning a digital signature on success, or an
    /// error if something went wrong. This is the hedged variant with the `addrnd`
    /// randomness drawn from the **provided** random number generator.
    ///
    /// # Errors
    /// Returns an error when the random number generator fails or the context exceeds 255 bytes.
    fn try_sign_with_rng(
        &self, rng: &mut impl CryptoRngCore, message: &[u8], ctx: &[u8],
    ) -> Result<Self::Signature, &'static str>;

    /// Attempt to sign the given message with the deterministic variant of FIPS 205
    /// section 10.2.2: `addrnd` is replaced by `PK.seed`, so the same message and context
    /// always produce the same signature. This forgoes the hedge against fault and
    /// side-channel attacks; prefer `try_sign()` where a random number generator is available.
    ///
    /// # Errors
    /// Returns an error when the context exceeds 255 bytes.
    fn try_sign_deterministic(
        &self, message: &[u8], ctx: &[u8],
    ) -> Result<Self::Signature, &'static str>;

    /// Retrieves the public key associated with this private key; both n-byte public
    /// elements are carried inside the private key, so this involves no computation.
    fn get_public_key(&self) -> Self::PublicKey;
}


/// The Verifier trait is implemented for `PublicKey` on each of the security parameter sets.
pub trait Verifier {
    /// Verifies a digital signature with respect to a `PublicKey`. The signature arrives
    /// as an untyped byte slice: a length other than the parameter set's `sig_bytes`, or a
    /// context longer than 255 bytes, yields `false` rather than an error (no verify oracle).
    ///
    /// # Examples
    /// ```rust
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// # #[cfg(all(feature = "slh-dsa-shake-128f", feature = "default-rng"))] {
    /// use fips205::slh_dsa_shake_128f; // Could also be slh_dsa_shake_256s, etc.
    /// use fips205::traits::{KeyGen, SerDes, Signer, Verifier};
    ///
    /// let message = [0u8, 1, 2, 3, 4, 5, 6, 7];
    ///
    /// // Generate key pair and signature
    /// let (pk, sk) = slh_dsa_shake_128f::try_keygen()?; // Generate both public and secret keys
    /// let sig = sk.try_sign(&message, &[])?; // Use the secret key to generate a message signature
    /// let verified = pk.verify(&message, &sig, &[]); // Use the public key to verify
    /// assert!(verified);
    /// # }
    /// # Ok(())}
    /// ```
    fn verify(&self, message: &[u8], signature: &[u8], ctx: &[u8]) -> bool;
}


/// The `SerDes` trait provides for validated serialization and deserialization of
/// fixed-size elements. Deserialization performs an exact length check before anything
/// else; FIPS 205 requires no further public-key validity checks, but a `Result` is
/// returned to preserve the ability to add future checks.
pub trait SerDes {
    /// The fixed-size byte array to be serialized or deserialized
    type ByteArray;

    /// Produces a byte array of fixed-size specific to the struct being serialized.
    /// # Examples
    /// ```rust
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// # #[cfg(all(feature = "slh-dsa-shake-128f", feature = "default-rng"))] {
    /// use fips205::slh_dsa_shake_128f; // Could also be slh_dsa_shake_256s, etc.
    /// use fips205::traits::{KeyGen, SerDes, Signer, Verifier};
    ///
    /// // Generate key pair and serialize both
    /// let (pk, sk) = slh_dsa_shake_128f::try_keygen()?;
    /// let pk_bytes = pk.into_bytes(); // Serialize the public key
    /// let sk_bytes = sk.into_bytes(); // Serialize the private key
    /// # }
    /// # Ok(())}
    /// ```
    fn into_bytes(self) -> Self::ByteArray;

    /// Consumes a byte slice and returns the deserialized struct; a slice whose length
    /// differs from the expected fixed size is rejected before any further processing.
    /// # Errors
    /// Returns an error on malformed input length.
    /// # Examples
    /// ```rust
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// # #[cfg(all(feature = "slh-dsa-shake-128f", feature = "default-rng"))] {
    /// use fips205::slh_dsa_shake_128f; // Could also be slh_dsa_shake_256s, etc.
    /// use fips205::traits::{KeyGen, SerDes, Signer, Verifier};
    ///
    /// // Generate key pair, serialize, then deserialize both
    /// let (pk, sk) = slh_dsa_shake_128f::try_keygen()?;
    /// let pk_bytes = pk.into_bytes();
    /// let sk_bytes = sk.into_bytes();
    /// let pk2 = slh_dsa_shake_128f::PublicKey::try_from_bytes(&pk_bytes)?;
    /// let sk2 = slh_dsa_shake_128f::PrivateKey::try_from_bytes(&sk_bytes)?;
    /// # }
    /// # Ok(())}
    /// ```
    fn try_from_bytes(ba: &[u8]) -> Result<Self, &'static str>
    where
        Self: Sized;
}
