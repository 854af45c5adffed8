#![no_std]
#![deny(clippy::pedantic, warnings, missing_docs, unsafe_code)]
// Almost all of the 'allow' category...
#![deny(absolute_paths_not_starting_with_crate, dead_code)]
#![deny(elided_lifetimes_in_paths, explicit_outlives_requirements, keyword_idents)]
#![deny(let_underscore_drop, macro_use_extern_crate, meta_variable_misuse, missing_abi)]
#![deny(non_ascii_idents, rust_2021_incompatible_closure_captures)]
#![deny(rust_2021_incompatible_or_patterns, rust_2021_prefixes_incompatible_syntax)]
#![deny(rust_2021_prelude_collisions, single_use_lifetimes, trivial_casts)]
#![deny(trivial_numeric_casts, unreachable_pub, unsafe_op_in_unsafe_fn, unstable_features)]
#![deny(unused_extern_crates, unused_import_braces, unused_lifetimes, unused_macro_rules)]
#![deny(unused_qualifications, unused_results, variant_size_differences)]
//
#![doc = include_str!("../README.md")]


// TODO Roadmap
//  1. Always more testing...
//  2. Iterative treehash to flatten the recursion in xmss_node/fors_node


// Implements FIPS 205 Stateless Hash-Based Digital Signature Standard.
// See <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.205.pdf>

// Functionality map per FIPS 205
//
// Algorithm 1 gen_len2(n, lg_w) on page 14                  --> precomputed; LEN2 below
// Algorithm 2 toInt(X, n) on page 14                        --> helpers.rs
// Algorithm 3 toByte(x, n) on page 15                       --> helpers.rs
// Algorithm 4 base_2b(X, b, out_len) on page 15             --> helpers.rs
// Algorithm 5 chain(X, i, s, PK.seed, ADRS) on page 18      --> wots.rs
// Algorithm 6 wots_pkGen(SK.seed, PK.seed, ADRS) on page 18 --> wots.rs
// Algorithm 7 wots_sign(M, SK.seed, PK.seed, ADRS) page 19  --> wots.rs
// Algorithm 8 wots_pkFromSig(sig, M, PK.seed, ADRS) page 20 --> wots.rs
// Algorithm 9 xmss_node(SK.seed, i, z, PK.seed, ADRS) p. 22 --> xmss.rs
// Algorithm 10 xmss_sign(M, SK.seed, idx, ...) on page 23   --> xmss.rs
// Algorithm 11 xmss_pkFromSig(idx, SIG_XMSS, M, ...) p. 24  --> xmss.rs
// Algorithm 12 ht_sign(M, SK.seed, PK.seed, ...) on page 27 --> hypertree.rs
// Algorithm 13 ht_verify(M, SIG_HT, PK.seed, ...) page 28   --> hypertree.rs
// Algorithm 14 fors_skGen(SK.seed, PK.seed, ADRS, idx) p.29 --> fors.rs
// Algorithm 15 fors_node(SK.seed, i, z, PK.seed, ADRS) p.30 --> fors.rs
// Algorithm 16 fors_sign(md, SK.seed, PK.seed, ADRS) p. 31  --> fors.rs
// Algorithm 17 fors_pkFromSig(SIG_FORS, md, ...) on page 32 --> fors.rs
// Algorithm 18 slh_keygen_internal(...) on page 35          --> slh_dsa.rs
// Algorithm 19 slh_sign_internal(M, SK, addrnd) on page 36  --> slh_dsa.rs
// Algorithm 20 slh_verify_internal(M, SIG, PK) on page 38   --> slh_dsa.rs
// Algorithm 21 slh_keygen() on page 39                      --> slh_dsa.rs
// Algorithm 22 slh_sign(M, ctx, SK) on page 39              --> lib.rs
// Algorithm 23 hash_slh_sign(M, ctx, PH, SK) on page 40     --> pre-hash variants not implemented
// Algorithm 24 slh_verify(M, SIG, ctx, PK) on page 41       --> lib.rs
// The hash functions of section 11.1 are in hashing.rs, the ADRS structure of
// section 4.2 is in address.rs. Types are in types.rs, traits are in traits.rs...

// Note that debug_assert! statements enforce correct program construction and are not involved
// in any operational dataflow. The ensure! statements implement conservative dataflow
// validation and do not panic. Separately, functions are only generic over security
// parameters that are directly involved in memory allocation (on the stack); tree heights
// and layer counts travel as runtime arguments.

/// The `rand_core` types are re-exported so that users of fips205 do not
/// have to worry about using the exact correct version of `rand_core`.
pub use rand_core::{CryptoRng, Error as RngError, RngCore};

mod address;
mod fors;
mod hashing;
mod helpers;
mod hypertree;
mod slh_dsa;
mod types;
mod wots;
mod xmss;

/// All functionality is covered by traits, such that consumers can utilize trait objects as desired.
pub mod traits;
pub use crate::types::ParamSet;

// Applies across all security parameter sets; see table 2 on page 39 (lg_w is
// 4, hence w is 16 and len_2 is 3, for every approved parameter set)
const LG_W: u32 = 4;
const W: u32 = 16;
const LEN2: usize = 3;


/// Returns the parameters of the SLH-DSA SHAKE parameter set with the given numeric
/// identifier, for callers that select a scheme at a serialization boundary:
/// 0 → 128s, 1 → 128f, 2 → 192s, 3 → 192f, 4 → 256s, 5 → 256f.
///
/// # Errors
/// Returns an error for identifiers above 5 and for identifiers whose parameter
/// set feature is not enabled.
pub fn parameter_set(id: u8) -> Result<&'static ParamSet, &'static str> {
    match id {
        #[cfg(feature = "slh-dsa-shake-128s")]
        0 => Ok(&slh_dsa_shake_128s::PARAMS),
        #[cfg(feature = "slh-dsa-shake-128f")]
        1 => Ok(&slh_dsa_shake_128f::PARAMS),
        #[cfg(feature = "slh-dsa-shake-192s")]
        2 => Ok(&slh_dsa_shake_192s::PARAMS),
        #[cfg(feature = "slh-dsa-shake-192f")]
        3 => Ok(&slh_dsa_shake_192f::PARAMS),
        #[cfg(feature = "slh-dsa-shake-256s")]
        4 => Ok(&slh_dsa_shake_256s::PARAMS),
        #[cfg(feature = "slh-dsa-shake-256f")]
        5 => Ok(&slh_dsa_shake_256f::PARAMS),
        _ => Err("unknown parameter set identifier"),
    }
}


// This common functionality is injected into each security parameter set namespace, and is
// largely a lightweight wrapper into the slh_dsa functions.
macro_rules! functionality {
    () => {
        use crate::helpers;
        use crate::slh_dsa;
        use crate::traits::{KeyGen, SerDes, Signer, Verifier};
        use rand_core::CryptoRngCore;
        use zeroize::{Zeroize, ZeroizeOnDrop};

        const LEN: usize = 2 * N + crate::LEN2; // len_1 = 2n for lg_w = 4; len = len_1 + len_2
        const _: () = assert!(H == HP * D, "the hypertree height must divide into d layers");


        // ----- 'EXTERNAL' DATA TYPES -----

        /// Empty struct to enable `KeyGen` trait objects across security parameter
        /// sets. Implements the [`crate::traits::KeyGen`] trait.
        #[derive(Zeroize, ZeroizeOnDrop)]
        pub struct KG();


        /// Private key specific to the target security parameter set; holds the
        /// `(SK.seed, SK.prf, PK.seed, PK.root)` elements.
        ///
        /// Implements the [`crate::traits::Signer`] and [`crate::traits::SerDes`] traits.
        // Note: #[derive(Zeroize, ZeroizeOnDrop)] is implemented on the underlying struct.
        pub type PrivateKey = crate::types::PrivateKey<N, SIG_LEN>;


        /// Public key specific to the target security parameter set; holds the
        /// `(PK.seed, PK.root)` elements.
        ///
        /// Implements the [`crate::traits::Verifier`] and [`crate::traits::SerDes`] traits.
        // Note: #[derive(Zeroize, ZeroizeOnDrop)] is implemented on the underlying struct.
        pub type PublicKey = crate::types::PublicKey<N, SIG_LEN>;


        // Note: (public) Signature is just a vanilla fixed-size byte array


        /// Parameters of this set per FIPS 205 table 2 on page 39; see [`crate::ParamSet`].
        #[allow(clippy::cast_possible_truncation)]
        pub const PARAMS: crate::ParamSet = crate::ParamSet {
            name: NAME,
            n: N as u32,
            h: H,
            d: D,
            h_prime: HP,
            a: A,
            k: K as u32,
            lg_w: crate::LG_W,
            m: M as u32,
            security_category: SEC_CAT,
            pk_bytes: PK_LEN,
            sk_bytes: SK_LEN,
            sig_bytes: SIG_LEN,
        };


        // ----- PRIMARY FUNCTIONS ---

        /// # Algorithm 21: `slh_keygen()` on page 39.
        /// Generates a public-private key pair specific to this security parameter set.
        ///
        /// This function utilizes the **default OS** random number generator to draw the
        /// three n-byte seeds, then derives `PK.root` by computing the full top-layer
        /// XMSS subtree (so key generation costs one treehash).
        ///
        /// **Output**: Public key struct and private key struct.
        ///
        /// # Errors
        /// Returns an error if the random number generator fails.
        ///
        /// # Examples
        /// ```rust
        /// # use std::error::Error;
        /// # fn main() -> Result<(), Box<dyn Error>> {
        /// # #[cfg(all(feature = "slh-dsa-shake-128f", feature = "default-rng"))] {
        /// use fips205::slh_dsa_shake_128f; // Could also be slh_dsa_shake_256s, etc.
        /// use fips205::traits::{SerDes, Signer, Verifier};
        ///
        /// let message = [0u8, 1, 2, 3, 4, 5, 6, 7];
        ///
        /// // Generate key pair and signature
        /// let (pk, sk) = slh_dsa_shake_128f::try_keygen()?;  // Generate both public and secret keys
        /// let sig = sk.try_sign(&message, &[])?;  // Use the secret key to generate a message signature
        /// assert!(pk.verify(&message, &sig, &[]));
        /// # }
        /// # Ok(())}
        /// ```
        #[cfg(feature = "default-rng")]
        pub fn try_keygen() -> Result<(PublicKey, PrivateKey), &'static str> { KG::try_keygen() }


        /// # Algorithm 21: `slh_keygen()` on page 39.
        /// Generates a public-private key pair specific to this security parameter set.
        ///
        /// This function utilizes the **provided** random number generator to draw the
        /// three n-byte seeds, then derives `PK.root` by computing the full top-layer
        /// XMSS subtree (so key generation costs one treehash).
        ///
        /// **Output**: Public key struct and private key struct.
        ///
        /// # Errors
        /// Returns an error if the random number generator fails.
        ///
        /// # Examples
        /// ```rust
        /// # use std::error::Error;
        /// # fn main() -> Result<(), Box<dyn Error>> {
        /// # #[cfg(feature = "slh-dsa-shake-128f")] {
        /// use fips205::slh_dsa_shake_128f; // Could also be slh_dsa_shake_256s, etc.
        /// use fips205::traits::{SerDes, Signer, Verifier};
        /// use rand_chacha::rand_core::SeedableRng;
        ///
        /// let message = [0u8, 1, 2, 3, 4, 5, 6, 7];
        /// let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(123);
        ///
        /// // Generate key pair and signature
        /// let (pk, sk) = slh_dsa_shake_128f::try_keygen_with_rng(&mut rng)?;
        /// let sig = sk.try_sign_with_rng(&mut rng, &message, &[])?;
        /// assert!(pk.verify(&message, &sig, &[]));
        /// # }
        /// # Ok(())}
        /// ```
        pub fn try_keygen_with_rng(
            rng: &mut impl CryptoRngCore,
        ) -> Result<(PublicKey, PrivateKey), &'static str> {
            KG::try_keygen_with_rng(rng)
        }


        impl KeyGen for KG {
            type PrivateKey = PrivateKey;
            type PublicKey = PublicKey;
            type Seed = [u8; N];


            /// # Algorithm 21 in `KeyGen` trait
            fn try_keygen_with_rng(
                rng: &mut impl CryptoRngCore,
            ) -> Result<(PublicKey, PrivateKey), &'static str> {
                slh_dsa::key_gen::<N, LEN, SIG_LEN>(rng, HP, D)
            }

            /// # Algorithm 18 in `KeyGen` trait
            fn keygen_from_seed(
                sk_seed: &Self::Seed, sk_prf: &Self::Seed, pk_seed: &Self::Seed,
            ) -> (PublicKey, PrivateKey) {
                slh_dsa::key_gen_internal::<N, LEN, SIG_LEN>(sk_seed, sk_prf, pk_seed, HP, D)
            }
        }


        impl Signer for PrivateKey {
            type PublicKey = PublicKey;
            type Signature = [u8; SIG_LEN];

            /// # Algorithm 22: `slh_sign(M, ctx, SK)` on page 39.
            /// Generates a hedged SLH-DSA signature.
            ///
            /// **Input**:  Implemented on private key struct,
            ///             message `𝑀 ∈ {0, 1}∗`,
            ///             context string `ctx` (a byte string of 255 or fewer bytes). <br>
            /// **Output**: Signature `SIG ∈ 𝔹^{(1+𝑘(1+𝑎)+ℎ+𝑑·len)·𝑛}`.
            ///
            /// # Errors
            /// Returns an error when the random number generator fails or context too long.
            #[allow(clippy::cast_possible_truncation)]
            fn try_sign_with_rng(
                &self, rng: &mut impl CryptoRngCore, message: &[u8], ctx: &[u8],
            ) -> Result<Self::Signature, &'static str> {
                // 1: if |ctx| > 255 then
                // 2:   return ⊥    ▷ return an error indication if the context string is too long
                // 3: end if
                helpers::ensure!(
                    ctx.len() < 256,
                    "SLH-DSA.Sign: context string exceeds 255 bytes"
                );

                // 4:  (blank line in the standard)

                // 5: addrnd ← 𝔹^𝑛    ▷ skipped for the deterministic variant
                // 6: if addrnd = NULL then
                // 7:   return ⊥    ▷ return an error indication if random bit generation failed
                // 8: end if
                let mut addrnd = [0u8; N];
                rng.try_fill_bytes(&mut addrnd)
                    .map_err(|_| "SLH-DSA.Sign: random number generator failed")?;

                // 9:  (blank line in the standard)

                // 10: 𝑀′ ← toByte(0, 1) ∥ toByte(|𝑐𝑡𝑥|, 1) ∥ 𝑐𝑡𝑥 ∥ 𝑀
                // 11: SIG ← slh_sign_internal(𝑀′, SK, 𝑎𝑑𝑑𝑟𝑛𝑑)
                let sig = slh_dsa::sign_internal::<N, LEN, M, K, SIG_LEN>(
                    self,
                    &[&[0u8], &[ctx.len() as u8], ctx, message],
                    &addrnd,
                    HP,
                    D,
                    A,
                );

                // 12: return SIG
                Ok(sig)
            }

            /// # Algorithm 22: `slh_sign(M, ctx, SK)` on page 39, deterministic variant.
            /// Generates a deterministic SLH-DSA signature per section 10.2.2: `addrnd`
            /// is substituted by `PK.seed`, so a given message, context and key always
            /// produce the same signature.
            ///
            /// # Errors
            /// Returns an error when the context is too long.
            #[allow(clippy::cast_possible_truncation)]
            fn try_sign_deterministic(
                &self, message: &[u8], ctx: &[u8],
            ) -> Result<Self::Signature, &'static str> {
                helpers::ensure!(
                    ctx.len() < 256,
                    "SLH-DSA.Sign: context string exceeds 255 bytes"
                );
                let opt_rand = self.pk_seed;
                let sig = slh_dsa::sign_internal::<N, LEN, M, K, SIG_LEN>(
                    self,
                    &[&[0u8], &[ctx.len() as u8], ctx, message],
                    &opt_rand,
                    HP,
                    D,
                    A,
                );
                Ok(sig)
            }

            // Documented in traits.rs
            fn get_public_key(&self) -> Self::PublicKey {
                PublicKey { pk_seed: self.pk_seed, pk_root: self.pk_root }
            }
        }


        impl Verifier for PublicKey {
            /// # Algorithm 24: `slh_verify(M, SIG, ctx, PK)` on page 41.
            /// Verifies a signature `SIG` for a message `M`. A context longer than 255
            /// bytes or a signature slice of the wrong length yields `false`.
            #[allow(clippy::cast_possible_truncation)]
            fn verify(&self, message: &[u8], signature: &[u8], ctx: &[u8]) -> bool {
                // 1: if |ctx| > 255 then
                // 2:   return false
                // 3: end if
                if ctx.len() > 255 {
                    return false;
                };

                // 4:  (blank line in the standard)

                // 5: 𝑀′ ← toByte(0, 1) ∥ toByte(|𝑐𝑡𝑥|, 1) ∥ 𝑐𝑡𝑥 ∥ 𝑀
                // 6: return slh_verify_internal(𝑀′, SIG, PK)
                slh_dsa::verify_internal::<N, LEN, M, K, SIG_LEN>(
                    self,
                    &[&[0u8], &[ctx.len() as u8], ctx, message],
                    signature,
                    HP,
                    D,
                    A,
                )
            }
        }


        // ----- SERIALIZATION AND DESERIALIZATION ---

        impl SerDes for PrivateKey {
            type ByteArray = [u8; SK_LEN];


            fn try_from_bytes(sk: &[u8]) -> Result<Self, &'static str> {
                helpers::ensure!(sk.len() == SK_LEN, "invalid private key length");
                let mut key = PrivateKey {
                    sk_seed: [0u8; N],
                    sk_prf: [0u8; N],
                    pk_seed: [0u8; N],
                    pk_root: [0u8; N],
                };
                key.sk_seed.copy_from_slice(&sk[0..N]);
                key.sk_prf.copy_from_slice(&sk[N..2 * N]);
                key.pk_seed.copy_from_slice(&sk[2 * N..3 * N]);
                key.pk_root.copy_from_slice(&sk[3 * N..4 * N]);
                Ok(key)
            }


            fn into_bytes(self) -> Self::ByteArray {
                let mut ba = [0u8; SK_LEN];
                ba[0..N].copy_from_slice(&self.sk_seed);
                ba[N..2 * N].copy_from_slice(&self.sk_prf);
                ba[2 * N..3 * N].copy_from_slice(&self.pk_seed);
                ba[3 * N..4 * N].copy_from_slice(&self.pk_root);
                ba
            }
        }


        impl SerDes for PublicKey {
            type ByteArray = [u8; PK_LEN];


            fn try_from_bytes(pk: &[u8]) -> Result<Self, &'static str> {
                helpers::ensure!(pk.len() == PK_LEN, "invalid public key length");
                let mut key = PublicKey { pk_seed: [0u8; N], pk_root: [0u8; N] };
                key.pk_seed.copy_from_slice(&pk[0..N]);
                key.pk_root.copy_from_slice(&pk[N..2 * N]);
                Ok(key)
            }


            fn into_bytes(self) -> Self::ByteArray {
                let mut ba = [0u8; PK_LEN];
                ba[0..N].copy_from_slice(&self.pk_seed);
                ba[N..2 * N].copy_from_slice(&self.pk_root);
                ba
            }
        }


    };
}


/// # Functionality for the **SLH-DSA-SHAKE-128s** security parameter set.
///
/// This includes specific sizes for the public key, secret key, and signature
/// along with a number of internal constants. The SLH-DSA-SHAKE-128s parameter
/// set is claimed to be in security strength category 1; it is the 'small'
/// variant, trading slower signing for the shortest signatures at this strength.
///
/// **1)** The basic usage is for an originator to start with the [`slh_dsa_shake_128s::try_keygen`] function below to
/// generate both [`slh_dsa_shake_128s::PublicKey`] and [`slh_dsa_shake_128s::PrivateKey`] structs. The resulting
/// [`slh_dsa_shake_128s::PrivateKey`] struct implements the [`traits::Signer`] trait which supplies a variety of
/// functions to sign byte-array messages, such as [`traits::Signer::try_sign()`].
///
/// **2)** Both of the `PrivateKey` and `PublicKey` structs implement the [`traits::SerDes`] trait.
/// The originator utilizes the [`traits::SerDes::into_bytes()`] functions to serialize the structs
/// into byte-arrays for storage and/or transmission, similar to the message. Upon retrieval and/or receipt,
/// the remote party utilizes the [`traits::SerDes::try_from_bytes()`] functions to deserialize the
/// byte-arrays into structs.
///
/// **3)** Finally, the remote party uses the [`traits::Verifier::verify()`] function implemented on the
/// [`slh_dsa_shake_128s::PublicKey`] struct to verify the message with the `Signature` byte array.
///
/// See the top-level [crate] documentation for example code that implements the above flow.
#[cfg(feature = "slh-dsa-shake-128s")]
pub mod slh_dsa_shake_128s {
    const NAME: &str = "SLH-DSA-SHAKE-128s";
    const SEC_CAT: u32 = 1;
    const N: usize = 16;
    const H: u32 = 63;
    const D: u32 = 7;
    const HP: u32 = 9;
    const A: u32 = 12;
    const K: usize = 14;
    const M: usize = 30;
    /// Private (secret) key length in bytes.
    pub const SK_LEN: usize = 64;
    /// Public key length in bytes.
    pub const PK_LEN: usize = 32;
    /// Signature length in bytes.
    pub const SIG_LEN: usize = 7856;

    functionality!();
}


/// # Functionality for the **SLH-DSA-SHAKE-128f** security parameter set.
///
/// This includes specific sizes for the public key, secret key, and signature
/// along with a number of internal constants. The SLH-DSA-SHAKE-128f parameter
/// set is claimed to be in security strength category 1; it is the 'fast'
/// variant, trading longer signatures for much faster signing.
///
/// **1)** The basic usage is for an originator to start with the [`slh_dsa_shake_128f::try_keygen`] function below to
/// generate both [`slh_dsa_shake_128f::PublicKey`] and [`slh_dsa_shake_128f::PrivateKey`] structs. The resulting
/// [`slh_dsa_shake_128f::PrivateKey`] struct implements the [`traits::Signer`] trait which supplies a variety of
/// functions to sign byte-array messages, such as [`traits::Signer::try_sign()`].
///
/// **2)** Both of the `PrivateKey` and `PublicKey` structs implement the [`traits::SerDes`] trait.
/// The originator utilizes the [`traits::SerDes::into_bytes()`] functions to serialize the structs
/// into byte-arrays for storage and/or transmission, similar to the message. Upon retrieval and/or receipt,
/// the remote party utilizes the [`traits::SerDes::try_from_bytes()`] functions to deserialize the
/// byte-arrays into structs.
///
/// **3)** Finally, the remote party uses the [`traits::Verifier::verify()`] function implemented on the
/// [`slh_dsa_shake_128f::PublicKey`] struct to verify the message with the `Signature` byte array.
///
/// See the top-level [crate] documentation for example code that implements the above flow.
#[cfg(feature = "slh-dsa-shake-128f")]
pub mod slh_dsa_shake_128f {
    const NAME: &str = "SLH-DSA-SHAKE-128f";
    const SEC_CAT: u32 = 1;
    const N: usize = 16;
    const H: u32 = 66;
    const D: u32 = 22;
    const HP: u32 = 3;
    const A: u32 = 6;
    const K: usize = 33;
    const M: usize = 34;
    /// Private (secret) key length in bytes.
    pub const SK_LEN: usize = 64;
    /// Public key length in bytes.
    pub const PK_LEN: usize = 32;
    /// Signature length in bytes.
    pub const SIG_LEN: usize = 17088;

    functionality!();
}


/// # Functionality for the **SLH-DSA-SHAKE-192s** security parameter set.
///
/// This includes specific sizes for the public key, secret key, and signature
/// along with a number of internal constants. The SLH-DSA-SHAKE-192s parameter
/// set is claimed to be in security strength category 3; it is the 'small'
/// variant, trading slower signing for the shortest signatures at this strength.
///
/// **1)** The basic usage is for an originator to start with the [`slh_dsa_shake_192s::try_keygen`] function below to
/// generate both [`slh_dsa_shake_192s::PublicKey`] and [`slh_dsa_shake_192s::PrivateKey`] structs. The resulting
/// [`slh_dsa_shake_192s::PrivateKey`] struct implements the [`traits::Signer`] trait which supplies a variety of
/// functions to sign byte-array messages, such as [`traits::Signer::try_sign()`].
///
/// **2)** Both of the `PrivateKey` and `PublicKey` structs implement the [`traits::SerDes`] trait.
/// The originator utilizes the [`traits::SerDes::into_bytes()`] functions to serialize the structs
/// into byte-arrays for storage and/or transmission, similar to the message. Upon retrieval and/or receipt,
/// the remote party utilizes the [`traits::SerDes::try_from_bytes()`] functions to deserialize the
/// byte-arrays into structs.
///
/// **3)** Finally, the remote party uses the [`traits::Verifier::verify()`] function implemented on the
/// [`slh_dsa_shake_192s::PublicKey`] struct to verify the message with the `Signature` byte array.
///
/// See the top-level [crate] documentation for example code that implements the above flow.
#[cfg(feature = "slh-dsa-shake-192s")]
pub mod slh_dsa_shake_192s {
    const NAME: &str = "SLH-DSA-SHAKE-192s";
    const SEC_CAT: u32 = 3;
    const N: usize = 24;
    const H: u32 = 63;
    const D: u32 = 7;
    const HP: u32 = 9;
    const A: u32 = 14;
    const K: usize = 17;
    const M: usize = 39;
    /// Private (secret) key length in bytes.
    pub const SK_LEN: usize = 96;
    /// Public key length in bytes.
    pub const PK_LEN: usize = 48;
    /// Signature length in bytes.
    pub const SIG_LEN: usize = 16224;

    functionality!();
}


/// # Functionality for the **SLH-DSA-SHAKE-192f** security parameter set.
///
/// This includes specific sizes for the public key, secret key, and signature
/// along with a number of internal constants. The SLH-DSA-SHAKE-192f parameter
/// set is claimed to be in security strength category 3; it is the 'fast'
/// variant, trading longer signatures for much faster signing.
///
/// **1)** The basic usage is for an originator to start with the [`slh_dsa_shake_192f::try_keygen`] function below to
/// generate both [`slh_dsa_shake_192f::PublicKey`] and [`slh_dsa_shake_192f::PrivateKey`] structs. The resulting
/// [`slh_dsa_shake_192f::PrivateKey`] struct implements the [`traits::Signer`] trait which supplies a variety of
/// functions to sign byte-array messages, such as [`traits::Signer::try_sign()`].
///
/// **2)** Both of the `PrivateKey` and `PublicKey` structs implement the [`traits::SerDes`] trait.
/// The originator utilizes the [`traits::SerDes::into_bytes()`] functions to serialize the structs
/// into byte-arrays for storage and/or transmission, similar to the message. Upon retrieval and/or receipt,
/// the remote party utilizes the [`traits::SerDes::try_from_bytes()`] functions to deserialize the
/// byte-arrays into structs.
///
/// **3)** Finally, the remote party uses the [`traits::Verifier::verify()`] function implemented on the
/// [`slh_dsa_shake_192f::PublicKey`] struct to verify the message with the `Signature` byte array.
///
/// See the top-level [crate] documentation for example code that implements the above flow.
#[cfg(feature = "slh-dsa-shake-192f")]
pub mod slh_dsa_shake_192f {
    const NAME: &str = "SLH-DSA-SHAKE-192f";
    const SEC_CAT: u32 = 3;
    const N: usize = 24;
    const H: u32 = 66;
    const D: u32 = 22;
    const HP: u32 = 3;
    const A: u32 = 8;
    const K: usize = 33;
    const M: usize = 42;
    /// Private (secret) key length in bytes.
    pub const SK_LEN: usize = 96;
    /// Public key length in bytes.
    pub const PK_LEN: usize = 48;
    /// Signature length in bytes.
    pub const SIG_LEN: usize = 35664;

    functionality!();
}


/// # Functionality for the **SLH-DSA-SHAKE-256s** security parameter set.
///
/// This includes specific sizes for the public key, secret key, and signature
/// along with a number of internal constants. The SLH-DSA-SHAKE-256s parameter
/// set is claimed to be in security strength category 5; it is the 'small'
/// variant, trading slower signing for the shortest signatures at this strength.
///
/// **1)** The basic usage is for an originator to start with the [`slh_dsa_shake_256s::try_keygen`] function below to
/// generate both [`slh_dsa_shake_256s::PublicKey`] and [`slh_dsa_shake_256s::PrivateKey`] structs. The resulting
/// [`slh_dsa_shake_256s::PrivateKey`] struct implements the [`traits::Signer`] trait which supplies a variety of
/// functions to sign byte-array messages, such as [`traits::Signer::try_sign()`].
///
/// **2)** Both of the `PrivateKey` and `PublicKey` structs implement the [`traits::SerDes`] trait.
/// The originator utilizes the [`traits::SerDes::into_bytes()`] functions to serialize the structs
/// into byte-arrays for storage and/or transmission, similar to the message. Upon retrieval and/or receipt,
/// the remote party utilizes the [`traits::SerDes::try_from_bytes()`] functions to deserialize the
/// byte-arrays into structs.
///
/// **3)** Finally, the remote party uses the [`traits::Verifier::verify()`] function implemented on the
/// [`slh_dsa_shake_256s::PublicKey`] struct to verify the message with the `Signature` byte array.
///
/// See the top-level [crate] documentation for example code that implements the above flow.
#[cfg(feature = "slh-dsa-shake-256s")]
pub mod slh_dsa_shake_256s {
    const NAME: &str = "SLH-DSA-SHAKE-256s";
    const SEC_CAT: u32 = 5;
    const N: usize = 32;
    const H: u32 = 64;
    const D: u32 = 8;
    const HP: u32 = 8;
    const A: u32 = 14;
    const K: usize = 22;
    const M: usize = 47;
    /// Private (secret) key length in bytes.
    pub const SK_LEN: usize = 128;
    /// Public key length in bytes.
    pub const PK_LEN: usize = 64;
    /// Signature length in bytes.
    pub const SIG_LEN: usize = 29792;

    functionality!();
}


/// # Functionality for the **SLH-DSA-SHAKE-256f** security parameter set.
///
/// This includes specific sizes for the public key, secret key, and signature
/// along with a number of internal constants. The SLH-DSA-SHAKE-256f parameter
/// set is claimed to be in security strength category 5; it is the 'fast'
/// variant, trading longer signatures for much faster signing.
///
/// **1)** The basic usage is for an originator to start with the [`slh_dsa_shake_256f::try_keygen`] function below to
/// generate both [`slh_dsa_shake_256f::PublicKey`] and [`slh_dsa_shake_256f::PrivateKey`] structs. The resulting
/// [`slh_dsa_shake_256f::PrivateKey`] struct implements the [`traits::Signer`] trait which supplies a variety of
/// functions to sign byte-array messages, such as [`traits::Signer::try_sign()`].
///
/// **2)** Both of the `PrivateKey` and `PublicKey` structs implement the [`traits::SerDes`] trait.
/// The originator utilizes the [`traits::SerDes::into_bytes()`] functions to serialize the structs
/// into byte-arrays for storage and/or transmission, similar to the message. Upon retrieval and/or receipt,
/// the remote party utilizes the [`traits::SerDes::try_from_bytes()`] functions to deserialize the
/// byte-arrays into structs.
///
/// **3)** Finally, the remote party uses the [`traits::Verifier::verify()`] function implemented on the
/// [`slh_dsa_shake_256f::PublicKey`] struct to verify the message with the `Signature` byte array.
///
/// See the top-level [crate] documentation for example code that implements the above flow.
#[cfg(feature = "slh-dsa-shake-256f")]
pub mod slh_dsa_shake_256f {
    const NAME: &str = "SLH-DSA-SHAKE-256f";
    const SEC_CAT: u32 = 5;
    const N: usize = 32;
    const H: u32 = 68;
    const D: u32 = 17;
    const HP: u32 = 4;
    const A: u32 = 9;
    const K: usize = 35;
    const M: usize = 49;
    /// Private (secret) key length in bytes.
    pub const SK_LEN: usize = 128;
    /// Public key length in bytes.
    pub const PK_LEN: usize = 64;
    /// Signature length in bytes.
    pub const SIG_LEN: usize = 49856;

    functionality!();
}
