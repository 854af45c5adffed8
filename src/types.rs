use zeroize::{Zeroize, ZeroizeOnDrop};


/// Correctly sized private key specific to the target security parameter set;
/// the four n-byte elements `(SK.seed, SK.prf, PK.seed, PK.root)` of FIPS 205
/// section 9.1. The `SIG_LEN` parameter ties the key to its parameter set, as
/// the 's' and 'f' sets of one security category share the same `n`. <br>
/// Implements the [`crate::traits::Signer`] and [`crate::traits::SerDes`] traits.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey<const N: usize, const SIG_LEN: usize> {
    pub(crate) sk_seed: [u8; N],
    pub(crate) sk_prf: [u8; N],
    pub(crate) pk_seed: [u8; N],
    pub(crate) pk_root: [u8; N],
}


/// Correctly sized public key specific to the target security parameter set;
/// the two n-byte elements `(PK.seed, PK.root)` of FIPS 205 section 9.1. The
/// `SIG_LEN` parameter ties the key to its parameter set, as the 's' and 'f'
/// sets of one security category share the same `n`. <br>
/// Implements the [`crate::traits::Verifier`] and [`crate::traits::SerDes`] traits.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PublicKey<const N: usize, const SIG_LEN: usize> {
    pub(crate) pk_seed: [u8; N],
    pub(crate) pk_root: [u8; N],
}


/// Parameters of one SLH-DSA parameter set; see FIPS 205 table 2 on page 39.
/// Returned by [`crate::parameter_set()`] for callers that select a scheme by
/// numeric identifier at a serialization boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamSet {
    /// Canonical parameter set name, e.g. `"SLH-DSA-SHAKE-128s"`.
    pub name: &'static str,
    /// Security parameter: hash output and seed length in bytes.
    pub n: u32,
    /// Total hypertree height.
    pub h: u32,
    /// Number of hypertree layers.
    pub d: u32,
    /// Height of each XMSS subtree (`h' = h/d`).
    pub h_prime: u32,
    /// Height of each FORS tree.
    pub a: u32,
    /// Number of FORS trees.
    pub k: u32,
    /// Winternitz parameter exponent (`w = 2^lg_w`).
    pub lg_w: u32,
    /// Message digest length in bytes.
    pub m: u32,
    /// NIST security strength category (1, 3 or 5).
    pub security_category: u32,
    /// Public key length in bytes.
    pub pk_bytes: usize,
    /// Private (secret) key length in bytes.
    pub sk_bytes: usize,
    /// Signature length in bytes.
    pub sig_bytes: usize,
}
