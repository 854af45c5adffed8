// This file implements functionality from FIPS 205 sections 9/10: Key Generation,
// Signing, Verification (the internal algorithms; the context-string framing of
// Algorithms 21-24 is handled by the thin wrappers in lib.rs).

use crate::address::{Adrs, AdrsType};
use crate::fors;
use crate::hashing;
use crate::helpers::to_int;
use crate::hypertree;
use crate::types::{PrivateKey, PublicKey};
use rand_core::CryptoRngCore;
use zeroize::Zeroizing;


/// # Algorithm 18: `slh_keygen_internal(SK.seed, SK.prf, PK.seed)` on page 35.
/// Deterministic key generation from the three n-byte seeds.
pub(crate) fn key_gen_internal<const N: usize, const LEN: usize, const SIG_LEN: usize>(
    sk_seed: &[u8; N], sk_prf: &[u8; N], pk_seed: &[u8; N], hp: u32, d: u32,
) -> (PublicKey<N, SIG_LEN>, PrivateKey<N, SIG_LEN>) {
    // 1-6: PK.root ← root of the single XMSS tree at layer d − 1
    let pk_root = hypertree::ht_root::<N, LEN>(sk_seed, pk_seed, hp, d);

    // 7: return ((SK.seed, SK.prf, PK.seed, PK.root), (PK.seed, PK.root))
    (
        PublicKey { pk_seed: *pk_seed, pk_root },
        PrivateKey { sk_seed: *sk_seed, sk_prf: *sk_prf, pk_seed: *pk_seed, pk_root },
    )
}


/// # Algorithm 21: `slh_keygen()` on page 39.
/// Generates an SLH-DSA key pair from three fresh n-byte seeds.
///
/// # Errors
/// Returns an error when the random number generator fails.
pub(crate) fn key_gen<const N: usize, const LEN: usize, const SIG_LEN: usize>(
    rng: &mut impl CryptoRngCore, hp: u32, d: u32,
) -> Result<(PublicKey<N, SIG_LEN>, PrivateKey<N, SIG_LEN>), &'static str> {
    // 1-4: SK.seed, SK.prf, PK.seed ← B^n; error out if random bit generation failed
    let mut sk_seed = Zeroizing::new([0u8; N]);
    let mut sk_prf = Zeroizing::new([0u8; N]);
    let mut pk_seed = [0u8; N];
    rng.try_fill_bytes(&mut *sk_seed)
        .map_err(|_| "SLH-DSA.KeyGen: random number generator failed")?;
    rng.try_fill_bytes(&mut *sk_prf)
        .map_err(|_| "SLH-DSA.KeyGen: random number generator failed")?;
    rng.try_fill_bytes(&mut pk_seed)
        .map_err(|_| "SLH-DSA.KeyGen: random number generator failed")?;

    // 5: return slh_keygen_internal(SK.seed, SK.prf, PK.seed)
    Ok(key_gen_internal::<N, LEN, SIG_LEN>(&sk_seed, &sk_prf, &pk_seed, hp, d))
}


/// Splits the `H_msg` digest into `md ∥ idx_tree ∥ idx_leaf`; steps 7-10 of
/// Algorithm 19 and steps 10-13 of Algorithm 20. The split lands on byte
/// boundaries and the indices are reduced modulo `2^(h−h')` and `2^h'`.
#[allow(clippy::cast_possible_truncation)]
fn parse_digest<const K: usize>(digest: &[u8], hp: u32, d: u32, a: u32) -> (&[u8], u64, u32) {
    let md_len = (K * a as usize + 7) / 8;
    let tree_bits = hp * (d - 1);
    let tree_len = ((tree_bits + 7) / 8) as usize;
    let leaf_len = ((hp + 7) / 8) as usize;
    debug_assert_eq!(digest.len(), md_len + tree_len + leaf_len);

    let md = &digest[0..md_len];
    let mut idx_tree = to_int(&digest[md_len..md_len + tree_len]);
    // SLH-DSA-SHAKE-256f uses all 64 tree-index bits; the mask would overflow
    if tree_bits < 64 {
        idx_tree &= (1u64 << tree_bits) - 1;
    }
    let idx_leaf = (to_int(&digest[md_len + tree_len..]) & ((1 << hp) - 1)) as u32;
    (md, idx_tree, idx_leaf)
}


/// # Algorithm 19: `slh_sign_internal(M, SK, addrnd)` on page 36.
/// Signs the framed message `M′` (supplied as a list of byte slices). The
/// hedged variant passes fresh randomness as `addrnd`; the deterministic
/// variant passes `PK.seed`.
pub(crate) fn sign_internal<
    const N: usize,
    const LEN: usize,
    const M: usize,
    const K: usize,
    const SIG_LEN: usize,
>(
    sk: &PrivateKey<N, SIG_LEN>, m_prime: &[&[u8]], addrnd: &[u8; N], hp: u32, d: u32, a: u32,
) -> [u8; SIG_LEN] {
    let fors_len = K * (a as usize + 1) * N;
    let mut sig = [0u8; SIG_LEN];

    // 1-4: ADRS ← toByte(0, 32); opt_rand ← addrnd; R ← PRF_msg(SK.prf, opt_rand, M′)
    let r = hashing::prf_msg(&sk.sk_prf, addrnd, m_prime);

    // 5: SIG ← R
    sig[0..N].copy_from_slice(&r);

    // 6-10: digest ← H_msg(R, PK.seed, PK.root, M′); split into md ∥ idx_tree ∥ idx_leaf
    let digest: [u8; M] = hashing::h_msg(&r, &sk.pk_seed, &sk.pk_root, m_prime);
    let (md, idx_tree, idx_leaf) = parse_digest::<K>(&digest, hp, d, a);

    // 11-13: ADRS with tree idx_tree, type FORS_TREE, key pair idx_leaf
    let mut adrs = Adrs::new();
    adrs.set_tree_address(idx_tree);
    adrs.set_type_and_clear(AdrsType::ForsTree);
    adrs.set_key_pair_address(idx_leaf);

    // 14-15: SIG ← SIG ∥ fors_sign(md, SK.seed, PK.seed, ADRS)
    fors::fors_sign::<N, K>(&mut sig[N..N + fors_len], md, &sk.sk_seed, &sk.pk_seed, &adrs, a);

    // 16: PK_FORS ← fors_pkFromSig(SIG_FORS, md, PK.seed, ADRS)
    let pk_fors =
        fors::fors_pk_from_sig::<N, K>(&sig[N..N + fors_len], md, &sk.pk_seed, &adrs, a);

    // 17-18: SIG ← SIG ∥ ht_sign(PK_FORS, SK.seed, PK.seed, idx_tree, idx_leaf)
    hypertree::ht_sign::<N, LEN>(
        &mut sig[N + fors_len..],
        &pk_fors,
        &sk.sk_seed,
        &sk.pk_seed,
        idx_tree,
        idx_leaf,
        hp,
        d,
    );

    // 19: return SIG
    sig
}


/// # Algorithm 20: `slh_verify_internal(M, SIG, PK)` on page 38.
/// Verifies the framed message `M′` against an untyped signature slice; any
/// length other than `sig_bytes` is rejected up front.
pub(crate) fn verify_internal<
    const N: usize,
    const LEN: usize,
    const M: usize,
    const K: usize,
    const SIG_LEN: usize,
>(
    pk: &PublicKey<N, SIG_LEN>, m_prime: &[&[u8]], sig: &[u8], hp: u32, d: u32, a: u32,
) -> bool {
    let fors_len = K * (a as usize + 1) * N;
    let ht_len = (hp as usize + LEN) * N * d as usize;
    debug_assert_eq!(SIG_LEN, N + fors_len + ht_len);

    // 1-3: if |SIG| ≠ (1 + k(a + 1) + h + d·len) · n then return false
    if sig.len() != N + fors_len + ht_len {
        return false;
    }

    // 4-6: parse SIG as R ∥ SIG_FORS ∥ SIG_HT
    let mut r = [0u8; N];
    r.copy_from_slice(&sig[0..N]);
    let sig_fors = &sig[N..N + fors_len];
    let sig_ht = &sig[N + fors_len..];

    // 7-13: recompute the digest and indices
    let digest: [u8; M] = hashing::h_msg(&r, &pk.pk_seed, &pk.pk_root, m_prime);
    let (md, idx_tree, idx_leaf) = parse_digest::<K>(&digest, hp, d, a);

    // 14-16: ADRS with tree idx_tree, type FORS_TREE, key pair idx_leaf
    let mut adrs = Adrs::new();
    adrs.set_tree_address(idx_tree);
    adrs.set_type_and_clear(AdrsType::ForsTree);
    adrs.set_key_pair_address(idx_leaf);

    // 17: PK_FORS ← fors_pkFromSig(SIG_FORS, md, PK.seed, ADRS)
    let pk_fors = fors::fors_pk_from_sig::<N, K>(sig_fors, md, &pk.pk_seed, &adrs, a);

    // 18: return ht_verify(PK_FORS, SIG_HT, PK.seed, idx_tree, idx_leaf, PK.root)
    hypertree::ht_verify::<N, LEN>(
        &pk_fors, sig_ht, &pk.pk_seed, idx_tree, idx_leaf, &pk.pk_root, hp, d,
    )
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_split_masks_and_boundaries() {
        // SLH-DSA-SHAKE-128f geometry: k=33, a=6, h'=3, d=22, m=34
        let digest = [0xFFu8; 34];
        let (md, idx_tree, idx_leaf) = parse_digest::<33>(&digest, 3, 22, 6);
        assert_eq!(md.len(), 25); // ceil(33·6/8)
        assert_eq!(idx_tree, (1u64 << 63) - 1); // 63 tree bits, all set
        assert_eq!(idx_leaf, 7); // 3 leaf bits, all set

        // SLH-DSA-SHAKE-256f geometry: k=35, a=9, h'=4, d=17, m=49; the tree
        // index spans a full 64 bits
        let digest = [0xFFu8; 49];
        let (md, idx_tree, idx_leaf) = parse_digest::<35>(&digest, 4, 17, 9);
        assert_eq!(md.len(), 40); // ceil(35·9/8)
        assert_eq!(idx_tree, u64::MAX);
        assert_eq!(idx_leaf, 15);
    }
}
