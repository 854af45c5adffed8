// This file implements the SHAKE256 instantiations of the FIPS 205 hash
// functions and pseudorandom functions; see section 11.1 on page 43. Every
// function streams its inputs into the XOF rather than concatenating first.

use crate::address::Adrs;
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake256;
use zeroize::Zeroizing;


/// Takes a reference to a list of byte-slice references and runs them through
/// Shake256. Returns a xof reader for extracting extendable output.
fn h_xof(v: &[&[u8]]) -> impl XofReader {
    let mut hasher = Shake256::default();
    v.iter().for_each(|b| hasher.update(b));
    hasher.finalize_xof()
}


/// `PRF(PK.seed, SK.seed, ADRS)` = SHAKE256(PK.seed ∥ ADRS ∥ SK.seed, 8·n).
/// The output seeds a WOTS+ chain or FORS leaf, so it is secret.
pub(crate) fn prf<const N: usize>(
    pk_seed: &[u8; N], sk_seed: &[u8; N], adrs: &Adrs,
) -> Zeroizing<[u8; N]> {
    let mut reader = h_xof(&[pk_seed, adrs.as_bytes(), sk_seed]);
    let mut out = Zeroizing::new([0u8; N]);
    reader.read(&mut *out);
    out
}


/// `PRF_msg(SK.prf, opt_rand, M')` = SHAKE256(SK.prf ∥ opt_rand ∥ M', 8·n).
/// The framed message arrives as a list of slices so M' is never assembled.
pub(crate) fn prf_msg<const N: usize>(
    sk_prf: &[u8; N], opt_rand: &[u8; N], m_prime: &[&[u8]],
) -> [u8; N] {
    let mut hasher = Shake256::default();
    hasher.update(sk_prf);
    hasher.update(opt_rand);
    m_prime.iter().for_each(|b| hasher.update(b));
    let mut reader = hasher.finalize_xof();
    let mut out = [0u8; N];
    reader.read(&mut out);
    out
}


/// `H_msg(R, PK.seed, PK.root, M')` = SHAKE256(R ∥ PK.seed ∥ PK.root ∥ M', 8·m).
pub(crate) fn h_msg<const N: usize, const M: usize>(
    r: &[u8; N], pk_seed: &[u8; N], pk_root: &[u8; N], m_prime: &[&[u8]],
) -> [u8; M] {
    let mut hasher = Shake256::default();
    hasher.update(r);
    hasher.update(pk_seed);
    hasher.update(pk_root);
    m_prime.iter().for_each(|b| hasher.update(b));
    let mut reader = hasher.finalize_xof();
    let mut out = [0u8; M];
    reader.read(&mut out);
    out
}


/// `F(PK.seed, ADRS, M1)` = SHAKE256(PK.seed ∥ ADRS ∥ M1, 8·n) with an n-byte `M1`.
pub(crate) fn f<const N: usize>(pk_seed: &[u8; N], adrs: &Adrs, m1: &[u8]) -> [u8; N] {
    let mut reader = h_xof(&[pk_seed, adrs.as_bytes(), m1]);
    let mut out = [0u8; N];
    reader.read(&mut out);
    out
}


/// `H(PK.seed, ADRS, M1 ∥ M2)` = SHAKE256(PK.seed ∥ ADRS ∥ M1 ∥ M2, 8·n); the
/// two inputs are sibling tree nodes.
pub(crate) fn h<const N: usize>(
    pk_seed: &[u8; N], adrs: &Adrs, m1: &[u8], m2: &[u8],
) -> [u8; N] {
    let mut reader = h_xof(&[pk_seed, adrs.as_bytes(), m1, m2]);
    let mut out = [0u8; N];
    reader.read(&mut out);
    out
}


/// `T_len(PK.seed, ADRS, M)` = SHAKE256(PK.seed ∥ ADRS ∥ M, 8·n); compresses a
/// run of n-byte blocks (a WOTS+ public key or the FORS roots).
pub(crate) fn t_len<const N: usize>(
    pk_seed: &[u8; N], adrs: &Adrs, blocks: &[[u8; N]],
) -> [u8; N] {
    let mut hasher = Shake256::default();
    hasher.update(pk_seed);
    hasher.update(adrs.as_bytes());
    blocks.iter().for_each(|b| hasher.update(b));
    let mut reader = hasher.finalize_xof();
    let mut out = [0u8; N];
    reader.read(&mut out);
    out
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::AdrsType;

    #[test]
    fn prf_deterministic_and_adrs_separated() {
        let pk_seed = [0u8; 16];
        let sk_seed = [1u8; 16];
        let mut adrs1 = Adrs::new();
        adrs1.set_type_and_clear(AdrsType::WotsPrf);
        let mut adrs2 = adrs1;
        adrs2.set_chain_address(1);

        assert_eq!(*prf(&pk_seed, &sk_seed, &adrs1), *prf(&pk_seed, &sk_seed, &adrs1));
        assert_ne!(*prf(&pk_seed, &sk_seed, &adrs1), *prf(&pk_seed, &sk_seed, &adrs2));
    }

    #[test]
    fn h_is_order_sensitive() {
        let pk_seed = [0u8; 24];
        let adrs = Adrs::new();
        let m1 = [1u8; 24];
        let m2 = [2u8; 24];
        assert_ne!(h::<24>(&pk_seed, &adrs, &m1, &m2), h::<24>(&pk_seed, &adrs, &m2, &m1));
    }

    #[test]
    fn h_and_t2_agree() {
        // H on two nodes must equal T_len over the same two blocks
        let pk_seed = [7u8; 32];
        let adrs = Adrs::new();
        let blocks = [[3u8; 32], [4u8; 32]];
        assert_eq!(
            h::<32>(&pk_seed, &adrs, &blocks[0], &blocks[1]),
            t_len::<32>(&pk_seed, &adrs, &blocks)
        );
    }

    #[test]
    fn h_msg_slice_list_matches_concatenation() {
        let r = [9u8; 16];
        let pk_seed = [8u8; 16];
        let pk_root = [7u8; 16];
        let whole: [u8; 6] = [0, 2, 0xAA, 0xBB, 1, 2];
        let split: [&[u8]; 4] = [&whole[..2], &whole[2..4], &whole[4..5], &whole[5..]];
        let a: [u8; 30] = h_msg(&r, &pk_seed, &pk_root, &[&whole]);
        let b: [u8; 30] = h_msg(&r, &pk_seed, &pk_root, &split);
        assert_eq!(a, b);
    }
}
