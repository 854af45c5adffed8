// This file implements the WOTS+ one-time signature scheme of FIPS 205
// section 5: Algorithms 5-8.

use crate::address::{Adrs, AdrsType};
use crate::hashing;
use crate::helpers::{base_2b, to_byte};
use crate::{LEN2, LG_W, W};


/// # Algorithm 5: `chain(X, i, s, PK.seed, ADRS)` on page 18.
/// Chaining function used in WOTS+; applies `F` to `X` a total of `s` times
/// starting at chain position `i`. The caller has set the chain address.
pub(crate) fn chain<const N: usize>(
    cap_x: &[u8; N], i: u32, s: u32, pk_seed: &[u8; N], adrs: &mut Adrs,
) -> [u8; N] {
    debug_assert!(i + s < W);

    // 1: tmp ← X
    let mut tmp = *cap_x;

    // 2: for j from i to i + s − 1 do
    for j in i..(i + s) {
        // 3: ADRS.setHashAddress(j)
        adrs.set_hash_address(j);

        // 4: tmp ← F(PK.seed, ADRS, tmp)
        tmp = hashing::f(pk_seed, adrs, &tmp);

        // 5: end for
    }

    // 6: return tmp
    tmp
}


/// Base-w digits of an n-byte message followed by the appended checksum digits;
/// steps 1-7 shared by Algorithm 7 and Algorithm 8.
fn wots_digits<const LEN: usize>(m: &[u8]) -> [u32; LEN] {
    let len1 = LEN - LEN2;
    let mut msg = [0u32; LEN];

    // 1: msg ← base_2b(M, lg_w, len_1)
    base_2b(m, LG_W, &mut msg[0..len1]);

    // 2-4: csum ← Σ (w − 1 − msg[i])
    let csum: u32 = msg[0..len1].iter().map(|&d| W - 1 - d).sum();

    // 5: csum ← csum ≪ ((8 − ((len_2 · lg_w) mod 8)) mod 8)
    #[allow(clippy::cast_possible_truncation)]
    let csum = csum << ((8 - ((LEN2 as u32 * LG_W) % 8)) % 8);

    // 6-7: msg ← msg ∥ base_2b(toByte(csum, 2), lg_w, len_2)
    let csum_bytes = to_byte::<2>(u64::from(csum));
    base_2b(&csum_bytes, LG_W, &mut msg[len1..]);
    msg
}


/// # Algorithm 6: `wots_pkgen(SK.seed, PK.seed, ADRS)` on page 18.
/// Generates a WOTS+ public key: each chain run to its end, then compressed.
/// The incoming ADRS carries layer, tree and key pair addresses.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn wots_pkgen<const N: usize, const LEN: usize>(
    sk_seed: &[u8; N], pk_seed: &[u8; N], adrs: &Adrs,
) -> [u8; N] {
    // 1-3: skADRS ← ADRS with type WOTS_PRF and the key pair address retained
    let mut sk_adrs = *adrs;
    sk_adrs.set_type_and_clear(AdrsType::WotsPrf);
    sk_adrs.set_key_pair_address(adrs.get_key_pair_address());
    let mut chain_adrs = *adrs;
    let mut tmp = [[0u8; N]; LEN];

    // 4: for i from 0 to len − 1 do
    for (i, t) in tmp.iter_mut().enumerate() {
        // 5-6: sk ← PRF(PK.seed, SK.seed, skADRS) for chain i
        sk_adrs.set_chain_address(i as u32);
        let sk = hashing::prf(pk_seed, sk_seed, &sk_adrs);

        // 7-8: tmp[i] ← chain(sk, 0, w − 1, PK.seed, ADRS)
        chain_adrs.set_chain_address(i as u32);
        *t = chain(&sk, 0, W - 1, pk_seed, &mut chain_adrs);

        // 9: end for
    }

    // 10-12: wotspkADRS ← ADRS with type WOTS_PK and the key pair address retained
    let mut wotspk_adrs = *adrs;
    wotspk_adrs.set_type_and_clear(AdrsType::WotsPk);
    wotspk_adrs.set_key_pair_address(adrs.get_key_pair_address());

    // 13-14: pk ← T_len(PK.seed, wotspkADRS, tmp)
    hashing::t_len(pk_seed, &wotspk_adrs, &tmp)
}


/// # Algorithm 7: `wots_sign(M, SK.seed, PK.seed, ADRS)` on page 19.
/// Generates a WOTS+ signature on an n-byte message, written into the
/// `len · n` byte `sig` slice.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn wots_sign<const N: usize, const LEN: usize>(
    sig: &mut [u8], m: &[u8; N], sk_seed: &[u8; N], pk_seed: &[u8; N], adrs: &Adrs,
) {
    debug_assert_eq!(sig.len(), LEN * N);

    // 1-7: msg ← base_2b digits followed by the checksum digits
    let msg = wots_digits::<LEN>(m);

    // (as in wots_pkgen) skADRS with type WOTS_PRF
    let mut sk_adrs = *adrs;
    sk_adrs.set_type_and_clear(AdrsType::WotsPrf);
    sk_adrs.set_key_pair_address(adrs.get_key_pair_address());
    let mut chain_adrs = *adrs;

    // 8: for i from 0 to len − 1 do
    for (i, (digit, out)) in msg.iter().zip(sig.chunks_exact_mut(N)).enumerate() {
        // 9-10: sk ← PRF(PK.seed, SK.seed, skADRS) for chain i
        sk_adrs.set_chain_address(i as u32);
        let sk = hashing::prf(pk_seed, sk_seed, &sk_adrs);

        // 11-12: sig[i] ← chain(sk, 0, msg[i], PK.seed, ADRS)
        chain_adrs.set_chain_address(i as u32);
        out.copy_from_slice(&chain(&sk, 0, *digit, pk_seed, &mut chain_adrs));

        // 13: end for
    }
}


/// # Algorithm 8: `wots_pkFromSig(sig, M, PK.seed, ADRS)` on page 20.
/// Computes a WOTS+ public key candidate from a message and its signature;
/// each chain is completed from the signed position to its end.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn wots_pk_from_sig<const N: usize, const LEN: usize>(
    sig: &[u8], m: &[u8; N], pk_seed: &[u8; N], adrs: &Adrs,
) -> [u8; N] {
    debug_assert_eq!(sig.len(), LEN * N);

    // 1-7: msg ← base_2b digits followed by the checksum digits
    let msg = wots_digits::<LEN>(m);
    let mut chain_adrs = *adrs;
    let mut tmp = [[0u8; N]; LEN];

    // 8: for i from 0 to len − 1 do
    for (i, ((digit, sig_i), t)) in
        msg.iter().zip(sig.chunks_exact(N)).zip(tmp.iter_mut()).enumerate()
    {
        // 9-10: tmp[i] ← chain(sig[i], msg[i], w − 1 − msg[i], PK.seed, ADRS)
        chain_adrs.set_chain_address(i as u32);
        let mut x = [0u8; N];
        x.copy_from_slice(sig_i);
        *t = chain(&x, *digit, W - 1 - digit, pk_seed, &mut chain_adrs);

        // 11: end for
    }

    // 12-15: pk_sig ← T_len(PK.seed, wotspkADRS, tmp)
    let mut wotspk_adrs = *adrs;
    wotspk_adrs.set_type_and_clear(AdrsType::WotsPk);
    wotspk_adrs.set_key_pair_address(adrs.get_key_pair_address());
    hashing::t_len(pk_seed, &wotspk_adrs, &tmp)
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::rand_core::{RngCore, SeedableRng};

    const TEST_N: usize = 16;
    const TEST_LEN: usize = 2 * TEST_N + 3;

    #[test]
    fn chain_composes() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
        let mut x = [0u8; TEST_N];
        let mut pk_seed = [0u8; TEST_N];
        rng.fill_bytes(&mut x);
        rng.fill_bytes(&mut pk_seed);
        let adrs = Adrs::new();

        // chain(x, 0, 15) must equal chain(chain(x, 0, 6), 6, 9)
        let (mut a1, mut a2, mut a3) = (adrs, adrs, adrs);
        let full = chain(&x, 0, W - 1, &pk_seed, &mut a1);
        let part = chain(&x, 0, 6, &pk_seed, &mut a2);
        let rest = chain(&part, 6, W - 1 - 6, &pk_seed, &mut a3);
        assert_eq!(full, rest);
    }

    #[test]
    fn digits_checksum_placement() {
        // All-zero message: every digit 0, csum = len1·15 = 480, shifted left 4
        // becomes 0x1E00, i.e. digits [1, 14, 0]
        let msg = wots_digits::<TEST_LEN>(&[0u8; TEST_N]);
        assert!(msg[0..32].iter().all(|&d| d == 0));
        assert_eq!(&msg[32..], &[1, 14, 0]);

        // All-ones message: every digit 15, csum = 0
        let msg = wots_digits::<TEST_LEN>(&[0xFFu8; TEST_N]);
        assert!(msg[0..32].iter().all(|&d| d == 15));
        assert_eq!(&msg[32..], &[0, 0, 0]);
    }

    #[test]
    fn sign_then_recover_pk() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(8);
        let mut sk_seed = [0u8; TEST_N];
        let mut pk_seed = [0u8; TEST_N];
        let mut m = [0u8; TEST_N];
        rng.fill_bytes(&mut sk_seed);
        rng.fill_bytes(&mut pk_seed);
        rng.fill_bytes(&mut m);

        let mut adrs = Adrs::new();
        adrs.set_key_pair_address(3);
        let pk = wots_pkgen::<TEST_N, TEST_LEN>(&sk_seed, &pk_seed, &adrs);

        let mut sig = [0u8; TEST_LEN * TEST_N];
        wots_sign::<TEST_N, TEST_LEN>(&mut sig, &m, &sk_seed, &pk_seed, &adrs);
        assert_eq!(pk, wots_pk_from_sig::<TEST_N, TEST_LEN>(&sig, &m, &pk_seed, &adrs));

        // A different message must not reproduce the public key
        m[0] ^= 1;
        assert_ne!(pk, wots_pk_from_sig::<TEST_N, TEST_LEN>(&sig, &m, &pk_seed, &adrs));
    }
}
