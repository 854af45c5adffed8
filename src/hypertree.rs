// This file implements the hypertree of FIPS 205 section 7: Algorithms 12-13,
// a chain of d XMSS signatures in which each layer signs the subtree root of
// the layer below.

use crate::address::Adrs;
use crate::helpers;
use crate::xmss;


/// Root of the single tree at the top layer; the `PK.root` computation of
/// Algorithm 18 steps 4-6.
pub(crate) fn ht_root<const N: usize, const LEN: usize>(
    sk_seed: &[u8; N], pk_seed: &[u8; N], hp: u32, d: u32,
) -> [u8; N] {
    let mut adrs = Adrs::new();
    adrs.set_layer_address(d - 1);
    xmss::xmss_node::<N, LEN>(sk_seed, 0, hp, pk_seed, &adrs)
}


/// # Algorithm 12: `ht_sign(M, SK.seed, PK.seed, idx_tree, idx_leaf)` on page 27.
/// Signs an n-byte message with the hypertree, writing `d` XMSS signatures
/// into the `(h + d·len) · n` byte `sig_ht` slice.
pub(crate) fn ht_sign<const N: usize, const LEN: usize>(
    sig_ht: &mut [u8], m: &[u8; N], sk_seed: &[u8; N], pk_seed: &[u8; N],
    mut idx_tree: u64, mut idx_leaf: u32, hp: u32, d: u32,
) {
    let xmss_len = (LEN + hp as usize) * N;
    debug_assert_eq!(sig_ht.len(), d as usize * xmss_len);

    // 1-2: ADRS ← layer 0, tree idx_tree
    let mut adrs = Adrs::new();
    adrs.set_tree_address(idx_tree);

    // 3-4: SIG_HT ← xmss_sign(M, SK.seed, idx_leaf, PK.seed, ADRS)
    xmss::xmss_sign::<N, LEN>(&mut sig_ht[0..xmss_len], m, sk_seed, idx_leaf, pk_seed, &adrs, hp);

    // 5: root ← xmss_pkFromSig(idx_leaf, SIG_tmp, M, PK.seed, ADRS)
    let mut root =
        xmss::xmss_pk_from_sig::<N, LEN>(idx_leaf, &sig_ht[0..xmss_len], m, pk_seed, &adrs, hp);

    // 6: for j from 1 to d − 1 do
    for j in 1..d {
        // 7-8: peel the next h′ index bits off idx_tree
        idx_leaf = (idx_tree & ((1 << hp) - 1)) as u32;
        idx_tree >>= hp;

        // 9-10: move one layer up
        adrs.set_layer_address(j);
        adrs.set_tree_address(idx_tree);

        // 11-12: sign the root of the layer below
        let start = j as usize * xmss_len;
        xmss::xmss_sign::<N, LEN>(
            &mut sig_ht[start..start + xmss_len],
            &root,
            sk_seed,
            idx_leaf,
            pk_seed,
            &adrs,
            hp,
        );

        // 13-15: carry the root upward (not needed after the final layer)
        if j < d - 1 {
            root = xmss::xmss_pk_from_sig::<N, LEN>(
                idx_leaf,
                &sig_ht[start..start + xmss_len],
                &root,
                pk_seed,
                &adrs,
                hp,
            );
        }

        // 16: end for
    }
}


/// # Algorithm 13: `ht_verify(M, SIG_HT, PK.seed, idx_tree, idx_leaf, PK.root)` on page 28.
/// Chains `xmss_pkFromSig` through all `d` layers and compares the resulting
/// root against `PK.root` in constant time.
pub(crate) fn ht_verify<const N: usize, const LEN: usize>(
    m: &[u8; N], sig_ht: &[u8], pk_seed: &[u8; N], mut idx_tree: u64, mut idx_leaf: u32,
    pk_root: &[u8; N], hp: u32, d: u32,
) -> bool {
    let xmss_len = (LEN + hp as usize) * N;
    debug_assert_eq!(sig_ht.len(), d as usize * xmss_len);

    // 1-3: node ← xmss_pkFromSig at layer 0
    let mut adrs = Adrs::new();
    adrs.set_tree_address(idx_tree);
    let mut node =
        xmss::xmss_pk_from_sig::<N, LEN>(idx_leaf, &sig_ht[0..xmss_len], m, pk_seed, &adrs, hp);

    // 4: for j from 1 to d − 1 do
    for j in 1..d {
        // 5-8: next layer's indices and address
        idx_leaf = (idx_tree & ((1 << hp) - 1)) as u32;
        idx_tree >>= hp;
        adrs.set_layer_address(j);
        adrs.set_tree_address(idx_tree);

        // 9: node ← xmss_pkFromSig(idx_leaf, SIG_HT[j], node, PK.seed, ADRS)
        let start = j as usize * xmss_len;
        node = xmss::xmss_pk_from_sig::<N, LEN>(
            idx_leaf,
            &sig_ht[start..start + xmss_len],
            &node,
            pk_seed,
            &adrs,
            hp,
        );

        // 10: end for
    }

    // 11-15: accept iff the reconstructed root matches
    helpers::ct_eq(&node, pk_root)
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::rand_core::{RngCore, SeedableRng};

    const TEST_N: usize = 16;
    const TEST_LEN: usize = 2 * TEST_N + 3;
    const TEST_HP: u32 = 2;
    const TEST_D: u32 = 3;

    #[test]
    fn sign_verify_round_trip() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(10);
        let mut sk_seed = [0u8; TEST_N];
        let mut pk_seed = [0u8; TEST_N];
        let mut m = [0u8; TEST_N];
        rng.fill_bytes(&mut sk_seed);
        rng.fill_bytes(&mut pk_seed);
        rng.fill_bytes(&mut m);

        let pk_root = ht_root::<TEST_N, TEST_LEN>(&sk_seed, &pk_seed, TEST_HP, TEST_D);
        let xmss_len = (TEST_LEN + TEST_HP as usize) * TEST_N;
        let mut sig = [0u8; 3 * ((TEST_LEN + 2) * TEST_N)];
        assert_eq!(sig.len(), TEST_D as usize * xmss_len);

        // Every addressable leaf of the 6-bit hypertree must verify
        for idx in 0..(1u64 << (TEST_HP * TEST_D)) {
            let idx_leaf = (idx & ((1 << TEST_HP) - 1)) as u32;
            let idx_tree = idx >> TEST_HP;
            ht_sign::<TEST_N, TEST_LEN>(
                &mut sig, &m, &sk_seed, &pk_seed, idx_tree, idx_leaf, TEST_HP, TEST_D,
            );
            assert!(ht_verify::<TEST_N, TEST_LEN>(
                &m, &sig, &pk_seed, idx_tree, idx_leaf, &pk_root, TEST_HP, TEST_D
            ));
            // The wrong message must not verify
            let mut m2 = m;
            m2[0] ^= 0x80;
            assert!(!ht_verify::<TEST_N, TEST_LEN>(
                &m2, &sig, &pk_seed, idx_tree, idx_leaf, &pk_root, TEST_HP, TEST_D
            ));
        }
    }
}
