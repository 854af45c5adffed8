// This file implements the FORS few-time signature scheme of FIPS 205
// section 8: Algorithms 14-17. The k trees of height a live in one forest;
// leaf and node indices are global, i.e. tree i owns indices i·2^a .. (i+1)·2^a.

use crate::address::{Adrs, AdrsType};
use crate::hashing;
use crate::helpers::base_2b;
use zeroize::Zeroizing;


/// # Algorithm 14: `fors_SKgen(SK.seed, PK.seed, ADRS, idx)` on page 29.
/// Derives the secret value for the FORS leaf at global index `idx`. The
/// incoming ADRS has type `FORS_TREE` with the key pair address set.
fn fors_sk_gen<const N: usize>(
    sk_seed: &[u8; N], pk_seed: &[u8; N], adrs: &Adrs, idx: u32,
) -> Zeroizing<[u8; N]> {
    // 1-4: skADRS ← ADRS with type FORS_PRF, key pair retained, tree index idx
    let mut sk_adrs = *adrs;
    sk_adrs.set_type_and_clear(AdrsType::ForsPrf);
    sk_adrs.set_key_pair_address(adrs.get_key_pair_address());
    sk_adrs.set_tree_index(idx);

    // 5: return PRF(PK.seed, SK.seed, skADRS)
    hashing::prf(pk_seed, sk_seed, &sk_adrs)
}


/// # Algorithm 15: `fors_node(SK.seed, i, z, PK.seed, ADRS)` on page 30.
/// Computes node `i` at height `z` of the forest (global indexing).
pub(crate) fn fors_node<const N: usize>(
    sk_seed: &[u8; N], i: u32, z: u32, pk_seed: &[u8; N], adrs: &Adrs,
) -> [u8; N] {
    if z == 0 {
        // 4-7: leaf ← F(PK.seed, ADRS, sk)
        let sk = fors_sk_gen(sk_seed, pk_seed, adrs, i);
        let mut leaf_adrs = *adrs;
        leaf_adrs.set_tree_height(0);
        leaf_adrs.set_tree_index(i);
        hashing::f(pk_seed, &leaf_adrs, &*sk)
    } else {
        // 9-10: recurse into both children
        let lnode = fors_node::<N>(sk_seed, 2 * i, z - 1, pk_seed, adrs);
        let rnode = fors_node::<N>(sk_seed, 2 * i + 1, z - 1, pk_seed, adrs);

        // 11-13: node ← H(PK.seed, ADRS, lnode ∥ rnode)
        let mut node_adrs = *adrs;
        node_adrs.set_tree_height(z);
        node_adrs.set_tree_index(i);
        hashing::h(pk_seed, &node_adrs, &lnode, &rnode)
    }
}


/// # Algorithm 16: `fors_sign(md, SK.seed, PK.seed, ADRS)` on page 31.
/// Signs `k·a` digest bits, writing `k` blocks of one secret value plus an
/// `a`-step authentication path into the `k·(a+1)·n` byte `sig_fors` slice.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn fors_sign<const N: usize, const K: usize>(
    sig_fors: &mut [u8], md: &[u8], sk_seed: &[u8; N], pk_seed: &[u8; N], adrs: &Adrs, a: u32,
) {
    debug_assert_eq!(sig_fors.len(), K * (a as usize + 1) * N);

    // 2: indices ← base_2b(md, a, k)
    let mut indices = [0u32; K];
    base_2b(md, a, &mut indices);

    // 3: for i from 0 to k − 1 do
    for (i, (idx, sig_i)) in indices
        .iter()
        .zip(sig_fors.chunks_exact_mut((a as usize + 1) * N))
        .enumerate()
    {
        let i = i as u32;

        // 4: SIG_FORS ← SIG_FORS ∥ fors_SKgen(SK.seed, PK.seed, ADRS, i·2^a + indices[i])
        let sk = fors_sk_gen(sk_seed, pk_seed, adrs, (i << a) + idx);
        sig_i[0..N].copy_from_slice(&*sk);

        // 5-9: AUTH[j] ← fors_node(SK.seed, i·2^(a−j) + (⌊indices[i]/2^j⌋ ⊕ 1), j, ...)
        for (j, auth_j) in (0..a).zip(sig_i[N..].chunks_exact_mut(N)) {
            let s = (idx >> j) ^ 1;
            auth_j.copy_from_slice(&fors_node::<N>(
                sk_seed,
                (i << (a - j)) + s,
                j,
                pk_seed,
                adrs,
            ));
        }

        // 10-11: end for; end for
    }
}


/// # Algorithm 17: `fors_pkFromSig(SIG_FORS, md, PK.seed, ADRS)` on page 32.
/// Computes the FORS public key candidate implied by a signature: recompute
/// each leaf from the revealed secret value, climb each tree with its
/// authentication path, then compress the k roots.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn fors_pk_from_sig<const N: usize, const K: usize>(
    sig_fors: &[u8], md: &[u8], pk_seed: &[u8; N], adrs: &Adrs, a: u32,
) -> [u8; N] {
    debug_assert_eq!(sig_fors.len(), K * (a as usize + 1) * N);

    // 1: indices ← base_2b(md, a, k)
    let mut indices = [0u32; K];
    base_2b(md, a, &mut indices);
    let mut root = [[0u8; N]; K];

    // 2: for i from 0 to k − 1 do
    for ((i, (idx, sig_i)), root_i) in indices
        .iter()
        .zip(sig_fors.chunks_exact((a as usize + 1) * N))
        .enumerate()
        .zip(root.iter_mut())
    {
        let i = i as u32;
        let sk = &sig_i[0..N];

        // 3-7: node ← F(PK.seed, ADRS, sk) at global leaf index i·2^a + indices[i]
        let mut node_adrs = *adrs;
        node_adrs.set_tree_height(0);
        node_adrs.set_tree_index((i << a) + idx);
        let mut node = hashing::f(pk_seed, &node_adrs, sk);

        // 8-16: climb with the authentication path
        for (j, auth_j) in (0..a).zip(sig_i[N..].chunks_exact(N)) {
            node_adrs.set_tree_height(j + 1);
            if (idx >> j) & 1 == 0 {
                node_adrs.set_tree_index(node_adrs.get_tree_index() / 2);
                node = hashing::h(pk_seed, &node_adrs, &node, auth_j);
            } else {
                node_adrs.set_tree_index((node_adrs.get_tree_index() - 1) / 2);
                node = hashing::h(pk_seed, &node_adrs, auth_j, &node);
            }
        }

        // 17: root[i] ← node
        *root_i = node;

        // 18: end for
    }

    // 19-21: forspkADRS ← ADRS with type FORS_ROOTS, key pair retained
    let mut forspk_adrs = *adrs;
    forspk_adrs.set_type_and_clear(AdrsType::ForsRoots);
    forspk_adrs.set_key_pair_address(adrs.get_key_pair_address());

    // 22: return T_k(PK.seed, forspkADRS, root)
    hashing::t_len(pk_seed, &forspk_adrs, &root)
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::rand_core::{RngCore, SeedableRng};

    const TEST_N: usize = 16;
    const TEST_K: usize = 4;
    const TEST_A: u32 = 3;

    #[test]
    fn sign_recovers_forest_roots() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(11);
        let mut sk_seed = [0u8; TEST_N];
        let mut pk_seed = [0u8; TEST_N];
        let mut md = [0u8; 2]; // ceil(k·a/8) = 2 bytes of digest
        rng.fill_bytes(&mut sk_seed);
        rng.fill_bytes(&mut pk_seed);
        rng.fill_bytes(&mut md);

        let mut adrs = Adrs::new();
        adrs.set_type_and_clear(AdrsType::ForsTree);
        adrs.set_key_pair_address(5);

        // The genuine public key: compress the four tree roots directly
        let mut root = [[0u8; TEST_N]; TEST_K];
        for (i, r) in root.iter_mut().enumerate() {
            *r = fors_node::<TEST_N>(&sk_seed, i as u32, TEST_A, &pk_seed, &adrs);
        }
        let mut forspk_adrs = adrs;
        forspk_adrs.set_type_and_clear(AdrsType::ForsRoots);
        forspk_adrs.set_key_pair_address(5);
        let pk = hashing::t_len(&pk_seed, &forspk_adrs, &root);

        let mut sig = [0u8; TEST_K * (TEST_A as usize + 1) * TEST_N];
        fors_sign::<TEST_N, TEST_K>(&mut sig, &md, &sk_seed, &pk_seed, &adrs, TEST_A);
        let candidate = fors_pk_from_sig::<TEST_N, TEST_K>(&sig, &md, &pk_seed, &adrs, TEST_A);
        assert_eq!(pk, candidate);

        // Different digest bits select different leaves, so the candidate moves
        md[0] ^= 0xFF;
        let moved = fors_pk_from_sig::<TEST_N, TEST_K>(&sig, &md, &pk_seed, &adrs, TEST_A);
        assert_ne!(pk, moved);
    }
}
