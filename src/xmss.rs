// This file implements the XMSS subtree scheme of FIPS 205 section 6:
// Algorithms 9-11. One XMSS signature is `(len + h') · n` bytes: the WOTS+
// signature followed by the authentication path.

use crate::address::{Adrs, AdrsType};
use crate::hashing;
use crate::wots;


/// # Algorithm 9: `xmss_node(SK.seed, i, z, PK.seed, ADRS)` on page 22.
/// Computes node `i` at height `z` of a Merkle tree whose leaves are hashed
/// WOTS+ public keys. Used as a treehash during signing and key generation.
pub(crate) fn xmss_node<const N: usize, const LEN: usize>(
    sk_seed: &[u8; N], i: u32, z: u32, pk_seed: &[u8; N], adrs: &Adrs,
) -> [u8; N] {
    if z == 0 {
        // 4-6: a leaf is the compressed WOTS+ public key for key pair i
        let mut wots_adrs = *adrs;
        wots_adrs.set_type_and_clear(AdrsType::WotsHash);
        wots_adrs.set_key_pair_address(i);
        wots::wots_pkgen::<N, LEN>(sk_seed, pk_seed, &wots_adrs)
    } else {
        // 8-9: recurse into both children
        let lnode = xmss_node::<N, LEN>(sk_seed, 2 * i, z - 1, pk_seed, adrs);
        let rnode = xmss_node::<N, LEN>(sk_seed, 2 * i + 1, z - 1, pk_seed, adrs);

        // 10-13: node ← H(PK.seed, ADRS, lnode ∥ rnode)
        let mut node_adrs = *adrs;
        node_adrs.set_type_and_clear(AdrsType::Tree);
        node_adrs.set_tree_height(z);
        node_adrs.set_tree_index(i);
        hashing::h(pk_seed, &node_adrs, &lnode, &rnode)
    }
}


/// # Algorithm 10: `xmss_sign(M, SK.seed, idx, PK.seed, ADRS)` on page 23.
/// Signs an n-byte message with the WOTS+ key at leaf `idx` and appends the
/// authentication path, written into the `(len + h') · n` byte `sig_xmss` slice.
pub(crate) fn xmss_sign<const N: usize, const LEN: usize>(
    sig_xmss: &mut [u8], m: &[u8; N], sk_seed: &[u8; N], idx: u32, pk_seed: &[u8; N],
    adrs: &Adrs, hp: u32,
) {
    debug_assert_eq!(sig_xmss.len(), (LEN + hp as usize) * N);
    let (sig_wots, auth) = sig_xmss.split_at_mut(LEN * N);

    // 1-3: AUTH[j] ← xmss_node(SK.seed, ⌊idx/2^j⌋ ⊕ 1, j, PK.seed, ADRS)
    for (j, auth_j) in (0..hp).zip(auth.chunks_exact_mut(N)) {
        let k = (idx >> j) ^ 1;
        auth_j.copy_from_slice(&xmss_node::<N, LEN>(sk_seed, k, j, pk_seed, adrs));
    }

    // 4-6: sig ← wots_sign(M, SK.seed, PK.seed, ADRS) for key pair idx
    let mut wots_adrs = *adrs;
    wots_adrs.set_type_and_clear(AdrsType::WotsHash);
    wots_adrs.set_key_pair_address(idx);
    wots::wots_sign::<N, LEN>(sig_wots, m, sk_seed, pk_seed, &wots_adrs);

    // 7: return SIG_XMSS = sig ∥ AUTH
}


/// # Algorithm 11: `xmss_pkFromSig(idx, SIG_XMSS, M, PK.seed, ADRS)` on page 24.
/// Computes the subtree root implied by an XMSS signature on `m` at leaf `idx`.
pub(crate) fn xmss_pk_from_sig<const N: usize, const LEN: usize>(
    idx: u32, sig_xmss: &[u8], m: &[u8; N], pk_seed: &[u8; N], adrs: &Adrs, hp: u32,
) -> [u8; N] {
    debug_assert_eq!(sig_xmss.len(), (LEN + hp as usize) * N);
    let (sig_wots, auth) = sig_xmss.split_at(LEN * N);

    // 1-4: node[0] ← wots_pkFromSig(sig, M, PK.seed, ADRS) for key pair idx
    let mut wots_adrs = *adrs;
    wots_adrs.set_type_and_clear(AdrsType::WotsHash);
    wots_adrs.set_key_pair_address(idx);
    let mut node = wots::wots_pk_from_sig::<N, LEN>(sig_wots, m, pk_seed, &wots_adrs);

    // 5-6: climb toward the subtree root
    let mut node_adrs = *adrs;
    node_adrs.set_type_and_clear(AdrsType::Tree);
    node_adrs.set_tree_index(idx);

    // 7: for k from 0 to h′ − 1 do
    for (k, auth_k) in (0..hp).zip(auth.chunks_exact(N)) {
        // 8: ADRS.setTreeHeight(k + 1)
        node_adrs.set_tree_height(k + 1);

        // 9-13: hash with the sibling on the side selected by the k-th index bit
        if (idx >> k) & 1 == 0 {
            node_adrs.set_tree_index(node_adrs.get_tree_index() / 2);
            node = hashing::h(pk_seed, &node_adrs, &node, auth_k);
        } else {
            node_adrs.set_tree_index((node_adrs.get_tree_index() - 1) / 2);
            node = hashing::h(pk_seed, &node_adrs, auth_k, &node);
        }

        // 14: end for
    }

    // 15: return node[0]
    node
}
