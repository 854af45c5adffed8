// Implements the 32-byte ADRS structure of FIPS 205 section 4.2, including the
// compound member functions of section 4.3. All fields are big endian. The
// layout is: layer (bytes 0-3), tree (bytes 4-15, value confined to 8-15),
// type (bytes 16-19), then three type-specific words (bytes 20-31).

/// ADRS type constants per Table 1 on page 13.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u32)]
pub(crate) enum AdrsType {
    WotsHash = 0,
    WotsPk = 1,
    Tree = 2,
    ForsTree = 3,
    ForsRoots = 4,
    WotsPrf = 5,
    ForsPrf = 6,
}


/// Hash address; the domain separator fed into every keyed hash.
#[derive(Clone, Copy)]
pub(crate) struct Adrs([u8; 32]);

impl Adrs {
    /// Fresh all-zero address (layer 0, tree 0, type `WotsHash`).
    pub(crate) const fn new() -> Self { Adrs([0u8; 32]) }

    pub(crate) fn as_bytes(&self) -> &[u8; 32] { &self.0 }

    /// `ADRS.setLayerAddress(l)`; bytes 0-3.
    pub(crate) fn set_layer_address(&mut self, l: u32) {
        self.0[0..4].copy_from_slice(&l.to_be_bytes());
    }

    /// `ADRS.setTreeAddress(t)`; the tree field spans bytes 4-15 but no
    /// parameter set needs more than 64 bits, so the value sits in bytes 8-15.
    pub(crate) fn set_tree_address(&mut self, t: u64) {
        self.0[8..16].copy_from_slice(&t.to_be_bytes());
    }

    /// `ADRS.setTypeAndClear(Y)`; sets bytes 16-19 and zeroes the final twelve
    /// bytes. Callers must re-set the key pair address afterwards when needed.
    pub(crate) fn set_type_and_clear(&mut self, y: AdrsType) {
        self.0[16..20].copy_from_slice(&(y as u32).to_be_bytes());
        self.0[20..32].fill(0);
    }

    /// `ADRS.setKeyPairAddress(i)`; bytes 20-23.
    pub(crate) fn set_key_pair_address(&mut self, i: u32) {
        self.0[20..24].copy_from_slice(&i.to_be_bytes());
    }

    /// `ADRS.getKeyPairAddress()`; bytes 20-23.
    pub(crate) fn get_key_pair_address(&self) -> u32 {
        u32::from_be_bytes([self.0[20], self.0[21], self.0[22], self.0[23]])
    }

    /// `ADRS.setChainAddress(i)`; bytes 24-27.
    pub(crate) fn set_chain_address(&mut self, i: u32) {
        self.0[24..28].copy_from_slice(&i.to_be_bytes());
    }

    /// `ADRS.setTreeHeight(i)`; bytes 24-27 (aliases the chain address word).
    pub(crate) fn set_tree_height(&mut self, i: u32) {
        self.0[24..28].copy_from_slice(&i.to_be_bytes());
    }

    /// `ADRS.setHashAddress(i)`; bytes 28-31.
    pub(crate) fn set_hash_address(&mut self, i: u32) {
        self.0[28..32].copy_from_slice(&i.to_be_bytes());
    }

    /// `ADRS.setTreeIndex(i)`; bytes 28-31 (aliases the hash address word).
    pub(crate) fn set_tree_index(&mut self, i: u32) {
        self.0[28..32].copy_from_slice(&i.to_be_bytes());
    }

    /// `ADRS.getTreeIndex()`; bytes 28-31.
    pub(crate) fn get_tree_index(&self) -> u32 {
        u32::from_be_bytes([self.0[28], self.0[29], self.0[30], self.0[31]])
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_placement() {
        let mut adrs = Adrs::new();
        adrs.set_layer_address(0x0102_0304);
        adrs.set_tree_address(0x1122_3344_5566_7788);
        adrs.set_type_and_clear(AdrsType::ForsTree);
        adrs.set_key_pair_address(0xAABB_CCDD);
        adrs.set_tree_height(7);
        adrs.set_tree_index(0x0000_0201);

        let b = adrs.as_bytes();
        assert_eq!(&b[0..4], &[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(&b[4..8], &[0; 4]);
        assert_eq!(&b[8..16], &[0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88]);
        assert_eq!(&b[16..20], &[0, 0, 0, 3]);
        assert_eq!(adrs.get_key_pair_address(), 0xAABB_CCDD);
        assert_eq!(&b[24..28], &[0, 0, 0, 7]);
        assert_eq!(adrs.get_tree_index(), 0x0201);
    }

    #[test]
    fn set_type_and_clear_zeroes_tail() {
        let mut adrs = Adrs::new();
        adrs.set_key_pair_address(9);
        adrs.set_chain_address(5);
        adrs.set_hash_address(3);
        adrs.set_type_and_clear(AdrsType::WotsPrf);
        let b = adrs.as_bytes();
        assert_eq!(&b[16..20], &[0, 0, 0, 5]);
        assert_eq!(&b[20..32], &[0; 12]);
    }

    #[test]
    fn type_tags_disjoint() {
        // Same field values under different type tags must never collide.
        let types = [
            AdrsType::WotsHash,
            AdrsType::WotsPk,
            AdrsType::Tree,
            AdrsType::ForsTree,
            AdrsType::ForsRoots,
            AdrsType::WotsPrf,
            AdrsType::ForsPrf,
        ];
        for (i, &a) in types.iter().enumerate() {
            for &b in &types[i + 1..] {
                let mut adrs_a = Adrs::new();
                let mut adrs_b = Adrs::new();
                adrs_a.set_type_and_clear(a);
                adrs_b.set_type_and_clear(b);
                adrs_a.set_key_pair_address(1);
                adrs_b.set_key_pair_address(1);
                assert_ne!(adrs_a.as_bytes(), adrs_b.as_bytes());
            }
        }
    }
}
