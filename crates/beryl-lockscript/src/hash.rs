use blake2b_simd::{Params, State};

/// Domain separator for every blake2b invocation on this chain.
pub const PERSONALIZATION: &[u8; 16] = b"beryl-chain-hash";

pub fn new_hasher() -> State {
    Params::new()
        .hash_length(32)
        .personal(PERSONALIZATION)
        .to_state()
}

pub fn hash256(b: &[u8]) -> [u8; 32] {
    let mut h = new_hasher();
    h.update(b);
    let out = h.finalize();
    let mut r = [0u8; 32];
    r.copy_from_slice(out.as_bytes());
    r
}
