/// Ceiling for the serialized script record loaded from the context.
pub const SCRIPT_SIZE: usize = 32 * 1024;
/// Ceiling for any single witness, first or subsequent.
pub const MAX_WITNESS_SIZE: usize = 32 * 1024;

pub const HASH_SIZE: usize = 32;
pub const COMMITMENT_SIZE: usize = 20;

/// Compact recoverable signature plus one trailing recovery-id byte.
pub const SIGNATURE_SIZE: usize = 65;
pub const RECID_INDEX: usize = 64;

/// Compressed secp256k1 public key.
pub const PUBKEY_SIZE: usize = 33;
