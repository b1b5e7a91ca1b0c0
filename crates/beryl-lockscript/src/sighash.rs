use crate::constants::{HASH_SIZE, MAX_WITNESS_SIZE};
use crate::error::{ErrorCode, ScriptError};
use crate::hash;
use crate::record::FieldSlice;
use crate::source::{SourceError, TransactionSource, WitnessScope};

/// Digest every group witness into the message the unlock signature covers.
///
/// `witness` is the first group witness and `lock` the payload view of its
/// lock field. The lock bytes are zeroed in a local copy before hashing, so
/// the digest is independent of the signature that will be placed there.
/// Each witness is committed as its 8-byte little-endian length followed by
/// its bytes; the length prefix keeps witness boundaries unambiguous.
pub fn unlock_digest<S: TransactionSource>(
    source: &S,
    tx_hash: &[u8; 32],
    witness: &[u8],
    lock: FieldSlice,
) -> Result<[u8; 32], ScriptError> {
    let mut hasher = hash::new_hasher();
    hasher.update(tx_hash);

    let mut zero_lock = witness.to_vec();
    zero_lock[lock.offset..lock.end()].fill(0);
    hasher.update(&(witness.len() as u64).to_le_bytes());
    hasher.update(&zero_lock);

    let mut index = 1usize;
    loop {
        let extra = match source.load_witness(index, WitnessScope::ScriptGroup) {
            Ok(w) => w,
            Err(SourceError::IndexOutOfBound) => break,
            Err(_) => {
                return Err(ScriptError::new(
                    ErrorCode::SyscallError,
                    "load_witness failed",
                ))
            }
        };
        if extra.len() > MAX_WITNESS_SIZE {
            return Err(ScriptError::new(
                ErrorCode::WitnessTooLarge,
                "group witness exceeds buffer ceiling",
            ));
        }
        hasher.update(&(extra.len() as u64).to_le_bytes());
        hasher.update(&extra);
        index += 1;
    }

    let out = hasher.finalize();
    let mut digest = [0u8; HASH_SIZE];
    digest.copy_from_slice(out.as_bytes());
    Ok(digest)
}
