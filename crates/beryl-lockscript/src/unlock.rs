use crate::constants::{COMMITMENT_SIZE, MAX_WITNESS_SIZE, SCRIPT_SIZE, SIGNATURE_SIZE};
use crate::error::{ErrorCode, ScriptError};
use crate::record;
use crate::secp;
use crate::sighash::unlock_digest;
use crate::source::{SourceError, TransactionSource, WitnessScope};

/// Transaction-wide witness count must not exceed the input count. Counting
/// stops one past the input count, so the loop is bounded even against a
/// misbehaving source.
fn check_witness_count<S: TransactionSource>(source: &S) -> Result<(), ScriptError> {
    let inputs = source
        .input_count()
        .map_err(|_| ScriptError::new(ErrorCode::SyscallError, "input_count failed"))?;
    let mut count = 0usize;
    loop {
        match source.load_witness(count, WitnessScope::Transaction) {
            Ok(_) => count += 1,
            Err(SourceError::IndexOutOfBound) => break,
            Err(_) => {
                return Err(ScriptError::new(
                    ErrorCode::SyscallError,
                    "load_witness failed",
                ))
            }
        }
        if count > inputs {
            return Err(ScriptError::new(
                ErrorCode::InvalidWitnessCount,
                "more witnesses than inputs",
            ));
        }
    }
    Ok(())
}

/// Runs the whole authorization check: the script args carry a 20-byte
/// commitment to a public key, the first group witness carries a 65-byte
/// recoverable signature over the group digest, and the key recovered from
/// that signature must hash back to the commitment.
pub fn verify_unlock<S: TransactionSource>(source: &S) -> Result<(), ScriptError> {
    let script = source
        .load_script()
        .map_err(|_| ScriptError::new(ErrorCode::SyscallError, "load_script failed"))?;
    if script.len() > SCRIPT_SIZE {
        return Err(ScriptError::new(
            ErrorCode::ScriptTooLarge,
            "script exceeds buffer ceiling",
        ));
    }
    let args = record::script_args(&script)?;
    if args.len != COMMITMENT_SIZE {
        return Err(ScriptError::new(
            ErrorCode::ArgumentsLengthError,
            "script args must be a 20-byte key commitment",
        ));
    }

    check_witness_count(source)?;

    let witness = source
        .load_witness(0, WitnessScope::ScriptGroup)
        .map_err(|_| ScriptError::new(ErrorCode::SyscallError, "load_witness failed"))?;
    if witness.len() > MAX_WITNESS_SIZE {
        return Err(ScriptError::new(
            ErrorCode::WitnessTooLarge,
            "first group witness exceeds buffer ceiling",
        ));
    }
    let lock = record::witness_lock(&witness)?;
    if lock.len != SIGNATURE_SIZE {
        return Err(ScriptError::new(
            ErrorCode::ArgumentsLengthError,
            "witness lock must be a 65-byte recoverable signature",
        ));
    }
    let mut signature = [0u8; SIGNATURE_SIZE];
    signature.copy_from_slice(lock.bytes(&witness));

    let tx_hash = source
        .load_tx_hash()
        .map_err(|_| ScriptError::new(ErrorCode::SyscallError, "load_tx_hash failed"))?;
    let digest = unlock_digest(source, &tx_hash, &witness, lock)?;

    let recsig = secp::parse_recoverable(&signature)?;
    let pubkey = secp::recover_pubkey(&digest, &recsig)?;
    if secp::pubkey_commitment(&pubkey)[..] != *args.bytes(&script) {
        return Err(ScriptError::new(
            ErrorCode::CommitmentMismatch,
            "recovered key does not match commitment",
        ));
    }
    Ok(())
}

/// Exit-status form of [`verify_unlock`]: 0 on acceptance, the rejection
/// cause's distinct code otherwise.
pub fn run_unlock<S: TransactionSource>(source: &S) -> i8 {
    match verify_unlock(source) {
        Ok(()) => 0,
        Err(e) => e.code.exit_code(),
    }
}
