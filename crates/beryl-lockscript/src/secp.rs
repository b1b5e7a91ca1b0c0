use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use secp256k1::{Message, PublicKey, Secp256k1};

use crate::constants::{COMMITMENT_SIZE, PUBKEY_SIZE, RECID_INDEX, SIGNATURE_SIZE};
use crate::error::{ErrorCode, ScriptError};
use crate::hash::hash256;

/// Splits a 65-byte recoverable signature into its compact encoding and
/// trailing recovery id.
pub(crate) fn parse_recoverable(
    sig: &[u8; SIGNATURE_SIZE],
) -> Result<RecoverableSignature, ScriptError> {
    let recid = RecoveryId::from_i32(i32::from(sig[RECID_INDEX])).map_err(|_| {
        ScriptError::new(ErrorCode::SignatureParseError, "invalid recovery id")
    })?;
    RecoverableSignature::from_compact(&sig[..RECID_INDEX], recid).map_err(|_| {
        ScriptError::new(
            ErrorCode::SignatureParseError,
            "invalid compact signature encoding",
        )
    })
}

pub(crate) fn recover_pubkey(
    digest: &[u8; 32],
    sig: &RecoverableSignature,
) -> Result<PublicKey, ScriptError> {
    let secp = Secp256k1::verification_only();
    secp.recover_ecdsa(&Message::from_digest(*digest), sig)
        .map_err(|_| ScriptError::new(ErrorCode::KeyRecoveryError, "public key recovery failed"))
}

/// First 20 bytes of the chain hash of the compressed public key.
pub(crate) fn pubkey_commitment(pubkey: &PublicKey) -> [u8; COMMITMENT_SIZE] {
    let serialized: [u8; PUBKEY_SIZE] = pubkey.serialize();
    let digest = hash256(&serialized);
    let mut out = [0u8; COMMITMENT_SIZE];
    out.copy_from_slice(&digest[..COMMITMENT_SIZE]);
    out
}
