use beryl_lockscript::hash::hash256;
use beryl_lockscript::{
    unlock_digest, verify_unlock, witness_lock, MemorySource, TransactionSource, WitnessScope,
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
struct Request {
    op: String,

    #[serde(default)]
    script_hex: String,

    #[serde(default)]
    tx_hash: String,

    #[serde(default)]
    witnesses: Vec<String>,

    /// One 32-byte lock-script hash per input. Empty means every input is
    /// locked by the script under test.
    #[serde(default)]
    input_lock_hashes: Vec<String>,
}

#[derive(Serialize)]
struct Response {
    ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    err: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<i8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    digest: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    script_hash: Option<String>,
}

fn build_source(req: &Request) -> Result<MemorySource, String> {
    let script = hex::decode(&req.script_hex).map_err(|_| "bad script hex".to_string())?;

    let tx_hash_bytes = hex::decode(&req.tx_hash).map_err(|_| "bad tx_hash".to_string())?;
    if tx_hash_bytes.len() != 32 {
        return Err("bad tx_hash".to_string());
    }
    let mut tx_hash = [0u8; 32];
    tx_hash.copy_from_slice(&tx_hash_bytes);

    let mut witnesses = Vec::with_capacity(req.witnesses.len());
    for w in &req.witnesses {
        witnesses.push(hex::decode(w).map_err(|_| "bad witness hex".to_string())?);
    }

    if req.input_lock_hashes.is_empty() {
        let count = witnesses.len();
        return Ok(MemorySource::single_group(tx_hash, script, count, witnesses));
    }

    let mut input_lock_hashes = Vec::with_capacity(req.input_lock_hashes.len());
    for h in &req.input_lock_hashes {
        let b = hex::decode(h).map_err(|_| "bad input lock hash".to_string())?;
        if b.len() != 32 {
            return Err("bad input lock hash".to_string());
        }
        let mut a = [0u8; 32];
        a.copy_from_slice(&b);
        input_lock_hashes.push(a);
    }
    Ok(MemorySource::new(tx_hash, script, input_lock_hashes, witnesses))
}

fn main() {
    let req: Request = match serde_json::from_reader(std::io::stdin()) {
        Ok(v) => v,
        Err(e) => {
            let resp = Response {
                ok: false,
                err: Some(format!("bad request: {e}")),
                code: None,
                digest: None,
                script_hash: None,
            };
            let _ = serde_json::to_writer(std::io::stdout(), &resp);
            return;
        }
    };

    match req.op.as_str() {
        "verify_unlock" => {
            let source = match build_source(&req) {
                Ok(s) => s,
                Err(msg) => {
                    let resp = Response {
                        ok: false,
                        err: Some(msg),
                        code: None,
                        digest: None,
                        script_hash: None,
                    };
                    let _ = serde_json::to_writer(std::io::stdout(), &resp);
                    return;
                }
            };
            let (code, err) = match verify_unlock(&source) {
                Ok(()) => (0i8, None),
                Err(e) => (e.code.exit_code(), Some(e.code.as_str().to_string())),
            };
            let resp = Response {
                ok: code == 0,
                err,
                code: Some(code),
                digest: None,
                script_hash: None,
            };
            let _ = serde_json::to_writer(std::io::stdout(), &resp);
            std::process::exit(i32::from(code));
        }
        "unlock_digest" => {
            let source = match build_source(&req) {
                Ok(s) => s,
                Err(msg) => {
                    let resp = Response {
                        ok: false,
                        err: Some(msg),
                        code: None,
                        digest: None,
                        script_hash: None,
                    };
                    let _ = serde_json::to_writer(std::io::stdout(), &resp);
                    return;
                }
            };
            match signing_digest(&source) {
                Ok(digest) => {
                    let resp = Response {
                        ok: true,
                        err: None,
                        code: None,
                        digest: Some(hex::encode(digest)),
                        script_hash: None,
                    };
                    let _ = serde_json::to_writer(std::io::stdout(), &resp);
                }
                Err(e) => {
                    let resp = Response {
                        ok: false,
                        err: Some(e.code.as_str().to_string()),
                        code: Some(e.code.exit_code()),
                        digest: None,
                        script_hash: None,
                    };
                    let _ = serde_json::to_writer(std::io::stdout(), &resp);
                }
            }
        }
        "script_hash" => {
            let script = match hex::decode(&req.script_hex) {
                Ok(v) => v,
                Err(_) => {
                    let resp = Response {
                        ok: false,
                        err: Some("bad script hex".to_string()),
                        code: None,
                        digest: None,
                        script_hash: None,
                    };
                    let _ = serde_json::to_writer(std::io::stdout(), &resp);
                    return;
                }
            };
            let resp = Response {
                ok: true,
                err: None,
                code: None,
                digest: None,
                script_hash: Some(hex::encode(hash256(&script))),
            };
            let _ = serde_json::to_writer(std::io::stdout(), &resp);
        }
        _ => {
            let resp = Response {
                ok: false,
                err: Some("unknown op".to_string()),
                code: None,
                digest: None,
                script_hash: None,
            };
            let _ = serde_json::to_writer(std::io::stdout(), &resp);
        }
    }
}

/// The digest a signer must sign: computed from the first group witness,
/// whose lock field carries a 65-byte placeholder at signing time.
fn signing_digest(
    source: &MemorySource,
) -> Result<[u8; 32], beryl_lockscript::ScriptError> {
    use beryl_lockscript::constants::{MAX_WITNESS_SIZE, SIGNATURE_SIZE};
    use beryl_lockscript::{ErrorCode, ScriptError};

    let witness = source
        .load_witness(0, WitnessScope::ScriptGroup)
        .map_err(|_| ScriptError::new(ErrorCode::SyscallError, "load_witness failed"))?;
    if witness.len() > MAX_WITNESS_SIZE {
        return Err(ScriptError::new(
            ErrorCode::WitnessTooLarge,
            "first group witness exceeds buffer ceiling",
        ));
    }
    let lock = witness_lock(&witness)?;
    if lock.len != SIGNATURE_SIZE {
        return Err(ScriptError::new(
            ErrorCode::ArgumentsLengthError,
            "witness lock must be a 65-byte recoverable signature",
        ));
    }
    let tx_hash = source
        .load_tx_hash()
        .map_err(|_| ScriptError::new(ErrorCode::SyscallError, "load_tx_hash failed"))?;
    unlock_digest(source, &tx_hash, &witness, lock)
}
