use core::fmt;

use crate::hash::hash256;

/// Which witnesses an index ranges over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WitnessScope {
    /// Every witness of the transaction, in input order.
    Transaction,
    /// Only witnesses of inputs governed by the running script.
    ScriptGroup,
}

/// `IndexOutOfBound` terminates iteration; it is never a fault. Anything
/// else the source cannot answer is `Failure`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceError {
    IndexOutOfBound,
    Failure,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::IndexOutOfBound => write!(f, "index out of bound"),
            SourceError::Failure => write!(f, "source failure"),
        }
    }
}

impl std::error::Error for SourceError {}

/// The transaction context the verifier runs against. Verification code
/// must depend only on this narrow interface.
pub trait TransactionSource {
    fn load_script(&self) -> Result<Vec<u8>, SourceError>;
    fn load_script_hash(&self) -> Result<[u8; 32], SourceError>;
    fn load_tx_hash(&self) -> Result<[u8; 32], SourceError>;
    fn load_witness(&self, index: usize, scope: WitnessScope) -> Result<Vec<u8>, SourceError>;
    fn input_count(&self) -> Result<usize, SourceError>;
}

/// In-memory transaction view backing tests, benches, fuzzing and the CLI.
///
/// Witness `i` belongs to input `i`. An input joins the running script's
/// group when its lock-script hash equals the chain hash of the current
/// script record.
#[derive(Clone, Debug)]
pub struct MemorySource {
    tx_hash: [u8; 32],
    script: Vec<u8>,
    input_lock_hashes: Vec<[u8; 32]>,
    witnesses: Vec<Vec<u8>>,
}

impl MemorySource {
    pub fn new(
        tx_hash: [u8; 32],
        script: Vec<u8>,
        input_lock_hashes: Vec<[u8; 32]>,
        witnesses: Vec<Vec<u8>>,
    ) -> Self {
        Self {
            tx_hash,
            script,
            input_lock_hashes,
            witnesses,
        }
    }

    /// A view where every input is locked by `script`.
    pub fn single_group(
        tx_hash: [u8; 32],
        script: Vec<u8>,
        input_count: usize,
        witnesses: Vec<Vec<u8>>,
    ) -> Self {
        let lock_hash = hash256(&script);
        Self::new(tx_hash, script, vec![lock_hash; input_count], witnesses)
    }

    fn group_indices(&self) -> Vec<usize> {
        let script_hash = hash256(&self.script);
        self.input_lock_hashes
            .iter()
            .enumerate()
            .filter(|(_, h)| **h == script_hash)
            .map(|(i, _)| i)
            .collect()
    }
}

impl TransactionSource for MemorySource {
    fn load_script(&self) -> Result<Vec<u8>, SourceError> {
        Ok(self.script.clone())
    }

    fn load_script_hash(&self) -> Result<[u8; 32], SourceError> {
        Ok(hash256(&self.script))
    }

    fn load_tx_hash(&self) -> Result<[u8; 32], SourceError> {
        Ok(self.tx_hash)
    }

    fn load_witness(&self, index: usize, scope: WitnessScope) -> Result<Vec<u8>, SourceError> {
        let witness_index = match scope {
            WitnessScope::Transaction => index,
            WitnessScope::ScriptGroup => *self
                .group_indices()
                .get(index)
                .ok_or(SourceError::IndexOutOfBound)?,
        };
        self.witnesses
            .get(witness_index)
            .cloned()
            .ok_or(SourceError::IndexOutOfBound)
    }

    fn input_count(&self) -> Result<usize, SourceError> {
        Ok(self.input_lock_hashes.len())
    }
}
