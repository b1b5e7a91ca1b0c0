pub mod constants;
pub mod error;
pub mod hash;
mod record;
mod secp;
pub mod sighash;
pub mod source;
mod unlock;

pub use error::{ErrorCode, ScriptError};
pub use record::{encode_bytes, encode_table, script_args, witness_lock, FieldSlice};
pub use sighash::unlock_digest;
pub use source::{MemorySource, SourceError, TransactionSource, WitnessScope};
pub use unlock::{run_unlock, verify_unlock};
