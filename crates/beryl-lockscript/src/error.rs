use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    SyscallError,
    ScriptTooLarge,
    WitnessTooLarge,
    EncodingError,
    ArgumentsLengthError,
    InvalidWitnessCount,
    SignatureParseError,
    KeyRecoveryError,
    CommitmentMismatch,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::SyscallError => "LOCK_ERR_SYSCALL",
            ErrorCode::ScriptTooLarge => "LOCK_ERR_SCRIPT_TOO_LARGE",
            ErrorCode::WitnessTooLarge => "LOCK_ERR_WITNESS_TOO_LARGE",
            ErrorCode::EncodingError => "LOCK_ERR_ENCODING",
            ErrorCode::ArgumentsLengthError => "LOCK_ERR_ARGUMENTS_LEN",
            ErrorCode::InvalidWitnessCount => "LOCK_ERR_INVALID_WITNESS_COUNT",
            ErrorCode::SignatureParseError => "LOCK_ERR_SIG_PARSE",
            ErrorCode::KeyRecoveryError => "LOCK_ERR_KEY_RECOVERY",
            ErrorCode::CommitmentMismatch => "LOCK_ERR_COMMITMENT_MISMATCH",
        }
    }

    /// Process status for the host. 0 is reserved for success, 1 for the
    /// runtime's own generic failure value.
    pub fn exit_code(self) -> i8 {
        match self {
            ErrorCode::SyscallError => 2,
            ErrorCode::ScriptTooLarge => 3,
            ErrorCode::WitnessTooLarge => 4,
            ErrorCode::EncodingError => 5,
            ErrorCode::ArgumentsLengthError => 6,
            ErrorCode::InvalidWitnessCount => 7,
            ErrorCode::SignatureParseError => 8,
            ErrorCode::KeyRecoveryError => 9,
            ErrorCode::CommitmentMismatch => 10,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptError {
    pub code: ErrorCode,
    pub msg: &'static str,
}

impl ScriptError {
    pub fn new(code: ErrorCode, msg: &'static str) -> Self {
        Self { code, msg }
    }
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.msg.is_empty() {
            write!(f, "{}", self.code.as_str())
        } else {
            write!(f, "{}: {}", self.code.as_str(), self.msg)
        }
    }
}

impl std::error::Error for ScriptError {}
