use crate::error::{ErrorCode, ScriptError};

/// Script record field layout: 0 = code hash, 1 = hash type, 2 = args.
const SCRIPT_ARGS_FIELD: usize = 2;
/// Witness record field layout: 0 = lock, 1 = input extra, 2 = output extra.
const WITNESS_LOCK_FIELD: usize = 0;

/// A validated (offset, length) view into the record buffer it was cut from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSlice {
    pub offset: usize,
    pub len: usize,
}

impl FieldSlice {
    pub fn end(self) -> usize {
        self.offset + self.len
    }

    pub fn bytes(self, buf: &[u8]) -> &[u8] {
        &buf[self.offset..self.end()]
    }
}

fn read_u32_le(b: &[u8], off: usize) -> Result<usize, ScriptError> {
    if off + 4 > b.len() {
        return Err(ScriptError::new(
            ErrorCode::EncodingError,
            "record truncated (u32le)",
        ));
    }
    let v = u32::from_le_bytes(b[off..off + 4].try_into().unwrap());
    Ok(v as usize)
}

/// Validates the record header and returns the field count.
fn table_field_count(buf: &[u8]) -> Result<usize, ScriptError> {
    let full_size = read_u32_le(buf, 0)?;
    if full_size != buf.len() {
        return Err(ScriptError::new(
            ErrorCode::EncodingError,
            "record size header does not match buffer",
        ));
    }
    if full_size == 4 {
        return Ok(0);
    }
    let first_offset = read_u32_le(buf, 4)?;
    if first_offset < 8 || first_offset % 4 != 0 || first_offset > full_size {
        return Err(ScriptError::new(
            ErrorCode::EncodingError,
            "record offset table malformed",
        ));
    }
    Ok(first_offset / 4 - 1)
}

/// Cuts field `index` out of an offset-table record.
pub fn table_field(buf: &[u8], index: usize) -> Result<FieldSlice, ScriptError> {
    let count = table_field_count(buf)?;
    if index >= count {
        return Err(ScriptError::new(
            ErrorCode::EncodingError,
            "record field absent",
        ));
    }
    let header = 4 + 4 * count;
    let start = read_u32_le(buf, 4 + 4 * index)?;
    let end = if index + 1 < count {
        read_u32_le(buf, 4 + 4 * (index + 1))?
    } else {
        buf.len()
    };
    if start < header || start > end || end > buf.len() {
        return Err(ScriptError::new(
            ErrorCode::EncodingError,
            "record field offsets out of range",
        ));
    }
    Ok(FieldSlice {
        offset: start,
        len: end - start,
    })
}

/// Interprets a field as a length-prefixed byte string and returns the
/// payload view.
pub fn bytes_payload(buf: &[u8], field: FieldSlice) -> Result<FieldSlice, ScriptError> {
    if field.len < 4 {
        return Err(ScriptError::new(
            ErrorCode::EncodingError,
            "byte string shorter than its length prefix",
        ));
    }
    let declared = read_u32_le(buf, field.offset)?;
    if declared > field.len - 4 {
        return Err(ScriptError::new(
            ErrorCode::EncodingError,
            "byte string length exceeds field",
        ));
    }
    Ok(FieldSlice {
        offset: field.offset + 4,
        len: declared,
    })
}

/// The args byte string of a script record.
pub fn script_args(script: &[u8]) -> Result<FieldSlice, ScriptError> {
    let field = table_field(script, SCRIPT_ARGS_FIELD)?;
    bytes_payload(script, field)
}

/// The lock byte string of a witness record. The field is optional in the
/// encoding but required here: an empty slot is an encoding failure.
pub fn witness_lock(witness: &[u8]) -> Result<FieldSlice, ScriptError> {
    let field = table_field(witness, WITNESS_LOCK_FIELD)?;
    if field.len == 0 {
        return Err(ScriptError::new(
            ErrorCode::EncodingError,
            "witness lock field absent",
        ));
    }
    bytes_payload(witness, field)
}

pub fn encode_bytes(payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(4 + payload.len());
    out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    out.extend_from_slice(payload);
    out
}

/// Encodes an offset-table record. An empty vec encodes an absent optional
/// field (a zero-length slot).
pub fn encode_table(fields: &[Vec<u8>]) -> Vec<u8> {
    let header = 4 + 4 * fields.len();
    let full_size = header + fields.iter().map(Vec::len).sum::<usize>();
    let mut out = Vec::with_capacity(full_size);
    out.extend_from_slice(&(full_size as u32).to_le_bytes());
    let mut offset = header;
    for f in fields {
        out.extend_from_slice(&(offset as u32).to_le_bytes());
        offset += f.len();
    }
    for f in fields {
        out.extend_from_slice(f);
    }
    out
}
