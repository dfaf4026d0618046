use crate::engine::TokenizeError;

/// Decode UTF-16 code units (as handed over by a JS or Windows host) into a
/// `String`. Surrogate pairs become single code points; an unpaired surrogate
/// is rejected rather than replaced, so decoding never loses characters.
pub fn decode_utf16(units: &[u16]) -> Result<String, TokenizeError> {
    String::from_utf16(units).map_err(|e| TokenizeError::InvalidInput(e.to_string()))
}
