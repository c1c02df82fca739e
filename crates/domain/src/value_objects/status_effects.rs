//! Status effect decoding.
//!
//! The store persists `status_effects` as JSON text while everything in
//! memory works on a `Vec<String>`. Decoding happens once, when a stored
//! record becomes a `Player`.

/// Decode a stored `status_effects` value into the in-memory sequence.
///
/// Blank text is an empty sequence. Text that is not a JSON array of strings
/// is logged and treated as empty, so a damaged record never blocks a turn.
pub fn decode_status_effects(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Vec<String>>(trimmed) {
        Ok(effects) => effects,
        Err(e) => {
            tracing::warn!(raw = %raw, error = %e, "Discarding undecodable status_effects");
            Vec::new()
        }
    }
}

/// Encode the in-memory sequence into the stored text form.
pub fn encode_status_effects(effects: &[String]) -> String {
    serde_json::to_string(effects).unwrap_or_else(|_| "[]".to_string())
}
