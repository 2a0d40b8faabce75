//! Log truncation
//!
//! Domain responses carry full DKIM public keys; logging them whole buries
//! everything else, so bodies are cut before they reach the logger.

/// Bytes kept by [`truncate_for_log`].
const TRUNCATE_LIMIT: usize = 256;

/// Largest char boundary `<= index`. `str::floor_char_boundary` needs 1.91.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// Returns `s` unchanged when short, otherwise its first `TRUNCATE_LIMIT`
/// bytes followed by the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let cut = floor_char_boundary(s, TRUNCATE_LIMIT);
    format!("{}... [{} bytes total]", &s[..cut], s.len())
}
