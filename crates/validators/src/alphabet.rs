/// The Bitcoin/Solana base58 alphabet: no `0`, `O`, `I` or `l`
pub const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Check a single character for alphabet membership
pub fn is_base58_char(c: char) -> bool {
    // The alphabet is pure ASCII, so anything wider can never match
    c.is_ascii() && BASE58_ALPHABET.as_bytes().contains(&(c as u8))
}

/// Check whether every character of `s` belongs to the base58 alphabet.
///
/// This is a membership filter only; nothing is decoded.
pub fn is_base58(s: &str) -> bool {
    s.chars().all(is_base58_char)
}
