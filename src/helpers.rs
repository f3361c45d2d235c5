/// This function allows us to take both hex-encoded and raw bytes. It has
/// to be a heuristic: if there are input bytes that are not `[0-9a-f]`,
/// then it must be a binary string. Otherwise, we assume it’s hex encoded.
///
/// **Note**: there is a small probability that the user gave us a binary
/// string that only _looked_ like a hex-encoded one, but it’s rare enough
/// to ignore it.
pub fn binary_or_hex_heuristic(xs: &[u8]) -> Vec<u8> {
    let even_length = xs.len() % 2 == 0;
    let contains_non_hex = xs.iter().any(|&x| !x.is_ascii_hexdigit());

    if !even_length || contains_non_hex {
        return xs.to_vec();
    }

    hex::decode(xs).unwrap_or_else(|_| xs.to_vec())
}

/// Transaction files are either raw CBOR or hex text, the latter often with
/// a trailing newline.
pub fn decode_tx_file(contents: &[u8]) -> Vec<u8> {
    let trimmed = contents.trim_ascii();

    let looks_hex = !trimmed.is_empty()
        && trimmed.len() % 2 == 0
        && trimmed.iter().all(u8::is_ascii_hexdigit);

    if looks_hex {
        binary_or_hex_heuristic(trimmed)
    } else {
        contents.to_vec()
    }
}
