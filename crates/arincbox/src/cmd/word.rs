/// Parse a word the way C's `strtoul(s, NULL, 0)` reads it: `0x`/`0X` is
/// hex, a leading `0` is octal, anything else decimal. Signs and trailing
/// garbage are rejected, and the value must fit in 32 bits.
pub fn parse_word(input: &str) -> Result<u32, String> {
    let text = input.trim();
    let (digits, radix) = if let Some(hex) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        (hex, 16)
    } else if text.len() > 1 && text.starts_with('0') {
        (&text[1..], 8)
    } else {
        (text, 10)
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(format!("invalid word: {text:?}"));
    }

    u32::from_str_radix(digits, radix).map_err(|err| format!("invalid word {text:?}: {err}"))
}

/// Parse hex bytes separated by whitespace or commas. Tokens may carry a
/// `0x` prefix; longer tokens are read as runs of byte pairs ("06110D").
pub fn parse_hex_bytes(input: &str) -> Result<Vec<u8>, String> {
    let mut bytes = Vec::new();
    for token in input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        let digits = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("invalid hex byte: {token:?}"));
        }

        if digits.len() <= 2 {
            bytes.push(parse_pair(digits, token)?);
            continue;
        }

        if digits.len() % 2 != 0 {
            return Err(format!("odd number of hex digits: {token:?}"));
        }
        for i in (0..digits.len()).step_by(2) {
            bytes.push(parse_pair(&digits[i..i + 2], token)?);
        }
    }
    Ok(bytes)
}

fn parse_pair(digits: &str, token: &str) -> Result<u8, String> {
    u8::from_str_radix(digits, 16).map_err(|err| format!("invalid hex byte {token:?}: {err}"))
}
