//! Embedding arbitrary bytes in a double-quoted Lua string literal.

use std::fmt::Write;

/// Quote `bytes` as a double-quoted Lua string literal.
///
/// Backslash becomes `\\`, newline `\n`, double quote `\"`, and carriage
/// return `\r`. Bytes that are not valid UTF-8 become three-digit decimal
/// escapes (`\255`), which Lua reads back as the same byte.
pub fn quote_lua_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('"');
    for chunk in bytes.utf8_chunks() {
        for c in chunk.valid().chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '"' => out.push_str("\\\""),
                '\r' => out.push_str("\\r"),
                c => out.push(c),
            }
        }
        for byte in chunk.invalid() {
            // Writing to a String cannot fail.
            let _ = write!(out, "\\{byte:03}");
        }
    }
    out.push('"');
    out
}
