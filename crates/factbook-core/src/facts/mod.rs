//! Built-in fact tables, one module per language.
//!
//! Each table is authored in display order. The store copies them into owned
//! collections at startup; nothing here is mutated.

mod en;

/// Every built-in table as `(language code, facts)`.
pub const BUILTIN: &[(&str, &[&str])] = &[("EN", en::FACTS)];

/// True if `text` contains a standalone run of exactly four ASCII digits.
pub fn has_year(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i - start == 4 {
                return true;
            }
        } else {
            i += 1;
        }
    }
    false
}
