//! String-level key case converters.
//!
//! Both converters are explicit character scans with global-replace
//! semantics: matches are found left to right and consume the characters
//! they cover, so no character participates in two matches.

/// Convert a single snake_case key to camelCase.
///
/// Every occurrence of `_` immediately followed by an ASCII letter is
/// replaced by that letter upper-cased. Anything else is copied through
/// untouched, so `_b` becomes `B`, `a__b` becomes `a_B`, and `_1` stays
/// `_1`.
pub fn camel_case_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut out = String::with_capacity(key.len());

    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '_' && i + 1 < chars.len() && chars[i + 1].is_ascii_alphabetic() {
            out.push(chars[i + 1].to_ascii_uppercase());
            i += 2;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }

    out
}

/// Convert a single camelCase key to snake_case.
///
/// An underscore is inserted between every word character and a following
/// ASCII uppercase letter; each match consumes both characters, so runs of
/// uppercase letters split pairwise (`aBCD` becomes `a_bc_d`). The whole
/// key is lower-cased at the end. Underscores count as word characters,
/// which means `x_Y` becomes `x__y`.
pub fn snake_case_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut out = String::with_capacity(key.len() + 4);

    let mut i = 0;
    while i < chars.len() {
        if i + 1 < chars.len() && is_word_char(chars[i]) && chars[i + 1].is_ascii_uppercase() {
            out.push(chars[i]);
            out.push('_');
            out.push(chars[i + 1]);
            i += 2;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }

    out.to_lowercase()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
