//! Landmark name canonicalization.
//!
//! The landmarks file separates fields with a single space, so a canonical
//! name must never contain whitespace.  The table is fixed:
//!
//! | Input                         | Output   |
//! |-------------------------------|----------|
//! | any whitespace (`char::is_whitespace`) | `_` |
//! | `-`  hyphen-minus             | `_`      |
//! | `/`  slash                    | `_`      |
//! | `'`  and `’` (U+2019)         | removed  |
//! | `.`  period                   | removed  |
//!
//! Every other character passes through unchanged, so `"St. Patrick's
//! Cathedral"` becomes `St_Patricks_Cathedral` and `"City-Hall"` collides
//! with `"City Hall"` on `City_Hall`.

/// Apply the substitution table to `name`.
pub fn canonical_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '\'' | '\u{2019}' | '.' => {}
            '-' | '/' => out.push('_'),
            c if c.is_whitespace() => out.push('_'),
            c => out.push(c),
        }
    }
    out
}
