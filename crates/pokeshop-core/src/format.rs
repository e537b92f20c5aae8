//! Display formatting helpers.

/// Uppercases the first character, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Deterministic `#rrggbb` colour for a type name.
///
/// PokeAPI has no type colours, so the name is hashed (31-multiplier over
/// UTF-16 code units, 32-bit wrapping) and the low 24 bits are used.
pub fn type_color(name: &str) -> String {
    let hash = name
        .encode_utf16()
        .fold(0u32, |acc, unit| acc.wrapping_mul(31).wrapping_add(u32::from(unit)));
    format!("#{:06x}", hash & 0x00ff_ffff)
}
