//! Issue metadata registry.
//!
//! Maps issue codes to static [`IssueMeta`]: category, blocking and
//! auto-fix classification, plus the explanation copy shown by
//! `feedfix explain`. Lookup is exact `(format_id, code)` first, then a
//! generic fallback keyed by the code's suffix, so every code a validator
//! can emit resolves to *some* metadata even for profiles without bespoke
//! copy yet.

mod generic;
mod profiles;

pub use generic::GENERIC_META;
pub use profiles::PROFILE_META;

use feedfix_types::meta::IssueMeta;

/// Resolve metadata for `code` under `format_id`.
///
/// `code` may be a full `"<format_id>/<name>"` code or a bare suffix.
pub fn get_meta(format_id: &str, code: &str) -> Option<&'static IssueMeta> {
    let suffix = code.split_once('/').map(|(_, s)| s).unwrap_or(code);
    let full = format!("{format_id}/{suffix}");

    if let Some(meta) = PROFILE_META.iter().find(|m| m.code == full) {
        return Some(meta);
    }
    GENERIC_META.iter().find(|m| m.code == suffix)
}

/// Look up metadata by a user-typed query: a full code, a bare suffix, or
/// a suffix with hyphens instead of underscores.
pub fn lookup(query: &str) -> Option<&'static IssueMeta> {
    let normalized = query.trim().to_lowercase().replace('-', "_");

    if let Some((format_id, suffix)) = normalized.split_once('/') {
        return get_meta(format_id, suffix);
    }
    GENERIC_META
        .iter()
        .find(|m| m.code == normalized)
        .or_else(|| PROFILE_META.iter().find(|m| m.code.ends_with(&format!("/{normalized}"))))
}

/// All generic codes, for `feedfix list-checks`.
pub fn generic_codes() -> Vec<&'static str> {
    GENERIC_META.iter().map(|m| m.code).collect()
}
