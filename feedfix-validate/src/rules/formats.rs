use crate::accumulator::IssueAccumulator;
use crate::context::RuleContext;
use crate::rules::Rule;
use feedfix_profiles::{ConfigError, FieldKind, FieldSpec};
use feedfix_types::issue::Issue;
use url::Url;

/// Row-level format checks driven by the profile's field specs.
///
/// Blank cells are skipped everywhere: missing values are the business of
/// the required-value rule, not the format rules.
pub(crate) struct FieldFormats;

impl Rule for FieldFormats {
    fn check(&self, cx: &RuleContext<'_>, out: &mut IssueAccumulator) -> Result<(), ConfigError> {
        for field in &cx.ruleset.fields {
            if !cx.table.has_header(field.column) {
                continue;
            }
            for row in 0..cx.table.rows.len() {
                let value = cx.table.cell(row, field.column);
                if value.trim().is_empty() {
                    continue;
                }
                if let Some((message, suggestion)) = check_value(field, value) {
                    out.push(Issue {
                        severity: field.severity,
                        code: cx.ruleset.code(field.code),
                        row: Some(row),
                        column: Some(field.column.to_string()),
                        message,
                        suggestion,
                    });
                }
            }
        }
        Ok(())
    }
}

/// `None` when the value is acceptable; otherwise the issue message and an
/// optional concrete suggestion.
fn check_value(field: &FieldSpec, value: &str) -> Option<(String, Option<String>)> {
    match &field.kind {
        FieldKind::Boolean {
            canonical_true,
            canonical_false,
            truthy,
            falsy,
        } => {
            if value == *canonical_true || value == *canonical_false {
                return None;
            }
            let suggestion = normalize_boolean(value, canonical_true, canonical_false, truthy, falsy)
                .map(|token| format!("Replace with {token}"));
            Some((
                format!(
                    "{:?} is not a valid {} value (expected {} or {})",
                    value, field.column, canonical_true, canonical_false
                ),
                suggestion,
            ))
        }
        FieldKind::Money => {
            if is_plain_decimal(value) {
                return None;
            }
            Some((
                format!("{:?} is not a plain decimal amount", value),
                Some("Remove currency symbols, separators and whitespace".to_string()),
            ))
        }
        FieldKind::Integer => {
            if is_plain_integer(value) {
                return None;
            }
            Some((format!("{:?} is not a whole number", value), None))
        }
        FieldKind::Enum { allowed, synonyms } => {
            if allowed.iter().any(|a| *a == value) {
                return None;
            }
            let suggestion = normalize_enum(value, allowed, synonyms)
                .map(|token| format!("Replace with {token:?}"));
            Some((
                format!(
                    "{:?} is not one of: {}",
                    value,
                    allowed.join(", ")
                ),
                suggestion,
            ))
        }
        FieldKind::Url => {
            if is_http_url(value) {
                return None;
            }
            Some((format!("{:?} is not an http(s) URL", value), None))
        }
        FieldKind::Handle => {
            if is_valid_handle(value) {
                return None;
            }
            Some((
                format!(
                    "{:?} may only contain lowercase letters, digits and hyphens",
                    value
                ),
                Some(format!("Use {:?}", slugify(value))),
            ))
        }
        FieldKind::Text { max_len } => {
            let len = value.chars().count();
            if len <= *max_len {
                return None;
            }
            Some((
                format!(
                    "{} is {} characters long (limit {})",
                    field.column, len, max_len
                ),
                Some(format!("Shorten to at most {max_len} characters")),
            ))
        }
    }
}

/// The canonical token for a recognizable boolean spelling, if any.
pub fn normalize_boolean(
    value: &str,
    canonical_true: &str,
    canonical_false: &str,
    truthy: &[&str],
    falsy: &[&str],
) -> Option<String> {
    let key = value.trim().to_lowercase();
    if key == canonical_true.to_lowercase() || truthy.iter().any(|t| *t == key) {
        return Some(canonical_true.to_string());
    }
    if key == canonical_false.to_lowercase() || falsy.iter().any(|f| *f == key) {
        return Some(canonical_false.to_string());
    }
    None
}

/// The allowed token a recognizable enum spelling maps onto, if any.
pub fn normalize_enum(
    value: &str,
    allowed: &[&str],
    synonyms: &[(&str, &str)],
) -> Option<String> {
    let key = value.trim().to_lowercase();
    if let Some(token) = allowed.iter().find(|a| a.to_lowercase() == key) {
        return Some(token.to_string());
    }
    synonyms
        .iter()
        .find(|(from, _)| *from == key)
        .map(|(_, to)| to.to_string())
}

/// A finite decimal with no surrounding whitespace, symbols or separators.
pub fn is_plain_decimal(value: &str) -> bool {
    if value != value.trim() {
        return false;
    }
    value
        .parse::<f64>()
        .map(|n| n.is_finite())
        .unwrap_or(false)
}

/// Non-negative integer digits only.
pub fn is_plain_integer(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

pub fn is_http_url(value: &str) -> bool {
    Url::parse(value)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Lowercase alphanumerics and hyphens, no leading/trailing/double hyphen.
pub fn is_valid_handle(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// Best-effort slug for the suggestion text. Not applied automatically:
/// rewriting a grouping key changes which rows form a product.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut last_hyphen = true;
    for c in value.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
            last_hyphen = false;
        } else if !last_hyphen {
            slug.push('-');
            last_hyphen = true;
        }
    }
    slug.trim_end_matches('-').to_string()
}
