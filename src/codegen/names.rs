//! Rust Identifier Rendering
//!
//! Model names are mostly valid Rust already. These helpers convert casing,
//! replace characters Rust does not accept, and escape keywords.

use std::sync::OnceLock;

use regex::Regex;

/// Keywords that can be written as raw identifiers (`r#type`)
const RAW_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use",
    "where", "while", "abstract", "become", "box", "do", "final", "gen", "macro", "override",
    "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Keywords that cannot be raw identifiers
const RESERVED: &[&str] = &["self", "Self", "super", "crate", "_"];

/// Field and method names used by the emitted code itself
const GENERATED_MEMBERS: &[&str] = &["base", "new", "construct"];

fn invalid_chars() -> &'static Regex {
    static INVALID: OnceLock<Regex> = OnceLock::new();
    INVALID.get_or_init(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap())
}

/// Replace characters that are not valid in identifiers
pub fn sanitize(name: &str) -> String {
    let cleaned = invalid_chars().replace_all(name.trim(), "_").into_owned();
    if cleaned.is_empty() {
        return "_unnamed".to_string();
    }
    if cleaned.starts_with(|c: char| c.is_ascii_digit()) {
        return format!("_{cleaned}");
    }
    cleaned
}

/// Convert a model name to snake_case, keeping acronym runs together
///
/// `sensorAccuracy` -> `sensor_accuracy`, `ACDCTerminal` -> `acdc_terminal`
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = sanitize(name).chars().collect();
    let mut result = String::with_capacity(chars.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_ascii_uppercase() => next.is_some_and(|n| n.is_ascii_lowercase()),
                _ => false,
            };
            if boundary && !result.ends_with('_') {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// SCREAMING_SNAKE_CASE, for constants
pub fn screaming_case(name: &str) -> String {
    snake_case(name).trim_start_matches('_').to_ascii_uppercase()
}

/// Escape a keyword, either as a raw identifier or with a trailing underscore
pub fn escape(ident: String) -> String {
    if RESERVED.contains(&ident.as_str()) {
        format!("{ident}_")
    } else if RAW_KEYWORDS.contains(&ident.as_str()) {
        format!("r#{ident}")
    } else {
        ident
    }
}

/// Struct field or method name for a model attribute
pub fn member(name: &str) -> String {
    let ident = snake_case(name);
    if GENERATED_MEMBERS.contains(&ident.as_str()) {
        return format!("{ident}_");
    }
    escape(ident)
}

/// Type or module name, casing untouched
pub fn type_name(name: &str) -> String {
    escape(sanitize(name))
}

/// Method name with a prefix (`set_`, `add_`, `remove_`)
pub fn prefixed(prefix: &str, name: &str) -> String {
    format!("{prefix}_{}", snake_case(name))
}
