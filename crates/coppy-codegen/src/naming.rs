//! Naming convention utilities for code generation.
//!
//! Content keys are authored in a CMS and can be anything JSON allows. This module
//! turns them into Rust type names and identifiers.
//!
//! # Supported Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `heroBanner` | [`to_pascal_case`] | `HeroBanner` |
//! | `heroBanner` | [`to_snake_case`] | `hero_banner` |
//! | `word` | [`capitalize`] | `Word` |
//! | `type` | [`field_ident`] | `r#type` |
//! | `Page` + `hero` | [`nested_type_name`] | `PageHero` |

/// Default name of the root content type.
pub const DEFAULT_ROOT_NAME: &str = "CoppyContent";

/// Identifiers the generated code uses itself. Keys that map to one of these get a
/// trailing underscore.
const RESERVED_IDENTS: &[&str] = &[
    "obj",
    "update",
    "create_from",
    "try_string",
    "try_string_item",
    "self",
    "super",
    "crate",
];

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Letters in any script and ASCII digits make up words; everything else separates them.
fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit()
}

/// Convert a content key to PascalCase.
///
/// Any character that is not a letter or digit separates words. The rest of each word is kept
/// as written, so camelCase keys keep their inner capitals.
///
/// # Examples
///
/// ```
/// use coppy_codegen::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("hero_banner"), "HeroBanner");
/// assert_eq!(to_pascal_case("hero-banner"), "HeroBanner");
/// assert_eq!(to_pascal_case("heroBanner"), "HeroBanner");
/// assert_eq!(to_pascal_case("标题"), "标题");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| !is_word_char(c))
        .map(capitalize)
        .collect()
}

/// Capitalize the first letter of a string.
///
/// # Examples
///
/// ```
/// use coppy_codegen::naming::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a content key to snake_case.
///
/// Word breaks come from separators, lower-to-upper transitions and the end of an
/// acronym (`URLPath` becomes `url_path`). Letters from any script are kept;
/// everything other than letters and ASCII digits is treated as a separator.
///
/// # Examples
///
/// ```
/// use coppy_codegen::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("heroBanner"), "hero_banner");
/// assert_eq!(to_snake_case("call to action"), "call_to_action");
/// assert_eq!(to_snake_case("Überschrift"), "überschrift");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::new();
    let mut pending_separator = false;

    for (i, &c) in chars.iter().enumerate() {
        if !is_word_char(c) {
            pending_separator = true;
            continue;
        }

        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower)
            {
                pending_separator = true;
            }
        }

        if pending_separator && !result.is_empty() {
            result.push('_');
        }
        pending_separator = false;
        result.extend(c.to_lowercase());
    }

    result
}

/// Rust identifier used for a key's struct field and accessor.
///
/// # Examples
///
/// ```
/// use coppy_codegen::naming::field_ident;
///
/// assert_eq!(field_ident("ctaLabel"), "cta_label");
/// assert_eq!(field_ident("type"), "r#type");
/// assert_eq!(field_ident("update"), "update_");
/// assert_eq!(field_ident("2col"), "_2col");
/// ```
pub fn field_ident(key: &str) -> String {
    let snake = to_snake_case(key);

    if snake.is_empty() {
        return "field".to_string();
    }
    if snake.starts_with(|c: char| c.is_ascii_digit()) {
        return format!("_{snake}");
    }
    if RESERVED_IDENTS.contains(&snake.as_str()) {
        return format!("{snake}_");
    }
    if KEYWORDS.contains(&snake.as_str()) {
        return format!("r#{snake}");
    }

    snake
}

/// Name of the descriptor nested under `parent` at `key`.
pub fn nested_type_name(parent: &str, key: &str) -> String {
    format!("{parent}{}", to_pascal_case(key))
}

/// Whether `name` can be used as the root type name.
pub fn is_valid_type_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() => {}
        _ => return false,
    }

    name != "Self" && chars.all(|c| is_word_char(c) || c == '_')
}
