//! Naming conventions for generated Kotlin source.
//!
//! Both suffixes are part of the generated API surface: callers name
//! delegate parameters explicitly (`RepoProxy(fetchDelegate = ...)`), so
//! they must stay stable across regenerations.

/// Suffix appended to the original simple name to form the proxy name.
pub const PROXY_SUFFIX: &str = "Proxy";

/// Suffix appended to a member name to form its delegate parameter/field.
pub const DELEGATE_SUFFIX: &str = "Delegate";

/// Kotlin hard keywords that must be backtick-escaped when used as
/// identifiers in generated source.
const KOTLIN_HARD_KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while",
];

/// The generated type name for an original simple name.
pub fn proxy_name(original: &str) -> String {
    format!("{}{}", original, PROXY_SUFFIX)
}

/// The delegate parameter/field name for a member name.
pub fn delegate_name(member: &str) -> String {
    format!("{}{}", member, DELEGATE_SUFFIX)
}

/// The output file name for a generated type name.
pub fn file_name(proxy_name: &str) -> String {
    format!("{}.kt", proxy_name)
}

/// Escape an identifier with backticks if it collides with a Kotlin hard
/// keyword. Member and parameter names arrive from Kotlin source and are
/// normally fine; forwarded names like `in` or `object` are not.
pub fn escape_identifier(name: &str) -> String {
    if KOTLIN_HARD_KEYWORDS.contains(&name) {
        format!("`{}`", name)
    } else {
        name.to_string()
    }
}
