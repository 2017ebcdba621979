//! Deterministic identifier generation for the emitted code.
//!
//! Field identifiers follow exported-identifier conventions: the schema name
//! is capitalized and then normalized so that common initialisms are written
//! in a single case (`userId` becomes `UserID`, `homepageUrl` becomes
//! `HomepageURL`). Argument identifiers keep the schema name but are
//! rewritten when they collide with a reserved word of the target language.

/// Initialisms that are always rendered entirely in upper case (or entirely
/// in lower case when they start an unexported identifier).
pub const COMMON_INITIALISMS: &[&str] = &[
    "ACL", "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP",
    "HTTPS", "ID", "IP", "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA",
    "SMTP", "SQL", "SSH", "TCP", "TLS", "TTL", "UDP", "UI", "UID", "UUID",
    "URI", "URL", "UTF8", "VM", "XML", "XMPP", "XSRF", "XSS",
];

/// Words that can't be used as a variable name in generated code.
pub const RESERVED_IDENTIFIERS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else",
    "fallthrough", "for", "func", "go", "goto", "if", "import", "interface",
    "map", "package", "range", "return", "select", "struct", "switch", "type",
    "var",
];

/// Upper-case the first character of `name`.
pub fn uc_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Rewrite an argument name that collides with a reserved word by prefixing
/// it with an underscore. All other names are returned unchanged.
pub fn sanitize_arg_name(name: &str) -> String {
    if RESERVED_IDENTIFIERS.contains(&name) {
        format!("_{name}")
    } else {
        name.to_string()
    }
}

/// Normalize an identifier's casing.
///
/// The name is split into words at underscores and at every lower-to-upper
/// transition. Words matching a [common initialism](COMMON_INITIALISMS) are
/// rewritten in upper case (lower case if it is the leading word and starts
/// lower-case), other all-lowercase words after the first are capitalized,
/// and underscores are dropped (except a single one separating two digits).
pub fn lint_name(name: &str) -> String {
    if name == "_" || name.chars().all(char::is_lowercase) {
        return name.to_string();
    }

    let mut chars: Vec<char> = name.chars().collect();
    let mut word_start = 0;
    let mut i = 0;
    while i < chars.len() {
        let mut end_of_word = false;
        if i + 1 == chars.len() {
            end_of_word = true;
        } else if chars[i + 1] == '_' {
            end_of_word = true;
            let mut num_underscores = 1;
            while i + num_underscores + 1 < chars.len()
                && chars[i + num_underscores + 1] == '_' {
                num_underscores += 1;
            }

            // Keep one underscore when it separates two digits.
            if i + num_underscores + 1 < chars.len()
                && chars[i].is_ascii_digit()
                && chars[i + num_underscores + 1].is_ascii_digit() {
                num_underscores -= 1;
            }
            chars.drain(i + 1..i + 1 + num_underscores);
        } else if chars[i].is_lowercase() && !chars[i + 1].is_lowercase() {
            end_of_word = true;
        }
        i += 1;
        if !end_of_word {
            continue;
        }

        let word: String = chars[word_start..i].iter().collect();
        let upper = word.to_uppercase();
        if COMMON_INITIALISMS.contains(&upper.as_str()) {
            let replacement =
                if word_start == 0 && chars[word_start].is_lowercase() {
                    upper.to_lowercase()
                } else {
                    upper
                };
            for (slot, ch) in chars[word_start..i].iter_mut().zip(replacement.chars()) {
                *slot = ch;
            }
        } else if word_start > 0 && word.to_lowercase() == word {
            let first = chars[word_start];
            if let Some(upper_first) = first.to_uppercase().next() {
                chars[word_start] = upper_first;
            }
        }
        word_start = i;
    }

    chars.into_iter().collect()
}

/// The default identifier generated for a schema field named `name`.
pub fn field_identifier(name: &str) -> String {
    lint_name(&uc_first(name))
}
