//! Text utilities shared by the generators.

/// Returns true if `code` is a plain decimal numeral such as `3`, `-2` or
/// `1.5`, optionally surrounded by whitespace.
#[must_use]
pub fn is_number(code: &str) -> bool {
    let s = code.trim();
    let s = s.strip_prefix('-').unwrap_or(s);
    let (int, frac) = match s.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (s, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    all_digits(int) && frac.is_none_or(all_digits)
}

/// Parses a numeral accepted by [`is_number`].
#[must_use]
pub fn parse_number(code: &str) -> Option<f64> {
    if is_number(code) {
        code.trim().parse().ok()
    } else {
        None
    }
}

/// Integer part of a numeral accepted by [`is_number`], truncated toward zero.
#[must_use]
pub fn parse_int(code: &str) -> Option<i64> {
    let s = code.trim();
    let int = s.split_once('.').map_or(s, |(int, _)| int);
    if is_number(code) { int.parse().ok() } else { None }
}

/// Formats a number the way the editor displays it: integral values have no
/// fractional part and negative zero prints as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}")
    }
}

/// Returns true if `code` is a single word (`[A-Za-z0-9_]+`), i.e. safe to
/// read repeatedly without caching.
#[must_use]
pub fn is_identifier(code: &str) -> bool {
    !code.is_empty() && code.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Encodes `text` as a single-quoted string literal, escaping backslashes,
/// single quotes and newlines.
#[must_use]
pub fn quote_single(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
    out
}

/// Prefixes the first line and every following non-empty line with `prefix`.
#[must_use]
pub fn prefix_lines(text: &str, prefix: &str) -> String {
    let mut out = String::with_capacity(text.len() + prefix.len());
    for (n, line) in text.split('\n').enumerate() {
        if n > 0 {
            out.push('\n');
        }
        if n == 0 || !line.is_empty() {
            out.push_str(prefix);
        }
        out.push_str(line);
    }
    out
}

/// Replaces every run of two or more newlines with exactly two.
#[must_use]
pub fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = 0;
    for ch in text.chars() {
        if ch == '\n' {
            run += 1;
            if run <= 2 {
                out.push(ch);
            }
        } else {
            run = 0;
            out.push(ch);
        }
    }
    out
}

/// Final clean-up of a whole program: drops leading blank lines, reduces
/// trailing whitespace to a single newline and strips trailing spaces and
/// tabs from every line.
#[must_use]
pub fn tidy(code: &str) -> String {
    let mut code = code;

    let leading = code.len() - code.trim_start().len();
    if let Some(last_newline) = code[..leading].rfind('\n') {
        code = &code[last_newline + 1..];
    }

    let body_end = code.trim_end().len();
    let mut owned = match code[body_end..].find('\n') {
        Some(offset) if body_end + offset + 1 < code.len() => {
            code[..=body_end + offset].to_string()
        }
        _ => code.to_string(),
    };

    let mut lines: Vec<&str> = owned.split('\n').collect();
    let last = lines.len() - 1;
    for line in &mut lines[..last] {
        *line = line.trim_end_matches([' ', '\t']);
    }
    owned = lines.join("\n");
    owned
}
