//! Display formatting for expressions and results.
//!
//! Purely cosmetic: maps operator characters to their typographic
//! glyphs and optionally groups digits of a rendered result. Neither
//! transformation ever feeds back into evaluation.

/// Format an expression for display, replacing operator characters
/// with spaced glyphs (`/` becomes `" ÷ "`, `*` becomes `" × "`, `+`
/// becomes `" + "`, `-` becomes `" − "`).
///
/// The mapping is a single pass over the characters, so a replacement
/// can never be corrupted by a later substitution.
pub fn format_expression(expr: &str) -> String {
    let mut out = String::with_capacity(expr.len());
    for c in expr.chars() {
        match c {
            '/' => out.push_str(" ÷ "),
            '*' => out.push_str(" × "),
            '+' => out.push_str(" + "),
            '-' => out.push_str(" − "),
            c => out.push(c),
        }
    }
    out
}

/// Add thousands separators to a canonical decimal string, for display
/// only. The fractional part and sign are left untouched; strings that
/// are not plain decimal numbers are returned unchanged.
pub fn group_digits(number: &str) -> String {
    let (sign, rest) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match rest.find('.') {
        Some(pos) => rest.split_at(pos),
        None => (rest, ""),
    };

    if int_part.is_empty() || !int_part.chars().all(|c| c.is_ascii_digit()) {
        return number.to_string();
    }

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    format!("{sign}{int_grouped}{frac_part}")
}
