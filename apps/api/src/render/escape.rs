//! LaTeX text sanitizer.
//!
//! Two passes over user text: typographic Unicode is folded to ASCII and any
//! other non-ASCII is dropped (pdflatex with the default fonts cannot render
//! it), then the ten LaTeX-special ASCII characters are escaped.
//!
//! Escaping is a single left-to-right pass, one replacement per input
//! character. The backslash replacement therefore never has its own braces or
//! backslash re-escaped, which a naive chain of `str::replace` calls would do.

/// Folds smart quotes, dashes, ellipsis and ligatures to ASCII; drops all
/// other non-ASCII (including private-use glyphs from PDF extraction).
pub fn normalize_typography(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{201C}' | '\u{201D}' => out.push('"'),
            '\u{2013}' => out.push('-'),
            '\u{2014}' => out.push_str("--"),
            '\u{2026}' => out.push_str("..."),
            '\u{FB00}' => out.push_str("ff"),
            '\u{FB01}' => out.push_str("fi"),
            '\u{FB02}' => out.push_str("fl"),
            '\u{FB03}' => out.push_str("ffi"),
            '\u{FB04}' => out.push_str("ffl"),
            c if c.is_ascii() => out.push(c),
            _ => {}
        }
    }
    out
}

/// Escapes `\ { } $ % & # _ ^ ~`. Input is expected to be ASCII already.
pub fn escape_latex(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 8);
    for c in input.chars() {
        match c {
            '\\' => out.push_str(r"\textbackslash{}"),
            '{' => out.push_str(r"\{"),
            '}' => out.push_str(r"\}"),
            '$' => out.push_str(r"\$"),
            '%' => out.push_str(r"\%"),
            '&' => out.push_str(r"\&"),
            '#' => out.push_str(r"\#"),
            '_' => out.push_str(r"\_"),
            '^' => out.push_str(r"\^{}"),
            '~' => out.push_str(r"\~{}"),
            c => out.push(c),
        }
    }
    out
}

/// Makes arbitrary user text safe to embed in the generated document.
/// Total: any input yields a string, empty input yields `""`.
pub fn sanitize(input: &str) -> String {
    escape_latex(&normalize_typography(input))
}
