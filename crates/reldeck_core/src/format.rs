//! Pure text formatting: inline bold segmentation, currency symbol
//! substitution, abbreviated currency, percentages, and the cell comparator
//! used by table sorting. String in, string out, no locale state.

use std::cmp::Ordering;

const CURRENCY_SYMBOLS: [char; 5] = ['₹', '$', '€', '£', '¥'];

/// One run of inline text, split on `**bold**` markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Bold(String),
}

impl Segment {
    pub fn content(&self) -> &str {
        match self {
            Segment::Text(text) | Segment::Bold(text) => text,
        }
    }
}

/// Controls which cell values render as the `-` placeholder. The zero case
/// is deliberate: upstream emits `"0"` for absent measurements, so zero and
/// missing are conflated unless the policy is relaxed.
#[derive(Debug, Clone, Copy)]
pub struct CellPolicy {
    pub treat_zero_as_missing: bool,
}

impl Default for CellPolicy {
    fn default() -> Self {
        Self {
            treat_zero_as_missing: true,
        }
    }
}

/// Splits `input` on non-nested `**bold**` spans, preserving order. An
/// unclosed or empty `**` pair is left as plain text. Empty input yields a
/// single empty text segment so callers always have something to render.
pub fn parse_formatted_text(input: &str) -> Vec<Segment> {
    let bytes = input.as_bytes();
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;

    while i + 1 < bytes.len() {
        if bytes[i] == b'*' && bytes[i + 1] == b'*' {
            if let Some(close) = find_bold_close(bytes, i + 2) {
                if plain_start < i {
                    segments.push(Segment::Text(input[plain_start..i].to_string()));
                }
                segments.push(Segment::Bold(input[i + 2..close].to_string()));
                i = close + 2;
                plain_start = i;
                continue;
            }
        }
        i += 1;
    }

    if plain_start < bytes.len() {
        segments.push(Segment::Text(input[plain_start..].to_string()));
    }
    if segments.is_empty() {
        segments.push(Segment::Text(String::new()));
    }
    segments
}

// A span closes at the first `*` after the opener, and only if it is a `**`
// pair with at least one non-`*` byte inside.
fn find_bold_close(bytes: &[u8], from: usize) -> Option<usize> {
    let mut i = from;
    while i < bytes.len() {
        if bytes[i] == b'*' {
            if i > from && i + 1 < bytes.len() && bytes[i + 1] == b'*' {
                return Some(i);
            }
            return None;
        }
        i += 1;
    }
    None
}

/// Replaces ISO currency codes with their symbols and inserts a space
/// between a symbol and an immediately following digit. Numbers themselves
/// are never reformatted here.
pub fn format_currency(input: &str) -> String {
    let substituted = input
        .replace("INR", "₹")
        .replace("USD", "$")
        .replace("EUR", "€")
        .replace("GBP", "£")
        .replace("JPY", "¥");

    let mut out = String::with_capacity(substituted.len());
    let mut chars = substituted.chars().peekable();
    while let Some(ch) = chars.next() {
        out.push(ch);
        if CURRENCY_SYMBOLS.contains(&ch) {
            if let Some(next) = chars.peek() {
                if next.is_ascii_digit() {
                    out.push(' ');
                }
            }
        }
    }
    out
}

/// Abbreviates a numeric string to `₹1.2K` / `₹3.4M` / `₹5.6B` form,
/// keeping the sign in front of the symbol. Commas and whitespace are
/// stripped before parsing; anything that still fails to parse is returned
/// unchanged.
pub fn format_short_currency(input: &str) -> String {
    let cleaned: String = input.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
    let Some(num) = parse_leading_number(&cleaned) else {
        return input.to_string();
    };

    let abs = num.abs();
    let sign = if num < 0.0 { "-" } else { "" };
    if abs >= 1_000_000_000.0 {
        format!("{sign}₹{:.1}B", abs / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("{sign}₹{:.1}M", abs / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{sign}₹{:.1}K", abs / 1_000.0)
    } else {
        format!("{sign}₹{}", plain_number(abs))
    }
}

/// Shared percentage formatter for table cells and metric cards: two fixed
/// decimals with a `%` suffix. Unparsable values pass through verbatim.
pub fn format_percent(input: &str) -> String {
    match parse_leading_number(input.trim()) {
        Some(num) => format!("{num:.2}%"),
        None => input.to_string(),
    }
}

/// Comparator used for column sorting. Both operands are stripped of
/// currency symbols and thousands separators; if both parse numerically the
/// order is numeric (negatives included), otherwise lexicographic on the
/// original strings.
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    let a_num = parse_leading_number(strip_currency(a).trim());
    let b_num = parse_leading_number(strip_currency(b).trim());
    match (a_num, b_num) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.cmp(b),
    }
}

/// True when a cell should render as the `-` placeholder: empty, the
/// literal `N/A`, or `0` under `treat_zero_as_missing`.
pub fn is_missing_cell(text: &str, policy: CellPolicy) -> bool {
    text.is_empty() || text == "N/A" || (policy.treat_zero_as_missing && text == "0")
}

fn strip_currency(input: &str) -> String {
    input
        .chars()
        .filter(|c| !CURRENCY_SYMBOLS.contains(c) && *c != ',')
        .collect()
}

/// Parses the leading numeric prefix of a string (`"12.5%"` reads as 12.5),
/// returning `None` when no digits lead.
pub(crate) fn parse_leading_number(input: &str) -> Option<f64> {
    let bytes = input.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let mut seen_digit = false;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        seen_digit = true;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            seen_digit = true;
        }
    }
    if !seen_digit {
        return None;
    }
    input[..end].parse().ok()
}

// Sub-thousand values keep their decimals, trimmed to at most three places.
fn plain_number(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{}", value as i64);
    }
    let mut text = format!("{value:.3}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}
