use std::time::Duration;

/// Every `[x, y]` pair in `text` whose halves both parse as finite numbers.
///
/// Matching is non-greedy and stays on one line: a `[` runs to the first `]`
/// after its first comma, with at least one character on each side of that
/// comma. The content is split at its first comma; pairs that fail to parse are
/// skipped, and scanning resumes after the closing `]`.
pub fn extract_locations(text: &str) -> Vec<[f64; 2]> {
    let bytes = text.as_bytes();
    let mut locs = Vec::new();
    let mut pos = 0;
    while let Some(off) = text[pos..].find('[') {
        let open = pos + off;
        match closing_bracket(bytes, open) {
            Some(close) => {
                if let Some(loc) = parse_pair(&text[open + 1..close]) {
                    locs.push(loc);
                }
                pos = close + 1;
            }
            None => pos = open + 1,
        }
    }
    locs
}

/// The `]` ending the candidate opened at `open`, if any, on the same line.
fn closing_bracket(bytes: &[u8], open: usize) -> Option<usize> {
    let line_end = find_byte(bytes, b'\n', open).unwrap_or(bytes.len());
    let line = &bytes[..line_end];
    let comma = find_byte(line, b',', open + 2)?;
    find_byte(line, b']', comma + 2)
}

fn find_byte(bytes: &[u8], needle: u8, from: usize) -> Option<usize> {
    bytes
        .get(from..)?
        .iter()
        .position(|&b| b == needle)
        .map(|i| from + i)
}

fn parse_pair(inner: &str) -> Option<[f64; 2]> {
    let (a, b) = inner.split_once(',')?;
    let x: f64 = a.trim().parse().ok()?;
    let y: f64 = b.trim().parse().ok()?;
    (x.is_finite() && y.is_finite()).then_some([x, y])
}

/// Seconds with three decimals, or `"less than 0.001"` below a millisecond.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs < 0.001 {
        "less than 0.001".to_string()
    } else {
        format!("{secs:.3}")
    }
}
