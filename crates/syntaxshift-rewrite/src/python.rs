// ABOUTME: Text-level optimization passes for Python source.
// ABOUTME: Each pass is independent; callers chain them explicitly.
use once_cell::sync::Lazy;
use regex::Regex;

static RANGE_LEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"for\s+(\w+)\s+in\s+range\(len\((\w+)\)\):").unwrap());

static INLINE_APPEND_LOOP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^for\s+(\w+)\s+in\s+(.+):\s*(\w+)\.append\((.+)\)\s*$").unwrap());

static FOR_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^for\s+(\w+)\s+in\s+(.+):$").unwrap());

static APPEND_CALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\w+)\.append\((.+)\)$").unwrap());

/// Replace `range(len(...))` index loops with `enumerate`.
///
/// Returns `None` when the pattern does not occur so the caller can skip the
/// advisory note.
pub fn rewrite_range_len(code: &str) -> Option<String> {
    if !RANGE_LEN.is_match(code) {
        return None;
    }
    Some(
        RANGE_LEN
            .replace_all(code, "for $1, item in enumerate($2):")
            .to_string(),
    )
}

/// Collapse simple append loops into list comprehensions.
///
/// Handles both the inline form (`for x in y: out.append(f(x))`) and the
/// two-line form where the append is the sole body line. Returns the
/// rewritten text and the number of loops collapsed. This pass does not
/// apply the enumerate rewrite; the two run as separate, optionally-chained
/// passes.
pub fn rewrite_append_loops(code: &str) -> (String, usize) {
    let lines: Vec<&str> = code.lines().collect();
    let mut rewritten = Vec::with_capacity(lines.len());
    let mut collapsed = 0;
    let mut i = 0;

    while i < lines.len() {
        let trimmed = lines[i].trim();

        if let Some(caps) = INLINE_APPEND_LOOP.captures(trimmed) {
            rewritten.push(format!(
                "{} = [{} for {} in {}]",
                &caps[3], &caps[4], &caps[1], &caps[2]
            ));
            collapsed += 1;
            i += 1;
            continue;
        }

        if trimmed.starts_with("for ") && i + 1 < lines.len() {
            let body = lines[i + 1].trim();
            // Only collapse short, single-expression bodies
            if body.contains("append(") && body.matches(' ').count() <= 8 {
                if let (Some(header), Some(append)) =
                    (FOR_HEADER.captures(trimmed), APPEND_CALL.captures(body))
                {
                    rewritten.push(format!(
                        "{} = [{} for {} in {}]",
                        &append[1], &append[2], &header[1], &header[2]
                    ));
                    collapsed += 1;
                    i += 2;
                    continue;
                }
            }
        }

        rewritten.push(lines[i].to_string());
        i += 1;
    }

    (rewritten.join("\n"), collapsed)
}

/// Report substantial lines that appear more than once.
///
/// The text is left unchanged; extraction is the gateway's job.
pub fn duplicate_lines(code: &str) -> Vec<String> {
    let mut seen: std::collections::HashMap<&str, usize> = std::collections::HashMap::new();
    let mut notes = Vec::new();

    for (i, line) in code.lines().enumerate() {
        let clean = line.trim();
        if clean.len() > 10 {
            match seen.get(clean) {
                Some(first) => notes.push(format!(
                    "Found duplicate code pattern on lines {} and {}",
                    first + 1,
                    i + 1
                )),
                None => {
                    seen.insert(clean, i);
                }
            }
        }
    }

    notes
}
