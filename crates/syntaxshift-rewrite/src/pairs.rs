// ABOUTME: Best-effort surface transliteration for the Python/JavaScript pair.
// ABOUTME: Output always continues to the gateway refinement pass; it is never final.
use syntaxshift_core::Language;

/// Apply the rule-based rewrite for a supported language pair.
///
/// Returns `None` for any pair without rules; the caller then skips this
/// stage entirely. Known false positives (a colon inside a dict literal or
/// slice, braces inside string literals, multi-line conditions) are left for
/// the model refinement pass.
pub fn rewrite(code: &str, source: Language, target: Language) -> Option<String> {
    match (source, target) {
        (Language::Python, Language::JavaScript) => Some(python_to_javascript(code)),
        (Language::JavaScript, Language::Python) => Some(javascript_to_python(code)),
        _ => None,
    }
}

pub fn python_to_javascript(code: &str) -> String {
    let code = code
        .replace("print(", "console.log(")
        .replace("def ", "function ");

    let mut converted = Vec::new();
    for line in code.lines() {
        let trimmed = line.trim();
        if trimmed.ends_with(':') {
            // Trailing colon assumed to open a block
            let end = line.trim_end();
            converted.push(format!("{} {{", &end[..end.len() - 1]));
        } else if !trimmed.is_empty() && !trimmed.starts_with('#') && !trimmed.starts_with("//") {
            if trimmed.ends_with('{') || trimmed.ends_with('}') || trimmed.ends_with(';') {
                converted.push(line.to_string());
            } else {
                converted.push(format!("{};", line));
            }
        } else {
            converted.push(line.to_string());
        }
    }

    converted.join("\n")
}

pub fn javascript_to_python(code: &str) -> String {
    let code = code
        .replace("console.log(", "print(")
        .replace("function ", "def ");

    let mut converted = Vec::new();
    let mut indent_level: usize = 0;

    for line in code.lines() {
        let trimmed = line.trim();

        // A lone closing brace only ends the block
        if trimmed == "}" {
            indent_level = indent_level.saturating_sub(1);
            continue;
        }

        if trimmed.ends_with(" {") {
            let end = line.trim_end();
            converted.push(format!("{}:", &end[..end.len() - 2]));
            indent_level += 1;
            continue;
        }

        let stripped = trimmed.strip_suffix(';').unwrap_or(trimmed);

        if !stripped.is_empty() && !stripped.starts_with('#') && !stripped.starts_with("//") {
            converted.push(format!("{}{}", "    ".repeat(indent_level), stripped));
        } else {
            converted.push(line.to_string());
        }
    }

    converted.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_becomes_console_log() {
        let js = python_to_javascript("print(\"hello\")");
        assert_eq!(js, "console.log(\"hello\");");
    }

    #[test]
    fn def_becomes_function_with_brace() {
        let js = python_to_javascript("def greet(name):\n    print(name)");
        assert_eq!(js, "function greet(name) {\n    console.log(name);");
    }

    #[test]
    fn comment_lines_are_untouched() {
        let js = python_to_javascript("# a comment\nx = 1");
        assert_eq!(js, "# a comment\nx = 1;");
    }

    #[test]
    fn rewrite_is_idempotent_on_trivial_target_syntax() {
        let js = "console.log(\"x\");";
        assert_eq!(python_to_javascript(js), js);
    }

    #[test]
    fn console_log_becomes_print() {
        let py = javascript_to_python("console.log(\"hello\");");
        assert_eq!(py, "print(\"hello\")");
    }

    #[test]
    fn function_block_becomes_indented_def() {
        let py = javascript_to_python("function greet(name) {\n    console.log(name);\n}");
        assert_eq!(py, "def greet(name):\n    print(name)");
    }

    #[test]
    fn nested_blocks_track_indent_level() {
        let js = "function f(x) {\n    if (x) {\n        doIt();\n    }\n}";
        let py = javascript_to_python(js);
        assert_eq!(py, "def f(x):\n    if (x):\n        doIt()");
    }

    #[test]
    fn unsupported_pairs_are_bypassed() {
        assert!(rewrite("x = 1", Language::Python, Language::Cpp).is_none());
        assert!(rewrite("x = 1", Language::Java, Language::Python).is_none());
        assert!(rewrite("x = 1", Language::Python, Language::JavaScript).is_some());
    }
}
