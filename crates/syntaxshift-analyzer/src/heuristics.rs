// ABOUTME: Raw-text advisory scans that run alongside the tree-based analysis.

/// Advisory notes derived from substring scans, not the syntax tree.
pub fn scan_advisories(code: &str) -> Vec<String> {
    let mut advisories = Vec::new();

    if code.contains("range(len(") {
        advisories.push(
            "Found range(len()) pattern - consider using enumerate() for better performance"
                .to_string(),
        );
    }

    if code.matches("for ").count() > 1 && code.contains("append(") {
        advisories.push(
            "Multiple loops with append() - might benefit from list comprehensions".to_string(),
        );
    }

    if !code.contains("import")
        && ["print", "len", "range"].iter().any(|f| code.contains(f))
    {
        advisories.push("Uses built-in Python functions without imports".to_string());
    }

    advisories
}

/// Learning tips keyed off constructs present in the source.
pub fn local_tips(code: &str) -> Vec<String> {
    let mut tips = Vec::new();

    if code.contains("def ") {
        tips.push("Functions help organize code and make it reusable".to_string());
    }

    if code.contains("for ") {
        tips.push(
            "Loops are powerful for repeating actions - Python makes them very readable"
                .to_string(),
        );
    }

    if code.contains('[') && code.contains(']') && code.contains("for") {
        tips.push(
            "List comprehensions are a Pythonic way to create lists efficiently".to_string(),
        );
    }

    if code.contains("import") {
        tips.push(
            "Libraries extend Python's capabilities - there's a library for almost everything"
                .to_string(),
        );
    }

    tips
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_len_triggers_enumerate_advisory() {
        let advisories = scan_advisories("for i in range(len(xs)):\n    print(xs[i])");
        assert!(advisories.iter().any(|a| a.contains("enumerate()")));
    }

    #[test]
    fn repeated_append_loops_suggest_comprehension() {
        let code = "for a in xs:\n    out.append(a)\nfor b in ys:\n    out.append(b)";
        let advisories = scan_advisories(code);
        assert!(advisories.iter().any(|a| a.contains("list comprehensions")));
    }

    #[test]
    fn single_loop_does_not_suggest_comprehension() {
        let advisories = scan_advisories("for a in xs:\n    out.append(a)");
        assert!(!advisories.iter().any(|a| a.contains("list comprehensions")));
    }

    #[test]
    fn builtins_without_imports_are_noted() {
        let advisories = scan_advisories("print(len(items))");
        assert!(advisories
            .iter()
            .any(|a| a.contains("without imports")));
    }

    #[test]
    fn import_suppresses_builtin_note() {
        let advisories = scan_advisories("import os\nprint(os.getcwd())");
        assert!(!advisories.iter().any(|a| a.contains("without imports")));
    }

    #[test]
    fn tips_follow_present_constructs() {
        let tips = local_tips("def f(xs):\n    return [x for x in xs]");
        assert!(tips.iter().any(|t| t.contains("Functions")));
        assert!(tips.iter().any(|t| t.contains("comprehensions")));
    }
}
