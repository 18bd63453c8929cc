// ABOUTME: Coarse construct-count complexity scoring for Python source.
// ABOUTME: Level thresholds: >10 Complex, >5 Moderate, else Simple.
use crate::analyzer::parse_python;
use syntaxshift_core::{ComplexityLevel, ComplexityReport};
use tree_sitter::Node;

/// Count functions, loops, conditionals and imports and classify the total.
///
/// Parse failure degrades to an `Unknown` report with only the line count
/// populated.
pub fn complexity(code: &str) -> ComplexityReport {
    let tree = match parse_python(code) {
        Ok(tree) => tree,
        Err(_) => return ComplexityReport::unknown(code),
    };

    let mut report = ComplexityReport {
        lines: code.lines().count(),
        functions: 0,
        loops: 0,
        conditionals: 0,
        imports: 0,
        level: ComplexityLevel::Simple,
    };

    count_constructs(&tree.root_node(), &mut report);

    let total = report.functions + report.loops + report.conditionals;
    report.level = ComplexityLevel::classify(total);
    report
}

fn count_constructs(node: &Node, report: &mut ComplexityReport) {
    match node.kind() {
        // Async defs share the function_definition kind
        "function_definition" => report.functions += 1,
        "for_statement" | "while_statement" => report.loops += 1,
        "if_statement" => report.conditionals += 1,
        "import_statement" | "import_from_statement" => report.imports += 1,
        _ => {}
    }

    let mut cursor = node.walk();
    if cursor.goto_first_child() {
        loop {
            count_constructs(&cursor.node(), report);
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }
}
