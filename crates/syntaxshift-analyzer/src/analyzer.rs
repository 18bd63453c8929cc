// ABOUTME: Extracts structural facts from Python source via tree-sitter.
// ABOUTME: Facts feed the human-readable explanation flow; parsing is per call.
use syntaxshift_core::{Result, ShiftError, SyntaxFact};
use tree_sitter::{Node, Parser, Tree, TreeCursor};

/// Parse Python source into a syntax tree.
///
/// Parsers are not `Sync`, so a fresh one is built per call.
pub(crate) fn parse_python(code: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| ShiftError::Parse(e.to_string()))?;

    let tree = parser
        .parse(code, None)
        .ok_or_else(|| ShiftError::Parse("Failed to parse source".to_string()))?;

    if tree.root_node().has_error() {
        return Err(ShiftError::Parse("Source is not valid Python".to_string()));
    }

    Ok(tree)
}

/// Validity gate used before running text-level rule passes.
pub fn is_valid_python(code: &str) -> bool {
    parse_python(code).is_ok()
}

/// Walk the tree and emit one fact per recognized construct.
///
/// Fails with a parse error on invalid source; the caller surfaces a single
/// fallback advisory in that case.
pub fn analyze(code: &str) -> Result<Vec<SyntaxFact>> {
    let tree = parse_python(code)?;
    let mut facts = Vec::new();
    let mut cursor = tree.root_node().walk();
    visit(&mut cursor, code, &mut facts);
    Ok(facts)
}

fn visit(cursor: &mut TreeCursor, source: &str, facts: &mut Vec<SyntaxFact>) {
    if let Some(fact) = fact_for(&cursor.node(), source) {
        facts.push(fact);
    }

    if cursor.goto_first_child() {
        loop {
            visit(cursor, source, facts);
            if !cursor.goto_next_sibling() {
                break;
            }
        }
        cursor.goto_parent();
    }
}

fn fact_for(node: &Node, source: &str) -> Option<SyntaxFact> {
    match node.kind() {
        "function_definition" => {
            let name = field_text(node, "name", source)?;
            let params = node
                .child_by_field_name("parameters")
                .map(|p| p.named_child_count())
                .unwrap_or(0);
            Some(SyntaxFact::FunctionDef { name, params })
        }
        "for_statement" => {
            // Only simple name targets; tuple destructuring is skipped
            let target = node.child_by_field_name("left")?;
            if target.kind() != "identifier" {
                return None;
            }
            let var = node_text(&target, source)?;
            Some(SyntaxFact::ForLoop { var })
        }
        "while_statement" => Some(SyntaxFact::WhileLoop),
        "if_statement" => Some(SyntaxFact::Conditional),
        "list_comprehension" => Some(SyntaxFact::ListComprehension),
        "import_statement" => {
            let mut modules = Vec::new();
            let mut walker = node.walk();
            for child in node.named_children(&mut walker) {
                match child.kind() {
                    "dotted_name" => {
                        if let Some(text) = node_text(&child, source) {
                            modules.push(text);
                        }
                    }
                    "aliased_import" => {
                        if let Some(name) = child.child_by_field_name("name") {
                            if let Some(text) = node_text(&name, source) {
                                modules.push(text);
                            }
                        }
                    }
                    _ => {}
                }
            }
            if modules.is_empty() {
                None
            } else {
                Some(SyntaxFact::Import { modules })
            }
        }
        "import_from_statement" => {
            let module = field_text(node, "module_name", source)?;
            Some(SyntaxFact::ImportFrom { module })
        }
        _ => None,
    }
}

fn field_text(node: &Node, field: &str, source: &str) -> Option<String> {
    let child = node.child_by_field_name(field)?;
    node_text(&child, source)
}

fn node_text(node: &Node, source: &str) -> Option<String> {
    node.utf8_text(source.as_bytes()).ok().map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_and_conditional_are_extracted() {
        let facts = analyze("def f(a, b):\n    if a:\n        return b").unwrap();
        assert_eq!(
            facts,
            vec![
                SyntaxFact::FunctionDef {
                    name: "f".to_string(),
                    params: 2
                },
                SyntaxFact::Conditional,
            ]
        );
    }

    #[test]
    fn simple_for_target_yields_loop_fact() {
        let facts = analyze("for item in data:\n    print(item)").unwrap();
        assert!(facts.contains(&SyntaxFact::ForLoop {
            var: "item".to_string()
        }));
    }

    #[test]
    fn tuple_for_target_is_skipped() {
        let facts = analyze("for k, v in pairs:\n    print(k)").unwrap();
        assert!(!facts
            .iter()
            .any(|f| matches!(f, SyntaxFact::ForLoop { .. })));
    }

    #[test]
    fn imports_are_collected() {
        let facts = analyze("import os\nimport sys, json\nfrom pathlib import Path").unwrap();
        assert!(facts.contains(&SyntaxFact::Import {
            modules: vec!["os".to_string()]
        }));
        assert!(facts.contains(&SyntaxFact::Import {
            modules: vec!["sys".to_string(), "json".to_string()]
        }));
        assert!(facts.contains(&SyntaxFact::ImportFrom {
            module: "pathlib".to_string()
        }));
    }

    #[test]
    fn list_comprehension_is_recognized() {
        let facts = analyze("squares = [x * x for x in range(10)]").unwrap();
        assert!(facts.contains(&SyntaxFact::ListComprehension));
    }

    #[test]
    fn while_loop_is_recognized() {
        let facts = analyze("while True:\n    break").unwrap();
        assert!(facts.contains(&SyntaxFact::WhileLoop));
    }

    #[test]
    fn invalid_source_is_a_parse_error() {
        assert!(matches!(
            analyze("def broken(:"),
            Err(ShiftError::Parse(_))
        ));
    }
}
