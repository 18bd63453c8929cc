// ABOUTME: Static registry of the languages the service accepts.
// ABOUTME: Maps each language to its file extension, comment token and feature tags.
use crate::types::Language;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize)]
pub struct LanguageSpec {
    pub extension: &'static str,
    pub comment_token: &'static str,
    pub features: &'static [&'static str],
}

static REGISTRY: Lazy<HashMap<Language, LanguageSpec>> = Lazy::new(|| {
    let mut specs = HashMap::new();

    specs.insert(
        Language::Python,
        LanguageSpec {
            extension: ".py",
            comment_token: "#",
            features: &["dynamic_typing", "indentation", "list_comprehension"],
        },
    );

    specs.insert(
        Language::JavaScript,
        LanguageSpec {
            extension: ".js",
            comment_token: "//",
            features: &["dynamic_typing", "prototypes", "async_await"],
        },
    );

    specs.insert(
        Language::Cpp,
        LanguageSpec {
            extension: ".cpp",
            comment_token: "//",
            features: &["static_typing", "pointers", "templates"],
        },
    );

    specs.insert(
        Language::Java,
        LanguageSpec {
            extension: ".java",
            comment_token: "//",
            features: &["static_typing", "oop", "garbage_collection"],
        },
    );

    specs
});

pub fn spec_for(language: Language) -> &'static LanguageSpec {
    // Every Language variant is registered at process start.
    &REGISTRY[&language]
}

pub fn supported_languages() -> Vec<&'static str> {
    vec!["python", "javascript", "cpp", "java"]
}

/// Minimal starter snippet for a target language.
pub fn template(language: Language) -> &'static str {
    match language {
        Language::Python => {
            r#"# Python code template
def main():
    # Your code here
    pass

if __name__ == "__main__":
    main()
"#
        }
        Language::JavaScript => {
            r#"// JavaScript code template
function main() {
    // Your code here
}

main();
"#
        }
        Language::Cpp => {
            r#"#include <iostream>
#include <vector>
#include <string>

using namespace std;

int main() {
    // Your code here
    return 0;
}
"#
        }
        Language::Java => {
            r#"public class Main {
    public static void main(String[] args) {
        // Your code here
    }
}
"#
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_a_spec() {
        for lang in [
            Language::Python,
            Language::JavaScript,
            Language::Cpp,
            Language::Java,
        ] {
            let spec = spec_for(lang);
            assert!(spec.extension.starts_with('.'));
            assert!(!spec.features.is_empty());
        }
    }

    #[test]
    fn python_uses_hash_comments() {
        assert_eq!(spec_for(Language::Python).comment_token, "#");
        assert_eq!(spec_for(Language::JavaScript).comment_token, "//");
    }

    #[test]
    fn templates_mention_an_entry_point() {
        assert!(template(Language::Python).contains("def main"));
        assert!(template(Language::Java).contains("public static void main"));
    }
}
