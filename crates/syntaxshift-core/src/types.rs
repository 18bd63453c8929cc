use crate::error::ShiftError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    JavaScript,
    Cpp,
    Java,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::Cpp => "cpp",
            Language::Java => "java",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = ShiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "python" => Ok(Language::Python),
            "javascript" => Ok(Language::JavaScript),
            "cpp" => Ok(Language::Cpp),
            "java" => Ok(Language::Java),
            other => Err(ShiftError::UnsupportedLanguage(other.to_string())),
        }
    }
}

/// Operation requested by the caller of the transform endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Transform,
    Optimize,
    Convert,
    Explain,
}

impl FromStr for Operation {
    type Err = ShiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "transform" => Ok(Operation::Transform),
            "optimize" => Ok(Operation::Optimize),
            "convert" => Ok(Operation::Convert),
            "explain" => Ok(Operation::Explain),
            other => Err(ShiftError::InvalidOperation(other.to_string())),
        }
    }
}

/// Outcome of a single transformation pass: the rewritten code plus the
/// ordered notes accumulated along the way.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransformResult {
    pub output_code: String,
    pub notes: Vec<String>,
}

impl TransformResult {
    pub fn new(output_code: impl Into<String>) -> Self {
        Self {
            output_code: output_code.into(),
            notes: Vec::new(),
        }
    }

    pub fn with_notes(output_code: impl Into<String>, notes: Vec<String>) -> Self {
        Self {
            output_code: output_code.into(),
            notes,
        }
    }
}

/// A structural fact extracted from a parsed source tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SyntaxFact {
    FunctionDef { name: String, params: usize },
    ForLoop { var: String },
    WhileLoop,
    Conditional,
    ListComprehension,
    Import { modules: Vec<String> },
    ImportFrom { module: String },
}

impl SyntaxFact {
    /// Render the fact as one human-readable explanation line.
    pub fn describe(&self) -> String {
        match self {
            SyntaxFact::FunctionDef { name, params } => {
                format!("Function '{}' defined with {} parameter(s)", name, params)
            }
            SyntaxFact::ForLoop { var } => {
                format!("For loop iterates over data using variable '{}'", var)
            }
            SyntaxFact::WhileLoop => {
                "While loop continues until condition becomes false".to_string()
            }
            SyntaxFact::Conditional => {
                "Conditional statement checks a condition and executes code accordingly"
                    .to_string()
            }
            SyntaxFact::ListComprehension => {
                "List comprehension creates a new list efficiently in one line".to_string()
            }
            SyntaxFact::Import { modules } => {
                format!("Imports modules: {}", modules.join(", "))
            }
            SyntaxFact::ImportFrom { module } => {
                format!("Imports specific items from {}", module)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplexityLevel {
    Simple,
    Moderate,
    Complex,
    Unknown,
}

impl ComplexityLevel {
    /// Threshold classification over the summed construct count.
    pub fn classify(total_constructs: usize) -> Self {
        if total_constructs > 10 {
            ComplexityLevel::Complex
        } else if total_constructs > 5 {
            ComplexityLevel::Moderate
        } else {
            ComplexityLevel::Simple
        }
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ComplexityLevel::Simple => "Simple",
            ComplexityLevel::Moderate => "Moderate",
            ComplexityLevel::Complex => "Complex",
            ComplexityLevel::Unknown => "Unknown",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ComplexityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(ComplexityLevel::Simple),
            "moderate" => Ok(ComplexityLevel::Moderate),
            "complex" => Ok(ComplexityLevel::Complex),
            _ => Ok(ComplexityLevel::Unknown),
        }
    }
}

/// Construct counts for a source snippet plus the derived level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplexityReport {
    pub lines: usize,
    pub functions: usize,
    pub loops: usize,
    pub conditionals: usize,
    pub imports: usize,
    pub level: ComplexityLevel,
}

impl ComplexityReport {
    /// Report for source that could not be parsed; only the line count is
    /// meaningful.
    pub fn unknown(code: &str) -> Self {
        Self {
            lines: code.lines().count(),
            functions: 0,
            loops: 0,
            conditionals: 0,
            imports: 0,
            level: ComplexityLevel::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_round_trips_through_str() {
        for name in ["python", "javascript", "cpp", "java"] {
            let lang: Language = name.parse().unwrap();
            assert_eq!(lang.as_str(), name);
        }
    }

    #[test]
    fn language_parse_is_case_insensitive() {
        assert_eq!("Python".parse::<Language>().unwrap(), Language::Python);
        assert_eq!("JAVASCRIPT".parse::<Language>().unwrap(), Language::JavaScript);
    }

    #[test]
    fn unknown_language_is_rejected() {
        assert!(matches!(
            "haskell".parse::<Language>(),
            Err(ShiftError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn complexity_classification_thresholds() {
        assert_eq!(ComplexityLevel::classify(2), ComplexityLevel::Simple);
        assert_eq!(ComplexityLevel::classify(5), ComplexityLevel::Simple);
        assert_eq!(ComplexityLevel::classify(6), ComplexityLevel::Moderate);
        assert_eq!(ComplexityLevel::classify(10), ComplexityLevel::Moderate);
        assert_eq!(ComplexityLevel::classify(11), ComplexityLevel::Complex);
    }
}
