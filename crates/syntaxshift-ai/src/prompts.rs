// ABOUTME: Fixed prompt templates for every gateway operation.
// ABOUTME: Each template names the JSON fields the service must answer with.

pub fn convert(code: &str, source: &str, target: &str) -> String {
    format!(
        r#"Convert this {source} code to {target}:

```{source}
{code}
```

Return a JSON object with:
- "converted_code": the equivalent code in {target}
- "conversion_notes": list of important notes about the conversion
- "language_differences": key differences to be aware of

Make sure the converted code:
1. Maintains the same functionality
2. Follows {target} best practices and conventions
3. Includes proper syntax and structure
4. Has appropriate type declarations if needed
5. Includes necessary imports/includes"#
    )
}

pub fn improve_conversion(base_code: &str, source: &str, target: &str) -> String {
    format!(
        r#"Improve this partially converted {source} to {target} code:

```{target}
{base_code}
```

Return a JSON object with:
- "improved_code": the properly converted and improved code
- "improvements": list of improvements made
- "syntax_fixes": syntax corrections applied

Focus on:
1. Fixing any syntax errors
2. Following {target} conventions
3. Proper variable declarations and types
4. Correct function definitions
5. Appropriate built-in function usage"#
    )
}

pub fn optimize(code: &str, language: &str) -> String {
    format!(
        r#"Optimize this {language} code for better performance:

```{language}
{code}
```

Return a JSON object with:
- "optimized_code": the improved code
- "improvements": list of improvements made"#
    )
}

pub fn optimize_python(code: &str) -> String {
    format!(
        r#"Optimize this Python code for better performance and readability:

```python
{code}
```

Return a JSON object with:
- "optimized_code": the improved code
- "improvements": list of improvements made

Focus on:
- Performance optimizations
- Memory efficiency
- Pythonic patterns
- Code readability"#
    )
}

pub fn transform(code: &str, language: &str) -> String {
    format!(
        r#"Transform this {language} code to be cleaner and more maintainable:

```{language}
{code}
```

Return a JSON object with:
- "transformed_code": the cleaned code
- "changes": list of changes made"#
    )
}

pub fn transform_python(code: &str) -> String {
    format!(
        r#"Transform this Python code to be cleaner and follow best practices:

```python
{code}
```

Return a JSON object with:
- "transformed_code": the cleaned code
- "changes": list of changes made

Focus on:
- DRY principle (Don't Repeat Yourself)
- Clean code structure
- Removing redundancy
- Better variable names
- Function extraction"#
    )
}

pub fn apply_dry(code: &str) -> String {
    format!(
        r#"Refactor this Python code to follow the DRY (Don't Repeat Yourself) principle:

```python
{code}
```

Return a JSON object with:
- "refactored_code": the DRY code
- "extractions": list of functions/methods extracted"#
    )
}

pub fn explain(code: &str, language: &str) -> String {
    format!(
        r#"Explain this {language} code in simple, friendly terms:

```{language}
{code}
```

Return a JSON object with:
- "explanations": list of clear explanations about what the code does
- "purpose": overall purpose of the code
- "key_concepts": important programming concepts used

Make explanations:
1. Simple and easy to understand
2. Friendly and encouraging
3. Focus on WHAT the code does, not just HOW
4. Explain any complex logic step by step"#
    )
}

pub fn explain_changes(original: &str, modified: &str, language: &str) -> String {
    format!(
        r#"Compare these two {language} code versions and explain the changes:

Original:
```{language}
{original}
```

Modified:
```{language}
{modified}
```

Return a JSON object with:
- "changes": list of specific changes made
- "benefits": why these changes improve the code
- "impact": how these changes affect performance or readability

Make explanations:
1. Clear and specific about what changed
2. Explain the benefits in simple terms
3. Focus on improvements and learning"#
    )
}

pub fn assess_complexity(code: &str, language: &str) -> String {
    format!(
        r#"Analyze the complexity of this {language} code:

```{language}
{code}
```

Return a JSON object with:
- "complexity_level": "Simple", "Moderate", or "Complex"
- "analysis": detailed complexity analysis
- "suggestions": ways to reduce complexity if needed"#
    )
}

pub fn learning_tips(code: &str, language: &str) -> String {
    format!(
        r#"Generate helpful learning tips based on this {language} code:

```{language}
{code}
```

Return a JSON object with:
- "tips": list of educational tips and insights

Make tips:
1. Educational and encouraging
2. Relevant to concepts in the code
3. Include best practices
4. Suitable for learners"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_prompt_embeds_code_and_languages() {
        let prompt = convert("x = 1", "python", "javascript");
        assert!(prompt.contains("x = 1"));
        assert!(prompt.contains("python code to javascript"));
        assert!(prompt.contains("\"converted_code\""));
    }

    #[test]
    fn every_template_requests_json() {
        let prompts = [
            convert("c", "python", "java"),
            improve_conversion("c", "python", "javascript"),
            optimize("c", "cpp"),
            optimize_python("c"),
            transform("c", "java"),
            transform_python("c"),
            apply_dry("c"),
            explain("c", "python"),
            explain_changes("a", "b", "python"),
            assess_complexity("c", "python"),
            learning_tips("c", "python"),
        ];
        for prompt in prompts {
            assert!(prompt.contains("Return a JSON object"));
        }
    }
}
