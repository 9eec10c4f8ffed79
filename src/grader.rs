//! Submission grading
//!
//! Submissions are never executed. Each challenge lists requirement patterns
//! and a submission passes when all of them match its source text.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::{CHALLENGES, ChallengeDescriptor, Requirement};

/// Error type for grading
#[derive(Debug, thiserror::Error)]
pub enum GradeError {
    #[error("Please write some code before submitting")]
    EmptySubmission,

    #[error("Invalid requirement pattern for '{challenge}': {source}")]
    InvalidPattern {
        challenge: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// Grading result for one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeOutcome {
    pub challenge_id: &'static str,
    pub success: bool,
    /// Hints for the requirements that were not met
    pub unmet: Vec<&'static str>,
}

impl GradeOutcome {
    /// One-line summary for display
    pub fn message(&self) -> String {
        if self.success {
            "Challenge completed!".to_string()
        } else {
            format!("Requirements not met: {}", self.unmet.join("; "))
        }
    }
}

/// Requirement patterns of every catalog challenge, compiled on first use
static PATTERNS: Lazy<HashMap<&'static str, Result<Vec<Regex>, regex::Error>>> =
    Lazy::new(|| CHALLENGES.iter().map(|c| (c.id, compile(c.checks))).collect());

fn compile(checks: &[Requirement]) -> Result<Vec<Regex>, regex::Error> {
    checks.iter().map(|check| Regex::new(check.pattern)).collect()
}

/// Check `code` against every requirement of `challenge`
pub fn grade(challenge: &ChallengeDescriptor, code: &str) -> Result<GradeOutcome, GradeError> {
    if code.trim().is_empty() {
        return Err(GradeError::EmptySubmission);
    }

    let uncached;
    let patterns = match PATTERNS.get(challenge.id) {
        Some(compiled) => compiled.as_ref(),
        None => {
            uncached = compile(challenge.checks);
            uncached.as_ref()
        }
    }
    .map_err(|source| GradeError::InvalidPattern {
        challenge: challenge.id,
        source: source.clone(),
    })?;

    let unmet = challenge
        .checks
        .iter()
        .zip(patterns)
        .filter(|(_, re)| !re.is_match(code))
        .map(|(check, _)| check.hint)
        .collect::<Vec<_>>();

    Ok(GradeOutcome {
        challenge_id: challenge.id,
        success: unmet.is_empty(),
        unmet,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn grade_id(id: &str, code: &str) -> GradeOutcome {
        grade(catalog::challenge(id).unwrap(), code).unwrap()
    }

    #[test]
    fn test_all_patterns_compile() {
        for c in CHALLENGES {
            let compiled = PATTERNS[c.id].as_ref().unwrap();
            assert_eq!(compiled.len(), c.checks.len(), "{}", c.id);
        }
    }

    #[test]
    fn test_descriptor_outside_catalog_is_graded() {
        let custom = ChallengeDescriptor {
            id: "custom",
            title: "Custom",
            category: catalog::Category::General,
            language: "python",
            description: "",
            requirements: "",
            checks: &[Requirement {
                pattern: r"print\(",
                hint: "Print something",
            }],
        };
        assert!(grade(&custom, "print('x')").unwrap().success);
        assert_eq!(grade(&custom, "x = 1").unwrap().unmet, vec!["Print something"]);

        let broken = ChallengeDescriptor {
            id: "broken",
            checks: &[Requirement {
                pattern: r"(",
                hint: "never",
            }],
            ..custom
        };
        assert!(matches!(
            grade(&broken, "x"),
            Err(GradeError::InvalidPattern { challenge: "broken", .. })
        ));
    }

    #[test]
    fn test_empty_submission() {
        let c = catalog::challenge("js-basics").unwrap();
        assert!(matches!(grade(c, "   \n"), Err(GradeError::EmptySubmission)));
    }

    #[test]
    fn test_javascript_add() {
        assert!(grade_id("js-basics", "function add(a, b) {\n  return a + b;\n}").success);
        assert!(grade_id("js-basics", "const add = (x, y) => x + y;").success);

        let outcome = grade_id("js-basics", "function sum(a, b) { return a + b; }");
        assert!(!outcome.success);
        assert_eq!(outcome.unmet, vec!["Define a function named add with two parameters"]);
    }

    #[test]
    fn test_python_factorial() {
        let code = "def factorial(n):\n    return 1 if n <= 1 else n * factorial(n - 1)\n";
        assert!(grade_id("py-basics", code).success);
        assert!(!grade_id("py-basics", "def fact(n):\n    return n\n").success);
    }

    #[test]
    fn test_java_hello_world() {
        let code = r#"public class HelloWorld {
    public static void main(String[] args) {
        System.out.println("Hello, World!");
    }
}"#;
        assert!(grade_id("java-basics", code).success);
        assert!(!grade_id("java-basics", &code.replace("Hello, World!", "Hi")).success);
    }

    #[test]
    fn test_cpp_find_max() {
        let code = "int findMax(int a, int b, int c) {\n  return std::max(a, std::max(b, c));\n}";
        assert!(grade_id("cpp-basics", code).success);
    }

    #[test]
    fn test_html_form() {
        let code = r#"<FORM action="/join">
  <input type="text" name="name">
  <input type="email" name="mail">
</FORM>"#;
        assert!(grade_id("html-basics", code).success);

        let outcome = grade_id("html-basics", "<form><input name=\"name\"></form>");
        assert_eq!(outcome.unmet, vec!["Add an email input"]);
        assert!(outcome.message().contains("Add an email input"));
    }

    #[test]
    fn test_css_button_states() {
        let code = "button { color: red; }\nbutton:hover { color: blue; }\nbutton:active { color: green; }";
        assert!(grade_id("css-basics", code).success);
        assert!(!grade_id("css-basics", "button { color: red; }").success);
    }

    #[test]
    fn test_starter_code_does_not_pass() {
        for c in CHALLENGES {
            let outcome = grade(c, c.starter_code()).unwrap();
            assert!(!outcome.success, "{} passes with its starter code", c.id);
        }
    }
}
