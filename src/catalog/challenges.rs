//! Challenge definitions
//!
//! Each challenge carries its prompt and a list of requirement checks. A
//! submission passes when every check's pattern matches the source text.

use super::Category;
use super::templates::starter_template;

/// A single requirement check applied to submitted source
#[derive(Debug, Clone, Copy)]
pub struct Requirement {
    /// Regular expression that must match somewhere in the submission
    pub pattern: &'static str,
    /// Shown to the user when the pattern does not match
    pub hint: &'static str,
}

/// Challenge definition with all metadata
#[derive(Debug, Clone)]
pub struct ChallengeDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub category: Category,
    /// Template language key (see `LANGUAGES`)
    pub language: &'static str,
    pub description: &'static str,
    pub requirements: &'static str,
    pub checks: &'static [Requirement],
}

impl ChallengeDescriptor {
    /// Code the editor starts with for this challenge
    pub fn starter_code(&self) -> &'static str {
        starter_template(self.language)
    }
}

/// All challenge definitions
pub static CHALLENGES: &[ChallengeDescriptor] = &[
    ChallengeDescriptor {
        id: "js-basics",
        title: "JavaScript Basics",
        category: Category::Javascript,
        language: "javascript",
        description: "Write a function that returns the sum of two numbers.",
        requirements: "Create a function called add that takes two parameters and returns their sum.",
        checks: &[
            Requirement {
                pattern: r"function\s+add\s*\(\s*\w+\s*,\s*\w+\s*\)|\badd\s*=\s*(function\s*)?\(\s*\w+\s*,\s*\w+\s*\)",
                hint: "Define a function named add with two parameters",
            },
            Requirement {
                pattern: r"\w+\s*\+\s*\w+",
                hint: "Add the two parameters together",
            },
            Requirement {
                pattern: r"\breturn\b|=>",
                hint: "Return the sum",
            },
        ],
    },
    ChallengeDescriptor {
        id: "py-basics",
        title: "Python Basics",
        category: Category::Python,
        language: "python",
        description: "Write a function that calculates the factorial of a number.",
        requirements: "Create a function called factorial that takes a number and returns its factorial.",
        checks: &[
            Requirement {
                pattern: r"def\s+factorial\s*\(\s*\w+\s*\)\s*:",
                hint: "Define a function named factorial with one parameter",
            },
            Requirement {
                pattern: r"\breturn\b",
                hint: "Return the factorial",
            },
        ],
    },
    ChallengeDescriptor {
        id: "java-basics",
        title: "Java Basics",
        category: Category::Java,
        language: "java",
        description: "Create a class with a method that prints \"Hello, World!\".",
        requirements: "Create a class called HelloWorld with a main method that prints \"Hello, World!\".",
        checks: &[
            Requirement {
                pattern: r"\bclass\s+HelloWorld\b",
                hint: "Declare a class named HelloWorld",
            },
            Requirement {
                pattern: r"public\s+static\s+void\s+main\s*\(",
                hint: "Add a public static void main method",
            },
            Requirement {
                pattern: r#"System\.out\.println\s*\(\s*"Hello, World!"\s*\)"#,
                hint: "Print \"Hello, World!\" with System.out.println",
            },
        ],
    },
    ChallengeDescriptor {
        id: "cpp-basics",
        title: "C++ Basics",
        category: Category::Cpp,
        language: "cpp",
        description: "Write a program that finds the maximum of three numbers.",
        requirements: "Create a function called findMax that takes three integers and returns the maximum.",
        checks: &[
            Requirement {
                pattern: r"\bint\s+findMax\s*\(\s*int\s+\w+\s*,\s*int\s+\w+\s*,\s*int\s+\w+\s*\)",
                hint: "Define int findMax(int, int, int)",
            },
            Requirement {
                pattern: r"\breturn\b",
                hint: "Return the maximum",
            },
        ],
    },
    ChallengeDescriptor {
        id: "html-basics",
        title: "HTML Basics",
        category: Category::Web,
        language: "html",
        description: "Create a simple HTML page with a form.",
        requirements: "Create an HTML page with a form containing name and email fields.",
        checks: &[
            Requirement {
                pattern: r"(?i)<form\b",
                hint: "Add a <form> element",
            },
            Requirement {
                pattern: r#"(?i)<input\b[^>]*\bname\s*=\s*["']?name\b"#,
                hint: "Add an input named \"name\"",
            },
            Requirement {
                pattern: r#"(?i)<input\b[^>]*\b(type|name)\s*=\s*["']?email\b"#,
                hint: "Add an email input",
            },
        ],
    },
    ChallengeDescriptor {
        id: "css-basics",
        title: "CSS Basics",
        category: Category::Web,
        language: "css",
        description: "Style a button with hover effects.",
        requirements: "Create CSS styles for a button with hover and active states.",
        checks: &[
            Requirement {
                pattern: r"(?i)(\bbutton|\.btn\w*)[^{]*\{",
                hint: "Add a rule targeting a button",
            },
            Requirement {
                pattern: r"(?i):hover\b",
                hint: "Add a :hover state",
            },
            Requirement {
                pattern: r"(?i):active\b",
                hint: "Add an :active state",
            },
        ],
    },
];
