//! Starter code templates per language

/// Languages with a dedicated template, in selector order
pub static LANGUAGES: &[&str] = &[
    "javascript",
    "typescript",
    "python",
    "java",
    "cpp",
    "c",
    "rust",
    "go",
    "html",
    "css",
    "sql",
    "bash",
];

const FALLBACK_TEMPLATE: &str = "// Write your code here";

/// Starter template for `language`, or a generic placeholder
pub fn starter_template(language: &str) -> &'static str {
    match language {
        "javascript" => JAVASCRIPT,
        "typescript" => TYPESCRIPT,
        "python" => PYTHON,
        "java" => JAVA,
        "cpp" => CPP,
        "c" => C,
        "rust" => RUST,
        "go" => GO,
        "html" => HTML,
        "css" => CSS,
        "sql" => SQL,
        "bash" => BASH,
        _ => FALLBACK_TEMPLATE,
    }
}

const JAVASCRIPT: &str = r#"// JavaScript Code
console.log("Hello, World!");

// Variables
let name = "John";
const age = 25;

// Function
function greet(person) {
    return `Hello, ${person}!`;
}

console.log(greet(name));"#;

const TYPESCRIPT: &str = r#"// TypeScript Code
console.log("Hello, World!");

// Variables with types
let name: string = "John";
const age: number = 25;

// Function with types
function greet(person: string): string {
    return `Hello, ${person}!`;
}

console.log(greet(name));"#;

const PYTHON: &str = r#"# Python Code
print("Hello, World!")

# Variables
name = "John"
age = 25

# Function
def greet(person):
    return f"Hello, {person}!"

print(greet(name))"#;

const JAVA: &str = r#"// Java Code
public class Main {
    public static void main(String[] args) {
        System.out.println("Hello, World!");

        // Variables
        String name = "John";
        int age = 25;

        System.out.println(greet(name));
    }

    public static String greet(String person) {
        return "Hello, " + person + "!";
    }
}"#;

const CPP: &str = r#"// C++ Code
#include <iostream>
#include <string>
using namespace std;

string greet(string person) {
    return "Hello, " + person + "!";
}

int main() {
    cout << "Hello, World!" << endl;

    // Variables
    string name = "John";
    int age = 25;

    cout << greet(name) << endl;
    return 0;
}"#;

const C: &str = r#"// C Code
#include <stdio.h>

void greet(const char* person) {
    printf("Hello, %s!\n", person);
}

int main() {
    printf("Hello, World!\n");

    // Variables
    char name[] = "John";
    int age = 25;

    greet(name);
    return 0;
}"#;

const RUST: &str = r#"// Rust Code
fn greet(person: &str) -> String {
    format!("Hello, {}!", person)
}

fn main() {
    println!("Hello, World!");

    // Variables
    let name = "John";
    let age = 25;

    println!("{} ({})", greet(name), age);
}"#;

const GO: &str = r#"package main

import "fmt"

func greet(person string) string {
    return "Hello, " + person + "!"
}

func main() {
    fmt.Println("Hello, World!")

    // Variables
    name := "John"
    age := 25

    fmt.Println(greet(name), age)
}"#;

const HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Hello World</title>
</head>
<body>
    <h1>Hello, World!</h1>
    <p>This is a simple HTML page.</p>
</body>
</html>"#;

const CSS: &str = r#"/* CSS Styles */
body {
    font-family: Arial, sans-serif;
    margin: 0;
    padding: 20px;
    background-color: #f0f0f0;
}

h1 {
    color: #333;
    text-align: center;
}"#;

const SQL: &str = r#"-- SQL Code
CREATE TABLE users (
    id INT PRIMARY KEY,
    name VARCHAR(50),
    age INT
);

INSERT INTO users VALUES (1, 'John', 25);

SELECT * FROM users WHERE age > 20;"#;

const BASH: &str = r#"#!/bin/bash
# Bash Script
echo "Hello, World!"

name="John"

greet() {
    echo "Hello, $1!"
}

greet "$name""#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_language_has_template() {
        for lang in LANGUAGES {
            assert_ne!(starter_template(lang), FALLBACK_TEMPLATE, "{}", lang);
        }
    }

    #[test]
    fn test_unknown_language_falls_back() {
        assert_eq!(starter_template("cobol"), FALLBACK_TEMPLATE);
    }
}
