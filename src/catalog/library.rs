//! Template library for the playground
//!
//! Ready-made programs grouped into sections. Loading one replaces the
//! playground draft.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Library section, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LibrarySection {
    Basics,
    Algorithms,
    DataStructures,
    Web,
    Games,
}

impl LibrarySection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basics => "basics",
            Self::Algorithms => "algorithms",
            Self::DataStructures => "data_structures",
            Self::Web => "web",
            Self::Games => "games",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "basics" => Some(Self::Basics),
            "algorithms" => Some(Self::Algorithms),
            "data_structures" => Some(Self::DataStructures),
            "web" => Some(Self::Web),
            "games" => Some(Self::Games),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Basics => "Basics",
            Self::Algorithms => "Algorithms",
            Self::DataStructures => "Data Structures",
            Self::Web => "Web",
            Self::Games => "Games",
        }
    }

    pub fn all() -> &'static [LibrarySection] {
        &[
            Self::Basics,
            Self::Algorithms,
            Self::DataStructures,
            Self::Web,
            Self::Games,
        ]
    }
}

#[derive(Debug, Clone)]
pub struct LibraryTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Language key (see `LANGUAGES`)
    pub language: &'static str,
    pub section: LibrarySection,
    pub code: &'static str,
}

pub static LIBRARY: &[LibraryTemplate] = &[
    LibraryTemplate {
        id: "hello-world",
        name: "Hello World",
        description: "Basic output program",
        language: "javascript",
        section: LibrarySection::Basics,
        code: r#"console.log("Hello, World!");"#,
    },
    LibraryTemplate {
        id: "variables",
        name: "Variables",
        description: "Variable declaration and usage",
        language: "javascript",
        section: LibrarySection::Basics,
        code: "let name = \"John\";\nlet age = 25;\nconsole.log(\"Name: \" + name + \", Age: \" + age);",
    },
    LibraryTemplate {
        id: "functions",
        name: "Functions",
        description: "Function definition and calling",
        language: "javascript",
        section: LibrarySection::Basics,
        code: "function greet(name) {\n    return \"Hello, \" + name + \"!\";\n}\n\nconsole.log(greet(\"World\"));",
    },
    LibraryTemplate {
        id: "bubble-sort",
        name: "Bubble Sort",
        description: "Simple sorting algorithm",
        language: "javascript",
        section: LibrarySection::Algorithms,
        code: r#"function bubbleSort(arr) {
    for (let i = 0; i < arr.length; i++) {
        for (let j = 0; j < arr.length - i - 1; j++) {
            if (arr[j] > arr[j + 1]) {
                [arr[j], arr[j + 1]] = [arr[j + 1], arr[j]];
            }
        }
    }
    return arr;
}

const numbers = [64, 34, 25, 12, 22, 11, 90];
console.log(bubbleSort(numbers));"#,
    },
    LibraryTemplate {
        id: "binary-search",
        name: "Binary Search",
        description: "Efficient search algorithm",
        language: "javascript",
        section: LibrarySection::Algorithms,
        code: r#"function binarySearch(arr, target) {
    let low = 0;
    let high = arr.length - 1;
    while (low <= high) {
        const mid = Math.floor((low + high) / 2);
        if (arr[mid] === target) return mid;
        if (arr[mid] < target) low = mid + 1;
        else high = mid - 1;
    }
    return -1;
}

console.log(binarySearch([1, 3, 5, 7, 9, 11], 7));"#,
    },
    LibraryTemplate {
        id: "fibonacci",
        name: "Fibonacci",
        description: "Recursive sequence",
        language: "javascript",
        section: LibrarySection::Algorithms,
        code: r#"function fibonacci(n) {
    return n < 2 ? n : fibonacci(n - 1) + fibonacci(n - 2);
}

for (let i = 0; i < 10; i++) {
    console.log(fibonacci(i));
}"#,
    },
    LibraryTemplate {
        id: "linked-list",
        name: "Linked List",
        description: "Basic linked list implementation",
        language: "javascript",
        section: LibrarySection::DataStructures,
        code: r#"class Node {
    constructor(value) {
        this.value = value;
        this.next = null;
    }
}

class LinkedList {
    constructor() {
        this.head = null;
    }

    append(value) {
        const node = new Node(value);
        if (!this.head) {
            this.head = node;
            return;
        }
        let current = this.head;
        while (current.next) current = current.next;
        current.next = node;
    }
}

const list = new LinkedList();
list.append(1);
list.append(2);
console.log(list);"#,
    },
    LibraryTemplate {
        id: "stack",
        name: "Stack",
        description: "LIFO data structure",
        language: "javascript",
        section: LibrarySection::DataStructures,
        code: r#"const stack = [];
stack.push(1);
stack.push(2);
console.log(stack.pop()); // 2
console.log(stack.length); // 1"#,
    },
    LibraryTemplate {
        id: "queue",
        name: "Queue",
        description: "FIFO data structure",
        language: "javascript",
        section: LibrarySection::DataStructures,
        code: r#"const queue = [];
queue.push(1);
queue.push(2);
console.log(queue.shift()); // 1
console.log(queue.length); // 1"#,
    },
    LibraryTemplate {
        id: "html-basic",
        name: "Basic HTML",
        description: "Simple HTML structure",
        language: "html",
        section: LibrarySection::Web,
        code: r#"<!DOCTYPE html>
<html>
<head>
    <title>My Page</title>
</head>
<body>
    <h1>Hello World</h1>
    <p>This is a paragraph.</p>
</body>
</html>"#,
    },
    LibraryTemplate {
        id: "css-styling",
        name: "CSS Styling",
        description: "Basic CSS styling",
        language: "css",
        section: LibrarySection::Web,
        code: r#"body {
    font-family: Arial, sans-serif;
    margin: 0;
    padding: 20px;
    background-color: #f0f0f0;
}

h1 {
    color: #333;
    text-align: center;
}

p {
    color: #666;
    line-height: 1.6;
}"#,
    },
    LibraryTemplate {
        id: "js-dom",
        name: "DOM Manipulation",
        description: "JavaScript DOM operations",
        language: "javascript",
        section: LibrarySection::Web,
        code: r#"const heading = document.createElement("h1");
heading.textContent = "Hello, DOM!";
document.body.appendChild(heading);

heading.addEventListener("click", () => {
    heading.style.color = "tomato";
});"#,
    },
    LibraryTemplate {
        id: "number-guess",
        name: "Number Guessing",
        description: "Simple number guessing game",
        language: "javascript",
        section: LibrarySection::Games,
        code: r#"const secret = Math.floor(Math.random() * 100) + 1;

function guess(n) {
    if (n === secret) return "Correct!";
    return n < secret ? "Too low" : "Too high";
}

console.log(guess(50));"#,
    },
    LibraryTemplate {
        id: "tic-tac-toe",
        name: "Tic Tac Toe",
        description: "Classic game implementation",
        language: "javascript",
        section: LibrarySection::Games,
        code: r#"const board = Array(9).fill(null);
const lines = [[0,1,2],[3,4,5],[6,7,8],[0,3,6],[1,4,7],[2,5,8],[0,4,8],[2,4,6]];

function winner(b) {
    for (const [a, c, d] of lines) {
        if (b[a] && b[a] === b[c] && b[a] === b[d]) return b[a];
    }
    return null;
}

board[0] = board[1] = board[2] = "X";
console.log(winner(board));"#,
    },
    LibraryTemplate {
        id: "snake-game",
        name: "Snake Game",
        description: "Simple snake game",
        language: "javascript",
        section: LibrarySection::Games,
        code: r#"let snake = [{ x: 2, y: 0 }, { x: 1, y: 0 }, { x: 0, y: 0 }];
let direction = { x: 1, y: 0 };

function step() {
    const head = { x: snake[0].x + direction.x, y: snake[0].y + direction.y };
    snake = [head, ...snake.slice(0, -1)];
}

step();
console.log(snake);"#,
    },
];

static BY_ID: Lazy<HashMap<&'static str, &'static LibraryTemplate>> =
    Lazy::new(|| LIBRARY.iter().map(|t| (t.id, t)).collect());

pub fn library_template(id: &str) -> Option<&'static LibraryTemplate> {
    BY_ID.get(id).copied()
}

/// Templates of one section, in library order
pub fn library_section(section: LibrarySection) -> impl Iterator<Item = &'static LibraryTemplate> {
    LIBRARY.iter().filter(move |t| t.section == section)
}
