//! Complexity scorer for task routing.
//!
//! Scores a task description on a 0-100 scale from lexical signals only:
//! complexity and simplicity keywords, raw length, source file references,
//! list items and fenced code. The result is a pure function of the text.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Score returned for empty or whitespace-only input, and the starting
/// point of every other score.
pub const NEUTRAL_SCORE: u32 = 50;

const KEYWORD_WEIGHT: i32 = 10;

/// Maximum total bonus from complexity keywords.
const COMPLEXITY_BONUS_CAP: i32 = 40;

/// Simplicity matches beyond this count are added back after the penalty.
const SIMPLICITY_ADD_BACK_AFTER: usize = 4;

/// List items beyond this count earn nothing extra.
const LIST_ITEM_CAP: usize = 5;

const COMPLEXITY_KEYWORDS: &[&str] = &[
    "system",
    "architecture",
    "design",
    "algorithm",
    "refactor",
    "optimize",
    "debug",
    "analyze",
    "complex",
    "large-scale",
    "distributed",
    "microservices",
    "performance",
    "scalability",
    "scalable",
    "security",
    "integration",
    "migration",
    "restructure",
    "overhaul",
    "redesign",
    "authentication",
    "authorization",
    "oauth",
    "implement",
];

const SIMPLICITY_KEYWORDS: &[&str] = &[
    "write",
    "test",
    "fix",
    "typo",
    "format",
    "simple",
    "quick",
    "small",
    "add",
    "update",
    "comment",
    "documentation",
    "readme",
    "log",
    "print",
    "display",
    "show",
    "rename",
];

/// Compile one case-insensitive whole-word pattern per keyword.
///
/// `\b` is Unicode-aware, so a keyword glued to non-ASCII letters
/// (`testé`) does not match.
fn keyword_patterns(keywords: &[&'static str]) -> Vec<(&'static str, Regex)> {
    keywords
        .iter()
        .map(|kw| {
            let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(kw))).unwrap();
            (*kw, re)
        })
        .collect()
}

static COMPLEXITY_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> =
    LazyLock::new(|| keyword_patterns(COMPLEXITY_KEYWORDS));

static SIMPLICITY_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> =
    LazyLock::new(|| keyword_patterns(SIMPLICITY_KEYWORDS));

// `.tsx` matches as its own token, never as `.ts`.
static RE_FILE_EXTENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.(?:ts|js|tsx|jsx|py|java|go|rb|php|cs)\b").unwrap()
});

// List markers count anywhere in the text, not only at line starts. The
// whitespace after the marker must stay on the same line.
static RE_NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.[\s&&[^\r\n]]").unwrap());

static RE_BULLET_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-*][\s&&[^\r\n]]").unwrap());

/// Breakdown of a complexity score by rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    /// Final score (0-100).
    pub total: u32,
    /// Signed contribution of each rule, in evaluation order.
    pub components: Vec<(&'static str, i32)>,
    /// Distinct complexity keywords found.
    pub complexity_matches: Vec<&'static str>,
    /// Distinct simplicity keywords found.
    pub simplicity_matches: Vec<&'static str>,
    /// Human-readable notes about the notable signals.
    pub hints: Vec<String>,
}

impl ScoreBreakdown {
    fn neutral() -> Self {
        Self {
            total: NEUTRAL_SCORE,
            components: Vec::new(),
            complexity_matches: Vec::new(),
            simplicity_matches: Vec::new(),
            hints: vec!["Empty task, neutral score".to_string()],
        }
    }

    /// Contribution of a single rule, 0 if it did not fire.
    pub fn component(&self, name: &str) -> i32 {
        self.components
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
            .unwrap_or(0)
    }
}

fn matched_keywords(patterns: &[(&'static str, Regex)], text: &str) -> Vec<&'static str> {
    patterns
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(kw, _)| *kw)
        .collect()
}

/// Score a task for complexity (0-100).
pub fn score_complexity(task: &str) -> u32 {
    score_complexity_breakdown(task).total
}

/// Score a task and report how each rule contributed.
pub fn score_complexity_breakdown(task: &str) -> ScoreBreakdown {
    if task.trim().is_empty() {
        return ScoreBreakdown::neutral();
    }

    let mut hints = Vec::new();

    // Complexity keywords: the bonus stops growing at the cap.
    let complexity_matches = matched_keywords(&COMPLEXITY_PATTERNS, task);
    let complexity_bonus =
        (complexity_matches.len() as i32 * KEYWORD_WEIGHT).min(COMPLEXITY_BONUS_CAP);
    if !complexity_matches.is_empty() {
        hints.push(format!(
            "complexity keywords: {}",
            complexity_matches.join(", ")
        ));
    }

    // Simplicity keywords: full penalty first, then matches past the
    // fourth are credited back.
    let simplicity_matches = matched_keywords(&SIMPLICITY_PATTERNS, task);
    let mut simplicity_penalty = -(simplicity_matches.len() as i32 * KEYWORD_WEIGHT);
    if simplicity_matches.len() > SIMPLICITY_ADD_BACK_AFTER {
        simplicity_penalty +=
            (simplicity_matches.len() - SIMPLICITY_ADD_BACK_AFTER) as i32 * KEYWORD_WEIGHT;
    }
    if !simplicity_matches.is_empty() {
        hints.push(format!(
            "simplicity keywords: {}",
            simplicity_matches.join(", ")
        ));
    }

    // Length of the untrimmed input, first matching bucket wins.
    let char_count = task.chars().count();
    let length_adjustment = if char_count > 500 {
        15
    } else if char_count > 200 {
        5
    } else if char_count < 50 {
        -15
    } else if char_count < 100 {
        -5
    } else {
        0
    };
    if char_count > 200 {
        hints.push(format!("Long task ({} chars)", char_count));
    }

    let file_refs = RE_FILE_EXTENSION.find_iter(task).count();
    let file_adjustment = if file_refs > 3 {
        15
    } else if file_refs > 1 {
        5
    } else {
        0
    };
    if file_refs > 1 {
        hints.push(format!("{} source file references", file_refs));
    }

    let list_items =
        RE_NUMBERED_ITEM.find_iter(task).count() + RE_BULLET_ITEM.find_iter(task).count();
    let list_adjustment = if list_items > 0 {
        15 + 5 * list_items.min(LIST_ITEM_CAP) as i32
    } else {
        0
    };
    if list_items > 0 {
        hints.push(format!("{} list items", list_items));
    }

    let code_adjustment = if task.contains("```") {
        hints.push("Contains a code block".to_string());
        10
    } else {
        0
    };

    let components = vec![
        ("complexity_keywords", complexity_bonus),
        ("simplicity_keywords", simplicity_penalty),
        ("length", length_adjustment),
        ("file_references", file_adjustment),
        ("list_items", list_adjustment),
        ("code_block", code_adjustment),
    ];

    let raw: i32 = NEUTRAL_SCORE as i32 + components.iter().map(|(_, v)| v).sum::<i32>();
    let total = raw.clamp(0, 100) as u32;

    ScoreBreakdown {
        total,
        components,
        complexity_matches,
        simplicity_matches,
        hints,
    }
}
