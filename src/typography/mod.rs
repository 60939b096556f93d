//! Typographic substitution over plain text runs.
//!
//! Each [`Typography`] is an ordered list of regex rules. Rules run once,
//! left to right, every rule replacing all non-overlapping matches in the
//! output of the previous one. Applying a rule set twice is not guaranteed
//! to be stable; callers run it exactly once per text run.
//!
//! Three rule sets exist, one per entry point:
//!
//! - [`Typography::dialect`]: plus-minus, spaced dashes, leading dash, ellipsis.
//! - [`Typography::html`]: the dialect rules, preceded by hyphen spacing
//!   normalization and followed by digit minus and vulgar fractions.
//! - [`Typography::inline`]: the html rules without fractions, plus Russian
//!   guillemets.
//!
//! ```
//! use typomark::typography::Typography;
//!
//! assert_eq!(Typography::dialect().apply("s - s"), "s&nbsp;&mdash; s");
//! assert_eq!(Typography::html().apply("123-456"), "123&minus;456");
//! ```

pub mod entities;

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use entities::{HELLIP, MDASH, MINUS, NBSP, PLUS_MINUS, SYMBOLS, entity};

/// A single `pattern -> replacement` substitution.
///
/// The replacement may reference capture groups with `${n}`.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    replacement: String,
}

impl Rule {
    fn new(pattern: &str, replacement: impl Into<String>) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            replacement: replacement.into(),
        }
    }

    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, self.replacement.as_str())
    }
}

/// An ordered typographic rule set.
#[derive(Debug)]
pub struct Typography {
    rules: Vec<Rule>,
}

// Dash: one or two hyphens or an em dash, followed by whitespace or NBSP.
const DASH: &str = r"(--?|—|-)(\s|\x{a0})";

fn plus_minus() -> Rule {
    Rule::new(r"\+-", PLUS_MINUS)
}

fn spaced_dash() -> Rule {
    Rule::new(&format!(r"(\s+){DASH}"), format!("{NBSP}{MDASH}${{3}}"))
}

fn leading_dash() -> Rule {
    Rule::new(&format!("^{DASH}"), format!("{MDASH}${{2}}"))
}

fn ellipsis() -> Rule {
    Rule::new(r"\.{2,}", HELLIP)
}

// "word- next" is spaced out so it reads as a dash to the rules after it
fn hyphen_spacing() -> Rule {
    Rule::new(r"(\w)-(\s+)", "${1} -${2}")
}

fn digit_minus() -> Rule {
    Rule::new(r"(\d)-(\d)", format!("${{1}}{MINUS}${{2}}"))
}

static DIALECT: LazyLock<Typography> = LazyLock::new(|| Typography {
    rules: vec![plus_minus(), spaced_dash(), leading_dash(), ellipsis()],
});

static HTML: LazyLock<Typography> = LazyLock::new(|| {
    let mut rules = vec![
        hyphen_spacing(),
        plus_minus(),
        spaced_dash(),
        leading_dash(),
        ellipsis(),
        digit_minus(),
    ];
    rules.extend(
        SYMBOLS
            .iter()
            .map(|(text, _)| Rule::new(&format!(r"\b{}\b", regex::escape(text)), entity(text))),
    );
    Typography { rules }
});

static INLINE: LazyLock<Typography> = LazyLock::new(|| Typography {
    rules: vec![
        hyphen_spacing(),
        plus_minus(),
        spaced_dash(),
        leading_dash(),
        ellipsis(),
        digit_minus(),
        Rule::new(r#"["»](\S)"#, "«${1}"),
        Rule::new(r#"(\S)["«]"#, "${1}»"),
    ],
});

impl Typography {
    /// Rule set for the legacy dialect converter.
    pub fn dialect() -> &'static Typography {
        &DIALECT
    }

    /// Rule set for the HTML re-tokenizer.
    pub fn html() -> &'static Typography {
        &HTML
    }

    /// Rule set for short inline fragments such as titles.
    pub fn inline() -> &'static Typography {
        &INLINE
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Run every rule once, in order.
    pub fn apply(&self, text: &str) -> String {
        let mut result = text.to_string();
        for rule in &self.rules {
            let replaced = match rule.apply(&result) {
                Cow::Owned(replaced) => replaced,
                Cow::Borrowed(_) => continue,
            };
            result = replaced;
        }
        result
    }
}

/// Typograph `text` with the dialect rule set.
pub fn typo(text: &str) -> String {
    Typography::dialect().apply(text)
}
