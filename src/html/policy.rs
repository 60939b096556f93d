//! Decides, tag by tag, whether text is typographed or only escaped.

use crate::skip::{SkipSet, SkipZone};

/// Tracks open elements and answers whether the current text run may be
/// typographed.
pub trait TextPolicy {
    fn open(&mut self, tag: &str);
    fn close(&mut self, tag: &str);
    fn typographs(&self) -> bool;
}

/// Typographs everything outside a single, non-stacking skip zone.
#[derive(Debug)]
pub struct SkipPolicy {
    set: SkipSet,
    zone: SkipZone,
}

impl SkipPolicy {
    pub fn new(set: SkipSet) -> Self {
        Self {
            set,
            zone: SkipZone::new(),
        }
    }
}

impl TextPolicy for SkipPolicy {
    fn open(&mut self, tag: &str) {
        if self.set.contains(tag) {
            self.zone.enter(tag);
        }
    }

    fn close(&mut self, tag: &str) {
        self.zone.exit(tag);
    }

    fn typographs(&self) -> bool {
        !self.zone.is_active()
    }
}

/// Elements whose direct text is typographed by [`InlinePolicy`].
pub const INLINE_ALLOWED: &[&str] = &[
    "p", "div", "span", "a", "dt", "dd", "li", "i", "b", "em", "strong", "small", "h1", "h2", "h3",
    "h4", "h5", "h6", "td", "th",
];

const VOID: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements that never have content or an end tag.
pub(crate) fn is_void(tag: &str) -> bool {
    VOID.iter().any(|v| *v == tag)
}

/// Typographs text whose innermost open element is in [`INLINE_ALLOWED`].
/// Text outside any element is left alone.
#[derive(Debug, Default)]
pub struct InlinePolicy {
    open: Vec<String>,
}

impl TextPolicy for InlinePolicy {
    fn open(&mut self, tag: &str) {
        if !is_void(tag) {
            self.open.push(tag.to_string());
        }
    }

    fn close(&mut self, tag: &str) {
        if let Some(pos) = self.open.iter().rposition(|t| t == tag) {
            self.open.truncate(pos);
        }
    }

    fn typographs(&self) -> bool {
        self.open
            .last()
            .is_some_and(|t| INLINE_ALLOWED.iter().any(|a| *a == t.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skip;

    #[test]
    fn test_skip_policy() {
        let mut policy = SkipPolicy::new(skip::HTML);
        assert!(policy.typographs());
        policy.open("p");
        assert!(policy.typographs());
        policy.open("pre");
        policy.open("code");
        policy.close("code");
        assert!(!policy.typographs());
        policy.close("pre");
        assert!(policy.typographs());
    }

    #[test]
    fn test_inline_policy_innermost_element_decides() {
        let mut policy = InlinePolicy::default();
        assert!(!policy.typographs());
        policy.open("div");
        assert!(policy.typographs());
        policy.open("code");
        assert!(!policy.typographs());
        policy.close("code");
        assert!(policy.typographs());
    }

    #[test]
    fn test_inline_policy_ignores_void_elements() {
        let mut policy = InlinePolicy::default();
        policy.open("p");
        policy.open("br");
        assert!(policy.typographs());
    }

    #[test]
    fn test_inline_policy_recovers_from_unclosed_elements() {
        let mut policy = InlinePolicy::default();
        policy.open("p");
        policy.open("code");
        policy.close("p");
        assert!(!policy.typographs());
    }
}
