//! Skip zones: spans of markup whose text is escaped but never typographed.
//!
//! A [`SkipZone`] holds at most one active tag. Zones do not stack: a second
//! skip tag opened inside an active zone is ignored, and only the close tag
//! matching the opener ends the zone. A same-named tag nested inside the
//! zone (`<pre>` in `<pre>`) therefore ends it at the first inner close.

/// A fixed set of tag names that open a skip zone.
#[derive(Debug, Clone, Copy)]
pub struct SkipSet(&'static [&'static str]);

impl SkipSet {
    pub const fn new(tags: &'static [&'static str]) -> Self {
        Self(tags)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| *t == tag)
    }

    pub fn tags(&self) -> &'static [&'static str] {
        self.0
    }
}

/// Skip set of the legacy dialect converter, covering source and output names.
pub const DIALECT: SkipSet = SkipSet::new(&["pre", "a", "script", "code", "example", "link"]);

/// Skip set of the HTML re-tokenizer.
pub const HTML: SkipSet = SkipSet::new(&["pre", "a", "script", "code", "style"]);

/// Single-slot skip state, created fresh for every conversion.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SkipZone {
    active: Option<String>,
}

impl SkipZone {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a zone for `tag` unless one is already active.
    ///
    /// Returns `true` if this call opened the zone.
    pub fn enter(&mut self, tag: &str) -> bool {
        if self.active.is_some() {
            return false;
        }
        self.active = Some(tag.to_string());
        true
    }

    /// Close the zone if it was opened by `tag`.
    ///
    /// Returns `true` if this call closed the zone.
    pub fn exit(&mut self, tag: &str) -> bool {
        if self.active.as_deref() == Some(tag) {
            self.active = None;
            return true;
        }
        false
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The tag that opened the active zone.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_and_exit() {
        let mut zone = SkipZone::new();
        assert!(!zone.is_active());
        assert!(zone.enter("pre"));
        assert!(zone.is_active());
        assert_eq!(zone.active(), Some("pre"));
        assert!(zone.exit("pre"));
        assert!(!zone.is_active());
    }

    #[test]
    fn test_second_tag_does_not_replace_zone() {
        let mut zone = SkipZone::new();
        zone.enter("pre");
        assert!(!zone.enter("code"));
        assert_eq!(zone.active(), Some("pre"));
        assert!(!zone.exit("code"));
        assert!(zone.is_active());
        assert!(zone.exit("pre"));
    }

    #[test]
    fn test_nested_same_tag_closes_early() {
        let mut zone = SkipZone::new();
        zone.enter("pre");
        zone.enter("pre");
        assert!(zone.exit("pre"));
        assert!(!zone.is_active());
    }

    #[test]
    fn test_exit_without_zone() {
        let mut zone = SkipZone::new();
        assert!(!zone.exit("pre"));
    }

    #[test]
    fn test_skip_sets() {
        assert!(DIALECT.contains("example"));
        assert!(DIALECT.contains("link"));
        assert!(!DIALECT.contains("style"));
        assert!(HTML.contains("style"));
        assert!(!HTML.contains("example"));
        assert!(!HTML.contains("p"));
    }
}
