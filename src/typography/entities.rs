//! Named HTML entities produced by typographic substitution.

/// Plain-text sequences that have a dedicated entity name.
///
/// Anything not listed here is used verbatim as the entity name, so
/// `entity("mdash")` yields `&mdash;` while `entity("1/2")` yields `&frac12;`.
pub static SYMBOLS: &[(&str, &str)] = &[("1/2", "frac12"), ("1/4", "frac14"), ("3/4", "frac34")];

pub const PLUS_MINUS: &str = "&plusmn;";
pub const NBSP: &str = "&nbsp;";
pub const MDASH: &str = "&mdash;";
pub const HELLIP: &str = "&hellip;";
pub const MINUS: &str = "&minus;";

/// Format `name` as an HTML entity reference, mapping known symbols first.
pub fn entity(name: &str) -> String {
    let symbol = SYMBOLS
        .iter()
        .find(|(text, _)| *text == name)
        .map_or(name, |(_, symbol)| symbol);
    format!("&{symbol};")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_plain_name() {
        assert_eq!(entity("mdash"), MDASH);
        assert_eq!(entity("plusmn"), PLUS_MINUS);
    }

    #[test]
    fn test_entity_fraction() {
        assert_eq!(entity("1/2"), "&frac12;");
        assert_eq!(entity("1/4"), "&frac14;");
        assert_eq!(entity("3/4"), "&frac34;");
    }
}
