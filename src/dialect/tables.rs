//! Static lookup tables of the legacy dialect.

use super::link;

/// Heading level implied by an enclosing `div1`/`div2`/`div3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLevel {
    Two,
    Three,
    Four,
}

impl SectionLevel {
    pub fn digit(self) -> char {
        match self {
            SectionLevel::Two => '2',
            SectionLevel::Three => '3',
            SectionLevel::Four => '4',
        }
    }
}

/// What a dialect tag turns into on output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mapping {
    /// Emitted under another name.
    Rename(&'static str),
    /// Emits nothing; sets the heading level for nested `head` tags.
    Section(SectionLevel),
    /// Emitted as `h` followed by the current section level.
    Heading,
}

/// Look up the output mapping of a source tag. Unknown tags pass through.
pub fn remap(source: &str) -> Option<Mapping> {
    let mapping = match source {
        "example" => Mapping::Rename("pre"),
        "quote" => Mapping::Rename("blockquote"),
        "link" => Mapping::Rename("a"),
        "center" => Mapping::Rename("div"),
        "div1" => Mapping::Section(SectionLevel::Two),
        "div2" => Mapping::Section(SectionLevel::Three),
        "div3" => Mapping::Section(SectionLevel::Four),
        "head" => Mapping::Heading,
        _ => return None,
    };
    Some(mapping)
}

/// Output name of a heading inside `section`.
///
/// A `head` outside any section yields a bare `h`.
pub fn heading(section: Option<SectionLevel>) -> String {
    match section {
        Some(level) => format!("h{}", level.digit()),
        None => "h".to_string(),
    }
}

/// Attributes injected when a source element carries none.
pub fn defaults(source: &str) -> Option<&'static [(&'static str, &'static str)]> {
    match source {
        "example" => Some(&[("class", "code")]),
        "center" => Some(&[("style", "text-align: center;")]),
        _ => None,
    }
}

/// A start tag attribute. The value is kept in its escaped source form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub key: String,
    pub value: String,
}

impl Attr {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

pub const TABLE_CLASS: &str = "table table-condensed table-striped";
pub const ACRONYM_CLASS: &str = "initialism";

/// Apply the decoration rule of an output tag, if it has one.
pub fn decorate(output: &str, attrs: Vec<Attr>) -> Vec<Attr> {
    match output {
        "table" => add_class(attrs, TABLE_CLASS),
        "acronym" => add_class(attrs, ACRONYM_CLASS),
        "a" => link::resolve(attrs),
        _ => attrs,
    }
}

fn add_class(mut attrs: Vec<Attr>, class: &str) -> Vec<Attr> {
    match attrs.iter_mut().find(|a| a.key == "class") {
        Some(existing) => {
            existing.value.push(' ');
            existing.value.push_str(class);
        }
        None => attrs.push(Attr::new("class", class)),
    }
    attrs
}
