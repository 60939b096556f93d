//! Cross-reference resolution for `a` elements.
//!
//! Archived links identify their target by a section `id` and, for blog
//! posts, a post `name`. Both are consumed and replaced by a computed
//! `href`; `itemprop="url"` always leads the attribute list.

use super::tables::Attr;

const PORTFOLIO: &str = "/portfolio/";
const BLOG: &str = "/blog/";
const ROOT: &str = "/";

/// Directory of a section id.
pub fn directory(id: &str) -> &'static str {
    match id {
        "1" | "53" | "62" => PORTFOLIO,
        "2" => BLOG,
        _ => ROOT,
    }
}

/// Rewrite the attributes of an `a` element.
///
/// `id` picks the directory only while none is chosen; `name` always forces
/// the blog directory and names the file, whatever the attribute order.
/// A computed `href` replaces any literal one.
pub fn resolve(attrs: Vec<Attr>) -> Vec<Attr> {
    let mut dir: Option<&'static str> = None;
    let mut file = String::new();
    let mut rest = Vec::with_capacity(attrs.len());

    for attr in attrs {
        match attr.key.as_str() {
            "id" => {
                if dir.is_none() {
                    dir = Some(directory(&attr.value));
                }
            }
            "name" => {
                dir = Some(BLOG);
                file = format!("{}.html", attr.value);
            }
            _ => rest.push(attr),
        }
    }

    let mut result = Vec::with_capacity(rest.len() + 2);
    result.push(Attr::new("itemprop", "url"));
    match dir {
        Some(dir) => {
            result.extend(rest.into_iter().filter(|a| a.key != "href"));
            result.push(Attr::new("href", format!("{dir}{file}")));
        }
        None => result.extend(rest),
    }
    result
}
