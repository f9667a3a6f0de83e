//! Tag fragment formatting.
//!
//! `id` and `class` are always written, even when empty. Nothing is escaped.

use dentml_parser::Tag;

/// `<name id="..." class="..." attr="value" ...>`
pub fn open_tag(tag: &Tag) -> String {
    let ids: Vec<&str> = tag.ids.iter().map(|i| i.name.as_str()).collect();
    let classes: Vec<&str> = tag.classes.iter().map(|c| c.name.as_str()).collect();

    let mut out = format!(
        "<{} id=\"{}\" class=\"{}\"",
        tag.name,
        ids.join(" "),
        classes.join(" ")
    );

    for attr in &tag.attributes {
        out.push(' ');
        out.push_str(&attr.name);
        out.push_str(&format!("=\"{}\"", attr.value));
    }

    out.push('>');
    out
}

/// `</name>`
pub fn close_tag(tag: &Tag) -> String {
    format!("</{}>", tag.name)
}
