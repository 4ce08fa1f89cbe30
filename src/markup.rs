// Overlay markup for one member. Pure so host tests can include this file.
use html_escape::{encode_single_quoted_attribute as attr, encode_text as text};
use portal_core::CatalogEntry;

/// Detail card for `entry` at zero-based `index` out of `total`.
pub fn member_html(entry: &CatalogEntry, index: usize, total: usize) -> String {
    format!(
        "<div class='member' style='--theme: {color}; background: {gradient};'>\
           <img src='{image}' alt='{alt}'/>\
           <h2>{name}</h2>\
           <p class='role'>{role} <span class='handle'>{handle}</span></p>\
           <p class='bio'>{bio}</p>\
           <h3>Committees</h3><ul>{committees}</ul>\
           <h3>Projects</h3><ul>{projects}</ul>\
           <p class='position'>{pos} / {total}</p>\
         </div>",
        color = attr(entry.theme_color),
        gradient = attr(entry.gradient),
        image = attr(entry.image),
        alt = attr(entry.name),
        name = text(entry.name),
        role = text(entry.role),
        handle = text(entry.handle),
        bio = text(entry.bio),
        committees = list_items(entry.committees),
        projects = list_items(entry.projects),
        pos = index + 1,
        total = total,
    )
}

fn list_items(items: &[&str]) -> String {
    items
        .iter()
        .map(|s| format!("<li>{}</li>", text(s)))
        .collect()
}
