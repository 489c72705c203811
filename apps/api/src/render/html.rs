//! HTML serialization of a [`RenderedDocument`].
//!
//! Produces a self-contained fragment; styling is left to the host page through the
//! class names. All user text is escaped.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::models::resume::Template;
use crate::render::document::{
    ContactItem, Entry, Header, RenderedDocument, Section, SectionBody,
};

pub fn to_html(doc: &RenderedDocument) -> String {
    let mut out = format!(
        "<div class=\"template {}-template\">\n",
        doc.template.as_str()
    );

    match doc.template {
        Template::Creative => {
            out.push_str("<aside class=\"creative-sidebar\">\n");
            write_header(&mut out, &doc.header, doc.template);
            for section in &doc.sidebar {
                write_section(&mut out, section, "sidebar-section");
            }
            out.push_str("</aside>\n<main class=\"creative-main\">\n");
            for section in &doc.main {
                write_section(&mut out, section, "creative-section");
            }
            out.push_str("</main>\n");
        }
        Template::Modern | Template::Classic => {
            write_header(&mut out, &doc.header, doc.template);
            for section in &doc.main {
                write_section(&mut out, section, "template-section");
            }
        }
    }

    out.push_str("</div>\n");
    out
}

/// Only web links become anchors; anything else is printed as text.
fn safe_href(url: &str) -> Option<String> {
    let lower = url.trim().to_ascii_lowercase();
    (lower.starts_with("http://") || lower.starts_with("https://"))
        .then(|| encode_double_quoted_attribute(url.trim()).into_owned())
}

fn anchor(href: &str, label: &str) -> String {
    match safe_href(href) {
        Some(h) => format!("<a href=\"{h}\">{}</a>", encode_text(label)),
        None => encode_text(label).into_owned(),
    }
}

fn write_header(out: &mut String, header: &Header, template: Template) {
    out.push_str("<header class=\"template-header\">\n");
    out.push_str(&format!("<h1 class=\"name\">{}</h1>\n", encode_text(&header.name)));

    if !header.contact.is_empty() {
        let separator = match template {
            Template::Classic => "<span class=\"separator\">|</span>",
            Template::Modern | Template::Creative => "",
        };
        let items: Vec<String> = header
            .contact
            .iter()
            .map(|c| format!("<span class=\"contact-item\">{}</span>", encode_text(&c.value)))
            .collect();
        out.push_str(&format!(
            "<div class=\"contact-info\">{}</div>\n",
            items.join(separator)
        ));
    }

    if !header.links.is_empty() {
        let links: Vec<String> = header
            .links
            .iter()
            .map(|l| match template {
                // Classic spells the URL out.
                Template::Classic => format!(
                    "<span class=\"link-item\">{}: {}</span>",
                    encode_text(&l.label),
                    encode_text(&l.href)
                ),
                Template::Modern | Template::Creative => anchor(&l.href, &l.label),
            })
            .collect();
        out.push_str(&format!("<div class=\"links\">{}</div>\n", links.join(" ")));
    }

    out.push_str("</header>\n");
}

fn write_section(out: &mut String, section: &Section, class: &str) {
    out.push_str(&format!(
        "<section class=\"{class} {}\">\n<h2 class=\"section-title\">{}</h2>\n",
        section.kind.css_class(),
        encode_text(&section.title)
    ));
    match &section.body {
        SectionBody::Paragraph(text) => {
            out.push_str(&format!("<p>{}</p>\n", encode_text(text)));
        }
        SectionBody::Tags(tags) => {
            out.push_str("<div class=\"tags\">");
            for tag in tags {
                out.push_str(&format!("<span class=\"tag\">{}</span>", encode_text(tag)));
            }
            out.push_str("</div>\n");
        }
        SectionBody::Lines(lines) => {
            out.push_str("<ul>");
            for line in lines {
                out.push_str(&format!("<li>{}</li>", encode_text(line)));
            }
            out.push_str("</ul>\n");
        }
        SectionBody::Entries(entries) => {
            for entry in entries {
                write_entry(out, entry);
            }
        }
        SectionBody::Contact(items) => {
            out.push_str("<ul class=\"contact\">");
            for item in items {
                write_contact_item(out, item);
            }
            out.push_str("</ul>\n");
        }
    }
    out.push_str("</section>\n");
}

fn write_entry(out: &mut String, entry: &Entry) {
    out.push_str("<div class=\"entry\">\n");
    let link = entry
        .link
        .as_deref()
        .map(|href| format!(" {}", anchor(href, "link")))
        .unwrap_or_default();
    out.push_str(&format!(
        "<h3 class=\"entry-title\">{}{link}</h3>\n",
        encode_text(&entry.title)
    ));
    if let Some(subtitle) = &entry.subtitle {
        out.push_str(&format!(
            "<p class=\"entry-subtitle\">{}</p>\n",
            encode_text(subtitle)
        ));
    }
    for meta in &entry.meta {
        out.push_str(&format!("<p class=\"entry-meta\">{}</p>\n", encode_text(meta)));
    }
    for detail in &entry.details {
        out.push_str(&format!(
            "<p class=\"entry-detail\">{}</p>\n",
            encode_text(detail)
        ));
    }
    out.push_str("</div>\n");
}

fn write_contact_item(out: &mut String, item: &ContactItem) {
    let inner = match item.kind.label() {
        Some(label) => anchor(&item.value, label),
        None => encode_text(&item.value).into_owned(),
    };
    out.push_str(&format!(
        "<li class=\"contact-{}\">{inner}</li>",
        item.kind.as_str()
    ));
}
