//! HTML rendering of listings

use crate::listing::Listing;
use crate::tree::node::Node;
use crate::tree::path::url_path;
use std::fmt::Write as _;

/// URL prefixes used to build links
#[derive(Debug, Clone)]
pub struct Prefixes {
    pub listing: String,
    pub media: String,
}

impl Prefixes {
    /// Link target for an entry: listings for directories, raw bytes for files
    pub fn href(&self, node: &Node) -> String {
        if node.is_dir() {
            url_path(&self.listing, node.path())
        } else {
            url_path(&self.media, node.path())
        }
    }
}

/// Escape text for use in HTML content and attribute values
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a full listing page
pub fn listing_page(listing: &Listing, prefixes: &Prefixes) -> String {
    let title = if listing.is_root() {
        "/".to_string()
    } else {
        format!("/{}", listing.path)
    };

    let mut body = String::new();
    write_breadcrumbs(&mut body, listing, prefixes);

    if !listing.node.is_dir() {
        let _ = writeln!(
            body,
            "<p class=\"file\"><a href=\"{}\">{}</a> {}</p>",
            escape_html(&prefixes.href(&listing.node)),
            escape_html(listing.node.name()),
            escape_html(listing.node.content_type().unwrap_or("")),
        );
    }

    if listing.entries.is_empty() {
        body.push_str("<p class=\"empty\">Nothing here.</p>\n");
    } else {
        body.push_str("<ul class=\"entries\">\n");
        for entry in &listing.entries {
            let class = if entry.is_dir() { "dir" } else { "file" };
            let suffix = if entry.is_dir() { "/" } else { "" };
            let _ = write!(
                body,
                "<li class=\"{}\"><a href=\"{}\">{}{}</a>",
                class,
                escape_html(&prefixes.href(entry)),
                escape_html(entry.name()),
                suffix,
            );
            if let Some(content_type) = entry.content_type() {
                let _ = write!(
                    body,
                    " <span class=\"type\">{}</span>",
                    escape_html(content_type)
                );
            }
            body.push_str("</li>\n");
        }
        body.push_str("</ul>\n");
    }

    page(&title, &body)
}

/// Render the page shown when a path does not resolve
pub fn not_found_page(path: &str, prefixes: &Prefixes) -> String {
    let body = format!(
        "<h1>Not found</h1>\n<p>No entry at <code>/{}</code>.</p>\n<p><a href=\"{}\">Back to the top</a></p>\n",
        escape_html(path.trim_matches('/')),
        escape_html(&url_path(&prefixes.listing, ".")),
    );
    page("Not found", &body)
}

fn write_breadcrumbs(out: &mut String, listing: &Listing, prefixes: &Prefixes) {
    out.push_str("<nav class=\"breadcrumbs\">");
    let _ = write!(
        out,
        "<a href=\"{}\">root</a>",
        escape_html(&url_path(&prefixes.listing, "."))
    );
    for crumb in &listing.breadcrumbs {
        let _ = write!(
            out,
            " / <a href=\"{}\">{}</a>",
            escape_html(&url_path(&prefixes.listing, &crumb.path)),
            escape_html(&crumb.name),
        );
    }
    out.push_str("</nav>\n");
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape_html(title),
        body
    )
}
