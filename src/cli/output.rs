//! CLI output: error mapping and listing formatting.

use crate::error::AppError;
use crate::listing::Listing;

/// Map application errors to a string for CLI output.
pub fn map_error(e: &AppError) -> String {
    match e {
        AppError::NotFound(not_found) => format!("Not found: {}", not_found),
        other => other.to_string(),
    }
}

/// One line per entry: directories end with `/`, files carry their content type
pub fn format_listing_text(listing: &Listing) -> String {
    let mut lines = Vec::with_capacity(listing.entries.len() + 1);
    if !listing.node.is_dir() {
        lines.push(format!(
            "{}\t{}",
            listing.node.path(),
            listing.node.content_type().unwrap_or("-")
        ));
    }
    for entry in &listing.entries {
        if entry.is_dir() {
            lines.push(format!("{}/", entry.name()));
        } else {
            lines.push(format!(
                "{}\t{}",
                entry.name(),
                entry.content_type().unwrap_or("-")
            ));
        }
    }
    lines.join("\n")
}

pub fn format_listing_json(listing: &Listing) -> Result<String, AppError> {
    serde_json::to_string_pretty(listing)
        .map_err(|e| AppError::ServerError(format!("Failed to serialize listing: {}", e)))
}
