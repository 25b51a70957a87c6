//! Extension to content-type classification

use std::collections::HashMap;

/// Built-in extension table (lowercase, without the leading dot)
const BUILTIN: &[(&str, &str)] = &[
    // Images
    ("avif", "image/avif"),
    ("bmp", "image/bmp"),
    ("gif", "image/gif"),
    ("ico", "image/vnd.microsoft.icon"),
    ("jpeg", "image/jpeg"),
    ("jpg", "image/jpeg"),
    ("png", "image/png"),
    ("svg", "image/svg+xml"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("webp", "image/webp"),
    // Video
    ("avi", "video/x-msvideo"),
    ("m4v", "video/mp4"),
    ("mkv", "video/x-matroska"),
    ("mov", "video/quicktime"),
    ("mp4", "video/mp4"),
    ("mpeg", "video/mpeg"),
    ("ogv", "video/ogg"),
    ("webm", "video/webm"),
    // Audio
    ("aac", "audio/aac"),
    ("flac", "audio/flac"),
    ("m4a", "audio/mp4"),
    ("mp3", "audio/mpeg"),
    ("oga", "audio/ogg"),
    ("ogg", "audio/ogg"),
    ("opus", "audio/opus"),
    ("wav", "audio/wav"),
    // Text and documents
    ("css", "text/css; charset=utf-8"),
    ("csv", "text/csv; charset=utf-8"),
    ("htm", "text/html; charset=utf-8"),
    ("html", "text/html; charset=utf-8"),
    ("js", "text/javascript; charset=utf-8"),
    ("json", "application/json"),
    ("md", "text/markdown; charset=utf-8"),
    ("mjs", "text/javascript; charset=utf-8"),
    ("pdf", "application/pdf"),
    ("srt", "application/x-subrip"),
    ("txt", "text/plain; charset=utf-8"),
    ("vtt", "text/vtt; charset=utf-8"),
    ("wasm", "application/wasm"),
    ("xml", "text/xml; charset=utf-8"),
    // Archives
    ("gz", "application/gzip"),
    ("tar", "application/x-tar"),
    ("zip", "application/zip"),
];

/// Classifies file names by extension
///
/// Lookups try the extension as written first, then its lowercase form.
/// Configured overrides take precedence over the built-in table.
#[derive(Debug, Clone)]
pub struct ContentTypes {
    table: HashMap<String, String>,
}

impl Default for ContentTypes {
    fn default() -> Self {
        Self {
            table: BUILTIN
                .iter()
                .map(|(ext, ty)| (ext.to_string(), ty.to_string()))
                .collect(),
        }
    }
}

impl ContentTypes {
    /// Built-in table extended with `overrides` (extension -> content type)
    ///
    /// Extensions may be given with or without a leading dot and in any case.
    pub fn with_overrides<'a, I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut types = Self::default();
        for (ext, ty) in overrides {
            let ext = ext.trim_start_matches('.');
            if ext.is_empty() {
                continue;
            }
            types.table.insert(ext.to_lowercase(), ty.clone());
        }
        types
    }

    /// Classify a file name or path; `None` means unknown
    pub fn classify(&self, name: &str) -> Option<String> {
        let ext = extension(name)?;
        self.table
            .get(ext)
            .or_else(|| self.table.get(&ext.to_lowercase()))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Extension of the last path segment, without the dot
fn extension(name: &str) -> Option<&str> {
    let base = name.rsplit('/').next().unwrap_or(name);
    let (stem, ext) = base.rsplit_once('.')?;
    if ext.is_empty() || stem.is_empty() {
        return None;
    }
    Some(ext)
}
