//! MIME type lookups
//!
//! Static extension <-> MIME table. When several extensions share a MIME
//! type the first listed one is the canonical extension.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// `(extension, mime type)` pairs, canonical extension first per type
pub static MIME_TABLE: &[(&str, &str)] = &[
    // text
    ("txt", "text/plain"),
    ("text", "text/plain"),
    ("log", "text/plain"),
    ("html", "text/html"),
    ("htm", "text/html"),
    ("css", "text/css"),
    ("csv", "text/csv"),
    ("md", "text/markdown"),
    ("markdown", "text/markdown"),
    ("xml", "application/xml"),
    ("ics", "text/calendar"),
    ("vtt", "text/vtt"),
    // code and data
    ("js", "text/javascript"),
    ("mjs", "text/javascript"),
    ("json", "application/json"),
    ("map", "application/json"),
    ("jsonld", "application/ld+json"),
    ("yaml", "application/yaml"),
    ("yml", "application/yaml"),
    ("toml", "application/toml"),
    ("wasm", "application/wasm"),
    ("pdf", "application/pdf"),
    ("rtf", "application/rtf"),
    ("bin", "application/octet-stream"),
    ("exe", "application/octet-stream"),
    // archives
    ("zip", "application/zip"),
    ("gz", "application/gzip"),
    ("tar", "application/x-tar"),
    ("7z", "application/x-7z-compressed"),
    ("rar", "application/vnd.rar"),
    ("bz2", "application/x-bzip2"),
    // office
    ("doc", "application/msword"),
    ("docx", "application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
    ("xls", "application/vnd.ms-excel"),
    ("xlsx", "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
    ("ppt", "application/vnd.ms-powerpoint"),
    ("pptx", "application/vnd.openxmlformats-officedocument.presentationml.presentation"),
    ("odt", "application/vnd.oasis.opendocument.text"),
    ("epub", "application/epub+zip"),
    // images
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("avif", "image/avif"),
    ("svg", "image/svg+xml"),
    ("ico", "image/vnd.microsoft.icon"),
    ("bmp", "image/bmp"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    // audio
    ("mp3", "audio/mpeg"),
    ("wav", "audio/wav"),
    ("ogg", "audio/ogg"),
    ("oga", "audio/ogg"),
    ("flac", "audio/flac"),
    ("aac", "audio/aac"),
    ("weba", "audio/webm"),
    ("mid", "audio/midi"),
    ("midi", "audio/midi"),
    // video
    ("mp4", "video/mp4"),
    ("webm", "video/webm"),
    ("ogv", "video/ogg"),
    ("mpeg", "video/mpeg"),
    ("avi", "video/x-msvideo"),
    ("mov", "video/quicktime"),
    // fonts
    ("woff", "font/woff"),
    ("woff2", "font/woff2"),
    ("ttf", "font/ttf"),
    ("otf", "font/otf"),
];

lazy_static! {
    static ref EXTENSION_TO_MIME: HashMap<&'static str, &'static str> =
        MIME_TABLE.iter().copied().collect();

    static ref MIME_TO_EXTENSION: HashMap<&'static str, &'static str> = {
        let mut map = HashMap::new();
        for &(extension, mime) in MIME_TABLE {
            map.entry(mime).or_insert(extension);
        }
        map
    };
}

/// MIME type for a file name, path or bare extension (`"a/b.PNG"`, `".png"`, `"png"`)
pub fn get_mime_type(file_name_or_extension: &str) -> Option<&'static str> {
    let extension = file_name_or_extension
        .rsplit_once('.')
        .map_or(file_name_or_extension, |(_, ext)| ext)
        .to_ascii_lowercase();
    EXTENSION_TO_MIME.get(extension.as_str()).copied()
}

/// Canonical extension (without dot) for a MIME type; parameters such as
/// `; charset=utf-8` are ignored
pub fn get_extension(mime_type: &str) -> Option<&'static str> {
    let essence = mime_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    MIME_TO_EXTENSION.get(essence.as_str()).copied()
}
