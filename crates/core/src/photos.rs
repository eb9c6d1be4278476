//! Photo file-type helpers used by the directory scan.

/// File extensions (lowercase, without dot) recognized as importable images.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "heic"];

/// Whether a file name looks like an importable image.
///
/// Hidden files (leading dot) are skipped regardless of extension.
pub fn is_image_file(file_name: &str) -> bool {
    if file_name.starts_with('.') {
        return false;
    }
    match extension_of(file_name) {
        Some(ext) => IMAGE_EXTENSIONS.contains(&ext.as_str()),
        None => false,
    }
}

/// MIME type derived from a file name's extension.
pub fn mime_type_for(file_name: &str) -> &'static str {
    match extension_of(file_name).as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("heic") => "image/heic",
        _ => "application/octet-stream",
    }
}

fn extension_of(file_name: &str) -> Option<String> {
    let (_, ext) = file_name.rsplit_once('.')?;
    if ext.is_empty() {
        None
    } else {
        Some(ext.to_ascii_lowercase())
    }
}
