//! Upload constraints and best-effort text extraction.
//!
//! Only plain-text files are actually extracted; every other accepted
//! format stores a fixed placeholder sentence instead of real content, and
//! the generation prompt carries that placeholder verbatim.

/// Upload size cap advertised by the UI.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "txt"];

/// Lowercased extension of an uploaded file name, if any.
pub fn file_extension(file_name: &str) -> Option<String> {
    let ext = file_name.rsplit_once('.')?.1;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Whether the upload is one of the advertised formats.
pub fn is_allowed_extension(ext: &str) -> bool {
    ALLOWED_EXTENSIONS.contains(&ext)
}

/// Extracts resume text from an upload.
pub fn extract_text(file_name: &str, content_type: Option<&str>, data: &[u8]) -> String {
    let is_plain_text = content_type == Some("text/plain")
        || file_extension(file_name).as_deref() == Some("txt");

    if is_plain_text {
        String::from_utf8_lossy(data).into_owned()
    } else {
        format!(
            "Resume file: {file_name}. Content extraction from PDF/DOCX requires additional processing."
        )
    }
}
