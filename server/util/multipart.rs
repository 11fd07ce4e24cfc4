//! Just enough multipart/form-data parsing for a single file upload.
//!
//! The classify form carries exactly one part of interest (`image`, with a
//! filename), so this scans raw bytes rather than pulling in a full
//! multipart crate.

/// Returns the index of the first occurrence of `needle` in `haystack`.
fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Extracts the boundary token from a Content-Type header value like
/// `multipart/form-data; boundary=----WebKitFormBoundaryXXX`.
pub fn extract_boundary(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .map(|s| s.trim())
        .find(|s| s.starts_with("boundary="))
        .map(|s| s["boundary=".len()..].trim_matches('"').to_owned())
}

/// Extracts the raw bytes of the file part whose Content-Disposition names
/// `field_name`. Returns `None` when the field is absent, is not a file
/// upload, or the body does not parse.
pub fn extract_file_part(body: &[u8], boundary: &str, field_name: &str) -> Option<Vec<u8>> {
    let delimiter = format!("--{}", boundary);
    let name_attr = format!("name=\"{}\"", field_name);

    let mut rest = body;
    loop {
        let pos = find_subsequence(rest, delimiter.as_bytes())?;
        rest = &rest[pos + delimiter.len()..];

        let sep = b"\r\n\r\n";
        let Some(sep_pos) = find_subsequence(rest, sep) else {
            return None;
        };
        // Headers of this part run up to the blank line; its data runs to
        // the next boundary delimiter.
        let headers = String::from_utf8_lossy(&rest[..sep_pos]);
        let data = &rest[sep_pos + sep.len()..];

        if headers.contains(&name_attr) && headers.contains("filename=") {
            let end = find_subsequence(data, delimiter.as_bytes()).unwrap_or(data.len());
            let raw = &data[..end];
            let trimmed = raw.strip_suffix(b"\r\n").unwrap_or(raw);
            return Some(trimmed.to_vec());
        }
    }
}
