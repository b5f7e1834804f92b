//! Avatar retrieval and inline encoding.

use std::io::Read;
use std::path::Path;

use anyhow::{Context as _, anyhow};
use base64::{Engine, engine::general_purpose::STANDARD};
use http::Request;
use notify_cardkit::AvatarSource;
use ureq::Agent;

/// Fetches avatar images over HTTP and inlines them as `data:` URIs.
///
/// One blocking GET per reference, transport defaults only. The payload is
/// buffered whole before encoding; no size cap is enforced.
pub struct HttpAvatarSource {
    agent: Agent,
}

impl HttpAvatarSource {
    pub fn new() -> Self {
        Self {
            agent: ureq::agent(),
        }
    }
}

impl AvatarSource for HttpAvatarSource {
    fn data_uri(&self, url: &str) -> anyhow::Result<String> {
        let request = Request::builder()
            .method("GET")
            .uri(url)
            .body(Vec::new())
            .context("failed to build avatar request")?;
        // The default agent maps non-2xx statuses to errors, so a missing
        // avatar surfaces here the same way a transport failure does.
        let response = self
            .agent
            .run(request)
            .map_err(|err| anyhow!("failed to download avatar: {err}"))?;

        let header_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(ToOwned::to_owned);

        let mut data = Vec::new();
        response
            .into_body()
            .into_reader()
            .read_to_end(&mut data)
            .context("failed to read avatar data")?;

        let content_type = header_type
            .or_else(|| mime_for_extension(url).map(ToOwned::to_owned))
            .unwrap_or_else(|| sniff_mime(&data).to_string());

        Ok(format!("data:{};base64,{}", content_type, STANDARD.encode(&data)))
    }
}

/// MIME type for the URL's file extension, query and fragment stripped.
fn mime_for_extension(url: &str) -> Option<&'static str> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let ext = Path::new(path).extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "bmp" => Some("image/bmp"),
        "ico" => Some("image/x-icon"),
        _ => None,
    }
}

/// Last-resort sniffing of the payload's leading magic bytes.
fn sniff_mime(data: &[u8]) -> &'static str {
    if data.starts_with(&[0x89, b'P', b'N', b'G']) {
        "image/png"
    } else if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if data.starts_with(b"GIF8") {
        "image/gif"
    } else if data.len() >= 12 && &data[..4] == b"RIFF" && &data[8..12] == b"WEBP" {
        "image/webp"
    } else if data.starts_with(b"<svg") || data.starts_with(b"<?xml") {
        "image/svg+xml"
    } else {
        "application/octet-stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_mapping_ignores_query_and_case() {
        assert_eq!(
            mime_for_extension("https://forge.example.com/u/1/avatar.PNG?s=64"),
            Some("image/png")
        );
        assert_eq!(
            mime_for_extension("https://forge.example.com/u/1/avatar.jpeg#x"),
            Some("image/jpeg")
        );
        assert_eq!(mime_for_extension("https://forge.example.com/u/1/avatar"), None);
        assert_eq!(mime_for_extension("https://forge.example.com/u/1/avatar.tiff"), None);
    }

    #[test]
    fn sniffing_recognizes_common_image_magics() {
        assert_eq!(sniff_mime(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A]), "image/png");
        assert_eq!(sniff_mime(&[0xFF, 0xD8, 0xFF, 0xE0]), "image/jpeg");
        assert_eq!(sniff_mime(b"GIF89a...."), "image/gif");
        assert_eq!(sniff_mime(b"RIFF\x00\x00\x00\x00WEBPVP8 "), "image/webp");
        assert_eq!(sniff_mime(b"plain text"), "application/octet-stream");
        assert_eq!(sniff_mime(&[]), "application/octet-stream");
    }
}
