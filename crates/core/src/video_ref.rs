//! Video reference classification.
//!
//! A lesson's video is stored as an opaque string that takes one of three
//! shapes: a hosted-storage object URL (public or pre-signed), a raw path
//! inside the default bucket, or an external URL that is played as-is.
//! [`classify`] is the single place that decides which one a string is.

use std::sync::LazyLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Bucket that raw storage paths are scoped to unless configured otherwise.
pub const DEFAULT_VIDEO_BUCKET: &str = "videos";

/// Lifetime of URLs handed to the client for native playback (1 hour).
pub const DIRECT_URL_TTL_SECS: u64 = 3600;

/// Lifetime of URLs minted by the proxy for its own upstream fetch.
pub const PROXY_URL_TTL_SECS: u64 = 60;

/// Matches `.../storage/v1/object/(public|sign)/<bucket>/<path>`.
///
/// Group 2 is the bucket, group 3 the object path (may contain `/`). A query
/// string or fragment (e.g. the `?token=` of a signed URL) is not part of the
/// path.
pub const STORAGE_URL_PATTERN: &str = r"/storage/v1/object/(public|sign)/([^/?#]+)/([^?#]+)";

static STORAGE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(STORAGE_URL_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The classified form of a lesson's video reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoReference {
    /// A hosted-storage object URL with its bucket and path extracted.
    StorageUrl { bucket: String, path: String },
    /// A raw object path in the default video bucket.
    StoragePath { path: String },
    /// Anything else starting with `http`; never re-signed.
    External { url: String },
}

impl VideoReference {
    /// Short label used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::StorageUrl { .. } => "storage_url",
            Self::StoragePath { .. } => "storage_path",
            Self::External { .. } => "external",
        }
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classify a non-empty reference string.
///
/// Callers must have already checked that a reference exists; the empty
/// string is not a meaningful input.
pub fn classify(reference: &str) -> VideoReference {
    if let Some(caps) = STORAGE_URL_RE.captures(reference) {
        return VideoReference::StorageUrl {
            bucket: caps[2].to_string(),
            path: caps[3].to_string(),
        };
    }

    if reference.starts_with("http") {
        return VideoReference::External {
            url: reference.to_string(),
        };
    }

    VideoReference::StoragePath {
        path: reference.to_string(),
    }
}

/// The object path to persist on a video asset row for an authored URL.
///
/// Storage URLs are reduced to their object path; anything else is stored
/// unchanged.
pub fn storage_object_path(reference: &str) -> String {
    match classify(reference) {
        VideoReference::StorageUrl { path, .. } => path,
        _ => reference.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn public_storage_url_extracts_bucket_and_path() {
        let r = classify("https://project.supabase.co/storage/v1/object/public/videos/intro.mp4");
        assert_eq!(
            r,
            VideoReference::StorageUrl {
                bucket: "videos".into(),
                path: "intro.mp4".into(),
            }
        );
    }

    #[test]
    fn signed_storage_url_drops_token_query() {
        let r = classify(
            "https://project.supabase.co/storage/v1/object/sign/course-media/week1/lesson%202.mp4?token=abc.def",
        );
        assert_eq!(
            r,
            VideoReference::StorageUrl {
                bucket: "course-media".into(),
                path: "week1/lesson%202.mp4".into(),
            }
        );
    }

    #[test]
    fn nested_path_keeps_slashes() {
        let r = classify("http://localhost:54321/storage/v1/object/public/videos/a/b/c.webm");
        assert_matches!(r, VideoReference::StorageUrl { ref bucket, ref path }
            if bucket == "videos" && path == "a/b/c.webm");
    }

    #[test]
    fn http_url_without_storage_shape_is_external() {
        let url = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
        assert_eq!(classify(url), VideoReference::External { url: url.into() });
    }

    #[test]
    fn storage_url_with_unknown_mode_is_external() {
        let url = "https://project.supabase.co/storage/v1/object/authenticated/videos/a.mp4";
        assert_matches!(classify(url), VideoReference::External { .. });
    }

    #[test]
    fn bare_path_is_storage_path() {
        assert_eq!(
            classify("lesson1/video.mp4"),
            VideoReference::StoragePath {
                path: "lesson1/video.mp4".into()
            }
        );
    }

    #[test]
    fn uppercase_scheme_is_not_http_prefixed() {
        // The prefix test is case-sensitive.
        assert_matches!(classify("HTTPS://cdn.example.com/v.mp4"), VideoReference::StoragePath { .. });
    }

    #[test]
    fn storage_object_path_reduces_storage_urls() {
        assert_eq!(
            storage_object_path("https://p.supabase.co/storage/v1/object/public/videos/x/y.mp4"),
            "x/y.mp4"
        );
        assert_eq!(storage_object_path("x/y.mp4"), "x/y.mp4");
        assert_eq!(
            storage_object_path("https://vimeo.com/42"),
            "https://vimeo.com/42"
        );
    }

    #[test]
    fn classification_is_deterministic() {
        let inputs = [
            "https://p.supabase.co/storage/v1/object/public/videos/intro.mp4",
            "https://example.com/v.mp4",
            "folder/v.mp4",
        ];
        for input in inputs {
            assert_eq!(classify(input), classify(input));
        }
    }
}
