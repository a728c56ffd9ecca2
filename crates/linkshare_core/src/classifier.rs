//! crates/linkshare_core/src/classifier.rs
//!
//! Maps a URL's host to a platform name, a badge and a generic title.
//! Everything here is a pure function of the input string.

use regex::Regex;
use std::sync::LazyLock;

static SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").expect("scheme pattern is valid"));

static HOST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)://(?:www\.)?([^/]+)").expect("host pattern is valid"));

struct KnownPlatform {
    domain: &'static str,
    name: &'static str,
    title: Option<&'static str>,
    badge: Option<PlatformBadge>,
}

const fn known(
    domain: &'static str,
    name: &'static str,
    title: Option<&'static str>,
    badge: Option<(&'static str, &'static str)>,
) -> KnownPlatform {
    let badge = match badge {
        Some((icon, color)) => Some(PlatformBadge { icon, color }),
        None => None,
    };
    KnownPlatform { domain, name, title, badge }
}

// `youtu.be` has no dedicated title or badge and falls through to the defaults.
const PLATFORMS: [KnownPlatform; 7] = [
    known("instagram.com", "Instagram", Some("Instagram Video"), Some(("instagram", "#E1306C"))),
    known("youtube.com", "YouTube", Some("YouTube Video"), Some(("youtube", "#FF0000"))),
    known("youtu.be", "YouTube", None, None),
    known("facebook.com", "Facebook", Some("Facebook Video"), Some(("facebook", "#1877F2"))),
    known("twitter.com", "Twitter", Some("Twitter Video"), Some(("twitter", "#1DA1F2"))),
    known("tiktok.com", "TikTok", Some("TikTok Video"), Some(("tiktok", "#000"))),
    known("vimeo.com", "Vimeo", Some("Vimeo Video"), Some(("vimeo", "#1AB7EA"))),
];

pub const FALLBACK_TITLE: &str = "Shared Video";
const FALLBACK_BADGE: PlatformBadge = PlatformBadge { icon: "link", color: "#8A8A8F" };

/// The result of classifying a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub domain: String,
    pub platform: String,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformBadge {
    pub icon: &'static str,
    pub color: &'static str,
}

/// True when the URL starts with `http://` or `https://`.
pub fn is_supported_url(url: &str) -> bool {
    SCHEME.is_match(url)
}

/// Extracts the normalized host: the text between `://` and the next `/`,
/// lowercased and without a leading `www.`. Empty when there is no `://`.
pub fn extract_domain(url: &str) -> String {
    let host = HOST
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_lowercase())
        .unwrap_or_default();
    match host.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => host,
    }
}

fn lookup(domain: &str) -> Option<&'static KnownPlatform> {
    PLATFORMS.iter().find(|p| p.domain == domain)
}

/// Display name of the platform. Unknown domains are shown as themselves.
pub fn platform_name(domain: &str) -> String {
    lookup(domain)
        .map(|p| p.name.to_string())
        .unwrap_or_else(|| domain.to_string())
}

pub fn title_for(domain: &str) -> String {
    lookup(domain)
        .and_then(|p| p.title)
        .unwrap_or(FALLBACK_TITLE)
        .to_string()
}

pub fn platform_badge(domain: &str) -> PlatformBadge {
    lookup(domain)
        .and_then(|p| p.badge)
        .unwrap_or(FALLBACK_BADGE)
}

pub fn classify(url: &str) -> Classification {
    let domain = extract_domain(url);
    Classification {
        platform: platform_name(&domain),
        title: title_for(&domain),
        domain,
    }
}
