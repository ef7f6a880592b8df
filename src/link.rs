//! Video link parsing
//!
//! Extracts the video identifier from the link shapes the playlist accepts:
//! - `https://www.youtube.com/watch?v=VIDEO_ID`
//! - `https://youtu.be/VIDEO_ID`
//! - `https://www.youtube.com/embed/VIDEO_ID`
//!
//! The identifier ends at the first `#`, `&` or `?`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Extraction rules, tried in order
static RULES: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"watch\?v=([^#&?]*)").expect("watch link pattern compiles"),
        Regex::new(r"youtu\.be/([^#&?]*)").expect("short link pattern compiles"),
        Regex::new(r"embed/([^#&?]*)").expect("embed link pattern compiles"),
    ]
});

/// Extract the video identifier from a link
///
/// Returns `None` for empty input, foreign links, and links whose
/// identifier slot is empty (e.g. `watch?v=`).
pub fn parse_video_id(link: &str) -> Option<String> {
    let link = link.trim();
    if link.is_empty() {
        return None;
    }

    RULES.iter().find_map(|rule| {
        rule.captures(link)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|id| !id.is_empty())
            .map(str::to_string)
    })
}

/// Whether the link yields a video identifier
pub fn is_video_link(link: &str) -> bool {
    parse_video_id(link).is_some()
}
