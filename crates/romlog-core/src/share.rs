//! Share message construction
//!
//! Formats the clipboard message for a ROM card the way the site publishes
//! it: a descriptive line naming build, device, and author, plus a
//! read-more link anchored at the card id.

/// Fallback when a card has no usable author credit
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

/// Normalize an author credit for the share line
///
/// Cards render their credit as written ("by somedev"), so a leading
/// case-insensitive `"by "` is stripped before the text is embedded into a
/// sentence that already says "by". Credits that are empty after cleanup
/// fall back to [`UNKNOWN_AUTHOR`].
pub fn clean_author(raw: &str) -> String {
    let trimmed = raw.trim();
    let cleaned = trimmed
        .get(..3)
        .filter(|prefix| prefix.eq_ignore_ascii_case("by "))
        .map_or(trimmed, |_| trimmed[3..].trim());
    if cleaned.is_empty() {
        UNKNOWN_AUTHOR.to_string()
    } else {
        cleaned.to_string()
    }
}

/// Descriptive share line for a card
pub fn share_text(rom: &str, device: &str, author: &str) -> String {
    format!("Build Changelog of {rom} for {device} by {author}")
}

/// Deep link to a card: the site URL with the card id as fragment
pub fn share_url(base_url: &str, rom_id: &str) -> String {
    format!("{base_url}#{rom_id}")
}

/// Full clipboard message: share line plus read-more link
pub fn share_message(text: &str, url: &str) -> String {
    format!("{text}\n\nRead more: {url}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_author_strips_by_prefix() {
        assert_eq!(clean_author("by somedev"), "somedev");
        assert_eq!(clean_author("By somedev"), "somedev");
        assert_eq!(clean_author("BY somedev"), "somedev");
        assert_eq!(clean_author("  by   somedev  "), "somedev");
    }

    #[test]
    fn test_clean_author_keeps_plain_names() {
        assert_eq!(clean_author("somedev"), "somedev");
        // "by" must be a standalone prefix, not part of the name
        assert_eq!(clean_author("byron"), "byron");
    }

    #[test]
    fn test_clean_author_empty_falls_back() {
        assert_eq!(clean_author(""), UNKNOWN_AUTHOR);
        assert_eq!(clean_author("   "), UNKNOWN_AUTHOR);
        assert_eq!(clean_author("by "), UNKNOWN_AUTHOR);
    }

    #[test]
    fn test_clean_author_non_ascii_start() {
        assert_eq!(clean_author("électron"), "électron");
    }

    #[test]
    fn test_share_message_format() {
        let text = share_text("crDroid 11", "Pixel 7", "somedev");
        assert_eq!(text, "Build Changelog of crDroid 11 for Pixel 7 by somedev");

        let url = share_url("https://builds.example.net/", "pixel-7-crdroid-11");
        assert_eq!(url, "https://builds.example.net/#pixel-7-crdroid-11");

        let message = share_message(&text, &url);
        assert_eq!(
            message,
            "Build Changelog of crDroid 11 for Pixel 7 by somedev\n\n\
             Read more: https://builds.example.net/#pixel-7-crdroid-11"
        );
    }
}
