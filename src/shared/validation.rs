use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for Instagram post/reel/story URLs
    /// Captures the content code after /p/, /reel/ or /stories/
    /// - Valid: "https://www.instagram.com/p/ABC123xyz/", "instagram.com/reel/xyz_-1"
    /// - Invalid: "https://instagram.com/notapost", "https://instagram.com/username"
    pub static ref INSTAGRAM_URL_REGEX: Regex =
        Regex::new(r"(?:https?://)?(?:www\.)?instagram\.com/(?:p|reel|stories)/([A-Za-z0-9_-]+)")
            .unwrap();

    /// Regex for Twitter/X status URLs
    /// Captures the numeric tweet id after /status/
    /// - Valid: "https://x.com/someuser/status/1234567890", "twitter.com/a/status/1"
    /// - Invalid: "https://x.com/someuser", "https://x.com/status/abc"
    pub static ref TWITTER_URL_REGEX: Regex =
        Regex::new(r"(?:https?://)?(?:www\.)?(?:twitter\.com|x\.com)/\w+/status/(\d+)").unwrap();

    /// Regex for TikTok video URLs
    /// Captures the numeric video id after /@user/video/
    /// - Valid: "https://www.tiktok.com/@user.name/video/7123456789"
    /// - Invalid: "https://tiktok.com/video/7123456789", "tiktok.com/@user"
    pub static ref TIKTOK_URL_REGEX: Regex =
        Regex::new(r"(?:https?://)?(?:www\.)?tiktok\.com/@[\w.-]+/video/(\d+)").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instagram_regex_valid() {
        assert!(INSTAGRAM_URL_REGEX.is_match("https://www.instagram.com/p/ABC123xyz/"));
        assert!(INSTAGRAM_URL_REGEX.is_match("https://instagram.com/reel/xyz_-1"));
        assert!(INSTAGRAM_URL_REGEX.is_match("instagram.com/stories/some_story"));
        assert!(INSTAGRAM_URL_REGEX.is_match("http://www.instagram.com/p/a"));
    }

    #[test]
    fn test_instagram_regex_invalid() {
        assert!(!INSTAGRAM_URL_REGEX.is_match("https://instagram.com/notapost")); // no /p/ segment
        assert!(!INSTAGRAM_URL_REGEX.is_match("https://instagram.com/username")); // profile link
        assert!(!INSTAGRAM_URL_REGEX.is_match("https://example.com/p/ABC123")); // wrong host
        assert!(!INSTAGRAM_URL_REGEX.is_match(""));
    }

    #[test]
    fn test_instagram_regex_captures_content_code() {
        let caps = INSTAGRAM_URL_REGEX
            .captures("https://www.instagram.com/p/ABC123xyz/")
            .unwrap();
        assert_eq!(&caps[1], "ABC123xyz");
    }

    #[test]
    fn test_twitter_regex_valid() {
        assert!(TWITTER_URL_REGEX.is_match("https://x.com/someuser/status/1234567890"));
        assert!(TWITTER_URL_REGEX.is_match("https://twitter.com/someuser/status/1234567890"));
        assert!(TWITTER_URL_REGEX.is_match("www.x.com/a/status/1"));
    }

    #[test]
    fn test_twitter_regex_invalid() {
        assert!(!TWITTER_URL_REGEX.is_match("https://x.com/someuser")); // no status path
        assert!(!TWITTER_URL_REGEX.is_match("https://x.com/someuser/status/abc")); // non-numeric id
        assert!(!TWITTER_URL_REGEX.is_match(""));
    }

    #[test]
    fn test_twitter_regex_captures_tweet_id() {
        let caps = TWITTER_URL_REGEX
            .captures("https://x.com/someuser/status/1234567890")
            .unwrap();
        assert_eq!(&caps[1], "1234567890");
    }

    #[test]
    fn test_tiktok_regex_valid() {
        assert!(TIKTOK_URL_REGEX.is_match("https://www.tiktok.com/@user.name/video/7123456789"));
        assert!(TIKTOK_URL_REGEX.is_match("tiktok.com/@user-name/video/1"));
    }

    #[test]
    fn test_tiktok_regex_invalid() {
        assert!(!TIKTOK_URL_REGEX.is_match("https://tiktok.com/video/7123456789")); // no @user
        assert!(!TIKTOK_URL_REGEX.is_match("tiktok.com/@user")); // no video path
        assert!(!TIKTOK_URL_REGEX.is_match(""));
    }

    #[test]
    fn test_tiktok_regex_captures_video_id() {
        let caps = TIKTOK_URL_REGEX
            .captures("https://www.tiktok.com/@user.name/video/7123456789")
            .unwrap();
        assert_eq!(&caps[1], "7123456789");
    }
}
