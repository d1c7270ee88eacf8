//! Social platform registry (PRD-09).
//!
//! The canonical list of platforms a profile can link, with the URL template
//! each one uses. Platform strings are stored uppercase in the
//! `social_links` table and on the wire.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Platform strings
// ---------------------------------------------------------------------------

/// Valid platform strings (stored in DB).
pub const PLATFORM_INSTAGRAM: &str = "INSTAGRAM";
pub const PLATFORM_TWITTER: &str = "TWITTER";
pub const PLATFORM_TIKTOK: &str = "TIKTOK";
pub const PLATFORM_YOUTUBE: &str = "YOUTUBE";
pub const PLATFORM_LINKEDIN: &str = "LINKEDIN";
pub const PLATFORM_GITHUB: &str = "GITHUB";
pub const PLATFORM_FACEBOOK: &str = "FACEBOOK";
pub const PLATFORM_TWITCH: &str = "TWITCH";
pub const PLATFORM_REDDIT: &str = "REDDIT";
pub const PLATFORM_SOUNDCLOUD: &str = "SOUNDCLOUD";
pub const PLATFORM_SPOTIFY: &str = "SPOTIFY";
pub const PLATFORM_VK: &str = "VK";
pub const PLATFORM_DRIBBBLE: &str = "DRIBBBLE";

/// All valid platform strings.
pub const VALID_PLATFORMS: &[&str] = &[
    PLATFORM_INSTAGRAM,
    PLATFORM_TWITTER,
    PLATFORM_TIKTOK,
    PLATFORM_YOUTUBE,
    PLATFORM_LINKEDIN,
    PLATFORM_GITHUB,
    PLATFORM_FACEBOOK,
    PLATFORM_TWITCH,
    PLATFORM_REDDIT,
    PLATFORM_SOUNDCLOUD,
    PLATFORM_SPOTIFY,
    PLATFORM_VK,
    PLATFORM_DRIBBBLE,
];

// ---------------------------------------------------------------------------
// Platform enum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Platform {
    Instagram,
    Twitter,
    Tiktok,
    Youtube,
    Linkedin,
    Github,
    Facebook,
    Twitch,
    Reddit,
    Soundcloud,
    Spotify,
    Vk,
    Dribbble,
}

impl Platform {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            PLATFORM_INSTAGRAM => Ok(Self::Instagram),
            PLATFORM_TWITTER => Ok(Self::Twitter),
            PLATFORM_TIKTOK => Ok(Self::Tiktok),
            PLATFORM_YOUTUBE => Ok(Self::Youtube),
            PLATFORM_LINKEDIN => Ok(Self::Linkedin),
            PLATFORM_GITHUB => Ok(Self::Github),
            PLATFORM_FACEBOOK => Ok(Self::Facebook),
            PLATFORM_TWITCH => Ok(Self::Twitch),
            PLATFORM_REDDIT => Ok(Self::Reddit),
            PLATFORM_SOUNDCLOUD => Ok(Self::Soundcloud),
            PLATFORM_SPOTIFY => Ok(Self::Spotify),
            PLATFORM_VK => Ok(Self::Vk),
            PLATFORM_DRIBBBLE => Ok(Self::Dribbble),
            _ => Err(format!(
                "Invalid platform '{s}'. Must be one of: {}",
                VALID_PLATFORMS.join(", ")
            )),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instagram => PLATFORM_INSTAGRAM,
            Self::Twitter => PLATFORM_TWITTER,
            Self::Tiktok => PLATFORM_TIKTOK,
            Self::Youtube => PLATFORM_YOUTUBE,
            Self::Linkedin => PLATFORM_LINKEDIN,
            Self::Github => PLATFORM_GITHUB,
            Self::Facebook => PLATFORM_FACEBOOK,
            Self::Twitch => PLATFORM_TWITCH,
            Self::Reddit => PLATFORM_REDDIT,
            Self::Soundcloud => PLATFORM_SOUNDCLOUD,
            Self::Spotify => PLATFORM_SPOTIFY,
            Self::Vk => PLATFORM_VK,
            Self::Dribbble => PLATFORM_DRIBBBLE,
        }
    }

    /// Human-readable platform name for display.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::Twitter => "Twitter",
            Self::Tiktok => "TikTok",
            Self::Youtube => "YouTube",
            Self::Linkedin => "LinkedIn",
            Self::Github => "GitHub",
            Self::Facebook => "Facebook",
            Self::Twitch => "Twitch",
            Self::Reddit => "Reddit",
            Self::Soundcloud => "SoundCloud",
            Self::Spotify => "Spotify",
            Self::Vk => "VK",
            Self::Dribbble => "Dribbble",
        }
    }

    /// Profile URL template with a `{username}` placeholder.
    pub fn url_template(&self) -> &'static str {
        match self {
            Self::Instagram => "https://instagram.com/{username}",
            Self::Twitter => "https://twitter.com/{username}",
            Self::Tiktok => "https://tiktok.com/@{username}",
            Self::Youtube => "https://youtube.com/@{username}",
            Self::Linkedin => "https://linkedin.com/in/{username}",
            Self::Github => "https://github.com/{username}",
            Self::Facebook => "https://facebook.com/{username}",
            Self::Twitch => "https://twitch.tv/{username}",
            Self::Reddit => "https://reddit.com/user/{username}",
            Self::Soundcloud => "https://soundcloud.com/{username}",
            Self::Spotify => "https://open.spotify.com/user/{username}",
            Self::Vk => "https://vk.com/{username}",
            Self::Dribbble => "https://dribbble.com/{username}",
        }
    }

    /// Build the full profile URL for a username.
    pub fn profile_url(&self, username: &str) -> String {
        self.url_template().replace("{username}", username)
    }
}

/// Last path segment of a stored profile URL. This is how the GitHub widget
/// recovers the username ("https://github.com/jane" -> "jane").
pub fn username_from_url(url: &str) -> Option<&str> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
