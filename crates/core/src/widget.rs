//! Widget type and size vocabularies (PRD-02).
//!
//! String values match the wire format used by the profile editor and the
//! `widgets` table. The `core` crate contains no database dependencies; the
//! repository layer converts stored strings through `from_str_value`.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Widget types
// ---------------------------------------------------------------------------

/// Valid widget type strings (stored in DB).
pub const TYPE_TEXT: &str = "TEXT";
pub const TYPE_LINK: &str = "LINK";
pub const TYPE_IMAGE: &str = "IMAGE";
pub const TYPE_EMBED: &str = "EMBED";
pub const TYPE_SOCIAL: &str = "SOCIAL";
pub const TYPE_LIST: &str = "LIST";
pub const TYPE_GITHUB: &str = "GITHUB";

/// All valid widget type strings.
pub const VALID_WIDGET_TYPES: &[&str] = &[
    TYPE_TEXT,
    TYPE_LINK,
    TYPE_IMAGE,
    TYPE_EMBED,
    TYPE_SOCIAL,
    TYPE_LIST,
    TYPE_GITHUB,
];

/// Discriminant naming which content variant a widget carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WidgetType {
    Text,
    Link,
    Image,
    Embed,
    Social,
    List,
    Github,
}

impl WidgetType {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            TYPE_TEXT => Ok(Self::Text),
            TYPE_LINK => Ok(Self::Link),
            TYPE_IMAGE => Ok(Self::Image),
            TYPE_EMBED => Ok(Self::Embed),
            TYPE_SOCIAL => Ok(Self::Social),
            TYPE_LIST => Ok(Self::List),
            TYPE_GITHUB => Ok(Self::Github),
            _ => Err(format!(
                "Invalid widget type '{s}'. Must be one of: {}",
                VALID_WIDGET_TYPES.join(", ")
            )),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => TYPE_TEXT,
            Self::Link => TYPE_LINK,
            Self::Image => TYPE_IMAGE,
            Self::Embed => TYPE_EMBED,
            Self::Social => TYPE_SOCIAL,
            Self::List => TYPE_LIST,
            Self::Github => TYPE_GITHUB,
        }
    }
}

// ---------------------------------------------------------------------------
// Widget sizes
// ---------------------------------------------------------------------------

/// Valid size strings (stored in DB).
pub const SIZE_SMALL_SQUARE: &str = "SMALL_SQUARE";
pub const SIZE_LARGE_SQUARE: &str = "LARGE_SQUARE";
pub const SIZE_WIDE: &str = "WIDE";
pub const SIZE_LONG: &str = "LONG";

/// Legacy size strings. Still present in rows written before the
/// square/wide/long rework and still accepted on input.
pub const SIZE_SMALL: &str = "SMALL";
pub const SIZE_MEDIUM: &str = "MEDIUM";
pub const SIZE_LARGE: &str = "LARGE";
pub const SIZE_EXTRA_LARGE: &str = "EXTRA_LARGE";

/// All valid size strings, current and legacy.
pub const VALID_WIDGET_SIZES: &[&str] = &[
    SIZE_SMALL_SQUARE,
    SIZE_LARGE_SQUARE,
    SIZE_WIDE,
    SIZE_LONG,
    SIZE_SMALL,
    SIZE_MEDIUM,
    SIZE_LARGE,
    SIZE_EXTRA_LARGE,
];

/// Grid size category for a widget.
///
/// Legacy variants have no dedicated footprint; both dimension tables map
/// them to a 1x1 cell (see [`crate::layout`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WidgetSize {
    SmallSquare,
    LargeSquare,
    Wide,
    Long,
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl WidgetSize {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            SIZE_SMALL_SQUARE => Ok(Self::SmallSquare),
            SIZE_LARGE_SQUARE => Ok(Self::LargeSquare),
            SIZE_WIDE => Ok(Self::Wide),
            SIZE_LONG => Ok(Self::Long),
            SIZE_SMALL => Ok(Self::Small),
            SIZE_MEDIUM => Ok(Self::Medium),
            SIZE_LARGE => Ok(Self::Large),
            SIZE_EXTRA_LARGE => Ok(Self::ExtraLarge),
            _ => Err(format!(
                "Invalid widget size '{s}'. Must be one of: {}",
                VALID_WIDGET_SIZES.join(", ")
            )),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SmallSquare => SIZE_SMALL_SQUARE,
            Self::LargeSquare => SIZE_LARGE_SQUARE,
            Self::Wide => SIZE_WIDE,
            Self::Long => SIZE_LONG,
            Self::Small => SIZE_SMALL,
            Self::Medium => SIZE_MEDIUM,
            Self::Large => SIZE_LARGE,
            Self::ExtraLarge => SIZE_EXTRA_LARGE,
        }
    }

    /// True for pre-rework size spellings.
    pub fn is_legacy(&self) -> bool {
        matches!(
            self,
            Self::Small | Self::Medium | Self::Large | Self::ExtraLarge
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
