//! Widget content variants and boundary validation (PRD-03).
//!
//! A widget row stores its content as one JSON value whose shape must match
//! the row's `widget_type`. [`WidgetContent::from_parts`] is the single place
//! that invariant is enforced; everything past it works with typed values.
//! Wire field names are camelCase to match the profile editor's payloads.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::widget::WidgetType;

// ---------------------------------------------------------------------------
// Content variants
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkContent {
    pub url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageContent {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Embed player family, stored under the wire name `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedKind {
    Youtube,
    Spotify,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedContent {
    pub embed_url: String,
    #[serde(rename = "type")]
    pub kind: EmbedKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialContent {
    pub platform: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
}

/// One entry of a LIST widget. Items live inside the widget's content JSON
/// rather than in their own table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub id: String,
    pub content: String,
    pub order: i32,
    #[serde(default)]
    pub is_completed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListContent {
    #[serde(default)]
    pub items: Vec<ListItem>,
}

/// Field-level patch for one list item. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItemPatch {
    pub content: Option<String>,
    pub order: Option<i32>,
    pub is_completed: Option<bool>,
}

impl ListContent {
    /// Append an item, minting a fresh UUIDv7 id. When `order` is not given
    /// the item goes to the end of the list.
    pub fn add_item(&mut self, content: String, order: Option<i32>) -> ListItem {
        let item = ListItem {
            id: uuid::Uuid::now_v7().to_string(),
            content,
            order: order.unwrap_or(self.items.len() as i32),
            is_completed: false,
        };
        self.items.push(item.clone());
        item
    }

    /// Apply a patch to the item with the given id.
    pub fn update_item(&mut self, item_id: &str, patch: ListItemPatch) -> Result<ListItem, CoreError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or_else(|| CoreError::not_found("List item", item_id))?;
        if let Some(content) = patch.content {
            item.content = content;
        }
        if let Some(order) = patch.order {
            item.order = order;
        }
        if let Some(is_completed) = patch.is_completed {
            item.is_completed = is_completed;
        }
        Ok(item.clone())
    }

    /// Remove the item with the given id.
    pub fn remove_item(&mut self, item_id: &str) -> Result<(), CoreError> {
        let before = self.items.len();
        self.items.retain(|item| item.id != item_id);
        if self.items.len() == before {
            return Err(CoreError::not_found("List item", item_id));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Typed content
// ---------------------------------------------------------------------------

/// A widget's content, discriminated by [`WidgetType`].
///
/// GITHUB widgets carry no content of their own; the rendered calendar pulls
/// its username from the profile's GITHUB social link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetContent {
    Text(TextContent),
    Link(LinkContent),
    Image(ImageContent),
    Embed(EmbedContent),
    Social(SocialContent),
    List(ListContent),
    Github,
}

impl WidgetContent {
    /// The discriminant this content satisfies.
    pub fn widget_type(&self) -> WidgetType {
        match self {
            Self::Text(_) => WidgetType::Text,
            Self::Link(_) => WidgetType::Link,
            Self::Image(_) => WidgetType::Image,
            Self::Embed(_) => WidgetType::Embed,
            Self::Social(_) => WidgetType::Social,
            Self::List(_) => WidgetType::List,
            Self::Github => WidgetType::Github,
        }
    }

    /// Reconstruct typed content from a `(type, content)` pair as stored in
    /// the `widgets` table or received from the editor.
    ///
    /// Rejects a missing value for content-carrying types, a present value
    /// for GITHUB, and any value whose shape does not parse as the variant
    /// named by `widget_type`.
    pub fn from_parts(
        widget_type: WidgetType,
        content: Option<serde_json::Value>,
    ) -> Result<Self, CoreError> {
        if widget_type == WidgetType::Github {
            return match content {
                None | Some(serde_json::Value::Null) => Ok(Self::Github),
                Some(_) => Err(CoreError::Validation(
                    "GITHUB widgets do not carry content".to_string(),
                )),
            };
        }

        let value = match content {
            Some(serde_json::Value::Null) | None => {
                return Err(CoreError::Validation(format!(
                    "Missing content for widget type {}",
                    widget_type.as_str()
                )));
            }
            Some(value) => value,
        };

        let parse_err = |e: serde_json::Error| {
            CoreError::Validation(format!(
                "Invalid {} content: {e}",
                widget_type.as_str()
            ))
        };

        match widget_type {
            WidgetType::Text => Ok(Self::Text(serde_json::from_value(value).map_err(parse_err)?)),
            WidgetType::Link => Ok(Self::Link(serde_json::from_value(value).map_err(parse_err)?)),
            WidgetType::Image => Ok(Self::Image(serde_json::from_value(value).map_err(parse_err)?)),
            WidgetType::Embed => Ok(Self::Embed(serde_json::from_value(value).map_err(parse_err)?)),
            WidgetType::Social => Ok(Self::Social(serde_json::from_value(value).map_err(parse_err)?)),
            WidgetType::List => Ok(Self::List(serde_json::from_value(value).map_err(parse_err)?)),
            WidgetType::Github => unreachable!("handled above"),
        }
    }

    /// Serialize back to the stored JSON value. GITHUB yields `None`
    /// (SQL NULL).
    pub fn to_value(&self) -> Result<Option<serde_json::Value>, CoreError> {
        let to_json = |r: serde_json::Result<serde_json::Value>| {
            r.map(Some)
                .map_err(|e| CoreError::Internal(format!("Content serialization failed: {e}")))
        };
        match self {
            Self::Text(c) => to_json(serde_json::to_value(c)),
            Self::Link(c) => to_json(serde_json::to_value(c)),
            Self::Image(c) => to_json(serde_json::to_value(c)),
            Self::Embed(c) => to_json(serde_json::to_value(c)),
            Self::Social(c) => to_json(serde_json::to_value(c)),
            Self::List(c) => to_json(serde_json::to_value(c)),
            Self::Github => Ok(None),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_content_from_parts() {
        let content = WidgetContent::from_parts(
            WidgetType::Text,
            Some(json!({"text": "hello", "color": "#333"})),
        )
        .unwrap();
        match content {
            WidgetContent::Text(text) => {
                assert_eq!(text.text, "hello");
                assert_eq!(text.color.as_deref(), Some("#333"));
            }
            other => panic!("expected Text, got {other:?}"),
        }
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let content =
            WidgetContent::from_parts(WidgetType::Text, Some(json!({"text": "hi"}))).unwrap();
        match content {
            WidgetContent::Text(text) => assert!(text.color.is_none()),
            other => panic!("expected Text, got {other:?}"),
        }
    }

    #[test]
    fn missing_required_field_rejected() {
        let result = WidgetContent::from_parts(WidgetType::Link, Some(json!({"url": "x"})));
        assert!(result.is_err());
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("Invalid LINK content"), "{msg}");
    }

    #[test]
    fn type_content_mismatch_rejected() {
        // A LIST payload does not parse as TEXT.
        let result =
            WidgetContent::from_parts(WidgetType::Text, Some(json!({"items": []})));
        assert!(result.is_err());
    }

    #[test]
    fn missing_content_rejected_for_content_types() {
        let result = WidgetContent::from_parts(WidgetType::Image, None);
        assert!(result.is_err());
        let result = WidgetContent::from_parts(WidgetType::Image, Some(serde_json::Value::Null));
        assert!(result.is_err());
    }

    #[test]
    fn github_takes_no_content() {
        assert_eq!(
            WidgetContent::from_parts(WidgetType::Github, None).unwrap(),
            WidgetContent::Github
        );
        assert_eq!(
            WidgetContent::from_parts(WidgetType::Github, Some(serde_json::Value::Null)).unwrap(),
            WidgetContent::Github
        );
        assert!(WidgetContent::from_parts(WidgetType::Github, Some(json!({"x": 1}))).is_err());
    }

    #[test]
    fn github_serializes_to_null() {
        assert_eq!(WidgetContent::Github.to_value().unwrap(), None);
    }

    #[test]
    fn embed_kind_uses_wire_name_type() {
        let content = WidgetContent::from_parts(
            WidgetType::Embed,
            Some(json!({"embedUrl": "https://youtu.be/x", "type": "youtube"})),
        )
        .unwrap();
        match &content {
            WidgetContent::Embed(embed) => assert_eq!(embed.kind, EmbedKind::Youtube),
            other => panic!("expected Embed, got {other:?}"),
        }
        let value = content.to_value().unwrap().unwrap();
        assert_eq!(value["type"], "youtube");
        assert_eq!(value["embedUrl"], "https://youtu.be/x");
    }

    #[test]
    fn unknown_embed_kind_rejected() {
        let result = WidgetContent::from_parts(
            WidgetType::Embed,
            Some(json!({"embedUrl": "https://example.com", "type": "vimeo"})),
        );
        assert!(result.is_err());
    }

    #[test]
    fn round_trip_preserves_content() {
        let original = WidgetContent::from_parts(
            WidgetType::Social,
            Some(json!({"platform": "TWITTER", "username": "jack"})),
        )
        .unwrap();
        let value = original.to_value().unwrap();
        let back = WidgetContent::from_parts(WidgetType::Social, value).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn widget_type_of_content() {
        let content =
            WidgetContent::from_parts(WidgetType::List, Some(json!({"items": []}))).unwrap();
        assert_eq!(content.widget_type(), WidgetType::List);
        assert_eq!(WidgetContent::Github.widget_type(), WidgetType::Github);
    }

    // -- List items ---------------------------------------------------------

    #[test]
    fn add_item_appends_at_end_by_default() {
        let mut list = ListContent::default();
        let first = list.add_item("milk".to_string(), None);
        let second = list.add_item("eggs".to_string(), None);
        assert_eq!(first.order, 0);
        assert_eq!(second.order, 1);
        assert_eq!(list.items.len(), 2);
        assert_ne!(first.id, second.id);
        assert!(!first.is_completed);
    }

    #[test]
    fn add_item_honors_explicit_order() {
        let mut list = ListContent::default();
        let item = list.add_item("bread".to_string(), Some(7));
        assert_eq!(item.order, 7);
    }

    #[test]
    fn update_item_applies_partial_patch() {
        let mut list = ListContent::default();
        let item = list.add_item("milk".to_string(), None);
        let updated = list
            .update_item(
                &item.id,
                ListItemPatch {
                    is_completed: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(updated.is_completed);
        assert_eq!(updated.content, "milk");
        assert_eq!(updated.order, 0);
    }

    #[test]
    fn update_unknown_item_not_found() {
        let mut list = ListContent::default();
        let result = list.update_item("nope", ListItemPatch::default());
        assert!(matches!(result, Err(CoreError::NotFound { .. })));
    }

    #[test]
    fn remove_item_drops_it() {
        let mut list = ListContent::default();
        let keep = list.add_item("keep".to_string(), None);
        let drop = list.add_item("drop".to_string(), None);
        list.remove_item(&drop.id).unwrap();
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].id, keep.id);
    }

    #[test]
    fn remove_unknown_item_not_found() {
        let mut list = ListContent::default();
        assert!(matches!(
            list.remove_item("nope"),
            Err(CoreError::NotFound { .. })
        ));
    }

    #[test]
    fn list_items_use_camel_case_wire_names() {
        let mut list = ListContent::default();
        let item = list.add_item("milk".to_string(), None);
        list.update_item(
            &item.id,
            ListItemPatch {
                is_completed: Some(true),
                ..Default::default()
            },
        )
        .unwrap();
        let value = serde_json::to_value(&list).unwrap();
        assert_eq!(value["items"][0]["isCompleted"], true);
        assert!(value["items"][0].get("is_completed").is_none());
    }
}
