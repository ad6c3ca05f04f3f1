use serde::{Deserialize, Deserializer, Serialize};

/// One styled inline text fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RichTextItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub plain_text: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub annotations: Annotations,
}

/// Notion sends `null` for some fields the exporter treats as empty.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl RichTextItem {
    /// Create an unstyled, unlinked run, the most common rich text variant.
    ///
    /// ```ignore
    /// RichTextItem::plain_text("hello")
    /// ```
    pub fn plain_text(text: &str) -> Self {
        Self {
            plain_text: text.to_string(),
            href: None,
            annotations: Annotations::default(),
        }
    }

    /// Returns the run with the given annotations.
    pub fn with_annotations(self, annotations: Annotations) -> Self {
        Self {
            annotations,
            ..self
        }
    }

    /// Returns the run linked to `href`.
    pub fn with_href(self, href: &str) -> Self {
        Self {
            href: Some(href.to_string()),
            ..self
        }
    }
}

/// Style flags of a rich text run. Notion's `color` annotation is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
}

/// Concatenates the unstyled text of a run sequence.
pub fn plain_text_of(items: &[RichTextItem]) -> String {
    items.iter().map(|item| item.plain_text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_annotation_fields_default_to_false() {
        let item: RichTextItem =
            serde_json::from_str(r#"{"plain_text": "hi", "annotations": {"bold": true}}"#)
                .unwrap();
        assert!(item.annotations.bold);
        assert!(!item.annotations.code);
        assert_eq!(item.href, None);
    }

    #[test]
    fn null_annotations_are_treated_as_unstyled() {
        let item: RichTextItem =
            serde_json::from_str(r#"{"plain_text": null, "href": null, "annotations": null}"#)
                .unwrap();
        assert_eq!(item, RichTextItem::default());
    }

    #[test]
    fn plain_text_concatenates_runs() {
        let runs = vec![
            RichTextItem::plain_text("Whey "),
            RichTextItem::plain_text("Isolate").with_href("https://example.com"),
        ];
        assert_eq!(plain_text_of(&runs), "Whey Isolate");
    }
}
