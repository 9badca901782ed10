use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Stable identity of a slide inside a deck. Generated client-side and never
/// reused, so it stays valid while positions shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideId(uuid::Uuid);

impl SlideId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for SlideId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display arrangement requested for a slide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlideLayout {
    Title,
    #[default]
    Content,
    SectionHeader,
    ThankYou,
}

impl SlideLayout {
    pub const ALL: [SlideLayout; 4] = [
        SlideLayout::Title,
        SlideLayout::Content,
        SlideLayout::SectionHeader,
        SlideLayout::ThankYou,
    ];

    pub fn as_tag(&self) -> &'static str {
        match self {
            SlideLayout::Title => "TITLE",
            SlideLayout::Content => "CONTENT",
            SlideLayout::SectionHeader => "SECTION_HEADER",
            SlideLayout::ThankYou => "THANK_YOU",
        }
    }

    /// Parse a wire tag, falling back to `Content` for anything unrecognised.
    pub fn from_tag_lossy(tag: &str) -> Self {
        match tag.parse() {
            Ok(layout) => layout,
            Err(UnknownLayout(raw)) => {
                tracing::warn!("unknown slide layout tag {raw:?}, using CONTENT");
                SlideLayout::Content
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown slide layout: {0}")]
pub struct UnknownLayout(pub String);

impl FromStr for SlideLayout {
    type Err = UnknownLayout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| if c == '-' || c == ' ' { '_' } else { c.to_ascii_uppercase() })
            .collect();
        match normalized.as_str() {
            "TITLE" => Ok(SlideLayout::Title),
            "CONTENT" => Ok(SlideLayout::Content),
            "SECTION_HEADER" => Ok(SlideLayout::SectionHeader),
            "THANK_YOU" => Ok(SlideLayout::ThankYou),
            _ => Err(UnknownLayout(s.to_string())),
        }
    }
}

impl fmt::Display for SlideLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for SlideLayout {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Models occasionally emit null or a non-string here; treat it like an
        // unknown tag rather than failing the whole outline.
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match raw {
            Some(serde_json::Value::String(tag)) => SlideLayout::from_tag_lossy(&tag),
            _ => SlideLayout::Content,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub id: SlideId,
    pub title: String,
    pub content: Vec<String>,
    pub layout: SlideLayout,
}

impl Slide {
    pub fn new(title: impl Into<String>, content: Vec<String>, layout: SlideLayout) -> Self {
        Self {
            id: SlideId::new(),
            title: title.into(),
            content,
            layout,
        }
    }
}

impl From<OutlineSlide> for Slide {
    fn from(outline: OutlineSlide) -> Self {
        Slide::new(outline.title, outline.content, outline.layout)
    }
}

/// A slide as produced by the outline generator, before it has an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineSlide {
    pub title: String,
    #[serde(default)]
    pub content: Vec<String>,
    #[serde(default)]
    pub layout: SlideLayout,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    pub slides: Vec<OutlineSlide>,
}

impl Outline {
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Convert into deck slides, minting a fresh id for each entry.
    pub fn into_slides(self) -> Vec<Slide> {
        self.slides.into_iter().map(Slide::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_tags_parse() {
        assert_eq!("TITLE".parse::<SlideLayout>(), Ok(SlideLayout::Title));
        assert_eq!("section-header".parse::<SlideLayout>(), Ok(SlideLayout::SectionHeader));
        assert_eq!("Thank You".parse::<SlideLayout>(), Ok(SlideLayout::ThankYou));
        let err = "TWO_COLUMN".parse::<SlideLayout>().unwrap_err();
        assert_eq!(err, UnknownLayout("TWO_COLUMN".to_string()));
        assert_eq!(err.to_string(), "unknown slide layout: TWO_COLUMN");
    }

    #[test]
    fn test_unknown_or_missing_layout_falls_back_to_content() {
        let json = r#"{"slides":[
            {"title":"A","content":["x"],"layout":"TWO_COLUMN"},
            {"title":"B","content":[]},
            {"title":"C","layout":null}
        ]}"#;
        let outline: Outline = serde_json::from_str(json).unwrap();
        assert_eq!(outline.len(), 3);
        assert!(outline.slides.iter().all(|s| s.layout == SlideLayout::Content));
        assert!(outline.slides[2].content.is_empty());
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let json = r#"{"slides":[{"content":["x"],"layout":"CONTENT"}]}"#;
        assert!(serde_json::from_str::<Outline>(json).is_err());
    }

    #[test]
    fn test_into_slides_assigns_unique_ids() {
        let outline = Outline {
            slides: vec![
                OutlineSlide {
                    title: "One".into(),
                    content: vec![],
                    layout: SlideLayout::Title,
                },
                OutlineSlide {
                    title: "Two".into(),
                    content: vec![],
                    layout: SlideLayout::ThankYou,
                },
            ],
        };
        let slides = outline.into_slides();
        assert_eq!(slides.len(), 2);
        assert_ne!(slides[0].id, slides[1].id);
        assert_eq!(slides[1].layout, SlideLayout::ThankYou);
    }
}
