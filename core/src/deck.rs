//! Ordered slide collection plus the index of the selected slide.

use deck_common::{Outline, Slide, SlideId, SlideLayout};

pub const NEW_SLIDE_TITLE: &str = "New Slide Title";
pub const NEW_SLIDE_CONTENT: &str = "Add your content here.";

/// Invariant: `current_index < slides.len()` when non-empty, `0` when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    slides: Vec<Slide>,
    current_index: usize,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_slides(slides: Vec<Slide>) -> Self {
        Self {
            slides,
            current_index: 0,
        }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current(&self) -> Option<&Slide> {
        self.slides.get(self.current_index)
    }

    pub fn position(&self, id: SlideId) -> Option<usize> {
        self.slides.iter().position(|s| s.id == id)
    }

    /// Discard every slide and absorb a freshly generated outline.
    pub fn replace_with_outline(&mut self, outline: Outline) {
        self.slides = outline.into_slides();
        self.current_index = 0;
        tracing::debug!("deck replaced with {} generated slides", self.slides.len());
    }

    /// Append a placeholder slide and select it.
    pub fn add_slide(&mut self) -> SlideId {
        let slide = Slide::new(
            NEW_SLIDE_TITLE,
            vec![NEW_SLIDE_CONTENT.to_string()],
            SlideLayout::Content,
        );
        let id = slide.id;
        self.slides.push(slide);
        self.current_index = self.slides.len() - 1;
        tracing::debug!("added slide {id} at {}", self.current_index);
        id
    }

    /// Remove the slide with `id`, keeping the same logical slide selected
    /// where possible. Unknown ids are a no-op and return `None`.
    pub fn delete_slide(&mut self, id: SlideId) -> Option<Slide> {
        let deleted_index = self.position(id)?;
        let removed = self.slides.remove(deleted_index);

        if self.slides.is_empty() {
            self.current_index = 0;
        } else if deleted_index < self.current_index {
            self.current_index -= 1;
        } else if deleted_index == self.current_index && self.current_index >= self.slides.len() {
            self.current_index = self.slides.len() - 1;
        }

        tracing::debug!(
            "deleted slide {id} at {deleted_index}, selection now {}",
            self.current_index
        );
        Some(removed)
    }

    /// Select by position, clamped into the valid range.
    pub fn select(&mut self, index: usize) {
        self.current_index = index.min(self.slides.len().saturating_sub(1));
    }

    pub fn select_next(&mut self) {
        self.select(self.current_index.saturating_add(1));
    }

    pub fn select_prev(&mut self) {
        self.select(self.current_index.saturating_sub(1));
    }
}
