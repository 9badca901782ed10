//! The explicitly owned application state: deck, presentation mode, loading
//! flag and error banner. Frontends hold one `Editor` and pass it around.

use crate::client::OutlineGenerator;
use crate::deck::Deck;
use crate::error::{GenerateError, TopicError};
use crate::keymap::{Key, KeyBindings};
use crate::presentation::{KeyOutcome, Presenter};
use deck_common::{Outline, Slide, SlideId};
use thiserror::Error;

pub const DEFAULT_MIN_TOPIC_LEN: usize = 5;

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error(transparent)]
    Topic(#[from] TopicError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

pub fn validate_topic(topic: &str, min_len: usize) -> Result<(), TopicError> {
    let len = topic.trim().chars().count();
    if len < min_len {
        return Err(TopicError::TooShort { min: min_len, len });
    }
    Ok(())
}

#[derive(Debug)]
pub struct Editor {
    deck: Deck,
    presenter: Presenter,
    loading: bool,
    banner: Option<String>,
    min_topic_len: usize,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_TOPIC_LEN)
    }
}

impl Editor {
    pub fn new(min_topic_len: usize) -> Self {
        Self {
            deck: Deck::new(),
            presenter: Presenter::new(KeyBindings::new()),
            loading: false,
            banner: None,
            min_topic_len,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    pub fn min_topic_len(&self) -> usize {
        self.min_topic_len
    }

    pub fn add_slide(&mut self) -> SlideId {
        self.deck.add_slide()
    }

    pub fn delete_slide(&mut self, id: SlideId) -> Option<Slide> {
        self.deck.delete_slide(id)
    }

    pub fn delete_current(&mut self) -> Option<Slide> {
        let id = self.deck.current()?.id;
        self.deck.delete_slide(id)
    }

    pub fn select(&mut self, index: usize) {
        self.deck.select(index);
    }

    pub fn select_next(&mut self) {
        self.deck.select_next();
    }

    pub fn select_prev(&mut self) {
        self.deck.select_prev();
    }

    /// Validate a topic and mark a generation as in flight.
    pub fn begin_generation(&mut self, topic: &str) -> Result<(), TopicError> {
        validate_topic(topic, self.min_topic_len)?;
        self.loading = true;
        self.banner = None;
        tracing::info!("generating outline for {topic:?}");
        Ok(())
    }

    /// Apply a generator result. Success replaces the whole deck; failure
    /// leaves it untouched and raises the banner. Results are applied in
    /// arrival order, so a late response overwrites an earlier one.
    pub fn finish_generation(
        &mut self,
        result: Result<Outline, GenerateError>,
    ) -> Result<usize, GenerateError> {
        self.loading = false;
        let outline = result.and_then(|outline| {
            if outline.is_empty() {
                Err(GenerateError::EmptyOutline)
            } else {
                Ok(outline)
            }
        });
        match outline {
            Ok(outline) => {
                let count = outline.len();
                self.deck.replace_with_outline(outline);
                tracing::info!("generated {count} slides");
                Ok(count)
            }
            Err(e) => {
                tracing::error!("outline generation failed: {e}");
                self.banner = Some(e.user_message().to_string());
                Err(e)
            }
        }
    }

    pub async fn generate(
        &mut self,
        generator: &(dyn OutlineGenerator + Send + Sync),
        topic: &str,
    ) -> Result<usize, SubmitError> {
        self.begin_generation(topic)?;
        let result = generator.generate(topic).await;
        Ok(self.finish_generation(result)?)
    }

    pub fn is_presenting(&self) -> bool {
        self.presenter.is_presenting()
    }

    pub fn present(&mut self) -> bool {
        self.presenter.present(&self.deck)
    }

    pub fn exit_presentation(&mut self) {
        self.presenter.exit();
    }

    pub fn next_slide(&mut self) {
        self.presenter.next(&mut self.deck);
    }

    pub fn prev_slide(&mut self) {
        self.presenter.prev(&mut self.deck);
    }

    pub fn handle_presentation_key(&mut self, key: Key) -> KeyOutcome {
        self.presenter.handle_key(key, &mut self.deck)
    }

    pub fn presented_slide(&self) -> Option<&Slide> {
        self.presenter.current_slide(&self.deck)
    }

    pub fn presentation_progress(&self) -> Option<(usize, usize)> {
        self.presenter.progress(&self.deck)
    }

    pub fn active_key_bindings(&self) -> usize {
        self.presenter.bindings().active_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::StubGenerator;
    use crate::error::Result as GenResult;
    use async_trait::async_trait;
    use deck_chatgpt::ClientError;
    use deck_common::{OutlineSlide, SlideLayout};

    struct FailingGenerator;

    #[async_trait]
    impl OutlineGenerator for FailingGenerator {
        async fn generate(&self, _topic: &str) -> GenResult<Outline> {
            Err(GenerateError::Client(ClientError::Malformed("not a list".into())))
        }
    }

    struct EmptyGenerator;

    #[async_trait]
    impl OutlineGenerator for EmptyGenerator {
        async fn generate(&self, _topic: &str) -> GenResult<Outline> {
            Ok(Outline::default())
        }
    }

    fn outline(titles: &[&str]) -> Outline {
        Outline {
            slides: titles
                .iter()
                .map(|t| OutlineSlide {
                    title: t.to_string(),
                    content: vec![],
                    layout: SlideLayout::Content,
                })
                .collect(),
        }
    }

    #[test]
    fn test_validate_topic() {
        assert!(validate_topic("Solar power", 5).is_ok());
        assert_eq!(
            validate_topic("  abc  ", 5),
            Err(TopicError::TooShort { min: 5, len: 3 })
        );
        assert!(validate_topic("日本語の話題", 5).is_ok());
    }

    #[tokio::test]
    async fn test_short_topic_never_reaches_generator() {
        let mut editor = Editor::default();
        editor.add_slide();
        let before = editor.deck().clone();

        let err = editor.generate(&FailingGenerator, "abc").await.unwrap_err();
        assert!(matches!(err, SubmitError::Topic(TopicError::TooShort { .. })));
        assert_eq!(editor.deck(), &before);
        assert!(!editor.is_loading());
        assert!(editor.banner().is_none());
    }

    #[tokio::test]
    async fn test_generate_success_replaces_deck() {
        let mut editor = Editor::default();
        editor.add_slide();
        editor.add_slide();
        let old_ids: Vec<_> = editor.deck().slides().iter().map(|s| s.id).collect();

        let count = editor.generate(&StubGenerator, "Renewable energy").await.unwrap();
        assert_eq!(editor.deck().len(), count);
        assert_eq!(editor.deck().current_index(), 0);
        assert!(editor.deck().slides().iter().all(|s| !old_ids.contains(&s.id)));
        assert!(!editor.is_loading());
    }

    #[tokio::test]
    async fn test_generate_failure_preserves_deck() {
        let mut editor = Editor::default();
        editor.add_slide();
        editor.add_slide();
        editor.select(0);
        let before = editor.deck().clone();

        let err = editor.generate(&FailingGenerator, "Renewable energy").await.unwrap_err();
        assert!(matches!(err, SubmitError::Generate(_)));
        assert_eq!(editor.deck(), &before);
        assert_eq!(editor.banner(), Some(crate::error::GENERATION_FAILED_MESSAGE));
        assert!(!editor.is_loading());

        editor.dismiss_banner();
        assert!(editor.banner().is_none());
    }

    #[tokio::test]
    async fn test_empty_outline_is_a_failure() {
        let mut editor = Editor::default();
        editor.add_slide();
        let before = editor.deck().clone();
        let err = editor.generate(&EmptyGenerator, "Renewable energy").await.unwrap_err();
        assert!(matches!(err, SubmitError::Generate(GenerateError::EmptyOutline)));
        assert_eq!(editor.deck(), &before);
    }

    #[test]
    fn test_begin_generation_clears_banner_and_sets_loading() {
        let mut editor = Editor::default();
        let _ = editor.finish_generation(Err(GenerateError::EmptyOutline));
        assert!(editor.banner().is_some());

        editor.begin_generation("A valid topic").unwrap();
        assert!(editor.is_loading());
        assert!(editor.banner().is_none());
    }

    #[test]
    fn test_later_result_wins() {
        let mut editor = Editor::default();
        editor.begin_generation("first topic").unwrap();
        editor.begin_generation("second topic").unwrap();

        editor.finish_generation(Ok(outline(&["second"]))).unwrap();
        editor.finish_generation(Ok(outline(&["first", "late"]))).unwrap();
        let titles: Vec<_> = editor.deck().slides().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "late"]);
    }

    #[test]
    fn test_presentation_flow() {
        let mut editor = Editor::default();
        assert!(!editor.present());

        for _ in 0..3 {
            editor.add_slide();
        }
        editor.select(0);
        assert!(editor.present());
        assert_eq!(editor.active_key_bindings(), 1);

        for _ in 0..3 {
            editor.next_slide();
        }
        assert_eq!(editor.presentation_progress(), Some((3, 3)));

        assert_eq!(editor.handle_presentation_key(Key::Esc), KeyOutcome::Exited);
        assert!(!editor.is_presenting());
        assert_eq!(editor.active_key_bindings(), 0);
        assert_eq!(editor.deck().current_index(), 2);
    }

    #[test]
    fn test_delete_current_follows_repair_rule() {
        let mut editor = Editor::default();
        for _ in 0..3 {
            editor.add_slide();
        }
        editor.delete_current();
        assert_eq!(editor.deck().len(), 2);
        assert_eq!(editor.deck().current_index(), 1);

        let mut empty = Editor::default();
        assert!(empty.delete_current().is_none());
    }
}
