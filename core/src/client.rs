use crate::config::Config;
use crate::error::Result;
use async_trait::async_trait;
use deck_chatgpt::OpenAiOutlineClient;
use deck_common::{Outline, OutlineSlide, SlideLayout};
use std::sync::Arc;

/// Turns a topic into an outline. Any failure is reported as an error; a
/// partial outline is never returned.
#[async_trait]
pub trait OutlineGenerator {
    async fn generate(&self, topic: &str) -> Result<Outline>;
}

pub type SharedGenerator = Arc<dyn OutlineGenerator + Send + Sync>;

/// Offline generator with a fixed shape, used when no API key is configured.
pub struct StubGenerator;

#[async_trait]
impl OutlineGenerator for StubGenerator {
    async fn generate(&self, topic: &str) -> Result<Outline> {
        let topic = topic.trim();
        Ok(Outline {
            slides: vec![
                stub_slide(topic, &["An offline draft outline"], SlideLayout::Title),
                stub_slide(
                    format!("Why {topic} matters"),
                    &["Background and context", "Who is affected", "What is at stake"],
                    SlideLayout::Content,
                ),
                stub_slide("Key Ideas", &[], SlideLayout::SectionHeader),
                stub_slide(
                    "Core concepts",
                    &["Concept one", "Concept two", "How they connect"],
                    SlideLayout::Content,
                ),
                stub_slide(
                    "Looking ahead",
                    &["Open questions", "Next steps"],
                    SlideLayout::Content,
                ),
                stub_slide("Thank You", &["Questions?"], SlideLayout::ThankYou),
            ],
        })
    }
}

fn stub_slide(title: impl Into<String>, content: &[&str], layout: SlideLayout) -> OutlineSlide {
    OutlineSlide {
        title: title.into(),
        content: content.iter().map(|s| s.to_string()).collect(),
        layout,
    }
}

/// Adapter to wrap OpenAiOutlineClient into OutlineGenerator
pub struct OpenAiAdapter {
    inner: OpenAiOutlineClient,
}

impl OpenAiAdapter {
    pub fn from_config(api_key: String, config: &Config) -> Self {
        let inner = OpenAiOutlineClient::new_with_model(api_key, config.model.clone())
            .with_base_url(config.base_url.clone())
            .with_timeout(config.request_timeout());
        Self { inner }
    }
}

#[async_trait]
impl OutlineGenerator for OpenAiAdapter {
    async fn generate(&self, topic: &str) -> Result<Outline> {
        Ok(self.inner.generate_outline(topic).await?)
    }
}

/// Prefer OpenAI when an API key is present; fall back to the stub.
pub fn generator_from_config(config: &Config) -> SharedGenerator {
    match config.api_key.as_deref().filter(|k| !k.is_empty()) {
        Some(key) => {
            tracing::info!("using OpenAI outline generator ({})", config.model);
            Arc::new(OpenAiAdapter::from_config(key.to_string(), config))
        }
        None => {
            tracing::info!("no API key configured, using offline outline generator");
            Arc::new(StubGenerator)
        }
    }
}
