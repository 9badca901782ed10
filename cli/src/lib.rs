pub mod logging;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use deck_common::Slide;
use deck_core::config::Config;
use deck_core::editor::SubmitError;
use deck_core::layout::{arrange, Arrangement};
use deck_core::{generator_from_config, Editor};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "deck")]
#[command(about = "AI-assisted slide deck builder and presenter")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override model (e.g., gpt-4o, gpt-4o-mini)
    #[arg(long)]
    pub model: Option<String>,

    /// Path to a JSON or TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive slide editor (default)
    Interactive,
    /// Generate slides for a topic and print them
    Generate {
        /// Presentation topic
        #[arg(required = true)]
        topic: Vec<String>,
    },
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(model) = cli.model {
        config.model = model;
    }
    logging::init_tracing(&config.log_path(), cli.debug)?;
    tracing::debug!(model = %config.model, base_url = %config.base_url, "configuration resolved");

    match cli.command {
        Some(Commands::Generate { topic }) => {
            generate_slides(&config, &topic.join(" ")).await?;
        }
        Some(Commands::Interactive) | None => {
            deck_tui::run_interactive(&config).await?;
        }
    }

    Ok(())
}

async fn generate_slides(config: &Config, topic: &str) -> Result<()> {
    let generator = generator_from_config(config);
    let mut editor = Editor::new(config.min_topic_len);

    match editor.generate(generator.as_ref(), topic).await {
        Ok(_) => {
            let slides = editor.deck().slides();
            for (i, slide) in slides.iter().enumerate() {
                println!("{}", format_slide(slide, i + 1, slides.len()));
            }
            Ok(())
        }
        Err(SubmitError::Topic(e)) => Err(anyhow!(e)),
        Err(SubmitError::Generate(e)) => Err(anyhow!(e.user_message())),
    }
}

/// Plain-text rendering of one slide, following its layout arrangement.
fn format_slide(slide: &Slide, position: usize, total: usize) -> String {
    let mut out = format!("── {position}/{total} [{}] ──\n", slide.layout);
    match arrange(slide) {
        Arrangement::TitleCard { title, subtitle } | Arrangement::Closing { title, subtitle } => {
            out.push_str(&format!("  {title}\n"));
            if let Some(subtitle) = subtitle {
                out.push_str(&format!("  {subtitle}\n"));
            }
        }
        Arrangement::SectionHeading { heading } => {
            out.push_str(&format!("  {heading}\n"));
        }
        Arrangement::Bulleted { heading, bullets } => {
            out.push_str(&format!("  {heading}\n"));
            for point in bullets {
                out.push_str(&format!("    • {point}\n"));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_common::SlideLayout;

    #[test]
    fn test_cli_parses_generate_topic() {
        let cli = Cli::try_parse_from([
            "deck", "--model", "gpt-4o", "generate", "Solar", "power",
        ])
        .unwrap();
        assert_eq!(cli.model.as_deref(), Some("gpt-4o"));
        match cli.command {
            Some(Commands::Generate { topic }) => assert_eq!(topic.join(" "), "Solar power"),
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_cli_defaults_to_interactive() {
        let cli = Cli::try_parse_from(["deck"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn test_format_slide_by_layout() {
        let content = Slide::new("Points", vec!["a".into(), "b".into()], SlideLayout::Content);
        let text = format_slide(&content, 2, 5);
        assert!(text.starts_with("── 2/5 [CONTENT] ──"));
        assert!(text.contains("    • a\n    • b\n"));

        let header = Slide::new("Part II", vec!["hidden".into()], SlideLayout::SectionHeader);
        assert!(!format_slide(&header, 3, 5).contains("hidden"));
    }

    #[tokio::test]
    async fn test_generate_rejects_short_topic() {
        let err = generate_slides(&Config::default(), "hey").await.unwrap_err();
        assert_eq!(err.to_string(), "Please enter a topic with at least 5 characters.");
    }
}
