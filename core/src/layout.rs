//! Maps a slide's layout tag to how it is arranged on screen.

use deck_common::{Slide, SlideLayout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrangement<'a> {
    /// Large centered title with an optional subtitle line.
    TitleCard {
        title: &'a str,
        subtitle: Option<&'a str>,
    },
    /// Left-aligned heading, no bullets.
    SectionHeading { heading: &'a str },
    /// Centered closing title with an optional subtitle line.
    Closing {
        title: &'a str,
        subtitle: Option<&'a str>,
    },
    /// Heading followed by every content line as a bullet.
    Bulleted {
        heading: &'a str,
        bullets: &'a [String],
    },
}

impl<'a> Arrangement<'a> {
    pub fn align(&self) -> HorizontalAlign {
        match self {
            Arrangement::TitleCard { .. } | Arrangement::Closing { .. } => HorizontalAlign::Center,
            Arrangement::SectionHeading { .. } | Arrangement::Bulleted { .. } => {
                HorizontalAlign::Left
            }
        }
    }
}

pub fn arrange(slide: &Slide) -> Arrangement<'_> {
    let title = slide.title.as_str();
    let content = slide.content.as_slice();
    let subtitle = content
        .first()
        .map(String::as_str)
        .filter(|s| !s.trim().is_empty());
    match slide.layout {
        SlideLayout::Title => Arrangement::TitleCard { title, subtitle },
        SlideLayout::SectionHeader => Arrangement::SectionHeading { heading: title },
        SlideLayout::ThankYou => Arrangement::Closing { title, subtitle },
        SlideLayout::Content => Arrangement::Bulleted {
            heading: title,
            bullets: content,
        },
    }
}
