use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use deck_core::config::Config;
use deck_core::{generator_from_config, Editor, SharedGenerator};
use futures::StreamExt;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};
use tokio::time::{interval, Duration};

use crate::app_event_sender::{AppEvent, AppEventSender};
use crate::input::to_key;
use crate::terminal::TerminalGuard;
use crate::widgets::{
    centered_rect,
    control_panel::ControlPanel,
    error_banner::ErrorBanner,
    modal::Modal,
    presentation::PresentationView,
    slide_list::SlideList,
    slide_view::{Scale, SlideView},
    status_bar::StatusBar,
};

const HELP_TEXT: &str = "Slides panel:\n  ↑/↓ or k/j  select slide\n  a           add slide\n  d / Del     delete selected slide\n  p           present\n  Tab or i    edit topic\n  x           dismiss error\n  q           quit\n\nTopic panel:\n  Enter       generate slides\n  Esc / Tab   back to slides\n\nPresenting:\n  → / Space   next slide\n  ←           previous slide\n  Esc         exit\n\nPress any key to close.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Slides,
    Topic,
}

pub struct App {
    editor: Editor,
    focus: Focus,
    topic: String,
    topic_error: Option<String>,
    show_help: bool,
    should_quit: bool,
    spinner_frame: usize,
    generator: SharedGenerator,
    app_event_tx: AppEventSender,
}

impl App {
    pub fn new(editor: Editor, generator: SharedGenerator, app_event_tx: AppEventSender) -> Self {
        Self {
            editor,
            focus: Focus::Topic,
            topic: String::new(),
            topic_error: None,
            show_help: false,
            should_quit: false,
            spinner_frame: 0,
            generator,
            app_event_tx,
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn topic_error(&self) -> Option<&str> {
        self.topic_error.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn on_tick(&mut self) {
        if self.editor.is_loading() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        // While presenting, the presentation binding owns the keyboard.
        if self.editor.is_presenting() {
            self.editor.handle_presentation_key(to_key(&key));
            return;
        }

        if self.show_help {
            self.show_help = false;
            return;
        }

        match self.focus {
            Focus::Topic => self.handle_topic_key(key),
            Focus::Slides => self.handle_slides_key(key),
        }
    }

    fn handle_topic_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Tab => self.focus = Focus::Slides,
            KeyCode::Enter => self.submit_topic(),
            KeyCode::Backspace => {
                self.topic.pop();
            }
            KeyCode::Char(c)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                self.topic.push(c);
            }
            _ => {}
        }
    }

    fn handle_slides_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Up | KeyCode::Char('k') => self.editor.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.editor.select_next(),
            KeyCode::Home => self.editor.select(0),
            KeyCode::End => self.editor.select(usize::MAX),
            KeyCode::Char('a') => {
                self.editor.add_slide();
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                self.editor.delete_current();
            }
            KeyCode::Char('p') | KeyCode::F(5) => {
                self.editor.present();
            }
            KeyCode::Char('x') => self.editor.dismiss_banner(),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab | KeyCode::Char('i') => self.focus = Focus::Topic,
            _ => {}
        }
    }

    /// Validate the topic and start a background generation. Ignored while a
    /// generation is already running.
    fn submit_topic(&mut self) {
        if self.editor.is_loading() {
            return;
        }
        if let Err(e) = self.editor.begin_generation(&self.topic) {
            self.topic_error = Some(e.to_string());
            return;
        }
        self.topic_error = None;

        let generator = self.generator.clone();
        let tx = self.app_event_tx.clone();
        let topic = self.topic.clone();
        tokio::spawn(async move {
            let result = generator.generate(&topic).await;
            tx.send(AppEvent::OutlineReady(result));
        });
    }

    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::OutlineReady(result) => {
                if self.editor.finish_generation(result).is_ok() {
                    self.focus = Focus::Slides;
                }
            }
        }
    }

    pub fn draw(&self, f: &mut Frame) {
        let area = f.area();

        if self.editor.is_presenting() {
            f.render_widget(
                PresentationView::new(
                    self.editor.presented_slide(),
                    self.editor.presentation_progress(),
                ),
                area,
            );
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(28),
                Constraint::Min(20),
                Constraint::Length(40),
            ])
            .split(rows[0]);

        let deck = self.editor.deck();
        SlideList::new(deck.slides(), deck.current_index(), self.focus == Focus::Slides)
            .render(f, columns[0]);
        f.render_widget(SlideView::new(deck.current(), Scale::Preview), columns[1]);
        f.render_widget(
            ControlPanel::new(&self.topic, self.focus == Focus::Topic)
                .error(self.topic_error.as_deref())
                .loading(self.editor.is_loading(), self.spinner_frame)
                .slide_count(deck.len()),
            columns[2],
        );

        let (mode, hints) = match self.focus {
            Focus::Slides => ("SLIDES", "? help  Tab topic  p present  q quit"),
            Focus::Topic => ("TOPIC", "Enter generate  Esc slides  Ctrl+C quit"),
        };
        let status = if self.editor.is_loading() {
            "Generating...".to_string()
        } else if deck.is_empty() {
            "No slides".to_string()
        } else {
            format!("Slide {} of {}", deck.current_index() + 1, deck.len())
        };
        f.render_widget(StatusBar::new(mode, &status, hints), rows[1]);

        if let Some(message) = self.editor.banner() {
            let banner = ErrorBanner::new(message);
            let banner_area = banner.area(area);
            f.render_widget(banner, banner_area);
        }

        if self.show_help {
            f.render_widget(Modal::new(" Help ", HELP_TEXT), centered_rect(48, 24, area));
        }
    }
}

pub async fn run_app(config: &Config) -> Result<()> {
    let generator = generator_from_config(config);
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let mut app = App::new(
        Editor::new(config.min_topic_len),
        generator,
        AppEventSender::new(tx),
    );

    let mut guard = TerminalGuard::enter()?;
    let mut events = EventStream::new();
    let mut tick = interval(Duration::from_millis(100));
    tracing::info!("interactive session started");

    while !app.should_quit() {
        guard.terminal_mut().draw(|f| app.draw(f))?;

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) => app.handle_key_event(key),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            Some(event) = rx.recv() => app.handle_app_event(event),
            _ = tick.tick() => app.on_tick(),
        }
    }

    tracing::info!("interactive session ended");
    Ok(())
}
