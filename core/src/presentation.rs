//! Browsing/Presenting state machine. Navigation moves the deck's own
//! selection, so leaving the presentation keeps wherever it ended up.

use crate::deck::Deck;
use crate::keymap::{presentation_binding, BindingGuard, Key, KeyBindings, NavCommand};
use deck_common::Slide;

#[derive(Debug)]
pub struct PresentationSession {
    entry_index: usize,
    _binding: BindingGuard,
}

impl PresentationSession {
    pub fn entry_index(&self) -> usize {
        self.entry_index
    }
}

#[derive(Debug, Default)]
pub enum Mode {
    #[default]
    Browsing,
    Presenting(PresentationSession),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// No presentation binding claimed the key.
    Ignored,
    Navigated,
    Exited,
}

#[derive(Debug, Default)]
pub struct Presenter {
    mode: Mode,
    bindings: KeyBindings,
}

impl Presenter {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            mode: Mode::Browsing,
            bindings,
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn is_presenting(&self) -> bool {
        matches!(self.mode, Mode::Presenting(_))
    }

    /// Enter presentation at the deck's current slide. Refused on an empty
    /// deck. Re-entering replaces the session instead of stacking bindings.
    pub fn present(&mut self, deck: &Deck) -> bool {
        if deck.is_empty() {
            tracing::debug!("present ignored: deck is empty");
            return false;
        }
        self.mode = Mode::Browsing;
        let binding = self.bindings.install(presentation_binding);
        self.mode = Mode::Presenting(PresentationSession {
            entry_index: deck.current_index(),
            _binding: binding,
        });
        tracing::info!("presenting {} slides from {}", deck.len(), deck.current_index());
        true
    }

    pub fn exit(&mut self) {
        if self.is_presenting() {
            tracing::info!("presentation ended");
        }
        self.mode = Mode::Browsing;
    }

    pub fn next(&self, deck: &mut Deck) {
        if self.is_presenting() {
            deck.select_next();
        }
    }

    pub fn prev(&self, deck: &mut Deck) {
        if self.is_presenting() {
            deck.select_prev();
        }
    }

    pub fn handle_key(&mut self, key: Key, deck: &mut Deck) -> KeyOutcome {
        match self.bindings.dispatch(key) {
            Some(NavCommand::Next) => {
                self.next(deck);
                KeyOutcome::Navigated
            }
            Some(NavCommand::Prev) => {
                self.prev(deck);
                KeyOutcome::Navigated
            }
            Some(NavCommand::Exit) => {
                self.exit();
                KeyOutcome::Exited
            }
            None => KeyOutcome::Ignored,
        }
    }

    /// The slide on screen, or `None` when browsing or the deck emptied out.
    pub fn current_slide<'a>(&self, deck: &'a Deck) -> Option<&'a Slide> {
        if self.is_presenting() {
            deck.current()
        } else {
            None
        }
    }

    /// One-based position and total, for the progress display.
    pub fn progress(&self, deck: &Deck) -> Option<(usize, usize)> {
        self.current_slide(deck)
            .map(|_| (deck.current_index() + 1, deck.len()))
    }
}
