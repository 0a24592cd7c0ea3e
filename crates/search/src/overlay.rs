//! Keyboard and activation model of the search overlay.
//!
//! The host page owns the DOM. It forwards key presses to
//! [`SearchOverlay::handle_key`] and acts on the returned [`OverlayEvent`]:
//! showing or hiding the panel, moving the highlighted row, scrolling to an
//! in-page section or opening an external link.

use crate::{HitKind, SearchHit};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

/// Window features for external links.
pub const OPEN_FEATURES: &str = "noopener,noreferrer";

static URL_HOST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://(?:[^/?#@]*@)?([^/?#:]+)")
        .expect("host pattern is valid")
});

/// Keys the overlay reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
    ArrowDown,
    ArrowUp,
    Enter,
    Tab,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" => Key::Escape,
            "ArrowDown" => Key::ArrowDown,
            "ArrowUp" => Key::ArrowUp,
            "Enter" => Key::Enter,
            "Tab" => Key::Tab,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other,
                }
            }
        }
    }
}

/// A key press with its modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyEvent {
    /// Key press without modifiers.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
        }
    }

    /// Same key with Ctrl held.
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Same key with Cmd held.
    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    fn is_toggle_shortcut(&self) -> bool {
        (self.ctrl || self.meta) && self.key == Key::Char('k')
    }
}

/// How the host should follow an activated hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Activation {
    /// Scroll to an element on the current page
    ScrollTo { anchor: String, title: String },
    /// Open in a new window with [`OPEN_FEATURES`]
    OpenExternal {
        url: String,
        title: String,
        kind: HitKind,
    },
}

impl Activation {
    fn for_hit(hit: &SearchHit) -> Self {
        if hit.is_anchor() {
            Activation::ScrollTo {
                anchor: hit.url.clone(),
                title: hit.title.clone(),
            }
        } else {
            Activation::OpenExternal {
                url: hit.url.clone(),
                title: hit.title.clone(),
                kind: hit.kind,
            }
        }
    }

    /// Notice to show once the host has acted.
    ///
    /// `target_found` is only consulted for in-page anchors.
    pub fn notice(&self, target_found: bool) -> Notice {
        match self {
            Activation::ScrollTo { anchor, title } => {
                if target_found {
                    Notice::new(NoticeKind::Internal, format!("Navigerar till: {}", title))
                } else {
                    Notice::new(NoticeKind::Error, format!("Kunde inte hitta sektion: {}", anchor))
                }
            }
            Activation::OpenExternal { title, kind, .. } => {
                let notice_kind = match kind {
                    HitKind::Bible => NoticeKind::Bible,
                    HitKind::Website => NoticeKind::External,
                };
                Notice::new(notice_kind, format!("Öppnar: {}", title))
            }
        }
    }
}

/// Styling class of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Info,
    Internal,
    External,
    Bible,
    Error,
}

/// Transient message shown after navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Generic failure while following a hit.
    pub fn navigation_failed() -> Self {
        Self::new(NoticeKind::Error, "Ett fel uppstod vid navigering")
    }
}

/// What the host should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayEvent {
    /// Nothing to do; let the browser handle the key
    Ignored,
    Opened,
    Closed,
    /// Highlight the given row, or none
    SelectionChanged(Option<usize>),
    /// Follow a hit; the overlay is already closed
    Activated(Activation),
}

/// Open state, current results and highlighted row of the overlay.
#[derive(Debug, Clone, Default)]
pub struct SearchOverlay {
    open: bool,
    results: Vec<SearchHit>,
    selected: Option<usize>,
}

impl SearchOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open with an empty result list.
    pub fn open(&mut self) {
        self.open = true;
        self.results.clear();
        self.selected = None;
    }

    /// Close and forget results and selection.
    pub fn close(&mut self) {
        self.open = false;
        self.results.clear();
        self.selected = None;
    }

    /// Open when closed, close when open.
    pub fn toggle(&mut self) -> OverlayEvent {
        if self.open {
            self.close();
            OverlayEvent::Closed
        } else {
            self.open();
            OverlayEvent::Opened
        }
    }

    /// Replace the displayed results and highlight the first row.
    pub fn show_results(&mut self, results: Vec<SearchHit>) {
        self.selected = if results.is_empty() { None } else { Some(0) };
        self.results = results;
    }

    pub fn results(&self) -> &[SearchHit] {
        &self.results
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Set the highlighted row, e.g. on mouse hover.
    pub fn hover(&mut self, index: usize) -> OverlayEvent {
        if index >= self.results.len() {
            return OverlayEvent::Ignored;
        }
        self.selected = Some(index);
        OverlayEvent::SelectionChanged(self.selected)
    }

    /// React to a key press.
    pub fn handle_key(&mut self, event: KeyEvent) -> OverlayEvent {
        if event.is_toggle_shortcut() {
            return self.toggle();
        }
        if !self.open {
            return OverlayEvent::Ignored;
        }

        let len = self.results.len();
        match event.key {
            Key::Escape => {
                self.close();
                OverlayEvent::Closed
            }
            Key::ArrowDown => {
                // clamps at the last row; with no rows stays unselected
                let next = match self.selected {
                    None => 0,
                    Some(i) => i + 1,
                };
                self.selected = if len == 0 { None } else { Some(next.min(len - 1)) };
                OverlayEvent::SelectionChanged(self.selected)
            }
            Key::ArrowUp => {
                self.selected = match self.selected {
                    None | Some(0) => None,
                    Some(i) => Some(i - 1),
                };
                OverlayEvent::SelectionChanged(self.selected)
            }
            Key::Tab => {
                if len == 0 {
                    return OverlayEvent::Ignored;
                }
                let next = match self.selected {
                    None => 0,
                    Some(i) => (i + 1) % len,
                };
                self.selected = Some(next);
                OverlayEvent::SelectionChanged(self.selected)
            }
            Key::Enter => {
                let index = self.selected.filter(|i| *i < len).unwrap_or(0);
                self.activate(index)
                    .map(OverlayEvent::Activated)
                    .unwrap_or(OverlayEvent::Ignored)
            }
            Key::Char(_) | Key::Other => OverlayEvent::Ignored,
        }
    }

    /// Follow the hit at `index` and close the overlay.
    pub fn activate(&mut self, index: usize) -> Option<Activation> {
        let hit = self.results.get(index)?;
        let activation = Activation::for_hit(hit);
        debug!(index, url = %hit.url, "search result activated");
        self.close();
        Some(activation)
    }
}

/// Short label for a result's link line.
pub fn display_url(url: &str, kind: HitKind) -> String {
    if kind == HitKind::Bible {
        return "Svenska Reformationsbibeln - YouVersion".to_string();
    }
    if url.starts_with('#') {
        return format!("På denna sida {}", url);
    }

    if url.contains("bibel.se") {
        return "bibel.se".to_string();
    }
    if url.contains("bibelonline.se") {
        return "bibelonline.se".to_string();
    }
    if url.contains("youtube.com") {
        return "YouTube".to_string();
    }
    if url.contains("bible.com") {
        return "YouVersion".to_string();
    }

    URL_HOST
        .captures(url)
        .map(|caps| caps[1].to_lowercase())
        .unwrap_or_else(|| "Extern länk".to_string())
}
