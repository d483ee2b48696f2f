use crate::config::Config;
use crate::input::{handle_key, Action};
use crate::models::catalog::{Playthrough, CHARACTERS};
use crate::tracker::{CanTracker, SkinTracker};
use crate::ui::theme::{Theme, ThemeVariant};
use crate::ui::{can_view, confirm_popup, help, skin_view};
use crate::util::progress_store::{JsonFileStore, WriteMode};
use crate::util::user_state::UserState;
use anyhow::Result;
use crossterm::event::{self, Event, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use std::time::Duration;

// ── View / Popup enums ────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum ActiveView {
    Cans,
    Skins,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Popup {
    None,
    ConfirmReset,
    Error(String),
}

const POLL_TIMEOUT: Duration = Duration::from_millis(250);
const PAGE: i32 = 10;

// ── Skin window ───────────────────────────────────────────────────────

/// The secondary tracker window. Dropping it closes the window; a new one
/// starts with the default selection, an empty list and the filter off.
pub struct SkinWindow {
    pub tracker:       SkinTracker<JsonFileStore>,
    pub character_idx: usize,
    pub playthrough:   Playthrough,
    pub list_state:    ListState,
}

impl SkinWindow {
    fn new(tracker: SkinTracker<JsonFileStore>) -> Self {
        Self {
            tracker,
            character_idx: 0,
            playthrough:   Playthrough::NewGame,
            list_state:    ListState::default(),
        }
    }

    pub fn character(&self) -> &'static str {
        CHARACTERS[self.character_idx % CHARACTERS.len()]
    }
}

// ── App ───────────────────────────────────────────────────────────────

pub struct App {
    pub config: Config,

    // Theme
    pub theme:         Theme,
    pub theme_variant: ThemeVariant,

    // View routing
    pub active_view: ActiveView,
    pub popup:       Popup,
    pub show_help:   bool,

    // Can tracker (main window)
    pub cans:           CanTracker<JsonFileStore>,
    pub can_list_state: ListState,

    // Skin tracker (secondary window), None while closed
    pub skins: Option<SkinWindow>,

    // Inner list area of the last frame, for mouse hit-testing
    pub list_area: Option<Rect>,

    // "HH:MM:SS" of the last successful write
    pub last_saved: Option<String>,

    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, initial_theme: ThemeVariant) -> Result<Self> {
        let store = JsonFileStore::new(config.storage.can_progress_path(), WriteMode::Overwrite);
        let cans = CanTracker::open(store)?;

        let mut can_list_state = ListState::default();
        can_list_state.select(Some(0));

        Ok(Self {
            config,
            theme:         Theme::for_variant(initial_theme),
            theme_variant: initial_theme,
            active_view:   ActiveView::Cans,
            popup:         Popup::None,
            show_help:     false,
            cans,
            can_list_state,
            skins:         None,
            list_area:     None,
            last_saved:    None,
            should_quit:   false,
        })
    }

    // ── Main event loop ───────────────────────────────────────────────

    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut ratatui::Terminal<B>,
    ) -> Result<()> {
        loop {
            let show_help  = self.show_help;
            let popup      = self.popup.clone();
            let theme_snap = self.theme.clone();

            terminal.draw(|f| {
                match self.active_view {
                    ActiveView::Cans  => can_view::render(f, self),
                    ActiveView::Skins => skin_view::render(f, self),
                }
                if show_help {
                    help::render(f, &theme_snap);
                }
                if popup != Popup::None {
                    confirm_popup::render(f, &popup, &theme_snap);
                }
            })?;

            if event::poll(POLL_TIMEOUT)? {
                match event::read()? {
                    Event::Key(key) => {
                        let action = handle_key(key);
                        self.handle_action(action)?;
                    }
                    Event::Mouse(me) => match me.kind {
                        MouseEventKind::ScrollDown => self.handle_action(Action::SelectDown)?,
                        MouseEventKind::ScrollUp   => self.handle_action(Action::SelectUp)?,
                        MouseEventKind::Down(MouseButton::Left) => {
                            self.handle_mouse_click(me.column, me.row)?;
                        }
                        _ => {}
                    },
                    _ => {}
                }
            }

            if self.should_quit { break; }
        }
        Ok(())
    }

    // ── Action dispatch ───────────────────────────────────────────────

    /// Store failures propagate and end the session.
    pub fn handle_action(&mut self, action: Action) -> Result<()> {
        // Popups swallow everything except their own answers.
        match self.popup {
            Popup::ConfirmReset => {
                match action {
                    Action::Yes | Action::Toggle => {
                        self.popup = Popup::None;
                        if self.cans.reset_all(|| true)? {
                            self.mark_saved();
                            self.clamp_selection();
                        }
                    }
                    Action::No | Action::Back => {
                        self.popup = Popup::None;
                        self.cans.reset_all(|| false)?;
                    }
                    Action::Quit => self.should_quit = true,
                    _ => {}
                }
                return Ok(());
            }
            Popup::Error(_) => {
                match action {
                    Action::Quit => self.should_quit = true,
                    Action::None => {}
                    _ => self.popup = Popup::None,
                }
                return Ok(());
            }
            Popup::None => {}
        }

        if self.show_help {
            match action {
                Action::Quit => self.should_quit = true,
                Action::ShowHelp | Action::Back => self.show_help = false,
                _ => {}
            }
            return Ok(());
        }

        match action {
            Action::Quit => self.should_quit = true,

            Action::ShowHelp => self.show_help = true,

            Action::CycleTheme => {
                self.theme_variant = self.theme_variant.next();
                self.theme = Theme::for_variant(self.theme_variant);
                UserState { theme_name: self.theme_variant.name().to_string() }.save();
            }

            Action::SelectUp   => self.select_delta(-1),
            Action::SelectDown => self.select_delta(1),
            Action::PageUp     => self.select_delta(-PAGE),
            Action::PageDown   => self.select_delta(PAGE),
            Action::JumpTop    => self.select_delta(i32::MIN / 2),
            Action::JumpBottom => self.select_delta(i32::MAX / 2),

            Action::Toggle => self.toggle_selected()?,

            Action::ToggleFilter => {
                match self.active_view {
                    ActiveView::Cans => {
                        let on = !self.cans.show_uncollected_only();
                        self.cans.on_filter_change(on);
                    }
                    ActiveView::Skins => {
                        if let Some(w) = self.skins.as_mut() {
                            let on = !w.tracker.show_uncollected_only();
                            w.tracker.on_filter_change(on);
                        }
                    }
                }
                self.clamp_selection();
            }

            Action::Reset => {
                // Cans only; the skin tracker has no bulk reset.
                if self.active_view == ActiveView::Cans {
                    self.popup = Popup::ConfirmReset;
                }
            }

            Action::OpenSkins => {
                if self.active_view == ActiveView::Cans {
                    self.open_skins();
                }
            }

            Action::CyclePlaythrough => {
                if let (ActiveView::Skins, Some(w)) = (&self.active_view, self.skins.as_mut()) {
                    w.playthrough = w.playthrough.next();
                }
            }

            Action::CycleCharacter => {
                if let (ActiveView::Skins, Some(w)) = (&self.active_view, self.skins.as_mut()) {
                    w.character_idx = (w.character_idx + 1) % CHARACTERS.len();
                }
            }

            Action::LoadSkins => {
                if let (ActiveView::Skins, Some(w)) = (&self.active_view, self.skins.as_mut()) {
                    let character = w.character();
                    w.tracker.on_load_catalog(character, w.playthrough)?;
                    let first = if w.tracker.visible().is_empty() { None } else { Some(0) };
                    w.list_state = ListState::default();
                    w.list_state.select(first);
                }
            }

            Action::Back => {
                if self.active_view == ActiveView::Skins {
                    self.skins = None;
                    self.active_view = ActiveView::Cans;
                    log::debug!("skin tracker closed");
                }
            }

            Action::Yes | Action::No | Action::None => {}
        }
        Ok(())
    }

    fn open_skins(&mut self) {
        let storage = &self.config.storage;
        let store = JsonFileStore::new(storage.skin_progress_path(), WriteMode::Merge);
        match SkinTracker::open(&storage.skin_catalog_path(), store) {
            Ok(tracker) => {
                self.skins = Some(SkinWindow::new(tracker));
                self.active_view = ActiveView::Skins;
            }
            Err(e) => {
                log::error!("cannot open skin tracker: {:#}", e);
                self.popup = Popup::Error(format!("{:#}", e));
            }
        }
    }

    // ── Selection ─────────────────────────────────────────────────────

    /// Catalog indices of the rows on screen, plus the list state that
    /// selects among them.
    fn active_rows(&mut self) -> Option<(Vec<usize>, &mut ListState)> {
        match self.active_view {
            ActiveView::Cans => Some((self.cans.visible(), &mut self.can_list_state)),
            ActiveView::Skins => self
                .skins
                .as_mut()
                .map(|w| (w.tracker.visible(), &mut w.list_state)),
        }
    }

    fn select_delta(&mut self, delta: i32) {
        let Some((rows, state)) = self.active_rows() else { return };
        if rows.is_empty() {
            state.select(None);
            return;
        }
        let cur  = state.selected().unwrap_or(0) as i64;
        let next = (cur + delta as i64).clamp(0, rows.len() as i64 - 1) as usize;
        state.select(Some(next));
    }

    /// Keep the selection on a real row after the visible set shrank.
    fn clamp_selection(&mut self) {
        let Some((rows, state)) = self.active_rows() else { return };
        match (rows.len(), state.selected()) {
            (0, _)                      => state.select(None),
            (n, Some(cur)) if cur >= n  => state.select(Some(n - 1)),
            (_, None)                   => state.select(Some(0)),
            _ => {}
        }
    }

    fn toggle_selected(&mut self) -> Result<()> {
        match self.active_view {
            ActiveView::Cans => {
                let rows = self.cans.visible();
                let picked = self.can_list_state.selected()
                    .and_then(|r| rows.get(r))
                    .and_then(|&idx| {
                        let list = self.cans.list();
                        list.item(idx).map(|name| (name.clone(), !list.is_collected(idx)))
                    });
                if let Some((name, collected)) = picked {
                    self.cans.on_toggle(&name, collected)?;
                    self.mark_saved();
                }
            }
            ActiveView::Skins => {
                if let Some(w) = self.skins.as_mut() {
                    let rows = w.tracker.visible();
                    if let Some(&idx) = w.list_state.selected().and_then(|r| rows.get(r)) {
                        let collected = !w.tracker.list().is_collected(idx);
                        w.tracker.on_toggle(idx, collected)?;
                        self.mark_saved();
                    }
                }
            }
        }
        self.clamp_selection();
        Ok(())
    }

    fn mark_saved(&mut self) {
        self.last_saved = Some(chrono::Local::now().format("%H:%M:%S").to_string());
    }

    // ── Mouse click handling ──────────────────────────────────────────

    fn handle_mouse_click(&mut self, _col: u16, row: u16) -> Result<()> {
        if self.popup != Popup::None || self.show_help { return Ok(()); }
        let Some(area) = self.list_area else { return Ok(()) };
        if row < area.y || row >= area.y + area.height { return Ok(()); }

        let rel = (row - area.y) as usize;
        let Some((rows, state)) = self.active_rows() else { return Ok(()) };
        let idx = rel + state.offset();
        if idx >= rows.len() { return Ok(()); }

        // Clicking the selected row flips its checkbox
        let already_selected = state.selected() == Some(idx);
        state.select(Some(idx));
        if already_selected {
            self.toggle_selected()?;
        }
        Ok(())
    }
}
