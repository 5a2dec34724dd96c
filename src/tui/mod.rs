//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (cards of a grid still entering): draws every ~80ms.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.
//!
//! ## Presentation state
//!
//! `TuiState` holds everything the core doesn't care about: grid cursors,
//! detail scroll, hitboxes from the last frame and the entrance clock.
//! `TuiState::observe` keeps it in step with `App` after every update.

mod component;
mod components;
mod event;
pub mod icons;
mod link;
pub mod markdown;
mod text;
mod ui;

use log::{debug, info, warn};
use std::io::{self, IsTerminal, stdout};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Section, Selection};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    DetailEvent, DetailPaneState, Header, HeaderTarget, Reveal, SectionEvent, SectionState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const ANIMATION_TICK: Duration = Duration::from_millis(80);
const IDLE_TICK: Duration = Duration::from_millis(500);

/// The parts of `App` whose change restarts or resets presentation state.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ViewKey {
    section: Section,
    selection: Selection,
    country: Option<String>,
}

impl ViewKey {
    fn of(app: &App) -> Self {
        let country = match app.section {
            Section::Guides => app.guides.selected(),
            Section::Explore => app.explore.selected(),
            Section::Home | Section::Discover => None,
        };
        Self {
            section: app.section,
            selection: app.selection,
            country: country.map(str::to_string),
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states, one grid per section
    pub guides: SectionState,
    pub explore: SectionState,
    pub discover: SectionState,
    pub detail: DetailPaneState,
    // Header hitboxes from the last frame
    pub header_hitboxes: Vec<(Rect, HeaderTarget)>,
    // Entrance animation
    pub reveal: Reveal,
    pub reveal_started: Instant,
    last_view: ViewKey,
}

impl TuiState {
    pub fn new(app: &App, config: &ResolvedConfig) -> Self {
        Self {
            guides: SectionState::new(),
            explore: SectionState::new(),
            discover: SectionState::new(),
            detail: DetailPaneState::new(),
            header_hitboxes: Vec::new(),
            reveal: Reveal::new(config.animations, config.stagger_ms),
            reveal_started: Instant::now(),
            last_view: ViewKey::of(app),
        }
    }

    pub fn section_mut(&mut self, section: Section) -> Option<&mut SectionState> {
        match section {
            Section::Guides => Some(&mut self.guides),
            Section::Explore => Some(&mut self.explore),
            Section::Discover => Some(&mut self.discover),
            Section::Home => None,
        }
    }

    /// Bring presentation state in line with `app` after an update.
    ///
    /// - landing on a grid (new section, new country, back from a detail)
    ///   replays the entrance
    /// - a country change moves that grid's cursor back to the first card
    /// - opening a record scrolls the detail pane to the top
    pub fn observe(&mut self, app: &App) {
        let view = ViewKey::of(app);
        if view == self.last_view {
            return;
        }
        if view.selection.is_active() {
            if view.selection != self.last_view.selection {
                self.detail.reset_scroll();
            }
        } else {
            self.reveal_started = Instant::now();
            if view.section == self.last_view.section
                && view.country != self.last_view.country
                && let Some(state) = self.section_mut(view.section)
            {
                state.grid.reset();
            }
        }
        debug!("View changed: {:?} -> {:?}", self.last_view, view);
        self.last_view = view;
    }

    /// True while cards of the current grid are still entering.
    pub fn is_animating(&self, app: &App) -> bool {
        !app.is_detail_active()
            && !self
                .reveal
                .is_settled(ui::card_count(app), self.reveal_started.elapsed())
    }
}

/// Route one input event through the shell: translate it to an `Action`,
/// reduce it, and sync presentation state. Returns the effect to perform.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    let effect = match route(app, tui, event) {
        Some(action) => {
            debug!("Dispatching {:?}", action);
            update(app, action)
        }
        None => Effect::None,
    };
    tui.observe(app);
    effect
}

fn route(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::Resize => return None,
        TuiEvent::NextSection => return Some(Action::Navigate(app.section.next())),
        TuiEvent::PrevSection => return Some(Action::Navigate(app.section.prev())),
        TuiEvent::Jump(digit) => return header_action(HeaderTarget::from_shortcut(*digit)?),
        TuiEvent::MouseClick(column, row) => {
            if let Some(target) = Header::hit_test(&tui.header_hitboxes, *column, *row) {
                return header_action(target);
            }
        }
        _ => {}
    }

    // Detail pane has the main area to itself
    if app.is_detail_active() {
        return match tui.detail.handle_event(event)? {
            DetailEvent::Back => Some(Action::Back),
        };
    }

    let section = app.section;
    let section_event = tui.section_mut(section)?.handle_event(event)?;
    section_action(app, section, section_event)
}

fn header_action(target: HeaderTarget) -> Option<Action> {
    let action = target.action();
    if action.is_none() {
        debug!("{:?} has no destination", target);
    }
    action
}

fn section_action(app: &App, section: Section, event: SectionEvent) -> Option<Action> {
    match event {
        SectionEvent::SelectCountry(country) => Some(Action::SelectCountry(country.to_string())),
        SectionEvent::NextCountry => Some(Action::NextCountry),
        SectionEvent::PrevCountry => Some(Action::PrevCountry),
        SectionEvent::Open(index) => match section {
            Section::Guides => app
                .guides
                .visible()
                .get(index)
                .map(Action::SelectDestination),
            Section::Explore => app
                .explore
                .visible()
                .get(index)
                .map(Action::SelectTransport),
            Section::Discover => app.resources.get(index).map(Action::OpenResource),
            Section::Home => None,
        },
    }
}

/// Perform an effect. Returns true when the loop should stop.
fn apply_effect(app: &mut App, effect: Effect) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::OpenLink(url) => {
            if let Err(e) = link::open(url) {
                warn!("Failed to open {}: {}", url, e);
                app.status_message = format!("Could not open {url}: {e}");
            }
            false
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

/// Take over the terminal. Fails instead of panicking when there is no
/// interactive terminal to draw on.
fn mount() -> io::Result<DefaultTerminal> {
    if !stdout().is_terminal() {
        return Err(io::Error::other("stdout is not an interactive terminal"));
    }
    ratatui::try_init()
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let mut app = App::new(config.initial_section);
    let mut tui = TuiState::new(&app, &config);
    info!(
        "Starting on {} (animations: {}, stagger: {}ms)",
        app.section.tag(),
        config.animations,
        config.stagger_ms
    );

    let mut terminal = mount()?;
    let terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Mouse capture unavailable: {}", e);
            None
        }
    };

    let result = event_loop(&mut terminal, &mut app, &mut tui);

    drop(terminal_mode_guard);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, tui: &mut TuiState) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame
    let mut was_animating = false;

    loop {
        let animating = tui.is_animating(app);
        // One more frame after the last card lands
        if animating || was_animating {
            needs_redraw = true;
        }
        was_animating = animating;

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let timeout = if animating { ANIMATION_TICK } else { IDLE_TICK };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain everything pending before the next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let effect = handle_event(app, tui, &event);
            if apply_effect(app, effect) {
                info!("Quit requested");
                return Ok(());
            }
        }
    }
}
