//! # Card Grid Component
//!
//! Responsive grid of summary cards for the three browsable views.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CardGridState` lives in `TuiState` (cursor, row window, hitboxes)
//! - `CardGrid` is created each frame with the cards to show
//!
//! The column count is derived from the width of the last rendered frame and
//! kept in the state, so keyboard movement is spatial on the grid.
//!
//! ## Staggered entrance
//!
//! Card `i` appears `i × stagger` after the entrance clock starts. The clock
//! belongs to the caller; the grid only receives how many cards are revealed.

use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget};
use ratatui::Frame;

use crate::core::model::{Destination, ExternalResource, TransportOption};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::icons::{self, Glyph};
use crate::tui::text;

/// Narrowest a card may get before a column is dropped.
pub const CARD_MIN_WIDTH: u16 = 36;
pub const MAX_COLUMNS: usize = 3;
/// Border (2) + title (1) + body (3) + action (1).
pub const CARD_HEIGHT: u16 = 7;
const BODY_LINES: usize = 3;

/// Everything a card shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub icon: Option<Glyph>,
    pub title: &'static str,
    pub body: String,
    pub action: &'static str,
}

impl Card {
    pub fn destination(city: &Destination) -> Self {
        Self {
            icon: None,
            title: city.name,
            body: city.highlights.join(" · "),
            action: "View guide →",
        }
    }

    pub fn transport(option: &TransportOption) -> Self {
        Self {
            icon: Some(icons::glyph(option.icon.into())),
            title: option.name,
            body: option.description.to_string(),
            action: "Read more →",
        }
    }

    pub fn resource(resource: &ExternalResource) -> Self {
        Self {
            icon: Some(icons::glyph(resource.icon.into())),
            title: resource.name,
            body: resource.description.to_string(),
            action: "Visit Website ↗",
        }
    }
}

/// Entrance timing for a freshly shown grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub enabled: bool,
    pub stagger: Duration,
}

impl Reveal {
    pub fn new(enabled: bool, stagger_ms: u64) -> Self {
        Self {
            enabled,
            stagger: Duration::from_millis(stagger_ms),
        }
    }

    /// Delay before card `index` appears.
    pub fn delay(&self, index: usize) -> Duration {
        self.stagger.saturating_mul(index as u32)
    }

    /// How many of `total` cards are showing `elapsed` after the clock started.
    pub fn visible_count(&self, total: usize, elapsed: Duration) -> usize {
        if !self.enabled || self.stagger.is_zero() {
            return total;
        }
        (0..total).take_while(|&i| elapsed >= self.delay(i)).count()
    }

    pub fn is_settled(&self, total: usize, elapsed: Duration) -> bool {
        self.visible_count(total, elapsed) >= total
    }
}

/// Cursor and layout memory for one grid. Must be persisted in `TuiState`.
#[derive(Debug, Default)]
pub struct CardGridState {
    pub cursor: usize,
    /// Card count seen by the last render.
    pub len: usize,
    /// Column count of the last render (0 before the first frame).
    pub columns: usize,
    /// First row inside the viewport.
    pub first_row: usize,
    pub visible_rows: usize,
    /// Screen rects of the cards drawn last frame.
    pub hitboxes: Vec<(Rect, usize)>,
}

impl CardGridState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the first card, top row.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.first_row = 0;
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        self.hitboxes
            .iter()
            .find(|(rect, _)| contains(*rect, column, row))
            .map(|(_, index)| *index)
    }

    fn cols(&self) -> usize {
        self.columns.max(1)
    }

    fn move_horizontal(&mut self, forward: bool) {
        if self.len == 0 {
            return;
        }
        self.cursor = if forward {
            (self.cursor + 1).min(self.len - 1)
        } else {
            self.cursor.saturating_sub(1)
        };
        self.scroll_to_cursor();
    }

    fn move_vertical(&mut self, down: bool) {
        if self.len == 0 {
            return;
        }
        let cols = self.cols();
        if down {
            let last_row = (self.len - 1) / cols;
            if self.cursor / cols < last_row {
                self.cursor = (self.cursor + cols).min(self.len - 1);
            }
        } else if self.cursor >= cols {
            self.cursor -= cols;
        }
        self.scroll_to_cursor();
    }

    fn total_rows(&self) -> usize {
        self.len.div_ceil(self.cols())
    }

    fn max_first_row(&self) -> usize {
        self.total_rows().saturating_sub(self.visible_rows.max(1))
    }

    /// Shift the row window so the cursor's row is on screen.
    fn scroll_to_cursor(&mut self) {
        let row = self.cursor / self.cols();
        let window = self.visible_rows.max(1);
        if row < self.first_row {
            self.first_row = row;
        } else if row >= self.first_row + window {
            self.first_row = row + 1 - window;
        }
    }
}

/// Grid events bubble up as the index of the card to open.
impl EventHandler for CardGridState {
    type Event = usize;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorLeft => self.move_horizontal(false),
            TuiEvent::CursorRight => self.move_horizontal(true),
            TuiEvent::CursorUp => self.move_vertical(false),
            TuiEvent::CursorDown => self.move_vertical(true),
            TuiEvent::Submit if self.cursor < self.len => return Some(self.cursor),
            TuiEvent::MouseClick(column, row) => {
                let index = self.hit_test(*column, *row)?;
                self.cursor = index;
                return Some(index);
            }
            TuiEvent::ScrollUp | TuiEvent::ScrollPageUp => {
                self.first_row = self.first_row.saturating_sub(1);
            }
            TuiEvent::ScrollDown | TuiEvent::ScrollPageDown => {
                self.first_row = (self.first_row + 1).min(self.max_first_row());
            }
            _ => {}
        }
        None
    }
}

/// Transient grid renderer. Created fresh each frame.
pub struct CardGrid<'a> {
    pub state: &'a mut CardGridState,
    pub cards: &'a [Card],
    /// Cards past this index are still waiting for their entrance.
    pub revealed: usize,
    pub empty_notice: &'a str,
}

impl<'a> CardGrid<'a> {
    pub fn new(state: &'a mut CardGridState, cards: &'a [Card], revealed: usize) -> Self {
        Self {
            state,
            cards,
            revealed,
            empty_notice: "Nothing here yet for this country.",
        }
    }

    pub fn columns_for(width: u16) -> usize {
        ((width / CARD_MIN_WIDTH) as usize).clamp(1, MAX_COLUMNS)
    }
}

impl<'a> Component for CardGrid<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let state = &mut *self.state;
        state.hitboxes.clear();
        state.len = self.cards.len();
        state.columns = Self::columns_for(area.width);
        state.visible_rows = ((area.height / CARD_HEIGHT) as usize).max(1);
        if state.cursor >= state.len {
            state.cursor = state.len.saturating_sub(1);
        }

        if self.cards.is_empty() {
            let notice = Paragraph::new(self.empty_notice)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(notice, area);
            return;
        }

        state.first_row = state.first_row.min(state.max_first_row());

        let cols = state.columns;
        let last_row = (state.first_row + state.visible_rows).min(state.total_rows());
        for row in state.first_row..last_row {
            let y = area.y + ((row - state.first_row) as u16) * CARD_HEIGHT;
            let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
            if height == 0 {
                break;
            }
            let row_area = Rect::new(area.x, y, area.width, height);
            let cells = Layout::horizontal(vec![Constraint::Fill(1); cols]).split(row_area);

            for (col, cell) in cells.iter().enumerate() {
                let index = row * cols + col;
                if index >= self.cards.len() {
                    break;
                }
                if index >= self.revealed {
                    continue;
                }
                let view = CardView {
                    card: &self.cards[index],
                    selected: index == state.cursor,
                };
                frame.render_widget(view, *cell);
                state.hitboxes.push((*cell, index));
            }
        }
    }
}

struct CardView<'a> {
    card: &'a Card,
    selected: bool,
}

impl Widget for CardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_style(border_style)
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);

        let [title_area, body_area, action_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let mut title = vec![];
        let mut title_width = inner.width;
        if let Some(icon) = self.card.icon {
            title_width = title_width.saturating_sub(text::width(icon.symbol) + 1);
            title.push(icon.span());
            title.push(Span::raw(" "));
        }
        let title_style = if self.selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        title.push(Span::styled(
            text::truncate(self.card.title, title_width),
            title_style,
        ));
        Line::from(title).render(title_area, buf);

        let max_lines = (body_area.height as usize).min(BODY_LINES);
        let body: Vec<Line> = text::wrap_clamped(&self.card.body, inner.width, max_lines)
            .into_iter()
            .map(Line::from)
            .collect();
        Paragraph::new(body)
            .style(Style::default().fg(Color::Gray))
            .render(body_area, buf);

        Line::from(Span::styled(self.card.action, Style::default().fg(Color::Cyan)))
            .render(action_area, buf);
    }
}

pub(crate) fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{DESTINATIONS, RESOURCES};
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn resource_cards() -> Vec<Card> {
        RESOURCES.iter().map(Card::resource).collect()
    }

    fn draw(state: &mut CardGridState, cards: &[Card], revealed: usize, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 30)).unwrap();
        terminal
            .draw(|f| {
            let area = f.area();
            CardGrid::new(state, cards, revealed).render(f, area);
        })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn reveal_delay_is_index_times_stagger() {
        let reveal = Reveal::new(true, 100);
        assert_eq!(reveal.delay(0), Duration::ZERO);
        assert_eq!(reveal.delay(3), Duration::from_millis(300));
        assert_eq!(reveal.visible_count(5, Duration::ZERO), 1);
        assert_eq!(reveal.visible_count(5, Duration::from_millis(250)), 3);
        assert_eq!(reveal.visible_count(5, Duration::from_secs(5)), 5);
        assert!(!reveal.is_settled(5, Duration::from_millis(399)));
        assert!(reveal.is_settled(5, Duration::from_millis(400)));
    }

    #[test]
    fn disabled_reveal_shows_everything() {
        let reveal = Reveal::new(false, 100);
        assert_eq!(reveal.visible_count(12, Duration::ZERO), 12);
        assert_eq!(Reveal::new(true, 0).visible_count(4, Duration::ZERO), 4);
    }

    #[test]
    fn columns_follow_width() {
        assert_eq!(CardGrid::columns_for(20), 1);
        assert_eq!(CardGrid::columns_for(80), 2);
        assert_eq!(CardGrid::columns_for(200), MAX_COLUMNS);
    }

    #[test]
    fn renders_all_revealed_cards() {
        let cards = resource_cards();
        let mut state = CardGridState::new();
        let text = draw(&mut state, &cards, cards.len(), 120);
        assert!(text.contains("Google Maps"));
        assert!(text.contains("A Good VPN"));
        assert!(text.contains("Visit Website"));
        assert_eq!(state.columns, 3);
        assert_eq!(state.hitboxes.len(), 5);
    }

    #[test]
    fn unrevealed_cards_are_not_drawn() {
        let cards = resource_cards();
        let mut state = CardGridState::new();
        let text = draw(&mut state, &cards, 2, 120);
        assert!(text.contains("Google Translate"));
        assert!(!text.contains("Trip.com"));
        assert_eq!(state.hitboxes.len(), 2);
    }

    #[test]
    fn empty_grid_shows_notice() {
        let mut state = CardGridState::new();
        let text = draw(&mut state, &[], 0, 80);
        assert!(text.contains("Nothing here yet"));
        assert!(state.hitboxes.is_empty());
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn cursor_moves_spatially() {
        let cards = resource_cards();
        let mut state = CardGridState::new();
        draw(&mut state, &cards, cards.len(), 120); // 3 columns, 2 rows

        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.cursor, 3);
        state.handle_event(&TuiEvent::CursorRight);
        state.handle_event(&TuiEvent::CursorRight);
        assert_eq!(state.cursor, 4);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.cursor, 1);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.cursor, 1);
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(1));
    }

    #[test]
    fn down_from_a_full_row_lands_on_the_short_row() {
        let cards = resource_cards();
        let mut state = CardGridState::new();
        draw(&mut state, &cards, cards.len(), 120);
        state.cursor = 2;
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.cursor, 4);
    }

    #[test]
    fn click_opens_the_card_under_the_mouse() {
        let cards = resource_cards();
        let mut state = CardGridState::new();
        draw(&mut state, &cards, cards.len(), 120);
        let (rect, index) = state.hitboxes[4];
        let opened = state.handle_event(&TuiEvent::MouseClick(rect.x + 1, rect.y + 1));
        assert_eq!(opened, Some(index));
        assert_eq!(state.cursor, 4);
        assert_eq!(state.handle_event(&TuiEvent::MouseClick(0, 29)), None);
    }

    #[test]
    fn cursor_row_is_kept_in_view() {
        let cards: Vec<Card> = DESTINATIONS.iter().map(Card::destination).collect();
        let mut state = CardGridState::new();
        let mut terminal = Terminal::new(TestBackend::new(40, CARD_HEIGHT * 2)).unwrap();
        let mut render = |state: &mut CardGridState| {
            terminal
                .draw(|f| {
                    let area = f.area();
                    CardGrid::new(state, &cards, cards.len()).render(f, area);
                })
                .unwrap();
            buffer_text(terminal.backend().buffer())
        };

        render(&mut state);
        assert_eq!(state.visible_rows, 2);
        for _ in 0..5 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        let text = render(&mut state);
        assert_eq!(state.cursor, 5);
        assert_eq!(state.first_row, 4);
        assert!(text.contains(cards[5].title));
        assert!(!text.contains(cards[0].title));
    }
}
