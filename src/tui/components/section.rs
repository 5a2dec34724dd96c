//! # Section View
//!
//! Page title, optional country selector and card grid for one browsable
//! section. The filter itself lives in core (`CountryFilter`); this view only
//! draws it and turns input into `SectionEvent`s for the event loop.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SectionState` lives in `TuiState`, one per section
//! - `SectionView` is created each frame with the visible cards

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::cards::{Card, CardGrid, CardGridState, contains};
use crate::tui::components::country_selector::CountrySelector;
use crate::tui::event::TuiEvent;

/// Events a section view sends up to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionEvent {
    SelectCountry(&'static str),
    NextCountry,
    PrevCountry,
    /// Open the card at this index of the visible list.
    Open(usize),
}

#[derive(Debug, Default)]
pub struct SectionState {
    pub grid: CardGridState,
    pub country_hitboxes: Vec<(Rect, &'static str)>,
}

impl SectionState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for SectionState {
    type Event = SectionEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::NextCountry => Some(SectionEvent::NextCountry),
            TuiEvent::PrevCountry => Some(SectionEvent::PrevCountry),
            TuiEvent::MouseClick(column, row) => {
                if let Some((_, country)) = self
                    .country_hitboxes
                    .iter()
                    .find(|(rect, _)| contains(*rect, *column, *row))
                {
                    return Some(SectionEvent::SelectCountry(*country));
                }
                self.grid.handle_event(event).map(SectionEvent::Open)
            }
            _ => self.grid.handle_event(event).map(SectionEvent::Open),
        }
    }
}

/// Country row props: every selectable country plus the active one.
pub struct CountryRow<'a> {
    pub countries: Vec<&'static str>,
    pub selected: Option<&'a str>,
}

pub struct SectionView<'a> {
    pub state: &'a mut SectionState,
    pub title: &'static str,
    pub countries: Option<CountryRow<'a>>,
    pub cards: &'a [Card],
    pub revealed: usize,
}

impl<'a> SectionView<'a> {
    pub fn new(
        state: &'a mut SectionState,
        title: &'static str,
        countries: Option<CountryRow<'a>>,
        cards: &'a [Card],
        revealed: usize,
    ) -> Self {
        Self {
            state,
            title,
            countries,
            cards,
            revealed,
        }
    }
}

impl Component for SectionView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let selector_height = if self.countries.is_some() { 2 } else { 0 };
        let [title_area, selector_area, grid_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(selector_height),
            Constraint::Min(0),
        ])
        .areas(area);

        frame.render_widget(
            Span::styled(
                self.title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ),
            Rect::new(title_area.x, title_area.y, title_area.width, title_area.height.min(1)),
        );

        match &self.countries {
            Some(row) => {
                CountrySelector::new(&row.countries, row.selected, &mut self.state.country_hitboxes)
                    .render(frame, selector_area);
            }
            None => self.state.country_hitboxes.clear(),
        }

        CardGrid::new(&mut self.state.grid, self.cards, self.revealed).render(frame, grid_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::TRANSPORTATION;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_japan(state: &mut SectionState) -> String {
        let cards: Vec<Card> = TRANSPORTATION
            .entries_for("Japan")
            .iter()
            .map(Card::transport)
            .collect();
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                let row = CountryRow {
                    countries: TRANSPORTATION.countries(),
                    selected: Some("Japan"),
                };
                SectionView::new(state, "Transportation Guides", Some(row), &cards, cards.len())
                    .render(f, area);
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn renders_title_countries_and_cards() {
        let mut state = SectionState::new();
        let text = render_japan(&mut state);
        assert!(text.contains("Transportation Guides"));
        assert!(text.contains("France"));
        assert!(text.contains("Shinkansen") || text.contains("JR Pass"));
        assert_eq!(state.country_hitboxes.len(), 5);
        assert!(!state.grid.hitboxes.is_empty());
    }

    #[test]
    fn country_click_wins_over_cards() {
        let mut state = SectionState::new();
        render_japan(&mut state);
        let (rect, country) = state.country_hitboxes[3];
        let event = state.handle_event(&TuiEvent::MouseClick(rect.x, rect.y));
        assert_eq!(event, Some(SectionEvent::SelectCountry(country)));
        assert_eq!(country, "Italy");
    }

    #[test]
    fn card_click_opens_its_index() {
        let mut state = SectionState::new();
        render_japan(&mut state);
        let (rect, index) = state.grid.hitboxes[2];
        let event = state.handle_event(&TuiEvent::MouseClick(rect.x + 2, rect.y + 2));
        assert_eq!(event, Some(SectionEvent::Open(index)));
    }

    #[test]
    fn keys_map_to_filter_and_open_events() {
        let mut state = SectionState::new();
        render_japan(&mut state);
        assert_eq!(state.handle_event(&TuiEvent::NextCountry), Some(SectionEvent::NextCountry));
        assert_eq!(state.handle_event(&TuiEvent::PrevCountry), Some(SectionEvent::PrevCountry));
        state.handle_event(&TuiEvent::CursorRight);
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(SectionEvent::Open(1)));
    }
}
