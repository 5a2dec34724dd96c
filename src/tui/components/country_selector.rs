//! # Country Selector
//!
//! One row of country buttons above a filtered grid. The active country is
//! highlighted; every drawn button leaves a hitbox for mouse selection.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;
use crate::tui::text;

const GAP: u16 = 1;
const HINT: &str = "[ ] switch";

pub struct CountrySelector<'a> {
    pub countries: &'a [&'static str],
    pub selected: Option<&'a str>,
    /// Filled during render with each button's rect.
    pub hitboxes: &'a mut Vec<(Rect, &'static str)>,
}

impl<'a> CountrySelector<'a> {
    pub fn new(
        countries: &'a [&'static str],
        selected: Option<&'a str>,
        hitboxes: &'a mut Vec<(Rect, &'static str)>,
    ) -> Self {
        Self {
            countries,
            selected,
            hitboxes,
        }
    }

    fn label(country: &str) -> String {
        format!(" {country} ")
    }
}

impl Component for CountrySelector<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.hitboxes.clear();
        if area.height == 0 {
            return;
        }

        let mut spans = Vec::new();
        let mut x = area.x;
        for &country in self.countries {
            let label = Self::label(country);
            let w = text::width(&label);
            if x + w > area.right() {
                break;
            }
            let style = if self.selected == Some(country) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray).bg(Color::DarkGray)
            };
            self.hitboxes.push((Rect::new(x, area.y, w, 1), country));
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" ".repeat(GAP as usize)));
            x += w + GAP;
        }

        let hint_width = text::width(HINT);
        if x + hint_width + 1 <= area.right() {
            spans.push(Span::styled(
                format!(" {HINT}"),
                Style::default().fg(Color::DarkGray),
            ));
        }

        frame.render_widget(Line::from(spans), Rect::new(area.x, area.y, area.width, 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    const COUNTRIES: [&str; 5] = ["China", "Japan", "Italy", "USA", "France"];

    #[test]
    fn draws_every_country_with_hitboxes() {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        let mut hitboxes = Vec::new();
        terminal
            .draw(|f| {
                let area = f.area();
                CountrySelector::new(&COUNTRIES, Some("Japan"), &mut hitboxes).render(f, area);
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        for country in COUNTRIES {
            assert!(text.contains(country), "missing {country}");
        }
        assert_eq!(hitboxes.len(), 5);
        assert_eq!(hitboxes[1].1, "Japan");
        // " China " is 7 wide, then a one-column gap
        assert_eq!(hitboxes[1].0.x, 8);
    }

    #[test]
    fn selected_country_is_highlighted() {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        let mut hitboxes = Vec::new();
        terminal
            .draw(|f| {
                let area = f.area();
                CountrySelector::new(&COUNTRIES, Some("Italy"), &mut hitboxes).render(f, area);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let italy = hitboxes[2].0;
        assert_eq!(buffer[(italy.x + 1, 0)].bg, Color::Yellow);
        let china = hitboxes[0].0;
        assert_eq!(buffer[(china.x + 1, 0)].bg, Color::DarkGray);
    }

    #[test]
    fn narrow_area_drops_overflowing_buttons() {
        let mut terminal = Terminal::new(TestBackend::new(16, 1)).unwrap();
        let mut hitboxes = Vec::new();
        terminal
            .draw(|f| {
                let area = f.area();
                CountrySelector::new(&COUNTRIES, None, &mut hitboxes).render(f, area);
            })
            .unwrap();
        assert_eq!(hitboxes.len(), 2);
    }
}
