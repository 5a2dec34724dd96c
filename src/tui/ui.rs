use chrono::{Datelike, Local};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin};

use crate::core::state::{App, Screen, Section};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    Card, CountryRow, DetailContent, DetailPane, Footer, Header, Hero, SectionView,
};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(3), Min(0), Length(2)]);
    let [header_area, main_area, footer_area] = layout.areas(frame.area());

    Header::new(app.section, &mut tui.header_hitboxes).render(frame, header_area);

    let main_area = main_area.inner(Margin::new(2, 1));
    let elapsed = tui.reveal_started.elapsed();
    let screen = app.screen();

    // A selected record wins over the section; `screen()` already resolved that.
    match screen {
        Screen::DestinationDetail(city) => {
            let content = DetailContent::destination(city);
            DetailPane::new(&mut tui.detail, &content).render(frame, main_area);
        }
        Screen::TransportDetail(option) => {
            let content = DetailContent::transport(option);
            DetailPane::new(&mut tui.detail, &content).render(frame, main_area);
        }
        Screen::Hero => Hero::new(app.hero_images).render(frame, main_area),
        Screen::Guides => {
            let cards: Vec<Card> = app.guides.visible().iter().map(Card::destination).collect();
            let revealed = tui.reveal.visible_count(cards.len(), elapsed);
            let row = CountryRow {
                countries: app.guides.countries(),
                selected: app.guides.selected(),
            };
            SectionView::new(
                &mut tui.guides,
                Section::Guides.page_title(),
                Some(row),
                &cards,
                revealed,
            )
            .render(frame, main_area);
        }
        Screen::Explore => {
            let cards: Vec<Card> = app.explore.visible().iter().map(Card::transport).collect();
            let revealed = tui.reveal.visible_count(cards.len(), elapsed);
            let row = CountryRow {
                countries: app.explore.countries(),
                selected: app.explore.selected(),
            };
            SectionView::new(
                &mut tui.explore,
                Section::Explore.page_title(),
                Some(row),
                &cards,
                revealed,
            )
            .render(frame, main_area);
        }
        Screen::Discover => {
            let cards: Vec<Card> = app.resources.iter().map(Card::resource).collect();
            let revealed = tui.reveal.visible_count(cards.len(), elapsed);
            SectionView::new(
                &mut tui.discover,
                Section::Discover.page_title(),
                None,
                &cards,
                revealed,
            )
            .render(frame, main_area);
        }
    }

    Footer::new(Local::now().year(), &app.status_message, key_hints(screen))
        .render(frame, footer_area);
}

/// Number of cards the current screen shows (0 for non-grid screens).
pub fn card_count(app: &App) -> usize {
    match app.screen() {
        Screen::Guides => app.guides.visible().len(),
        Screen::Explore => app.explore.visible().len(),
        Screen::Discover => app.resources.len(),
        Screen::Hero | Screen::DestinationDetail(_) | Screen::TransportDetail(_) => 0,
    }
}

pub fn key_hints(screen: Screen) -> &'static str {
    match screen {
        Screen::DestinationDetail(_) | Screen::TransportDetail(_) => {
            "Esc back · ↑↓ scroll · 0 home · q quit"
        }
        Screen::Guides | Screen::Explore => {
            "←↑↓→ move · Enter open · [ ] country · 1-4 / Tab sections · q quit"
        }
        Screen::Discover => "←↑↓→ move · Enter visit website · 1-4 / Tab sections · q quit",
        Screen::Hero => "1 Guide · 2 Explore · 4 Discover · Tab next · q quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{buffer_text, test_app, test_tui};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App, tui: &mut TuiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_draw_ui_guides() {
        let app = test_app();
        let mut tui = test_tui(&app);
        let text = render(&app, &mut tui);
        assert!(text.contains("City Guides"));
        assert!(text.contains("Beijing"));
        assert!(text.contains("All rights reserved."));
        assert!(text.contains("Enter open"));
    }

    #[test]
    fn test_draw_ui_every_section() {
        let mut app = test_app();
        let mut tui = test_tui(&app);
        for (section, marker) in [
            (Section::Home, "Explore The World"),
            (Section::Explore, "Transportation Guides"),
            (Section::Discover, "Useful Websites & Apps"),
        ] {
            update(&mut app, Action::Navigate(section));
            let text = render(&app, &mut tui);
            assert!(text.contains(marker), "{section:?} missing {marker}");
        }
    }

    #[test]
    fn detail_replaces_section_view() {
        let mut app = test_app();
        let mut tui = test_tui(&app);
        let cities = app.guides.visible();
        update(&mut app, Action::SelectDestination(&cities[1]));
        let text = render(&app, &mut tui);
        assert!(text.contains("Shanghai"));
        assert!(text.contains("Must-Try Foods"));
        assert!(!text.contains("City Guides"));
        assert!(text.contains("Esc back"));
    }

    #[test]
    fn tokyo_then_discover_renders() {
        let mut app = test_app();
        let mut tui = test_tui(&app);
        update(&mut app, Action::SelectCountry("Japan".into()));
        let tokyo = &app.guides.visible()[0];
        update(&mut app, Action::SelectDestination(tokyo));
        let text = render(&app, &mut tui);
        for highlight in tokyo.highlights {
            assert!(text.contains(highlight), "missing {highlight}");
        }
        assert!(text.contains("From Airport:"));
        assert!(text.contains("Within City:"));
        assert!(text.contains("Sushi"));

        update(&mut app, Action::Navigate(Section::Discover));
        let text = render(&app, &mut tui);
        for resource in app.resources {
            assert!(text.contains(resource.name), "missing {}", resource.name);
        }
    }

    #[test]
    fn status_message_shows_in_footer() {
        let mut app = test_app();
        let mut tui = test_tui(&app);
        app.status_message = "Opening Google Maps in your browser".into();
        let text = render(&app, &mut tui);
        assert!(text.contains("Opening Google Maps"));
    }

    #[test]
    fn card_count_follows_screen() {
        let mut app = test_app();
        assert_eq!(card_count(&app), 5); // China: five cities
        update(&mut app, Action::Navigate(Section::Discover));
        assert_eq!(card_count(&app), 5);
        update(&mut app, Action::Navigate(Section::Home));
        assert_eq!(card_count(&app), 0);
    }
}
