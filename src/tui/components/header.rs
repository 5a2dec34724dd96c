//! # Header Component
//!
//! Top bar: the "Guide" logo, the navigation targets and the account buttons.
//!
//! ## Responsibilities
//!
//! - Highlight the nav target bound to the current section
//! - Record a hitbox per target so clicks can be resolved after the frame
//! - Map digit shortcuts to the same targets (`0` logo, `1`-`4` nav items)
//!
//! "Contact Us", "Log in" and "Sign Up" are drawn but go nowhere; they
//! resolve to a target with no action.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

use crate::core::action::Action;
use crate::core::state::Section;
use crate::tui::component::Component;
use crate::tui::components::cards::contains;
use crate::tui::text;

/// Something clickable in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderTarget {
    Logo,
    Nav(Section),
    ContactUs,
    LogIn,
    SignUp,
}

impl HeaderTarget {
    /// Nav items in display order, with their labels.
    pub const NAV: [(HeaderTarget, &'static str); 4] = [
        (HeaderTarget::Nav(Section::Guides), "Guide"),
        (HeaderTarget::Nav(Section::Explore), "Explore"),
        (HeaderTarget::ContactUs, "Contact Us"),
        (HeaderTarget::Nav(Section::Discover), "Discover"),
    ];

    /// Digit shortcut: `0` is the logo, `1`-`4` follow the nav order.
    pub fn from_shortcut(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(HeaderTarget::Logo),
            1..=4 => Some(Self::NAV[(digit - 1) as usize].0),
            _ => None,
        }
    }

    /// The shell action this target triggers, if any.
    pub fn action(self) -> Option<Action> {
        match self {
            HeaderTarget::Logo => Some(Action::LogoClicked),
            HeaderTarget::Nav(section) => Some(Action::Navigate(section)),
            HeaderTarget::ContactUs | HeaderTarget::LogIn | HeaderTarget::SignUp => None,
        }
    }
}

pub struct Header<'a> {
    pub active: Section,
    pub hitboxes: &'a mut Vec<(Rect, HeaderTarget)>,
}

impl<'a> Header<'a> {
    pub fn new(active: Section, hitboxes: &'a mut Vec<(Rect, HeaderTarget)>) -> Self {
        Self { active, hitboxes }
    }

    pub fn hit_test(hitboxes: &[(Rect, HeaderTarget)], column: u16, row: u16) -> Option<HeaderTarget> {
        hitboxes
            .iter()
            .find(|(rect, _)| contains(*rect, column, row))
            .map(|(_, target)| *target)
    }
}

impl Component for Header<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.hitboxes.clear();

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 {
            return;
        }
        let y = inner.y + inner.height.saturating_sub(1) / 2;

        let mut spans = Vec::new();
        let mut x = inner.x;
        let push = |spans: &mut Vec<Span<'static>>, x: &mut u16, label: String, style: Style| {
            let w = text::width(&label);
            if *x + w > inner.right() {
                return None;
            }
            let rect = Rect::new(*x, y, w, 1);
            spans.push(Span::styled(label, style));
            *x += w;
            Some(rect)
        };

        let logo_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        if let Some(rect) = push(&mut spans, &mut x, " Guide ".into(), logo_style) {
            self.hitboxes.push((rect, HeaderTarget::Logo));
        }
        push(&mut spans, &mut x, "   ".into(), Style::default());

        for (i, (target, label)) in HeaderTarget::NAV.iter().enumerate() {
            let is_active = *target == HeaderTarget::Nav(self.active);
            let style = if is_active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::Gray)
            };
            let key = Span::styled(format!("{}", i + 1), Style::default().fg(Color::DarkGray));
            if x + 1 > inner.right() {
                break;
            }
            spans.push(key);
            x += 1;
            match push(&mut spans, &mut x, format!(" {label}  "), style) {
                Some(rect) => self.hitboxes.push((rect, *target)),
                None => break,
            }
        }

        frame.render_widget(Line::from(spans), Rect::new(inner.x, y, inner.width, 1));

        // Account buttons, right-aligned
        let login = " Log in ";
        let signup = " Sign Up ";
        let auth_width = text::width(login) + 1 + text::width(signup);
        if x + auth_width + 2 <= inner.right() {
            let login_x = inner.right() - auth_width;
            let signup_x = login_x + text::width(login) + 1;
            let login_rect = Rect::new(login_x, y, text::width(login), 1);
            let signup_rect = Rect::new(signup_x, y, text::width(signup), 1);
            frame.render_widget(
                Span::styled(login, Style::default().fg(Color::Gray)),
                login_rect,
            );
            frame.render_widget(
                Span::styled(signup, Style::default().fg(Color::Black).bg(Color::Yellow)),
                signup_rect,
            );
            self.hitboxes.push((login_rect, HeaderTarget::LogIn));
            self.hitboxes.push((signup_rect, HeaderTarget::SignUp));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(active: Section, width: u16) -> (String, Vec<(Rect, HeaderTarget)>, Terminal<TestBackend>) {
        let mut terminal = Terminal::new(TestBackend::new(width, 3)).unwrap();
        let mut hitboxes = Vec::new();
        terminal
            .draw(|f| {
                let area = f.area();
                Header::new(active, &mut hitboxes).render(f, area);
            })
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        (text, hitboxes, terminal)
    }

    #[test]
    fn shows_logo_nav_and_account_buttons() {
        let (text, hitboxes, _) = draw(Section::Guides, 100);
        for label in ["Guide", "Explore", "Contact Us", "Discover", "Log in", "Sign Up"] {
            assert!(text.contains(label), "missing {label}");
        }
        let targets: Vec<HeaderTarget> = hitboxes.iter().map(|(_, t)| *t).collect();
        assert_eq!(
            targets,
            [
                HeaderTarget::Logo,
                HeaderTarget::Nav(Section::Guides),
                HeaderTarget::Nav(Section::Explore),
                HeaderTarget::ContactUs,
                HeaderTarget::Nav(Section::Discover),
                HeaderTarget::LogIn,
                HeaderTarget::SignUp,
            ]
        );
    }

    #[test]
    fn active_section_is_highlighted() {
        let (_, hitboxes, terminal) = draw(Section::Explore, 100);
        let buffer = terminal.backend().buffer();
        let (explore, _) = hitboxes[2];
        let (guides, _) = hitboxes[1];
        assert_eq!(buffer[(explore.x + 1, explore.y)].fg, Color::Cyan);
        assert_eq!(buffer[(guides.x + 1, guides.y)].fg, Color::Gray);
    }

    #[test]
    fn home_highlights_no_nav_item() {
        let (_, hitboxes, terminal) = draw(Section::Home, 100);
        let buffer = terminal.backend().buffer();
        for (rect, target) in &hitboxes {
            if matches!(target, HeaderTarget::Nav(_)) {
                assert_ne!(buffer[(rect.x + 1, rect.y)].fg, Color::Cyan);
            }
        }
    }

    #[test]
    fn hit_test_resolves_clicks() {
        let (_, hitboxes, _) = draw(Section::Guides, 100);
        let (discover, _) = hitboxes[4];
        assert_eq!(
            Header::hit_test(&hitboxes, discover.x, discover.y),
            Some(HeaderTarget::Nav(Section::Discover))
        );
        assert_eq!(Header::hit_test(&hitboxes, 0, 2), None);
    }

    #[test]
    fn shortcuts_follow_nav_order() {
        assert_eq!(HeaderTarget::from_shortcut(0), Some(HeaderTarget::Logo));
        assert_eq!(
            HeaderTarget::from_shortcut(1),
            Some(HeaderTarget::Nav(Section::Guides))
        );
        assert_eq!(HeaderTarget::from_shortcut(3), Some(HeaderTarget::ContactUs));
        assert_eq!(
            HeaderTarget::from_shortcut(4),
            Some(HeaderTarget::Nav(Section::Discover))
        );
        assert_eq!(HeaderTarget::from_shortcut(9), None);
    }

    #[test]
    fn inert_targets_have_no_action() {
        assert_eq!(HeaderTarget::Logo.action(), Some(Action::LogoClicked));
        assert_eq!(
            HeaderTarget::Nav(Section::Explore).action(),
            Some(Action::Navigate(Section::Explore))
        );
        assert_eq!(HeaderTarget::ContactUs.action(), None);
        assert_eq!(HeaderTarget::LogIn.action(), None);
        assert_eq!(HeaderTarget::SignUp.action(), None);
    }
}
