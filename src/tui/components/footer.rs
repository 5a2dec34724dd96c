//! # Footer Component
//!
//! Two lines at the bottom of the screen: the copyright row with the site
//! links, and a status line. The status line shows the latest status message
//! when there is one, otherwise the key hints for the current screen.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;
use crate::tui::text;

const LINKS: [&str; 3] = ["About Us", "Contact", "Privacy Policy"];

pub struct Footer<'a> {
    pub year: i32,
    pub status_message: &'a str,
    pub hints: &'a str,
}

impl<'a> Footer<'a> {
    pub fn new(year: i32, status_message: &'a str, hints: &'a str) -> Self {
        Self {
            year,
            status_message,
            hints,
        }
    }

    pub fn copyright(&self) -> String {
        format!("© {} Guide. All rights reserved.", self.year)
    }
}

impl Component for Footer<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [copyright_area, status_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let dim = Style::default().fg(Color::DarkGray);
        frame.render_widget(Span::styled(self.copyright(), dim), copyright_area);

        let links = LINKS.join("  ·  ");
        let links_width = text::width(&links);
        let copyright_width = text::width(&self.copyright());
        if copyright_width + links_width + 2 <= copyright_area.width {
            let x = copyright_area.right() - links_width;
            frame.render_widget(
                Span::styled(links, Style::default().fg(Color::Gray)),
                Rect::new(x, copyright_area.y, links_width, 1),
            );
        }

        let status = if self.status_message.is_empty() {
            Span::styled(text::truncate(self.hints, status_area.width), dim)
        } else {
            Span::styled(
                text::truncate(self.status_message, status_area.width),
                Style::default().fg(Color::Yellow),
            )
        };
        frame.render_widget(Line::from(status), status_area);
    }
}
