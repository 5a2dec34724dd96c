//! # Hero Component
//!
//! The home page: headline, subtitle and tag row in the middle, framed by
//! the hero image slots. A terminal can't show the photos, so each slot is a
//! box with the image's alt text.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::model::HeroImage;
use crate::tui::component::Component;
use crate::tui::text;

pub const TITLE: [&str; 2] = ["Explore The World", "Easily & Comfortably"];
pub const SUBTITLE: &str = "find the best destinations and plan your dream trip at the best prices, find the best destinations and plan your dream trip";
pub const TAGS: [&str; 6] = ["Waterfall", "Guide", "Staycation", "Hotel", "Destination", "Toure"];

/// Below this height the image slots are skipped.
const MIN_HEIGHT_FOR_IMAGES: u16 = 20;
const SLOT_HEIGHT: u16 = 5;
const TOP_ROW_SLOTS: usize = 3;

pub struct Hero<'a> {
    pub images: &'a [HeroImage],
}

impl<'a> Hero<'a> {
    pub fn new(images: &'a [HeroImage]) -> Self {
        Self { images }
    }

    fn content_lines(width: u16) -> Vec<Line<'static>> {
        let title_style = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        let mut lines: Vec<Line> = TITLE
            .iter()
            .map(|t| Line::from(Span::styled(*t, title_style)))
            .collect();
        lines.push(Line::default());

        let subtitle_width = width.min(72);
        for l in textwrap::wrap(SUBTITLE, text::wrap_options(subtitle_width)) {
            lines.push(Line::from(Span::styled(
                l.into_owned(),
                Style::default().fg(Color::Gray),
            )));
        }
        lines.push(Line::default());

        let tag_style = Style::default().fg(Color::Black).bg(Color::Cyan);
        let mut tags = Vec::new();
        for (i, tag) in TAGS.iter().enumerate() {
            if i > 0 {
                tags.push(Span::raw(" "));
            }
            tags.push(Span::styled(format!(" {tag} "), tag_style));
        }
        lines.push(Line::from(tags));
        lines
    }

    fn render_slots(frame: &mut Frame, area: Rect, images: &[HeroImage]) {
        if images.is_empty() || area.height == 0 {
            return;
        }
        let cells = Layout::horizontal(vec![Constraint::Fill(1); images.len()])
            .spacing(1)
            .split(area);
        for (image, cell) in images.iter().zip(cells.iter()) {
            let slot = Paragraph::new(image.alt)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(
                    Block::bordered()
                        .border_style(Style::default().fg(Color::DarkGray))
                        .title(Span::styled("▣", Style::default().fg(Color::Gray))),
                );
            frame.render_widget(slot, *cell);
        }
    }
}

impl Component for Hero<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = Self::content_lines(area.width);
        let content_height = lines.len() as u16;
        let show_images = area.height >= MIN_HEIGHT_FOR_IMAGES && !self.images.is_empty();
        let slot_height = if show_images { SLOT_HEIGHT } else { 0 };

        let [top, _, content, _, bottom] = Layout::vertical([
            Constraint::Length(slot_height),
            Constraint::Length(1),
            Constraint::Length(content_height),
            Constraint::Length(1),
            Constraint::Length(slot_height),
        ])
        .flex(Flex::Center)
        .areas(area);

        if show_images {
            let split = TOP_ROW_SLOTS.min(self.images.len());
            let (upper, lower) = self.images.split_at(split);
            Self::render_slots(frame, top, upper);
            Self::render_slots(frame, bottom, lower);
        }

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::HERO_IMAGES;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                Hero::new(HERO_IMAGES).render(f, area);
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn shows_headline_and_tags() {
        let text = draw(120, 30);
        assert!(text.contains("Explore The World"));
        assert!(text.contains("Easily & Comfortably"));
        for tag in TAGS {
            assert!(text.contains(tag), "missing tag {tag}");
        }
    }

    #[test]
    fn tall_terminal_shows_image_slots() {
        let text = draw(160, 30);
        assert_eq!(text.matches('▣').count(), HERO_IMAGES.len());
    }

    #[test]
    fn short_terminal_skips_image_slots() {
        let text = draw(120, 14);
        assert!(!text.contains('▣'));
        assert!(text.contains("Explore The World"));
    }
}
