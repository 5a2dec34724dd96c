//! # Detail Pane Component
//!
//! Full record view for a city or a transportation option: a title row with
//! a back button, then titled sections of bullet lines inside a scrollable
//! card.
//!
//! ## Architecture
//!
//! `DetailPane` is a transient component (created each frame) that wraps
//! `&'a mut DetailPaneState` (persistent scroll + back hitbox) and a
//! `DetailContent` built from the selected record.
//!
//! Content height comes from `Paragraph::line_count`, so the scroll view is
//! sized to exactly what the wrapped text needs.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::model::{Destination, TransportOption};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::cards::contains;
use crate::tui::event::TuiEvent;
use crate::tui::icons::{self, Glyph};
use crate::tui::{markdown, text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailEvent {
    Back,
}

/// Scroll position and back-button location. Must be persisted in `TuiState`.
#[derive(Debug, Default)]
pub struct DetailPaneState {
    pub scroll_state: ScrollViewState,
    pub back_hitbox: Rect,
    /// Last known viewport/content heights (for scroll clamping between frames)
    pub viewport_height: u16,
    pub content_height: u16,
}

impl DetailPaneState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Top of the record. Called whenever a new record is opened.
    pub fn reset_scroll(&mut self) {
        self.scroll_state = ScrollViewState::default();
    }

    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl EventHandler for DetailPaneState {
    type Event = DetailEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Back => return Some(DetailEvent::Back),
            TuiEvent::MouseClick(column, row) if contains(self.back_hitbox, *column, *row) => {
                return Some(DetailEvent::Back);
            }
            TuiEvent::CursorUp | TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::CursorDown | TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        self.clamp_scroll();
        None
    }
}

/// One titled block of the detail card.
#[derive(Debug, Clone)]
pub struct DetailSection {
    pub heading: Line<'static>,
    pub lines: Vec<Line<'static>>,
}

/// Everything a detail pane shows, independent of which record it came from.
#[derive(Debug, Clone)]
pub struct DetailContent {
    pub icon: Option<Glyph>,
    pub title: &'static str,
    pub sections: Vec<DetailSection>,
}

fn heading(text: &str) -> Line<'static> {
    let style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    Line::from(markdown::render_inline(text, style))
}

fn bold(text: String) -> Span<'static> {
    Span::styled(text, Style::default().add_modifier(Modifier::BOLD))
}

impl DetailContent {
    pub fn destination(city: &Destination) -> Self {
        let body = Style::default();

        let highlights = city
            .highlights
            .iter()
            .map(|h| markdown::line_with_prefix(vec![Span::raw("✨ ")], h, body))
            .collect();

        let transport = vec![
            markdown::line_with_prefix(
                vec![bold("From Airport: ".into())],
                city.transportation.from_airport,
                body,
            ),
            markdown::line_with_prefix(
                vec![bold("Within City: ".into())],
                city.transportation.within_city,
                body,
            ),
        ];

        let foods = city
            .foods
            .iter()
            .map(|f| {
                let mut line = markdown::line_with_prefix(
                    vec![bold(format!("{}: ", f.dish))],
                    f.description,
                    body,
                );
                line.push_span(Span::styled(
                    format!(" (Try at: {})", f.recommended_venue),
                    Style::default().fg(Color::Gray),
                ));
                line
            })
            .collect();

        Self {
            icon: None,
            title: city.name,
            sections: vec![
                DetailSection {
                    heading: heading("Highlights"),
                    lines: highlights,
                },
                DetailSection {
                    heading: heading("Transportation"),
                    lines: transport,
                },
                DetailSection {
                    heading: heading("Must-Try Foods"),
                    lines: foods,
                },
            ],
        }
    }

    pub fn transport(option: &TransportOption) -> Self {
        let marker = Style::default().fg(Color::Cyan);
        let sections = option
            .details
            .iter()
            .map(|group| DetailSection {
                heading: heading(group.title),
                lines: group
                    .points
                    .iter()
                    .map(|p| {
                        markdown::line_with_prefix(
                            vec![Span::styled("▸ ", marker)],
                            p,
                            Style::default(),
                        )
                    })
                    .collect(),
            })
            .collect();

        Self {
            icon: Some(icons::glyph(option.icon.into())),
            title: option.name,
            sections,
        }
    }

    /// All lines in display order, a blank line between sections.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut out = Vec::new();
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                out.push(Line::default());
            }
            out.push(section.heading.clone());
            out.extend(section.lines.iter().cloned());
        }
        out
    }
}

pub struct DetailPane<'a> {
    pub state: &'a mut DetailPaneState,
    pub content: &'a DetailContent,
}

impl<'a> DetailPane<'a> {
    pub fn new(state: &'a mut DetailPaneState, content: &'a DetailContent) -> Self {
        Self { state, content }
    }
}

impl Component for DetailPane<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [title_area, body_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

        // Title row: back button, icon, record name
        let back_label = format!(" {} Back ", icons::BACK);
        self.state.back_hitbox = Rect::new(title_area.x, title_area.y, text::width(&back_label), 1)
            .intersection(title_area);
        let mut title = vec![
            Span::styled(back_label, Style::default().fg(Color::Black).bg(Color::Gray)),
            Span::raw(" "),
        ];
        if let Some(icon) = self.content.icon {
            title.push(icon.span());
            title.push(Span::raw(" "));
        }
        title.push(Span::styled(
            self.content.title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ));
        frame.render_widget(
            Line::from(title),
            Rect::new(title_area.x, title_area.y, title_area.width, title_area.height.min(1)),
        );

        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));
        let inner = block.inner(body_area);
        frame.render_widget(block, body_area);

        let content_width = inner.width.saturating_sub(1); // -1 for scrollbar safe area
        let paragraph = Paragraph::new(self.content.lines()).wrap(Wrap { trim: false });
        let content_height = paragraph.line_count(content_width).min(u16::MAX as usize) as u16;

        self.state.viewport_height = inner.height;
        self.state.content_height = content_height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, content_height));
        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}
