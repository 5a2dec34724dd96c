//! Inline markdown → ratatui `Span` renderer.
//!
//! Guide text only uses inline emphasis (`**bold**`, `*italic*`, the odd
//! backtick), so this flattens a `pulldown_cmark` event stream into a single
//! run of styled spans. Block structure is ignored: paragraphs, list markers
//! and headings contribute their text and nothing else.

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Render `content` into owned spans on top of `base`.
pub fn render_inline(content: &str, base: Style) -> Vec<Span<'static>> {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);

    let mut w = Writer::new(base);
    for event in Parser::new_ext(content, opts) {
        w.handle(event);
    }
    w.spans
}

/// Same as [`render_inline`], wrapped in a `Line` behind `prefix`.
pub fn line_with_prefix(prefix: Vec<Span<'static>>, content: &str, base: Style) -> Line<'static> {
    let mut spans = prefix;
    spans.extend(render_inline(content, base));
    Line::from(spans)
}

/// The text with all markup removed. Used where only width matters.
pub fn plain(content: &str) -> String {
    render_inline(content, Style::default())
        .into_iter()
        .map(|s| s.content.into_owned())
        .collect()
}

struct Writer {
    spans: Vec<Span<'static>>,
    base: Style,
    /// Inline style stack. Styles compose via `patch`, so nested bold+italic works.
    styles: Vec<Style>,
}

impl Writer {
    fn new(base: Style) -> Self {
        Self {
            spans: vec![],
            base,
            styles: vec![],
        }
    }

    fn style(&self) -> Style {
        self.styles.last().copied().unwrap_or(self.base)
    }

    fn push_style(&mut self, overlay: Style) {
        self.styles.push(self.style().patch(overlay));
    }

    fn pop_style(&mut self) {
        self.styles.pop();
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(tag) => self.close(tag),
            Event::Text(t) => self.text(t),
            Event::Code(c) => {
                let style = Style::default().fg(Color::White).bg(Color::DarkGray);
                self.spans.push(Span::styled(c.to_string(), style));
            }
            Event::SoftBreak | Event::HardBreak => self.spans.push(Span::raw(" ")),
            _ => {}
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Emphasis => self.push_style(Style::default().add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.push_style(Style::default().add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => {
                self.push_style(Style::default().add_modifier(Modifier::CROSSED_OUT))
            }
            _ => {}
        }
    }

    fn close(&mut self, tag: TagEnd) {
        if matches!(tag, TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough) {
            self.pop_style();
        }
    }

    fn text(&mut self, cow: CowStr<'_>) {
        // ratatui renders \t as zero-width
        let text = cow.replace('\t', "    ");
        let style = self.style();
        self.spans.push(Span::styled(text, style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(spans: &[Span<'_>]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn bold_text_is_bold() {
        let spans = render_inline("**ALWAYS** negotiate first", Style::default());
        let bold = spans.iter().find(|s| s.content == "ALWAYS").unwrap();
        assert!(bold.style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(joined(&spans), "ALWAYS negotiate first");
    }

    #[test]
    fn nested_emphasis_composes() {
        let spans = render_inline("***both***", Style::default());
        let span = spans.iter().find(|s| s.content == "both").unwrap();
        assert!(span.style.add_modifier.contains(Modifier::BOLD));
        assert!(span.style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn plain_text_uses_base_style() {
        let base = Style::default().fg(Color::Green);
        let spans = render_inline("hello", base);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].style.fg, Some(Color::Green));
    }

    #[test]
    fn strip_markup() {
        assert_eq!(plain("**CRITICAL TIP**"), "CRITICAL TIP");
        assert_eq!(plain("the price *before* you get in"), "the price before you get in");
    }

    #[test]
    fn prefix_comes_first() {
        let line = line_with_prefix(vec![Span::raw("▸ ")], "Keep your *ticket*", Style::default());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "▸ Keep your ticket");
    }

    #[test]
    fn non_ascii_passes_through() {
        assert_eq!(plain("costing 25元 (检票口)"), "costing 25元 (检票口)");
    }
}
