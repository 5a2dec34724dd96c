//! # Icon Registry
//!
//! Maps every `IconTag` to a terminal glyph. The match is exhaustive, so a
//! record can't reference an icon the registry doesn't know about.

use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::model::IconTag;

/// Glyph for the detail pane's back button.
pub const BACK: &str = "←";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub symbol: &'static str,
    pub color: Color,
}

impl Glyph {
    pub fn span(self) -> Span<'static> {
        Span::styled(self.symbol, Style::default().fg(self.color))
    }
}

pub fn glyph(tag: IconTag) -> Glyph {
    let (symbol, color) = match tag {
        IconTag::Train => ("🚆", Color::Cyan),
        IconTag::Car => ("🚗", Color::Yellow),
        IconTag::Plane => ("✈", Color::LightBlue),
        IconTag::Bus => ("🚌", Color::LightYellow),
        IconTag::Boat => ("⛴", Color::Blue),
        IconTag::Bike => ("🚲", Color::Green),
        IconTag::Message => ("💬", Color::LightCyan),
        IconTag::Wallet => ("👛", Color::LightMagenta),
        IconTag::Book => ("📖", Color::LightRed),
        IconTag::Globe => ("🌐", Color::LightGreen),
    };
    Glyph { symbol, color }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{ResourceIcon, TransportIcon};

    #[test]
    fn plane_is_shared_between_enumerations() {
        assert_eq!(
            glyph(TransportIcon::Plane.into()),
            glyph(ResourceIcon::Plane.into())
        );
    }

    #[test]
    fn every_tag_has_a_visible_symbol() {
        let tags = [
            IconTag::Train,
            IconTag::Car,
            IconTag::Plane,
            IconTag::Bus,
            IconTag::Boat,
            IconTag::Bike,
            IconTag::Message,
            IconTag::Wallet,
            IconTag::Book,
            IconTag::Globe,
        ];
        for tag in tags {
            assert!(!glyph(tag).symbol.is_empty(), "{tag:?} has no symbol");
        }
    }
}
