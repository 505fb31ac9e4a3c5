use ratatui::{
    prelude::{Buffer, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::controller::SessionState;

/// Keys and the action they trigger.
pub(crate) type KeyBinding = (&'static [&'static str], &'static str);

const PLAYING: &[KeyBinding] = &[
    (&["←", "A"], "Left"),
    (&["→", "D"], "Right"),
    (&["↓", "S"], "Down"),
    (&["↑", "W"], "Rotate"),
    (&["Space"], "Drop"),
    (&["P"], "Pause"),
    (&["R"], "Restart"),
    (&["Q"], "Quit"),
];
const PAUSED: &[KeyBinding] = &[(&["P"], "Resume"), (&["R"], "Restart"), (&["Q"], "Quit")];
const GAME_OVER: &[KeyBinding] = &[(&["R"], "Restart"), (&["Q"], "Quit")];

const KEY_STYLE: Style = Style::new().fg(Color::Cyan);
const KEY_SEPARATOR_STYLE: Style = Style::new().fg(Color::DarkGray);
const DESCRIPTION_STYLE: Style = Style::new().fg(Color::White);
const ITEM_SEPARATOR_STYLE: Style = Style::new().fg(Color::DarkGray);

/// One-line help for the keys available in the current state.
#[derive(Debug)]
pub(crate) struct KeyBindingDisplay {
    bindings: &'static [KeyBinding],
}

impl KeyBindingDisplay {
    pub(crate) fn new(state: SessionState) -> Self {
        let bindings = match state {
            SessionState::Playing => PLAYING,
            SessionState::Paused => PAUSED,
            SessionState::GameOver => GAME_OVER,
        };
        Self { bindings }
    }
}

impl Widget for KeyBindingDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![];

        for (i, (keys, desc)) in self.bindings.iter().copied().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", ITEM_SEPARATOR_STYLE));
            }
            for (i, key) in keys.iter().copied().enumerate() {
                if i > 0 {
                    spans.push(Span::styled("/", KEY_SEPARATOR_STYLE));
                }
                spans.push(Span::styled(key, KEY_STYLE));
            }
            spans.push(Span::from(" "));
            spans.push(Span::styled(desc, DESCRIPTION_STYLE));
        }

        Line::from(spans).centered().render(area, buf);
    }
}
