use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Player intent decoded from a key or a text token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub(crate) enum Command {
    Left,
    Right,
    Down,
    Rotate,
    Drop,
    Pause,
    Quit,
    Restart,
}

#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub(crate) enum InputError {
    #[display("unknown input `{input}`")]
    UnknownInput { input: String },
}

impl FromStr for Command {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let command = match s {
            "a" | "A" | "left" => Self::Left,
            "d" | "D" | "right" => Self::Right,
            "s" | "S" | "down" => Self::Down,
            "w" | "W" | "rotate" => Self::Rotate,
            " " | "drop" => Self::Drop,
            "p" | "P" | "pause" => Self::Pause,
            "q" | "Q" | "quit" => Self::Quit,
            "r" | "R" | "restart" => Self::Restart,
            _ => {
                return Err(InputError::UnknownInput {
                    input: s.to_owned(),
                });
            }
        };
        Ok(command)
    }
}

impl TryFrom<KeyEvent> for Command {
    type Error = InputError;

    fn try_from(key: KeyEvent) -> Result<Self, Self::Error> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Self::Quit);
        }
        match key.code {
            KeyCode::Left => Ok(Self::Left),
            KeyCode::Right => Ok(Self::Right),
            KeyCode::Down => Ok(Self::Down),
            KeyCode::Up => Ok(Self::Rotate),
            KeyCode::Char(c) => c.encode_utf8(&mut [0; 4]).parse(),
            code => Err(InputError::UnknownInput {
                input: format!("{code:?}"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Result<Command, InputError> {
        Command::try_from(KeyEvent::from(code))
    }

    #[test]
    fn test_tokens() {
        let cases = [
            (&["a", "A", "left"][..], Command::Left),
            (&["d", "D", "right"][..], Command::Right),
            (&["s", "S", "down"][..], Command::Down),
            (&["w", "W", "rotate"][..], Command::Rotate),
            (&[" ", "drop"][..], Command::Drop),
            (&["p", "P", "pause"][..], Command::Pause),
            (&["q", "Q", "quit"][..], Command::Quit),
            (&["r", "R", "restart"][..], Command::Restart),
        ];
        for (tokens, expected) in cases {
            for token in tokens {
                assert_eq!(token.parse::<Command>(), Ok(expected), "{token:?}");
            }
        }
    }

    #[test]
    fn test_unknown_tokens() {
        for token in ["x", "", "LEFT", "dd", "\n"] {
            assert_eq!(
                token.parse::<Command>(),
                Err(InputError::UnknownInput {
                    input: token.to_owned()
                })
            );
        }
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(key(KeyCode::Left), Ok(Command::Left));
        assert_eq!(key(KeyCode::Right), Ok(Command::Right));
        assert_eq!(key(KeyCode::Down), Ok(Command::Down));
        assert_eq!(key(KeyCode::Up), Ok(Command::Rotate));
    }

    #[test]
    fn test_character_keys() {
        assert_eq!(key(KeyCode::Char('A')), Ok(Command::Left));
        assert_eq!(key(KeyCode::Char('w')), Ok(Command::Rotate));
        assert_eq!(key(KeyCode::Char(' ')), Ok(Command::Drop));
        assert_eq!(key(KeyCode::Char('R')), Ok(Command::Restart));
        assert!(key(KeyCode::Char('z')).unwrap_err().is_unknown_input());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(Command::try_from(event), Ok(Command::Quit));
        assert!(key(KeyCode::Char('c')).is_err());
    }

    #[test]
    fn test_unmapped_keys() {
        for code in [KeyCode::Enter, KeyCode::Esc, KeyCode::F(1), KeyCode::Tab] {
            assert!(key(code).is_err());
        }
    }
}
