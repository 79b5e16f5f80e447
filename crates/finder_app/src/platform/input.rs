use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use unicode_width::UnicodeWidthStr;

/// Rows scrolled by PageUp/PageDown.
const PAGE_ROWS: i32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// The search text changed to this value.
    Edited(String),
    CursorMoved,
    Scroll(i32),
    Quit,
    Ignored,
}

/// Cursor for the single-line search box. The text itself lives in the
/// query-string binding; this only tracks where edits go.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    /// Position in characters.
    cursor: usize,
}

impl InputState {
    pub fn at_end_of(text: &str) -> Self {
        Self {
            cursor: text.chars().count(),
        }
    }

    /// Display column of the cursor inside the box.
    pub fn cursor_column(&self, text: &str) -> u16 {
        let before = &text[..byte_index(text, self.cursor)];
        u16::try_from(before.width()).unwrap_or(u16::MAX)
    }

    pub fn handle_key(&mut self, text: &str, key: KeyEvent) -> InputAction {
        if key.kind == KeyEventKind::Release {
            return InputAction::Ignored;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let len = text.chars().count();
        self.cursor = self.cursor.min(len);

        match key.code {
            KeyCode::Esc => InputAction::Quit,
            KeyCode::Char('c') if ctrl => InputAction::Quit,
            KeyCode::Char('u') if ctrl => {
                self.cursor = 0;
                InputAction::Edited(String::new())
            }
            KeyCode::Char(ch) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                let mut next = text.to_string();
                next.insert(byte_index(text, self.cursor), ch);
                self.cursor += 1;
                InputAction::Edited(next)
            }
            KeyCode::Backspace if self.cursor > 0 => {
                let mut next = text.to_string();
                next.remove(byte_index(text, self.cursor - 1));
                self.cursor -= 1;
                InputAction::Edited(next)
            }
            KeyCode::Delete if self.cursor < len => {
                let mut next = text.to_string();
                next.remove(byte_index(text, self.cursor));
                InputAction::Edited(next)
            }
            KeyCode::Left if self.cursor > 0 => {
                self.cursor -= 1;
                InputAction::CursorMoved
            }
            KeyCode::Right if self.cursor < len => {
                self.cursor += 1;
                InputAction::CursorMoved
            }
            KeyCode::Home => {
                self.cursor = 0;
                InputAction::CursorMoved
            }
            KeyCode::End => {
                self.cursor = len;
                InputAction::CursorMoved
            }
            KeyCode::Up => InputAction::Scroll(-1),
            KeyCode::Down => InputAction::Scroll(1),
            KeyCode::PageUp => InputAction::Scroll(-PAGE_ROWS),
            KeyCode::PageDown => InputAction::Scroll(PAGE_ROWS),
            _ => InputAction::Ignored,
        }
    }
}

fn byte_index(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map_or(text.len(), |(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_all(text: &str) -> (InputState, String) {
        let mut input = InputState::default();
        let mut current = String::new();
        for ch in text.chars() {
            if let InputAction::Edited(next) = input.handle_key(&current, key(KeyCode::Char(ch))) {
                current = next;
            }
        }
        (input, current)
    }

    #[test]
    fn typing_appends_at_cursor() {
        let (input, text) = type_all("heat");
        assert_eq!(text, "heat");
        assert_eq!(input.cursor_column(&text), 4);
    }

    #[test]
    fn editing_in_the_middle_respects_multibyte_chars() {
        let (mut input, text) = type_all("amélie");
        assert_eq!(input.handle_key(&text, key(KeyCode::Left)), InputAction::CursorMoved);
        assert_eq!(input.handle_key(&text, key(KeyCode::Left)), InputAction::CursorMoved);
        assert_eq!(input.handle_key(&text, key(KeyCode::Left)), InputAction::CursorMoved);

        let edited = input.handle_key(&text, key(KeyCode::Backspace));
        assert_eq!(edited, InputAction::Edited("amlie".to_string()));
        assert_eq!(
            input.handle_key("amlie", key(KeyCode::Char('e'))),
            InputAction::Edited("amelie".to_string())
        );
    }

    #[test]
    fn delete_and_backspace_at_edges_are_ignored() {
        let mut input = InputState::at_end_of("abc");
        assert_eq!(input.handle_key("abc", key(KeyCode::Delete)), InputAction::Ignored);
        input.handle_key("abc", key(KeyCode::Home));
        assert_eq!(input.handle_key("abc", key(KeyCode::Backspace)), InputAction::Ignored);
        assert_eq!(
            input.handle_key("abc", key(KeyCode::Delete)),
            InputAction::Edited("bc".to_string())
        );
    }

    #[test]
    fn control_keys_clear_and_quit() {
        let mut input = InputState::at_end_of("batman");
        let clear = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(input.handle_key("batman", clear), InputAction::Edited(String::new()));
        assert_eq!(input.cursor_column(""), 0);

        let quit = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(input.handle_key("", quit), InputAction::Quit);
        assert_eq!(input.handle_key("", key(KeyCode::Esc)), InputAction::Quit);
    }

    #[test]
    fn navigation_keys_scroll_results() {
        let mut input = InputState::default();
        assert_eq!(input.handle_key("", key(KeyCode::Down)), InputAction::Scroll(1));
        assert_eq!(input.handle_key("", key(KeyCode::PageUp)), InputAction::Scroll(-10));
    }
}
