//! Single-line text entry for the form steps.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const CURSOR: char = '│';

/// A text input field with cursor support. The cursor counts characters,
/// not bytes.
#[derive(Debug, Clone)]
pub struct InputField {
    value: String,
    cursor: usize,
    /// Shown dimmed while the field is empty.
    pub placeholder: String,
    /// Optional cap on the number of characters.
    pub max_chars: Option<usize>,
}

impl InputField {
    pub fn new(placeholder: &str) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            placeholder: placeholder.to_string(),
            max_chars: None,
        }
    }

    pub fn with_max_chars(mut self, max: usize) -> Self {
        self.max_chars = Some(max);
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.len();
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_at(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Apply an editing key. Returns true when the value changed; cursor-only
    /// moves return false.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('a') if ctrl => {
                self.cursor = 0;
                false
            }
            KeyCode::Char('e') if ctrl => {
                self.cursor = self.len();
                false
            }
            KeyCode::Char('u') if ctrl => {
                let changed = !self.value.is_empty();
                self.value.clear();
                self.cursor = 0;
                changed
            }
            KeyCode::Char(_) if ctrl => false,
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.delete_char_backward(),
            KeyCode::Delete => self.delete_char_forward(),
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.len());
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.len();
                false
            }
            _ => false,
        }
    }

    fn insert_char(&mut self, c: char) -> bool {
        if self.max_chars.is_some_and(|max| self.len() >= max) {
            return false;
        }
        let at = self.byte_at(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
        true
    }

    fn delete_char_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_at(self.cursor);
        self.value.remove(at);
        true
    }

    fn delete_char_forward(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let at = self.byte_at(self.cursor);
        self.value.remove(at);
        true
    }

    /// Text for rendering: the value with a cursor bar when focused, or the
    /// placeholder when empty and unfocused.
    pub fn display(&self, focused: bool) -> String {
        if !focused {
            if self.value.is_empty() {
                return self.placeholder.clone();
            }
            return self.value.clone();
        }
        let mut shown = self.value.clone();
        shown.insert(self.byte_at(self.cursor), CURSOR);
        shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char(c))
        }
    }

    #[test]
    fn typing_and_backspace() {
        let mut field = InputField::new("Enter mobile number");
        for c in "98765".chars() {
            assert!(field.handle_key(key(KeyCode::Char(c))));
        }
        assert_eq!(field.value(), "98765");
        assert_eq!(field.cursor(), 5);

        assert!(field.handle_key(key(KeyCode::Backspace)));
        assert_eq!(field.value(), "9876");
        assert_eq!(field.cursor(), 4);
    }

    #[test]
    fn cursor_moves_do_not_change_value() {
        let mut field = InputField::new("");
        field.set_value("Mumbai");
        assert!(!field.handle_key(key(KeyCode::Home)));
        assert!(!field.handle_key(key(KeyCode::Left)));
        assert_eq!(field.cursor(), 0);
        assert!(field.handle_key(key(KeyCode::Delete)));
        assert_eq!(field.value(), "umbai");
        assert!(!field.handle_key(key(KeyCode::Backspace)));
    }

    #[test]
    fn insert_in_middle_with_multibyte() {
        let mut field = InputField::new("");
        field.set_value("Pue");
        field.handle_key(key(KeyCode::Left));
        field.handle_key(key(KeyCode::Char('ñ')));
        assert_eq!(field.value(), "Puñe");
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn max_chars_caps_input() {
        let mut field = InputField::new("").with_max_chars(2);
        assert!(field.handle_key(key(KeyCode::Char('4'))));
        assert!(field.handle_key(key(KeyCode::Char('0'))));
        assert!(!field.handle_key(key(KeyCode::Char('0'))));
        assert_eq!(field.value(), "40");
    }

    #[test]
    fn control_keys_edit_line() {
        let mut field = InputField::new("");
        field.set_value("Gupta");
        assert!(!field.handle_key(ctrl('a')));
        assert_eq!(field.cursor(), 0);
        assert!(!field.handle_key(ctrl('x')));
        assert!(field.handle_key(ctrl('u')));
        assert_eq!(field.value(), "");
    }

    #[test]
    fn display_shows_placeholder_or_cursor() {
        let mut field = InputField::new("e.g. Mumbai");
        assert_eq!(field.display(false), "e.g. Mumbai");
        assert_eq!(field.display(true), "│");
        field.set_value("Pune");
        assert_eq!(field.display(true), "Pune│");
        assert_eq!(field.display(false), "Pune");
    }
}
