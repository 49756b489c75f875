//! Controlled text inputs
//!
//! A [`TextInput`] never stores its text. It receives the current value from
//! the form, turns a key press into the next value, and hands that back so the
//! caller can route it through [`SignupForm::update`](super::SignupForm::update).
//! Only the cursor position lives here.

use std::cell::Cell;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthChar;

use super::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capitalize {
    None,
    Sentences,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyboard {
    Default,
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearButton {
    Never,
    WhileEditing,
}

/// Input behaviour requested from the platform.
///
/// `capitalize`, `autocorrect` and `keyboard` shape a soft keyboard. Terminal
/// keys arrive as literal characters, so here they are only surfaced as hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputTraits {
    pub capitalize: Capitalize,
    pub autocorrect: bool,
    pub keyboard: Keyboard,
    pub secure: bool,
    pub clear_button: ClearButton,
}

impl Default for InputTraits {
    fn default() -> Self {
        Self {
            capitalize: Capitalize::Sentences,
            autocorrect: true,
            keyboard: Keyboard::Default,
            secure: false,
            clear_button: ClearButton::Never,
        }
    }
}

impl InputTraits {
    /// Short descriptions for the info line
    pub fn hints(&self) -> Vec<&'static str> {
        let mut hints = Vec::new();
        if self.keyboard == Keyboard::Email {
            hints.push("email keyboard");
        }
        hints.push(match self.capitalize {
            Capitalize::None => "no auto-caps",
            Capitalize::Sentences => "auto-caps: sentences",
        });
        if !self.autocorrect {
            hints.push("autocorrect off");
        }
        if self.secure {
            hints.push("masked");
        }
        if self.clear_button == ClearButton::WhileEditing {
            hints.push("Ctrl+U clears");
        }
        hints
    }
}

#[derive(Debug, Clone)]
pub struct TextInput {
    pub field: Field,
    pub placeholder: &'static str,
    pub traits: InputTraits,
    cursor: usize,
    // First displayed character; adjusted while drawing
    offset: Cell<usize>,
}

impl TextInput {
    pub fn new(field: Field, placeholder: &'static str, traits: InputTraits) -> Self {
        Self {
            field,
            placeholder,
            traits,
            cursor: 0,
            offset: Cell::new(0),
        }
    }

    /// The four inputs of the account screen
    pub fn signup_inputs() -> Vec<TextInput> {
        let password = InputTraits {
            autocorrect: false,
            secure: true,
            clear_button: ClearButton::WhileEditing,
            ..InputTraits::default()
        };

        vec![
            TextInput::new(
                Field::Name,
                "Your name",
                InputTraits {
                    clear_button: ClearButton::WhileEditing,
                    ..InputTraits::default()
                },
            ),
            TextInput::new(
                Field::Email,
                "Enter email",
                InputTraits {
                    capitalize: Capitalize::None,
                    autocorrect: false,
                    keyboard: Keyboard::Email,
                    clear_button: ClearButton::WhileEditing,
                    ..InputTraits::default()
                },
            ),
            TextInput::new(Field::Password, "Enter password", password),
            TextInput::new(Field::ConfirmPassword, "Repeat password", password),
        ]
    }

    /// Cursor position in characters, clamped to `value`
    pub fn cursor(&self, value: &str) -> usize {
        self.cursor.min(value.chars().count())
    }

    /// Apply a key press to `value`. Returns the new value when the key edits
    /// the text, `None` when it only moves the cursor or is ignored.
    pub fn handle_key(&mut self, value: &str, key: KeyEvent) -> Option<String> {
        let len = value.chars().count();
        self.cursor = self.cursor.min(len);
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        // AltGr arrives as CONTROL | ALT on Windows
        let shortcut = ctrl && !alt;

        match key.code {
            KeyCode::Char('u') if shortcut => {
                if self.traits.clear_button == ClearButton::Never {
                    return None;
                }
                self.cursor = 0;
                Some(String::new())
            }
            KeyCode::Char('w') if shortcut => self.delete_word(value),
            KeyCode::Char('a') if shortcut => {
                self.cursor = 0;
                None
            }
            KeyCode::Char('e') if shortcut => {
                self.cursor = len;
                None
            }
            KeyCode::Char(c) if ctrl == alt => {
                let mut next = value.to_string();
                next.insert(byte_index(value, self.cursor), c);
                self.cursor += 1;
                Some(next)
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                self.cursor -= 1;
                Some(remove_char(value, self.cursor))
            }
            KeyCode::Delete => {
                if self.cursor >= len {
                    return None;
                }
                Some(remove_char(value, self.cursor))
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(len);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = len;
                None
            }
            _ => None,
        }
    }

    // Secure fields drop everything before the cursor so word boundaries
    // don't leak through.
    fn delete_word(&mut self, value: &str) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        let chars: Vec<char> = value.chars().collect();
        let mut start = self.cursor;
        if self.traits.secure {
            start = 0;
        } else {
            while start > 0 && chars[start - 1].is_whitespace() {
                start -= 1;
            }
            while start > 0 && !chars[start - 1].is_whitespace() {
                start -= 1;
            }
        }

        let next: String = chars[..start].iter().chain(&chars[self.cursor..]).collect();
        self.cursor = start;
        Some(next)
    }

    /// Text as drawn on screen
    pub fn display(&self, value: &str, mask: char) -> String {
        if self.traits.secure {
            mask.to_string().repeat(value.chars().count())
        } else {
            value.to_string()
        }
    }

    pub fn shows_clear_button(&self, value: &str, focused: bool) -> bool {
        match self.traits.clear_button {
            ClearButton::Never => false,
            ClearButton::WhileEditing => focused && !value.is_empty(),
        }
    }

    /// Lay out `value` in a field `width` cells wide. Returns the visible text
    /// and the cursor's column within it. The view only scrolls when the
    /// cursor would leave it.
    pub fn view(&self, value: &str, mask: char, width: usize) -> (String, usize) {
        let shown: Vec<char> = self.display(value, mask).chars().collect();
        let cursor = self.cursor(value);
        let cells = |range: &[char]| range.iter().map(|c| cell_width(*c)).sum::<usize>();

        let mut offset = self.offset.get().min(cursor);
        // Keep the cursor cell inside the window
        while offset < cursor && cells(&shown[offset..cursor]) + 1 > width {
            offset += 1;
        }
        // Pull text back in when there is room on the right
        while offset > 0 && cells(&shown[offset - 1..]) + 1 <= width {
            offset -= 1;
        }
        self.offset.set(offset);

        let mut used = 0;
        let visible: String = shown[offset..]
            .iter()
            .take_while(|c| {
                used += cell_width(**c);
                used <= width
            })
            .collect();
        (visible, cells(&shown[offset..cursor]))
    }
}

fn cell_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

fn byte_index(value: &str, char_idx: usize) -> usize {
    value
        .char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(value.len())
}

fn remove_char(value: &str, char_idx: usize) -> String {
    value
        .chars()
        .enumerate()
        .filter(|(i, _)| *i != char_idx)
        .map(|(_, c)| c)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Feed keys through the input the way the app does, returning the value
    fn type_keys(input: &mut TextInput, start: &str, keys: &[KeyEvent]) -> String {
        let mut value = start.to_string();
        for k in keys {
            if let Some(next) = input.handle_key(&value, *k) {
                value = next;
            }
        }
        value
    }

    fn chars(s: &str) -> Vec<KeyEvent> {
        s.chars().map(|c| key(KeyCode::Char(c))).collect()
    }

    fn name_input() -> TextInput {
        TextInput::signup_inputs().remove(0)
    }

    #[test]
    fn test_typed_characters_are_concatenated() {
        let mut input = name_input();
        let value = type_keys(&mut input, "", &chars("ali baba"));
        assert_eq!(value, "ali baba");
        assert_eq!(input.cursor(&value), 8);
    }

    #[test]
    fn test_shift_characters_insert() {
        let mut input = name_input();
        let shifted = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(input.handle_key("", shifted), Some("A".to_string()));
    }

    #[test]
    fn test_editing_in_the_middle() {
        let mut input = name_input();
        let mut keys = chars("Aii");
        keys.push(key(KeyCode::Left));
        keys.push(key(KeyCode::Backspace));
        keys.extend(chars("l"));
        let value = type_keys(&mut input, "", &keys);
        assert_eq!(value, "Ali");

        let value = type_keys(&mut input, &value, &[key(KeyCode::Home), key(KeyCode::Delete)]);
        assert_eq!(value, "li");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = name_input();
        let value = type_keys(&mut input, "", &chars("Zoë"));
        let value = type_keys(&mut input, &value, &[key(KeyCode::Left), key(KeyCode::Backspace)]);
        assert_eq!(value, "Zë");
    }

    #[test]
    fn test_clear_affordance() {
        let mut input = name_input();
        let value = type_keys(&mut input, "", &chars("Ali"));
        assert!(input.shows_clear_button(&value, true));
        assert!(!input.shows_clear_button(&value, false));

        let value = type_keys(&mut input, &value, &[ctrl('u')]);
        assert_eq!(value, "");
        assert!(!input.shows_clear_button(&value, true));

        let value = type_keys(&mut input, &value, &chars("Bo"));
        assert_eq!(value, "Bo");
    }

    #[test]
    fn test_clear_disabled_when_never() {
        let mut input = TextInput::new(Field::Name, "", InputTraits::default());
        assert_eq!(input.handle_key("abc", ctrl('u')), None);
        assert!(!input.shows_clear_button("abc", true));
    }

    #[test]
    fn test_cursor_keys_do_not_edit() {
        let mut input = name_input();
        for code in [KeyCode::Left, KeyCode::Right, KeyCode::Home, KeyCode::End, KeyCode::Up] {
            assert_eq!(input.handle_key("abc", key(code)), None);
        }
        assert_eq!(input.handle_key("", key(KeyCode::Backspace)), None);
    }

    #[test]
    fn test_delete_word() {
        let mut input = name_input();
        let value = type_keys(&mut input, "", &chars("Ada Love "));
        assert_eq!(type_keys(&mut input, &value, &[ctrl('w')]), "Ada ");

        let mut secret = TextInput::signup_inputs().remove(2);
        let value = type_keys(&mut secret, "", &chars("two words"));
        assert_eq!(type_keys(&mut secret, &value, &[ctrl('w')]), "");
    }

    #[test]
    fn test_password_always_masked() {
        let inputs = TextInput::signup_inputs();
        for input in &inputs[2..] {
            assert!(input.traits.secure);
            assert_eq!(input.display("pässword", '•'), "••••••••");
            assert_eq!(input.display("", '•'), "");
        }
        assert_eq!(inputs[1].display("me@x.io", '•'), "me@x.io");
    }

    #[test]
    fn test_email_traits() {
        let email = &TextInput::signup_inputs()[1];
        assert_eq!(email.traits.capitalize, Capitalize::None);
        assert!(!email.traits.autocorrect);
        assert_eq!(email.traits.keyboard, Keyboard::Email);
        assert!(email.traits.hints().contains(&"email keyboard"));
    }

    #[test]
    fn test_view_follows_cursor() {
        let mut input = name_input();
        let value = type_keys(&mut input, "", &chars("abcdefghij"));
        assert_eq!(input.view(&value, '•', 4), ("hij".to_string(), 3));
        assert_eq!(input.view(&value, '•', 20), ("abcdefghij".to_string(), 10));

        type_keys(&mut input, &value, &[key(KeyCode::Home)]);
        assert_eq!(input.view(&value, '•', 4), ("abcd".to_string(), 0));
    }

    #[test]
    fn test_view_holds_still_while_cursor_inside() {
        let mut input = name_input();
        let value = type_keys(&mut input, "", &chars(&"x".repeat(60)));
        let (_, col) = input.view(&value, '•', 10);
        assert_eq!(col, 9);

        type_keys(&mut input, &value, &[key(KeyCode::Left)]);
        let (_, col) = input.view(&value, '•', 10);
        assert_eq!(col, 8);
        for _ in 0..8 {
            type_keys(&mut input, &value, &[key(KeyCode::Left)]);
        }
        assert_eq!(input.view(&value, '•', 10).1, 0);

        // One more step left scrolls by exactly one character
        type_keys(&mut input, &value, &[key(KeyCode::Left)]);
        assert_eq!(input.view(&value, '•', 10).1, 0);
        assert_eq!(input.cursor(&value), 50);
    }

    #[test]
    fn test_view_measures_wide_characters() {
        let mut input = name_input();
        let value = type_keys(&mut input, "", &chars("一二三四五ab"));
        // 12 cells of text plus the cursor cell
        let (visible, col) = input.view(&value, '•', 8);
        assert_eq!(visible, "四五ab");
        assert_eq!(col, 6);

        let (visible, col) = input.view(&value, '•', 13);
        assert_eq!(visible, "一二三四五ab");
        assert_eq!(col, 12);
    }

    #[test]
    fn test_altgr_characters_insert() {
        let mut input = TextInput::signup_inputs().remove(1);
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        let value = type_keys(
            &mut input,
            "me",
            &[key(KeyCode::End), KeyEvent::new(KeyCode::Char('@'), altgr)],
        );
        assert_eq!(value, "me@");

        // Ctrl+Alt+U is a character, not the clear shortcut
        let value = type_keys(&mut input, &value, &[KeyEvent::new(KeyCode::Char('u'), altgr)]);
        assert_eq!(value, "me@u");

        // Plain Alt chords are still ignored
        let alt_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT);
        assert_eq!(input.handle_key(&value, alt_x), None);
    }
}
