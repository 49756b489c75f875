use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::config::AppConfig;
use crate::form::{Field, FieldValue, SignupForm, TextInput};
use crate::theme::Theme;
use crate::ui::layout::{Element, ScreenLayout};

/// Rows moved per mouse wheel notch
const WHEEL_STEP: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    Help,
}

pub struct App {
    pub form: SignupForm,
    pub inputs: Vec<TextInput>,
    pub focus: Element,
    pub popup: Popup,

    pub layout: ScreenLayout,
    pub scroll: u16,
    pub viewport_height: u16,

    pub config: AppConfig,
    pub theme: Theme,

    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let layout = ScreenLayout::new(config.terms_checkbox);
        let theme = Theme::load(&config.colors);

        Self {
            form: SignupForm::new(),
            inputs: TextInput::signup_inputs(),
            focus: Element::Input(Field::Name),
            popup: Popup::None,

            layout,
            scroll: 0,
            viewport_height: u16::MAX,

            config,
            theme,

            should_quit: false,
        }
    }

    pub fn input(&self, field: Field) -> Option<&TextInput> {
        self.inputs.iter().find(|i| i.field == field)
    }

    /// The input that currently has focus, if any
    pub fn focused_input(&self) -> Option<&TextInput> {
        match self.focus {
            Element::Input(field) => self.input(field),
            _ => None,
        }
    }

    /// Record the visible height of the scroll container
    pub fn set_viewport(&mut self, height: u16) {
        if height != self.viewport_height {
            self.viewport_height = height;
            self.scroll = self.layout.reveal(self.focus, self.scroll, height);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c')
            && key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::ALT)
        {
            self.should_quit = true;
            return;
        }

        if self.popup == Popup::Help {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Enter) {
                self.popup = Popup::None;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::F(1) => self.popup = Popup::Help,
            KeyCode::Tab | KeyCode::Down => self.set_focus(self.layout.next_focus(self.focus)),
            KeyCode::BackTab | KeyCode::Up => self.set_focus(self.layout.prev_focus(self.focus)),
            KeyCode::PageDown => self.scroll_by(self.viewport_height as i32 / 2),
            KeyCode::PageUp => self.scroll_by(-(self.viewport_height as i32 / 2)),
            _ => self.handle_focused_key(key),
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_STEP as i32),
            MouseEventKind::ScrollUp => self.scroll_by(-(WHEEL_STEP as i32)),
            _ => {}
        }
    }

    fn handle_focused_key(&mut self, key: KeyEvent) {
        match self.focus {
            Element::Input(field) => {
                if key.code == KeyCode::Enter {
                    self.set_focus(self.layout.next_focus(self.focus));
                    return;
                }
                let value = self.form.text(field).unwrap_or_default().to_string();
                let Some(input) = self.inputs.iter_mut().find(|i| i.field == field) else {
                    return;
                };
                if let Some(next) = input.handle_key(&value, key) {
                    self.form.update(field, next);
                }
                // Editing keeps the field on screen
                self.scroll = self.layout.reveal(self.focus, self.scroll, self.viewport_height);
            }
            Element::Terms => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                    let agreed = self.form.value(Field::AgreedToTerms) == FieldValue::Flag(true);
                    self.form.update(Field::AgreedToTerms, !agreed);
                }
            }
            Element::CreateButton => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                    tracing::debug!("Create Account pressed; no action attached");
                }
            }
            Element::LogIn => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                    tracing::debug!("Log in pressed; no action attached");
                }
            }
            Element::Title | Element::SocialIcons => {}
        }
    }

    fn set_focus(&mut self, element: Element) {
        self.focus = element;
        self.scroll = self.layout.reveal(element, self.scroll, self.viewport_height);
    }

    fn scroll_by(&mut self, delta: i32) {
        let max = self.layout.max_scroll(self.viewport_height) as i32;
        self.scroll = (self.scroll as i32 + delta).clamp(0, max) as u16;
    }
}
