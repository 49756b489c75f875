//! Vertical placement of the screen's elements
//!
//! Positions are in content rows, independent of the terminal size. The app
//! uses them to keep the focused element in view, the renderer to draw.

use crate::form::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Title,
    Input(Field),
    Terms,
    CreateButton,
    SocialIcons,
    LogIn,
}

impl Element {
    pub fn is_focusable(self) -> bool {
        matches!(
            self,
            Element::Input(_) | Element::Terms | Element::CreateButton | Element::LogIn
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub element: Element,
    pub top: u16,
    pub height: u16,
}

impl Placement {
    pub fn bottom(&self) -> u16 {
        self.top + self.height
    }
}

pub const INPUT_HEIGHT: u16 = 3;
pub const BUTTON_HEIGHT: u16 = 3;

#[derive(Debug, Clone)]
pub struct ScreenLayout {
    placements: Vec<Placement>,
    content_height: u16,
}

impl ScreenLayout {
    pub fn new(show_terms: bool) -> Self {
        let mut placements = Vec::new();
        let mut y = 2;
        let mut place = |element, height, margin_after, y: &mut u16| {
            placements.push(Placement {
                element,
                top: *y,
                height,
            });
            *y += height + margin_after;
        };

        place(Element::Title, 1, 2, &mut y);
        for field in Field::TEXT_FIELDS {
            place(Element::Input(field), INPUT_HEIGHT, 1, &mut y);
        }
        if show_terms {
            place(Element::Terms, 1, 1, &mut y);
        }
        y += 1;
        place(Element::CreateButton, BUTTON_HEIGHT, 2, &mut y);
        place(Element::SocialIcons, 1, 2, &mut y);
        place(Element::LogIn, 1, 1, &mut y);

        Self {
            placements,
            content_height: y,
        }
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn placement(&self, element: Element) -> Option<&Placement> {
        self.placements.iter().find(|p| p.element == element)
    }

    pub fn content_height(&self) -> u16 {
        self.content_height
    }

    pub fn focus_order(&self) -> Vec<Element> {
        self.placements
            .iter()
            .map(|p| p.element)
            .filter(|e| e.is_focusable())
            .collect()
    }

    /// Next focus target after `current`, wrapping
    pub fn next_focus(&self, current: Element) -> Element {
        let order = self.focus_order();
        match order.iter().position(|e| *e == current) {
            Some(i) => order[(i + 1) % order.len()],
            None => order[0],
        }
    }

    /// Previous focus target before `current`, wrapping
    pub fn prev_focus(&self, current: Element) -> Element {
        let order = self.focus_order();
        match order.iter().position(|e| *e == current) {
            Some(0) | None => order[order.len() - 1],
            Some(i) => order[i - 1],
        }
    }

    pub fn max_scroll(&self, viewport: u16) -> u16 {
        self.content_height().saturating_sub(viewport)
    }

    /// Smallest change to `scroll` that puts `element` fully in view.
    /// Focusing the first field scrolls back to the top so the title shows.
    pub fn reveal(&self, element: Element, scroll: u16, viewport: u16) -> u16 {
        let Some(p) = self.placement(element) else {
            return scroll.min(self.max_scroll(viewport));
        };

        let scroll = if self.focus_order().first() == Some(&element) {
            0
        } else if p.top < scroll {
            p.top
        } else if p.bottom() > scroll.saturating_add(viewport) {
            p.bottom().saturating_sub(viewport)
        } else {
            scroll
        };
        scroll.min(self.max_scroll(viewport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_order() {
        let layout = ScreenLayout::new(false);
        let elements: Vec<Element> = layout.placements().iter().map(|p| p.element).collect();
        assert_eq!(
            elements,
            vec![
                Element::Title,
                Element::Input(Field::Name),
                Element::Input(Field::Email),
                Element::Input(Field::Password),
                Element::Input(Field::ConfirmPassword),
                Element::CreateButton,
                Element::SocialIcons,
                Element::LogIn,
            ]
        );
        assert!(layout.placement(Element::Terms).is_none());
    }

    #[test]
    fn test_placements_do_not_overlap() {
        for show_terms in [false, true] {
            let layout = ScreenLayout::new(show_terms);
            for pair in layout.placements().windows(2) {
                assert!(pair[0].bottom() <= pair[1].top);
            }
            let last = layout.placements().last().unwrap();
            assert!(last.bottom() <= layout.content_height());
        }
    }

    #[test]
    fn test_focus_wraps_and_skips_decorations() {
        let layout = ScreenLayout::new(false);
        assert_eq!(layout.next_focus(Element::CreateButton), Element::LogIn);
        assert_eq!(layout.next_focus(Element::LogIn), Element::Input(Field::Name));
        assert_eq!(layout.prev_focus(Element::Input(Field::Name)), Element::LogIn);
        assert!(!layout.focus_order().contains(&Element::SocialIcons));
        assert!(!layout.focus_order().contains(&Element::Terms));

        let with_terms = ScreenLayout::new(true);
        assert_eq!(
            with_terms.next_focus(Element::Input(Field::ConfirmPassword)),
            Element::Terms
        );
    }

    #[test]
    fn test_reveal_keeps_element_in_view() {
        let layout = ScreenLayout::new(false);
        let viewport = 12;
        for element in layout.focus_order() {
            let scroll = layout.reveal(element, 0, viewport);
            let p = layout.placement(element).unwrap();
            assert!(p.top >= scroll && p.bottom() <= scroll + viewport, "{:?}", element);
        }
        assert_eq!(layout.reveal(Element::Input(Field::Name), 9, viewport), 0);
    }

    #[test]
    fn test_no_scroll_when_everything_fits() {
        let layout = ScreenLayout::new(true);
        let tall = layout.content_height() + 5;
        assert_eq!(layout.max_scroll(tall), 0);
        assert_eq!(layout.reveal(Element::LogIn, 0, tall), 0);
    }
}
