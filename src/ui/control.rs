//! Clickable, hover-animated controls and the panels that group them.
//!
//! Controls only report which [`Action`] was triggered; the state machine
//! decides what the action means.

use crate::core::constants::{BASE_WIDTH, CONTROL_EASING, CONTROL_HOVER_SCALE};
use crate::game::geometry::{Point, Rect};
use crate::game::settings::{Difficulty, SettingField, Step};

/// What a control asks the state machine to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Play(Difficulty),
    OpenCustom,
    Adjust(SettingField, Step),
    PlayCustom,
    Back,
    Restart,
    Menu,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ControlElement {
    pub label: &'static str,
    pub action: Action,
    /// Unscaled bounds; hit tests use these.
    pub rect: Rect,
    /// Keyboard shortcut for terminals without mouse reporting.
    pub hotkey: Option<char>,
    pub scale: f64,
    pub hovered: bool,
}

impl ControlElement {
    pub fn new(
        label: &'static str,
        center: Point,
        width: f64,
        height: f64,
        action: Action,
    ) -> Self {
        Self {
            label,
            action,
            rect: Rect::from_center(center, width, height),
            hotkey: None,
            scale: 1.0,
            hovered: false,
        }
    }

    pub fn with_hotkey(mut self, key: char) -> Self {
        self.hotkey = Some(key);
        self
    }

    /// Refresh hover state against the pointer and ease the scale toward its target.
    pub fn update(&mut self, pointer: Option<Point>) {
        self.hovered = pointer.is_some_and(|p| self.rect.contains(p));
        let target = if self.hovered {
            CONTROL_HOVER_SCALE
        } else {
            1.0
        };
        self.scale += (target - self.scale) * CONTROL_EASING;
    }

    /// A primary-button press counts only while hovered.
    pub fn is_clicked(&self) -> bool {
        self.hovered
    }

    /// Bounds as drawn this frame.
    pub fn drawn_rect(&self) -> Rect {
        self.rect.scaled(self.scale)
    }
}

/// The set of controls visible in one mode.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPanel {
    pub controls: Vec<ControlElement>,
}

impl ControlPanel {
    pub fn main_menu() -> Self {
        let button = |label, y, action| {
            ControlElement::new(label, Point::new(BASE_WIDTH / 2.0, y), 160.0, 45.0, action)
        };
        Self {
            controls: vec![
                button("Easy", 280.0, Action::Play(Difficulty::Easy)).with_hotkey('e'),
                button("Medium", 340.0, Action::Play(Difficulty::Medium)).with_hotkey('m'),
                button("Hard", 400.0, Action::Play(Difficulty::Hard)).with_hotkey('h'),
                button("Custom", 460.0, Action::OpenCustom).with_hotkey('c'),
            ],
        }
    }

    pub fn custom_settings() -> Self {
        let mut controls = Vec::new();
        let keys = [('1', '2'), ('3', '4'), ('5', '6')];
        for (field, (dec_key, inc_key)) in SettingField::ALL.into_iter().zip(keys) {
            let y = Self::setting_row_y(field);
            controls.push(
                ControlElement::new(
                    "-",
                    Point::new(140.0, y),
                    40.0,
                    40.0,
                    Action::Adjust(field, Step::Decrease),
                )
                .with_hotkey(dec_key),
            );
            controls.push(
                ControlElement::new(
                    "+",
                    Point::new(260.0, y),
                    40.0,
                    40.0,
                    Action::Adjust(field, Step::Increase),
                )
                .with_hotkey(inc_key),
            );
        }
        controls.push(
            ControlElement::new(
                "Play Custom",
                Point::new(BASE_WIDTH / 2.0, 480.0),
                200.0,
                50.0,
                Action::PlayCustom,
            )
            .with_hotkey('p'),
        );
        controls.push(
            ControlElement::new("Back", Point::new(50.0, 50.0), 80.0, 40.0, Action::Back)
                .with_hotkey('b'),
        );
        Self { controls }
    }

    pub fn game_over() -> Self {
        let button = |label, y, action| {
            ControlElement::new(label, Point::new(BASE_WIDTH / 2.0, y), 160.0, 50.0, action)
        };
        Self {
            controls: vec![
                button("Restart", 330.0, Action::Restart).with_hotkey('r'),
                button("Menu", 400.0, Action::Menu).with_hotkey('m'),
            ],
        }
    }

    /// Vertical centre of a custom-settings row.
    pub fn setting_row_y(field: SettingField) -> f64 {
        match field {
            SettingField::Speed => 150.0,
            SettingField::Gap => 250.0,
            SettingField::Gravity => 350.0,
        }
    }

    pub fn update(&mut self, pointer: Option<Point>) {
        for control in &mut self.controls {
            control.update(pointer);
        }
    }

    /// Resolve a press at `pointer`: hover is refreshed first so the press
    /// position is authoritative.
    pub fn click(&mut self, pointer: Point) -> Option<Action> {
        for control in &mut self.controls {
            control.hovered = control.rect.contains(pointer);
        }
        self.controls.iter().find(|c| c.is_clicked()).map(|c| c.action)
    }

    pub fn hotkey(&self, key: char) -> Option<Action> {
        let key = key.to_ascii_lowercase();
        self.controls
            .iter()
            .find(|c| c.hotkey == Some(key))
            .map(|c| c.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_eases_toward_target() {
        let mut control = ControlElement::new(
            "Easy",
            Point::new(200.0, 280.0),
            160.0,
            45.0,
            Action::OpenCustom,
        );
        control.update(Some(Point::new(200.0, 280.0)));
        assert!(control.hovered);
        assert!((control.scale - 1.03).abs() < 1e-9);
        for _ in 0..100 {
            control.update(Some(Point::new(200.0, 280.0)));
        }
        assert!((control.scale - CONTROL_HOVER_SCALE).abs() < 1e-6);

        for _ in 0..100 {
            control.update(None);
        }
        assert!(!control.hovered);
        assert!((control.scale - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_click_requires_hover() {
        let mut control =
            ControlElement::new("Back", Point::new(50.0, 50.0), 80.0, 40.0, Action::Back);
        control.update(Some(Point::new(300.0, 300.0)));
        assert!(!control.is_clicked());
        control.update(Some(Point::new(60.0, 45.0)));
        assert!(control.is_clicked());
    }

    #[test]
    fn test_main_menu_click_resolves_action() {
        let mut panel = ControlPanel::main_menu();
        assert_eq!(
            panel.click(Point::new(200.0, 340.0)),
            Some(Action::Play(Difficulty::Medium))
        );
        assert_eq!(panel.click(Point::new(200.0, 460.0)), Some(Action::OpenCustom));
        assert_eq!(panel.click(Point::new(10.0, 10.0)), None);
    }

    #[test]
    fn test_custom_panel_rows() {
        let mut panel = ControlPanel::custom_settings();
        assert_eq!(panel.controls.len(), 8);
        assert_eq!(
            panel.click(Point::new(140.0, 250.0)),
            Some(Action::Adjust(SettingField::Gap, Step::Decrease))
        );
        assert_eq!(
            panel.click(Point::new(260.0, 350.0)),
            Some(Action::Adjust(SettingField::Gravity, Step::Increase))
        );
        assert_eq!(panel.click(Point::new(50.0, 50.0)), Some(Action::Back));
    }

    #[test]
    fn test_hotkeys() {
        let panel = ControlPanel::game_over();
        assert_eq!(panel.hotkey('R'), Some(Action::Restart));
        assert_eq!(panel.hotkey('m'), Some(Action::Menu));
        assert_eq!(panel.hotkey('z'), None);
    }
}
