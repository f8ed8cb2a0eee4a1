use super::session::InputEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    NextScene,
    PreviousScene,
    SelectScene(usize),
    ToggleHud,
}

impl KeyAction {
    /// Session message for scene actions; HUD toggling is shell-only.
    pub fn as_input(self) -> Option<InputEvent> {
        match self {
            KeyAction::NextScene => Some(InputEvent::Clicked),
            KeyAction::PreviousScene => Some(InputEvent::PreviousScene),
            KeyAction::SelectScene(i) => Some(InputEvent::SelectScene(i)),
            KeyAction::ToggleHud => None,
        }
    }
}

#[inline]
pub fn scene_for_digit(key: &str) -> Option<usize> {
    match key {
        "1" => Some(0),
        "2" => Some(1),
        "3" => Some(2),
        "4" => Some(3),
        "5" => Some(4),
        _ => None,
    }
}

pub fn key_action(key: &str) -> Option<KeyAction> {
    if let Some(i) = scene_for_digit(key) {
        return Some(KeyAction::SelectScene(i));
    }
    match key {
        " " | "ArrowRight" => Some(KeyAction::NextScene),
        "ArrowLeft" => Some(KeyAction::PreviousScene),
        "h" | "H" => Some(KeyAction::ToggleHud),
        _ => None,
    }
}
