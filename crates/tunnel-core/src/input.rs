/// Keyboard commands shared by both front-ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    TogglePlayback,
    ToggleFullscreen,
    ExitFullscreen,
}

impl KeyAction {
    /// Map a DOM-style key value (`" "`, `"f"`, `"Escape"`).
    #[inline]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            " " | "Space" => Some(KeyAction::TogglePlayback),
            "f" | "F" => Some(KeyAction::ToggleFullscreen),
            "Escape" => Some(KeyAction::ExitFullscreen),
            _ => None,
        }
    }
}
