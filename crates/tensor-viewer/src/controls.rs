//! Keyboard and drag state for the scene's transform gizmo.
//!
//! The gizmo and the orbit camera themselves belong to the renderer; this is
//! only the dispatch state that tells them which mode to be in.

/// What the transform gizmo does with a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformMode {
    #[default]
    Translate,
    Rotate,
    Scale,
}

impl TransformMode {
    /// `g` translates, `r` rotates, `s` scales. Anything else is not ours.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "g" => Some(TransformMode::Translate),
            "r" => Some(TransformMode::Rotate),
            "s" => Some(TransformMode::Scale),
            _ => None,
        }
    }
}

impl std::fmt::Display for TransformMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TransformMode::Translate => "translate",
            TransformMode::Rotate => "rotate",
            TransformMode::Scale => "scale",
        };

        f.write_str(s)
    }
}

#[derive(Debug, Clone)]
pub struct ControlState {
    mode: TransformMode,
    dragging: bool,
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlState {
    /// Creates a new controller in translate mode with orbiting enabled.
    pub fn new() -> Self {
        Self {
            mode: TransformMode::Translate,
            dragging: false,
        }
    }

    pub fn mode(&self) -> TransformMode {
        self.mode
    }

    /// Orbiting is suspended while the gizmo is being dragged.
    pub fn orbit_enabled(&self) -> bool {
        !self.dragging
    }

    /// Handles a key press. Returns true if the key was consumed.
    pub fn on_key(&mut self, key: &str) -> bool {
        match TransformMode::from_key(key) {
            Some(mode) => {
                if mode != self.mode {
                    log::debug!("Transform mode: {} -> {}", self.mode, mode);
                }
                self.mode = mode;
                true
            }
            None => false,
        }
    }

    pub fn on_dragging_changed(&mut self, dragging: bool) {
        self.dragging = dragging;
    }
}
