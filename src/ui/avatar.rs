//! The assistant's robot face.

const IDLE_FACE: &str = "[o_o]";
const TALKING_FACES: [&str; 2] = ["[o0o]", "[o-o]"];

/// A small ASCII robot whose mouth moves while it talks.
///
/// Each instance keeps its own animation state; a view owns one.
#[derive(Debug, Clone, Default)]
pub struct RobotAvatar {
    initialized: bool,
    talking: bool,
    frame: usize,
}

impl RobotAvatar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the face to its idle pose.
    pub fn init(&mut self) {
        self.initialized = true;
        self.talking = false;
        self.frame = 0;
    }

    pub fn set_talking(&mut self, talking: bool) {
        if self.talking != talking {
            self.frame = 0;
        }
        self.talking = talking;
    }

    pub const fn is_talking(&self) -> bool {
        self.talking
    }

    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Returns the face to draw now and advances the mouth when talking.
    pub fn next_face(&mut self) -> &'static str {
        if !self.talking {
            return IDLE_FACE;
        }
        let face = TALKING_FACES[self.frame % TALKING_FACES.len()];
        self.frame = self.frame.wrapping_add(1);
        face
    }

    /// The face shown when not talking.
    pub const fn idle_face() -> &'static str {
        IDLE_FACE
    }
}
