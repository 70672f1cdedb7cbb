//! Start screen.

/// Title shown above the play trigger.
pub const TITLE: &str = "Memory";

/// Tagline under the title.
pub const TAGLINE: &str = "Flip over tiles looking for pairs";

/// Label of the play trigger.
pub const PLAY_LABEL: &str = "Play";

/// The stateless start screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StartScreen;

impl StartScreen {
    /// Activate the play trigger.
    pub fn activate<R>(&self, start: impl FnOnce() -> R) -> R {
        start()
    }
}

impl std::fmt::Display for StartScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(f, "{TAGLINE}")?;
        writeln!(f)?;
        writeln!(f, "[ {PLAY_LABEL} ]")
    }
}
