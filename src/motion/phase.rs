/// Lifecycle shared by the finite animations (typewriter, count-up).
///
/// `Idle -> Running` on start, `Running -> Running` per tick,
/// `Running -> Complete` once the target is reached. `Complete` is terminal
/// until the owner resets the machine with a new target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Complete,
}

impl Phase {
    pub fn is_complete(self) -> bool {
        self == Phase::Complete
    }
}

/// Identifies one run of a driver. Bumped on every reset so a callback that
/// was already queued for the previous run can be recognised and dropped.
pub type Generation = u32;
