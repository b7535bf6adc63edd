/// Blocks overlapping create/push/disconnect submissions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitGuard {
    held: bool,
}

impl SubmitGuard {
    /// Takes the guard. Returns false if a submission is already in flight.
    pub fn try_acquire(&mut self) -> bool {
        if self.held {
            return false;
        }
        self.held = true;
        true
    }

    pub fn release(&mut self) {
        self.held = false;
    }

    pub const fn is_held(&self) -> bool {
        self.held
    }
}
