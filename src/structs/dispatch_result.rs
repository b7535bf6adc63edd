/// Outcome of feeding one action to a controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult<E> {
    pub effects: Vec<E>,
    pub state_changed: bool,
}

impl<E> DispatchResult<E> {
    pub const fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    pub const fn changed(effects: Vec<E>) -> Self {
        Self {
            effects,
            state_changed: true,
        }
    }
}
