/// One-shot latch between idle/demo behavior and user control.
///
/// Starts un-interacted; the first pointer-down latches it for the rest of
/// the session. There is no way to reset it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionGate {
    interacted: bool,
}

impl InteractionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch the gate. Returns `true` only for the call that flipped it.
    pub fn on_first_pointer_down(&mut self) -> bool {
        let first = !self.interacted;
        self.interacted = true;
        first
    }

    #[inline]
    pub fn has_interacted(&self) -> bool {
        self.interacted
    }

    #[inline]
    pub fn should_auto_rotate(&self) -> bool {
        !self.interacted
    }
}
