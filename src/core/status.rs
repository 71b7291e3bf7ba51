/// Token identifying one occupancy of the status slot. Monotonic per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusToken(u64);

/// The single transient message area shared by both forms.
///
/// Every `set` bumps a counter and returns a token; a scheduled clear only
/// takes effect while its token is still current, so a stale timer firing
/// after a newer message was set is a no-op.
#[derive(Debug, Default)]
pub struct StatusSlot {
    message: Option<String>,
    counter: u64,
}

impl StatusSlot {
    pub fn set(&mut self, message: impl Into<String>) -> StatusToken {
        self.counter += 1;
        self.message = Some(message.into());
        StatusToken(self.counter)
    }

    /// Clears the slot only if `token` still identifies the current message.
    /// Returns whether anything was cleared.
    pub fn clear_if_current(&mut self, token: StatusToken) -> bool {
        if self.counter == token.0 && self.message.is_some() {
            self.message = None;
            true
        } else {
            false
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
