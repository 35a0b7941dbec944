use closet_core::SessionId;

/// Session context for a request.
///
/// This is immutable and present for all storefront routes: the session
/// middleware mints an id when the client sends none.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SessionContext {
    session_id: SessionId,
}

impl SessionContext {
    pub fn new(session_id: SessionId) -> Self {
        Self { session_id }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }
}
