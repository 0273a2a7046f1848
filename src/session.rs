use uuid::Uuid;

/// External identity collaborator. The core never holds ambient session
/// state; every store call is scoped by the identity resolved through this
/// trait at call time.
pub trait SessionGate {
    /// The authenticated user, or `None` when there is no session.
    fn current_user(&self) -> Option<Uuid>;
}

impl<T: SessionGate + ?Sized> SessionGate for &T {
    fn current_user(&self) -> Option<Uuid> {
        (**self).current_user()
    }
}
