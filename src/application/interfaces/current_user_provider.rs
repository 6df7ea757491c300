/// Synchronous view of the authentication session.
pub trait CurrentUserProvider: Send + Sync {
    /// Identifier of the signed-in user, or `None` when nobody is signed in.
    fn current_user_id(&self) -> Option<String>;
}
