use super::models::User;

/// Source of the acting user's identity
pub trait SessionProvider {
    /// The logged-in user, if any
    fn current_user(&self) -> Option<User>;
}

/// An explicit login session passed to whoever needs the acting user
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    /// Session with nobody logged in
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Session with `user` logged in
    pub fn for_user(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn login(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn logout(&mut self) {
        self.user = None;
    }
}

impl SessionProvider for Session {
    fn current_user(&self) -> Option<User> {
        self.user.clone()
    }
}
