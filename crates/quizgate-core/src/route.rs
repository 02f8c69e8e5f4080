//! View routing.
//!
//! Two paths exist. Which one is rendered depends only on the requested
//! route and whether the session is authenticated.

use std::{fmt, str::FromStr};

/// Path of the login view.
pub const LOGIN_PATH: &str = "/";

/// Path of the quiz view.
pub const QUIZ_PATH: &str = "/proctoring";

/// A navigable view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// Credential form.
    #[default]
    Login,
    /// Questions and submit button. Authenticated only.
    Quiz,
}

impl Route {
    /// URL path for this route.
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::Quiz => QUIZ_PATH,
        }
    }

    /// Route that actually renders when `self` is requested.
    ///
    /// Login while authenticated goes to the quiz; the quiz while
    /// unauthenticated goes to login.
    pub fn resolve(self, authenticated: bool) -> Resolution {
        match (self, authenticated) {
            (Self::Login, true) => Resolution::Redirect(Self::Quiz),
            (Self::Quiz, false) => Resolution::Redirect(Self::Login),
            (route, _) => Resolution::Render(route),
        }
    }

    /// Route the session belongs on.
    pub fn home(authenticated: bool) -> Self {
        if authenticated { Self::Quiz } else { Self::Login }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = UnknownPath;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        match path {
            LOGIN_PATH => Ok(Self::Login),
            QUIZ_PATH => Ok(Self::Quiz),
            other => Err(UnknownPath(other.to_string())),
        }
    }
}

/// Path that names no route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPath(pub String);

/// Outcome of resolving a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Render the requested route.
    Render(Route),
    /// Navigate to a different route instead.
    Redirect(Route),
}

impl Resolution {
    /// The route that ends up on screen.
    pub fn target(self) -> Route {
        match self {
            Self::Render(route) | Self::Redirect(route) => route,
        }
    }
}
