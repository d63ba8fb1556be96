//! Portal routes and the auth guard

use serde::{Deserialize, Serialize};

/// Top-level pages of the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Login,
    #[default]
    Dashboard,
    Services,
    Domains,
    Support,
    Billing,
    Profile,
}

impl Route {
    /// Authenticated pages, in navigation order
    pub fn protected() -> &'static [Route] {
        &[
            Self::Dashboard,
            Self::Services,
            Self::Domains,
            Self::Support,
            Self::Billing,
            Self::Profile,
        ]
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Services => "/services",
            Self::Domains => "/domains",
            Self::Support => "/support",
            Self::Billing => "/billing",
            Self::Profile => "/profile",
        }
    }

    /// Resolve a path; `/` and anything unknown land on the dashboard
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim().trim_end_matches('/');
        match trimmed {
            "/login" => Self::Login,
            "/services" => Self::Services,
            "/domains" => Self::Domains,
            "/support" => Self::Support,
            "/billing" => Self::Billing,
            "/profile" => Self::Profile,
            _ => Self::Dashboard,
        }
    }

    pub fn requires_auth(self) -> bool {
        self != Self::Login
    }

    /// Where the user actually ends up when asking for `self`
    ///
    /// Anonymous users are sent to login; signed-in users asking for
    /// login are sent to the dashboard.
    #[must_use]
    pub fn guard(self, authenticated: bool) -> Self {
        match (self, authenticated) {
            (Self::Login, true) => Self::Dashboard,
            (route, false) if route.requires_auth() => Self::Login,
            (route, _) => route,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_paths_fall_back_to_dashboard() {
        assert_eq!(Route::from_path("/"), Route::Dashboard);
        assert_eq!(Route::from_path(""), Route::Dashboard);
        assert_eq!(Route::from_path("/nope"), Route::Dashboard);
        assert_eq!(Route::from_path("/billing/"), Route::Billing);
    }

    #[test]
    fn path_round_trips_for_every_route() {
        for route in Route::protected().iter().chain([Route::Login].iter()) {
            assert_eq!(Route::from_path(route.path()), *route);
        }
    }

    #[test]
    fn guard_redirects() {
        assert_eq!(Route::Billing.guard(false), Route::Login);
        assert_eq!(Route::Login.guard(false), Route::Login);
        assert_eq!(Route::Login.guard(true), Route::Dashboard);
        assert_eq!(Route::Support.guard(true), Route::Support);
    }
}
