//! Console route table and the session guard in front of it

use std::fmt;
use tracing::debug;

use crate::session::SessionStore;

/// Every screen the console can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Reservation,
    ReservationAmount,
    ReservationDetail(String),
    AddReservation,
    Review,
    AddReview,
    ReviewDetail(String),
    PaymentDetail(String),
}

impl Route {
    /// Match a path against the route table
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();

        let route = match segments.as_slice() {
            [] | [""] => Route::Home,
            ["reservation"] => Route::Reservation,
            ["amount"] => Route::ReservationAmount,
            ["reservation", id] if !id.is_empty() => Route::ReservationDetail(id.to_string()),
            ["add", "reservation"] => Route::AddReservation,
            ["review"] => Route::Review,
            ["add", "review"] => Route::AddReview,
            ["review", id] if !id.is_empty() => Route::ReviewDetail(id.to_string()),
            ["payment", id] if !id.is_empty() => Route::PaymentDetail(id.to_string()),
            _ => return None,
        };
        Some(route)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Reservation => "/reservation".to_string(),
            Route::ReservationAmount => "/amount".to_string(),
            Route::ReservationDetail(id) => format!("/reservation/{}", id),
            Route::AddReservation => "/add/reservation".to_string(),
            Route::Review => "/review".to_string(),
            Route::AddReview => "/add/review".to_string(),
            Route::ReviewDetail(id) => format!("/review/{}", id),
            Route::PaymentDetail(id) => format!("/payment/{}", id),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Reservation => "reservation",
            Route::ReservationAmount => "reservationAmount",
            Route::ReservationDetail(_) => "reservationDetail",
            Route::AddReservation => "addReservation",
            Route::Review => "review",
            Route::AddReview => "addReview",
            Route::ReviewDetail(_) => "reviewDetail",
            Route::PaymentDetail(_) => "paymentDetail",
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Route::Home)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Blocks every route but home while no session token is stored
pub struct RouteGuard<'a> {
    session: &'a SessionStore,
}

impl<'a> RouteGuard<'a> {
    pub fn new(session: &'a SessionStore) -> Self {
        Self { session }
    }

    /// `Ok(route)` when navigation may proceed, `Err(Route::Home)` as a redirect
    pub fn resolve(&self, to: Route) -> Result<Route, Route> {
        if to.is_public() || self.session.has_token() {
            Ok(to)
        } else {
            debug!("No session token, redirecting {} to {}", to, Route::Home);
            Err(Route::Home)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::TOKEN_KEY;
    use tempfile::TempDir;

    #[test]
    fn test_parse_route_table() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse("/reservation"), Some(Route::Reservation));
        assert_eq!(Route::parse("/amount"), Some(Route::ReservationAmount));
        assert_eq!(
            Route::parse("/reservation/R-1"),
            Some(Route::ReservationDetail("R-1".to_string()))
        );
        assert_eq!(Route::parse("/add/reservation"), Some(Route::AddReservation));
        assert_eq!(Route::parse("/review/"), Some(Route::Review));
        assert_eq!(Route::parse("/add/review"), Some(Route::AddReview));
        assert_eq!(Route::parse("/review/9"), Some(Route::ReviewDetail("9".to_string())));
        assert_eq!(Route::parse("/payment/3"), Some(Route::PaymentDetail("3".to_string())));
        assert_eq!(Route::parse("/settings"), None);
        assert_eq!(Route::parse("/add/payment"), None);
    }

    #[test]
    fn test_path_round_trips_through_parse() {
        let routes = [
            Route::Home,
            Route::ReservationAmount,
            Route::ReservationDetail("abc".to_string()),
            Route::AddReview,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn test_guard_redirects_without_token() {
        let dir = TempDir::new().unwrap();
        let session = SessionStore::open(dir.path()).unwrap();
        let guard = RouteGuard::new(&session);

        assert_eq!(guard.resolve(Route::Home), Ok(Route::Home));
        assert_eq!(guard.resolve(Route::Reservation), Err(Route::Home));

        session.save(TOKEN_KEY, "token").unwrap();
        assert_eq!(guard.resolve(Route::Reservation), Ok(Route::Reservation));
    }
}
