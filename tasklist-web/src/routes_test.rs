//! Tests for the routing system
//!
//! Validates route paths and which routes are guarded by the session.

#[cfg(test)]
mod tests {
    use crate::routes::MainRoute;
    use strum::IntoEnumIterator;
    use yew_router::Routable;

    /// Tests the paths the two pages are served from
    #[test]
    fn test_route_paths() {
        assert_eq!(MainRoute::Login.to_path(), "/");
        assert_eq!(MainRoute::Dashboard.to_path(), "/dashboard");
    }

    /// Tests path recognition, including unknown paths
    #[test]
    fn test_route_recognition() {
        assert_eq!(MainRoute::recognize("/"), Some(MainRoute::Login));
        assert_eq!(MainRoute::recognize("/dashboard"), Some(MainRoute::Dashboard));
        assert_eq!(
            MainRoute::recognize("/nowhere").or_else(MainRoute::not_found_route),
            Some(MainRoute::NotFound)
        );
    }

    /// Tests that only the dashboard needs a token
    #[test]
    fn test_guarded_routes() {
        let guarded: Vec<_> = MainRoute::iter()
            .filter(MainRoute::requires_session)
            .collect();
        assert_eq!(guarded, vec![MainRoute::Dashboard]);
    }
}
