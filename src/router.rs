//! In-app route model for the portfolio pages.
//!
//! A `Location` is a read-only snapshot of the current route (`pathname` plus
//! optional `hash`), mirroring what a URL bar would hold. The `Router` owns
//! the current location and a visited-history stack; everything else in the
//! application reads location snapshots and asks the router to navigate.

/// A snapshot of the current route.
///
/// `pathname` is the path portion (`"/projects/guardian"`); `hash` is either
/// empty or the fragment including its leading `#` (`"#problem"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub pathname: String,
    pub hash: String,
}

impl Location {
    /// Parse a path that may embed a fragment, e.g. `"/projects/guardian#problem"`.
    ///
    /// Splits on the first `#`. A path with no route segment before the `#`
    /// is treated as a plain pathname with no fragment.
    pub fn parse(path: &str) -> Self {
        match path.split_once('#') {
            Some((route, frag)) if !route.is_empty() && !frag.is_empty() => Self {
                pathname: route.to_string(),
                hash: format!("#{frag}"),
            },
            _ => Self {
                pathname: path.to_string(),
                hash: String::new(),
            },
        }
    }

    /// The fragment without its leading `#`, if any.
    pub fn fragment(&self) -> Option<&str> {
        self.hash.strip_prefix('#').filter(|f| !f.is_empty())
    }
}

impl Default for Location {
    fn default() -> Self {
        Self {
            pathname: "/".to_string(),
            hash: String::new(),
        }
    }
}

/// Owns the current location and the visited-history stack.
#[derive(Debug)]
pub struct Router {
    location: Location,
    history: Vec<Location>,
}

impl Router {
    pub fn new(initial: Location) -> Self {
        Self {
            location: initial,
            history: Vec::new(),
        }
    }

    /// Current location snapshot.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Navigate to `path`, pushing the previous location onto the history
    /// stack. Navigating to the current location is a no-op.
    pub fn goto(&mut self, path: &str) {
        let next = Location::parse(path);
        if next == self.location {
            return;
        }
        log::debug!("navigate: {} -> {}", self.location.pathname, next.pathname);
        self.history.push(std::mem::replace(&mut self.location, next));
    }

    /// Pop the history stack. Returns false when there is nothing to go
    /// back to.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(prev) => {
                self.location = prev;
                true
            }
            None => false,
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Location::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_path() {
        let loc = Location::parse("/projects");
        assert_eq!(loc.pathname, "/projects");
        assert_eq!(loc.hash, "");
        assert_eq!(loc.fragment(), None);
    }

    #[test]
    fn test_parse_path_with_fragment() {
        let loc = Location::parse("/projects/guardian#problem");
        assert_eq!(loc.pathname, "/projects/guardian");
        assert_eq!(loc.hash, "#problem");
        assert_eq!(loc.fragment(), Some("problem"));
    }

    #[test]
    fn test_parse_splits_on_first_hash_only() {
        let loc = Location::parse("/a#b#c");
        assert_eq!(loc.pathname, "/a");
        assert_eq!(loc.hash, "#b#c");
    }

    #[test]
    fn test_parse_fragment_without_route_is_plain_pathname() {
        let loc = Location::parse("#overview");
        assert_eq!(loc.pathname, "#overview");
        assert_eq!(loc.fragment(), None);
    }

    #[test]
    fn test_parse_trailing_hash_is_empty_fragment() {
        let loc = Location::parse("/projects/guardian#");
        assert_eq!(loc.pathname, "/projects/guardian#");
        assert_eq!(loc.fragment(), None);
    }

    #[test]
    fn test_goto_pushes_history() {
        let mut router = Router::default();
        router.goto("/projects");
        router.goto("/projects/guardian#overview");

        assert_eq!(router.location().pathname, "/projects/guardian");
        assert_eq!(router.location().hash, "#overview");
        assert!(router.back());
        assert_eq!(router.location().pathname, "/projects");
        assert!(router.back());
        assert_eq!(router.location().pathname, "/");
        assert!(!router.back());
    }

    #[test]
    fn test_goto_same_location_is_noop() {
        let mut router = Router::default();
        router.goto("/projects");
        router.goto("/projects");
        assert!(router.back());
        assert_eq!(router.location().pathname, "/");
        assert!(!router.back());
    }

}
