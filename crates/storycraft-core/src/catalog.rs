//! Static navigation catalogs.
//!
//! Two independent catalogs exist in the product: the marketing-site header
//! and the dashboard sidebar. Each is constructed once and never mutated.

/// A navigation target, optionally reachable only when authenticated.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NavDestination {
    /// Display label, unique within its catalog
    pub label: &'static str,
    /// Route path
    pub path: &'static str,
    /// Whether activation must pass the auth gate
    pub requires_auth: bool,
}

impl NavDestination {
    pub const fn new(label: &'static str, path: &'static str, requires_auth: bool) -> Self {
        Self {
            label,
            path,
            requires_auth,
        }
    }
}

/// Ordered, immutable list of destinations for one navigation context.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NavigationCatalog {
    destinations: Vec<NavDestination>,
}

impl NavigationCatalog {
    pub fn new(destinations: Vec<NavDestination>) -> Self {
        debug_assert!(
            {
                let mut labels: Vec<_> = destinations.iter().map(|d| d.label).collect();
                labels.sort_unstable();
                labels.windows(2).all(|w| w[0] != w[1])
            },
            "catalog labels must be unique"
        );
        Self { destinations }
    }

    pub fn destinations(&self) -> &[NavDestination] {
        &self.destinations
    }

    pub fn find(&self, label: &str) -> Option<&NavDestination> {
        self.destinations.iter().find(|d| d.label == label)
    }
}

/// Marketing-site header catalog: Home is open, everything else is gated.
pub fn marketing_catalog() -> NavigationCatalog {
    NavigationCatalog::new(vec![
        NavDestination::new("Home", "/", false),
        NavDestination::new("Community", "/community", true),
        NavDestination::new("Dashboard", "/dashboard", true),
    ])
}

/// Dashboard sidebar catalog.
pub fn sidebar_catalog() -> NavigationCatalog {
    NavigationCatalog::new(vec![
        NavDestination::new("Home", "/", false),
        NavDestination::new("Dashboard", "/dashboard", true),
        NavDestination::new("Create Story", "/create-story", true),
        NavDestination::new("My Stories", "/my-stories", true),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_have_unique_labels() {
        for catalog in [marketing_catalog(), sidebar_catalog()] {
            let mut labels: Vec<_> = catalog.destinations().iter().map(|d| d.label).collect();
            let before = labels.len();
            labels.sort_unstable();
            labels.dedup();
            assert_eq!(labels.len(), before);
        }
    }

    #[test]
    fn home_is_the_only_open_destination() {
        for catalog in [marketing_catalog(), sidebar_catalog()] {
            for dest in catalog.destinations() {
                assert_eq!(dest.requires_auth, dest.label != "Home");
            }
        }
    }

    #[test]
    fn find_by_label() {
        let catalog = marketing_catalog();
        assert_eq!(catalog.find("Dashboard").unwrap().path, "/dashboard");
        assert!(catalog.find("Nonexistent").is_none());
    }
}
