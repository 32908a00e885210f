use std::collections::HashSet;

use thiserror::Error;
use yew_router::prelude::*;

/// Client-side routes, in the order they are registered with the router.
///
/// No `#[not_found]` variant: an unknown URL falls through to the router's default
/// policy and renders no view.
#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq, Hash)]
pub enum Route {
    #[at("/")]
    HelloWorld,
    #[at("/planet")]
    Planet,
}

impl Route {
    pub const ALL: [Self; 2] = [Self::HelloWorld, Self::Planet];

    /// Unique route name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HelloWorld => "HelloWorld",
            Self::Planet => "Planet",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: String,
    pub name: &'static str,
    pub route: Route,
}

impl RouteEntry {
    #[must_use]
    pub fn for_route(route: Route) -> Self {
        Self {
            path: route.to_path(),
            name: route.name(),
            route,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("route `{name}` has an empty path")]
    EmptyPath { name: String },
    #[error("route at `{path}` has an empty name")]
    EmptyName { path: String },
    #[error("path `{0}` is bound more than once")]
    DuplicatePath(String),
    #[error("route name `{0}` is used more than once")]
    DuplicateName(String),
    #[error("route `{name}` is declared at `{path}` but the router matches it at `{expected}`")]
    PathMismatch {
        name: String,
        path: String,
        expected: String,
    },
}

/// Ordered, immutable list of route entries.
///
/// Paths and names are unique and non-empty, and every entry's path is the one
/// the router recognizes for its route. [`RouteTable::new`] refuses anything else.
/// Unique paths that each match their route also bind every route at most once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Validate `entries` and keep them in the given order.
    ///
    /// # Errors
    /// Returns the first violation found while walking the entries in order.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteTableError> {
        validate(&entries)?;
        Ok(Self { entries })
    }

    /// The application's table, built from [`Route::ALL`].
    ///
    /// # Errors
    /// Fails only if the `Route` declarations break the table invariants.
    pub fn standard() -> Result<Self, RouteTableError> {
        Self::new(Route::ALL.into_iter().map(RouteEntry::for_route).collect())
    }

    /// Resolve a URL path to its entry using the router's own recognition.
    ///
    /// Construction guarantees the returned entry's `path` is the one recognized.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&RouteEntry> {
        let route = Route::recognize(path)?;
        self.entries.iter().find(|entry| entry.route == route)
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    #[must_use]
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RouteEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate(entries: &[RouteEntry]) -> Result<(), RouteTableError> {
    let mut paths = HashSet::with_capacity(entries.len());
    let mut names = HashSet::with_capacity(entries.len());

    for entry in entries {
        if entry.path.trim().is_empty() {
            return Err(RouteTableError::EmptyPath {
                name: entry.name.to_string(),
            });
        }
        if entry.name.trim().is_empty() {
            return Err(RouteTableError::EmptyName {
                path: entry.path.clone(),
            });
        }
        if !paths.insert(entry.path.as_str()) {
            return Err(RouteTableError::DuplicatePath(entry.path.clone()));
        }
        if !names.insert(entry.name) {
            return Err(RouteTableError::DuplicateName(entry.name.to_string()));
        }
        let expected = entry.route.to_path();
        if entry.path != expected {
            return Err(RouteTableError::PathMismatch {
                name: entry.name.to_string(),
                path: entry.path.clone(),
                expected,
            });
        }
    }
    Ok(())
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a RouteEntry;
    type IntoIter = std::slice::Iter<'a, RouteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
