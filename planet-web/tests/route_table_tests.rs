use planet_web::router::{Route, RouteEntry, RouteTable, RouteTableError};
use std::collections::HashSet;

fn table() -> RouteTable {
    RouteTable::standard().expect("standard route table is valid")
}

#[test]
fn root_path_resolves_to_hello_world() {
    let table = table();
    let entry = table.lookup("/").expect("root is routed");
    assert_eq!(entry.name, "HelloWorld");
    assert_eq!(entry.route, Route::HelloWorld);
}

#[test]
fn planet_path_resolves_to_planet() {
    let table = table();
    let entry = table.lookup("/planet").expect("planet is routed");
    assert_eq!(entry.name, "Planet");
    assert_eq!(entry.route, Route::Planet);
}

#[test]
fn table_has_two_unique_entries() {
    let table = table();
    assert_eq!(table.len(), 2);

    let names: HashSet<_> = table.iter().map(|e| e.name).collect();
    let paths: HashSet<_> = table.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(names.len(), table.len());
    assert_eq!(paths.len(), table.len());
}

#[test]
fn no_entry_has_empty_path_or_name() {
    for entry in &table() {
        assert!(!entry.path.is_empty(), "{entry:?} has an empty path");
        assert!(!entry.name.is_empty(), "{entry:?} has an empty name");
    }
}

#[test]
fn entries_keep_declared_order() {
    let paths: Vec<_> = table()
        .entries()
        .iter()
        .map(|e| e.path.clone())
        .collect();
    assert_eq!(paths, ["/", "/planet"]);
}

#[test]
fn unknown_paths_resolve_to_nothing() {
    let table = table();
    assert!(table.lookup("/pluto").is_none());
    assert!(table.lookup("/planet/extra").is_none());
}

#[test]
fn by_name_finds_entries() {
    let table = table();
    assert_eq!(
        table.by_name("Planet").map(|e| e.path.as_str()),
        Some("/planet")
    );
    assert!(table.by_name("planet").is_none());
}

#[test]
fn rebinding_a_path_is_rejected() {
    let err = RouteTable::new(vec![
        RouteEntry::for_route(Route::HelloWorld),
        RouteEntry {
            path: "/".into(),
            name: "Moon",
            route: Route::Planet,
        },
    ])
    .unwrap_err();
    assert_eq!(err, RouteTableError::DuplicatePath("/".into()));
}

#[test]
fn binding_a_route_under_a_foreign_path_is_rejected() {
    let err = RouteTable::new(vec![
        RouteEntry::for_route(Route::HelloWorld),
        RouteEntry {
            path: "/moon".into(),
            name: "Moon",
            route: Route::Planet,
        },
    ])
    .unwrap_err();
    assert_eq!(
        err,
        RouteTableError::PathMismatch {
            name: "Moon".into(),
            path: "/moon".into(),
            expected: "/planet".into(),
        }
    );
}
