pub mod footer;
pub mod route_nav;
