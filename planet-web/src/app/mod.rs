#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::HashRouter;

pub mod server;
pub mod view;

pub use server::{ServerApp, ServerAppProps};
pub use view::switch;

use crate::router::RouteTable;

/// Browser root. History lives in the URL fragment (`/#/planet`).
#[cfg(target_arch = "wasm32")]
#[derive(Properties, Clone, PartialEq)]
pub struct AppProps {
    pub table: RouteTable,
}

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <HashRouter>
            { view::render_shell(&props.table) }
        </HashRouter>
    }
}

/// Build and validate the route table, logging each registration.
///
/// # Errors
/// Propagates the table's validation error.
pub fn register_routes() -> Result<RouteTable, crate::router::RouteTableError> {
    let table = RouteTable::standard()?;
    for (index, entry) in table.iter().enumerate() {
        log::debug!("registered route #{index} `{}` at {}", entry.name, entry.path);
    }
    log::info!("route table ready with {} entries", table.len());
    Ok(table)
}
