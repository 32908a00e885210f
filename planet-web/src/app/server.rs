use crate::router::RouteTable;
use yew::prelude::*;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::Router;

#[derive(Properties, Clone, PartialEq)]
pub struct ServerAppProps {
    pub url: AttrValue,
    pub table: RouteTable,
}

/// Root backed by in-memory history, for rendering a given URL outside a browser.
#[function_component(ServerApp)]
pub fn server_app(props: &ServerAppProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::new());
    history.push(&*props.url);

    html! {
        <Router history={history}>
            { super::view::render_shell(&props.table) }
        </Router>
    }
}
