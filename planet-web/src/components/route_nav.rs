use crate::router::{Route, RouteTable};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct RouteNavProps {
    pub table: RouteTable,
}

/// One link per route table entry, in table order. The entry matching the
/// current location carries `aria-current="page"`.
#[function_component(RouteNav)]
pub fn route_nav(props: &RouteNavProps) -> Html {
    let active = use_route::<Route>();

    html! {
        <nav class="route-nav" aria-label="Main">
            <ul>
                { for props.table.iter().map(|entry| {
                    let current = (active == Some(entry.route)).then_some("page");
                    html! {
                        <li key={entry.name.to_string()} aria-current={current} data-route={entry.name}>
                            <Link<Route> to={entry.route}>{ entry.name }</Link<Route>>
                        </li>
                    }
                }) }
            </ul>
        </nav>
    }
}
