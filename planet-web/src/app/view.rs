use crate::components::footer::Footer;
use crate::components::route_nav::RouteNav;
use crate::pages::hello_world::HelloWorld;
use crate::pages::planet::Planet;
use crate::router::{Route, RouteTable};
use yew::prelude::*;
use yew_router::prelude::*;

/// Mount the view bound to `route`.
#[must_use]
pub fn switch(route: Route) -> Html {
    match route {
        Route::HelloWorld => html! { <HelloWorld /> },
        Route::Planet => html! { <Planet /> },
    }
}

/// Shared layout under a router context: navigation, the routed view, footer.
pub fn render_shell(table: &RouteTable) -> Html {
    html! {
        <>
            <header role="banner">
                <RouteNav table={table.clone()} />
            </header>
            <main id="main" role="main">
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </>
    }
}
