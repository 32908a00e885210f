use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Planet)]
pub fn planet() -> Html {
    html! {
        <section class="planet" data-testid="planet-screen">
            <h1>{ "Planet" }</h1>
            <p>{ "A small world, one route away from home." }</p>
            <Link<Route> to={Route::HelloWorld} classes="planet-back">
                { "Back to the start" }
            </Link<Route>>
        </section>
    }
}
