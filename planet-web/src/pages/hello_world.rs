use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct HelloWorldProps {
    #[prop_or(AttrValue::Static("Welcome to Your Planet App"))]
    pub msg: AttrValue,
}

#[function_component(HelloWorld)]
pub fn hello_world(props: &HelloWorldProps) -> Html {
    let logo_src = crate::paths::logo_src();

    html! {
        <section class="hello" data-testid="hello-world-screen">
            <img class="hello-logo" src={logo_src} alt="Planet logo" />
            <h1>{ props.msg.clone() }</h1>
            <h2>{ "Where to next?" }</h2>
            <ul class="hello-links">
                <li>
                    <Link<Route> to={Route::Planet} classes="hello-link">
                        { "Visit the planet" }
                    </Link<Route>>
                </li>
            </ul>
        </section>
    }
}
