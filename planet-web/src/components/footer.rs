use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer>{ concat!("planet-web v", env!("CARGO_PKG_VERSION")) }</footer>
    }
}
