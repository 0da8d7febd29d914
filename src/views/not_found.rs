use yew::prelude::*;
use yew_router::prelude::*;
use crate::routes::Route;

#[function_component(NotFoundView)]
pub fn not_found_view() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"Page not found"}</p>
            <Link<Route> to={Route::Dashboard}>{"Go to dashboard"}</Link<Route>>
        </div>
    }
}
