use crate::components::Layout;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// 404 page, also rendered for unknown game slugs.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <Layout>
            <section class="page-header not-found">
                <h1>{"404"}</h1>
                <p>{"That page doesn't exist."}</p>
                <Link<Route> to={Route::Home}>{"Go to Home"}</Link<Route>>
            </section>
        </Layout>
    }
}
