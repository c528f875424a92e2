use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BreadcrumbProps {
    /// Label of the current (unlinked) page.
    pub current: AttrValue,
}

#[function_component(Breadcrumb)]
pub fn breadcrumb(props: &BreadcrumbProps) -> Html {
    html! {
        <nav class="breadcrumb">
            <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
            <span class="breadcrumb-separator">{"/"}</span>
            <Link<Route> to={Route::Games}>{"Games"}</Link<Route>>
            <span class="breadcrumb-separator">{"/"}</span>
            <span>{ props.current.clone() }</span>
        </nav>
    }
}
