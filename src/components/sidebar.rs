use crate::config::SiteConfig;
use crate::routes::Route;
use crate::state::SidebarState;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SidebarProps {
    pub state: SidebarState,
    pub on_toggle: Callback<()>,
    pub on_close_mobile: Callback<()>,
}

/// Site navigation sidebar. Collapse/overlay classes are rendered straight
/// from [`SidebarState`]; nothing here touches the DOM imperatively.
#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    let toggle_cb = {
        let cb = props.on_toggle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    // Tapping a nav link on mobile should also dismiss the overlay.
    let close_cb = {
        let cb = props.on_close_mobile.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let classes = classes!(
        "sidebar",
        props.state.collapsed.then_some("collapsed"),
        props.state.mobile_open.then_some("mobile-open"),
    );
    let chevron = if props.state.collapsed {
        "fas fa-chevron-right"
    } else {
        "fas fa-chevron-left"
    };

    html! {
        <nav class={classes} id="sidebar">
            <div class="sidebar-header">
                <div class="logo">{ config.site_name.clone() }</div>
            </div>
            <div class="sidebar-nav" onclick={close_cb}>
                <Link<Route> to={Route::Home} classes="nav-item">
                    <i class="fas fa-home"></i> <span>{"Home"}</span>
                </Link<Route>>
                <Link<Route> to={Route::Games} classes="nav-item">
                    <i class="fas fa-gamepad"></i> <span>{"Games"}</span>
                </Link<Route>>
                <Link<Route> to={Route::About} classes="nav-item">
                    <i class="fas fa-info-circle"></i> <span>{"About Us"}</span>
                </Link<Route>>
                <Link<Route> to={Route::Contact} classes="nav-item">
                    <i class="fas fa-envelope"></i> <span>{"Contact Us"}</span>
                </Link<Route>>
            </div>
            <button class="sidebar-toggle" onclick={toggle_cb} aria-label="Toggle sidebar">
                <i class={chevron}></i>
            </button>
        </nav>
    }
}
