use crate::components::{Footer, Sidebar};
use crate::state::SidebarState;
use yew::prelude::*;

const SIDEBAR_PREF_KEY: &str = "sa_sidebar_prefs";

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Html,
}

/// Shared page chrome: sidebar, mobile toggle/overlay, main wrapper, footer.
/// Owns the [`SidebarState`] for the current page view.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let sidebar = use_state(SidebarState::default);

    // Load the persisted sidebar preference. The mobile overlay always
    // starts closed regardless of what was stored.
    {
        let sidebar = sidebar.clone();
        use_effect_with((), move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(Some(raw)) = store.get_item(SIDEBAR_PREF_KEY) {
                        if let Ok(prefs) = serde_json::from_str::<SidebarState>(&raw) {
                            sidebar.set(prefs.close_mobile());
                        }
                    }
                }
            }
            || ()
        });
    }
    // Persist collapse changes.
    {
        let snapshot = sidebar.close_mobile();
        use_effect_with(snapshot.collapsed, move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(raw) = serde_json::to_string(&snapshot) {
                        let _ = store.set_item(SIDEBAR_PREF_KEY, &raw);
                    }
                }
            }
            || ()
        });
    }

    let on_toggle = {
        let sidebar = sidebar.clone();
        Callback::from(move |_| sidebar.set(sidebar.toggle_collapsed()))
    };
    let on_toggle_mobile = {
        let sidebar = sidebar.clone();
        Callback::from(move |_| sidebar.set(sidebar.toggle_mobile()))
    };
    let on_close_mobile: Callback<()> = {
        let sidebar = sidebar.clone();
        Callback::from(move |_| sidebar.set(sidebar.close_mobile()))
    };
    let overlay_onclick = {
        let sidebar = sidebar.clone();
        Callback::from(move |_: MouseEvent| sidebar.set(sidebar.close_mobile()))
    };

    let overlay_classes = classes!(
        "sidebar-overlay",
        sidebar.mobile_open.then_some("active"),
    );
    let main_classes = classes!(
        "main-wrapper",
        sidebar.collapsed.then_some("sidebar-collapsed"),
    );

    html! {
        <>
            <Sidebar
                state={*sidebar}
                on_toggle={on_toggle}
                on_close_mobile={on_close_mobile}
            />
            <button
                class="mobile-sidebar-toggle"
                id="mobileSidebarToggle"
                onclick={on_toggle_mobile}
                aria-label="Open menu"
            >
                <i class="fas fa-bars"></i>
            </button>
            <div class={overlay_classes} id="sidebarOverlay" onclick={overlay_onclick}></div>
            <main class={main_classes} id="mainWrapper">
                { props.children.clone() }
                <Footer />
            </main>
        </>
    }
}
