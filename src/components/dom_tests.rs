//! Browser-side tests of the DOM projection. Run with wasm-bindgen-test
//! under `wasm32-unknown-unknown`; they are not part of the native test run.

use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_router::prelude::*;

use super::{GameFrame, Layout};

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, PartialEq)]
struct HostProps {
    content: Html,
}

#[function_component(Host)]
fn host(props: &HostProps) -> Html {
    props.content.clone()
}

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Mounts `content` under a fresh root element and returns the root.
fn mount(content: Html) -> web_sys::Element {
    // Earlier tests may have persisted a sidebar preference.
    if let Ok(Some(store)) = web_sys::window().unwrap().local_storage() {
        let _ = store.clear();
    }
    let doc = document();
    let root = doc.create_element("div").unwrap();
    doc.body().unwrap().append_child(&root).unwrap();
    yew::Renderer::<Host>::with_root_and_props(root.clone(), HostProps { content }).render();
    root
}

async fn settle() {
    TimeoutFuture::new(20).await;
}

fn click(root: &web_sys::Element, selector: &str) {
    root.query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

#[wasm_bindgen_test]
async fn sidebar_toggle_projects_collapsed_class() {
    let root = mount(html! { <BrowserRouter><Layout /></BrowserRouter> });
    settle().await;

    let sidebar = root.query_selector(".sidebar").unwrap().unwrap();
    assert!(!sidebar.class_list().contains("collapsed"));

    click(&root, ".sidebar-toggle");
    settle().await;
    assert!(sidebar.class_list().contains("collapsed"));

    // A second toggle restores the original state.
    click(&root, ".sidebar-toggle");
    settle().await;
    assert!(!sidebar.class_list().contains("collapsed"));

    root.remove();
}

#[wasm_bindgen_test]
async fn overlay_click_closes_mobile_sidebar() {
    let root = mount(html! { <BrowserRouter><Layout /></BrowserRouter> });
    settle().await;

    let sidebar = root.query_selector(".sidebar").unwrap().unwrap();
    let overlay = root.query_selector(".sidebar-overlay").unwrap().unwrap();

    click(&root, ".mobile-sidebar-toggle");
    settle().await;
    assert!(sidebar.class_list().contains("mobile-open"));
    assert!(overlay.class_list().contains("active"));

    click(&root, ".sidebar-overlay");
    settle().await;
    assert!(!sidebar.class_list().contains("mobile-open"));
    assert!(!overlay.class_list().contains("active"));

    // Dismissing again stays closed.
    click(&root, ".sidebar-overlay");
    settle().await;
    assert!(!sidebar.class_list().contains("mobile-open"));

    root.remove();
}

#[wasm_bindgen_test]
async fn game_frame_renders_exact_src_and_spinner() {
    let url = "https://slotslaunch.com/iframe/19764?token=ABC";
    let root = mount(html! {
        <GameFrame title="15 Coins Grand Gold Edition" iframe_url={url} />
    });
    settle().await;

    let iframe = root.query_selector("iframe").unwrap().unwrap();
    assert_eq!(iframe.get_attribute("src").as_deref(), Some(url));
    assert_eq!(
        iframe.get_attribute("title").as_deref(),
        Some("15 Coins Grand Gold Edition")
    );
    // Spinner overlay is up until the frame's load/error signal fires.
    assert!(root.query_selector(".game-loading").unwrap().is_some());
    assert!(root.query_selector(".game-error").unwrap().is_none());

    root.remove();
}
