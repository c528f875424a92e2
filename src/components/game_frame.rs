use crate::state::FrameLoadState;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameFrameProps {
    pub title: AttrValue,
    /// Full provider embed URL, passed through verbatim as the iframe src.
    pub iframe_url: AttrValue,
}

/// Embedded game frame with a loading overlay and fullscreen toggle.
///
/// The spinner stays up until the iframe's native `load`/`error` signal
/// fires; both outcomes are terminal for this page view, so late duplicate
/// signals are ignored (see [`FrameLoadState`]).
#[function_component(GameFrame)]
pub fn game_frame(props: &GameFrameProps) -> Html {
    let load_state = use_state(FrameLoadState::default);
    let iframe_ref = use_node_ref();

    let onload = {
        let load_state = load_state.clone();
        Callback::from(move |_: Event| load_state.set(load_state.loaded()))
    };
    let onerror = {
        let load_state = load_state.clone();
        let title = props.title.clone();
        Callback::from(move |_: Event| {
            tracing::warn!("game frame failed to load: {}", title);
            load_state.set(load_state.errored());
        })
    };
    let onfullscreen = {
        let iframe_ref = iframe_ref.clone();
        Callback::from(move |_| toggle_fullscreen(&iframe_ref))
    };

    html! {
        <div class="game-iframe-container">
            if load_state.is_loading() {
                <div class="game-loading" id="gameLoading">
                    <div class="game-loading-spinner"></div>
                    <p>{ format!("Loading {}...", props.title) }</p>
                </div>
            }
            if load_state.is_errored() {
                <div class="game-error" id="gameError">
                    <i class="fas fa-triangle-exclamation"></i>
                    <p>{"This game could not be loaded. Please reload the page to try again."}</p>
                </div>
            }
            <iframe
                ref={iframe_ref}
                id="gameIframe"
                class="game-iframe"
                src={props.iframe_url.clone()}
                title={props.title.clone()}
                allowfullscreen=true
                {onload}
                {onerror}
            >
            </iframe>
            <button class="fullscreen-btn" onclick={onfullscreen} aria-label="Toggle fullscreen">
                <i class="fas fa-expand"></i>
            </button>
        </div>
    }
}

/// Enter fullscreen on the iframe, or leave it if something is already
/// fullscreen. Browsers may reject the request outside a user gesture;
/// that rejection is swallowed and the page carries on unchanged.
fn toggle_fullscreen(target: &NodeRef) {
    let Some(el) = target.cast::<web_sys::HtmlIFrameElement>() else {
        return;
    };
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if doc.fullscreen_element().is_some() {
        doc.exit_fullscreen();
    } else if let Err(err) = el.request_fullscreen() {
        tracing::debug!("fullscreen request rejected: {:?}", err);
    }
}
