use crate::config::SiteConfig;
use crate::pages::{
    AboutPage, ContactPage, GamePage, GamesPage, HomePage, LegalKind, LegalPage, NotFoundPage,
};
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Games => html! { <GamesPage /> },
        Route::Game { slug } => html! { <GamePage slug={slug} /> },
        Route::About => html! { <AboutPage /> },
        Route::Contact => html! { <ContactPage /> },
        Route::Terms => html! { <LegalPage kind={LegalKind::Terms} /> },
        Route::Privacy => html! { <LegalPage kind={LegalKind::Privacy} /> },
        Route::Cookies => html! { <LegalPage kind={LegalKind::Cookies} /> },
        Route::Responsible => html! { <LegalPage kind={LegalKind::Responsible} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

// Provide site config as context (so any page/component can read the site
// identity and embed token without prop drilling).
#[function_component(App)]
pub fn app() -> Html {
    let config = SiteConfig::default();
    html! {
        <ContextProvider<SiteConfig> context={config}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<SiteConfig>>
    }
}
