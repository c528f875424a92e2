use crate::components::{GameCard, Layout};
use crate::config::SiteConfig;
use crate::model::{featured_games, new_arrivals};
use crate::routes::Route;
use crate::util;
use yew::prelude::*;
use yew_router::prelude::*;

/// Landing page: hero plus the two catalog sections the site promotes.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    {
        let title = format!("{} - Free Social Casino Games", config.site_name);
        use_effect_with(title, move |title| {
            util::set_document_title(title);
            || ()
        });
    }

    let featured: Html = featured_games()
        .map(|game| html! { <GameCard {game} /> })
        .collect();
    let arrivals: Html = new_arrivals()
        .map(|game| html! { <GameCard {game} /> })
        .collect();

    html! {
        <Layout>
            <section class="hero">
                <div class="hero-content">
                    <h1 class="hero-title">{ config.site_name.clone() }</h1>
                    <p class="hero-description">{ config.tagline.clone() }</p>
                    <Link<Route> to={Route::Games} classes="hero-cta">{"Browse All Games"}</Link<Route>>
                </div>
            </section>
            <section class="game-section">
                <h2 class="section-title">{"Featured Games"}</h2>
                <div class="game-grid">{ featured }</div>
            </section>
            <section class="game-section">
                <h2 class="section-title">{"New Arrivals"}</h2>
                <div class="game-grid">{ arrivals }</div>
            </section>
        </Layout>
    }
}
