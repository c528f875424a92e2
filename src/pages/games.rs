use crate::components::{GameCard, Layout};
use crate::config::SiteConfig;
use crate::model::CATALOG;
use crate::util;
use yew::prelude::*;

/// Full catalog listing.
#[function_component(GamesPage)]
pub fn games_page() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    {
        let title = util::page_title("Games", &config.site_name);
        use_effect_with(title, move |title| {
            util::set_document_title(title);
            || ()
        });
    }

    let cards: Html = CATALOG
        .iter()
        .map(|game| html! { <GameCard {game} /> })
        .collect();

    html! {
        <Layout>
            <section class="page-header">
                <h1>{"All Games"}</h1>
            </section>
            <section class="game-section">
                <div class="game-grid">{ cards }</div>
            </section>
        </Layout>
    }
}
