use crate::components::{Breadcrumb, GameFrame, Layout};
use crate::config::SiteConfig;
use crate::model::find_game;
use crate::pages::NotFoundPage;
use crate::util;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GamePageProps {
    pub slug: AttrValue,
}

/// Per-game page: breadcrumb, title, and the embedded game frame.
#[function_component(GamePage)]
pub fn game_page(props: &GamePageProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let game = find_game(&props.slug);

    // Hooks run unconditionally; the unknown-slug case carries no title.
    {
        let title = game.map(|g| util::page_title(g.title, &config.site_name));
        use_effect_with(title, move |title| {
            if let Some(title) = title {
                util::set_document_title(title);
            }
            || ()
        });
    }

    let Some(game) = game else {
        return html! { <NotFoundPage /> };
    };
    let iframe_url = game.iframe_url(&config.embed_token);

    html! {
        <Layout>
            <section class="game-header">
                <div class="game-header-content">
                    <Breadcrumb current={game.title} />
                    <h1 class="game-title">{ game.title }</h1>
                </div>
            </section>
            <section class="game-container">
                <div class="game-wrapper">
                    <GameFrame title={game.title} iframe_url={iframe_url} />
                </div>
            </section>
        </Layout>
    }
}
