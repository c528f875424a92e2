use crate::model::GameRecord;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameCardProps {
    pub game: &'static GameRecord,
}

/// Listing card linking to the game's page.
#[function_component(GameCard)]
pub fn game_card(props: &GameCardProps) -> Html {
    let game = props.game;
    let to = Route::Game {
        slug: game.slug.to_string(),
    };
    html! {
        <div class="game-card">
            <Link<Route> to={to} classes="game-card-link">
                <img class="game-card-image" src={game.thumb} alt={game.title} loading="lazy" />
                <div class="game-card-body">
                    <h3 class="game-card-title">{ game.title }</h3>
                    <span class="game-card-cta">{"Play Now"}</span>
                </div>
            </Link<Route>>
        </div>
    }
}
