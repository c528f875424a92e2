//! Application routes.

use yew_router::prelude::*;

/// The site's fixed navigation surface plus one dynamic game route.
#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/games")]
    Games,
    #[at("/games/:slug")]
    Game { slug: String },
    #[at("/pages/about")]
    About,
    #[at("/pages/contact")]
    Contact,
    #[at("/pages/terms")]
    Terms,
    #[at("/pages/privacy")]
    Privacy,
    #[at("/pages/cookies")]
    Cookies,
    #[at("/pages/responsible")]
    Responsible,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_paths_recognized() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/games"), Some(Route::Games));
        assert_eq!(Route::recognize("/pages/about"), Some(Route::About));
        assert_eq!(Route::recognize("/pages/contact"), Some(Route::Contact));
        assert_eq!(Route::recognize("/pages/terms"), Some(Route::Terms));
        assert_eq!(Route::recognize("/pages/privacy"), Some(Route::Privacy));
        assert_eq!(Route::recognize("/pages/cookies"), Some(Route::Cookies));
        assert_eq!(
            Route::recognize("/pages/responsible"),
            Some(Route::Responsible)
        );
    }

    #[test]
    fn game_path_captures_slug() {
        assert_eq!(
            Route::recognize("/games/diamond-destiny"),
            Some(Route::Game {
                slug: "diamond-destiny".into()
            })
        );
    }

    #[test]
    fn unknown_path_falls_back_to_not_found() {
        assert_eq!(Route::recognize("/nope/nothing"), Some(Route::NotFound));
    }
}
