use crate::config::SiteConfig;
use crate::routes::Route;
use crate::util::copyright_year;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let disclaimer = format!(
        "The domain ({}) is a website designed solely for entertainment purposes \
         where users can play games without risking any real money. It does not \
         involve any form of 'real-money gambling' or provide chances to earn \
         actual money based on gameplay.",
        config.domain
    );

    html! {
        <footer class="footer">
            <div class="footer-content">
                <div class="footer-links">
                    <Link<Route> to={Route::Terms} classes="footer-link">{"Terms & Conditions"}</Link<Route>>
                    <Link<Route> to={Route::Privacy} classes="footer-link">{"Privacy Policy"}</Link<Route>>
                    <Link<Route> to={Route::Cookies} classes="footer-link">{"Cookie Policy"}</Link<Route>>
                    <Link<Route> to={Route::Responsible} classes="footer-link">{"Responsible Social Gaming"}</Link<Route>>
                </div>
                <div class="footer-bottom">
                    <p><strong>{"Disclaimer: "}</strong>{ disclaimer }</p>
                    <p>{ format!("© {} {}. All rights reserved.", copyright_year(), config.domain) }</p>
                </div>
            </div>
        </footer>
    }
}
