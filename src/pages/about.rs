use crate::components::Layout;
use crate::config::SiteConfig;
use crate::util;
use yew::prelude::*;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    {
        let title = util::page_title("About Us", &config.site_name);
        use_effect_with(title, move |title| {
            util::set_document_title(title);
            || ()
        });
    }

    html! {
        <Layout>
            <section class="page-header">
                <h1>{"About Us"}</h1>
            </section>
            <section class="page-content">
                <p>{ format!(
                    "{} is a free social gaming destination. Every game in our \
                     collection can be played instantly in your browser, with no \
                     downloads, no registration, and no real money involved.",
                    config.site_name
                ) }</p>
                <p>{"Our catalog is hand-picked for fun. Games are provided by \
                     third-party studios and embedded directly on each game page; \
                     we never alter or interfere with their gameplay."}</p>
            </section>
        </Layout>
    }
}
