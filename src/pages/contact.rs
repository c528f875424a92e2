use crate::components::Layout;
use crate::config::SiteConfig;
use crate::util;
use yew::prelude::*;

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    {
        let title = util::page_title("Contact Us", &config.site_name);
        use_effect_with(title, move |title| {
            util::set_document_title(title);
            || ()
        });
    }

    let email = format!("support@{}", config.domain);
    html! {
        <Layout>
            <section class="page-header">
                <h1>{"Contact Us"}</h1>
            </section>
            <section class="page-content">
                <p>{"Questions, feedback, or a broken game to report? We read \
                     everything that lands in our inbox."}</p>
                <p>
                    <i class="fas fa-envelope"></i>{" "}
                    <a href={format!("mailto:{}", email)}>{ email.clone() }</a>
                </p>
            </section>
        </Layout>
    }
}
