use crate::components::Layout;
use crate::config::SiteConfig;
use crate::util;
use yew::prelude::*;

/// Which of the four legal pages to render. They share one component since
/// the chrome and structure are identical.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegalKind {
    Terms,
    Privacy,
    Cookies,
    Responsible,
}

impl LegalKind {
    fn heading(self) -> &'static str {
        match self {
            Self::Terms => "Terms & Conditions",
            Self::Privacy => "Privacy Policy",
            Self::Cookies => "Cookie Policy",
            Self::Responsible => "Responsible Social Gaming",
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct LegalPageProps {
    pub kind: LegalKind,
}

#[function_component(LegalPage)]
pub fn legal_page(props: &LegalPageProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    {
        let title = util::page_title(props.kind.heading(), &config.site_name);
        use_effect_with(title, move |title| {
            util::set_document_title(title);
            || ()
        });
    }

    let body = match props.kind {
        LegalKind::Terms => html! {
            <>
                <p>{ format!(
                    "By using {}, you agree that all games on this site are \
                     provided for entertainment only. No purchases are offered \
                     and no winnings of any kind can be earned or withdrawn.",
                    config.domain
                ) }</p>
                <p>{"Games are supplied by third-party providers and may be \
                     changed or removed at any time without notice."}</p>
            </>
        },
        LegalKind::Privacy => html! {
            <>
                <p>{"We do not require accounts and we do not collect personal \
                     data. The only thing stored in your browser is a single \
                     interface preference (whether the sidebar is collapsed)."}</p>
                <p>{"Embedded games are served by their providers, who may apply \
                     their own privacy policies inside the game frame."}</p>
            </>
        },
        LegalKind::Cookies => html! {
            <>
                <p>{"This site sets no tracking cookies. Local storage is used \
                     solely to remember your sidebar preference between visits."}</p>
                <p>{"Third-party game providers may set their own cookies from \
                     within the embedded game frame."}</p>
            </>
        },
        LegalKind::Responsible => html! {
            <>
                <p>{"All games here are free social games. They involve no real \
                     money, no prizes, and no gambling of any kind."}</p>
                <p>{"Play for fun, take breaks, and keep gaming a healthy part \
                     of your day. If play ever stops feeling like entertainment, \
                     step away."}</p>
            </>
        },
    };

    html! {
        <Layout>
            <section class="page-header">
                <h1>{ props.kind.heading() }</h1>
            </section>
            <section class="page-content">
                { body }
            </section>
        </Layout>
    }
}
