//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::{NavigateOptions, path};

use crate::components::{footer::Footer, header::Header, status_page::StatusPage};
use crate::error::PageError;
use crate::pages::{
    about::AboutPage,
    blog::{BlogPage, BlogPostPage},
    chat::ChatPage,
    community::CommunityPage,
    companion::CompanionPage,
    contact::ContactPage,
    create::CreatePage,
    digital_human::DigitalHumanPage,
    features::FeaturesPage,
    game::GamePage,
    groups::GroupsPage,
    help::HelpPage,
    home::HomePage,
    legal::{PrivacyPage, TermsPage},
    login::LoginPage,
    media::MediaPage,
    membership::MembershipPage,
    profile::ProfilePage,
    psych_test::PsychTestPage,
    register::RegisterPage,
    settings::SettingsPage,
    status::{NotFoundPage, ServerErrorPage},
};
use crate::routes::AppRoute;
use crate::state::ui::UiState;
use crate::util::{dark_mode, legacy_hash};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="light">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" href="/images/logo.svg" type="image/svg+xml"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the theme/UI context and mounts every page under the shared
/// header and footer.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    // Apply the stored theme once the browser takes over from SSR.
    Effect::new(move || {
        let theme = dark_mode::read_preference();
        dark_mode::apply(theme);
        ui.update(|u| u.theme = theme);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/lumina.css"/>
        <Title text=AppRoute::Home.title()/>

        <Router>
            <LegacyHashRedirect/>
            <Header/>
            <main class="site-main">
                <ErrorBoundary fallback=|errors| {
                    let error = move || {
                        errors
                            .get()
                            .into_iter()
                            .find_map(|(_, e)| {
                                leptos::logging::error!("render error: {e}");
                                e.downcast_ref::<PageError>().copied()
                            })
                            .unwrap_or(PageError::Server)
                    };
                    view! { {move || view! { <StatusPage error=error()/> }} }
                }>
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/about") view=AboutPage/>
                        <Route path=path!("/features") view=FeaturesPage/>
                        <Route path=path!("/chat") view=ChatPage/>
                        <Route path=path!("/companion") view=CompanionPage/>
                        <Route path=path!("/create") view=CreatePage/>
                        <Route path=path!("/digital-human") view=DigitalHumanPage/>
                        <Route path=path!("/game") view=GamePage/>
                        <Route path=path!("/community") view=CommunityPage/>
                        <Route path=path!("/blog") view=BlogPage/>
                        <Route path=path!("/blog/:slug") view=BlogPostPage/>
                        <Route path=path!("/groups") view=GroupsPage/>
                        <Route path=path!("/media") view=MediaPage/>
                        <Route path=path!("/membership") view=MembershipPage/>
                        <Route path=path!("/psych-test") view=PsychTestPage/>
                        <Route path=path!("/login") view=LoginPage/>
                        <Route path=path!("/register") view=RegisterPage/>
                        <Route path=path!("/contact") view=ContactPage/>
                        <Route path=path!("/profile") view=ProfilePage/>
                        <Route path=path!("/settings") view=SettingsPage/>
                        <Route path=path!("/help") view=HelpPage/>
                        <Route path=path!("/terms") view=TermsPage/>
                        <Route path=path!("/privacy") view=PrivacyPage/>
                        <Route path=path!("/error") view=ServerErrorPage/>
                    </Routes>
                </ErrorBoundary>
            </main>
            <Footer/>
        </Router>
    }
}

/// Rewrites old `/#/path` links to the routed path on first load.
#[component]
fn LegacyHashRedirect() -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = legacy_hash::pending_redirect() {
            leptos::logging::log!("redirecting legacy link to {path}");
            navigate(&path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
