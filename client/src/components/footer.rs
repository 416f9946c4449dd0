//! Site footer with link columns.

use leptos::prelude::*;

use crate::components::logo::Logo;
use crate::routes::FOOTER;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__brand">
                <Logo/>
                <p>"Chat, create and connect with AI that feels personal."</p>
            </div>
            {FOOTER
                .iter()
                .map(|&(heading, links)| {
                    view! {
                        <div class="site-footer__column">
                            <h4>{heading}</h4>
                            <ul>
                                {links
                                    .iter()
                                    .filter_map(|route| route.href().map(|href| (href, route.label())))
                                    .map(|(href, label)| view! { <li><a href=href>{label}</a></li> })
                                    .collect::<Vec<_>>()}
                            </ul>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
            <p class="site-footer__legal">"© 2024 Lumina Labs. All conversations on this site are simulated."</p>
        </footer>
    }
}
