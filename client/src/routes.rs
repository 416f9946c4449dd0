//! Route table shared by the router, navigation chrome and page titles.
//!
//! `app::App` mounts one `<Route>` per variant with the same pattern written
//! as a `path!` literal; the host's route-list test checks that the two agree.
//! Titles and header membership live only here.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    About,
    Features,
    Chat,
    Companion,
    Create,
    DigitalHuman,
    Game,
    Community,
    Blog,
    BlogPost,
    Groups,
    Media,
    Membership,
    PsychTest,
    Login,
    Register,
    Contact,
    Profile,
    Settings,
    Help,
    Terms,
    Privacy,
    ServerError,
}

impl AppRoute {
    pub const ALL: [Self; 24] = [
        Self::Home,
        Self::About,
        Self::Features,
        Self::Chat,
        Self::Companion,
        Self::Create,
        Self::DigitalHuman,
        Self::Game,
        Self::Community,
        Self::Blog,
        Self::BlogPost,
        Self::Groups,
        Self::Media,
        Self::Membership,
        Self::PsychTest,
        Self::Login,
        Self::Register,
        Self::Contact,
        Self::Profile,
        Self::Settings,
        Self::Help,
        Self::Terms,
        Self::Privacy,
        Self::ServerError,
    ];

    /// Router pattern. Only `BlogPost` carries a parameter.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Features => "/features",
            Self::Chat => "/chat",
            Self::Companion => "/companion",
            Self::Create => "/create",
            Self::DigitalHuman => "/digital-human",
            Self::Game => "/game",
            Self::Community => "/community",
            Self::Blog => "/blog",
            Self::BlogPost => "/blog/:slug",
            Self::Groups => "/groups",
            Self::Media => "/media",
            Self::Membership => "/membership",
            Self::PsychTest => "/psych-test",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Contact => "/contact",
            Self::Profile => "/profile",
            Self::Settings => "/settings",
            Self::Help => "/help",
            Self::Terms => "/terms",
            Self::Privacy => "/privacy",
            Self::ServerError => "/error",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Features => "Features",
            Self::Chat => "Chat",
            Self::Companion => "Companion",
            Self::Create => "Create",
            Self::DigitalHuman => "Digital Human",
            Self::Game => "Story Game",
            Self::Community => "Community",
            Self::Blog => "Blog",
            Self::BlogPost => "Blog Post",
            Self::Groups => "Groups",
            Self::Media => "Media",
            Self::Membership => "Membership",
            Self::PsychTest => "Personality Test",
            Self::Login => "Log in",
            Self::Register => "Sign up",
            Self::Contact => "Contact",
            Self::Profile => "Profile",
            Self::Settings => "Settings",
            Self::Help => "Help",
            Self::Terms => "Terms",
            Self::Privacy => "Privacy",
            Self::ServerError => "Error",
        }
    }

    /// Document title for the route.
    pub fn title(self) -> String {
        match self {
            Self::Home => "Lumina · Your AI companion".to_owned(),
            other => format!("{} · Lumina", other.label()),
        }
    }

    /// Static routes can be linked to directly.
    pub fn href(self) -> Option<&'static str> {
        let path = self.path();
        (!path.contains(':')).then_some(path)
    }
}

/// Header navigation, in display order.
pub const NAV: &[AppRoute] = &[
    AppRoute::Home,
    AppRoute::Features,
    AppRoute::Chat,
    AppRoute::Create,
    AppRoute::DigitalHuman,
    AppRoute::Game,
    AppRoute::Community,
    AppRoute::Media,
    AppRoute::Membership,
];

/// Footer link columns.
pub const FOOTER: &[(&str, &[AppRoute])] = &[
    ("Product", &[AppRoute::Features, AppRoute::Membership, AppRoute::Companion, AppRoute::PsychTest]),
    ("Community", &[AppRoute::Community, AppRoute::Groups, AppRoute::Blog, AppRoute::Media]),
    ("Company", &[AppRoute::About, AppRoute::Contact, AppRoute::Help]),
    ("Legal", &[AppRoute::Terms, AppRoute::Privacy]),
];

/// Whether `pathname` should highlight `route` in the navigation.
pub fn is_active(route: AppRoute, pathname: &str) -> bool {
    let path = route.path();
    if path == "/" {
        return pathname == "/";
    }
    pathname == path || pathname.strip_prefix(path).is_some_and(|rest| rest.starts_with('/'))
}
