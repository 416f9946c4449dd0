use std::collections::BTreeSet;

use client::routes::AppRoute;

use super::*;

/// Axum spells parameters `{name}`, the route table spells them `:name`.
fn axum_pattern(path: &str) -> String {
    path.split('/')
        .map(|seg| match seg.strip_prefix(':') {
            Some(name) => format!("{{{name}}}"),
            None => seg.to_owned(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn axum_pattern_rewrites_parameters() {
    assert_eq!(axum_pattern("/blog/:slug"), "/blog/{slug}");
    assert_eq!(axum_pattern("/"), "/");
    assert_eq!(axum_pattern("/digital-human"), "/digital-human");
}

#[tokio::test]
async fn mounted_routes_match_route_table() {
    let mounted: BTreeSet<String> = generate_route_list(client::app::App)
        .iter()
        .map(|listing| listing.path().to_owned())
        .collect();
    let declared: BTreeSet<String> = AppRoute::ALL.iter().map(|r| axum_pattern(r.path())).collect();
    assert_eq!(declared.len(), AppRoute::ALL.len());
    assert_eq!(mounted, declared);
}
