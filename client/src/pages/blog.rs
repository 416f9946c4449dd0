//! Blog index and post pages.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::page_hero::PageHero;
use crate::error::PageError;
use crate::routes::AppRoute;
use crate::state::blog::{POSTS, find_post, post_href, render_markdown};

#[component]
pub fn BlogPage() -> impl IntoView {
    view! {
        <Title text=AppRoute::Blog.title()/>
        <PageHero title="The Lumina blog" subtitle="Product news, guides and stories from the community."/>
        <section class="post-list">
            {POSTS
                .iter()
                .map(|post| {
                    view! {
                        <article class="card post-card">
                            <p class="post-card__meta">{post.date}" · "{post.author}</p>
                            <h2>
                                <a href=post_href(post.slug)>{post.title}</a>
                            </h2>
                            <p>{post.summary}</p>
                            <ul class="tag-list">
                                {post.tags.iter().map(|t| view! { <li class="tag">{*t}</li> }).collect::<Vec<_>>()}
                            </ul>
                        </article>
                    }
                })
                .collect::<Vec<_>>()}
        </section>
    }
}

/// Single post. Unknown slugs raise `PageError::NotFound` to the app's
/// error boundary.
#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();

    move || {
        let slug = params.read().get("slug").unwrap_or_default();
        find_post(&slug).ok_or(PageError::NotFound).map(|post| {
            view! {
                <Title text=format!("{} · Lumina", post.title)/>
                <article class="post">
                    <a href=AppRoute::Blog.path() class="post__back">
                        "← All posts"
                    </a>
                    <h1>{post.title}</h1>
                    <p class="post__meta">{post.date}" · "{post.author}</p>
                    <div class="post__body" inner_html=render_markdown(post.body)></div>
                </article>
            }
        })
    }
}
