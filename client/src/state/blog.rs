//! Blog posts and Markdown rendering.
//!
//! Post bodies are authored as Markdown and rendered to HTML once per view.
//! All content is compiled into the bundle, so raw HTML in bodies is trusted.

use pulldown_cmark::{Options, Parser, html};

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub author: &'static str,
    pub date: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub body: &'static str,
}

pub const POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "introducing-lumina",
        title: "Introducing Lumina",
        author: "The Lumina Team",
        date: "2024-03-02",
        summary: "One place to chat, create and connect with AI that feels personal.",
        tags: &["announcement"],
        body: "## Why we built Lumina\n\n\
               Most AI tools feel like forms. We wanted something closer to a **friend with superpowers**.\n\n\
               ## What's inside\n\n\
               - A thoughtful assistant for everyday questions\n\
               - Companions with their own personalities\n\
               - A creation studio for images, stories and music\n\n\
               We can't wait to see what you make.",
    },
    BlogPost {
        slug: "prompting-tips",
        title: "Five Prompting Tips From Our Community",
        author: "Priya S.",
        date: "2024-04-18",
        summary: "Small changes that make a big difference to what you get back.",
        tags: &["guides", "community"],
        body: "Our community shared hundreds of tips this month. Here are the favourites.\n\n\
               1. **Give context.** Say who the answer is for.\n\
               2. **Show an example.** One sample beats three adjectives.\n\
               3. **Ask for options.** Three drafts are easier to judge than one.\n\
               4. **Iterate.** Reply with what you liked and what to change.\n\
               5. **Set the tone.** Playful, formal, brief: just say it.\n\n\
               Share yours in the `#LuminaTips` thread!",
    },
    BlogPost {
        slug: "meet-the-digital-humans",
        title: "Meet the Digital Humans",
        author: "Jonah K.",
        date: "2024-06-09",
        summary: "A behind-the-scenes look at the faces and voices of Lumina.",
        tags: &["product"],
        body: "Digital humans give Lumina a face and a voice.\n\n\
               > We wanted every conversation to feel like talking to someone who is genuinely listening.\n\n\
               Try Nova today from the *Digital Human* page.",
    },
];

pub fn find_post(slug: &str) -> Option<&'static BlogPost> {
    POSTS.iter().find(|p| p.slug == slug)
}

pub fn post_href(slug: &str) -> String {
    format!("/blog/{slug}")
}

/// Render Markdown to an HTML fragment.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
