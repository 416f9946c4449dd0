use super::*;

#[test]
fn find_post_by_slug() {
    let post = find_post("prompting-tips").unwrap();
    assert_eq!(post.title, "Five Prompting Tips From Our Community");
}

#[test]
fn unknown_slug_is_none() {
    assert!(find_post("does-not-exist").is_none());
    assert!(find_post("").is_none());
}

#[test]
fn slugs_are_unique_and_url_safe() {
    for (i, a) in POSTS.iter().enumerate() {
        assert!(a.slug.chars().all(|c| c.is_ascii_lowercase() || c == '-'), "{}", a.slug);
        for b in &POSTS[i + 1..] {
            assert_ne!(a.slug, b.slug);
        }
    }
}

#[test]
fn post_href_prefixes_blog() {
    assert_eq!(post_href("introducing-lumina"), "/blog/introducing-lumina");
}

#[test]
fn render_markdown_emits_headings_and_lists() {
    let html = render_markdown("## Title\n\n- one\n- two\n");
    assert!(html.contains("<h2>Title</h2>"));
    assert!(html.contains("<li>one</li>"));
}

#[test]
fn render_markdown_emits_emphasis_and_quotes() {
    let html = render_markdown("> **bold** and ~~gone~~");
    assert!(html.contains("<blockquote>"));
    assert!(html.contains("<strong>bold</strong>"));
    assert!(html.contains("<del>gone</del>"));
}

#[test]
fn every_post_body_renders_to_paragraphs() {
    for post in POSTS {
        assert!(render_markdown(post.body).contains("<p>"), "{}", post.slug);
    }
}
