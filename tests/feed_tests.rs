use tldr_news::errors::DigestError;
use tldr_news::feed::parse_top_stories;

/// Tests for feed parsing and top-N truncation, run against static
/// documents instead of the live feed.

fn rss_document(item_count: usize) -> String {
    let mut items = String::new();
    for n in 1..=item_count {
        items.push_str(&format!(
            "<item><title>Story {n}</title><link>http://example.com/{n}</link></item>"
        ));
    }
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <rss version=\"2.0\"><channel>\
         <title>Top stories</title>\
         <link>http://example.com</link>\
         <description>Test feed</description>\
         {items}\
         </channel></rss>"
    )
}

#[test]
fn test_feed_smaller_than_limit_is_taken_whole() {
    let stories = parse_top_stories(rss_document(3).as_bytes(), 5).unwrap();

    assert_eq!(stories.len(), 3);
    assert_eq!(stories[0].title, "Story 1");
    assert_eq!(stories[2].link, "http://example.com/3");
}

#[test]
fn test_feed_larger_than_limit_is_truncated_in_document_order() {
    let stories = parse_top_stories(rss_document(8).as_bytes(), 5).unwrap();

    let titles: Vec<&str> = stories.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        ["Story 1", "Story 2", "Story 3", "Story 4", "Story 5"]
    );
}

#[test]
fn test_entry_without_link_is_skipped() {
    let document = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
        <rss version=\"2.0\"><channel>\
        <title>Top stories</title>\
        <link>http://example.com</link>\
        <description>Test feed</description>\
        <item><title>No link here</title></item>\
        <item><title>Story 2</title><link>http://example.com/2</link></item>\
        </channel></rss>";

    let stories = parse_top_stories(document.as_bytes(), 5).unwrap();

    assert_eq!(stories.len(), 1);
    assert_eq!(stories[0].title, "Story 2");
}

#[test]
fn test_atom_feed_is_accepted() {
    // Reddit serves Atom; feed-rs detects the format from the document.
    let document = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Top stories</title>
  <id>urn:feed</id>
  <updated>2026-08-06T00:00:00Z</updated>
  <entry>
    <title>Story 1</title>
    <id>urn:story-1</id>
    <updated>2026-08-06T00:00:00Z</updated>
    <link href="http://example.com/1"/>
  </entry>
</feed>"#;

    let stories = parse_top_stories(document.as_bytes(), 5).unwrap();

    assert_eq!(stories.len(), 1);
    assert_eq!(stories[0].title, "Story 1");
    assert_eq!(stories[0].link, "http://example.com/1");
}

#[test]
fn test_unparseable_document_is_a_feed_error() {
    let result = parse_top_stories(b"this is not a feed", 5);

    assert!(matches!(result, Err(DigestError::FeedError(_))));
}
