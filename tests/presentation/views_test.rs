use voxscribe::presentation::views::{escape_html, transcription_page, upload_form};

#[test]
fn upload_form_posts_multipart_to_upload() {
    let html = upload_form();

    assert!(html.contains(r#"action="/upload""#));
    assert!(html.contains(r#"enctype="multipart/form-data""#));
    assert!(html.contains(r#"name="file""#));
    assert!(html.contains(r#"name="language""#));
    assert!(html.contains("en, hi, ru, cn, nl"));
}

#[test]
fn transcription_page_links_back_to_form() {
    let html = transcription_page("hello world");

    assert!(html.contains("<h1>Transcription Result</h1>"));
    assert!(html.contains("<p>hello world</p>"));
    assert!(html.contains(r#"<a href="/">Go back</a>"#));
}

#[test]
fn escape_html_replaces_markup_characters() {
    assert_eq!(
        escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
        "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;"
    );
}

#[test]
fn escape_html_leaves_plain_text_alone() {
    assert_eq!(escape_html("привет мир"), "привет мир");
}
