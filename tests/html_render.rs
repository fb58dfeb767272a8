//! Integration test: HTML rendering

mod common;

use common::{build_docx, document_xml, paragraph, run, styled_paragraph};
use docx_lite::{Doctype, Document, HtmlOptions};
use pretty_assertions::assert_eq;

fn open(body: &str) -> Document {
    common::init_logging();
    Document::from_bytes(build_docx(&document_xml(body))).unwrap()
}

#[test]
fn test_basic_conversion() {
    let doc = open(&[paragraph("hello"), paragraph("world")].concat());

    assert_eq!(
        doc.to_html(&HtmlOptions::new().with_title("basic")),
        concat!(
            "<!DOCTYPE html>",
            "<html>",
            "<head><title>basic</title></head>",
            "<body><p>hello</p><p>world</p></body>",
            "</html>"
        )
    );
}

#[test]
fn test_conversion_with_formatting() {
    let sentence = [
        run("This is a sentence with ", false, false, false),
        run("all", true, true, true),
        run(" formatting options in the middle of the sentence.", false, false, false),
    ]
    .concat();
    let link = format!(
        r#"<w:p><w:hyperlink r:id="rId4">{}</w:hyperlink></w:p>"#,
        run("A link", false, false, false)
    );

    let mut body = vec![
        paragraph("Normal"),
        format!("<w:p>{}</w:p>", run("Italic", false, true, false)),
        format!("<w:p>{}</w:p>", run("Bold", true, false, false)),
        format!("<w:p>{}</w:p>", run("Underline", false, false, true)),
        paragraph("Normal"),
        format!("<w:p>{}</w:p>", sentence),
    ];
    for level in 1..=6 {
        body.push(styled_paragraph(
            &format!("Heading{}", level),
            &run(&format!("Heading {}", level), false, false, false),
        ));
    }
    body.push(link);

    let doc = open(&body.concat());

    assert_eq!(
        doc.to_html(&HtmlOptions::from_pairs([("title", "formatting")])),
        concat!(
            "<!DOCTYPE html>",
            "<html>",
            "<head><title>formatting</title></head>",
            "<body>",
            "<p>Normal</p>",
            "<p><em>Italic</em></p>",
            "<p><strong>Bold</strong></p>",
            r#"<p><span style="text-decoration: underline;">Underline</span></p>"#,
            "<p>Normal</p>",
            "<p>",
            "This is a sentence with ",
            r#"<span style="text-decoration: underline;"><strong><em>all</em></strong></span>"#,
            " formatting options in the middle of the sentence.",
            "</p>",
            "<h1>Heading 1</h1>",
            "<h2>Heading 2</h2>",
            "<h3>Heading 3</h3>",
            "<h4>Heading 4</h4>",
            "<h5>Heading 5</h5>",
            "<h6>Heading 6</h6>",
            "<p>A link</p>",
            "</body>",
            "</html>"
        )
    );
}

#[test]
fn test_headings_by_style_name() {
    // "Titre1" is only a heading through its display name in styles.xml
    let doc = open(
        &[
            styled_paragraph("Titre1", &run("Chapitre", false, false, false)),
            styled_paragraph("Title", &run("Not a heading", false, false, false)),
        ]
        .concat(),
    );

    assert_eq!(
        doc.to_html(&HtmlOptions::default()),
        "<!DOCTYPE html><html><head><title></title></head><body><h1>Chapitre</h1><p>Not a heading</p></body></html>"
    );
}

#[test]
fn test_heading_renders_first_run_only() {
    let doc = open(&styled_paragraph(
        "Heading2",
        &[
            run("Intro", true, false, false),
            run(" continued", false, false, false),
        ]
        .concat(),
    ));

    assert_eq!(doc.text(), "Intro continued");
    assert!(doc
        .to_html(&HtmlOptions::default())
        .contains("<body><h2>Intro</h2></body>"));
}

#[test]
fn test_empty_paragraphs() {
    let doc = open(&"<w:p/>".repeat(3));

    assert_eq!(doc.paragraph_count(), 3);
    assert_eq!(doc.text(), "\n\n");
    assert!(doc
        .to_html(&HtmlOptions::default())
        .contains("<body><p></p><p></p><p></p></body>"));
}

#[test]
fn test_empty_body() {
    let doc = open("");

    assert_eq!(doc.text(), "");
    assert_eq!(
        doc.to_html(&HtmlOptions::default()),
        "<!DOCTYPE html><html><head><title></title></head><body></body></html>"
    );
}

#[test]
fn test_text_is_escaped() {
    let doc = open(&[
        paragraph("a &lt; b &amp;&amp; c"),
        styled_paragraph("Heading1", &run("Q&amp;A", false, false, false)),
    ]
    .concat());

    assert_eq!(doc.text(), "a < b && c\nQ&A");
    let html = doc.to_html(&HtmlOptions::new().with_title("<notes>"));
    assert!(html.contains("<title>&lt;notes&gt;</title>"));
    assert!(html.contains("<p>a &lt; b &amp;&amp; c</p><h1>Q&amp;A</h1>"));
}

#[test]
fn test_doctype_option() {
    let doc = open(&paragraph("x"));

    let html = doc.to_html(&HtmlOptions::from_pairs([
        ("doctype", "xhtml"),
        ("charset", "utf-8"),
    ]));
    assert!(html.starts_with(Doctype::Xhtml1Strict.declaration()));
    assert!(html.ends_with("<body><p>x</p></body></html>"));

    let html = doc.to_html(&HtmlOptions::new().with_doctype(Doctype::Html4Strict));
    assert!(html.starts_with(r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN""#));
    assert!(html.contains("<html><head>"));
}

#[test]
fn test_rendering_is_repeatable() {
    let doc = open(&paragraph("same"));
    let options = HtmlOptions::default();
    assert_eq!(doc.to_html(&options), doc.to_html(&options));
}
