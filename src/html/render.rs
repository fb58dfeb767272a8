//! Paragraph and run rendering

use crate::document::{Paragraph, Run};
use crate::html::{HtmlContent, HtmlDocument, HtmlNode, HtmlOptions};

/// Inline style for underlined runs
const UNDERLINE_STYLE: &str = "text-decoration: underline;";

/// Render paragraphs as a complete HTML document string
pub fn render_document<I>(paragraphs: I, options: &HtmlOptions) -> String
where
    I: IntoIterator<Item = Paragraph>,
{
    let mut document = HtmlDocument::new(options.doctype, &options.title);
    for paragraph in paragraphs {
        document.body.push(block_for(&paragraph));
    }
    document.to_string()
}

/// Block element for a paragraph: `h1`-`h6` for headings, `p` otherwise
///
/// Heading status comes from the first run, and a heading holds only that
/// run's text. Later runs of a heading paragraph are not rendered.
pub fn block_for(paragraph: &Paragraph) -> HtmlNode {
    let first = paragraph.runs.first();
    if let Some((run, level)) = first.and_then(|r| r.heading_level.map(|l| (r, l))) {
        return HtmlNode::new(format!("h{}", level)).with_text(run.text.as_str());
    }

    paragraph
        .runs
        .iter()
        .fold(HtmlNode::new("p"), |p, run| p.with_child(inline_content_for(run)))
}

/// Inline content for a run
///
/// Wrapping order is fixed: `em` innermost, then `strong`, then the
/// underline `span` outermost.
pub fn inline_content_for(run: &Run) -> HtmlContent {
    let mut content = HtmlContent::Text(run.text.clone());
    if run.italic {
        content = HtmlNode::new("em").with_child(content).into();
    }
    if run.bold {
        content = HtmlNode::new("strong").with_child(content).into();
    }
    if run.underline {
        content = HtmlNode::new("span")
            .with_attr("style", UNDERLINE_STYLE)
            .with_child(content)
            .into();
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_run() {
        assert_eq!(inline_content_for(&Run::new("plain")).to_string(), "plain");
    }

    #[test]
    fn test_bold_italic_nesting() {
        let run = Run::new("TEXT").with_bold(true).with_italic(true);
        assert_eq!(
            inline_content_for(&run).to_string(),
            "<strong><em>TEXT</em></strong>"
        );
    }

    #[test]
    fn test_all_flags_nesting() {
        let run = Run::new("TEXT")
            .with_bold(true)
            .with_italic(true)
            .with_underline(true);
        assert_eq!(
            inline_content_for(&run).to_string(),
            r#"<span style="text-decoration: underline;"><strong><em>TEXT</em></strong></span>"#
        );
    }

    #[test]
    fn test_underline_only() {
        let run = Run::new("u").with_underline(true);
        assert_eq!(
            inline_content_for(&run).to_string(),
            r#"<span style="text-decoration: underline;">u</span>"#
        );
    }

    #[test]
    fn test_run_text_is_escaped() {
        let run = Run::new("a < b & c").with_bold(true);
        assert_eq!(
            inline_content_for(&run).to_string(),
            "<strong>a &lt; b &amp; c</strong>"
        );
    }

    #[test]
    fn test_empty_paragraph_block() {
        assert_eq!(block_for(&Paragraph::default()).to_string(), "<p></p>");
    }

    #[test]
    fn test_heading_uses_only_first_run() {
        // Known quirk: trailing runs of a heading paragraph are dropped
        let paragraph = Paragraph::new(vec![
            Run::new("Title").with_heading_level(3).with_bold(true),
            Run::new(" and more").with_heading_level(3),
        ]);
        assert_eq!(block_for(&paragraph).to_string(), "<h3>Title</h3>");
    }

    #[test]
    fn test_heading_status_read_from_first_run() {
        let paragraph = Paragraph::new(vec![
            Run::new("body "),
            Run::new("heading?").with_heading_level(1),
        ]);
        assert_eq!(block_for(&paragraph).to_string(), "<p>body heading?</p>");
    }
}
