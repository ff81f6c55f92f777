//! Integration tests for the parsing module.
//!
//! Blocks are compared either structurally with `pretty_assertions` or as a
//! one-line-per-block outline with `insta` inline snapshots.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    blocks::{ContentBlock, HeadingLevel, ImageRef, SnippetRef},
    parse_blocks,
};
use outline::outline;

fn parse(text: &str) -> Vec<ContentBlock> {
    let blocks = parse_blocks(text, "demo");
    invariants::check(&blocks);
    blocks
}

fn paragraph(text: &str) -> ContentBlock {
    ContentBlock::Paragraph {
        text: text.to_string(),
    }
}

fn image(alt: &str, src: &str) -> ImageRef {
    ImageRef {
        alt: alt.to_string(),
        src: src.to_string(),
    }
}

// Fixture-based snapshot tests

#[test]
fn fixture_project_writeup() {
    let blocks = parse(include_str!("fixtures/project_writeup.txt"));

    insta::assert_snapshot!(outline(&blocks), @r#"
    h2 #demo-overview: Overview
    p: Folio renders project write-ups.⏎Line two of the intro, see [the site](https://example.com).
    carousel: /img/home.png, /img/project.png, /img/snippet.png
    h3 #demo-stack: Stack
    list: Rust | Dioxus [docs](https://dioxuslabs.com)
    snippet: parser_core "The block parser"
    video: https://www.youtube.com/embed/abc123
    p: @youtube(not a url)
    h2 #demo-changelog (hidden): Changelog
    h2 #demo-overview-2: Overview
    img: Lone image </img/lone.png>
    p: Trailing text right after an image.
    "#);
}

#[test]
fn fixture_is_stable_across_line_endings() {
    let lf = include_str!("fixtures/project_writeup.txt");
    let crlf = lf.replace('\n', "\r\n");
    let escaped = lf.replace('\n', "\\n");

    assert_eq!(parse(&crlf), parse(lf));
    assert_eq!(parse(&escaped), parse(lf));
}

// Plain text

#[rstest]
#[case("Just a sentence.")]
#[case("  padded sentence  ")]
#[case("first line\nsecond line")]
#[case("tabs\tand [brackets] stay")]
fn text_without_directives_is_one_trimmed_paragraph(#[case] input: &str) {
    assert_eq!(parse(input), vec![paragraph(input.trim())]);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\n\t\n")]
#[case("\\n\\n")]
fn blank_input_yields_no_blocks(#[case] input: &str) {
    assert!(parse(input).is_empty());
}

#[test]
fn blank_lines_separate_paragraphs() {
    assert_eq!(
        parse("one\n\ntwo"),
        vec![paragraph("one"), paragraph("two")]
    );
}

#[test]
fn directive_lines_end_paragraphs() {
    assert_eq!(
        parse("intro\n## Next"),
        vec![
            paragraph("intro"),
            ContentBlock::Heading {
                level: HeadingLevel::H2,
                text: "Next".into(),
                id: "demo-next".into(),
                toc_hidden: false,
            },
        ]
    );
}

// Images and carousels

#[test]
fn single_image_is_never_a_carousel() {
    assert_eq!(
        parse("![a](x.png)"),
        vec![ContentBlock::Image(image("a", "x.png"))]
    );
}

#[rstest]
#[case("![a](1.png)\n![b](2.png)")]
#[case("![a](1.png)\n\n![b](2.png)")]
#[case("\n![a](1.png)\n\n\n![b](2.png)\n\n")]
fn consecutive_images_form_one_carousel(#[case] input: &str) {
    assert_eq!(
        parse(input),
        vec![ContentBlock::Carousel {
            images: vec![image("a", "1.png"), image("b", "2.png")]
        }]
    );
}

#[test]
fn text_between_images_splits_the_run() {
    assert_eq!(
        parse("![a](1.png)\nbetween\n![b](2.png)"),
        vec![
            ContentBlock::Image(image("a", "1.png")),
            paragraph("between"),
            ContentBlock::Image(image("b", "2.png")),
        ]
    );
}

#[test]
fn image_with_trailing_text_is_a_paragraph() {
    assert_eq!(
        parse("![a](1.png) caption"),
        vec![paragraph("![a](1.png) caption")]
    );
}

// Headings

#[test]
fn repeated_headings_get_distinct_ids() {
    let ids: Vec<_> = parse("## Setup\ntext\n## Setup")
        .into_iter()
        .filter_map(|b| match b {
            ContentBlock::Heading { id, .. } => Some(id),
            _ => None,
        })
        .collect();
    assert_eq!(ids, vec!["demo-setup", "demo-setup-2"]);
}

#[test]
fn hidden_heading_keeps_text_without_marker() {
    assert_eq!(
        parse("##!Hidden"),
        vec![ContentBlock::Heading {
            level: HeadingLevel::H2,
            text: "Hidden".into(),
            id: "demo-hidden".into(),
            toc_hidden: true,
        }]
    );
}

#[test]
fn heading_counter_resets_per_parse() {
    let first = parse_blocks("## Setup", "demo");
    let second = parse_blocks("## Setup", "demo");
    assert_eq!(first, second);
}

// Directives

#[rstest]
#[case("@youtube(https://youtu.be/abc123)")]
#[case("@youtube(https://www.youtube.com/watch?v=abc123)")]
fn youtube_forms_normalise_alike(#[case] input: &str) {
    assert_eq!(
        parse(input),
        vec![ContentBlock::Video {
            embed_url: "https://www.youtube.com/embed/abc123".into()
        }]
    );
}

#[test]
fn unrecognised_youtube_falls_back_to_literal_paragraph() {
    assert_eq!(
        parse("@youtube(not a url)"),
        vec![paragraph("@youtube(not a url)")]
    );
}

#[test]
fn snippet_directive_with_and_without_caption() {
    assert_eq!(
        parse("@snippet(my_id, \"A caption\")\n@snippet(my_id)"),
        vec![
            ContentBlock::Snippet(SnippetRef {
                id: "my_id".into(),
                caption: Some("A caption".into()),
            }),
            ContentBlock::Snippet(SnippetRef {
                id: "my_id".into(),
                caption: None,
            }),
        ]
    );
}

#[test]
fn blank_snippet_id_falls_back_to_literal_paragraph() {
    assert_eq!(parse("@snippet( )"), vec![paragraph("@snippet( )")]);
}

#[test]
fn directives_must_be_alone_on_their_line() {
    assert_eq!(
        parse("watch @youtube(https://youtu.be/abc123) later"),
        vec![paragraph("watch @youtube(https://youtu.be/abc123) later")]
    );
}

// Lists

#[test]
fn list_items_are_trimmed() {
    assert_eq!(
        parse("-   spaced  \n- [link](/x)"),
        vec![ContentBlock::List {
            items: vec!["spaced".into(), "[link](/x)".into()]
        }]
    );
}

#[test]
fn parsing_is_idempotent() {
    let input = include_str!("fixtures/project_writeup.txt");
    assert_eq!(parse(input), parse(input));
}
