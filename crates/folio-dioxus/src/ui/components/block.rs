use crate::ui::components::{
    heading::Heading, image_carousel::ImageCarousel, image_carousel::SingleImage,
    list::BulletList, paragraph::Paragraph, video_embed::VideoEmbed,
};
use dioxus::prelude::*;
use folio_engine::{ContentBlock, SnippetRef};

#[component]
pub fn Block(block: ContentBlock, render_snippet: Callback<SnippetRef, Element>) -> Element {
    match block {
        ContentBlock::Heading {
            level,
            text,
            id,
            toc_hidden: _,
        } => rsx! {
            Heading { level, text, id }
        },
        ContentBlock::Paragraph { text } => rsx! {
            Paragraph { text }
        },
        ContentBlock::Image(image) => rsx! {
            SingleImage { image }
        },
        ContentBlock::Carousel { images } => rsx! {
            ImageCarousel { images }
        },
        ContentBlock::Snippet(snippet) => render_snippet.call(snippet),
        ContentBlock::Video { embed_url } => rsx! {
            VideoEmbed { embed_url }
        },
        ContentBlock::List { items } => rsx! {
            BulletList { items }
        },
    }
}
