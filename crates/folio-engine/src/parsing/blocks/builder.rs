use crate::parsing::slug::HeadingIds;

use super::{
    classify::LineClass,
    types::{ContentBlock, ImageRef},
};

/// The multi-line block currently being collected.
#[derive(Debug)]
enum LeafState {
    None,
    Paragraph { lines: Vec<String> },
    Images { images: Vec<ImageRef> },
    List { items: Vec<String> },
}

/// Line-by-line state machine turning classified lines into [`ContentBlock`]s.
pub struct BlockBuilder {
    ids: HeadingIds,
    leaf: LeafState,
    out: Vec<ContentBlock>,
}

impl BlockBuilder {
    pub fn new(id_prefix: &str) -> Self {
        Self {
            ids: HeadingIds::new(id_prefix),
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: LineClass<'_>) {
        match (&mut self.leaf, &c) {
            // Blank lines do not end an image run.
            (LeafState::Images { .. }, LineClass::Blank) => return,
            (LeafState::Images { images }, LineClass::Image(image)) => {
                images.push(image.clone());
                return;
            }
            (LeafState::List { items }, LineClass::ListItem(item)) => {
                items.push(item.to_string());
                return;
            }
            (LeafState::Paragraph { lines }, LineClass::Text(line)) => {
                lines.push(line.to_string());
                return;
            }
            _ => {}
        }

        self.flush();

        match c {
            LineClass::Blank => {}
            LineClass::Heading(heading) => {
                let id = self.ids.next_id(&heading.text);
                self.out.push(ContentBlock::Heading {
                    level: heading.level,
                    text: heading.text,
                    id,
                    toc_hidden: heading.hidden,
                });
            }
            LineClass::Image(image) => {
                self.leaf = LeafState::Images {
                    images: vec![image],
                };
            }
            LineClass::Video {
                embed_url: Some(embed_url),
                ..
            } => self.out.push(ContentBlock::Video { embed_url }),
            LineClass::Snippet {
                snippet: Some(snippet),
                ..
            } => self.out.push(ContentBlock::Snippet(snippet)),
            LineClass::Video { line, .. } | LineClass::Snippet { line, .. } => {
                log::debug!("unrecognised directive kept as text: {line}");
                self.out.push(ContentBlock::Paragraph {
                    text: line.to_string(),
                });
            }
            LineClass::ListItem(item) => {
                self.leaf = LeafState::List {
                    items: vec![item.to_string()],
                };
            }
            LineClass::Text(line) => {
                self.leaf = LeafState::Paragraph {
                    lines: vec![line.to_string()],
                };
            }
        }
    }

    pub fn finish(mut self) -> Vec<ContentBlock> {
        // EOF flush
        self.flush();
        self.out
    }

    fn flush(&mut self) {
        match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => {}
            LeafState::Paragraph { lines } => {
                let text = lines.join("\n").trim().to_string();
                if !text.is_empty() {
                    self.out.push(ContentBlock::Paragraph { text });
                }
            }
            LeafState::Images { mut images } => {
                if images.len() == 1 {
                    self.out.push(ContentBlock::Image(images.remove(0)));
                } else {
                    self.out.push(ContentBlock::Carousel { images });
                }
            }
            LeafState::List { items } => self.out.push(ContentBlock::List { items }),
        }
    }
}
