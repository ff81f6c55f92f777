use crate::ui::components::{AnnotationDetail, AnnotationTooltip, ContentRoot};
use dioxus::prelude::*;
use folio_engine::{
    AnnotationIndex, CodeAnnotation, CodeLoader, CodeRequest, CodeSnippet, LineRect,
    LoadOutcome, ViewerState, io,
};
use std::rc::Rc;

/// Code listing with line numbers, hover tooltips and a pinned detail view
/// for annotated lines.
///
/// Each mounted viewer owns its interaction state. Code without inline text
/// is read from `code_path` under the [`ContentRoot`] on a spawned task.
#[component]
pub fn AnnotatedCodeViewer(snippet: CodeSnippet, annotations: Vec<CodeAnnotation>) -> Element {
    let content_root = try_use_context::<ContentRoot>();
    let mut state = use_signal(|| ViewerState::new(snippet.id.clone()));
    let mut loader = use_signal(CodeLoader::default);

    let id = snippet.id.clone();
    let inline = snippet.code.clone();
    let code_path = snippet.code_path.clone();
    use_effect(use_reactive!(|(id, inline, code_path)| {
        state.write().reset(&id);
        let request = loader
            .write()
            .request(inline.as_deref(), code_path.as_deref());
        let CodeRequest::Fetch(ticket) = request else {
            return;
        };
        let Some(ContentRoot(root)) = content_root.clone() else {
            log::warn!("No content directory to load {} from", ticket.path);
            return;
        };
        spawn(async move {
            let result = io::read_code_file(&ticket.path, &root);
            if loader.write().complete(&ticket, result) == LoadOutcome::Applied {
                log::debug!("loaded code for snippet {id} from {}", ticket.path);
            }
        });
    }));

    let text = loader
        .read()
        .display_text(snippet.inline_code())
        .to_string();
    let index = AnnotationIndex::new(&annotations);
    let annotated: Vec<bool> = (0..text.lines().count())
        .map(|line| index.is_annotated(line))
        .collect();

    let (tooltip, selected, active_line) = {
        let current = state.read();
        (
            current
                .tooltip()
                .map(|(annotation, anchor)| (annotation.clone(), anchor)),
            current.selected().cloned(),
            current.active_line(),
        )
    };

    let on_enter = Callback::new({
        let annotations = annotations.clone();
        move |(line, rect): (usize, LineRect)| {
            let index = AnnotationIndex::new(&annotations);
            state.write().pointer_enter(&index, line, rect);
        }
    });
    let on_select = Callback::new({
        let annotations = annotations.clone();
        move |line: usize| {
            let index = AnnotationIndex::new(&annotations);
            state.write().click(&index, line);
        }
    });

    rsx! {
        div {
            class: "code-viewer",
            div {
                class: "code-header",
                span { class: "code-language", "{snippet.language}" }
                if !annotations.is_empty() {
                    span { class: "code-hint", "Hover highlighted lines, click to pin" }
                }
            }
            pre {
                class: "code-lines",
                for (line, content) in text.lines().enumerate() {
                    CodeLine {
                        key: "{line}",
                        index: line,
                        text: content.to_string(),
                        annotated: annotated[line],
                        active: active_line == Some(line),
                        on_enter,
                        on_leave: move |_| state.write().pointer_leave(),
                        on_select,
                    }
                }
            }
            if let Some((annotation, anchor)) = tooltip {
                AnnotationTooltip { annotation, anchor }
            }
            if let Some(annotation) = selected {
                AnnotationDetail {
                    annotation,
                    on_close: move |_| state.write().close(),
                }
            }
        }
    }
}

/// One rendered line. Measures itself on hover so the tooltip can be placed
/// above it.
#[component]
pub fn CodeLine(
    index: usize,
    text: String,
    annotated: bool,
    active: bool,
    on_enter: Callback<(usize, LineRect)>,
    on_leave: Callback<()>,
    on_select: Callback<usize>,
) -> Element {
    let mut element = use_signal(|| None::<Rc<MountedData>>);
    let mut hovered = use_signal(|| false);

    let class = match (annotated, active) {
        (true, true) => "code-line annotated active",
        (true, false) => "code-line annotated",
        (false, _) => "code-line",
    };

    rsx! {
        div {
            class,
            onmounted: move |evt| element.set(Some(evt.data())),
            onmouseenter: move |_| {
                hovered.set(true);
                let Some(mounted) = element.peek().clone() else {
                    on_enter.call((index, LineRect::default()));
                    return;
                };
                spawn(async move {
                    let rect = match mounted.get_client_rect().await {
                        Ok(rect) => LineRect {
                            left: rect.origin.x,
                            top: rect.origin.y,
                            width: rect.size.width,
                            height: rect.size.height,
                        },
                        Err(e) => {
                            log::debug!("could not measure code line {index}: {e:?}");
                            LineRect::default()
                        }
                    };
                    // The pointer may have left while measuring.
                    if *hovered.peek() {
                        on_enter.call((index, rect));
                    }
                });
            },
            onmouseleave: move |_| {
                hovered.set(false);
                on_leave.call(());
            },
            onclick: move |_| on_select.call(index),
            span { class: "line-number", "{index + 1}" }
            span { class: "line-text", "{text}" }
        }
    }
}
