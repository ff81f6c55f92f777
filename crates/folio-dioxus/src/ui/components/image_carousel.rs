use dioxus::prelude::*;
use folio_engine::ImageRef;

#[component]
pub fn SingleImage(image: ImageRef) -> Element {
    rsx! {
        figure {
            class: "content-image",
            img { src: "{image.src}", alt: "{image.alt}" }
            if !image.alt.is_empty() {
                figcaption { "{image.alt}" }
            }
        }
    }
}

/// Two or more consecutive images, shown one at a time with wrap-around
/// previous/next controls.
#[component]
pub fn ImageCarousel(images: Vec<ImageRef>) -> Element {
    let mut current = use_signal(|| 0usize);
    let count = images.len();
    if count == 0 {
        return rsx! {};
    }

    let index = current().min(count - 1);
    let image = &images[index];

    rsx! {
        div {
            class: "image-carousel",
            figure {
                class: "carousel-slide",
                img { src: "{image.src}", alt: "{image.alt}" }
                if !image.alt.is_empty() {
                    figcaption { "{image.alt}" }
                }
            }
            div {
                class: "carousel-controls",
                button {
                    class: "carousel-prev",
                    onclick: move |_| current.set(step(index, count, false)),
                    "‹"
                }
                span { class: "carousel-position", "{index + 1} / {count}" }
                button {
                    class: "carousel-next",
                    onclick: move |_| current.set(step(index, count, true)),
                    "›"
                }
            }
        }
    }
}

/// Next or previous slide index, wrapping at both ends.
fn step(index: usize, count: usize, forward: bool) -> usize {
    if count == 0 {
        return 0;
    }
    if forward {
        (index + 1) % count
    } else {
        (index + count - 1) % count
    }
}
