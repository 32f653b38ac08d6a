//! Image carousel for property cards.

use yew::prelude::*;

use crate::api::UPLOADS_BASE;

/// Properties for ImageCarousel component.
#[derive(Properties, PartialEq)]
pub struct ImageCarouselProps {
    /// Upload references, in display order. Empty renders nothing.
    pub images: Vec<String>,
}

/// Cycles through a property's images with previous/next buttons.
#[function_component(ImageCarousel)]
pub fn image_carousel(props: &ImageCarouselProps) -> Html {
    let index = use_state(|| 0usize);
    let total = props.images.len();

    if total == 0 {
        return html! {};
    }

    let on_prev = {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| index.set((*index + total - 1) % total))
    };
    let on_next = {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| index.set((*index + 1) % total))
    };

    // Modulo guards against a stale index when the image list shrinks.
    let current = &props.images[*index % total];

    html! {
        <div class="carousel-container">
            <button class="carousel-btn left" onclick={on_prev}>{"◀"}</button>
            <img
                src={format!("{UPLOADS_BASE}/{current}")}
                alt="property"
                class="carousel-image"
            />
            <button class="carousel-btn right" onclick={on_next}>{"▶"}</button>
        </div>
    }
}
