//! Add-property form for agents.

use web_sys::FormData;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::app::Route;

/// At most four images per listing.
const MAX_IMAGES: usize = 4;

/// Add-property page component.
///
/// Submits the listing as multipart form data; selected images are
/// previewed client-side via object URLs before upload.
#[function_component(AddPropertyPage)]
pub fn add_property_page() -> Html {
    let title = use_state(String::new);
    let description = use_state(String::new);
    let price = use_state(String::new);
    let location = use_state(String::new);
    let files = use_state(Vec::<web_sys::File>::new);
    let previews = use_state(Vec::<String>::new);
    let message = use_state(|| None::<(bool, String)>);
    let navigator = use_navigator();

    let on_title_input = {
        let title = title.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            title.set(input.value());
        })
    };

    let on_description_input = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };

    let on_price_input = {
        let price = price.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            price.set(input.value());
        })
    };

    let on_location_input = {
        let location = location.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            location.set(input.value());
        })
    };

    let on_images_change = {
        let files = files.clone();
        let previews = previews.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut selected = Vec::new();
            let mut urls = Vec::new();
            if let Some(list) = input.files() {
                let count = (list.length() as usize).min(MAX_IMAGES);
                for i in 0..count {
                    if let Some(file) = list.item(i as u32) {
                        if let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) {
                            urls.push(url);
                        }
                        selected.push(file);
                    }
                }
            }
            files.set(selected);
            previews.set(urls);
        })
    };

    let on_back = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::AgentDashboard);
            }
        })
    };

    let onsubmit = {
        let title = title.clone();
        let description = description.clone();
        let price = price.clone();
        let location = location.clone();
        let files = files.clone();
        let previews = previews.clone();
        let message = message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form = match FormData::new() {
                Ok(form) => form,
                Err(_) => return,
            };
            let _ = form.append_with_str("title", &title);
            let _ = form.append_with_str("description", &description);
            let _ = form.append_with_str("price", &price);
            let _ = form.append_with_str("location", &location);
            for file in files.iter() {
                let _ = form.append_with_blob("images", file);
            }

            let title = title.clone();
            let description = description.clone();
            let price = price.clone();
            let location = location.clone();
            let files = files.clone();
            let previews = previews.clone();
            let message = message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::post_form("/properties/add", form).await {
                    Ok(()) => {
                        message.set(Some((true, "Property added successfully!".to_string())));
                        title.set(String::new());
                        description.set(String::new());
                        price.set(String::new());
                        location.set(String::new());
                        files.set(Vec::new());
                        previews.set(Vec::new());
                    }
                    Err(err) => {
                        message.set(Some((false, format!("Failed to add property: {err}"))));
                    }
                }
            });
        })
    };

    html! {
        <>
            <button class="back-button" onclick={on_back}>
                {"Back to Dashboard"}
            </button>

            <div class="add-property-container">
                <h2>{"Add New Property"}</h2>

                <form class="add-property-form" onsubmit={onsubmit}>
                    <label for="title">{"Title"}</label>
                    <input
                        id="title"
                        placeholder="Property Title"
                        value={(*title).clone()}
                        oninput={on_title_input}
                        required=true
                    />

                    <label for="description">{"Description"}</label>
                    <textarea
                        id="description"
                        placeholder="Property Description"
                        value={(*description).clone()}
                        oninput={on_description_input}
                        required=true
                    />

                    <label for="price">{"Price (₹)"}</label>
                    <input
                        id="price"
                        type="number"
                        placeholder="Enter price"
                        value={(*price).clone()}
                        oninput={on_price_input}
                        required=true
                    />

                    <label for="location">{"Location"}</label>
                    <input
                        id="location"
                        placeholder="Enter location"
                        value={(*location).clone()}
                        oninput={on_location_input}
                        required=true
                    />

                    <label for="images">{"Upload Property Images"}</label>
                    <input
                        id="images"
                        type="file"
                        multiple=true
                        accept="image/*"
                        onchange={on_images_change}
                    />
                    <small>{ format!("Max {MAX_IMAGES} images allowed") }</small>

                    if !previews.is_empty() {
                        <div class="image-preview-container">
                            { for previews.iter().map(|url| html! {
                                <img src={url.clone()} alt="preview" />
                            })}
                        </div>
                    }

                    <button type="submit">{"Add Property"}</button>
                </form>

                if let Some((success, text)) = message.as_ref() {
                    <p class={if *success { "message success" } else { "message error" }}>
                        { text }
                    </p>
                }
            </div>
        </>
    }
}
