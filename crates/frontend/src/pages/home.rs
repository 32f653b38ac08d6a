//! Landing page.

use yew::prelude::*;

use crate::session::Session;

/// Home page component.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let search_term = use_state(String::new);
    let search_message = use_state(|| None::<String>);

    let on_search_input = {
        let search_term = search_term.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            search_term.set(input.value());
        })
    };

    let on_search = {
        let search_term = search_term.clone();
        let search_message = search_message.clone();
        Callback::from(move |_: MouseEvent| {
            if Session::user().is_none() {
                search_message.set(Some(
                    "Please login or signup to discover properties.".to_string(),
                ));
            } else {
                search_message.set(Some(format!(
                    "Searching properties for \"{}\"...",
                    *search_term
                )));
            }
        })
    };

    html! {
        <div class="home-container">
            <div class="left-section">
                <h1 class="header">{"Discover Your Most Suitable Property"}</h1>
                <p>
                    {"Find a variety of properties that suit you very easily."}
                    <br />
                    {"Forget all difficulties in finding a residence for you."}
                </p>

                <div class="search-box">
                    <input
                        type="text"
                        placeholder="Enter location"
                        value={(*search_term).clone()}
                        oninput={on_search_input}
                    />
                    <button onclick={on_search}>{"Search"}</button>
                </div>

                if let Some(message) = search_message.as_ref() {
                    <p class="search-message">{ message }</p>
                }

                <div class="stats">
                    <div>
                        <h2>{"9,000+"}</h2>
                        <p>{"Premium Listings"}</p>
                    </div>
                    <div>
                        <h2>{"2,000+"}</h2>
                        <p>{"Happy Customers"}</p>
                    </div>
                    <div>
                        <h2>{"28+"}</h2>
                        <p>{"Awards Won"}</p>
                    </div>
                </div>
            </div>

            <div class="right-section">
                <div class="image-arch"></div>
            </div>
        </div>
    }
}
