//! Visit-booking popup.
//!
//! Drives the booking-creation flow: validates the visit date, submits
//! the request tied to the property/agent/customer triple, and surfaces
//! the outcome. The state machine itself lives in `estate_types::flow`.

use estate_types::{BookingFlow, BookingRequest};
use yew::prelude::*;

use crate::api;
use crate::session::Session;

/// Properties for BookingPopup component.
#[derive(Properties, PartialEq)]
pub struct BookingPopupProps {
    pub show: bool,
    pub property_id: String,
    pub agent_id: String,
    pub on_close: Callback<()>,
}

/// Modal form for requesting a property visit.
#[function_component(BookingPopup)]
pub fn booking_popup(props: &BookingPopupProps) -> Html {
    let visit_date = use_state(String::new);
    let flow = use_state(BookingFlow::new);
    let customer = Session::user();

    // Start each opening with a clean flow and an empty date.
    {
        let visit_date = visit_date.clone();
        let flow = flow.clone();
        use_effect_with(props.show, move |show| {
            if *show {
                visit_date.set(String::new());
                flow.set(BookingFlow::new());
            }
        });
    }

    if !props.show {
        return html! {};
    }

    let customer_id = customer.as_ref().map(|u| u.id.clone()).unwrap_or_default();
    let customer_display = customer
        .as_ref()
        .map_or_else(|| "Not found".to_string(), |u| u.id.clone());

    let on_date_input = {
        let visit_date = visit_date.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            visit_date.set(input.value());
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let onsubmit = {
        let visit_date = visit_date.clone();
        let flow = flow.clone();
        let on_close = props.on_close.clone();
        let property_id = props.property_id.clone();
        let agent_id = props.agent_id.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut next = (*flow).clone();
            let proceed = next.begin_submit(&visit_date);
            flow.set(next.clone());
            if !proceed {
                return;
            }

            let request = BookingRequest {
                property: property_id.clone(),
                agent: agent_id.clone(),
                customer: customer_id.clone(),
                visit_date: (*visit_date).clone(),
            };
            let flow = flow.clone();
            let on_close = on_close.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let mut done = next;
                match api::post("/bookings", &request).await {
                    Ok(()) => {
                        done.resolve_success();
                        flow.set(done);
                        on_close.emit(());
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("Booking error: {err}").into());
                        done.resolve_failure(Some(err.message));
                        flow.set(done);
                    }
                }
            });
        })
    };

    html! {
        <div class="popup-backdrop">
            <div class="popup-container">
                <h3>{"Book Property Visit"}</h3>
                <form onsubmit={onsubmit}>
                    <label>{"Customer ID:"}</label>
                    <input type="text" value={customer_display} readonly=true />

                    <label>{"Agent ID:"}</label>
                    <input type="text" value={props.agent_id.clone()} readonly=true />

                    <label>{"Property ID:"}</label>
                    <input type="text" value={props.property_id.clone()} readonly=true />

                    <label>{"Visit Date:"}</label>
                    <input
                        type="date"
                        value={(*visit_date).clone()}
                        oninput={on_date_input}
                    />

                    <button type="submit" disabled={flow.is_submitting()}>{"Book"}</button>
                    <button type="button" onclick={on_cancel}>{"Cancel"}</button>
                </form>
                if let Some(message) = flow.message() {
                    <p>{ message }</p>
                }
            </div>
        </div>
    }
}
