//! Agent dashboard: listed properties, pending booking requests, and
//! accepted visits.

use estate_types::{Booking, BookingPartitions, BookingStatus, Property, StatusUpdate};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::app::Route;
use crate::components::{ImageCarousel, Loading};
use crate::session::Session;

/// Agent dashboard page component.
#[function_component(AgentDashboardPage)]
pub fn agent_dashboard_page() -> Html {
    let properties = use_state(Vec::<Property>::new);
    let bookings = use_state(Vec::<Booking>::new);
    let loading = use_state(|| true);
    let panel_open = use_state(|| false);
    let navigator = use_navigator();

    {
        let properties = properties.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::get_json::<Vec<Property>>("/properties/my").await {
                    Ok(data) => properties.set(data),
                    Err(err) => web_sys::console::error_1(
                        &format!("Failed to fetch properties: {err}").into(),
                    ),
                }
                loading.set(false);
            });
        });
    }
    {
        let bookings = bookings.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::get_json::<Vec<Booking>>("/bookings/agent").await {
                    Ok(data) => bookings.set(data),
                    Err(err) => web_sys::console::error_1(
                        &format!("Failed to fetch bookings: {err}").into(),
                    ),
                }
            });
        });
    }

    let on_toggle_panel = {
        let panel_open = panel_open.clone();
        Callback::from(move |_: MouseEvent| panel_open.set(!*panel_open))
    };

    let on_add_property = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::AddProperty);
            }
        })
    };

    // Accept/reject a booking, then re-fetch the agent's bookings in full
    // so the partitions match the server's state. On failure nothing
    // changes locally.
    let on_status_change = {
        let bookings = bookings.clone();
        Callback::from(move |(id, status): (String, BookingStatus)| {
            let bookings = bookings.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let update = StatusUpdate { status };
                match api::patch(&format!("/bookings/{id}/status"), &update).await {
                    Ok(()) => {
                        gloo_dialogs::alert(&format!("Booking {} successfully.", status.label()));
                        match api::get_json::<Vec<Booking>>("/bookings/agent").await {
                            Ok(data) => bookings.set(data),
                            Err(err) => web_sys::console::error_1(
                                &format!("Failed to refresh bookings: {err}").into(),
                            ),
                        }
                    }
                    Err(err) => web_sys::console::error_1(
                        &format!("Error updating status: {err}").into(),
                    ),
                }
            });
        })
    };

    let on_delete = {
        let properties = properties.clone();
        Callback::from(move |id: String| {
            if !gloo_dialogs::confirm("Are you sure you want to delete this property?") {
                return;
            }
            let properties = properties.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::delete(&format!("/properties/{id}")).await {
                    Ok(()) => {
                        let remaining: Vec<Property> =
                            properties.iter().filter(|p| p.id != id).cloned().collect();
                        properties.set(remaining);
                    }
                    Err(err) => web_sys::console::error_1(
                        &format!("Error deleting property: {err}").into(),
                    ),
                }
            });
        })
    };

    let partitions = BookingPartitions::partition(&bookings);
    let agent_name = Session::user()
        .map(|u| u.name)
        .unwrap_or_else(|| "Agent".to_string());

    html! {
        <div class="agent-dashboard">
            <h2 class="agent-heading">{ format!("Welcome, {agent_name}") }</h2>

            <div class="dashboard-controls">
                <button class="add-property-btn" onclick={on_add_property}>
                    {"+ Add New Property"}
                </button>

                <div class="booking-notification">
                    <button class="notif-btn" onclick={on_toggle_panel}>
                        { format!("Booking Requests ({})", partitions.pending.len()) }
                    </button>
                    if *panel_open {
                        <div class="notif-dropdown">
                            if partitions.pending.is_empty() {
                                <p>{"No new booking requests."}</p>
                            } else {
                                { for partitions.pending.iter().map(|booking| {
                                    pending_request(booking, &on_status_change)
                                })}
                            }
                        </div>
                    }
                </div>
            </div>

            <h3 class="section-heading">{"Accepted Visits:"}</h3>
            if partitions.accepted.is_empty() {
                <p class="status-text">{"No accepted bookings."}</p>
            } else {
                <ul class="accepted-list">
                    { for partitions.accepted.iter().map(|b| html! {
                        <li class="accepted-item">
                            <strong>{ b.customer_name() }</strong>
                            {" will visit "}
                            <strong>{ b.property_title() }</strong>
                            {" on "}
                            <strong>{ b.visit_date_display() }</strong>
                        </li>
                    })}
                </ul>
            }

            <h3 class="section-heading">{"Your Listed Properties:"}</h3>
            if *loading {
                <Loading />
            } else if properties.is_empty() {
                <p class="status-text">{"No properties listed yet."}</p>
            } else {
                <div class="property-grid">
                    { for properties.iter().map(|property| {
                        let delete = {
                            let on_delete = on_delete.clone();
                            let id = property.id.clone();
                            Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                        };
                        html! {
                            <div class="property-card" key={property.id.clone()}>
                                <div class="property-details">
                                    <h4>{ &property.title }</h4>
                                    <p><strong>{"Price: "}</strong>{ format!("₹{}", property.price) }</p>
                                    <p><strong>{"Location: "}</strong>{ &property.location }</p>
                                    <p>{ &property.description }</p>
                                    <button class="delete-btn" onclick={delete}>{"Delete"}</button>
                                </div>
                                <ImageCarousel images={property.images.clone()} />
                            </div>
                        }
                    })}
                </div>
            }
        </div>
    }
}

fn pending_request(booking: &Booking, on_status_change: &Callback<(String, BookingStatus)>) -> Html {
    let accept = {
        let on_status_change = on_status_change.clone();
        let id = booking.id.clone();
        Callback::from(move |_: MouseEvent| on_status_change.emit((id.clone(), BookingStatus::Accepted)))
    };
    let reject = {
        let on_status_change = on_status_change.clone();
        let id = booking.id.clone();
        Callback::from(move |_: MouseEvent| on_status_change.emit((id.clone(), BookingStatus::Rejected)))
    };

    html! {
        <div class="notif-item" key={booking.id.clone()}>
            <p>
                <strong>{"Customer: "}</strong>
                { format!("{} ({})", booking.customer_name(), booking.customer_email()) }
            </p>
            <p><strong>{"Property: "}</strong>{ booking.property_title() }</p>
            <p><strong>{"Date: "}</strong>{ booking.visit_date_display() }</p>
            <div class="notif-actions">
                <button class="accept-btn" onclick={accept}>{"Accept"}</button>
                <button class="reject-btn" onclick={reject}>{"Reject"}</button>
            </div>
        </div>
    }
}
