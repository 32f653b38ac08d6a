//! Customer dashboard: browse and filter listings, track bookings, and
//! request visits.

use estate_types::{
    unique_locations, Booking, BookingPartitions, Property, PropertyQuery, SortOrder,
    ALL_LOCATIONS,
};
use yew::prelude::*;

use crate::api;
use crate::components::{BookingPopup, Loading, PropertyCard};
use crate::session::Session;

/// Customer dashboard page component.
#[function_component(CustomerDashboardPage)]
pub fn customer_dashboard_page() -> Html {
    let properties = use_state(Vec::<Property>::new);
    let bookings = use_state(Vec::<Booking>::new);
    let loading = use_state(|| true);
    let selected = use_state(|| None::<Property>);

    let search = use_state(String::new);
    let location = use_state(|| ALL_LOCATIONS.to_string());
    let min_price = use_state(String::new);
    let max_price = use_state(String::new);
    let sort = use_state(SortOrder::default);

    // Properties and bookings are independent reads; fetch concurrently.
    {
        let properties = properties.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::get_json::<Vec<Property>>("/properties").await {
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
                match api::get_json::<Vec<Booking>>("/bookings/customer").await {
                    Ok(data) => bookings.set(data),
                    Err(err) => web_sys::console::error_1(
                        &format!("Failed to fetch customer bookings: {err}").into(),
                    ),
                }
            });
        });
    }

    let on_search_input = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let on_location_change = {
        let location = location.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            location.set(select.value());
        })
    };

    let on_min_price_input = {
        let min_price = min_price.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            min_price.set(input.value());
        })
    };

    let on_max_price_input = {
        let max_price = max_price.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            max_price.set(input.value());
        })
    };

    let on_sort_change = {
        let sort = sort.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            sort.set(SortOrder::from_value(&select.value()));
        })
    };

    let on_book = {
        let selected = selected.clone();
        Callback::from(move |property: Property| selected.set(Some(property)))
    };

    let on_popup_close = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    let query = PropertyQuery {
        search: (*search).clone(),
        location: (*location).clone(),
        min_price: (*min_price).clone(),
        max_price: (*max_price).clone(),
        sort: *sort,
    };
    let filtered = query.apply(&properties);
    let locations = unique_locations(&properties);
    let partitions = BookingPartitions::partition(&bookings);
    let counts = partitions.counts();

    let customer_name = Session::user()
        .map(|u| u.name)
        .unwrap_or_else(|| "Customer".to_string());

    let (popup_property_id, popup_agent_id) = selected
        .as_ref()
        .map(|p| {
            (
                p.id.clone(),
                p.agent.as_ref().map(|a| a.id.clone()).unwrap_or_default(),
            )
        })
        .unwrap_or_default();

    html! {
        <div class="customer-dashboard">
            <h2 class="welcome-text">{ format!("Welcome, {customer_name}") }</h2>
            <p class="sub-text">{"Browse available properties below:"}</p>

            <div class="filter-controls">
                <input
                    type="text"
                    class="filter-input"
                    placeholder="Search by title..."
                    value={(*search).clone()}
                    oninput={on_search_input}
                />

                <select onchange={on_location_change}>
                    <option value={ALL_LOCATIONS} selected={*location == ALL_LOCATIONS}>
                        {"All Locations"}
                    </option>
                    { for locations.iter().map(|loc| html! {
                        <option value={loc.clone()} selected={*location == *loc}>{ loc }</option>
                    })}
                </select>

                <input
                    type="number"
                    class="filter-input"
                    placeholder="Min Price"
                    value={(*min_price).clone()}
                    oninput={on_min_price_input}
                />
                <input
                    type="number"
                    class="filter-input"
                    placeholder="Max Price"
                    value={(*max_price).clone()}
                    oninput={on_max_price_input}
                />

                <select onchange={on_sort_change}>
                    <option value="" selected={*sort == SortOrder::None}>{"Sort by Price"}</option>
                    <option value="lowToHigh" selected={*sort == SortOrder::LowToHigh}>{"Low → High"}</option>
                    <option value="highToLow" selected={*sort == SortOrder::HighToLow}>{"High → Low"}</option>
                </select>
            </div>

            <h3 class="section-heading">{"Your Bookings:"}</h3>
            if partitions.is_empty() {
                <p class="status-text">{"No bookings yet."}</p>
            } else {
                <div class="booking-columns">
                    <div class="booking-column">
                        <h4>{ format!("Accepted ({})", counts.accepted) }</h4>
                        { for partitions.accepted.iter().map(|b| booking_item(b, "accepted")) }
                    </div>

                    <div class="booking-column">
                        <h4>{ format!("Pending ({})", counts.pending) }</h4>
                        { for partitions.pending.iter().map(|b| booking_item(b, "pending")) }

                        <h4>{ format!("Rejected ({})", counts.rejected) }</h4>
                        { for partitions.rejected.iter().map(|b| booking_item(b, "rejected")) }
                    </div>
                </div>
            }

            if *loading {
                <Loading />
            } else if filtered.is_empty() {
                <p class="status-text">{"No properties match your criteria."}</p>
            } else {
                <div class="customer-grid">
                    { for filtered.iter().map(|property| html! {
                        <PropertyCard
                            key={property.id.clone()}
                            property={property.clone()}
                            on_book={on_book.clone()}
                        />
                    })}
                </div>
            }

            <BookingPopup
                show={selected.is_some()}
                property_id={popup_property_id}
                agent_id={popup_agent_id}
                on_close={on_popup_close}
            />
        </div>
    }
}

fn booking_item(booking: &Booking, status_class: &'static str) -> Html {
    html! {
        <div class={classes!("booking-item", status_class)}>
            <strong>{ booking.property_title() }</strong>
            <br />
            { format!("Visit on: {}", booking.visit_date_display()) }
        </div>
    }
}
