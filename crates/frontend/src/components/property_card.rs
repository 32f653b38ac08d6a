//! Property card for the customer browse grid.

use estate_types::Property;
use yew::prelude::*;

use crate::components::ImageCarousel;

/// Properties for PropertyCard component.
#[derive(Properties, PartialEq)]
pub struct PropertyCardProps {
    pub property: Property,
    /// Raised when the customer clicks Book Visit.
    pub on_book: Callback<Property>,
}

/// A single listing with its image carousel and booking action.
#[function_component(PropertyCard)]
pub fn property_card(props: &PropertyCardProps) -> Html {
    let property = &props.property;

    let on_book = {
        let on_book = props.on_book.clone();
        let property = property.clone();
        Callback::from(move |_: MouseEvent| on_book.emit(property.clone()))
    };

    html! {
        <div class="customer-card">
            <ImageCarousel images={property.images.clone()} />

            <div class="customer-info">
                <h3>{ &property.title }</h3>
                <p><strong>{"Price: "}</strong>{ format!("₹{}", property.price) }</p>
                <p><strong>{"Location: "}</strong>{ &property.location }</p>
                <p><strong>{"Description: "}</strong>{ &property.description }</p>
                <p>
                    <strong>{"Agent: "}</strong>
                    { format!("{} ({})", property.agent_name(), property.agent_email()) }
                </p>
                <button onclick={on_book}>{"Book Visit"}</button>
            </div>
        </div>
    }
}
