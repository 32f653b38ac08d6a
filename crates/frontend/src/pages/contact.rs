//! Static contact/about page.

use yew::prelude::*;

/// Contact page component.
#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    html! {
        <div class="contact-page">
            <div class="contact-header">
                <h1>{"Estate Hub"}</h1>
                <p>{"Beyond Brick Walls"}</p>
            </div>

            <div class="features-section">
                <h2>{"Features"}</h2>
                <ul>
                    <li>{"Property Listings"}</li>
                    <li>{"Visit Bookings"}</li>
                    <li>{"Agents"}</li>
                    <li>{"Customers"}</li>
                    <li>{"Booking Tracking"}</li>
                    <li>{"Platform Analytics"}</li>
                </ul>
            </div>

            <div class="info-row">
                <div class="about-section">
                    <h2>{"About Us"}</h2>
                    <p>
                        {"We provide real-estate management solutions for everything \
                          from property listings to agent bookings and booking tracking. \
                          Our platform helps streamline the sales process and enhances \
                          customer engagement."}
                    </p>
                </div>

                <div class="contact-section">
                    <h2>{"Contact Us"}</h2>
                    <p><strong>{"Email: "}</strong>{"support@estatehub.example"}</p>
                    <p><strong>{"Phone: "}</strong>{"+1 555 0100"}</p>
                </div>
            </div>
        </div>
    }
}
