//! Reusable UI components.

mod booking_popup;
mod carousel;
mod loading;
mod property_card;
mod stat_card;

pub use booking_popup::BookingPopup;
pub use carousel::ImageCarousel;
pub use loading::Loading;
pub use property_card::PropertyCard;
pub use stat_card::StatCard;
