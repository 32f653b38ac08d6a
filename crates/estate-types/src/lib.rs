//! Shared types for the Estate Hub front-end.
//!
//! This crate defines the wire types exchanged with the remote HTTP API
//! together with the pure data-transformation engines used by the
//! dashboards: property filtering/sorting, booking aggregation, and the
//! booking-creation flow. Nothing here touches the browser, so the whole
//! crate is testable on the host.

mod bookings;
mod filter;
mod flow;

pub use bookings::{
    customer_booking_totals, properties_by_city, BookingPartitions, BookingTotals, CityCount,
    StatusCounts,
};
pub use filter::{parse_price_bound, unique_locations, PropertyQuery, SortOrder, ALL_LOCATIONS};
pub use flow::{BookingFlow, FlowState, GENERIC_BOOKING_FAILURE, MISSING_VISIT_DATE};

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Placeholder shown when a nested reference is missing its display fields.
pub const UNKNOWN: &str = "Unknown";

/// User roles recognized by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Agent,
    Customer,
    /// Any role the API sends that this client does not recognize.
    #[serde(other)]
    Unknown,
}

/// The authenticated user, as returned by the auth endpoints and kept in
/// session storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// A nested user reference on a property or booking. The API may omit the
/// display fields, so everything but the id is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserRef {
    /// Display name, falling back to a placeholder.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN)
    }

    /// Display email, falling back to a placeholder.
    pub fn display_email(&self) -> &str {
        self.email.as_deref().unwrap_or(UNKNOWN)
    }
}

/// A property listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub location: String,
    /// Ordered upload references, at most four.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub agent: Option<UserRef>,
}

impl Property {
    /// Name of the listing agent, or a placeholder when absent.
    pub fn agent_name(&self) -> &str {
        self.agent.as_ref().map_or(UNKNOWN, UserRef::display_name)
    }

    /// Email of the listing agent, or a placeholder when absent.
    pub fn agent_email(&self) -> &str {
        self.agent.as_ref().map_or(UNKNOWN, UserRef::display_email)
    }
}

/// A nested property reference on a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRef {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// Booking lifecycle states. Pending may move to Accepted or Rejected;
/// both of those are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Pending,
    Accepted,
    Rejected,
}

impl BookingStatus {
    /// Lowercase label for user-facing messages ("accepted", "rejected").
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Accepted => "accepted",
            BookingStatus::Rejected => "rejected",
        }
    }
}

/// A visit booking tying a customer to a property and its agent.
///
/// The nested references may arrive partially populated; every accessor
/// substitutes a placeholder instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub property: Option<PropertyRef>,
    #[serde(default)]
    pub agent: Option<UserRef>,
    #[serde(default)]
    pub customer: Option<UserRef>,
    #[serde(rename = "visitDate")]
    pub visit_date: String,
    pub status: BookingStatus,
}

impl Booking {
    /// Title of the booked property, or a placeholder when absent.
    pub fn property_title(&self) -> &str {
        self.property
            .as_ref()
            .and_then(|p| p.title.as_deref())
            .unwrap_or(UNKNOWN)
    }

    /// Name of the booking customer, or a placeholder when absent.
    pub fn customer_name(&self) -> &str {
        self.customer.as_ref().map_or(UNKNOWN, UserRef::display_name)
    }

    /// Email of the booking customer, or a placeholder when absent.
    pub fn customer_email(&self) -> &str {
        self.customer.as_ref().map_or(UNKNOWN, UserRef::display_email)
    }

    /// Visit date formatted for display.
    pub fn visit_date_display(&self) -> String {
        format_date(&self.visit_date)
    }
}

/// Per-agent statistics row on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentStats {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub total_bookings: u32,
}

/// Per-customer statistics row on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerStats {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub accepted_bookings: u32,
    #[serde(default)]
    pub rejected_bookings: u32,
}

/// Listing count per agent, for the admin breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentPropertyCount {
    pub name: String,
    #[serde(default)]
    pub total_properties: u32,
}

/// Payload for `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response from `POST /auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Payload for `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Payload for `POST /bookings`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub property: String,
    pub agent: String,
    pub customer: String,
    pub visit_date: String,
}

/// Payload for `PATCH /bookings/{id}/status`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdate {
    pub status: BookingStatus,
}

/// Format an API date string for display.
///
/// Accepts RFC 3339 timestamps (what the API sends) as well as plain
/// `YYYY-MM-DD` dates (what a date input produces). Anything unparseable
/// is returned as-is rather than dropped.
pub fn format_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d %b %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d %b %Y").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_mongo_id() {
        let json = r#"{"_id":"u1","name":"Asha","email":"asha@example.com","role":"agent"}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, "u1");
        assert_eq!(user.role, Role::Agent);
    }

    #[test]
    fn test_unrecognized_role_maps_to_unknown() {
        let json = r#"{"_id":"u2","name":"X","email":"x@example.com","role":"superuser"}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.role, Role::Unknown);
    }

    #[test]
    fn test_property_defaults_optional_fields() {
        let json = r#"{"_id":"p1","title":"Lake View","price":100,"location":"A"}"#;
        let prop: Property = serde_json::from_str(json).unwrap();

        assert!(prop.images.is_empty());
        assert!(prop.agent.is_none());
        assert_eq!(prop.agent_name(), UNKNOWN);
    }

    #[test]
    fn test_booking_tolerates_missing_references() {
        let json = r#"{"_id":"b1","visitDate":"2026-09-01","status":"Pending"}"#;
        let booking: Booking = serde_json::from_str(json).unwrap();

        assert_eq!(booking.property_title(), UNKNOWN);
        assert_eq!(booking.customer_name(), UNKNOWN);
        assert_eq!(booking.status, BookingStatus::Pending);
    }

    #[test]
    fn test_booking_status_wire_format() {
        let json = serde_json::to_string(&BookingStatus::Accepted).unwrap();
        assert_eq!(json, r#""Accepted""#);

        let parsed: BookingStatus = serde_json::from_str(r#""Rejected""#).unwrap();
        assert_eq!(parsed, BookingStatus::Rejected);
    }

    #[test]
    fn test_customer_stats_default_counters() {
        let json = r#"{"_id":"c1","name":"Ravi","email":"ravi@example.com"}"#;
        let stats: CustomerStats = serde_json::from_str(json).unwrap();

        assert_eq!(stats.accepted_bookings, 0);
        assert_eq!(stats.rejected_bookings, 0);
    }

    #[test]
    fn test_booking_request_wire_format() {
        let req = BookingRequest {
            property: "p1".to_string(),
            agent: "a1".to_string(),
            customer: "c1".to_string(),
            visit_date: "2026-09-01".to_string(),
        };

        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains(r#""visitDate":"2026-09-01""#));
    }

    #[test]
    fn test_format_date_rfc3339() {
        assert_eq!(format_date("2026-09-01T00:00:00.000Z"), "01 Sep 2026");
    }

    #[test]
    fn test_format_date_plain() {
        assert_eq!(format_date("2026-09-01"), "01 Sep 2026");
    }

    #[test]
    fn test_format_date_passes_through_garbage() {
        assert_eq!(format_date("soon"), "soon");
    }
}
