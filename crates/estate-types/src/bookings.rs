//! Booking aggregation.
//!
//! Partitions a booking collection by status for the dashboard columns
//! and reduces admin statistics into the summary totals.

use crate::{Booking, BookingStatus, CustomerStats, Property};

/// Bookings split into the three status partitions, input order preserved
/// within each partition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingPartitions {
    pub pending: Vec<Booking>,
    pub accepted: Vec<Booking>,
    pub rejected: Vec<Booking>,
}

/// Sizes of the three partitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub accepted: usize,
    pub rejected: usize,
}

impl BookingPartitions {
    /// Partition `bookings` by status.
    ///
    /// Statuses absent from the input yield empty partitions, never
    /// missing ones.
    pub fn partition(bookings: &[Booking]) -> Self {
        let mut partitions = Self::default();
        for booking in bookings {
            match booking.status {
                BookingStatus::Pending => partitions.pending.push(booking.clone()),
                BookingStatus::Accepted => partitions.accepted.push(booking.clone()),
                BookingStatus::Rejected => partitions.rejected.push(booking.clone()),
            }
        }
        partitions
    }

    pub fn counts(&self) -> StatusCounts {
        StatusCounts {
            pending: self.pending.len(),
            accepted: self.accepted.len(),
            rejected: self.rejected.len(),
        }
    }

    /// Total number of bookings across all partitions.
    pub fn total(&self) -> usize {
        self.pending.len() + self.accepted.len() + self.rejected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Platform-wide accepted/rejected booking totals for the admin summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingTotals {
    pub accepted: u64,
    pub rejected: u64,
}

/// Sum the per-customer booking counters, treating absent counters as
/// zero (the deserializer already defaults them).
pub fn customer_booking_totals(customers: &[CustomerStats]) -> BookingTotals {
    customers.iter().fold(BookingTotals::default(), |acc, c| BookingTotals {
        accepted: acc.accepted + u64::from(c.accepted_bookings),
        rejected: acc.rejected + u64::from(c.rejected_bookings),
    })
}

/// Listing count per city, first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityCount {
    pub city: String,
    pub count: usize,
}

/// Group properties by location for the admin breakdown.
pub fn properties_by_city(properties: &[Property]) -> Vec<CityCount> {
    let mut rows: Vec<CityCount> = Vec::new();
    for p in properties {
        match rows.iter_mut().find(|row| row.city == p.location) {
            Some(row) => row.count += 1,
            None => rows.push(CityCount {
                city: p.location.clone(),
                count: 1,
            }),
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(id: &str, status: BookingStatus) -> Booking {
        Booking {
            id: id.to_string(),
            property: None,
            agent: None,
            customer: None,
            visit_date: "2026-09-01".to_string(),
            status,
        }
    }

    fn customer(id: &str, accepted: u32, rejected: u32) -> CustomerStats {
        CustomerStats {
            id: id.to_string(),
            name: id.to_string(),
            email: format!("{id}@example.com"),
            created_at: None,
            is_active: true,
            accepted_bookings: accepted,
            rejected_bookings: rejected,
        }
    }

    #[test]
    fn test_partition_counts() {
        let bookings = vec![
            booking("b1", BookingStatus::Pending),
            booking("b2", BookingStatus::Accepted),
            booking("b3", BookingStatus::Accepted),
        ];

        let counts = BookingPartitions::partition(&bookings).counts();

        assert_eq!(counts.pending, 1);
        assert_eq!(counts.accepted, 2);
        assert_eq!(counts.rejected, 0);
    }

    #[test]
    fn test_partition_preserves_relative_order() {
        let bookings = vec![
            booking("b1", BookingStatus::Accepted),
            booking("b2", BookingStatus::Pending),
            booking("b3", BookingStatus::Accepted),
            booking("b4", BookingStatus::Pending),
        ];

        let partitions = BookingPartitions::partition(&bookings);

        let pending_ids: Vec<&str> = partitions.pending.iter().map(|b| b.id.as_str()).collect();
        let accepted_ids: Vec<&str> = partitions.accepted.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(pending_ids, vec!["b2", "b4"]);
        assert_eq!(accepted_ids, vec!["b1", "b3"]);
    }

    #[test]
    fn test_partitions_are_disjoint_and_cover_input() {
        let bookings = vec![
            booking("b1", BookingStatus::Pending),
            booking("b2", BookingStatus::Rejected),
            booking("b3", BookingStatus::Accepted),
            booking("b4", BookingStatus::Rejected),
        ];

        let partitions = BookingPartitions::partition(&bookings);

        assert_eq!(partitions.total(), bookings.len());
        let mut all_ids: Vec<&str> = partitions
            .pending
            .iter()
            .chain(&partitions.accepted)
            .chain(&partitions.rejected)
            .map(|b| b.id.as_str())
            .collect();
        all_ids.sort_unstable();
        all_ids.dedup();
        assert_eq!(all_ids.len(), bookings.len());
    }

    #[test]
    fn test_empty_input_yields_empty_partitions() {
        let partitions = BookingPartitions::partition(&[]);

        assert!(partitions.is_empty());
        assert_eq!(partitions.counts(), StatusCounts::default());
    }

    #[test]
    fn test_customer_booking_totals() {
        let customers = vec![customer("c1", 2, 1), customer("c2", 0, 0), customer("c3", 3, 4)];

        let totals = customer_booking_totals(&customers);

        assert_eq!(totals.accepted, 5);
        assert_eq!(totals.rejected, 5);
    }

    #[test]
    fn test_customer_booking_totals_empty() {
        assert_eq!(customer_booking_totals(&[]), BookingTotals::default());
    }

    #[test]
    fn test_properties_by_city_first_seen_order() {
        let props = vec![
            Property {
                id: "p1".to_string(),
                title: "Lake View".to_string(),
                description: String::new(),
                price: 100.0,
                location: "A".to_string(),
                images: Vec::new(),
                agent: None,
            },
            Property {
                id: "p2".to_string(),
                title: "Hill Top".to_string(),
                description: String::new(),
                price: 300.0,
                location: "B".to_string(),
                images: Vec::new(),
                agent: None,
            },
            Property {
                id: "p3".to_string(),
                title: "Lakeside Villa".to_string(),
                description: String::new(),
                price: 250.0,
                location: "A".to_string(),
                images: Vec::new(),
                agent: None,
            },
        ];

        let rows = properties_by_city(&props);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].city, "A");
        assert_eq!(rows[0].count, 2);
        assert_eq!(rows[1].city, "B");
        assert_eq!(rows[1].count, 1);
    }
}
