//! Sample data for local development.
//!
//! [`clear_database`] removes every row child-first so the foreign
//! keys never refuse a delete, and [`seed_database`] inserts a small connected
//! graph: three airlines, each with one flight, three passengers each with one
//! booking, and one booked seat per booking.

use chrono::Duration;
use skybook_core::datetime;
use sqlx::SqliteConnection;

use crate::models::airline::CreateAirline;
use crate::models::booking::CreateBooking;
use crate::models::flight::CreateFlight;
use crate::models::passenger::CreatePassenger;
use crate::models::seat::CreateSeat;
use crate::repositories::{AirlineRepo, BookingRepo, FlightRepo, PassengerRepo, SeatRepo};
use crate::DbPool;

/// Tables in delete order: children before parents.
const TABLES_CHILD_FIRST: &[&str] = &["seat", "booking", "passenger", "flights", "airline"];

/// `(name, country)` for each seeded airline.
const AIRLINES: &[(&str, &str)] = &[
    ("Kenya Airways", "Kenya"),
    ("Dutch Airlines", "Netherlands"),
    ("Turkish Airlines", "Turkey"),
];

/// `(days_from_now, duration_hours, origin, destination)`, one per airline.
const FLIGHTS: &[(i64, i64, &str, &str)] = &[
    (1, 5, "Kenya", "London"),
    (2, 6, "Netherlands", "Kenya"),
    (3, 7, "Turkey", "Kenya"),
];

/// `(name, email)` for each seeded passenger.
const PASSENGERS: &[(&str, &str)] = &[
    ("Rome Otieno", "otienorome2@gmail.com"),
    ("Lavine Onyango", "lonyango5@gmail.com"),
    ("Treva Odhiambo", "trevaodhiambo45@gmail.com"),
];

/// Seat numbers, one per booking/flight pair.
const SEAT_NUMBERS: &[&str] = &["12A", "15B", "18C"];

/// Row counts inserted by [`seed_database`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub airlines: usize,
    pub flights: usize,
    pub passengers: usize,
    pub bookings: usize,
    pub seats: usize,
}

/// Delete every row from every table.
pub async fn clear_database(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    for table in TABLES_CHILD_FIRST {
        let result = sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&mut *conn)
            .await?;
        tracing::debug!(table, rows = result.rows_affected(), "Cleared table");
    }
    Ok(())
}

/// Insert the sample data set in a single transaction.
pub async fn seed_database(pool: &DbPool) -> Result<SeedSummary, sqlx::Error> {
    let mut tx = crate::begin_write(pool).await?;
    let mut summary = SeedSummary::default();
    let now = datetime::now();

    let mut flight_ids = Vec::with_capacity(FLIGHTS.len());
    for (&(name, country), &(days, hours, origin, destination)) in AIRLINES.iter().zip(FLIGHTS) {
        let airline = AirlineRepo::create(
            &mut *tx,
            &CreateAirline {
                name: name.to_string(),
                country: country.to_string(),
            },
        )
        .await?;
        summary.airlines += 1;

        let departure_time = now + Duration::days(days);
        let flight = FlightRepo::create(
            &mut *tx,
            &CreateFlight {
                airline_id: airline.id,
                departure_time,
                arrival_time: departure_time + Duration::hours(hours),
                origin: origin.to_string(),
                destination: destination.to_string(),
            },
        )
        .await?;
        summary.flights += 1;
        flight_ids.push(flight.id);
    }

    for ((&(name, email), &seat_number), &flight_id) in
        PASSENGERS.iter().zip(SEAT_NUMBERS).zip(&flight_ids)
    {
        let passenger = PassengerRepo::create(
            &mut *tx,
            &CreatePassenger {
                name: name.to_string(),
                email: email.to_string(),
            },
        )
        .await?;
        summary.passengers += 1;

        let booking = BookingRepo::create(
            &mut *tx,
            &CreateBooking {
                passenger_id: passenger.id,
                booking_date: Some(now),
            },
        )
        .await?;
        summary.bookings += 1;

        SeatRepo::create(
            &mut *tx,
            &CreateSeat {
                flight_id,
                seat_number: seat_number.to_string(),
                is_booked: Some(true),
                booking_id: Some(booking.id),
            },
        )
        .await?;
        summary.seats += 1;
    }

    tx.commit().await?;
    tracing::info!(?summary, "Database seeded");
    Ok(summary)
}
