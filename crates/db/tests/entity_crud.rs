//! Integration tests for the repository layer.
//!
//! Exercises every repository against a migrated database:
//! - Create the full hierarchy (airline -> flight -> seat, passenger -> booking)
//! - Partial updates
//! - Unique constraint violations
//! - Foreign key violations, including deletes of referenced parents

use assert_matches::assert_matches;
use skybook_core::datetime::parse_timestamp;
use skybook_core::types::DbId;
use skybook_db::models::airline::{CreateAirline, UpdateAirline};
use skybook_db::models::booking::{CreateBooking, UpdateBooking};
use skybook_db::models::flight::{CreateFlight, UpdateFlight};
use skybook_db::models::passenger::{CreatePassenger, UpdatePassenger};
use skybook_db::models::seat::{CreateSeat, UpdateSeat};
use skybook_db::repositories::{AirlineRepo, BookingRepo, FlightRepo, PassengerRepo, SeatRepo};
use sqlx::error::ErrorKind;
use sqlx::{SqliteConnection, SqlitePool};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_airline(name: &str, country: &str) -> CreateAirline {
    CreateAirline {
        name: name.to_string(),
        country: country.to_string(),
    }
}

fn new_flight(airline_id: DbId) -> CreateFlight {
    CreateFlight {
        airline_id,
        departure_time: parse_timestamp("2030-05-01T08:00:00").unwrap(),
        arrival_time: parse_timestamp("2030-05-01T13:00:00").unwrap(),
        origin: "Nairobi".to_string(),
        destination: "London".to_string(),
    }
}

fn new_passenger(name: &str, email: &str) -> CreatePassenger {
    CreatePassenger {
        name: name.to_string(),
        email: email.to_string(),
    }
}

fn new_seat(flight_id: DbId, seat_number: &str, booking_id: Option<DbId>) -> CreateSeat {
    CreateSeat {
        flight_id,
        seat_number: seat_number.to_string(),
        is_booked: None,
        booking_id,
    }
}

fn error_kind(err: &sqlx::Error) -> Option<ErrorKind> {
    err.as_database_error().map(|e| e.kind())
}

async fn seed_flight(conn: &mut SqliteConnection) -> (DbId, DbId) {
    let airline = AirlineRepo::create(conn, &new_airline("Kenya Airways", "Kenya"))
        .await
        .unwrap();
    let flight = FlightRepo::create(conn, &new_flight(airline.id)).await.unwrap();
    (airline.id, flight.id)
}

// ---------------------------------------------------------------------------
// Airline
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_airline_crud(pool: SqlitePool) {
    let mut conn = pool.acquire().await.unwrap();

    let created = AirlineRepo::create(&mut conn, &new_airline("Kenya Airways", "Kenya"))
        .await
        .unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.name, "Kenya Airways");

    let found = AirlineRepo::find_by_id(&mut conn, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found, created);

    let updated = AirlineRepo::update(
        &mut conn,
        created.id,
        &UpdateAirline {
            name: Some("KQ".to_string()),
            country: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.name, "KQ");
    assert_eq!(updated.country, "Kenya");

    assert!(AirlineRepo::delete(&mut conn, created.id).await.unwrap());
    assert!(!AirlineRepo::delete(&mut conn, created.id).await.unwrap());
    assert!(AirlineRepo::find_by_id(&mut conn, created.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_airline_returns_none(pool: SqlitePool) {
    let mut conn = pool.acquire().await.unwrap();
    let result = AirlineRepo::update(&mut conn, 999, &UpdateAirline::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_airlines_in_id_order(pool: SqlitePool) {
    let mut conn = pool.acquire().await.unwrap();
    for (name, country) in [("A", "X"), ("B", "Y"), ("C", "Z")] {
        AirlineRepo::create(&mut conn, &new_airline(name, country))
            .await
            .unwrap();
    }
    let names: Vec<String> = AirlineRepo::list(&mut conn)
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(names, ["A", "B", "C"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_ids_not_reused_after_delete(pool: SqlitePool) {
    let mut conn = pool.acquire().await.unwrap();
    let first = AirlineRepo::create(&mut conn, &new_airline("A", "X"))
        .await
        .unwrap();
    AirlineRepo::delete(&mut conn, first.id).await.unwrap();
    let second = AirlineRepo::create(&mut conn, &new_airline("B", "Y"))
        .await
        .unwrap();
    assert!(second.id > first.id);
}

// ---------------------------------------------------------------------------
// Flight
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_flight_round_trips_timestamps(pool: SqlitePool) {
    let mut conn = pool.acquire().await.unwrap();
    let (airline_id, flight_id) = seed_flight(&mut conn).await;

    let flight = FlightRepo::find_by_id(&mut conn, flight_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(flight.airline_id, airline_id);
    assert_eq!(
        flight.departure_time,
        parse_timestamp("2030-05-01T08:00:00").unwrap()
    );
    assert_eq!(
        flight.arrival_time,
        parse_timestamp("2030-05-01T13:00:00").unwrap()
    );

    assert_eq!(FlightRepo::list(&mut conn).await.unwrap(), vec![flight]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_flight_partial_update_keeps_other_fields(pool: SqlitePool) {
    let mut conn = pool.acquire().await.unwrap();
    let (_, flight_id) = seed_flight(&mut conn).await;

    let updated = FlightRepo::update(
        &mut conn,
        flight_id,
        &UpdateFlight {
            destination: Some("Paris".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.destination, "Paris");
    assert_eq!(updated.origin, "Nairobi");
    assert_eq!(
        updated.departure_time,
        parse_timestamp("2030-05-01T08:00:00").unwrap()
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_flight_requires_existing_airline(pool: SqlitePool) {
    let mut conn = pool.acquire().await.unwrap();
    let err = FlightRepo::create(&mut conn, &new_flight(424242))
        .await
        .unwrap_err();
    assert_eq!(error_kind(&err), Some(ErrorKind::ForeignKeyViolation));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_airline_with_flights_is_restricted(pool: SqlitePool) {
    let mut conn = pool.acquire().await.unwrap();
    let (airline_id, _) = seed_flight(&mut conn).await;

    let err = AirlineRepo::delete(&mut conn, airline_id).await.unwrap_err();
    assert_eq!(error_kind(&err), Some(ErrorKind::ForeignKeyViolation));
    assert!(AirlineRepo::find_by_id(&mut conn, airline_id)
        .await
        .unwrap()
        .is_some());
}

// ---------------------------------------------------------------------------
// Passenger
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_passenger_email_unique(pool: SqlitePool) {
    let mut conn = pool.acquire().await.unwrap();
    PassengerRepo::create(&mut conn, &new_passenger("Rome", "rome@example.com"))
        .await
        .unwrap();

    let err = PassengerRepo::create(&mut conn, &new_passenger("Other", "rome@example.com"))
        .await
        .unwrap_err();
    assert_eq!(error_kind(&err), Some(ErrorKind::UniqueViolation));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_passenger_email_update(pool: SqlitePool) {
    let mut conn = pool.acquire().await.unwrap();
    let p = PassengerRepo::create(&mut conn, &new_passenger("Lavine", "lavine@example.com"))
        .await
        .unwrap();

    let updated = PassengerRepo::update(
        &mut conn,
        p.id,
        &UpdatePassenger {
            name: None,
            email: Some("l.onyango@example.com".to_string()),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.email, "l.onyango@example.com");
    assert_eq!(updated.name, "Lavine");

    // The old address is free again.
    PassengerRepo::create(&mut conn, &new_passenger("Other", "lavine@example.com"))
        .await
        .unwrap();
}

// ---------------------------------------------------------------------------
// Booking
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_booking_date_defaults_to_now(pool: SqlitePool) {
    let mut conn = pool.acquire().await.unwrap();
    let p = PassengerRepo::create(&mut conn, &new_passenger("Treva", "treva@example.com"))
        .await
        .unwrap();

    let before = skybook_core::datetime::now();
    let booking = BookingRepo::create(
        &mut conn,
        &CreateBooking {
            passenger_id: p.id,
            booking_date: None,
        },
    )
    .await
    .unwrap();
    let after = skybook_core::datetime::now();

    assert!(booking.booking_date >= before && booking.booking_date <= after);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_booking_update_date(pool: SqlitePool) {
    let mut conn = pool.acquire().await.unwrap();
    let p = PassengerRepo::create(&mut conn, &new_passenger("Treva", "treva@example.com"))
        .await
        .unwrap();
    let booking = BookingRepo::create(
        &mut conn,
        &CreateBooking {
            passenger_id: p.id,
            booking_date: None,
        },
    )
    .await
    .unwrap();

    let new_date = parse_timestamp("2029-01-15T09:00:00").unwrap();
    let updated = BookingRepo::update(
        &mut conn,
        booking.id,
        &UpdateBooking {
            passenger_id: None,
            booking_date: Some(new_date),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.booking_date, new_date);
    assert_eq!(updated.passenger_id, p.id);

    let stored = BookingRepo::find_by_id(&mut conn, booking.id).await.unwrap();
    assert_eq!(stored, Some(updated));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_passenger_with_bookings_is_restricted(pool: SqlitePool) {
    let mut conn = pool.acquire().await.unwrap();
    let p = PassengerRepo::create(&mut conn, &new_passenger("Rome", "rome@example.com"))
        .await
        .unwrap();
    BookingRepo::create(
        &mut conn,
        &CreateBooking {
            passenger_id: p.id,
            booking_date: None,
        },
    )
    .await
    .unwrap();

    let err = PassengerRepo::delete(&mut conn, p.id).await.unwrap_err();
    assert_eq!(error_kind(&err), Some(ErrorKind::ForeignKeyViolation));
}

// ---------------------------------------------------------------------------
// Seat
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seat_defaults_unbooked(pool: SqlitePool) {
    let mut conn = pool.acquire().await.unwrap();
    let (_, flight_id) = seed_flight(&mut conn).await;

    let seat = SeatRepo::create(&mut conn, &new_seat(flight_id, "1A", None))
        .await
        .unwrap();
    assert!(!seat.is_booked);
    assert_eq!(seat.booking_id, None);

    assert_eq!(SeatRepo::list(&mut conn).await.unwrap(), vec![seat]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_booking_holds_at_most_one_seat(pool: SqlitePool) {
    let mut conn = pool.acquire().await.unwrap();
    let (_, flight_id) = seed_flight(&mut conn).await;
    let p = PassengerRepo::create(&mut conn, &new_passenger("Rome", "rome@example.com"))
        .await
        .unwrap();
    let booking = BookingRepo::create(
        &mut conn,
        &CreateBooking {
            passenger_id: p.id,
            booking_date: None,
        },
    )
    .await
    .unwrap();

    SeatRepo::create(&mut conn, &new_seat(flight_id, "12A", Some(booking.id)))
        .await
        .unwrap();
    let err = SeatRepo::create(&mut conn, &new_seat(flight_id, "12B", Some(booking.id)))
        .await
        .unwrap_err();
    assert_eq!(error_kind(&err), Some(ErrorKind::UniqueViolation));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unbooked_seats_may_share_null_booking(pool: SqlitePool) {
    let mut conn = pool.acquire().await.unwrap();
    let (_, flight_id) = seed_flight(&mut conn).await;
    SeatRepo::create(&mut conn, &new_seat(flight_id, "1A", None))
        .await
        .unwrap();
    SeatRepo::create(&mut conn, &new_seat(flight_id, "1B", None))
        .await
        .unwrap();
    assert_eq!(SeatRepo::list(&mut conn).await.unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seat_booking_link_tagged_update(pool: SqlitePool) {
    let mut conn = pool.acquire().await.unwrap();
    let (_, flight_id) = seed_flight(&mut conn).await;
    let p = PassengerRepo::create(&mut conn, &new_passenger("Rome", "rome@example.com"))
        .await
        .unwrap();
    let booking = BookingRepo::create(
        &mut conn,
        &CreateBooking {
            passenger_id: p.id,
            booking_date: None,
        },
    )
    .await
    .unwrap();
    let seat = SeatRepo::create(&mut conn, &new_seat(flight_id, "3C", None))
        .await
        .unwrap();

    // Set the link.
    let linked = SeatRepo::update(
        &mut conn,
        seat.id,
        &UpdateSeat {
            is_booked: Some(true),
            booking_id: Some(Some(booking.id)),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(linked.booking_id, Some(booking.id));
    assert!(linked.is_booked);

    // Absent leaves it alone.
    let untouched = SeatRepo::update(
        &mut conn,
        seat.id,
        &UpdateSeat {
            seat_number: Some("3D".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(untouched.booking_id, Some(booking.id));
    assert_eq!(untouched.seat_number, "3D");

    // Explicit null clears it.
    let cleared = SeatRepo::update(
        &mut conn,
        seat.id,
        &UpdateSeat {
            booking_id: Some(None),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(cleared.booking_id, None);
    assert!(cleared.is_booked);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_booking_held_by_seat_is_restricted(pool: SqlitePool) {
    let mut conn = pool.acquire().await.unwrap();
    let (_, flight_id) = seed_flight(&mut conn).await;
    let p = PassengerRepo::create(&mut conn, &new_passenger("Rome", "rome@example.com"))
        .await
        .unwrap();
    let booking = BookingRepo::create(
        &mut conn,
        &CreateBooking {
            passenger_id: p.id,
            booking_date: None,
        },
    )
    .await
    .unwrap();
    SeatRepo::create(&mut conn, &new_seat(flight_id, "1A", Some(booking.id)))
        .await
        .unwrap();

    let err = BookingRepo::delete(&mut conn, booking.id).await.unwrap_err();
    assert_matches!(error_kind(&err), Some(ErrorKind::ForeignKeyViolation));
}

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dropped_transaction_rolls_back(pool: SqlitePool) {
    {
        let mut tx = pool.begin().await.unwrap();
        AirlineRepo::create(&mut *tx, &new_airline("Ghost Air", "Nowhere"))
            .await
            .unwrap();
        // Dropped without commit.
    }

    let mut conn = pool.acquire().await.unwrap();
    assert!(AirlineRepo::list(&mut conn).await.unwrap().is_empty());
}
