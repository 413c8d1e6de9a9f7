use crate::report::aggregate::Route;
use crate::ticket::Ticket;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use std::sync::Arc;

pub const VVO: &str = "Владивосток";
pub const TLV: &str = "Тель-Авив";
pub const UFA: &str = "Уфа";

pub fn id(s: &str) -> Arc<str> {
    Arc::from(s)
}

pub fn route() -> Route {
    Route::new(VVO, TLV)
}

fn base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2018, 5, 12)
        .and_then(|d| d.and_hms_opt(6, 0, 0))
        .unwrap()
}

pub fn add_ticket(
    tickets: &mut Vec<Ticket>,
    carrier: &str,
    origin_name: &str,
    destination_name: &str,
    departure: (&str, &str),
    arrival: (&str, &str),
    price: f64,
) {
    tickets.push(Ticket {
        origin: "VVO".to_string(),
        origin_name: origin_name.to_string(),
        destination: "TLV".to_string(),
        destination_name: destination_name.to_string(),
        departure_date: departure.0.to_string(),
        departure_time: departure.1.to_string(),
        arrival_date: arrival.0.to_string(),
        arrival_time: arrival.1.to_string(),
        carrier: id(carrier),
        stops: 1,
        price,
    });
}

/// A ticket that lands `minutes` after a fixed departure.
pub fn flight(
    carrier: &str,
    origin_name: &str,
    destination_name: &str,
    minutes: i64,
    price: f64,
) -> Ticket {
    let departure = base();
    let arrival = departure + Duration::minutes(minutes);
    let mut tickets = Vec::new();
    add_ticket(
        &mut tickets,
        carrier,
        origin_name,
        destination_name,
        (
            &departure.format("%d.%m.%y").to_string(),
            &departure.format("%-H:%M").to_string(),
        ),
        (
            &arrival.format("%d.%m.%y").to_string(),
            &arrival.format("%-H:%M").to_string(),
        ),
        price,
    );
    tickets.remove(0)
}

pub fn arb_id(prefix: &'static str) -> impl Strategy<Value = Arc<str>> {
    prop_oneof![
        Just(Arc::from(format!("{}_1", prefix))),
        Just(Arc::from(format!("{}_2", prefix))),
        Just(Arc::from(format!("{}_3", prefix))),
    ]
}

pub fn arb_city() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(VVO), Just(TLV), Just(UFA)]
}

pub fn arb_ticket() -> impl Strategy<Value = Ticket> {
    (
        arb_id("CR"),
        arb_city(),
        arb_city(),
        -120..3000i64,
        0..100_000u32,
    )
        .prop_map(|(carrier, org, dst, minutes, price)| {
            flight(carrier.as_ref(), org, dst, minutes, price as f64)
        })
}
