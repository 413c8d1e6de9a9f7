use crate::error::ReportError;
use crate::ticket::{CarrierId, Ticket};
use crate::time::Minutes;
use log::{debug, trace};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Exact-match filter on the origin and destination names of a ticket.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Route {
    pub origin_name: String,
    pub destination_name: String,
}

impl Route {
    pub fn new(origin_name: impl Into<String>, destination_name: impl Into<String>) -> Route {
        Route {
            origin_name: origin_name.into(),
            destination_name: destination_name.into(),
        }
    }

    pub fn matches(&self, ticket: &Ticket) -> bool {
        ticket.origin_name == self.origin_name && ticket.destination_name == self.destination_name
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin_name, self.destination_name)
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct RouteTickets {
    /// Shortest flight per carrier, keyed (and so iterated) by carrier code.
    pub fastest: BTreeMap<CarrierId, Minutes>,
    /// Every route price in input order, duplicates included.
    pub prices: Vec<f64>,
}

/// Folds the tickets on `route` into per-carrier minimum durations and the
/// route price set. The first ticket with an unparseable date or time aborts
/// the fold.
pub fn aggregate(tickets: &[Ticket], route: &Route) -> Result<RouteTickets, ReportError> {
    tickets
        .iter()
        .filter(|ticket| {
            let on_route = route.matches(ticket);
            if !on_route {
                trace!(
                    "skipping {} {} -> {}",
                    ticket.carrier, ticket.origin_name, ticket.destination_name
                );
            }
            on_route
        })
        .try_fold(RouteTickets::default(), |mut acc, ticket| {
            let duration = ticket.duration()?;
            debug!("{} flight takes {} ({} stops)", ticket.carrier, duration, ticket.stops);
            acc.fastest
                .entry(ticket.carrier.clone())
                .and_modify(|fastest| *fastest = (*fastest).min(duration))
                .or_insert(duration);
            acc.prices.push(ticket.price);
            Ok(acc)
        })
}
