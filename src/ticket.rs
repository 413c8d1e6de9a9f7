use crate::error::ReportError;
use crate::time::{self, Minutes};
use log::info;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

pub type CarrierId = Arc<str>;

/// One flight offer as it appears in the ticket document.
///
/// Dates are `dd.MM.yy` and times are `H:mm`; they stay textual until
/// [`Ticket::duration`] parses them.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Ticket {
    pub origin: String,
    pub origin_name: String,
    pub destination: String,
    pub destination_name: String,
    pub departure_date: String,
    pub departure_time: String,
    pub arrival_date: String,
    pub arrival_time: String,
    pub carrier: CarrierId,
    pub stops: u32,
    pub price: f64,
}

impl Ticket {
    pub fn duration(&self) -> Result<Minutes, ReportError> {
        let departure = time::parse_point(
            ("departure_date", &self.departure_date),
            ("departure_time", &self.departure_time),
        )?;
        let arrival = time::parse_point(
            ("arrival_date", &self.arrival_date),
            ("arrival_time", &self.arrival_time),
        )?;
        Ok(Minutes::between(departure, arrival))
    }
}

fn parse_document(data: &str) -> Result<Vec<Ticket>, ReportError> {
    #[derive(Deserialize)]
    struct RawData {
        tickets: Vec<Ticket>,
    }
    let raw: RawData = serde_json::from_str(data)?;
    Ok(raw.tickets)
}

pub fn load_from_file(path: &Path) -> Result<Vec<Ticket>, ReportError> {
    let data = std::fs::read_to_string(path)?;
    let tickets = parse_document(&data)?;
    info!("loaded {} tickets from {}", tickets.len(), path.display());
    Ok(tickets)
}
