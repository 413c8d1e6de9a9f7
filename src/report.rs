pub mod aggregate;
pub mod stats;

#[cfg(test)]
mod tests;

use crate::error::ReportError;
use crate::report::aggregate::{aggregate, Route};
use crate::ticket::{CarrierId, Ticket};
use crate::time::Minutes;
use colored::Colorize;
use serde::Serialize;
use std::fmt;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Serialize, Tabled)]
pub struct CarrierRow {
    #[tabled(rename = "Carrier")]
    pub carrier: CarrierId,
    #[tabled(skip)]
    pub minutes: Minutes,
    #[tabled(rename = "Fastest flight")]
    pub duration: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub route: Route,
    pub carriers: Vec<CarrierRow>,
    pub average_price: f64,
    pub median_price: f64,
    pub difference: f64,
}

impl Report {
    pub fn build(tickets: &[Ticket], route: Route) -> Result<Report, ReportError> {
        let on_route = aggregate(tickets, &route)?;

        let carriers = on_route
            .fastest
            .into_iter()
            .map(|(carrier, minutes)| CarrierRow {
                carrier,
                minutes,
                duration: minutes.to_string(),
            })
            .collect();

        let average_price = stats::mean(&on_route.prices);
        let median_price = stats::median(&on_route.prices)?;

        Ok(Report {
            route,
            carriers,
            average_price,
            median_price,
            difference: (average_price - median_price).abs(),
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}",
            format!("Fastest flight per carrier, {}:", self.route).bold()
        )?;
        let mut table = Table::new(&self.carriers);
        table.with(Style::rounded());
        table.with(Alignment::left());
        writeln!(f, "{}", table)?;

        writeln!(
            f,
            "{}",
            format!("Average vs median price, {}:", self.route).bold()
        )?;
        writeln!(f, "  Average:    {}", self.average_price)?;
        writeln!(f, "  Median:     {}", self.median_price)?;
        write!(f, "  Difference: {}", self.difference.to_string().green())
    }
}
