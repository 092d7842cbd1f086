//! Calculate Demo
//!
//! Loads a fixture set, runs one rebate calculation, and prints the outcome
//! along with every calculation booked against the rebate store.
//!
//! Run with: `cargo run --example calculate -- spring-cashback feed-pellets-25kg 10`

use anyhow::Result;
use clap::Parser;
use rust_decimal::Decimal;
use tabled::{Table, Tabled};

use accrual::prelude::*;

/// Run one rebate calculation against a fixture set.
#[derive(Debug, Parser)]
struct Args {
    /// Rebate identifier from the fixture set
    rebate: String,

    /// Product identifier from the fixture set
    product: String,

    /// Requested volume, in the product's unit of measure
    #[arg(default_value = "1")]
    volume: Decimal,

    /// Fixture set name
    #[arg(long, default_value = "demo")]
    set: String,
}

/// A booked calculation row.
#[derive(Debug, Tabled)]
struct BookingRow {
    rebate: String,
    incentive: String,
    amount: String,
}

#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = Args::parse();

    let fixture = Fixture::from_set(&args.set)?;
    let engine = fixture.engine();

    let request = CalculateRebateRequest::new(args.rebate, args.product, args.volume);
    let result = engine.calculate(&request)?;

    println!("success: {}", result.success);

    let rows: Vec<BookingRow> = fixture
        .rebate_store()
        .stored()
        .into_iter()
        .map(|booking| BookingRow {
            rebate: booking.rebate.identifier,
            incentive: booking.rebate.incentive.to_string(),
            amount: booking.amount.to_string(),
        })
        .collect();

    if rows.is_empty() {
        println!("nothing booked");
    } else {
        println!("{}", Table::new(rows));
    }

    Ok(())
}
