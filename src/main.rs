//! Walks through the shared-default behaviour of `DateValue` on the console.
//!
//! Set `RUST_LOG=date_value=debug` to see the shared default being replaced.

use date_value::DateValue;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Unset fields come from the shared default (7/3/2005)
    let d1 = DateValue::default();
    let mut d2 = DateValue::from_sentinel(10, 12, 2024);

    println!("d1: {d1}");
    println!("d2: {d2}");

    d2.add_year(1);
    println!("d2 after add_year: {d2}");

    // Only dates constructed after this point see the new default
    DateValue::set_default_date(1, 1, 2030);

    let d3 = DateValue::default();
    println!("d3: {d3}");
    println!("d1 still: {d1}");
}
