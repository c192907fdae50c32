// ============================================================================
// Basic Usage Example
// ============================================================================

use exact_money::prelude::*;

fn main() -> MoneyResult<()> {
    println!("=== Exact-Money Example ===\n");

    // Build a line item and apply a 21% tax
    let net = MonetaryValue::new(8000, "EUR", 2)?; // EUR 80.00
    let tax = net.multiply(21, 2)?;
    let gross = net.add(tax)?;

    println!("Net:   {}", net);
    println!("Tax:   {}", tax);
    println!("Gross: {}\n", gross);

    // Split the gross amount 2:1 between two parties, to the cent
    println!("Splitting {} with weights [2, 1]...", gross);
    let shares = gross.allocate(&[2, 1])?;
    for (i, share) in shares.iter().enumerate() {
        println!("  share {}: {}", i, share);
    }
    let total = shares[0].add(shares[1])?;
    println!("  total:   {} (exact)\n", total);

    // Rounding strategies are caller-selected at every lossy boundary
    let price = MonetaryValue::new(314, "EUR", 2)?; // EUR 3.14
    println!("Narrowing {} to one decimal place:", price);
    println!("  half-to-even:   {}", price.set_precision(1)?);
    println!(
        "  away-from-zero: {}",
        price.set_precision_with(1, round_away_from_zero)?
    );
    println!(
        "  towards-zero:   {}",
        price.set_precision_with(1, round_towards_zero)?
    );

    // The string codec round-trips
    let parsed: MonetaryValue = "USD -12.34".parse()?;
    println!("\nParsed back: {}", parsed);

    Ok(())
}
