//! Output formatting module

use skiphire_types::{format_gbp, OutputFormat, Result, SkipRecord};

pub fn print_skips(format: OutputFormat, skips: &[SkipRecord], has_heavy_waste: bool) -> Result<()> {
    if format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(skips)?;
        println!("{}", content);
        return Ok(());
    }

    if skips.is_empty() {
        // Zero matches is a normal state, not an error
        println!("No skips match the current filters. Try adjusting the filter criteria.");
        return Ok(());
    }

    println!("\nAvailable Skips");
    println!("===============");
    if has_heavy_waste {
        println!("(restricted to skips that allow heavy waste)");
    }
    println!(
        "{:>6} {:>6} {:>10} {:>8} {:>9} {:>12} {:>12}",
        "ID", "Size", "Hire days", "On road", "Heavy OK", "Ex VAT", "Inc VAT"
    );
    for skip in skips {
        println!(
            "{:>6} {:>5}y {:>10} {:>8} {:>9} {:>12} {:>12}",
            skip.id,
            skip.size,
            skip.hire_period_days,
            yes_no(skip.allowed_on_road),
            yes_no(skip.allows_heavy_waste),
            format_gbp(skip.price_before_vat),
            format_gbp(skip.total_price()),
        );
    }
    println!("\n{} skip(s) shown, sorted by size.", skips.len());

    Ok(())
}

pub fn print_comparison(format: OutputFormat, skips: &[&SkipRecord]) -> Result<()> {
    if format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(skips)?;
        println!("{}", content);
        return Ok(());
    }

    if skips.is_empty() {
        println!("None of the requested skips are available at this location.");
        return Ok(());
    }

    println!("\nSkip Comparison");
    println!("===============");
    for skip in skips {
        println!("\nSkip {} ({} yards)", skip.id, skip.size);
        println!("  Hire period:     {} days", skip.hire_period_days);
        println!("  Allowed on road: {}", yes_no(skip.allowed_on_road));
        println!("  Heavy waste:     {}", yes_no(skip.allows_heavy_waste));
        if let Some(cost) = skip.transport_cost {
            println!("  Transport cost:  {}", format_gbp(cost));
        }
        if let Some(cost) = skip.per_tonne_cost {
            println!("  Per tonne cost:  {}", format_gbp(cost));
        }
        println!("  Price (ex VAT):  {}", format_gbp(skip.price_before_vat));
        println!(
            "  VAT:             {} ({}%)",
            format_gbp(skip.vat_amount()),
            skip.vat
        );
        println!("  Total:           {}", format_gbp(skip.total_price()));
    }

    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}
