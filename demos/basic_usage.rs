// ============================================================================
// Basic Usage Example
// ============================================================================

use precise_circle::prelude::*;

fn main() -> Result<(), CircleError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Precise Circle Example ===\n");

    // Default context: 34 significant digits, half-even
    let mut circle = Circle::new();
    println!("Created circle with {}", circle.context());
    println!("  pi = {}\n", circle.pi());

    circle.set_coordinates(0, 0)?;
    circle.set_radius(5)?;
    println!("{}", circle);
    println!("  diameter      = {}", circle.diameter()?);
    println!("  area          = {}", circle.area()?);
    println!("  circumference = {}\n", circle.circumference()?);

    // Writing a derived quantity updates the radius
    println!("Setting area to \"100\"...");
    circle.set_area("100")?;
    println!("  radius        = {}", circle.radius());
    println!("  area (back)   = {}\n", circle.area()?);

    circle.set_radius(5)?;

    // Point queries
    println!("=== Point Queries (radius 5 at origin) ===");
    for (x, y) in [(0, 0), (3, 4), (5, 0), (100, 100)] {
        let position = match circle.compare_point_to_circle(x, y)? {
            i8::MIN..=-1 => "inside",
            0 => "on boundary",
            _ => "outside",
        };
        println!(
            "  ({:>3}, {:>3}): center distance {}, edge distance {} -> {}",
            x,
            y,
            circle.center_distance_to_point(x, y)?,
            circle.distance_to_point(x, y)?,
            position
        );
    }

    // Invalid input is rejected without touching the circle
    println!("\n=== Rejected Input ===");
    match circle.set_diameter(-10) {
        Ok(()) => println!("  unexpectedly accepted"),
        Err(err) => println!("  set_diameter(-10): {}", err),
    }
    match circle.set_radius("five") {
        Ok(()) => println!("  unexpectedly accepted"),
        Err(err) => println!("  set_radius(\"five\"): {}", err),
    }
    match circle.set_radius("1e-5000000000000000000") {
        Ok(()) => println!("  unexpectedly accepted"),
        Err(err) => println!("  set_radius(\"1e-5000000000000000000\"): {}", err),
    }
    println!("  radius still {}", circle.radius());

    // Same circle at a coarser precision
    println!("\n=== Coarse Precision ===");
    let mut coarse = Circle::with_context(MathContext::DECIMAL32);
    coarse.set_radius(5)?;
    println!("  {} -> area {}", coarse.context(), coarse.area()?);

    println!("\n=== Example Complete ===");
    Ok(())
}
