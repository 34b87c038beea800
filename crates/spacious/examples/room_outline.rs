//! Measure and turn a room outline.
//!
//! Usage:
//!   cargo run -p spacious --example room_outline

use spacious::prelude::*;

fn main() -> Result<()> {
    // L-shaped kitchen, corner at the origin, counter-clockwise.
    let mut kitchen = Polygon::new(&[
        point![4.0, 0.0],
        point![4.0, 2.0],
        point![2.0, 2.0],
        point![2.0, 5.0],
        point![0.0, 5.0],
    ])?;
    println!("{kitchen}");
    println!("area = {}", kitchen.area());
    println!("centroid = {}", kitchen.centroid());

    kitchen.rotate(std::f64::consts::FRAC_PI_2)?;
    println!("after a quarter turn about the centroid:\n{kitchen}");
    Ok(())
}
