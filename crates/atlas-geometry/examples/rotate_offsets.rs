use atlas_geometry::{Vec2, rescale, rotate_around_origin, rotate_around_point, unrescale};

fn main() {
    let offset = Vec2::new(1200.0, -300.0);

    println!("Rotating {} about the origin:", offset);
    for angle in [0.0, 45.0, 90.0, 180.0, 270.0] {
        println!("  {:>5.1}° -> {}", angle, rotate_around_origin(offset, angle));
    }

    let axis = Vec2::new(1000.0, -250.0);
    println!("\nRotating {} about {}:", offset, axis);
    for angle in [30.0, -30.0] {
        println!("  {:>5.1}° -> {}", angle, rotate_around_point(offset, axis, angle));
    }

    // Map a position inside a 36.57-unit cell onto the teleport offset range and back.
    let precision = 256.0 / 7.0;
    let local = rescale(10.0, -700_000.0, 700_000.0, 0.0, precision);
    let back = unrescale(local, -700_000.0, 700_000.0, 0.0, precision);
    println!("\n10.0 within a {:.2} cell -> {:.0} -> {:.6}", precision, local, back);
}
