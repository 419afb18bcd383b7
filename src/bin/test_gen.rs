use anyhow::Result;
use pathgen_core::{generate_path, PathConfig, Point, Waypoint};

fn main() -> Result<()> {
    println!("Initializing path generation...");

    let waypoints = vec![
        Waypoint::new(
            Point::new(0.0, 0.0),
            Point::new(0.0, -3.0),
            Point::new(0.0, 3.0),
        ),
        Waypoint::new(
            Point::new(6.0, 6.0),
            Point::new(-3.0, 0.0),
            Point::new(3.0, 0.0),
        ),
        Waypoint::new(
            Point::new(12.0, 0.0),
            Point::new(0.0, 3.0),
            Point::new(0.0, -3.0),
        ),
    ];

    let config = PathConfig::default();
    config.validate()?;

    println!(
        "Generating with {:?}: v_max={}, a_max={}, k={}, spacing={}",
        config.algorithm,
        config.max_velocity,
        config.max_acceleration,
        config.cornering_k,
        config.spacing
    );

    let points = generate_path(&waypoints, &config);
    println!("Generated {} points", points.len());

    for point in points.iter().take(10) {
        println!(
            "t={:.3}s pos=({:.2}, {:.2}) v={:.2} w={:.3}",
            point.time, point.position.x, point.position.y, point.speed, point.angular_velocity
        );
    }
    if points.len() > 10 {
        println!("...");
    }

    if let Some(last) = points.last() {
        println!("Total time: {:.3}s", last.time);
    }

    Ok(())
}
