use std::error::Error;

use gnuplot::*;
use linear_drive_model::{Displacement, DriveLimits, SegmentExecutor};

fn main() -> Result<(), Box<dyn Error>> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()?;

    // -----------------------
    // 1. Set up parameters
    // -----------------------
    // A 45 degree rotation with the fast rotation limits
    let displacement = Displacement::from_millidegrees(45_000)?;
    let limits = DriveLimits::fast_rotation();
    let steps = displacement.steps();

    // ---------------------
    // 2. Compute profile
    // ---------------------
    let profile = limits.plan(steps);
    println!("{steps} steps: {profile:#?}");
    if !profile.is_speed_feasible(limits.max_velocity()) {
        println!(
            "Velocity ceiling reached, cruising {} steps.",
            profile.cruise_steps(steps)
        );
    }

    let segments = limits.segments(steps);
    let total_time: f64 = segments.iter().map(|s| s.time).sum();

    // -------------------------
    // 3. Sample the segments
    // -------------------------
    let sampling_rate = 1000;
    // Initial state plus one sample per tick of each segment
    let num_points = segments
        .iter()
        .map(|s| (s.time * f64::from(sampling_rate)).ceil() as usize)
        .sum::<usize>()
        + 1;

    let mut executor = SegmentExecutor::<4>::new(sampling_rate);
    for segment in segments {
        executor.add_segment(segment);
    }

    let mut time_axis = Vec::with_capacity(num_points);
    let mut positions = Vec::with_capacity(num_points);
    let mut velocities = Vec::with_capacity(num_points);

    for i in 0..num_points {
        time_axis.push(i as f64 / f64::from(sampling_rate));
        positions.push(executor.pos());
        velocities.push(executor.vel());
        executor.tick();
    }

    let final_position = *positions.last().unwrap_or(&0.0);
    if (final_position - f64::from(steps)).abs() > 0.01 {
        eprintln!("Warning: final position is off by more than 0.01 steps.");
    }

    // --------------
    // 4. Plot data
    // --------------
    let mut fg = Figure::new();
    {
        let axes = fg.axes2d();
        axes.set_title("Linear drive profile", &[]);
        axes.set_x_label("Time (s)", &[]);
        axes.set_y_label("Steps, steps/s", &[]);
        axes.lines(&time_axis, &positions, &[Color("blue"), Caption("Position")]);
        axes.lines(&time_axis, &velocities, &[Color("red"), Caption("Velocity")]);
    }

    fg.show().map_err(|e| format!("Failed to display plot: {e}"))?;

    println!("Plot generated. Total motion time: {total_time:.3} seconds.");
    Ok(())
}
