use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use anyhow::bail;
    use clap::{Parser, Subcommand, ValueEnum};
    use pga3d::{
        Curve, Direction, Easing, Motor3, Plane3, Vec3,
        angle::degrees_to_radians,
        flat::meet3,
        motor::{eased, kenlerp, lielerp, sclerp, seplerp},
        tolerance::is_square_approx_zero,
    };

    #[derive(Debug, Parser)]
    #[command(about = "Rigid-body transforms with 3D projective geometric algebra", long_about = None)]
    struct Cli {
        /// Read all angles in degrees instead of radians
        #[arg(long, global = true)]
        degrees: bool,
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Rotate a point about an axis through the origin, then translate it
        TransformPoint {
            #[command(flatten)]
            motion: Motion,
            /// Point to transform
            #[arg(short, long, num_args = 3, allow_negative_numbers = true, required = true)]
            point: Vec<f64>,
        },
        /// Interpolate between two motions and follow a point along the path
        Interpolate {
            /// Rotation axis of the starting motion
            #[arg(long, num_args = 3, allow_negative_numbers = true, default_values_t = [0.0, 0.0, 1.0])]
            from_axis: Vec<f64>,
            /// Rotation angle of the starting motion
            #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
            from_angle: f64,
            /// Translation of the starting motion
            #[arg(long, num_args = 3, allow_negative_numbers = true, default_values_t = [0.0, 0.0, 0.0])]
            from_translation: Vec<f64>,
            /// Rotation axis of the final motion
            #[arg(long, num_args = 3, allow_negative_numbers = true, required = true)]
            to_axis: Vec<f64>,
            /// Rotation angle of the final motion
            #[arg(long, allow_negative_numbers = true)]
            to_angle: f64,
            /// Translation of the final motion
            #[arg(long, num_args = 3, allow_negative_numbers = true, required = true)]
            to_translation: Vec<f64>,
            /// Interpolation policy
            #[arg(long, value_enum, default_value_t = Policy::Sclerp)]
            policy: Policy,
            /// Blend between screw (0) and separate (1) interpolation for `kenlerp`
            #[arg(long, default_value_t = 0.5)]
            beta: f64,
            /// Easing curve remapping the interpolation parameter
            #[arg(long, value_enum, default_value_t = Curve::Linear)]
            ease: Curve,
            /// End of the interval that the easing curve slows down
            #[arg(long, value_enum, default_value_t = Direction::In)]
            ease_direction: Direction,
            /// Number of interpolation steps
            #[arg(short, long, default_value_t = 10)]
            steps: usize,
            /// Point to follow along the path
            #[arg(long, num_args = 3, allow_negative_numbers = true, default_values_t = [1.0, 0.0, 0.0])]
            point: Vec<f64>,
        },
        /// Compute the common point of three planes `a·x + b·y + c·z = d`
        IntersectPlanes {
            /// Coefficients `a b c d` of the first plane
            #[arg(long, num_args = 4, allow_negative_numbers = true, required = true)]
            first: Vec<f64>,
            /// Coefficients `a b c d` of the second plane
            #[arg(long, num_args = 4, allow_negative_numbers = true, required = true)]
            second: Vec<f64>,
            /// Coefficients `a b c d` of the third plane
            #[arg(long, num_args = 4, allow_negative_numbers = true, required = true)]
            third: Vec<f64>,
        },
    }

    #[derive(Debug, clap::Args)]
    struct Motion {
        /// Rotation axis
        #[arg(long, num_args = 3, allow_negative_numbers = true, required = true)]
        axis: Vec<f64>,
        /// Rotation angle
        #[arg(long, allow_negative_numbers = true)]
        angle: f64,
        /// Translation applied after the rotation
        #[arg(long, num_args = 3, allow_negative_numbers = true, default_values_t = [0.0, 0.0, 0.0])]
        translation: Vec<f64>,
    }

    #[derive(Clone, Copy, Debug, ValueEnum)]
    enum Policy {
        Sclerp,
        Seplerp,
        Lielerp,
        Kenlerp,
    }

    fn vector(values: &[f64]) -> Result<Vec3<f64>> {
        match *values {
            [x, y, z] => Ok(Vec3::new(x, y, z)),
            _ => bail!("Expected 3 components, got {}", values.len()),
        }
    }

    fn motor(axis: &[f64], angle: f64, translation: &[f64], degrees: bool) -> Result<Motor3<f64>> {
        let axis = vector(axis)?;
        let angle = if degrees { degrees_to_radians(angle) } else { angle };
        if is_square_approx_zero(axis.length_squared()) {
            bail!("Rotation axis must be nonzero");
        }
        Ok(Motor3::from_axis_angle_translation(
            axis.normalized(),
            angle,
            vector(translation)?,
        ))
    }

    fn plane(coefficients: &[f64]) -> Result<Plane3<f64>> {
        match *coefficients {
            [a, b, c, d] => Ok(Plane3::plane(Vec3::new(a, b, c), d)),
            _ => bail!("Expected 4 plane coefficients, got {}", coefficients.len()),
        }
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();
        log::debug!("Parsed command: {:?}", cli.command);

        match cli.command {
            Command::TransformPoint { motion, point } => {
                let motor = motor(&motion.axis, motion.angle, &motion.translation, cli.degrees)?;
                let transformed = motor.transform_point(&vector(&point)?);
                println!("{} {} {}", transformed.x, transformed.y, transformed.z);
            }
            Command::Interpolate {
                from_axis,
                from_angle,
                from_translation,
                to_axis,
                to_angle,
                to_translation,
                policy,
                beta,
                ease,
                ease_direction,
                steps,
                point,
            } => {
                if steps == 0 {
                    bail!("Number of steps must be positive");
                }
                let start = motor(&from_axis, from_angle, &from_translation, cli.degrees)?;
                let end = motor(&to_axis, to_angle, &to_translation, cli.degrees)?;
                let point = vector(&point)?;
                let easing = Easing::new(ease, ease_direction);

                for step in 0..=steps {
                    let t = step as f64 / steps as f64;
                    let interpolated = match policy {
                        Policy::Sclerp => eased(sclerp, &start, &end, t, easing),
                        Policy::Seplerp => eased(seplerp, &start, &end, t, easing),
                        Policy::Lielerp => eased(lielerp, &start, &end, t, easing),
                        Policy::Kenlerp => eased(|a, b, t| kenlerp(a, b, t, beta), &start, &end, t, easing),
                    };
                    let moved = interpolated.transform_point(&point);
                    println!(
                        "t = {t:.3}: motor = {:?}, point = ({}, {}, {})",
                        interpolated.to_array(),
                        moved.x,
                        moved.y,
                        moved.z
                    );
                }
            }
            Command::IntersectPlanes {
                first,
                second,
                third,
            } => {
                let point = meet3(&plane(&first)?, &plane(&second)?, &plane(&third)?);
                if point.is_approx_zero() {
                    bail!("The planes do not meet in a single point");
                }
                let v = point.as_vector();
                if point.is_vanishing() {
                    println!("Ideal point in direction ({}, {}, {})", v.x, v.y, v.z);
                } else {
                    println!("{} {} {}", v.x, v.y, v.z);
                }
            }
        }
        Ok(())
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
