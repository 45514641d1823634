use crate::reports;
use circlepack::error::{PackError, PackResult};
use circlepack::geometry;
use circlepack::scorer;
use circlepack::snapshot::PlacementSnapshot;
use clap::Args;
use std::path::PathBuf;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    /// Placement JSON written by `search --output`
    #[arg(short, long)]
    pub input: PathBuf,

    /// Re-score inside a square of this size instead of the saved one
    #[arg(long)]
    pub size: Option<f64>,
}

pub fn run(args: EvaluateArgs) -> PackResult<()> {
    let snapshot = PlacementSnapshot::load(&args.input)?;
    let size = args.size.unwrap_or(snapshot.size);
    if !size.is_finite() || size <= 0.0 {
        return Err(PackError::InvalidSize(size));
    }

    let placement = snapshot.placement();
    geometry::check_inside(&placement.centers(), size)?;
    let details = scorer::score_details(&placement.centers(), size);

    if size == snapshot.size && (details.radius - snapshot.radius).abs() > 1e-9 {
        warn!(
            "Saved radius {:.4} differs from the solved radius {:.4}",
            snapshot.radius, details.radius
        );
    }

    reports::print_placement_table(&args.input.display().to_string(), &placement);
    reports::print_score_report("SCORE", &details);

    println!("\nRadius: {:.4}", details.radius);
    println!("Scaled Radius: {:.4}", details.scaled_radius);
    println!("Objective: {:.4}", details.objective);
    Ok(())
}
