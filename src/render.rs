use std::path::Path;

use plotters::prelude::*;

use crate::error::{Error, Result};
use crate::trajectory::Trajectory;

/// Astronomical unit, in meters. Plots are drawn in AU.
pub const AU: f64 = 1.495_978_707e11;

fn render_error(e: impl std::fmt::Display) -> Error {
    Error::Render(e.to_string())
}

/// Half-width of a square window, centered on the star, that fits every
/// trajectory with a little margin.
pub fn plot_extent<'a>(trajectories: impl IntoIterator<Item = &'a Trajectory>) -> f64 {
    let farthest = trajectories
        .into_iter()
        .flat_map(|t| t.points())
        .map(|(x, y)| x.abs().max(y.abs()))
        .fold(0.0, f64::max);

    if farthest > 0.0 {
        1.1 * farthest / AU
    } else {
        1.0
    }
}

/// Draws each named trajectory as a line around a dot for the star, and
/// writes the picture as a PNG.
pub fn draw_orbits(
    filename: impl AsRef<Path>,
    orbits: &[(&str, &Trajectory)],
    size: (u32, u32),
) -> Result<()> {
    let extent = plot_extent(orbits.iter().map(|(_, t)| *t)) as f32;

    let root = BitMapBackend::new(filename.as_ref(), size).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Planetary orbits (AU)", ("sans-serif", 20))
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(-extent..extent, -extent..extent)
        .map_err(render_error)?;

    chart.configure_mesh().draw().map_err(render_error)?;

    chart
        .draw_series(std::iter::once(Circle::new((0.0f32, 0.0f32), 4, YELLOW.filled())))
        .map_err(render_error)?;

    for (i, (name, trajectory)) in orbits.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        chart
            .draw_series(LineSeries::new(
                trajectory
                    .points()
                    .into_iter()
                    .map(|(x, y)| ((x / AU) as f32, (y / AU) as f32)),
                &color,
            ))
            .map_err(render_error)?
            .label(*name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(render_error)?;

    root.present().map_err(render_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::Vector2;

    use super::*;
    use crate::astro::CartesianState;

    fn line(points: &[(f64, f64)]) -> Trajectory {
        let states = points
            .iter()
            .map(|&(x, y)| CartesianState::new(Vector2::new(x, y), Vector2::zeros()))
            .collect();
        Trajectory::new(1.0, states)
    }

    #[test]
    fn test_extent() {
        let a = line(&[(AU, 0.0), (0.0, -2.0 * AU)]);
        let b = line(&[(-0.5 * AU, 0.5 * AU)]);
        assert_relative_eq!(plot_extent(vec![&a, &b]), 2.2, max_relative = 1e-12);
    }

    #[test]
    fn test_draws_png() {
        let path = std::env::temp_dir().join("planetary_motion_test_orbits.png");
        let _ = std::fs::remove_file(&path);

        let square = line(&[(AU, 0.0), (0.0, AU), (-AU, 0.0), (0.0, -AU)]);
        let far = line(&[(3.0 * AU, 0.0), (0.0, 3.0 * AU)]);
        draw_orbits(&path, &[("Square", &square), ("Far", &far)], (200, 200)).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_extent_of_nothing() {
        assert_relative_eq!(plot_extent(Vec::<&Trajectory>::new()), 1.0);
        assert_relative_eq!(plot_extent(vec![&line(&[])]), 1.0);
    }
}
