use std::fs;
use std::path::Path;

use nalgebra::Vector2;

use crate::error::{Error, Result};
use crate::integrator::step_count;
use crate::orrery::{BodyInfo, Orrery};

/// Loads a body catalog from a whitespace-separated table.
///
/// The first line is a header and is skipped, as are blank lines and lines
/// starting with `#`. Each row is `name x y vx vy mass radius period_days`.
/// The first row is the star, which must be at rest at the origin.
pub fn read_file(filename: impl AsRef<Path>) -> Result<Orrery> {
    parse_catalog(&fs::read_to_string(filename)?)
}

pub fn parse_catalog(contents: &str) -> Result<Orrery> {
    let mut orrery: Option<Orrery> = None;

    // Line numbers are 1-based, and we skip the header
    for (line_no, line) in contents.lines().enumerate().skip(1) {
        let line_no = line_no + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let catalog_error = |reason: String| Error::Catalog {
            line: line_no,
            reason,
        };
        let mut fields = line.split_ascii_whitespace();

        macro_rules! next_string {
            ($what:expr) => {
                fields
                    .next()
                    .ok_or_else(|| catalog_error(format!("missing {}", $what)))?
            };
        }

        macro_rules! next_f64 {
            ($what:expr) => {{
                let field = next_string!($what);
                field
                    .parse::<f64>()
                    .map_err(|e| catalog_error(format!("bad {} {:?}: {}", $what, field, e)))?
            }};
        }

        let name = next_string!("name");
        let (x, y, vx, vy) = (
            next_f64!("x"),
            next_f64!("y"),
            next_f64!("vx"),
            next_f64!("vy"),
        );
        let mass = next_f64!("mass");
        let radius = next_f64!("radius");
        let period_days = {
            let field = next_string!("period_days");
            let days = field
                .parse::<i64>()
                .map_err(|e| catalog_error(format!("bad period_days {:?}: {}", field, e)))?;
            step_count(days).map_err(|e| catalog_error(e.to_string()))?
        };

        if let Some(extra) = fields.next() {
            return Err(catalog_error(format!("unexpected field {:?}", extra)));
        }

        let info =
            BodyInfo::new(name, mass, radius, period_days).map_err(|e| catalog_error(e.to_string()))?;
        let position = Vector2::new(x, y);
        let velocity = Vector2::new(vx, vy);

        match orrery.as_mut() {
            None => {
                if position != Vector2::zeros() || velocity != Vector2::zeros() {
                    return Err(catalog_error(format!(
                        "central body {} must be at rest at the origin",
                        name
                    )));
                }
                orrery = Some(Orrery::new(info));
            }
            Some(orrery) => {
                orrery.add_body(info, position, velocity);
            }
        }
    }

    orrery.ok_or(Error::Catalog {
        line: 0,
        reason: "catalog has no bodies".to_owned(),
    })
}
