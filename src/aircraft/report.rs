use std::fmt::{self, Write};

use super::aircraft::{ComponentEstimate, MassProperties};
use crate::units::UnitSystem;

/// Fixed-format text block of the mass properties, metric then imperial.
pub fn mass_report(properties: &MassProperties) -> String {
    let mut out = String::new();

    for units in [UnitSystem::Metric, UnitSystem::Imperial] {
        // Writing into a String cannot fail
        let _ = write_section(&mut out, properties, units);
    }

    out
}

fn write_section(out: &mut String, p: &MassProperties, units: UnitSystem) -> fmt::Result {
    let title = match units {
        UnitSystem::Metric => "Metric",
        UnitSystem::Imperial => "Imperial",
    };
    let c = p.center_of_mass.components().map(|l| units.length(l));

    writeln!(out, "{title}")?;
    writeln!(out, "  Mass: {:.1} {}", units.mass(p.mass), units.mass_label())?;
    writeln!(
        out,
        "  Center of mass [{}]: x {:>10.2}  y {:>10.2}  z {:>10.2}",
        units.length_label(),
        c[0],
        c[1],
        c[2]
    )?;
    writeln!(out, "  Inertia [{}]:", units.inertia_label())?;

    let m = p.inertia.to_matrix(units);
    for r in 0..3 {
        writeln!(
            out,
            "    {:>14.1} {:>14.1} {:>14.1}",
            m[(r, 0)],
            m[(r, 1)],
            m[(r, 2)]
        )?;
    }
    writeln!(out)
}

/// Estimated against assigned mass, one row per component.
pub fn estimates_table(rows: &[ComponentEstimate], units: UnitSystem) -> String {
    let label = units.mass_label();
    let mut out = format!(
        "{:<24} {:>12} {:>12} {:>12} {:>12}\n",
        "Component",
        format!("stat [{label}]"),
        format!("regr [{label}]"),
        format!("est [{label}]"),
        format!("actual [{label}]"),
    );

    for row in rows {
        let _ = writeln!(
            out,
            "{:<24} {:>12.1} {:>12.1} {:>12.1} {:>12.1}",
            row.name,
            units.mass(row.estimate.statistical),
            units.mass(row.estimate.analytical),
            units.mass(row.estimate.mass()),
            units.mass(row.actual)
        );
    }

    out
}
