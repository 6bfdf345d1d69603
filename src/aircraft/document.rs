//! Aircraft documents: the specification and the ordered component list,
//! stored as a TOML parameter file.

use std::{fs, path::Path, str::FromStr};

use anyhow::{Context, Result, anyhow};
use log::info;
use uom::si::mass::kilogram;

use super::{
    aircraft::Aircraft,
    spec::{AircraftSpecification, triple},
};
use crate::{
    mass::{ComponentKind, MassComponent},
    math::{Dimensions, Vector3},
    parameters::{ParameterMap, ParameterValue, parse_string},
    units::kilograms,
};

pub fn load(path: &Path) -> Result<Aircraft> {
    let toml = fs::read_to_string(path)
        .with_context(|| format!("Cannot read aircraft document {}", path.display()))?;
    let aircraft = from_toml_str(&toml)?;

    info!(
        "Loaded {} ({:?}, {} components)",
        path.display(),
        aircraft.spec().category,
        aircraft.components().len()
    );

    Ok(aircraft)
}

pub fn save(aircraft: &Aircraft, path: &Path) -> Result<()> {
    fs::write(path, to_toml_string(aircraft)?)
        .with_context(|| format!("Cannot write aircraft document {}", path.display()))?;

    info!("Saved {}", path.display());
    Ok(())
}

pub fn from_toml_str(toml: &str) -> Result<Aircraft> {
    from_params(&parse_string(toml.to_string())?)
}

pub fn to_toml_string(aircraft: &Aircraft) -> Result<String> {
    Ok(to_params(aircraft)?.to_toml_string()?)
}

pub fn from_params(params: &ParameterMap) -> Result<Aircraft> {
    let spec = AircraftSpecification::from_params(params)?;

    let components = params
        .get_map_or_empty("components")?
        .iter()
        .map(|(_, entry)| component_from_params(entry.as_map()?))
        .collect::<Result<Vec<_>>>()?;

    Ok(Aircraft::from_parts(spec, components))
}

pub fn to_params(aircraft: &Aircraft) -> Result<ParameterMap> {
    let mut params = ParameterMap::default();
    aircraft.spec().write_params(&mut params)?;

    for (i, c) in aircraft.components().iter().enumerate() {
        // Zero padded so that key order is list order
        let prefix = format!("components.{i:04}");

        for (key, value) in [
            ("kind", ParameterValue::string(c.kind().as_ref())),
            ("name", ParameterValue::string(c.name())),
            ("mass_kg", ParameterValue::float(c.mass().get::<kilogram>())),
            ("position_m", ParameterValue::float_arr(&c.position().as_meters())),
            ("dimensions_m", ParameterValue::float_arr(&c.dimensions().as_meters())),
        ] {
            params.insert(&format!("{prefix}.{key}"), value)?;
        }
    }

    Ok(params)
}

fn component_from_params(params: &ParameterMap) -> Result<MassComponent> {
    let kind = params.get_param("kind")?.value_string()?;
    let kind = ComponentKind::from_str(&kind)
        .map_err(|_| anyhow!("Unknown component kind '{kind}' at '{}'", params.path()))?;

    let name = params.get_string_or("name", kind.default_name())?;
    let mass = kilograms(params.get_float_or("mass_kg", 0.0)?);
    let [x, y, z] = triple(params, "position_m")?;
    let [l, w, h] = triple(params, "dimensions_m")?;

    Ok(MassComponent::new(kind)
        .with_name(name)
        .with_mass(mass)
        .with_position(Vector3::from_meters(x, y, z))
        .with_dimensions(Dimensions::from_meters(l, w, h)))
}
