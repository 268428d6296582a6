//! Instance loading: JSON coordinates/matrices and CSV coordinates.

use anyhow::{anyhow, bail, Context, Result};
use polars::prelude::*;
use salesman::api::CostMatrix;
use serde::Deserialize;
use std::path::Path;

/// Accepted JSON shapes. A bare list of lists is coordinates unless `--matrix`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum JsonInput {
    Coords { coords: Vec<Vec<f64>> },
    Matrix { matrix: Vec<Vec<f64>> },
    Bare(Vec<Vec<f64>>),
}

/// A loaded instance; `coords` is kept when the matrix was derived from points.
#[derive(Debug)]
pub struct Instance {
    pub coords: Option<Vec<Vec<f64>>>,
    pub cost: CostMatrix,
}

impl Instance {
    pub fn from_coords(coords: Vec<Vec<f64>>) -> Result<Self> {
        let cost = CostMatrix::from_coords(&coords)?;
        Ok(Self {
            coords: Some(coords),
            cost,
        })
    }

    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let cost = CostMatrix::from_rows(&rows)?;
        Ok(Self { coords: None, cost })
    }

    pub fn len(&self) -> usize {
        self.cost.len()
    }

    /// Coordinate dimensionality, if the instance came from points.
    pub fn dimension(&self) -> Option<usize> {
        self.coords.as_ref().and_then(|c| c.first()).map(|p| p.len())
    }
}

/// Raw rows plus whether they form a matrix; callers check bounds before `build`.
pub fn read_rows(path: &Path, as_matrix: bool) -> Result<(Vec<Vec<f64>>, bool)> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => {
            if as_matrix {
                bail!("CSV input holds coordinates only; pass a JSON file with --matrix");
            }
            Ok((read_csv_coords(path)?, false))
        }
        Some("json") => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let parsed: JsonInput = serde_json::from_str(&raw)
                .with_context(|| format!("parsing {}", path.display()))?;
            Ok(match parsed {
                JsonInput::Coords { coords } => (coords, false),
                JsonInput::Matrix { matrix } => (matrix, true),
                JsonInput::Bare(rows) => (rows, as_matrix),
            })
        }
        _ => Err(anyhow!(
            "unsupported input {}: expected .json or .csv",
            path.display()
        )),
    }
}

pub fn build(rows: Vec<Vec<f64>>, is_matrix: bool) -> Result<Instance> {
    if is_matrix {
        Instance::from_rows(rows)
    } else {
        Instance::from_coords(rows)
    }
}

/// One row per location; every column is a coordinate.
fn read_csv_coords(path: &Path) -> Result<Vec<Vec<f64>>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .select([all().cast(DataType::Float64)])
        .collect()?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_csv_shape");
    let mut coords = vec![Vec::with_capacity(df.width()); df.height()];
    for col in df.get_columns() {
        let ca = col.f64()?;
        for (i, v) in ca.into_iter().enumerate() {
            let v = v.ok_or_else(|| anyhow!("missing value in column {} row {i}", col.name()))?;
            coords[i].push(v);
        }
    }
    Ok(coords)
}
