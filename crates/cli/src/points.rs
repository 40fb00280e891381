//! Auxiliary point data: two numeric columns, one disk point per row.
//!
//! CSV files have no header; Parquet files are read by column position.
//! Rows whose coordinates are missing or non-numeric are skipped with a
//! warning rather than failing the whole load.

use std::path::Path;

use anyhow::{bail, Context, Result};
use hypertile::Complex;
use polars::prelude::*;

pub fn load_points(path: &Path) -> Result<Vec<Complex>> {
    let lf = match path.extension().and_then(|e| e.to_str()) {
        Some("parquet") => LazyFrame::scan_parquet(path, ScanArgsParquet::default())
            .with_context(|| format!("scanning {}", path.display()))?,
        _ => LazyCsvReader::new(path)
            .with_has_header(false)
            .with_infer_schema_length(Some(100))
            .finish()
            .with_context(|| format!("reading {}", path.display()))?,
    };
    let df = lf
        .collect()
        .with_context(|| format!("loading points from {}", path.display()))?;
    let points = points_from_frame(&df)?;
    tracing::info!(path = %path.display(), rows = df.height(), points = points.len(), "points loaded");
    Ok(points)
}

fn points_from_frame(df: &DataFrame) -> Result<Vec<Complex>> {
    let cols = df.get_columns();
    if cols.len() < 2 {
        bail!("expected two numeric columns, found {}", cols.len());
    }
    let xs = cols[0].cast(&DataType::Float64)?;
    let ys = cols[1].cast(&DataType::Float64)?;
    let mut skipped = 0usize;
    let points: Vec<Complex> = xs
        .f64()?
        .into_iter()
        .zip(ys.f64()?.into_iter())
        .filter_map(|row| match row {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some(Complex::new(x, y)),
            _ => {
                skipped += 1;
                None
            }
        })
        .collect();
    if skipped > 0 {
        tracing::warn!(skipped, "malformed point rows skipped");
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn csv_without_header_loads_all_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("points.csv");
        fs::write(&path, "0.1,0.2\n-0.5,0.25\n0.0,-0.75\n").unwrap();
        let pts = load_points(&path).unwrap();
        assert_eq!(
            pts,
            vec![
                Complex::new(0.1, 0.2),
                Complex::new(-0.5, 0.25),
                Complex::new(0.0, -0.75)
            ]
        );
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("points.csv");
        fs::write(&path, "0.1,0.2\nabc,0.3\n0.4,\n0.5,0.6\n").unwrap();
        let pts = load_points(&path).unwrap();
        assert_eq!(pts, vec![Complex::new(0.1, 0.2), Complex::new(0.5, 0.6)]);
    }

    #[test]
    fn single_column_is_rejected() {
        let df = df!("x" => [0.1f64, 0.2]).unwrap();
        assert!(points_from_frame(&df).is_err());
    }
}
