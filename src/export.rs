//! CSV export of model output

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::projection::ModelOutput;

/// Write the year-joined balance sheet and cash flow rows as CSV
pub fn write_projection_csv<W: Write>(output: &ModelOutput, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in output.combined_rows() {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the projection CSV to `path`, replacing any existing file
pub fn save_projection_csv<P: AsRef<Path>>(output: &ModelOutput, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_projection_csv(output, file)?;
    info!("Projection written to {}", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statements::{BalanceSheetRow, CashFlowRow};

    #[test]
    fn test_csv_layout() {
        let output = ModelOutput {
            balance_sheet: vec![
                BalanceSheetRow::new(2025, 1_000.0, 400.0),
                BalanceSheetRow::new(2026, 1_100.0, 300.0),
            ],
            cash_flow: vec![CashFlowRow::new(2025, 50.0, 20.0), CashFlowRow::new(2026, 55.0, 60.0)],
            events: Vec::new(),
        };

        let mut buffer = Vec::new();
        write_projection_csv(&output, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "year,total_assets,total_liabilities,net_worth,inflow,outflow,net_flow,net_worth_real,net_flow_real"
        );
        assert!(lines[1].starts_with("2025,1000.0,400.0,600.0,50.0,20.0,30.0"));
        assert!(lines[2].starts_with("2026,"));
        assert!(lines[2].contains(",-5.0"));
    }
}
