use crate::{
    compare::{Comparison, compare},
    config::DemoConfig,
    error::AverageError,
    method::MovingAverage,
};
use derive_more::Constructor;
use prettytable::{Cell, Row, Table};
use std::io::Write;
use tracing::info;

/// Renders sequences of averages with a fixed number of fractional digits into an injected
/// output sink.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Constructor)]
pub struct Report {
    pub precision: usize,
}

impl Default for Report {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

impl Report {
    /// Format `values` as `[ v1 v2 ... ]`.
    pub fn format_sequence(&self, values: &[f64]) -> String {
        let mut output = String::from("[ ");
        for value in values {
            output.push_str(&format!("{:.*} ", self.precision, value));
        }
        output.push(']');
        output
    }

    pub fn write_section<W>(
        &self,
        sink: &mut W,
        title: &str,
        values: &[f64],
    ) -> Result<(), AverageError>
    where
        W: Write,
    {
        writeln!(sink, "{title}")?;
        writeln!(sink, "{}", self.format_sequence(values))?;
        writeln!(sink)?;
        Ok(())
    }

    /// Write the full demonstration transcript: the input, every configured method's result,
    /// and whether the methods agree.
    pub fn write_demo<W>(
        &self,
        sink: &mut W,
        config: &DemoConfig,
    ) -> Result<Comparison, AverageError>
    where
        W: Write,
    {
        writeln!(
            sink,
            "--- Moving Average Calculation (Window Size = {}) ---",
            config.window
        )?;
        writeln!(sink)?;
        self.write_section(sink, "Original Data:", &config.data)?;

        // Each method runs once, inside compare
        let comparison = compare(&config.data, config.window, config.tolerance);

        for &method in &config.methods {
            writeln!(sink, "Calculating with {} method...", method.label())?;
            self.write_section(
                sink,
                &format!("{} Result:", method.name()),
                comparison.output(method),
            )?;
        }

        match comparison.is_equivalent() {
            true => writeln!(
                sink,
                "Comparison complete. Both methods yield the same result."
            )?,
            false => writeln!(
                sink,
                "Comparison complete. Methods diverge at {} position(s).",
                comparison.mismatches.len()
            )?,
        }

        info!(
            window = %config.window,
            len = config.data.len(),
            equivalent = comparison.is_equivalent(),
            "moving average demo complete"
        );
        Ok(comparison)
    }

    /// Side by side table of both methods' outputs.
    pub fn summary_table(&self, comparison: &Comparison) -> Table {
        let mut table = Table::new();
        table.set_format(*prettytable::format::consts::FORMAT_BOX_CHARS);

        let mut title_cell =
            Cell::new(&format!("Moving Average (Window Size = {})", comparison.window))
                .style_spec("bcB");
        title_cell.set_hspan(4);
        table.add_row(Row::new(vec![title_cell]));

        table.add_row(Row::new(vec![
            Cell::new("Window").style_spec("bcB"),
            Cell::new("Naive").style_spec("bcB"),
            Cell::new("Optimized").style_spec("bcB"),
            Cell::new("Deviation").style_spec("bcB"),
        ]));

        for (index, (naive, optimized)) in comparison
            .naive
            .iter()
            .zip(&comparison.optimized)
            .enumerate()
        {
            let deviation = match comparison.mismatches.contains(&index) {
                true => "MISMATCH".to_string(),
                false if naive.is_finite() => format!("{:.3e}", (naive - optimized).abs()),
                false => "N/A".to_string(),
            };

            table.add_row(Row::new(vec![
                Cell::new(&index.to_string()),
                Cell::new(&format!("{:.*}", self.precision, naive)),
                Cell::new(&format!("{:.*}", self.precision, optimized)),
                Cell::new(&deviation),
            ]));
        }

        table
    }
}
