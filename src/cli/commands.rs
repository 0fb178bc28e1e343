use std::io::Write;

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::{
    models::product::Product,
    services::pricing_service::accumulate_total,
    utils::{
        assertion::check_equal,
        formatting::{format_expected_line, print_price},
    },
};

/// One product together with the discounted price it should come out at.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioLine {
    pub product: Product,
    pub expected_price: f64,
}

/// A set of products plus independently worked-out expectations.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub lines: Vec<ScenarioLine>,
    pub expected_total: f64,
    /// Source text of the expected total, shown if the check fails.
    pub expected_label: String,
}

impl Scenario {
    /// Two products: one over the bulk threshold, one under it.
    pub fn sample() -> Self {
        let expected_first = (500 * 2) as f64 * 0.95;
        let expected_second = (100 * 5) as f64 * 0.99;

        Self {
            lines: vec![
                ScenarioLine {
                    product: Product::new(500.0, 2),
                    expected_price: expected_first,
                },
                ScenarioLine {
                    product: Product::new(5.0, 100),
                    expected_price: expected_second,
                },
            ],
            expected_total: expected_first + expected_second,
            expected_label: "((500 * 2) * 0.95) + ((100 * 5) * 0.99)".to_string(),
        }
    }

    pub fn products(&self) -> Vec<Product> {
        self.lines.iter().map(|line| line.product).collect()
    }
}

pub struct CliApp {
    scenario: Scenario,
}

impl CliApp {
    pub fn new(scenario: Scenario) -> Self {
        Self { scenario }
    }

    /// Print each product's expected and computed price, then check the
    /// batch total against the expected total.
    ///
    /// On a mismatch the diagnostic is written to `out` and returned as the
    /// error; `OK!!!` is only written when the totals agree.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        info!("Pricing {} products", self.scenario.lines.len());

        for (index, line) in self.scenario.lines.iter().enumerate() {
            writeln!(out, "{}", format_expected_line(index, line.expected_price))
                .context("Failed to write expected price")?;
            print_price(out, &line.product).context("Failed to write price")?;
        }

        let products = self.scenario.products();
        let mut total_price = 0.0;
        accumulate_total(Some(&products), &mut total_price)?;

        if let Err(mismatch) = check_equal(
            line!(),
            &self.scenario.expected_label,
            "total_price",
            &self.scenario.expected_total,
            &total_price,
        ) {
            error!("Batch total check failed: {}", mismatch);
            writeln!(out, "{}", mismatch).context("Failed to write diagnostic")?;
            out.flush().context("Failed to flush output")?;
            return Err(mismatch.into());
        }

        writeln!(out).context("Failed to write output")?;
        writeln!(out, "OK!!!").context("Failed to write output")?;
        out.flush().context("Failed to flush output")?;

        info!("Batch total {} matches expectation", total_price);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_scenario_expectations() {
        let scenario = Scenario::sample();

        assert_eq!(scenario.lines.len(), 2);
        assert_eq!(scenario.lines[0].expected_price, 950.0);
        assert_eq!(scenario.lines[1].expected_price, 495.0);
        assert_eq!(scenario.expected_total, 1445.0);
    }

    #[test]
    fn test_products_keep_scenario_order() {
        let products = Scenario::sample().products();
        assert_eq!(products, vec![Product::new(500.0, 2), Product::new(5.0, 100)]);
    }
}
