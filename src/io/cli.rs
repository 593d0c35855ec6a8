//! Command-line interface for running a single exact binomial test

use crate::hypothesis::binomial::BinomialTest;
use crate::io::error::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "binomtest")]
#[command(
    author,
    version,
    about = "Compute the p-value of an exact binomial test",
    allow_negative_numbers = true
)]
/// Command-line arguments for the binomial test tool
pub struct Cli {
    /// Number of successes
    #[arg(value_name = "X")]
    pub x: f64,

    /// Number of trials
    #[arg(value_name = "N")]
    pub n: f64,

    /// Success probability under the null hypothesis
    #[arg(value_name = "P")]
    pub p: f64,

    /// Alternative hypothesis: two-sided, less or greater [default: two-sided]
    #[arg(short, long)]
    pub alternative: Option<String>,

    /// Print a summary of the test instead of the bare p-value
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Validate the arguments into a ready-to-run test
    ///
    /// # Errors
    ///
    /// Returns the first validation failure among `x`, `n`, `p` and the alternative
    pub fn build_test(&self) -> Result<BinomialTest> {
        BinomialTest::from_raw(self.x, self.n, self.p, self.alternative.as_deref())
    }

    /// Text written to standard output for a successful run
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments fail validation
    pub fn render(&self) -> Result<String> {
        let test = self.build_test()?;
        if self.verbose {
            Ok(test.report().to_string())
        } else {
            Ok(test.p_value().to_string())
        }
    }

    /// Run the test and print the result
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments fail validation
    // The p-value on stdout is the tool's output
    #[allow(clippy::print_stdout)]
    pub fn run(&self) -> Result<()> {
        let output = self.render()?;
        println!("{output}");
        Ok(())
    }
}
