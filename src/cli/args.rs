use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "discount-pricing")]
#[command(about = "Prices the sample products with volume discounts and checks the total")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
