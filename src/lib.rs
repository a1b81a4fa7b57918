use clap::Args;

pub mod fib;
pub mod input;
pub mod telemetry;

pub const PROMPT: &str = "Enter the number of Fibonacci terms to generate: ";
pub const SEQUENCE_HEADER: &str = "Fibonacci sequence:";
pub const REJECTION_MESSAGE: &str = "The number of terms must be greater than zero.";

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[clap(long, help = "Record timing data for this run")]
    pub enable_telemetry: bool,
    #[clap(
        long,
        default_value = "telemetry_data",
        help = "Directory where telemetry reports are written"
    )]
    pub telemetry_output_path: String,
}
