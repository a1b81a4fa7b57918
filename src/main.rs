use clap::Parser;
use env_logger::Env;
use fibgen::{
    fib, input, telemetry::TelemetryCollector, GenerateArgs, REJECTION_MESSAGE, SEQUENCE_HEADER,
};
use log::error;
use log::info;
use std::fs;
use std::io::{self, BufRead, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    args: GenerateArgs,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run(&cli.args, &mut stdin.lock(), &mut stdout.lock()) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run<R: BufRead, W: Write>(
    args: &GenerateArgs,
    source: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    let telemetry = TelemetryCollector::new(args.enable_telemetry);

    input::write_prompt(out)?;

    let input_start = Instant::now();
    let n = input::read_term_count(source)?;
    telemetry.record_input(input_start.elapsed());
    telemetry.record_terms_requested(n);

    if n <= 0 {
        writeln!(out, "{}", REJECTION_MESSAGE)?;
        finalize_telemetry(telemetry, args)?;
        return Ok(());
    }

    let generation_start = Instant::now();
    let terms = fib::sequence(n);
    telemetry.record_generation(generation_start.elapsed());

    writeln!(out, "{}", SEQUENCE_HEADER)?;
    fib::write_sequence(out, &terms)?;

    finalize_telemetry(telemetry, args)
}

fn finalize_telemetry(telemetry: TelemetryCollector, args: &GenerateArgs) -> anyhow::Result<()> {
    if let Some(telemetry_data) = telemetry.finalize() {
        fs::create_dir_all(&args.telemetry_output_path)?;
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let telemetry_file = format!(
            "{}/fibgen_telemetry_{}.json",
            args.telemetry_output_path, timestamp
        );
        fs::write(
            &telemetry_file,
            serde_json::to_string_pretty(&telemetry_data)?,
        )?;
        info!("Telemetry data saved to: {}", telemetry_file);
    }
    Ok(())
}
