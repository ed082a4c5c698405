use sobel_edges::config::{parse_args, CliArgs};
use sobel_edges::{process_file, ChannelRange, Stage};
use std::env;

fn main() {
    env_logger::init();
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "sobel".to_string());
    let cli = match parse_args(&program, args) {
        Ok(cli) => cli,
        Err(usage) => {
            eprintln!("error: {usage}");
            std::process::exit(1);
        }
    };
    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &CliArgs) -> Result<(), String> {
    let report = process_file(&cli.input, &cli.output, Stage::Sobel, ChannelRange::Clamp)
        .map_err(|e| e.to_string())?;
    println!("{}", report.summary());
    Ok(())
}
