use anyhow::{Context, Result};
use clap::Parser;
use std::time::Instant;

mod collect;
mod encode;
mod error;
mod palette;
mod types;

use encode::EncodeOptions;
use types::encode_args::EncodeArgs;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let args = EncodeArgs::parse();
    let start_time = Instant::now();

    run(&args)?;

    log::info!("Completed in {:.2?}", start_time.elapsed());
    Ok(())
}

fn run(args: &EncodeArgs) -> Result<()> {
    let (inputs, output) = args.split_paths()?;

    let files = collect::collect_all(inputs).context("Failed to collect input images")?;
    log::info!("Encoding {} image(s) into {:?}", files.len(), output);

    let options = EncodeOptions {
        delay: args.delay,
        ..EncodeOptions::default()
    };
    encode::encode_gif(&files, output, &options)
        .with_context(|| format!("Failed to build GIF {output:?}"))?;
    Ok(())
}
