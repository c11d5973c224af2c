use std::time::Instant;

use mazespawn::{Generator, build};

/// Times every generator on the largest square maze that fits in a `u8` side.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn,profile=info")),
        )
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(10);
    let side = u8::MAX as u16;

    for generator in Generator::ALL {
        let started = Instant::now();
        for seed in 0..num_iters {
            build(generator, side, side, Some(seed))?;
        }
        let elapsed = started.elapsed();
        tracing::info!(
            %generator,
            num_iters,
            total_ms = elapsed.as_millis() as u64,
            per_maze_us = (elapsed.as_micros() / num_iters.max(1) as u128) as u64,
            "profiled"
        );
    }
    Ok(())
}
