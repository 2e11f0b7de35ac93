//! Render a board to stdout as SVG.
//!
//! ```text
//! cargo run --example render_board -- "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R" marks=e5 arrows=f3e5,b8c6k
//! ```
//!
//! Set `RUST_LOG=fenboard=debug` and build with `--features tracing` to see
//! layout summaries and skipped annotations on stderr.

use fenboard::RenderRequest;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut fen = None;
    let mut params = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.split_once('=') {
            Some((key, value)) => params.push((key.to_string(), value.to_string())),
            None => fen = Some(arg),
        }
    }

    let request = RenderRequest::from_params(fen.as_deref(), params)?;
    let output = request.render()?;
    for skipped in &output.skipped {
        eprintln!("{:?}", miette::Report::new(skipped.clone()));
    }
    println!("{}", output.document.to_svg()?);
    Ok(())
}
