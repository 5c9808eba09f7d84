use anyhow::Context;
use ray_tracing_lib::{config::RenderConfig, demo, renderer::Renderer, sink::ImageSink};

const DEFAULT_OUTPUT: &str = "render.png";

fn run() -> anyhow::Result<()> {
    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_owned());

    let config = RenderConfig::default();
    let renderer = Renderer::new(config).context("invalid render configuration")?;
    let scene = demo::scene();

    let mut sink = ImageSink::with_output(config.screen_width, config.screen_height, &output);
    renderer
        .render(&scene, &mut sink)
        .with_context(|| format!("failed to write {output}"))?;
    Ok(())
}

fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt::init();
    match run() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:?}", e);
            std::process::ExitCode::FAILURE
        }
    }
}
