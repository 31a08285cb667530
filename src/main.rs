#![recursion_limit = "256"] // ✅ 크레이트 전체에 적용

mod rbm;
mod sae;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("recsys_models=info".parse()?),
        )
        .init();

    rbm::basic1::example()?;
    sae::basic1::example();
    Ok(())
}
