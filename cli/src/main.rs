use clap::Parser;
use colored::Colorize as _;
use zk_withdraw_cli::{
    args::{normalize_flags, Args},
    cli::withdrawal::run,
    config::WithdrawConfig,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();
    let args = Args::parse_from(normalize_flags(std::env::args()));
    let config = WithdrawConfig::from(args);
    log::debug!("{config:?}");

    let mut stdout = std::io::stdout();
    if let Err(e) = run(&config, &mut stdout).await {
        eprintln!("{}", e.to_string().red());
        std::process::exit(1);
    }
    Ok(())
}
