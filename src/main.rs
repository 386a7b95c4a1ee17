use derma_lens::app::{self, Flags};
use pico_args;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let verbose = args.contains("--verbose");
    let preview = args.contains("--preview");
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap();
    let history_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    let filter = if verbose {
        EnvFilter::new("derma_lens=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    app::run(Flags {
        history_path,
        preview,
        config_dir,
    })
}
