// SPDX-License-Identifier: MPL-2.0
use langswitch::app::{self, paths, Flags};
use langswitch::language::LanguageOption;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
langswitch

USAGE:
  langswitch [OPTIONS]

OPTIONS:
  -h, --help               Print help information
      --lang <OPTION>      Apply a language at startup:
                           follow-system, english, simplified-chinese, traditional-chinese
      --config-dir <PATH>  Read and write settings.toml in PATH

ENVIRONMENT:
  LANGSWITCH_CONFIG_DIR    Same as --config-dir
  RUST_LOG                 Log filter (default: info)
";

fn init_tracing() {
    // Default to info logs unless the user sets RUST_LOG.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

fn main() -> iced::Result {
    init_tracing();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = match args.opt_value_from_str::<_, LanguageOption>("--lang") {
        Ok(lang) => lang,
        Err(error) => {
            tracing::warn!(%error, "ignoring invalid --lang value");
            None
        }
    };
    let config_dir = match args.opt_value_from_str::<_, String>("--config-dir") {
        Ok(dir) => dir,
        Err(error) => {
            tracing::warn!(%error, "ignoring invalid --config-dir value");
            None
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(config_dir);

    app::run(Flags { lang })
}
