// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or(None);
    paths::init_cli_overrides(config_dir);

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
    };

    app::run(flags)
}
