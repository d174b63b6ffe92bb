// SPDX-License-Identifier: MPL-2.0
use iced_keepsake::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        content_file: args.opt_value_from_str("--content").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
        media_file: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}
