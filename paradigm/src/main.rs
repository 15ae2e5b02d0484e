mod cli;
mod logging;

use anyhow::{Context, Result};
use cli::{OutputFormat, OPT};
use paradigm::{FormattingConfig, FormattingParser, LegacyAdapter, Player};
use std::io::{self, Read};
use tracing::{debug, info};

fn main() -> Result<()> {
    let _guard = logging::init();

    let config = match &OPT.config {
        Some(path) => FormattingConfig::load(path)?,
        None => FormattingConfig::default(),
    };
    debug!("Using config {config:?}");

    let mut parser = FormattingParser::with_config(config);
    if OPT.legacy_client {
        parser = parser.with_adapter(LegacyAdapter);
    }
    info!(
        "Formatting for {} clients with {} tag names",
        parser.adapter().name(),
        parser.registry().names().count()
    );

    let markup = match &OPT.markup {
        Some(markup) => markup.clone(),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Couldn't read markup from stdin")?;
            input.trim_end_matches(['\r', '\n']).to_owned()
        }
    };

    let player = OPT.player.as_deref().map(|name| {
        let player = Player::offline(name);
        match &OPT.world {
            Some(world) => player.in_world(world.as_str()),
            None => player,
        }
    });

    let chat = parser.parse(&markup, player.as_ref());

    let output = match OPT.format {
        OutputFormat::Json => chat.to_json().context("Couldn't serialize the output")?,
        OutputFormat::Pretty => chat
            .to_json_pretty()
            .context("Couldn't serialize the output")?,
        OutputFormat::Legacy => chat.to_legacy_string(),
        OutputFormat::Plain => chat.plain_text(),
    };
    println!("{output}");

    Ok(())
}
