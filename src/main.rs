use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();

    let cfg = artloom::config::Config::parse();
    if cfg.list_palettes {
        for def in artloom::palette::PALETTES {
            println!("{}", def.key);
        }
        return Ok(());
    }

    artloom::app::run(cfg)
}
