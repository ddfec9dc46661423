use anyhow::Result;
use log::LevelFilter;
use simple_logger::SimpleLogger;

pub fn init() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()?;

    Ok(())
}
