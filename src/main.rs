use anyhow::Result;
use log::{error, warn};
use std::io;

use workspaces::{
    ui::console::Console,
    utils::{
        platform::SystemPlatform,
        signal::{self, INTERRUPT_EXIT_CODE},
    },
    App, Config,
};

fn main() -> Result<()> {
    env_logger::init();
    signal::install_interrupt_handler();

    let config = Config::load().unwrap_or_else(|e| {
        error!("Failed to load config: {:#}", e);
        warn!("Using an empty workspace list");
        Config::default()
    });

    let app = App::new(config, Box::new(SystemPlatform));
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    if let Err(e) = app.run(&mut console) {
        if signal::is_interrupt(&e) {
            std::process::exit(INTERRUPT_EXIT_CODE);
        }
        return Err(e);
    }

    Ok(())
}
