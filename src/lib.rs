pub mod core {
    pub mod app;
    pub mod selection;
    pub mod workspace;
}

pub mod utils {
    pub mod platform;
    pub mod signal;
}

pub mod ui {
    pub mod banner;
    pub mod console;
}

pub mod config {
    pub mod loader;
    pub mod menu;
}

pub use crate::config::loader::Config;
pub use crate::core::{
    app::App,
    selection::{PageableSelection, Selection},
    workspace::{Titled, Workspace},
};
