use anyhow::Result;
use log::{debug, info};
use std::io::{BufRead, Write};

use crate::{
    config::{loader::Config, menu::Menu},
    ui::console::Console,
    utils::platform::Platform,
};

use super::{
    selection::{PageableSelection, Selection},
    workspace::Workspace,
};

const INVALID_INPUT_MESSAGE: &str = "An error occurred.";
const OUT_OF_RANGE_MESSAGE: &str = "The given input was out of range.";

pub struct App {
    menu: Menu,
    workspaces: Vec<Workspace>,
    platform: Box<dyn Platform>,
}

impl App {
    pub fn new(config: Config, platform: Box<dyn Platform>) -> Self {
        info!("Starting with {} workspaces", config.workspaces.len());

        Self {
            menu: config.menu,
            workspaces: config.workspaces,
            platform,
        }
    }

    /// Asks until the user makes a usable selection, opens the chosen
    /// workspaces in the order they were typed and returns their indices.
    ///
    /// A selection is only opened when every index in it is valid.
    pub fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<Vec<usize>> {
        let mut selection = PageableSelection::new(&self.workspaces);

        loop {
            let indices = match selection.display_and_select(console, self.platform.as_ref())? {
                Selection::Indices(indices) => indices,
                Selection::Invalid => {
                    debug!("Selection contained a non-digit character");
                    self.restart(&mut selection, INVALID_INPUT_MESSAGE);
                    continue;
                }
            };

            if let Some(index) = self.first_out_of_range(&indices) {
                debug!(
                    "Index {} is out of range for {} workspaces",
                    index,
                    self.workspaces.len()
                );
                self.restart(&mut selection, OUT_OF_RANGE_MESSAGE);
                continue;
            }

            for &index in &indices {
                self.workspaces[index].open(self.platform.as_ref(), console.output())?;
            }

            return Ok(indices);
        }
    }

    fn first_out_of_range(&self, indices: &[usize]) -> Option<usize> {
        indices
            .iter()
            .copied()
            .find(|&index| index >= self.workspaces.len())
    }

    fn restart(&self, selection: &mut PageableSelection<'_, Workspace>, message: &str) {
        if self.menu.reset_page_on_error {
            selection.reset();
        }
        selection.notify(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{
        platform::fake::{Launch, RecordingPlatform},
        signal::is_interrupt,
    };
    use std::io::Cursor;
    use std::rc::Rc;

    struct Shared(Rc<RecordingPlatform>);

    impl Platform for Shared {
        fn open_url(&self, url: &str) -> Result<()> {
            self.0.open_url(url)
        }

        fn open_file(&self, path: &std::path::Path) -> Result<()> {
            self.0.open_file(path)
        }

        fn open_directory(&self, path: &std::path::Path) -> Result<()> {
            self.0.open_directory(path)
        }

        fn start_program(&self, program: &str) -> Result<()> {
            self.0.start_program(program)
        }

        fn clear_screen(&self) -> Result<()> {
            self.0.clear_screen()
        }
    }

    fn app(count: usize, reset_page_on_error: bool) -> (App, Rc<RecordingPlatform>) {
        let config = Config {
            menu: Menu {
                reset_page_on_error,
            },
            workspaces: (0..count)
                .map(|i| {
                    Workspace::new(format!("Workspace {}", i))
                        .with_urls([format!("https://{}.example", i)])
                })
                .collect(),
        };
        let platform = Rc::new(RecordingPlatform::default());
        let app = App::new(config, Box::new(Shared(platform.clone())));
        (app, platform)
    }

    fn run(app: &App, input: &str) -> (Result<Vec<usize>>, String) {
        let mut console = Console::new(Cursor::new(input.to_string()), Vec::new());
        let result = app.run(&mut console);
        let output = String::from_utf8(console.into_output()).unwrap();
        (result, output)
    }

    fn url(i: usize) -> Launch {
        Launch::Url(format!("https://{}.example", i))
    }

    #[test]
    fn test_opens_selection_in_typed_order() {
        let (app, platform) = app(5, false);

        let (result, _) = run(&app, "310\n");

        assert_eq!(result.unwrap(), vec![3, 1, 0]);
        assert_eq!(platform.launched(), vec![url(3), url(1), url(0)]);
    }

    #[test]
    fn test_out_of_range_opens_nothing() {
        let (app, platform) = app(5, false);

        let (result, output) = run(&app, "29\n4\n");

        assert_eq!(result.unwrap(), vec![4]);
        assert_eq!(platform.launched(), vec![url(4)]);
        assert!(output.contains(OUT_OF_RANGE_MESSAGE));
    }

    #[test]
    fn test_first_out_of_range() {
        let (app, _) = app(5, false);

        assert_eq!(app.first_out_of_range(&[2, 20]), Some(20));
        assert_eq!(app.first_out_of_range(&[5, 1]), Some(5));
        assert_eq!(app.first_out_of_range(&[0, 4, 4]), None);
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let (app, platform) = app(5, false);

        let (result, output) = run(&app, "1a3\n2\n");

        assert_eq!(result.unwrap(), vec![2]);
        assert_eq!(platform.launched(), vec![url(2)]);
        assert!(output.contains(INVALID_INPUT_MESSAGE));
    }

    #[test]
    fn test_undecodable_input_reprompts() {
        let (app, platform) = app(1, false);
        let mut console = Console::new(Cursor::new(b"\xff1\n0\n".to_vec()), Vec::new());

        let result = app.run(&mut console);
        let output = String::from_utf8(console.into_output()).unwrap();

        assert_eq!(result.unwrap(), vec![0]);
        assert_eq!(platform.launched(), vec![url(0)]);
        assert!(output.contains(INVALID_INPUT_MESSAGE));
    }

    #[test]
    fn test_status_lines_reach_console() {
        let (app, _) = app(2, false);

        let (result, output) = run(&app, "1\n");

        assert_eq!(result.unwrap(), vec![1]);
        assert!(output.ends_with("0) Workspace 0\n1) Workspace 1\nOpening URLs...\n"));
    }

    #[test]
    fn test_page_survives_restart_by_default() {
        let (app, platform) = app(15, false);

        let (result, _) = run(&app, "+\nx\n2\n");

        assert_eq!(result.unwrap(), vec![12]);
        assert_eq!(platform.launched(), vec![url(12)]);
    }

    #[test]
    fn test_page_resets_when_configured() {
        let (app, platform) = app(15, true);

        let (result, _) = run(&app, "+\n9\n2\n");

        assert_eq!(result.unwrap(), vec![2]);
        assert_eq!(platform.launched(), vec![url(2)]);
    }

    #[test]
    fn test_empty_selection_opens_nothing() {
        let (app, platform) = app(3, false);

        let (result, _) = run(&app, "\n");

        assert!(result.unwrap().is_empty());
        assert!(platform.launched().is_empty());
    }

    #[test]
    fn test_closed_input_is_interrupt() {
        let (app, platform) = app(3, false);

        let (result, _) = run(&app, "7\n");

        assert!(is_interrupt(&result.unwrap_err()));
        assert!(platform.launched().is_empty());
    }
}
