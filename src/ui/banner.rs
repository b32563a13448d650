use std::io::{self, Write};

const LOGO: &str = r#" _       __           __
| |     / /___  _____/ /___________  ____ _________  _____
| | /| / / __ \/ ___/ //_/ ___/ __ \/ __ `/ ___/ _ \/ ___/
| |/ |/ / /_/ / /  / ,< (__  ) /_/ / /_/ / /__/  __(__  )
|__/|__/\____/_/  /_/|_/____/ .___/\__,_/\___/\___/____/
                           /_/"#;

const INSTRUCTIONS: &str = "Select one of these workspaces by typing in the corresponding number, \
select more by concatenating your choices.";

pub fn draw<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", LOGO)?;
    writeln!(out, "{}", INSTRUCTIONS)?;
    writeln!(out)
}
