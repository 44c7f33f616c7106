//! Interactive menu-loop driver.
//!
//! Owns the session's [`TeamTree`] and maps tree errors to user-facing
//! warnings; nothing here is fatal. Generic over reader/writer so tests can
//! drive a full session with in-memory buffers.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{Side, TeamTree};

/// Normalize a user-supplied side string, case-insensitively.
pub fn parse_side(raw: &str) -> CliResult<Side> {
    match raw.trim().to_lowercase().as_str() {
        "left" => Ok(Side::Left),
        "right" => Ok(Side::Right),
        _ => Err(CliError::InvalidSide(raw.trim().to_string())),
    }
}

/// One interactive session over a reader/writer pair.
pub struct MenuSession<'a, R, W> {
    input: R,
    output: W,
    settings: &'a Settings,
    tree: TeamTree,
}

impl<'a, R: BufRead, W: Write> MenuSession<'a, R, W> {
    pub fn new(input: R, output: W, settings: &'a Settings) -> Self {
        Self {
            input,
            output,
            settings,
            tree: TeamTree::new(),
        }
    }

    /// The session's tree, for inspection after [`Self::run`] returns.
    pub fn tree(&self) -> &TeamTree {
        &self.tree
    }

    /// Run the menu loop until Exit is chosen or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.read_line()? else {
                break;
            };
            debug!(%choice, "menu selection");
            match choice.as_str() {
                "1" => self.add_team_lead()?,
                "2" => self.add_employee()?,
                "3" => self.print_structure()?,
                "4" => {
                    output::info(&mut self.output, "Good Bye!")?;
                    break;
                }
                other => {
                    output::warning(
                        &mut self.output,
                        &format!("invalid option '{}', try again", other),
                    )?;
                }
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        output::info(&mut self.output, "")?;
        output::header(&mut self.output, "Team Management Menu")?;
        output::info(&mut self.output, "1. Add Team Lead (root)")?;
        output::info(&mut self.output, "2. Add Employee")?;
        output::info(&mut self.output, "3. Print Team Structure")?;
        output::info(&mut self.output, "4. Exit")?;
        output::prompt(&mut self.output, "Choose an option (1-4):")
    }

    fn add_team_lead(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt_name("Enter team lead's name:", "team lead name")? else {
            return Ok(());
        };
        match self.tree.set_root(&name) {
            Ok(()) => output::success(
                &mut self.output,
                &format!("{} added as the team lead", name),
            ),
            Err(e) => output::warning(&mut self.output, &e),
        }
    }

    fn add_employee(&mut self) -> io::Result<()> {
        let Some(manager) = self.prompt_name("Enter the manager's name:", "manager name")? else {
            return Ok(());
        };
        let Some(employee) =
            self.prompt_name("Enter the new employee's name:", "employee name")?
        else {
            return Ok(());
        };

        output::prompt(
            &mut self.output,
            "Should this employee be on the LEFT or RIGHT of the manager?",
        )?;
        let Some(raw_side) = self.read_line()? else {
            return Ok(());
        };
        // Validate before touching the tree
        let side = match parse_side(&raw_side) {
            Ok(side) => side,
            Err(e) => return output::warning(&mut self.output, &e),
        };

        match self.tree.insert(&manager, &employee, side) {
            Ok(()) => output::success(
                &mut self.output,
                &format!(
                    "{} added to the {} of {}",
                    employee,
                    side.to_string().to_uppercase(),
                    manager
                ),
            ),
            Err(e) => output::warning(&mut self.output, &e),
        }
    }

    fn print_structure(&mut self) -> io::Result<()> {
        let rendering = self.tree.render_with_indent(self.settings.indent_width);
        output::info(&mut self.output, &rendering)
    }

    /// Prompt for a name; `Ok(None)` on EOF or an empty (warned) answer.
    fn prompt_name(&mut self, prompt: &str, label: &'static str) -> io::Result<Option<String>> {
        output::prompt(&mut self.output, prompt)?;
        let Some(name) = self.read_line()? else {
            return Ok(None);
        };
        if name.is_empty() {
            output::warning(&mut self.output, &CliError::EmptyName(label))?;
            return Ok(None);
        }
        Ok(Some(name))
    }

    /// Read one trimmed line; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
