use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use snakepit_config::Config;
use snakepit_core_snake_contracts::{snake::SnakeService, SnakeFeatureService, SnakeSaveError};
use snakepit_demo::snake::ALL_SNAKES;
use snakepit_di::Provides;
use snakepit_models::{
    snake::{SnakeBoard, SnakeCategory, SnakeCategoryFilter, SnakeDraft, SnakeModal},
    validation::Field,
};
use tracing::info;

use crate::environment::{
    types::{SnakeCrud, SnakeFeature},
    ConfigProvider, Provider,
};

pub const EMPTY_LIST_MESSAGE: &str =
    "No snakes found. Click \"Add snake\" to create the first one.";

#[derive(Debug, Args)]
pub struct SnakesCommand {
    /// Print the list of snakes as JSON
    #[arg(long)]
    json: bool,
}

impl SnakesCommand {
    pub fn invoke(self, config: &Config) -> anyhow::Result<ExitCode> {
        let mut provider = Provider::new(ConfigProvider::new(config));
        let mut session = Session::new(provider.provide::<SnakeFeature>(), self.json);

        if config.snake.seed_demo {
            session.seed(&provider.provide::<SnakeCrud>())?;
        }

        let mut out = io::stdout().lock();
        session.render(&mut out)?;

        for line in io::stdin().lines() {
            let line = line.context("Failed to read from stdin")?;
            if let Flow::Quit = session.run_line(&line, &mut out)? {
                break;
            }
        }

        Ok(ExitCode::SUCCESS)
    }
}

/// A single line typed into the snakes session.
#[derive(Debug, Parser)]
#[command(name = "snakes", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Debug, Subcommand)]
enum ShellCommand {
    /// Open the dialog for adding a snake
    Add,
    /// Open the dialog for editing a snake
    Edit { id: u64 },
    /// Set the name in the open dialog
    Name {
        #[arg(default_value = "", allow_hyphen_values = true)]
        text: String,
    },
    /// Set the scientific name in the open dialog
    ScientificName {
        #[arg(default_value = "", allow_hyphen_values = true)]
        text: String,
    },
    /// Set the category in the open dialog
    Category { category: SnakeCategory },
    /// Save the snake of the open dialog
    Save,
    /// Close the open dialog
    Cancel,
    /// Ask to delete a snake
    Delete { id: u64 },
    /// Delete the snake awaiting confirmation
    Confirm,
    /// Only list snakes of the given category
    Filter { category: SnakeCategoryFilter },
    /// Only list snakes whose name contains the given text
    Search {
        #[arg(default_value = "", allow_hyphen_values = true)]
        text: String,
    },
    /// Print the list again
    List,
    /// End the session
    #[command(aliases(["exit", "q"]))]
    Quit,
}

/// Splits a line into the command and the rest of the line, which is passed
/// on as a single argument with its inner whitespace intact.
fn split_line(line: &str) -> impl Iterator<Item = &str> {
    let line = line.trim();
    let (command, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(command, rest)| (command, rest.trim_start()));
    std::iter::once(command).chain((!rest.is_empty()).then_some(rest))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

struct Session<Feature> {
    feature: Feature,
    board: SnakeBoard,
    json: bool,
}

impl<Feature: SnakeFeatureService> Session<Feature> {
    fn new(feature: Feature, json: bool) -> Self {
        Self {
            feature,
            board: SnakeBoard::default(),
            json,
        }
    }

    fn seed(&mut self, snakes: &impl SnakeService) -> anyhow::Result<()> {
        for snake in ALL_SNAKES.iter() {
            snakes
                .create(&mut self.board.snakes, &SnakeDraft::from(&snake.details))
                .context("Failed to seed demo snakes")?;
        }
        info!(count = self.board.snakes.len(), "Seeded demo snakes");
        Ok(())
    }

    fn run_line(&mut self, line: &str, out: &mut impl Write) -> anyhow::Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }

        let command = match ShellLine::try_parse_from(split_line(line)) {
            Ok(ShellLine { command }) => command,
            Err(err) => {
                write!(out, "{err}")?;
                return Ok(Flow::Continue);
            }
        };

        let flow = self.execute(command, out)?;
        if flow == Flow::Continue {
            self.render(out)?;
        }

        Ok(flow)
    }

    fn execute(&mut self, command: ShellCommand, out: &mut impl Write) -> anyhow::Result<Flow> {
        match command {
            ShellCommand::Add => self.feature.begin_add(&mut self.board),
            ShellCommand::Edit { id } => self.feature.begin_edit(&mut self.board, id.into()),
            ShellCommand::Name { text } => {
                self.edit_draft(out, |draft| draft.name = text)?
            }
            ShellCommand::ScientificName { text } => {
                self.edit_draft(out, |draft| draft.scientific_name = text)?
            }
            ShellCommand::Category { category } => {
                self.edit_draft(out, |draft| draft.category = category)?
            }
            ShellCommand::Save => match self.feature.save(&mut self.board) {
                Ok(Some(snake)) => writeln!(out, "Saved {}", snake.details.name)?,
                Ok(None) => writeln!(out, "The snake no longer exists.")?,
                // reported by render
                Err(SnakeSaveError::Validation(_)) => {}
                Err(err @ SnakeSaveError::NotEditing) => writeln!(out, "{err}")?,
            },
            ShellCommand::Cancel => self.feature.cancel(&mut self.board),
            ShellCommand::Delete { id } => {
                self.feature.request_delete(&mut self.board, id.into())
            }
            ShellCommand::Confirm => {
                if let Some(snake) = self.feature.confirm_delete(&mut self.board) {
                    writeln!(out, "Deleted {}", snake.details.name)?;
                }
            }
            ShellCommand::Filter { category } => self.board.filter.category = category,
            ShellCommand::Search { text } => self.board.filter.search_text = text,
            ShellCommand::List => {}
            ShellCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn edit_draft(&mut self, out: &mut impl Write, f: impl FnOnce(&mut SnakeDraft)) -> io::Result<()> {
        if self.board.modal.is_form_open() {
            f(&mut self.board.draft);
            Ok(())
        } else {
            writeln!(out, "{}", SnakeSaveError::NotEditing)
        }
    }

    fn render(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let visible = self.board.visible().collect::<Vec<_>>();

        if self.json {
            serde_json::to_writer(&mut *out, &visible)?;
            writeln!(out)?;
        } else if visible.is_empty() {
            writeln!(out, "{EMPTY_LIST_MESSAGE}")?;
        } else {
            writeln!(out, "Snakes list ({})", visible.len())?;
            for snake in visible {
                writeln!(
                    out,
                    "  #{} {} ({}) {}",
                    snake.id,
                    snake.details.name,
                    snake.details.scientific_name,
                    snake.details.category.label()
                )?;
            }
        }

        let title = self.board.modal.title().unwrap_or_default();
        match self.board.modal {
            SnakeModal::Closed => {}
            SnakeModal::Adding | SnakeModal::Editing(_) => {
                let draft = &self.board.draft;
                writeln!(
                    out,
                    "{title}: name={:?} scientific-name={:?} category={} [{}]",
                    draft.name,
                    draft.scientific_name,
                    draft.category,
                    self.board.modal.submit_label().unwrap_or_default()
                )?;
            }
            SnakeModal::ConfirmingDelete(id) => {
                let name = self
                    .board
                    .snakes
                    .get(id)
                    .map(|snake| snake.details.name.as_str())
                    .unwrap_or("this snake");
                writeln!(out, "{title} {name} will be removed. [confirm/cancel]")?;
            }
        }

        if let Some(error) = &self.board.error {
            writeln!(out, "Error: {}: {}", error.field.name(), error.message)?;
        }

        Ok(())
    }
}
