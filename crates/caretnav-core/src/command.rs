//! Textual navigation commands and their dispatch.
//!
//! Commands are written as `[shift+]name[:count]`, e.g. `right`, `down:3`,
//! `shift+end`. The `shift+` prefix extends the selection instead of
//! collapsing it.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::trace;

use crate::buffer::BufferView;
use crate::cursor::CursorState;
use crate::movement::Navigator;

/// A navigation command without its selection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorCommand {
    Left(usize),
    Right(usize),
    Up(usize),
    Down(usize),
    PageUp,
    PageDown,
    TranslateUp,
    TranslateDown,
    LineStart,
    LineEnd,
    BufferStart,
    BufferEnd,
    SelectAll,
}

impl CursorCommand {
    /// Returns the canonical command name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Left(_) => "left",
            Self::Right(_) => "right",
            Self::Up(_) => "up",
            Self::Down(_) => "down",
            Self::PageUp => "page-up",
            Self::PageDown => "page-down",
            Self::TranslateUp => "translate-up",
            Self::TranslateDown => "translate-down",
            Self::LineStart => "home",
            Self::LineEnd => "end",
            Self::BufferStart => "top",
            Self::BufferEnd => "bottom",
            Self::SelectAll => "select-all",
        }
    }

    /// Returns true if the command honors a selection-mode flag.
    pub fn supports_selection_mode(&self) -> bool {
        !matches!(
            self,
            Self::TranslateUp | Self::TranslateDown | Self::SelectAll
        )
    }

    fn count(&self) -> Option<usize> {
        match *self {
            Self::Left(n) | Self::Right(n) | Self::Up(n) | Self::Down(n) => Some(n),
            _ => None,
        }
    }
}

/// A command together with its selection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation {
    pub command: CursorCommand,
    /// Extend the selection instead of collapsing it.
    pub select: bool,
}

impl Invocation {
    pub fn new(command: CursorCommand, select: bool) -> Self {
        Self { command, select }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.select {
            write!(f, "shift+")?;
        }
        write!(f, "{}", self.command.name())?;
        match self.command.count() {
            Some(n) if n != 1 => write!(f, ":{n}"),
            _ => Ok(()),
        }
    }
}

impl FromStr for Invocation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let spec = s.trim();
        let (select, rest) = match spec.strip_prefix("shift+") {
            Some(rest) => (true, rest),
            None => (false, spec),
        };
        let (name, count) = match rest.split_once(':') {
            Some((name, count)) => {
                let count = count
                    .parse::<usize>()
                    .with_context(|| format!("invalid count in command `{spec}`"))?;
                (name, Some(count))
            }
            None => (rest, None),
        };
        let n = count.unwrap_or(1);

        let command = match name {
            "left" => CursorCommand::Left(n),
            "right" => CursorCommand::Right(n),
            "up" => CursorCommand::Up(n),
            "down" => CursorCommand::Down(n),
            _ if count.is_some() => anyhow::bail!("command `{name}` does not take a count"),
            "page-up" => CursorCommand::PageUp,
            "page-down" => CursorCommand::PageDown,
            "translate-up" => CursorCommand::TranslateUp,
            "translate-down" => CursorCommand::TranslateDown,
            "home" | "line-start" => CursorCommand::LineStart,
            "end" | "line-end" => CursorCommand::LineEnd,
            "top" | "buffer-start" => CursorCommand::BufferStart,
            "bottom" | "buffer-end" => CursorCommand::BufferEnd,
            "select-all" => CursorCommand::SelectAll,
            _ => anyhow::bail!("unknown command `{name}`"),
        };

        if select && !command.supports_selection_mode() {
            anyhow::bail!("command `{name}` cannot extend a selection");
        }
        Ok(Self { command, select })
    }
}

impl<B: BufferView + ?Sized> Navigator<'_, B> {
    /// Runs one command against `state`.
    pub fn apply(&self, state: &CursorState, invocation: Invocation) -> CursorState {
        let select = invocation.select;
        let next = match invocation.command {
            CursorCommand::Left(n) => self.move_left(state, select, n),
            CursorCommand::Right(n) => self.move_right(state, select, n),
            CursorCommand::Up(n) => self.move_up(state, select, n),
            CursorCommand::Down(n) => self.move_down(state, select, n),
            CursorCommand::PageUp => self.move_page_up(state, select),
            CursorCommand::PageDown => self.move_page_down(state, select),
            CursorCommand::TranslateUp => self.translate_up(state),
            CursorCommand::TranslateDown => self.translate_down(state),
            CursorCommand::LineStart => self.move_to_line_start(state, select),
            CursorCommand::LineEnd => self.move_to_line_end(state, select),
            CursorCommand::BufferStart => self.move_to_buffer_start(state, select),
            CursorCommand::BufferEnd => self.move_to_buffer_end(state, select),
            CursorCommand::SelectAll => self.select_all(state),
        };
        trace!(
            command = %invocation,
            head = %next.position(self.buffer()),
            leftover = next.leftover(),
            sticky = next.is_end_sticky(),
            "applied cursor command"
        );
        next
    }

    /// Runs `invocations` in order, starting from `state`.
    pub fn apply_all<'i>(
        &self,
        state: &CursorState,
        invocations: impl IntoIterator<Item = &'i Invocation>,
    ) -> CursorState {
        invocations
            .into_iter()
            .fold(*state, |state, invocation| self.apply(&state, *invocation))
    }
}
