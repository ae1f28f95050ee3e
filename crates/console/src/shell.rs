//! Line-oriented presentation shell over the [`Console`].
//!
//! Each input line is parsed into one or more [`Action`]s, dispatched, and
//! the current view is printed again together with any notice.

use std::fmt::Write as _;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use common::{AppError, AppResult};
use domain::{Route, MSG_NO_USERS};

use crate::console::{Action, Console, Screen};
use crate::notice::Notice;

const HELP: &str = "\
Login view:  email <address> | password <secret> | login [<email> <password>]
User list:   search <text> | clear | prev | next | edit <id> | delete <id> | logout
Edit view:   first <name> | last <name> | email <address> | save | cancel
Anywhere:    goto <path> | show | help | quit
";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Actions(Vec<Action>),
    Show,
    Help,
    Quit,
    Empty,
}

impl ShellCommand {
    pub fn parse(line: &str) -> AppResult<Self> {
        let line = line.trim_end_matches(['\r', '\n']).trim_start();
        if line.trim().is_empty() {
            return Ok(ShellCommand::Empty);
        }

        let (word, rest) = match line.find(char::is_whitespace) {
            Some(at) => {
                let (word, tail) = line.split_at(at);
                // drop the one separator; the query keeps the rest verbatim
                let separator = tail.chars().next().map_or(0, char::len_utf8);
                (word, &tail[separator..])
            }
            None => (line, ""),
        };
        let arg = rest.trim();
        let single = |action: Action| -> AppResult<Self> { Ok(ShellCommand::Actions(vec![action])) };

        match word.to_lowercase().as_str() {
            "help" | "?" => Ok(ShellCommand::Help),
            "show" => Ok(ShellCommand::Show),
            "quit" | "exit" => Ok(ShellCommand::Quit),
            "login" => {
                if arg.is_empty() {
                    return single(Action::Submit);
                }
                match arg.split_whitespace().collect::<Vec<_>>().as_slice() {
                    [email, password] => Ok(ShellCommand::Actions(vec![
                        Action::SetEmail(email.to_string()),
                        Action::SetPassword(password.to_string()),
                        Action::Submit,
                    ])),
                    _ => Err(AppError::validation("usage: login [<email> <password>]")),
                }
            }
            "email" => single(Action::SetEmail(arg.to_string())),
            "password" => single(Action::SetPassword(arg.to_string())),
            "first" => single(Action::SetFirstName(arg.to_string())),
            "last" => single(Action::SetLastName(arg.to_string())),
            "save" | "submit" => single(Action::Submit),
            "cancel" | "back" => single(Action::Cancel),
            // the query keeps its inner and trailing spaces
            "search" => single(Action::Search(rest.to_string())),
            "clear" => single(Action::Search(String::new())),
            "prev" | "previous" => single(Action::Previous),
            "next" => single(Action::Next),
            "delete" => single(Action::Delete(parse_id(arg)?)),
            "edit" => single(Action::Edit(parse_id(arg)?)),
            "logout" => single(Action::Logout),
            "goto" => single(Action::Navigate(arg.parse::<Route>()?)),
            other => Err(AppError::validation(format!(
                "Unknown command '{}'. Type 'help' for the list.",
                other
            ))),
        }
    }
}

fn parse_id(arg: &str) -> AppResult<u32> {
    arg.parse()
        .map_err(|_| AppError::validation(format!("'{}' is not a user id", arg)))
}

/// Render the current view as plain text.
pub fn render(console: &Console) -> String {
    let mut out = String::new();

    match console.screen() {
        Screen::Login(gate) => {
            let _ = writeln!(out, "== Login ==");
            let _ = writeln!(out, "Email address: {}", gate.email());
            let _ = writeln!(
                out,
                "Password: {}",
                if gate.has_password() { "********" } else { "" }
            );
            if let Some(error) = gate.error() {
                let _ = writeln!(out, "! {}", error);
            }
        }
        Screen::Users(directory) => {
            let state = directory.state();
            let cursor = state.cursor();
            let _ = writeln!(
                out,
                "== User List ==  page {} of {}",
                cursor.current(),
                cursor.total_pages()
            );
            let _ = writeln!(out, "Search by name or email: \"{}\"", state.query());

            if state.is_view_empty() {
                let _ = writeln!(out, "  {}", MSG_NO_USERS);
            }
            for user in state.filtered() {
                let _ = writeln!(out, "  #{:<3} {}  <{}>", user.id, user.full_name(), user.email);
                let _ = writeln!(out, "        {}", user.avatar);
            }

            let _ = writeln!(
                out,
                "[< Previous{}]  [Next >{}]",
                if cursor.has_previous() { "" } else { " (disabled)" },
                if cursor.has_next() { "" } else { " (disabled)" },
            );
        }
        Screen::Edit { editor, .. } => {
            let draft = editor.draft();
            let _ = writeln!(out, "== Edit User #{} ==", editor.user_id());
            let _ = writeln!(out, "First Name: {}", draft.first_name);
            let _ = writeln!(out, "Last Name: {}", draft.last_name);
            let _ = writeln!(out, "Email: {}", draft.email);
        }
    }

    out
}

fn io_error(err: std::io::Error) -> AppError {
    AppError::internal(format!("Console I/O failed: {}", err))
}

/// Reads commands from `reader` and writes views to `writer`.
pub struct Shell<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> Shell<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Run until `quit` or end of input.
    pub async fn run(&mut self, console: &mut Console) -> AppResult<()> {
        self.write(&render(console)).await?;

        let mut line = String::new();
        loop {
            self.write(&format!("{}> ", console.route())).await?;

            line.clear();
            if self.reader.read_line(&mut line).await.map_err(io_error)? == 0 {
                break;
            }

            match ShellCommand::parse(&line) {
                Ok(ShellCommand::Quit) => break,
                Ok(ShellCommand::Empty) => {}
                Ok(ShellCommand::Help) => self.write(HELP).await?,
                Ok(ShellCommand::Show) => self.write(&render(console)).await?,
                Ok(ShellCommand::Actions(actions)) => {
                    for action in actions {
                        debug!(?action, "dispatch");
                        if let Some(notice) = console.dispatch(action).await {
                            self.write(&format!("{}\n", notice)).await?;
                        }
                    }
                    self.write(&render(console)).await?;
                }
                Err(err) => self.write(&format!("{}\n", Notice::from(&err))).await?,
            }
        }

        self.writer.flush().await.map_err(io_error)
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    async fn write(&mut self, text: &str) -> AppResult<()> {
        self.writer
            .write_all(text.as_bytes())
            .await
            .map_err(io_error)?;
        self.writer.flush().await.map_err(io_error)
    }
}
