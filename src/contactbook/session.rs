//! # Interactive Session
//!
//! A [`Session`] turns one line of user input into one API call. It owns the
//! [`ContactsApi`] and a dispatch table from command keyword to handler; there
//! is no global state.
//!
//! Each line is split on whitespace. The first token, lower-cased, picks the
//! command and the rest are its arguments. Argument counts are checked here,
//! before the API is called, and a mismatch is reported as
//! [`ContactsError::Argument`] carrying the command's usage text.
//!
//! `close` and `exit` flush the book to its store and end the session.

use crate::api::{CmdMessage, CmdResult, ContactsApi};
use crate::error::{ContactsError, Result};
use crate::store::BookStore;
use std::collections::HashMap;

/// What the UI should do after a line has been handled.
#[derive(Debug)]
pub enum Outcome {
    Continue(CmdResult),
    Exit(CmdResult),
}

impl Outcome {
    pub fn result(&self) -> &CmdResult {
        match self {
            Outcome::Continue(result) | Outcome::Exit(result) => result,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Outcome::Exit(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arity {
    Any,
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Any => true,
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

type Handler<S> = fn(&mut ContactsApi<S>, &[&str]) -> Result<Outcome>;

struct Command<S: BookStore> {
    arity: Arity,
    usage: &'static str,
    handler: Handler<S>,
}

pub struct Session<S: BookStore> {
    api: ContactsApi<S>,
    commands: HashMap<&'static str, Command<S>>,
}

impl<S: BookStore> Session<S> {
    pub fn new(api: ContactsApi<S>) -> Self {
        let mut session = Self {
            api,
            commands: HashMap::new(),
        };
        session.register("add", Arity::AtLeast(2), "add ContactName PhoneNumber", add);
        session.register("remove", Arity::Exactly(1), "remove ContactName", remove);
        session.register("show", Arity::Any, "show", show);
        session.register("phone", Arity::Exactly(1), "phone ContactName", phone);
        session.register(
            "addphone",
            Arity::Exactly(2),
            "addphone ContactName PhoneNumber",
            add_phone,
        );
        session.register(
            "removephone",
            Arity::Exactly(2),
            "removephone ContactName PhoneNumber",
            remove_phone,
        );
        session.register(
            "updatephone",
            Arity::Exactly(3),
            "updatephone ContactName oldphone newphone",
            update_phone,
        );
        session.register(
            "findbyphone",
            Arity::Exactly(1),
            "findbyphone phone",
            find_by_phone,
        );
        session.register(
            "findbyname",
            Arity::Exactly(1),
            "findbyname namepart",
            find_by_name,
        );
        session.register("help", Arity::Any, "help", help);
        session.register("close", Arity::Any, "close", close);
        session.register("exit", Arity::Any, "exit", close);
        session
    }

    fn register(
        &mut self,
        keyword: &'static str,
        arity: Arity,
        usage: &'static str,
        handler: Handler<S>,
    ) {
        self.commands.insert(
            keyword,
            Command {
                arity,
                usage,
                handler,
            },
        );
    }

    /// Loads the book from the store. Call once before the first line.
    pub fn start(&mut self) -> Result<()> {
        self.api.open()
    }

    pub fn api(&self) -> &ContactsApi<S> {
        &self.api
    }

    /// Handles one line of input.
    pub fn execute(&mut self, line: &str) -> Result<Outcome> {
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return Ok(Outcome::Continue(CmdResult::default()));
        };
        let keyword = keyword.to_lowercase();
        let args: Vec<&str> = tokens.collect();

        let Some(command) = self.commands.get(keyword.as_str()) else {
            tracing::debug!(command = %keyword, "unknown command");
            return Ok(Outcome::Continue(
                CmdResult::default().with_message(CmdMessage::warning("Invalid command.")),
            ));
        };

        if !command.arity.accepts(args.len()) {
            return Err(ContactsError::Argument(command.usage.to_string()));
        }

        tracing::debug!(command = %keyword, args = args.len(), "dispatching");
        (command.handler)(&mut self.api, &args)
    }
}

fn add<S: BookStore>(api: &mut ContactsApi<S>, args: &[&str]) -> Result<Outcome> {
    api.add_contact(args[0], &args[1..]).map(Outcome::Continue)
}

fn remove<S: BookStore>(api: &mut ContactsApi<S>, args: &[&str]) -> Result<Outcome> {
    api.remove_contact(args[0]).map(Outcome::Continue)
}

fn show<S: BookStore>(api: &mut ContactsApi<S>, _args: &[&str]) -> Result<Outcome> {
    api.show_contacts().map(Outcome::Continue)
}

fn phone<S: BookStore>(api: &mut ContactsApi<S>, args: &[&str]) -> Result<Outcome> {
    api.phones(args[0]).map(Outcome::Continue)
}

fn add_phone<S: BookStore>(api: &mut ContactsApi<S>, args: &[&str]) -> Result<Outcome> {
    api.add_phone(args[0], args[1]).map(Outcome::Continue)
}

fn remove_phone<S: BookStore>(api: &mut ContactsApi<S>, args: &[&str]) -> Result<Outcome> {
    api.remove_phone(args[0], args[1]).map(Outcome::Continue)
}

fn update_phone<S: BookStore>(api: &mut ContactsApi<S>, args: &[&str]) -> Result<Outcome> {
    api.update_phone(args[0], args[1], args[2]).map(Outcome::Continue)
}

fn find_by_phone<S: BookStore>(api: &mut ContactsApi<S>, args: &[&str]) -> Result<Outcome> {
    api.find_by_phone(args[0]).map(Outcome::Continue)
}

fn find_by_name<S: BookStore>(api: &mut ContactsApi<S>, args: &[&str]) -> Result<Outcome> {
    api.find_by_name(args[0]).map(Outcome::Continue)
}

fn help<S: BookStore>(api: &mut ContactsApi<S>, _args: &[&str]) -> Result<Outcome> {
    api.help().map(Outcome::Continue)
}

fn close<S: BookStore>(api: &mut ContactsApi<S>, _args: &[&str]) -> Result<Outcome> {
    api.close()?;
    Ok(Outcome::Exit(
        CmdResult::default().with_message(CmdMessage::info("Good bye!")),
    ))
}
