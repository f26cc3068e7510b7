use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub const ALLOWED_COMMANDS: &[&str] = &[
    "close",
    "exit",
    "add",
    "remove",
    "show",
    "phone",
    "addphone",
    "removephone",
    "updatephone",
    "findbyphone",
    "findbyname",
];

pub fn run() -> Result<CmdResult> {
    Ok(CmdResult::default()
        .with_message(CmdMessage::info("Allowed commands:"))
        .with_message(CmdMessage::info(ALLOWED_COMMANDS.join(", "))))
}
