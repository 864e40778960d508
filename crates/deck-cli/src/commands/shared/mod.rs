use serde::Serialize;

pub mod input;
pub mod limit;
pub mod parse;
pub mod source;

/// Response from any delete command.
#[derive(Serialize)]
pub struct Deleted<'a> {
    pub id: &'a str,
    pub deleted: bool,
}

impl<'a> Deleted<'a> {
    pub const fn new(id: &'a str) -> Self {
        Self { id, deleted: true }
    }
}
