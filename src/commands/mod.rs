use crate::errors::Result;

pub mod apply;
pub mod query;

/// Common trait for command execution
pub trait Command {
    /// Execute the command
    fn execute(&self) -> Result<()>;
}
