pub mod repl;
pub mod token_cmd;

pub use repl::run_repl_mode;
pub use token_cmd::run_token_command;
