pub mod credentials;

pub use credentials::{AdminCredentials, LoginCommand, LoginCommandError};
