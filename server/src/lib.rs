pub use cli::*;
pub use error::*;
pub use http::*;
pub use registry::*;
pub use server::*;
pub use view::*;

mod cli;
mod error;
mod http;
mod registry;
mod server;
mod view;
