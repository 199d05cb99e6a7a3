mod protocol;
mod server;

pub use protocol::{HostCall, RefreshRequest};
pub use server::{open_requests, JsonSurface, StdioServer};
