mod client;
mod server;

pub use client::IpcClient;
pub use server::spawn_server;

pub const SOCKET_PATH: &str = "/tmp/shoji.sock";
