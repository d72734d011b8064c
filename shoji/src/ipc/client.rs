use super::SOCKET_PATH;
use anyhow::{Context, Result};
use shoji_ipc::{Command, Response};
use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::UnixStream;

pub struct IpcClient {
    stream: UnixStream,
}

impl IpcClient {
    pub fn connect() -> Result<Self> {
        let stream = UnixStream::connect(SOCKET_PATH)
            .context("Failed to connect to shoji daemon (is `shoji start` running?)")?;
        Ok(Self { stream })
    }

    pub fn send(&mut self, cmd: &Command) -> Result<Response> {
        let json = serde_json::to_string(cmd)?;
        writeln!(self.stream, "{}", json)?;
        self.stream.flush()?;

        let mut reader = BufReader::new(&self.stream);
        let mut line = String::new();
        reader.read_line(&mut line)?;

        let response: Response = serde_json::from_str(&line)
            .with_context(|| format!("Failed to parse daemon response: {}", line.trim()))?;
        Ok(response)
    }
}
