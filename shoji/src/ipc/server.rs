use super::SOCKET_PATH;
use crate::daemon::Request;
use anyhow::{Context, Result};
use shoji_ipc::{Command, Response};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::UnixListener;
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::oneshot;

/// Serves the IPC socket on a background thread.
///
/// Commands are forwarded to the main thread through `tx`; the reply travels
/// back on a oneshot channel. SIGINT/SIGTERM are turned into `Quit`.
pub fn spawn_server(tx: mpsc::Sender<Request>) -> Result<thread::JoinHandle<()>> {
    let path = Path::new(SOCKET_PATH);
    if path.exists() {
        std::fs::remove_file(path)
            .with_context(|| format!("Failed to remove stale socket: {}", SOCKET_PATH))?;
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build IPC runtime")?;

    let handle = thread::Builder::new()
        .name("shoji-ipc".to_string())
        .spawn(move || {
            if let Err(e) = runtime.block_on(serve(tx)) {
                tracing::error!("IPC server stopped: {:#}", e);
            }
        })
        .context("Failed to spawn IPC thread")?;

    Ok(handle)
}

async fn serve(tx: mpsc::Sender<Request>) -> Result<()> {
    let listener = UnixListener::bind(SOCKET_PATH)
        .with_context(|| format!("Failed to bind {}", SOCKET_PATH))?;
    let mut terminate = signal(SignalKind::terminate())?;
    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);

    tracing::info!("IPC listening on {}", SOCKET_PATH);

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                let (stream, _) = accepted?;
                let tx = tx.clone();
                tokio::spawn(async move {
                    let (reader, writer) = stream.into_split();
                    if let Err(e) = handle_client(reader, writer, tx).await {
                        tracing::debug!("IPC client error: {:#}", e);
                    }
                });
            }
            _ = &mut interrupt => {
                tracing::info!("Interrupted, shutting down");
                break;
            }
            _ = terminate.recv() => {
                tracing::info!("Terminated, shutting down");
                break;
            }
        }
    }

    let _ = tx.send(Request::new(Command::Quit));
    Ok(())
}

async fn handle_client<R, W>(reader: R, mut writer: W, tx: mpsc::Sender<Request>) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = BufReader::new(reader).lines();

    while let Some(line) = lines.next_line().await? {
        let response = match serde_json::from_str::<Command>(&line) {
            Ok(command) => {
                tracing::debug!("IPC command: {:?}", command);
                forward(command, &tx).await
            }
            Err(e) => Response::Error {
                message: format!("Invalid command: {}", e),
            },
        };

        let mut json = serde_json::to_string(&response)?;
        json.push('\n');
        writer.write_all(json.as_bytes()).await?;
        writer.flush().await?;
    }

    Ok(())
}

async fn forward(command: Command, tx: &mpsc::Sender<Request>) -> Response {
    let (reply_tx, reply_rx) = oneshot::channel();
    if tx.send(Request::with_reply(command, reply_tx)).is_err() {
        return Response::Error {
            message: "Daemon is shutting down".to_string(),
        };
    }

    reply_rx.await.unwrap_or_else(|_| Response::Error {
        message: "Daemon dropped the request".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_lines_are_forwarded_and_answered() {
        let (tx, rx) = mpsc::channel::<Request>();
        let responder = thread::spawn(move || {
            for request in rx {
                let response = match request.command {
                    Command::Maximize => Response::Ok,
                    _ => Response::Error {
                        message: "unexpected".to_string(),
                    },
                };
                if let Some(reply) = request.reply {
                    let _ = reply.send(response);
                }
            }
        });

        let input: &[u8] = b"{\"type\":\"maximize\"}\nnot json\n";
        let mut output = Vec::new();
        handle_client(input, &mut output, tx).await.unwrap();
        responder.join().unwrap();

        let output = String::from_utf8(output).unwrap();
        let lines: Vec<Response> = output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines[0], Response::Ok);
        assert!(matches!(lines[1], Response::Error { .. }));
    }
}
