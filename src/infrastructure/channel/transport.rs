//! UI channel endpoints: process stdio or a Unix domain socket

use std::path::Path;

use tokio::io::{stdin, stdout, BufReader, Stdin, Stdout};

use crate::application::ports::{ChannelError, UiSink, UiSource};

use super::json_lines::{JsonLinesSink, JsonLinesSource};

/// Boxed sink/source pair for one UI connection
pub type UiEndpoints = (Box<dyn UiSink>, Box<dyn UiSource>);

/// Channel over the process's own stdin/stdout
pub fn stdio() -> (JsonLinesSink<Stdout>, JsonLinesSource<BufReader<Stdin>>) {
    (
        JsonLinesSink::new(stdout()),
        JsonLinesSource::new(BufReader::new(stdin())),
    )
}

/// Connect to the socket the UI host listens on.
///
/// A missing socket means the UI is not there to mount onto, which is fatal.
#[cfg(unix)]
pub async fn connect_unix(path: &Path) -> Result<UiEndpoints, ChannelError> {
    use tokio::net::UnixStream;

    if !path.exists() {
        return Err(ChannelError::MissingUiNode(path.display().to_string()));
    }

    let stream = UnixStream::connect(path).await.map_err(|e| {
        if matches!(
            e.kind(),
            std::io::ErrorKind::NotFound | std::io::ErrorKind::ConnectionRefused
        ) {
            ChannelError::MissingUiNode(path.display().to_string())
        } else {
            ChannelError::Io(e)
        }
    })?;
    let (reader, writer) = stream.into_split();

    Ok((
        Box::new(JsonLinesSink::new(writer)),
        Box::new(JsonLinesSource::new(BufReader::new(reader))),
    ))
}

#[cfg(not(unix))]
pub async fn connect_unix(path: &Path) -> Result<UiEndpoints, ChannelError> {
    Err(ChannelError::MissingUiNode(format!(
        "{} (Unix sockets are not supported on this platform)",
        path.display()
    )))
}

/// Open the configured endpoint: a socket path, or stdio when unset.
pub async fn open(ui_socket: Option<&Path>) -> Result<UiEndpoints, ChannelError> {
    match ui_socket {
        Some(path) => connect_unix(path).await,
        None => {
            let (sink, source) = stdio();
            Ok((Box::new(sink), Box::new(source)))
        }
    }
}
