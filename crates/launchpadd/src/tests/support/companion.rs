//! Minimal companion client used to drive the daemon over a real socket.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::time::Duration;

use launchpad_config::Framing;
use serde_json::{Value, json};
use tungstenite::protocol::CloseFrame;
use tungstenite::protocol::frame::coding::CloseCode;
use tungstenite::{Message, WebSocket};

const READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Client side of a companion connection.
pub enum CompanionClient {
    Lines {
        reader: BufReader<Box<dyn Read + Send>>,
        writer: Box<dyn Write + Send>,
    },
    WebSocket(WebSocket<TcpStream>),
}

impl CompanionClient {
    /// Connects to a TCP endpoint using the given framing.
    pub fn connect_tcp(addr: SocketAddr, framing: Framing) -> Self {
        let stream = TcpStream::connect(addr).expect("connect companion");
        stream
            .set_read_timeout(Some(READ_TIMEOUT))
            .expect("set read timeout");
        match framing {
            Framing::Lines => {
                let reader = stream.try_clone().expect("clone stream");
                Self::Lines {
                    reader: BufReader::new(Box::new(reader)),
                    writer: Box::new(stream),
                }
            }
            Framing::WebSocket => {
                let (socket, _) = tungstenite::client(format!("ws://{addr}/"), stream)
                    .expect("websocket handshake");
                Self::WebSocket(socket)
            }
        }
    }

    /// Connects to a Unix socket using line framing.
    #[cfg(unix)]
    pub fn connect_unix(path: &camino::Utf8Path) -> Self {
        let stream =
            std::os::unix::net::UnixStream::connect(path).expect("connect unix companion");
        stream
            .set_read_timeout(Some(READ_TIMEOUT))
            .expect("set read timeout");
        let reader = stream.try_clone().expect("clone stream");
        Self::Lines {
            reader: BufReader::new(Box::new(reader)),
            writer: Box::new(stream),
        }
    }

    /// Reads the next frame as JSON.
    pub fn read_frame(&mut self) -> Value {
        let text = match self {
            Self::Lines { reader, .. } => {
                let mut line = String::new();
                let read = reader.read_line(&mut line).expect("read frame");
                assert!(read > 0, "daemon closed the connection");
                line
            }
            Self::WebSocket(socket) => loop {
                match socket.read().expect("read websocket frame") {
                    Message::Text(text) => break text.as_str().to_owned(),
                    Message::Close(frame) => panic!("daemon closed the connection: {frame:?}"),
                    _ => {}
                }
            },
        };
        serde_json::from_str(text.trim()).expect("frame is JSON")
    }

    /// Writes one raw frame. Over WebSocket, payloads that are not UTF-8
    /// go out as binary frames.
    pub fn send_frame(&mut self, frame: impl AsRef<[u8]>) {
        let bytes = frame.as_ref();
        match self {
            Self::Lines { writer, .. } => {
                writer.write_all(bytes).expect("write frame");
                writer.write_all(b"\n").expect("write newline");
                writer.flush().expect("flush frame");
            }
            Self::WebSocket(socket) => {
                let message = match std::str::from_utf8(bytes) {
                    Ok(text) => Message::text(text.to_owned()),
                    Err(_) => Message::binary(bytes.to_vec()),
                };
                socket.send(message).expect("send websocket frame");
            }
        }
    }

    /// Sends a request and returns its response.
    pub fn request(&mut self, command: &str, params: Value) -> Value {
        let frame = json!({ "command": command, "params": params }).to_string();
        self.send_frame(&frame);
        self.read_frame()
    }

    /// Completes a WebSocket closing handshake with the given status.
    /// Line connections are simply dropped.
    pub fn close(self, code: u16, reason: &str) {
        match self {
            Self::Lines { .. } => {}
            Self::WebSocket(mut socket) => {
                socket
                    .close(Some(CloseFrame {
                        code: CloseCode::from(code),
                        reason: reason.to_owned().into(),
                    }))
                    .expect("start close handshake");
                while socket.read().is_ok() {}
            }
        }
    }
}
