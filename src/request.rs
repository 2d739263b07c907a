use crate::config::{INITIAL_READ_BUFFER_SIZE, MAX_REQUEST_SIZE};
use std::str;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};

/// The parts of a request this server acts on. Headers are read off the
/// wire but otherwise ignored, as is the method.
#[derive(Debug, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    pub path: String,
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("connection closed before the header block was complete")]
    UnexpectedEof,
    #[error("request headers exceed {} bytes", MAX_REQUEST_SIZE)]
    TooLarge,
    #[error("malformed request line")]
    BadRequestLine,
    #[error("request line is not valid utf-8")]
    Encoding(#[from] str::Utf8Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Reads one request from the stream, growing the buffer until the blank
/// line that ends the header block. Oversized requests are rejected rather
/// than truncated.
pub async fn read_request<S>(stream: &mut S) -> Result<Request, ParseError>
where
    S: AsyncRead + Unpin,
{
    let mut buffer = Vec::with_capacity(INITIAL_READ_BUFFER_SIZE);
    let mut chunk = [0u8; INITIAL_READ_BUFFER_SIZE];

    loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Err(ParseError::UnexpectedEof);
        }
        buffer.extend_from_slice(&chunk[..n]);
        if headers_complete(&buffer) {
            break;
        }
        if buffer.len() > MAX_REQUEST_SIZE {
            return Err(ParseError::TooLarge);
        }
    }

    parse_request_line(&buffer)
}

fn headers_complete(buffer: &[u8]) -> bool {
    buffer.windows(4).any(|w| w == b"\r\n\r\n") || buffer.windows(2).any(|w| w == b"\n\n")
}

fn parse_request_line(buffer: &[u8]) -> Result<Request, ParseError> {
    let line_end = buffer
        .iter()
        .position(|&b| b == b'\n')
        .unwrap_or(buffer.len());
    let line = str::from_utf8(&buffer[..line_end])?.trim_end_matches('\r');

    let mut parts = line.split_whitespace();
    let (method, target) = match (parts.next(), parts.next()) {
        (Some(method), Some(target)) => (method, target),
        _ => return Err(ParseError::BadRequestLine),
    };
    if !target.starts_with('/') {
        return Err(ParseError::BadRequestLine);
    }

    // only the path portion of the target matters
    let path = match target.split_once('?') {
        Some((path, _query)) => path,
        None => target,
    };

    Ok(Request {
        method: method.to_string(),
        path: path.to_string(),
    })
}
