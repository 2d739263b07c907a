use crate::templates::NOT_FOUND_TEMPLATE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Ok,
    NotFound,
}

impl Status {
    pub fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::NotFound => 404,
        }
    }

    pub fn reason(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::NotFound => "NOT_FOUND",
        }
    }
}

/// One response, built fresh per request.
pub struct HttpResponse {
    pub status: Status,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn file(bytes: Vec<u8>, url_path: &str) -> Self {
        Self {
            status: Status::Ok,
            content_type: content_type_for(url_path).to_string(),
            body: bytes,
        }
    }

    pub fn directory(html: String) -> Self {
        Self {
            status: Status::Ok,
            content_type: "text/html".to_string(),
            body: html.into_bytes(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: Status::NotFound,
            content_type: "text/html; charset=UTF-8".to_string(),
            body: NOT_FOUND_TEMPLATE.as_bytes().to_vec(),
        }
    }

    /// Serializes the response: bare `\n` line separators, a single
    /// Content-Type header, and a close-delimited body with no
    /// Content-Length. Existing clients depend on this exact shape.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = format!(
            "HTTP/1.1 {} {}\nContent-Type: {}\n\n",
            self.status.code(),
            self.status.reason(),
            self.content_type
        )
        .into_bytes();
        bytes.extend_from_slice(&self.body);
        bytes
    }
}

/// Content type inferred from the url path's extension; unknown extensions
/// get an empty content type rather than a guess.
fn content_type_for(url_path: &str) -> &'static str {
    mime_guess::from_path(url_path).first_raw().unwrap_or("")
}
