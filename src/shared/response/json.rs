use crate::shared::response::types::{Response, StatusCode};
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct ErrorEnvelope<'a> {
    status: u16,
    message: &'a str,
}

impl JsonRenderer {
    /// Serialize a handler response to a JSON body. Successful responses
    /// carry their body verbatim; errors render a status envelope.
    pub fn render(&self, response: &Response) -> Vec<u8> {
        let mut buf = Vec::with_capacity(128);

        let ok = match &response.body {
            Some(value) if response.status == StatusCode::Ok => {
                sonic_rs::to_writer(&mut buf, value).is_ok()
            }
            _ => {
                let envelope = ErrorEnvelope {
                    status: response.status.code(),
                    message: &response.message,
                };
                sonic_rs::to_writer(&mut buf, &envelope).is_ok()
            }
        };

        if !ok {
            buf = b"{\"status\":500,\"message\":\"Failed to serialize JSON\"}".to_vec();
        }

        buf.push(b'\n');
        buf
    }
}
