//! # Despacho de Requests
//! src/handler/mod.rs
//!
//! Este módulo dirige cada request parseado al handler de su método.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → dispatch → handler del método → Response
//! ```
//!
//! El conjunto de métodos es cerrado (solo GET), así que el despacho es
//! un `match` exhaustivo: agregar un método nuevo obliga a darle un
//! handler. Los métodos no soportados nunca llegan acá; se rechazan al
//! parsear con 405.

use crate::http::{Method, Request, Response};

pub mod static_files;

pub use static_files::StaticFiles;

/// Nombre con el que el servidor se identifica en el header `Server`
pub const SERVER_NAME: &str = "RedUnix-Static/0.1";

/// Dirige el request al handler de su método y agrega los headers
/// comunes a la respuesta
///
/// # Ejemplo
/// ```
/// use static_server::config::Config;
/// use static_server::handler::{self, StaticFiles};
/// use static_server::http::Request;
///
/// let static_files = StaticFiles::new(&Config::default());
///
/// let raw = b"GET /index.html HTTP/1.1\r\n\r\n";
/// let request = Request::parse(raw).unwrap();
/// let response = handler::dispatch(&request, &static_files);
/// ```
pub fn dispatch(request: &Request, static_files: &StaticFiles) -> Response {
    let mut response = match request.method() {
        Method::Get => static_files.handle_get(request),
    };

    add_common_headers(&mut response);
    response
}

/// Agrega headers comunes a todas las respuestas despachadas
fn add_common_headers(response: &mut Response) {
    response.add_header("Server", SERVER_NAME);
    response.add_header("Connection", "close");
}
