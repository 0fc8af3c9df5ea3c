//! # Mapeo de Content-Type
//!
//! Retorna el Content-Type correspondiente según la extensión del archivo.
//!
//! La tabla es fija e inmutable: se resuelve en tiempo de compilación y
//! nunca se reconstruye por request. El servidor solo conoce los tipos
//! que sirve (HTML y CSS); para cualquier otra extensión no se emite
//! header Content-Type.

/// Obtiene el Content-Type según la extensión del archivo
///
/// # Ejemplo
/// ```
/// use static_server::http::mime::content_type_for;
/// assert_eq!(content_type_for(Some("html")), Some("text/html"));
/// assert_eq!(content_type_for(Some("css")), Some("text/css"));
/// assert_eq!(content_type_for(Some("txt")), None);
/// assert_eq!(content_type_for(None), None);
/// ```
pub fn content_type_for(extension: Option<&str>) -> Option<&'static str> {
    match extension {
        Some("html") => Some("text/html"),
        Some("css") => Some("text/css"),
        _ => None,
    }
}
