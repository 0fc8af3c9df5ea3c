//! # Servido de Archivos Estáticos
//! src/handler/static_files.rs
//!
//! Implementación del handler de GET: sanitización del path, resolución
//! contra el directorio base y construcción de la respuesta.
//!
//! ## Pipeline de un GET
//!
//! 1. Sanitizar el path (strip de secuencias `/..` al inicio)
//! 2. Concatenar con el directorio base
//! 3. Path terminado en `/` → servir su `index.html`
//! 4. Path que es un directorio → 302 a la forma con `/` final
//! 5. Leer el archivo; cualquier fallo de I/O colapsa a 404
//! 6. Content-Type según la extensión ({html, css})

use crate::config::Config;
use crate::http::{mime, Request, Response, StatusCode};
use regex::Regex;
use std::fs;
use std::path::Path;

/// Body literal de la respuesta 404
const NOT_FOUND_BODY: &str = "404 file not found";

/// Patrón de traversal anclado al inicio del path: un `.` opcional
/// seguido de uno o más segmentos `/..`
///
/// El strip es solo de prefijo, a propósito: secuencias `/../` en medio
/// del path ("/foo/../../x") NO se tocan. Es la semántica exacta del
/// servidor original; la limitación está documentada en DESIGN.md.
const TRAVERSAL_PATTERN: &str = r"^\.?(/\.\.)+";

/// Handler de archivos estáticos
///
/// Se construye una sola vez al arrancar el servidor: el regex de
/// sanitización se compila acá y se reutiliza en cada request.
pub struct StaticFiles {
    /// Directorio base del que se sirven los archivos
    base_dir: String,

    /// URL base para el header `Location` de los redirects
    base_url: String,

    /// Regex compilado del patrón de traversal
    traversal: Regex,
}

impl StaticFiles {
    /// Crea el handler a partir de la configuración del servidor
    pub fn new(config: &Config) -> Self {
        Self {
            base_dir: config.www_dir.clone(),
            base_url: config.base_url(),
            // El patrón es una constante conocida: si no compila es un
            // bug del programa, no un error de runtime
            traversal: Regex::new(TRAVERSAL_PATTERN).expect("invalid traversal pattern"),
        }
    }

    /// Sanitiza el path del request
    ///
    /// Si el path tiene uno o más `/..` al inicio (con un `.` opcional
    /// antes), se eliminan en una sola sustitución anclada.
    ///
    /// # Ejemplo
    /// ```
    /// use static_server::config::Config;
    /// use static_server::handler::StaticFiles;
    ///
    /// let files = StaticFiles::new(&Config::default());
    /// assert_eq!(files.sanitize("/../../etc/passwd"), "/etc/passwd");
    /// assert_eq!(files.sanitize("/index.html"), "/index.html");
    /// ```
    pub fn sanitize(&self, path: &str) -> String {
        self.traversal.replace(path, "").into_owned()
    }

    /// Atiende un request GET
    ///
    /// Resuelve el path sanitizado contra el directorio base y retorna:
    /// - 200 con el contenido del archivo (Content-Type según extensión)
    /// - 302 si el path es un directorio sin `/` final
    /// - 404 si el archivo no existe o no se puede leer
    pub fn handle_get(&self, request: &Request) -> Response {
        let sub_path = self.sanitize(request.path());
        let mut file_path = format!("{}{}", self.base_dir, sub_path);

        if file_path.ends_with('/') {
            // Un directorio pedido con `/` final sirve su index.html
            file_path.push_str("index.html");
        } else if Path::new(&file_path).is_dir() {
            // Directorio sin `/` final: redirect a la forma canónica
            let location = format!("{}{}/", self.base_url, sub_path);
            return Response::new(StatusCode::Found).with_header("Location", &location);
        }

        // Cualquier fallo de lectura (inexistente, sin permisos, I/O)
        // colapsa al mismo 404; no se distinguen subtipos
        match fs::read(&file_path) {
            Ok(contents) => {
                let extension = Path::new(&file_path)
                    .extension()
                    .and_then(|e| e.to_str());

                let mut response = Response::new(StatusCode::Ok).with_body_bytes(contents);
                if let Some(content_type) = mime::content_type_for(extension) {
                    response.add_header("Content-Type", content_type);
                }
                response
            }
            Err(_) => Response::new(StatusCode::NotFound).with_body(NOT_FOUND_BODY),
        }
    }
}
