//! # Parsing de la Request Line
//! src/http/request.rs
//!
//! Este módulo implementa el parser del request HTTP desde cero.
//!
//! Del request solo interesa la primera línea:
//!
//! ```text
//! GET /index.html HTTP/1.1\r\n
//! Host: localhost:8080\r\n
//! \r\n
//! ```
//!
//! Se extraen los dos primeros tokens (método y path). La versión HTTP,
//! si viene, se guarda pero no se valida; los headers y el body se
//! ignoran por completo.

/// Métodos HTTP soportados
///
/// El conjunto es cerrado: el servidor solo atiende GET. Cualquier otro
/// método se rechaza al parsear con [`ParseError::UnsupportedMethod`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Obtener un recurso
    Get,
}

impl Method {
    /// Parsea un método HTTP desde un string
    ///
    /// # Errores
    ///
    /// Retorna error si el método no es soportado
    fn from_str(s: &str) -> Result<Self, ParseError> {
        match s {
            "GET" => Ok(Method::Get),
            _ => Err(ParseError::UnsupportedMethod(s.to_string())),
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
        }
    }
}

/// Representa la request line parseada
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Método HTTP (solo GET)
    method: Method,

    /// Path pedido (ej: "/index.html")
    path: String,

    /// Token de versión HTTP, si vino (no se valida)
    version: Option<String>,
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Request vacío (o solo whitespace)
    EmptyRequest,

    /// El request no es UTF-8 válido
    InvalidEncoding,

    /// La request line tiene menos de dos tokens
    InvalidRequestLine,

    /// Método HTTP no soportado
    UnsupportedMethod(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptyRequest => write!(f, "Empty request"),
            ParseError::InvalidEncoding => write!(f, "Request is not valid UTF-8"),
            ParseError::InvalidRequestLine => write!(f, "Invalid request line format"),
            ParseError::UnsupportedMethod(m) => write!(f, "Unsupported HTTP method: {}", m),
        }
    }
}

impl std::error::Error for ParseError {}

impl Request {
    /// Parsea un request HTTP desde los bytes leídos del socket
    ///
    /// # Argumentos
    ///
    /// * `buffer` - Bytes crudos del request (hasta el tamaño del buffer de lectura)
    ///
    /// # Retorna
    ///
    /// * `Ok(Request)` - Request line parseada exitosamente
    /// * `Err(ParseError)` - Error durante el parsing
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use static_server::http::Request;
    ///
    /// let raw = b"GET /index.html HTTP/1.1\r\nHost: localhost\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.path(), "/index.html");
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        // Convertir a string (validando que sea UTF-8 válido)
        let request_str =
            std::str::from_utf8(buffer).map_err(|_| ParseError::InvalidEncoding)?;

        // El buffer llega crudo del socket: quitar whitespace alrededor
        let request_str = request_str.trim();

        if request_str.is_empty() {
            return Err(ParseError::EmptyRequest);
        }

        // Solo interesa la primera línea; el resto se ignora
        let request_line = request_str.lines().next().ok_or(ParseError::EmptyRequest)?;

        Self::parse_request_line(request_line)
    }

    /// Parsea la request line (primera línea del request)
    ///
    /// Formato: `GET /path HTTP/1.1` (la versión es opcional)
    fn parse_request_line(line: &str) -> Result<Self, ParseError> {
        let parts: Vec<&str> = line.split_whitespace().collect();

        // Se necesitan al menos método y path
        if parts.len() < 2 {
            return Err(ParseError::InvalidRequestLine);
        }

        let method = Method::from_str(parts[0])?;
        let path = parts[1].to_string();
        let version = parts.get(2).map(|v| (*v).to_string());

        Ok(Request {
            method,
            path,
            version,
        })
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> Method {
        self.method
    }

    /// Obtiene el path del request
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene el token de versión HTTP, si vino en la request line
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}
