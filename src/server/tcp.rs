//! # Servidor TCP Secuencial
//! src/server/tcp.rs
//!
//! Implementación del servidor TCP que atiende una conexión a la vez.
//! Cada conexión pasa por los estados:
//!
//! ```text
//! Idle → Reading → Dispatching → Responding → Closed
//! ```
//!
//! La lectura es bloqueante pero acotada: por el tamaño fijo del buffer
//! y por el timeout de lectura configurado. Un error en una conexión se
//! registra y el loop de accept continúa.

use crate::config::Config;
use crate::handler::{self, StaticFiles};
use crate::http::{ParseError, Request, Response, StatusCode};
use socket2::{Domain, Protocol, Socket, Type};
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use std::time::Duration;

/// Tamaño fijo del buffer de lectura del request
///
/// Solo interesa la request line; lo que no quepa acá se ignora.
const REQUEST_BUFFER_SIZE: usize = 1024;

/// Servidor HTTP/1.1 secuencial de archivos estáticos
pub struct Server {
    config: Config,
    static_files: StaticFiles,
}

impl Server {
    /// Crea el servidor con su handler de archivos estáticos
    ///
    /// El handler (tabla de content types y regex de sanitización
    /// incluidos) se construye una sola vez acá, no por request.
    pub fn new(config: Config) -> Self {
        let static_files = StaticFiles::new(&config);
        Self {
            config,
            static_files,
        }
    }

    /// Inicia el loop de accept (bloquea el thread)
    pub fn run(&self) -> std::io::Result<()> {
        let address = self.config.address();
        println!("[*] Iniciando servidor en {}", address);

        let listener = bind_reusable(&address)?;
        println!("[+] Servidor escuchando en {}", address);
        println!("[*] Modo secuencial: una conexión a la vez\n");

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    // Un request malo afecta solo a su conexión, nunca
                    // al listener
                    if let Err(e) = self.handle_connection(stream) {
                        eprintln!("   ❌ Error en la conexión: {}", e);
                    }
                }
                Err(e) => {
                    eprintln!("   ❌ Error al aceptar conexión: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Atiende una conexión completa: lee, despacha, responde y cierra
    fn handle_connection(&self, mut stream: TcpStream) -> std::io::Result<()> {
        let timeout = Duration::from_millis(self.config.read_timeout_ms);
        stream.set_read_timeout(Some(timeout))?;
        stream.set_write_timeout(Some(timeout))?;

        let mut buffer = [0u8; REQUEST_BUFFER_SIZE];
        let bytes_read = stream.read(&mut buffer)?;

        if bytes_read == 0 {
            // El peer cerró sin enviar nada
            println!("   ✅ Conexión cerrada por el peer");
            return Ok(());
        }

        let response = self.build_response(&buffer[..bytes_read]);

        stream.write_all(&response.to_bytes())?;
        stream.flush()?;

        println!("   ✅ {}\n", response.status());
        Ok(())
    }

    /// Construye la respuesta para los bytes leídos del socket
    fn build_response(&self, data: &[u8]) -> Response {
        match Request::parse(data) {
            Ok(request) => {
                println!("   ✅ {} {}", request.method().as_str(), request.path());
                handler::dispatch(&request, &self.static_files)
            }
            Err(ParseError::UnsupportedMethod(method)) => {
                // Branch explícito: el método no está en el conjunto
                // soportado, se responde en vez de cerrar en silencio
                println!("   ❌ Método no soportado: {}", method);
                Response::error(StatusCode::MethodNotAllowed, "method not allowed")
                    .with_header("Allow", "GET")
            }
            Err(e) => {
                println!("   ❌ Parse error: {}", e);
                Response::error(StatusCode::BadRequest, &format!("Invalid request: {}", e))
            }
        }
    }
}

/// Crea un TcpListener con SO_REUSEADDR habilitado
///
/// El bind directo de `std::net::TcpListener` no expone la opción, así
/// que el socket se arma con socket2 y se convierte al tipo de std.
fn bind_reusable(address: &str) -> std::io::Result<TcpListener> {
    let addr: SocketAddr = address.to_socket_addrs()?.next().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("address did not resolve: {}", address),
        )
    })?;

    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    // SO_REUSEADDR: permite re-bindear el puerto en TIME_WAIT al
    // reiniciar el servidor
    socket.set_reuse_address(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    Ok(socket.into())
}
