//! # Static Server
//! src/lib.rs
//!
//! Servidor HTTP/1.1 de archivos estáticos implementado desde cero.
//! Atiende una conexión a la vez (modelo secuencial): cada request se
//! procesa completa antes de aceptar la siguiente conexión.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Parsing de la request line y construcción de responses HTTP
//! - `handler`: Despacho por método y servido de archivos estáticos
//! - `server`: Lógica del servidor TCP y manejo de conexiones
//! - `config`: Configuración vía CLI y variables de entorno
//!
//! ## Ejemplo de uso
//!
//! ```ignore
//! use static_server::config::Config;
//! use static_server::server::Server;
//!
//! let config = Config::default();
//! let server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod handler;
pub mod http;
pub mod server;
