//! # Static Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor de archivos estáticos.
//!
//! La configuración se toma de argumentos CLI y variables de entorno;
//! los valores por defecto sirven `./www` en `127.0.0.1:8080`.

use static_server::config::Config;
use static_server::server::Server;

fn main() {
    println!("=================================");
    println!("  RedUnix Static Web Server");
    println!("  Principios de Sistemas Operativos");
    println!("=================================\n");

    // Crear configuración (CLI args + env vars)
    let config = Config::new();

    if let Err(e) = config.validate() {
        eprintln!("💥 Configuración inválida: {}", e);
        std::process::exit(2);
    }

    config.print_summary();

    // Crear el servidor
    let server = Server::new(config);

    // Iniciar el servidor (esto bloqueará el thread)
    if let Err(e) = server.run() {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}
