//! Tests de integración para el servidor de archivos estáticos
//!
//! El servidor se levanta una sola vez dentro del proceso de test, en
//! un puerto efímero y sirviendo un directorio www de prueba, así la
//! suite es autocontenida (no hay que correr `cargo run` aparte).

use static_server::config::Config;
use static_server::server::Server;
use std::fs;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::OnceLock;
use std::thread;
use std::time::Duration;

static SERVER: OnceLock<u16> = OnceLock::new();

/// Levanta el servidor (una sola vez) y retorna su dirección
fn server_address() -> String {
    let port = SERVER.get_or_init(|| {
        // Directorio www de prueba
        let www = std::env::temp_dir().join(format!("static_server_itest_{}", std::process::id()));
        let _ = fs::remove_dir_all(&www);
        fs::create_dir_all(www.join("sub")).expect("create fixture www");

        fs::write(www.join("index.html"), "<html>root index</html>").unwrap();
        fs::write(www.join("hello.html"), "<html>hello</html>").unwrap();
        fs::write(www.join("style.css"), "body { margin: 0; }").unwrap();
        fs::write(www.join("notes.txt"), "plain notes").unwrap();
        fs::write(www.join("sub/index.html"), "<html>sub index</html>").unwrap();

        // Reservar un puerto libre y soltarlo para que lo tome el
        // servidor (SO_REUSEADDR permite el rebind inmediato)
        let probe = TcpListener::bind("127.0.0.1:0").expect("probe bind");
        let port = probe.local_addr().unwrap().port();
        drop(probe);

        let mut config = Config::default();
        config.port = port;
        config.www_dir = www.to_str().expect("utf8 www path").to_string();

        let server = Server::new(config);
        thread::spawn(move || {
            server.run().expect("server run");
        });

        // Dar tiempo al servidor a estar listo
        thread::sleep(Duration::from_millis(150));
        port
    });

    format!("127.0.0.1:{}", port)
}

/// Helper: envía bytes crudos y retorna la response completa
fn send_raw(raw: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(server_address()).expect("connect");

    // Configurar timeouts
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();
    stream
        .set_write_timeout(Some(Duration::from_secs(5)))
        .unwrap();

    stream.write_all(raw).expect("send request");
    stream.flush().unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).expect("read response");
    response
}

/// Helper: envía un GET y retorna la response como texto
fn send_request(path: &str) -> String {
    let request = format!("GET {} HTTP/1.1\r\n\r\n", path);
    String::from_utf8_lossy(&send_raw(request.as_bytes())).into_owned()
}

/// Helper: separa la response en (headers, body)
fn split_response(response: &str) -> (&str, &str) {
    match response.find("\r\n\r\n") {
        Some(pos) => (&response[..pos], &response[pos + 4..]),
        None => (response, ""),
    }
}

#[test]
fn test_get_html_file() {
    let response = send_request("/hello.html");
    let (headers, body) = split_response(&response);

    assert!(response.starts_with("HTTP/1.1 200 OK"), "got: {}", response);
    assert!(headers.contains("Content-Type: text/html"));
    assert_eq!(body, "<html>hello</html>");
}

#[test]
fn test_get_css_file() {
    let response = send_request("/style.css");
    let (headers, body) = split_response(&response);

    assert!(response.starts_with("HTTP/1.1 200 OK"));
    assert!(headers.contains("Content-Type: text/css"));
    assert_eq!(body, "body { margin: 0; }");
}

#[test]
fn test_root_serves_index() {
    let response = send_request("/");
    let (headers, body) = split_response(&response);

    assert!(response.starts_with("HTTP/1.1 200 OK"));
    assert!(headers.contains("Content-Type: text/html"));
    assert_eq!(body, "<html>root index</html>");
}

#[test]
fn test_subdirectory_trailing_slash_serves_index() {
    let response = send_request("/sub/");
    let (headers, body) = split_response(&response);

    assert!(response.starts_with("HTTP/1.1 200 OK"));
    assert!(headers.contains("Content-Type: text/html"));
    assert_eq!(body, "<html>sub index</html>");
}

#[test]
fn test_directory_without_slash_redirects() {
    let address = server_address();
    let response = send_request("/sub");
    let (headers, _body) = split_response(&response);

    assert!(response.starts_with("HTTP/1.1 302 Found"), "got: {}", response);
    assert!(
        headers.contains(&format!("Location: http://{}/sub/", address)),
        "missing Location, got: {}",
        headers
    );
}

#[test]
fn test_missing_file_returns_404() {
    let response = send_request("/missing.html");
    let (_headers, body) = split_response(&response);

    assert!(response.starts_with("HTTP/1.1 404 Not Found"), "got: {}", response);
    assert_eq!(body, "404 file not found");
}

#[test]
fn test_leading_traversal_is_contained() {
    // El prefijo /../.. se elimina y el path se resuelve bajo el www
    // de prueba, donde etc/passwd no existe
    let response = send_request("/../../etc/passwd");
    let (_headers, body) = split_response(&response);

    assert!(response.starts_with("HTTP/1.1 404 Not Found"), "got: {}", response);
    assert_eq!(body, "404 file not found");
    assert!(!response.contains("root:"));
}

#[test]
fn test_unmapped_extension_served_without_content_type() {
    let response = send_request("/notes.txt");
    let (headers, body) = split_response(&response);

    assert!(response.starts_with("HTTP/1.1 200 OK"));
    assert!(!headers.contains("Content-Type:"), "got: {}", headers);
    assert_eq!(body, "plain notes");
}

#[test]
fn test_post_returns_405_with_allow() {
    let response = send_raw(b"POST /hello.html HTTP/1.1\r\n\r\n");
    let text = String::from_utf8_lossy(&response);

    assert!(
        text.starts_with("HTTP/1.1 405 Method Not Allowed"),
        "got: {}",
        text
    );
    assert!(text.contains("Allow: GET"));
}

#[test]
fn test_malformed_request_line_returns_400() {
    // Un solo token: la request line no se puede parsear
    let response = send_raw(b"GET\r\n\r\n");
    let text = String::from_utf8_lossy(&response);

    assert!(text.starts_with("HTTP/1.1 400 Bad Request"), "got: {}", text);
    assert!(text.contains("Invalid request:"));
}

#[test]
fn test_repeated_gets_are_byte_identical() {
    let first = send_raw(b"GET /hello.html HTTP/1.1\r\n\r\n");
    let second = send_raw(b"GET /hello.html HTTP/1.1\r\n\r\n");

    assert_eq!(first, second);
}

#[test]
fn test_sequential_requests() {
    // Verificar que el servidor sigue vivo tras varios requests, buenos
    // y malos, intercalados
    for _ in 0..3 {
        assert!(send_request("/hello.html").starts_with("HTTP/1.1 200 OK"));
        assert!(send_request("/missing.html").starts_with("HTTP/1.1 404"));
    }
}
