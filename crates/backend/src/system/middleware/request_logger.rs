use axum::body::Body;
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::Response;

/// Middleware для логирования HTTP запросов
///
/// Пишет в лог длительность, статус, метод, путь и размер ответа
/// (по заголовку Content-Length, тело не читается).
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let elapsed_ms = start.elapsed().as_millis();
    let status = response.status();
    let size = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());

    let size = size.map(format_size).unwrap_or_else(|| "-".to_string());

    if status.is_server_error() {
        tracing::error!("{:>5}ms | {:>9} | {} {:>6} {}", elapsed_ms, size, status.as_u16(), method, path);
    } else if status.is_client_error() {
        tracing::warn!("{:>5}ms | {:>9} | {} {:>6} {}", elapsed_ms, size, status.as_u16(), method, path);
    } else {
        tracing::info!("{:>5}ms | {:>9} | {} {:>6} {}", elapsed_ms, size, status.as_u16(), method, path);
    }

    response
}

/// Размер ответа в читаемом виде: "512 B", "3.4 KB", "1.2 MB"
fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let value = bytes as f64;
    if value >= MB {
        format!("{:.1} MB", value / MB)
    } else if value >= KB {
        format!("{:.1} KB", value / KB)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(3_500), "3.4 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }
}
