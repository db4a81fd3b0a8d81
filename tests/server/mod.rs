use actix_web::{App, HttpResponse, HttpServer, web};

pub const WELL_OPTIMIZED_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Handmade Oak Furniture for Every Room in Your Home</title>
  <meta name="description" content="Browse handmade oak tables, chairs and shelves built to last for generations, with free delivery across the country.">
  <meta name="keywords" content="oak furniture, handmade tables, wooden chairs">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <link rel="canonical" href="https://furniture.example/">
  <link rel="preload" href="/fonts/serif.woff2" as="font">
</head>
<body>
  <h1>Handmade Oak Furniture</h1>
  <h2>Dining Tables</h2>
  <p>Every dining table is cut from sustainably sourced oak and finished by hand.</p>
  <h2>Chairs and Benches</h2>
  <p>Our chairs are shaped for comfort during long dinners with family and friends.</p>
  <img src="/images/tables/oak-dining-table.jpg" alt="Oak dining table set for six people">
</body>
</html>"#;

pub const BARE_PAGE: &str = r#"<html><body><h1>Home</h1></body></html>"#;

pub async fn get_test_server_url() -> String {
    let http_server = HttpServer::new(|| {
        App::new()
            .route(
                "/",
                web::get().to(|| async { html_response(WELL_OPTIMIZED_PAGE) }),
            )
            .route("/bare", web::get().to(|| async { html_response(BARE_PAGE) }))
            .route(
                "/not-found",
                web::get().to(|| async { HttpResponse::NotFound().body("Not Found") }),
            )
            .route(
                "/server-error",
                web::get().to(|| async { HttpResponse::InternalServerError().body("Error") }),
            )
            .route(
                "/plain",
                web::get().to(|| async {
                    HttpResponse::Ok()
                        .content_type("text/plain")
                        .body("just some words without any markup")
                }),
            )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("Failed to bind test server");

    let addr = http_server
        .addrs()
        .first()
        .cloned()
        .expect("No address bound");
    let url = format!("http://{}", addr);

    let app_server = http_server.run();

    tokio::spawn(async move {
        if let Err(e) = app_server.await {
            eprintln!("Test server error: {}", e);
        }
    });

    url
}

fn html_response(body: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}
