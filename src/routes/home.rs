#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Banner", body = String),
    ),
    tag = "Home"
)]
pub async fn home() -> &'static str {
    "🌍E-commerce🛒"
}
