use axum::response::Html;

pub async fn home() -> Html<&'static str> {
    Html(include_str!("../../templates/index.html"))
}

pub async fn about() -> Html<&'static str> {
    Html(include_str!("../../templates/about.html"))
}

pub async fn contact() -> Html<&'static str> {
    Html(include_str!("../../templates/contact.html"))
}
