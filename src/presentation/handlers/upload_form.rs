use axum::response::Html;

use crate::presentation::views;

pub async fn upload_form_handler() -> Html<String> {
    Html(views::upload_form())
}
