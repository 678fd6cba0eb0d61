//! Static page layout: nav with the theme toggle, the app root and the footer.

use axum::{extract::State, http::StatusCode, response::Html, routing::get, Router};
use chrono::{Datelike, Utc};
use flyeasy_store::Theme;

use crate::state::AppState;

pub const POPULAR_DESTINATIONS: [(&str, &str); 8] = [
    ("New York", "/flights/new-york"),
    ("London", "/flights/london"),
    ("Tokyo", "/flights/tokyo"),
    ("Paris", "/flights/paris"),
    ("Dubai", "/flights/dubai"),
    ("Sydney", "/flights/sydney"),
    ("Rome", "/flights/rome"),
    ("Singapore", "/flights/singapore"),
];

const TOGGLE_SCRIPT: &str = r#"<script>
document.getElementById('theme-toggle').addEventListener('click', function () {
  fetch('/v1/theme/toggle', { method: 'POST' });
});
new EventSource('/v1/theme/events').addEventListener('theme', function () {
  window.location.reload();
});
</script>"#;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render(state.theme.current(), &home_main(state.theme.current()), Utc::now().year()))
}

pub async fn not_found(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    let theme = state.theme.current();
    let palette = theme.palette();
    let main = format!(
        r#"<section class="flex flex-col items-center py-24">
  <h1 class="text-4xl font-bold {heading}">404</h1>
  <p class="mt-4 {muted}">Page not found</p>
  <a href="/" class="mt-6 text-blue-500">Back to search</a>
</section>"#,
        heading = palette.heading,
        muted = palette.muted_text,
    );
    (StatusCode::NOT_FOUND, Html(render(theme, &main, Utc::now().year())))
}

fn home_main(theme: Theme) -> String {
    let palette = theme.palette();
    format!(
        r#"<section class="{page} min-h-full py-12">
  <h1 class="text-3xl font-bold text-center {heading}">Find your next flight</h1>
  <div id="app" class="mx-auto mt-8 max-w-5xl rounded-xl shadow-lg p-6 {card}" data-api="/v1/page"></div>
</section>"#,
        page = palette.page,
        heading = palette.heading,
        card = palette.card,
    )
}

/// Full document in `theme` around `main`.
pub fn render(theme: Theme, main: &str, year: i32) -> String {
    let palette = theme.palette();
    let toggle_label = if theme.is_dark() { "Light mode" } else { "Dark mode" };
    let destinations: String = POPULAR_DESTINATIONS
        .iter()
        .map(|(name, path)| {
            format!(r#"<a href="{path}" class="text-slate-500 hover:text-slate-700">{name}</a>"#)
        })
        .collect::<Vec<_>>()
        .join("\n        ");

    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="{root}">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>FlyEasy</title>
</head>
<body class="flex flex-col min-h-screen">
  <nav class="flex items-center justify-between px-8 py-4 border-b {nav}">
    <a href="/" class="text-xl font-bold">FlyEasy</a>
    <button id="theme-toggle" class="rounded-full px-4 py-2 {control}">{toggle_label}</button>
  </nav>
  <main class="flex-grow">
{main}
  </main>
  <footer class="bg-slate-100 px-8 py-10">
    <p class="text-slate-600 max-w-xs">Find and compare flights with ease. FlyEasy helps you discover the best deals on airfare worldwide.</p>
    <h3 class="text-lg font-semibold mt-6 mb-4 text-slate-700">Popular Destinations</h3>
    <div class="grid grid-cols-2 md:grid-cols-4 gap-3">
        {destinations}
    </div>
    <p class="pt-6 border-t border-slate-200 text-slate-500 text-sm">&copy; {year} FlyEasy. All rights reserved.</p>
  </footer>
  {script}
</body>
</html>"#,
        root = palette.root,
        nav = palette.nav,
        control = palette.control,
        script = TOGGLE_SCRIPT,
    )
}
