//! Server-rendered HTML pages

mod pages;

pub use pages::{render_areas, render_error, render_index, IndexPage};

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// OpenWeatherMap icon URL for an icon code such as "10d"
pub fn icon_url(icon_code: &str) -> String {
    format!(
        "https://openweathermap.org/img/wn/{}@2x.png",
        escape_html(icon_code)
    )
}

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #eef2f7; color: #1d2733; }
main { max-width: 760px; margin: 0 auto; padding: 2rem 1rem; }
form { display: flex; gap: .5rem; margin-bottom: 1.5rem; }
input[type=text] { flex: 1; padding: .6rem; font-size: 1rem; }
button, .button { padding: .6rem 1rem; background: #1d4f91; color: #fff; border: 0; border-radius: 4px; text-decoration: none; }
.card { background: #fff; border-radius: 8px; padding: 1rem 1.25rem; margin-bottom: 1rem; }
.danger { border-left: 6px solid #c0392b; }
.rainy { border-left: 6px solid #2e86c1; }
.sunny { border-left: 6px solid #f1c40f; }
.cloudy { border-left: 6px solid #95a5a6; }
.snowy { border-left: 6px solid #d6eaf8; }
.default { border-left: 6px solid #5d6d7e; }
.row { display: flex; gap: .75rem; flex-wrap: wrap; }
.row .card { flex: 1; min-width: 120px; text-align: center; }
.error { color: #c0392b; }
.insight { font-style: italic; }
"#;

/// Wrap page content in the shared document shell
pub(crate) fn layout(title: &str, body_class: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body class="{body_class}">
<main>
{content}
</main>
</body>
</html>
"#,
        title = escape_html(title),
        body_class = escape_html(body_class),
    )
}
