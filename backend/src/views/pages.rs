use shared::{areas, AreaWeather, Category, ForecastRecord, WeatherRecord};

use super::{escape_html, icon_url, layout};
use crate::services::CityReport;

/// View data for the search page
#[derive(Debug, Default)]
pub struct IndexPage {
    /// City as typed by the user
    pub city: Option<String>,
    pub report: Option<CityReport>,
    pub error: Option<String>,
}

pub fn render_index(page: &IndexPage) -> String {
    let mut content = String::from("<h1>UK Weather</h1>\n");
    content.push_str(&search_form(page.city.as_deref().unwrap_or_default()));

    if let Some(error) = &page.error {
        content.push_str(&format!(
            "<p class=\"error\">{}</p>\n",
            escape_html(error)
        ));
    }

    let body_class = match &page.report {
        Some(report) => {
            content.push_str(&current_card(&report.weather));

            if report.has_areas {
                content.push_str(&format!(
                    "<p><a class=\"button\" href=\"/areas/{}\">View Areas</a></p>\n",
                    escape_html(&areas::canonical_city_name(&report.weather.query_name))
                ));
            }

            if !report.previous.is_empty() {
                content.push_str("<h2>Previous</h2>\n");
                content.push_str(&day_row(&report.previous));
            }
            if !report.forecast.is_empty() {
                content.push_str("<h2>Forecast</h2>\n");
                content.push_str(&day_row(&report.forecast));
            }

            report.weather.category.label()
        }
        None => Category::Default.label(),
    };

    layout("UK Weather", body_class, &content)
}

pub fn render_areas(result: &AreaWeather) -> String {
    let mut content = format!("<h1>Areas of {}</h1>\n", escape_html(&result.city));

    if result.areas.is_empty() {
        content.push_str("<p>No area data is available right now.</p>\n");
    }
    for record in &result.areas {
        content.push_str(&area_card(record));
    }
    content.push_str("<p><a href=\"/\">Go Back</a></p>\n");

    layout(
        &format!("{} areas", result.city),
        result.dominant_category.label(),
        &content,
    )
}

pub fn render_error(message: &str) -> String {
    let content = format!(
        "<p class=\"error\">{}</p>\n<p><a href=\"/\">Go Back</a></p>\n",
        escape_html(message)
    );
    layout("UK Weather", Category::Default.label(), &content)
}

fn search_form(city: &str) -> String {
    format!(
        r#"<form method="post" action="/">
<input type="text" name="city" placeholder="Enter a UK city" value="{}" required>
<button type="submit">Search</button>
</form>
"#,
        escape_html(city)
    )
}

fn current_card(record: &WeatherRecord) -> String {
    let trend = record
        .trend
        .as_deref()
        .map(|t| format!("<p class=\"trend\">{}</p>\n", escape_html(t)))
        .unwrap_or_default();

    format!(
        r#"<section class="card {category}">
<h2>{name}</h2>
<img src="{icon}" alt="{description}">
<p class="temp">{temp}°C</p>
<p>{description}</p>
<p>Humidity {humidity}% &middot; Wind {wind} {unit}</p>
{trend}<p class="insight">{insight}</p>
</section>
"#,
        category = record.category.label(),
        name = escape_html(&record.display_name),
        icon = icon_url(&record.icon_code),
        description = escape_html(&record.title_description()),
        temp = record.temperature_celsius,
        humidity = record.humidity_percent,
        wind = record.wind_speed,
        unit = record.wind_unit,
        trend = trend,
        insight = escape_html(&record.insight),
    )
}

fn area_card(record: &WeatherRecord) -> String {
    format!(
        r#"<section class="card {category}">
<h2>{name}</h2>
<img src="{icon}" alt="{description}">
<p class="temp">{temp}°C &middot; {description}</p>
<p>Humidity {humidity}% &middot; Wind {wind} {unit}</p>
</section>
"#,
        category = record.category.label(),
        name = escape_html(&record.display_name),
        icon = icon_url(&record.icon_code),
        description = escape_html(&record.title_description()),
        temp = record.temperature_celsius,
        humidity = record.humidity_percent,
        wind = record.wind_speed,
        unit = record.wind_unit,
    )
}

fn day_row(days: &[ForecastRecord]) -> String {
    let mut row = String::from("<div class=\"row\">\n");
    for day in days {
        let description = day.description.as_deref().unwrap_or_default();
        row.push_str(&format!(
            r#"<div class="card">
<h3>{day}</h3>
<img src="{icon}" alt="{description}">
<p>{temp}°C</p>
<p>{description}</p>
</div>
"#,
            day = escape_html(&day.day),
            icon = icon_url(&day.icon_code),
            description = escape_html(description),
            temp = day.temperature_celsius,
        ));
    }
    row.push_str("</div>\n");
    row
}
