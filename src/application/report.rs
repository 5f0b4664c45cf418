//! HTML report rendering for extracted resorts

use std::collections::BTreeMap;

use super::extraction::Resort;

/// Column order for rendered tables
pub const COLUMNS: [&str; 6] = [
    "Resort Name",
    "Country",
    "Description",
    "Star Rating",
    "Price",
    "Main Picture",
];

/// Render a batch as an HTML table. Picture cells become inline
/// images when the value looks like a URL. Empty input renders
/// nothing at all.
pub fn render_table(resorts: &[Resort]) -> String {
    if resorts.is_empty() {
        return String::new();
    }

    let mut table = String::from("<table>");
    table.push_str("<tr>");
    for column in COLUMNS {
        table.push_str(&format!("<th>{column}</th>"));
    }
    table.push_str("</tr>");

    for resort in resorts {
        table.push_str("<tr>");
        for value in [
            &resort.name,
            &resort.country,
            &resort.description,
            &resort.star_rating,
            &resort.price,
        ] {
            table.push_str(&format!("<td>{value}</td>"));
        }
        if resort.main_picture.starts_with("http") {
            table.push_str(&format!(
                "<td><img src=\"{}\" alt=\"{}\" width=\"100\" style=\"max-height:100px;object-fit:cover;\"></td>",
                resort.main_picture, resort.name
            ));
        } else {
            table.push_str(&format!("<td>{}</td>", resort.main_picture));
        }
        table.push_str("</tr>");
    }

    table.push_str("</table>");
    table
}

/// Group every extracted resort by country and render one table per
/// country, countries sorted alphabetically.
pub fn consolidate_by_country(resorts: &[Resort]) -> String {
    if resorts.is_empty() {
        return "<p>No resort data was collected to consolidate.</p>".to_string();
    }

    let mut grouped: BTreeMap<&str, Vec<Resort>> = BTreeMap::new();
    for resort in resorts {
        grouped
            .entry(resort.country.as_str())
            .or_default()
            .push(resort.clone());
    }

    let mut html = String::from("<h2>All Extracted Resorts by Country</h2>");
    for (country, group) in grouped {
        html.push_str(&format!("<h3>{country}</h3>"));
        html.push_str(&render_table(&group));
    }
    html
}
