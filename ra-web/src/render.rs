//! HTML rendering for the index and table pages.

use ra_data::Value;
use ra_logic::ParameterMap;
use std::fmt::Write;

/// Everything a table page shows.
pub struct TablePage<'a> {
    pub entity: &'a str,
    pub column_names: &'a [&'static str],
    pub column_codes: &'a [&'static str],
    pub rows: &'a [Vec<Value>],
    /// Parameters received with the request, echoed under the table.
    pub params: &'a ParameterMap,
    pub notice: Option<&'a str>,
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{body}</body>\n</html>\n",
        escape(title)
    )
}

pub fn index_page(entities: &[&str]) -> String {
    let mut body = String::from("<h1>RedditAnalytic</h1>\n<ul>\n");
    for name in entities {
        let name = escape(name);
        let _ = writeln!(body, "<li><a href=\"/{name}\">{name}</a></li>");
    }
    body.push_str("</ul>\n");
    document("RedditAnalytic", &body)
}

pub fn table_page(page: &TablePage<'_>) -> String {
    let entity = escape(page.entity);
    let mut body = String::new();

    if let Some(notice) = page.notice {
        let _ = writeln!(body, "<p class=\"notice\">{}</p>", escape(notice));
    }

    let _ = writeln!(body, "<table border=\"1\">\n<caption>{entity} Table</caption>");
    body.push_str("<tr>");
    for name in page.column_names {
        let _ = write!(body, "<th>{}</th>", escape(name));
    }
    body.push_str("</tr>\n");
    for row in page.rows {
        body.push_str("<tr>");
        for cell in row {
            let _ = write!(body, "<td>{}</td>", escape(&cell.to_string()));
        }
        body.push_str("</tr>\n");
    }
    body.push_str("</table>\n");

    let _ = writeln!(body, "<form method=\"post\" action=\"/{entity}\">");
    for (code, name) in page.column_codes.iter().zip(page.column_names) {
        if *code == "id" {
            continue;
        }
        let code = escape(code);
        let _ = writeln!(
            body,
            "<label for=\"{code}\">{}</label>\n<input type=\"text\" id=\"{code}\" name=\"{code}\">",
            escape(name)
        );
    }
    body.push_str("<input type=\"submit\" value=\"Add\">\n</form>\n");

    body.push_str("<pre>\n");
    for (key, values) in page.params.iter() {
        let shown = match values {
            Some(values) => format!("[{}]", values.join(", ")),
            None => "null".to_string(),
        };
        let _ = writeln!(body, "Key={}, Value/s={}", escape(key), escape(&shown));
    }
    body.push_str("</pre>\n");

    document(&format!("{} Table", page.entity), &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("<a href='x'>&</a>"), "&lt;a href=&#39;x&#39;&gt;&amp;&lt;/a&gt;");
    }

    #[test]
    fn test_table_page_layout() {
        let params = ParameterMap::new().with("name", ["a", "b"]);
        let rows = vec![vec![Value::Int(1), Value::from("<rust>")]];
        let html = table_page(&TablePage {
            entity: "Subreddit",
            column_names: &["ID", "Name"],
            column_codes: &["id", "name"],
            rows: &rows,
            params: &params,
            notice: None,
        });

        assert!(html.contains("<caption>Subreddit Table</caption>"));
        assert!(html.contains("<tr><th>ID</th><th>Name</th></tr>"));
        assert!(html.contains("<tr><td>1</td><td>&lt;rust&gt;</td></tr>"));
        assert!(html.contains("name=\"name\""));
        assert!(!html.contains("name=\"id\""));
        assert!(html.contains("Key=name, Value/s=[a, b]"));
    }

    #[test]
    fn test_index_links_every_entity() {
        let html = index_page(&["Subreddit", "Post"]);
        assert!(html.contains("<a href=\"/Subreddit\">Subreddit</a>"));
        assert!(html.contains("<a href=\"/Post\">Post</a>"));
    }
}
