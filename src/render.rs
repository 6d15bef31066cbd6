use html_escape::{encode_double_quoted_attribute, encode_text};
use urlencoding::encode;

use crate::api::models::SearchPage;
use crate::config::RESULTS_PER_PAGE;

/// Render the search page. Templating is deliberately plain string assembly;
/// every user- or upstream-controlled value goes through html-escape.
pub fn render_page(page: &SearchPage) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Lens Search</title>\n\
         <link rel=\"stylesheet\" href=\"/static/style.css\">\n</head>\n<body>\n",
    );

    html.push_str("<h1>Lens</h1>\n");
    html.push_str("<form method=\"post\" action=\"/\">\n");
    html.push_str(&format!(
        "<input type=\"text\" name=\"query\" value=\"{}\" list=\"suggestions\" \
         autocomplete=\"off\" placeholder=\"Search the web\">\n",
        encode_double_quoted_attribute(&page.query)
    ));
    html.push_str("<datalist id=\"suggestions\"></datalist>\n");
    html.push_str("<button type=\"submit\">Search</button>\n</form>\n");

    if let Some(error) = &page.api_error {
        html.push_str(&format!(
            "<p class=\"error\">{}</p>\n",
            encode_text(error)
        ));
    }
    if let Some(message) = &page.user_message {
        html.push_str(&format!(
            "<p class=\"message\">{}</p>\n",
            encode_text(message)
        ));
    }

    if !page.results.is_empty() {
        html.push_str("<ul class=\"results\">\n");
        for result in &page.results {
            html.push_str(&format!(
                "<li><a href=\"{url}\">{title}</a><p>{snippet}</p></li>\n",
                url = encode_double_quoted_attribute(&result.url),
                title = encode_text(&result.title),
                snippet = encode_text(&result.snippet),
            ));
        }
        html.push_str("</ul>\n");

        let page_number = (page.start - 1) / RESULTS_PER_PAGE + 1;
        html.push_str(&format!(
            "<p class=\"page-number\">Page {page_number}</p>\n"
        ));
    }

    html.push_str("<nav class=\"pagination\">\n");
    if let Some(prev) = page.prev_start {
        html.push_str(&format!(
            "<a class=\"prev\" href=\"{}\">&laquo; Previous</a>\n",
            page_href(&page.query, prev)
        ));
    }
    if let Some(next) = page.next_start {
        html.push_str(&format!(
            "<a class=\"next\" href=\"{}\">Next &raquo;</a>\n",
            page_href(&page.query, next)
        ));
    }
    html.push_str("</nav>\n");

    html.push_str(SUGGEST_SCRIPT);
    html.push_str("</body>\n</html>\n");
    html
}

/// Pagination links go through GET so the query survives in the query string.
fn page_href(query: &str, start: u32) -> String {
    format!("/?query={}&amp;start={}", encode(query), start)
}

const SUGGEST_SCRIPT: &str = r#"<script>
const input = document.querySelector('input[name="query"]');
const datalist = document.getElementById('suggestions');
input.addEventListener('input', async () => {
  const res = await fetch('/suggest?q=' + encodeURIComponent(input.value));
  const suggestions = await res.json();
  datalist.innerHTML = '';
  for (const s of suggestions) {
    const option = document.createElement('option');
    option.value = s;
    datalist.appendChild(option);
  }
});
</script>
"#;
