//! Per-language snippet templates.
//!
//! Header names, values and the body are interpolated as-is. A value holding
//! the target language's quote character produces invalid source.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::snippet::CodeGenOptions;

/// Shell command using curl.
pub fn curl(opts: &CodeGenOptions) -> String {
    let mut code = format!("curl -X {} \"{}\"", opts.method, opts.url());

    for (name, value) in &opts.headers {
        code.push_str(&format!(" \\\n  -H \"{}: {}\"", name, value));
    }

    if let Some(body) = opts.request_body() {
        code.push_str(&format!(" \\\n  -d '{}'", body));
    }

    code
}

/// Browser `fetch` call.
pub fn javascript(opts: &CodeGenOptions) -> String {
    let body_line = opts
        .request_body()
        .map(|body| format!("\n  body: JSON.stringify({}),", body))
        .unwrap_or_default();

    format!(
        r#"const response = await fetch("{url}", {{
  method: "{method}",
  headers: {headers},{body_line}
}});

const data = await response.json();
console.log(data);"#,
        url = opts.url(),
        method = opts.method,
        headers = headers_json_pretty(&opts.headers),
        body_line = body_line,
    )
}

/// Python `requests` call.
pub fn python(opts: &CodeGenOptions) -> String {
    let json_line = opts
        .request_body()
        .map(|body| format!("\n    json={},", body))
        .unwrap_or_default();

    format!(
        r#"import requests

response = requests.{method}(
    "{url}",
    headers={headers},{json_line}
)

print(response.json())"#,
        method = opts.method.as_lower(),
        url = opts.url(),
        headers = headers_json_compact(&opts.headers).replace('"', "'"),
        json_line = json_line,
    )
}

/// Go program using `net/http`.
pub fn go(opts: &CodeGenOptions) -> String {
    let header_lines = opts
        .headers
        .iter()
        .map(|(name, value)| format!("    req.Header.Set(\"{}\", \"{}\")", name, value))
        .collect::<Vec<_>>()
        .join("\n");

    match opts.request_body() {
        Some(body) => format!(
            r#"package main

import (
    "fmt"
    "net/http"
    "io"
    "strings"
)

func main() {{
    body := strings.NewReader(`{body}`)
    req, _ := http.NewRequest("{method}", "{url}", body)
{header_lines}

    client := &http.Client{{}}
    resp, _ := client.Do(req)
    defer resp.Body.Close()

    respBody, _ := io.ReadAll(resp.Body)
    fmt.Println(string(respBody))
}}"#,
            body = body,
            method = opts.method,
            url = opts.url(),
            header_lines = header_lines,
        ),
        None => format!(
            r#"package main

import (
    "fmt"
    "net/http"
    "io"
)

func main() {{
    req, _ := http.NewRequest("{method}", "{url}", nil)
{header_lines}

    client := &http.Client{{}}
    resp, _ := client.Do(req)
    defer resp.Body.Close()

    body, _ := io.ReadAll(resp.Body)
    fmt.Println(string(body))
}}"#,
            method = opts.method,
            url = opts.url(),
            header_lines = header_lines,
        ),
    }
}

/// Headers as a JSON object with four-space indentation.
fn headers_json_pretty(headers: &IndexMap<String, String>) -> String {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));

    match headers.serialize(&mut ser) {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(_) => "{}".to_string(),
    }
}

/// Headers as a single-line JSON object.
fn headers_json_compact(headers: &IndexMap<String, String>) -> String {
    serde_json::to_string(headers).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::HttpMethod;
    use pretty_assertions::assert_eq;

    fn create_user() -> CodeGenOptions {
        CodeGenOptions::new(HttpMethod::Post, "https://api.x.com", "/users")
            .header("Authorization", "Bearer t")
            .header("Content-Type", "application/json")
            .body(r#"{"name":"a"}"#)
    }

    #[test]
    fn curl_get_has_no_data_flag() {
        let opts = CodeGenOptions::new(HttpMethod::Get, "https://x.com", "/ping");

        assert_eq!(curl(&opts), r#"curl -X GET "https://x.com/ping""#);
    }

    #[test]
    fn curl_ignores_body_for_get_and_delete() {
        for method in [HttpMethod::Get, HttpMethod::Delete] {
            let opts = CodeGenOptions::new(method, "https://x.com", "/ping").body("{}");
            assert!(!curl(&opts).contains("-d"));
        }
    }

    #[test]
    fn curl_with_headers_and_body() {
        let expected = "curl -X POST \"https://api.x.com/users\" \\\n  \
-H \"Authorization: Bearer t\" \\\n  \
-H \"Content-Type: application/json\" \\\n  \
-d '{\"name\":\"a\"}'";

        assert_eq!(curl(&create_user()), expected);
    }

    #[test]
    fn javascript_with_body() {
        let expected = r#"const response = await fetch("https://api.x.com/users", {
  method: "POST",
  headers: {
    "Authorization": "Bearer t",
    "Content-Type": "application/json"
},
  body: JSON.stringify({"name":"a"}),
});

const data = await response.json();
console.log(data);"#;

        assert_eq!(javascript(&create_user()), expected);
    }

    #[test]
    fn javascript_without_headers_or_body() {
        let opts = CodeGenOptions::new(HttpMethod::Delete, "https://x.com", "/items/1")
            .body("ignored");

        let output = javascript(&opts);

        assert!(output.contains("method: \"DELETE\""));
        assert!(output.contains("headers: {},\n});"));
        assert!(!output.contains("JSON.stringify"));
    }

    #[test]
    fn python_with_body() {
        let expected = r#"import requests

response = requests.post(
    "https://api.x.com/users",
    headers={'Authorization':'Bearer t','Content-Type':'application/json'},
    json={"name":"a"},
)

print(response.json())"#;

        assert_eq!(python(&create_user()), expected);
    }

    #[test]
    fn python_uses_lowercase_method() {
        let opts = CodeGenOptions::new(HttpMethod::Get, "https://x.com", "/ping");

        let output = python(&opts);

        assert!(output.contains("requests.get("));
        assert!(output.contains("headers={},\n)"));
        assert!(!output.contains("json="));
    }

    #[test]
    fn go_with_body_reads_from_literal() {
        let output = go(&create_user());

        assert!(output.contains("\"strings\""));
        assert!(output.contains("body := strings.NewReader(`{\"name\":\"a\"}`)"));
        assert!(output.contains("http.NewRequest(\"POST\", \"https://api.x.com/users\", body)"));
        assert!(output.contains(
            "    req.Header.Set(\"Authorization\", \"Bearer t\")\n    req.Header.Set(\"Content-Type\", \"application/json\")"
        ));
        assert!(output.contains("respBody, _ := io.ReadAll(resp.Body)"));
    }

    #[test]
    fn go_without_body() {
        let opts = CodeGenOptions::new(HttpMethod::Get, "https://x.com", "/ping");

        let expected = r#"package main

import (
    "fmt"
    "net/http"
    "io"
)

func main() {
    req, _ := http.NewRequest("GET", "https://x.com/ping", nil)


    client := &http.Client{}
    resp, _ := client.Do(req)
    defer resp.Body.Close()

    body, _ := io.ReadAll(resp.Body)
    fmt.Println(string(body))
}"#;

        assert_eq!(go(&opts), expected);
    }

    #[test]
    fn header_order_is_preserved() {
        let opts = CodeGenOptions::new(HttpMethod::Get, "https://x.com", "/")
            .header("Zeta", "1")
            .header("Alpha", "2");

        for output in [curl(&opts), javascript(&opts), python(&opts), go(&opts)] {
            let zeta = output.find("Zeta").unwrap();
            let alpha = output.find("Alpha").unwrap();
            assert!(zeta < alpha, "headers reordered in:\n{}", output);
        }
    }

    #[test]
    fn header_objects_are_json() {
        let mut headers = IndexMap::new();
        assert_eq!(headers_json_pretty(&headers), "{}");

        headers.insert("Accept".to_string(), "text/plain".to_string());
        headers.insert("X-Id".to_string(), "7".to_string());

        assert_eq!(
            headers_json_pretty(&headers),
            "{\n    \"Accept\": \"text/plain\",\n    \"X-Id\": \"7\"\n}"
        );
        assert_eq!(
            headers_json_compact(&headers),
            r#"{"Accept":"text/plain","X-Id":"7"}"#
        );
    }
}
