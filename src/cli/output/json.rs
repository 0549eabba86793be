use serde::Serialize;

use crate::error::HelpError;
use crate::types::Outline;

#[derive(Serialize)]
struct JsonQuery<'a> {
    status: &'static str,
    keyword: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

#[derive(Serialize)]
struct JsonCheck<'a> {
    status: &'static str,
    file: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    outline: Option<&'a Outline>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

fn build_query<'a>(result: &'a Result<String, HelpError>, keyword: &'a str) -> JsonQuery<'a> {
    match result {
        Ok(help) => JsonQuery {
            status: "found",
            keyword,
            output: Some(help.as_str()),
            message: None,
        },
        Err(err) => JsonQuery {
            status: err.code(),
            keyword,
            output: None,
            message: Some(err.to_string()),
        },
    }
}

fn build_check<'a>(result: &'a Result<Outline, HelpError>, file: &'a str) -> JsonCheck<'a> {
    match result {
        Ok(outline) => JsonCheck {
            status: "ok",
            file,
            outline: Some(outline),
            message: None,
        },
        Err(err) => JsonCheck {
            status: err.code(),
            file,
            outline: None,
            message: Some(err.to_string()),
        },
    }
}

pub fn render_query(result: &Result<String, HelpError>, keyword: &str) {
    let output = build_query(result, keyword);
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

pub fn render_check(result: &Result<Outline, HelpError>, file: &str) {
    let output = build_check(result, file);
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
