use crate::domain::models::{ErrorBody, JsonErr, JsonOut};
use crate::error::error_code;
use serde::Serialize;

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    text: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", text(&data));
    }
    Ok(())
}

pub fn error_envelope(err: &anyhow::Error) -> JsonErr {
    JsonErr {
        ok: false,
        error: ErrorBody {
            code: error_code(err).to_string(),
            message: err.to_string(),
        },
    }
}

/// JSON errors go to stdout so callers can parse them; text errors go to stderr.
pub fn print_error(json: bool, err: &anyhow::Error) {
    if json {
        match serde_json::to_string_pretty(&error_envelope(err)) {
            Ok(s) => println!("{}", s),
            Err(_) => eprintln!("error: {}", err),
        }
    } else {
        eprintln!("error: {}", err);
    }
}
