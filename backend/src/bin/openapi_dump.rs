//! Print the OpenAPI document as JSON.

use exercise_tracker::ApiDoc;
use utoipa::OpenApi;

#[allow(clippy::print_stdout, reason = "stdout is this tool's output channel")]
fn main() -> Result<(), serde_json::Error> {
    println!("{}", ApiDoc::openapi().to_pretty_json()?);
    Ok(())
}
