//! Assembles the natural-language prompt sent to the generation service.
//!
//! Everything in this module is pure string work: given the blueprint
//! (models + endpoints) and the per-request [`GenerationOptions`], it
//! produces one deterministic instruction text asking for a single-file
//! Express.js server. No I/O happens here, so the output can be asserted
//! byte-for-byte in tests.

use crate::app::blueprint::{Endpoint, Model};

/// Feature switches captured when a generation is triggered. Not persisted;
/// re-read from the UI checkboxes on every request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Back the generated server with MongoDB instead of in-memory arrays
    pub use_database: bool,

    /// Protect the generated endpoints with bearer-token middleware
    pub use_auth: bool,
}

/// Data-layer instruction used when [`GenerationOptions::use_database`] is off.
pub const IN_MEMORY_DATA_LAYER: &str = "The server must use Express.js and manage data in-memory using simple JavaScript arrays.";

/// Data-layer instruction used when [`GenerationOptions::use_database`] is on.
pub const MONGO_DATA_LAYER: &str = "The server must use Express.js with MongoDB through Mongoose: define a Mongoose schema for every data model, perform all database operations with async/await, wrap each handler body in try/catch so database failures return a 500 JSON error, and connect using the MONGODB_URI environment variable.";

/// Appended only when [`GenerationOptions::use_auth`] is on.
pub const AUTH_REQUIREMENTS: &str = "Authentication:
Protect every endpoint with a bearer token middleware. Read the expected token from the API_SECRET environment variable, require an `Authorization: Bearer <token>` header on every request, and respond with 401 Unauthorized when the header is missing or the token does not match.";

/// Keeps the response parseable as plain source code.
pub const OUTPUT_CONSTRAINT: &str = "Do NOT include a package.json file, installation instructions, markdown formatting, or any text other than the pure JavaScript code for `server.js`.";

/// The generated file must open with exactly this statement.
pub const MANDATED_FIRST_LINE: &str = "const express = require('express');";

/// Builds the full generation prompt from the current blueprint.
///
/// Pure and deterministic: identical inputs produce identical strings.
/// Exactly one of the two data-layer variants appears; the authentication
/// block appears only when requested.
pub fn build_server_prompt(
    models: &[Model],
    endpoints: &[Endpoint],
    options: GenerationOptions,
) -> String {
    let model_blocks = models
        .iter()
        .map(model_block)
        .collect::<Vec<_>>()
        .join("\n");
    let endpoint_blocks = endpoints
        .iter()
        .map(endpoint_block)
        .collect::<Vec<_>>()
        .join("\n\n");

    let data_layer = if options.use_database {
        MONGO_DATA_LAYER
    } else {
        IN_MEMORY_DATA_LAYER
    };

    let mut prompt = format!(
        "You are an expert backend engineer specializing in Node.js and Express.js.
Your task is to generate a single, complete, and runnable `server.js` file.
{data_layer}
{OUTPUT_CONSTRAINT}

Data Models:
{model_blocks}

API Endpoints:
{endpoint_blocks}
"
    );

    if options.use_auth {
        prompt.push('\n');
        prompt.push_str(AUTH_REQUIREMENTS);
        prompt.push('\n');
    }

    prompt.push('\n');
    prompt.push_str(&requirements_section(options));
    prompt
}

/// One labeled block per model: name plus `fieldName: fieldType` pairs.
fn model_block(model: &Model) -> String {
    let fields = model
        .fields
        .iter()
        .map(|f| format!("{}: {}", f.name, f.field_type))
        .collect::<Vec<_>>()
        .join(", ");
    format!("- Model: {}\n  Fields: {}", model.name, fields)
}

/// One labeled block per endpoint: method, path, and description.
fn endpoint_block(endpoint: &Endpoint) -> String {
    format!(
        "- Method: {}\n  Path: {}\n  Description: {}",
        endpoint.method, endpoint.path, endpoint.description
    )
}

/// The fixed structural-requirements list. Items 2 and 5 follow the chosen
/// data layer; everything else is identical for every request.
fn requirements_section(options: GenerationOptions) -> String {
    let storage = if options.use_database {
        "For each model, define a Mongoose schema and model, and perform every read and write through it."
    } else {
        "For each model, create an in-memory array to store the data (e.g., `let users = [];`)."
    };
    let ids = if options.use_database {
        "Let MongoDB assign document ids; do not generate ids by hand."
    } else {
        "For creating new items, generate a simple unique ID (e.g., using a counter or Date.now())."
    };

    format!(
        "Requirements:
1. Initialize an Express app.
2. {storage}
3. Implement all the specified API endpoints.
4. Include body parsing for POST/PUT requests: `app.use(express.json());`.
5. {ids}
6. Return appropriate JSON responses with correct status codes (200, 201, 204, 404, 400).
7. Start the server on `process.env.PORT || 3000` and log the chosen port on startup.
8. The entire output must be a single block of valid JavaScript code, starting with `{MANDATED_FIRST_LINE}`."
    )
}
