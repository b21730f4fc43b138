// SPDX-License-Identifier: GPL-3.0-only

use reqwest::StatusCode;

/// Failures of the data layer. The `Display` output is what the views show to the user.
#[derive(Debug, thiserror::Error)]
pub enum DexError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid response JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Response not successful: Received status code {}", status.as_u16())]
    Status { status: StatusCode },

    #[error("{0}")]
    GraphQl(String),

    #[error("the server returned no data")]
    EmptyResponse,

    #[error("response is missing the required field `{0}`")]
    MissingField(&'static str),
}
