use std::io::{self, Read};

use serde_json::json;
use tracing::{error, Instrument};

use interpretation_agent::{interpret_request, InterpretationError};
use shared_types::{
    ActionError, ActionRequest, ActionResponse, ActionResult, Interpretation, InterpretationRequestV1,
    InterpretationSource, API_VERSION_CURRENT,
};

const INTERPRET_ACTION: &str = "interpret";

#[tokio::main]
async fn main() {
    platform::init_logging("interpretation_agent");

    // 1. Read JSON ActionRequest from STDIN
    let mut buffer = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buffer) {
        error!(error = %e, "failed to read request from stdin");
        return;
    }

    let request: ActionRequest = match serde_json::from_str(&buffer) {
        Ok(req) => req,
        Err(e) => {
            error!(error = %e, "failed to parse ActionRequest");
            return;
        }
    };

    // 2. Process request
    let correlation_id = platform::ensure_correlation_id(request.correlation_id);
    let span = platform::correlation_span(correlation_id, &request.action);
    let outcome = handle(&request).instrument(span).await;

    // 3. Write JSON ActionResponse to STDOUT
    let response = match outcome {
        Ok(result) => ActionResponse {
            request_id: request.request_id,
            api_version: Some(API_VERSION_CURRENT),
            status: "success".to_string(),
            code: 0,
            result: Some(result),
            error: None,
            correlation_id: Some(correlation_id),
        },
        Err(err) => ActionResponse {
            request_id: request.request_id,
            api_version: Some(API_VERSION_CURRENT),
            status: "error".to_string(),
            code: err.code,
            result: None,
            error: Some(err),
            correlation_id: Some(correlation_id),
        },
    };

    match serde_json::to_string(&response) {
        Ok(json) => print!("{}", json),
        Err(e) => error!(error = %e, "failed to serialize response"),
    }
}

async fn handle(request: &ActionRequest) -> Result<ActionResult, ActionError> {
    if request.action != INTERPRET_ACTION {
        return Err(bad_request(format!("unknown action: {}", request.action)));
    }

    let interpretation_request: InterpretationRequestV1 =
        serde_json::from_value(request.payload.0.clone())
            .map_err(|e| bad_request(format!("invalid interpret payload: {e}")))?;

    let output = interpret_request(&interpretation_request)
        .await
        .map_err(action_error)?;

    let interpretation = Interpretation {
        source: InterpretationSource::Generated,
        output,
    };
    let data = serde_json::to_string(&interpretation).map_err(|e| ActionError {
        code: 500,
        message: "SERIALIZATION_FAILED".to_string(),
        detail: e.to_string(),
        raw_output: None,
    })?;

    Ok(ActionResult {
        output_type: "interpretation".to_string(),
        data,
        metadata: Some(json!({
            "model": interpretation_request.config.model_name,
            "purpose": interpretation_request.purpose,
        })),
    })
}

fn bad_request(detail: String) -> ActionError {
    ActionError {
        code: 400,
        message: "INVALID_REQUEST".to_string(),
        detail,
        raw_output: None,
    }
}

fn action_error(err: InterpretationError) -> ActionError {
    ActionError {
        code: err.status_code(),
        message: err.code().to_string(),
        detail: err.to_string(),
        raw_output: err.raw_output().map(str::to_string),
    }
}
