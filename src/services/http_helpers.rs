use actix_web::HttpResponseBuilder;

use crate::constants::CORS_HEADERS;

/// Attaches the fixed CORS header set to a response under construction.
pub fn with_cors(builder: &mut HttpResponseBuilder) -> &mut HttpResponseBuilder {
    for (name, value) in CORS_HEADERS {
        builder.insert_header((name, value));
    }
    builder
}
