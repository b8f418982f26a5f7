use axum::{
    extract::State,
    response::{sse::Event, IntoResponse, Response, Sse},
};
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

use super::report_handler::ReportState;

/// Stream report changes as server-sent events
///
/// Emits one JSON event per report insert, update or delete. Clients
/// fetch the list once, then apply events on top of it.
#[utoipa::path(
    get,
    path = "/api/reports/stream",
    responses(
        (status = 200, description = "SSE stream of report events", content_type = "text/event-stream")
    ),
    tag = "reports"
)]
pub async fn stream_reports(State(state): State<ReportState>) -> Response {
    let rx = state.events.subscribe();

    // Convert the broadcast receiver to an SSE stream
    let stream = BroadcastStream::new(rx).filter_map(|event| match event {
        Ok(event) => serde_json::to_string(&event)
            .ok()
            .map(|data| Ok::<_, std::convert::Infallible>(Event::default().data(data))),
        // A client that fell behind resumes with the next event
        Err(BroadcastStreamRecvError::Lagged(skipped)) => {
            tracing::debug!("SSE subscriber lagged, skipped {} events", skipped);
            None
        }
    });

    // Return SSE response with keepalive
    let sse = Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(std::time::Duration::from_secs(15))
            .text("ping"),
    );

    sse.into_response()
}
