//! Fake transports shared by the behavior tests.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use shiptrack_core::{
    HttpClient, HttpError, HttpErrorKind, HttpRequest, HttpResponse, IdentifierRule,
    IdentifierValidator, RemoteSource, TrackingResolver,
};

pub const BASE_URL: &str = "https://tracker.example";

/// Scripted outcome for a fake transport call.
#[derive(Debug, Clone)]
pub enum Reply {
    Respond(HttpResponse),
    Fail(HttpErrorKind),
    Stall(Duration),
}

/// Records every request and answers with a fixed reply.
pub struct ScriptedHttpClient {
    reply: Reply,
    calls: AtomicUsize,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedHttpClient {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn status(status: u16, body: &str) -> Arc<Self> {
        Self::new(Reply::Respond(HttpResponse::new(status, body)))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().expect("lock").last().cloned()
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().expect("lock").push(request);
        let reply = self.reply.clone();

        Box::pin(async move {
            match reply {
                Reply::Respond(response) => Ok(response),
                Reply::Fail(kind) => Err(HttpError::new(kind, "scripted transport failure")),
                Reply::Stall(duration) => {
                    tokio::time::sleep(duration).await;
                    Ok(HttpResponse::ok_json(r#"{"packages":[]}"#))
                }
            }
        })
    }
}

pub fn remote_resolver(
    client: Arc<ScriptedHttpClient>,
    credential: Option<&str>,
    timeout: Duration,
) -> TrackingResolver {
    let source = RemoteSource::with_http_client(client, BASE_URL, credential).with_timeout(timeout);
    TrackingResolver::with_source(
        Arc::new(source),
        IdentifierValidator::new(IdentifierRule::default()),
    )
}

/// Remote payload for one package, with unredacted personal fields.
pub fn package_json(tracking_id: &str) -> serde_json::Value {
    serde_json::json!({
        "packageKey": 555000111,
        "trackingId": tracking_id,
        "datePartition": 20250810,
        "serviceType": "EXPRESS",
        "customerReference": "REF-REMOTE",
        "originCountry": "DE",
        "originCity": "Hamburg",
        "originFacility": "HAM1",
        "destinationCountry": "NL",
        "destinationCity": "Amsterdam",
        "destinationFacility": "AMS3",
        "senderName": "Erika Mustermann",
        "senderContact": "erika@example.test",
        "recipientName": "Jan Jansen",
        "recipientContact": "+31 20 000 0000",
        "dispatchDate": "2025-08-10T07:30:00",
        "itemCount": 1,
        "packageContents": "BOOKS",
        "currency": "EUR",
        "declaredValue": 42.5,
        "declaredWeight": 1.0,
        "actualWeight": 1.1,
        "items": [{
            "itemId": "ITM000111",
            "itemWeightDeclared": 1.0,
            "itemWeightActual": 1.1,
            "itemDescription": "Hardcover",
            "statusUpdates": [
                {"statusCode": "ARR", "statusTimestamp": "2025-08-10T08:00:00", "statusLocation": "HAM1", "statusRemarks": "Arrived at origin facility"},
                {"statusCode": "DEP", "statusTimestamp": "2025-08-11T06:00:00", "statusLocation": "HAM1", "statusRemarks": "Departed from origin facility"},
                {"statusCode": "DEL", "statusTimestamp": "2025-08-12T15:00:00", "statusLocation": "AMS3", "statusRemarks": "Delivered"}
            ]
        }],
        "statusUpdates": [
            {"statusCode": "ARR", "statusTimestamp": "2025-08-10T08:00:00", "statusLocation": "HAM1", "statusRemarks": "Arrived at origin facility"},
            {"statusCode": "DEP", "statusTimestamp": "2025-08-11T06:00:00", "statusLocation": "HAM1", "statusRemarks": "Departed from origin facility"},
            {"statusCode": "DEL", "statusTimestamp": "2025-08-12T15:00:00", "statusLocation": "AMS3", "statusRemarks": "Delivered"}
        ]
    })
}

pub fn lookup_body(packages: Vec<serde_json::Value>) -> String {
    serde_json::json!({ "packages": packages }).to_string()
}
